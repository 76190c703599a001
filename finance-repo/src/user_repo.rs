use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;

pub type UserId = i64;

#[async_trait]
pub trait UserRepo: Sync + Send {
    async fn get_user(&self, user_id: UserId) -> Result<User, UserRepoError>;
    async fn get_user_by_username(&self, username: &str) -> Result<User, UserRepoError>;
    async fn create_user(&self, new_user: NewUser) -> Result<User, UserRepoError>;
}

#[derive(Serialize, Clone, PartialEq, Debug)]
pub struct User {
    pub id: UserId,
    pub username: String,
    #[serde(skip)]
    pub password_hash: String,
}

impl User {
    pub fn new(id: UserId, username: String, password_hash: String) -> User {
        User {
            id,
            username,
            password_hash,
        }
    }
}

#[derive(Clone, Debug)]
pub struct NewUser {
    pub username: String,
    pub password_hash: String,
}

impl NewUser {
    pub fn new(username: String, password_hash: String) -> NewUser {
        NewUser {
            username,
            password_hash,
        }
    }

    pub fn to_user(self, id: UserId) -> User {
        User::new(id, self.username, self.password_hash)
    }
}

#[derive(Error, Debug)]
pub enum UserRepoError {
    #[error("User {0} not found")]
    UserNotFound(String),
    #[error("User {0} already exists")]
    UserAlreadyExists(String),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
