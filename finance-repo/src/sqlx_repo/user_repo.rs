use crate::sqlx_repo::SQLxRepo;
use crate::user_repo::{NewUser, User, UserId, UserRepo, UserRepoError};
use anyhow::Context;
use async_trait::async_trait;
use sqlx::{query_as, query_scalar};
use tracing::instrument;

#[derive(sqlx::FromRow)]
struct UserEntry {
    id: i64,
    username: String,
    password_hash: String,
}

impl From<UserEntry> for User {
    fn from(value: UserEntry) -> Self {
        User::new(value.id, value.username, value.password_hash)
    }
}

#[async_trait]
impl UserRepo for SQLxRepo {
    #[instrument(skip(self))]
    async fn get_user(&self, user_id: UserId) -> Result<User, UserRepoError> {
        let user: Option<UserEntry> =
            query_as("SELECT id, username, password_hash FROM users WHERE id = ?")
                .bind(user_id)
                .fetch_optional(&self.pool)
                .await
                .with_context(|| format!("Unable to get user {}", user_id))?;
        user.map(|u| u.into())
            .ok_or_else(|| UserRepoError::UserNotFound(user_id.to_string()))
    }

    #[instrument(skip(self))]
    async fn get_user_by_username(&self, username: &str) -> Result<User, UserRepoError> {
        let user: Option<UserEntry> =
            query_as("SELECT id, username, password_hash FROM users WHERE username = ?")
                .bind(username)
                .fetch_optional(&self.pool)
                .await
                .with_context(|| format!("Unable to get user {}", username))?;
        user.map(|u| u.into())
            .ok_or_else(|| UserRepoError::UserNotFound(username.to_owned()))
    }

    #[instrument(skip(self, new_user), fields(username = %new_user.username))]
    async fn create_user(&self, new_user: NewUser) -> Result<User, UserRepoError> {
        let id: Option<i64> = query_scalar(
            "INSERT INTO users(username, password_hash) VALUES (?, ?) ON CONFLICT(username) DO NOTHING RETURNING id",
        )
        .bind(&new_user.username)
        .bind(&new_user.password_hash)
        .fetch_optional(&self.pool)
        .await
        .with_context(|| format!("Unable to create user {}", new_user.username))?;

        match id {
            Some(id) => Ok(new_user.to_user(id)),
            None => Err(UserRepoError::UserAlreadyExists(new_user.username)),
        }
    }
}
