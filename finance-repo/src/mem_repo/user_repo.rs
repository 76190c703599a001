use crate::user_repo::UserRepoError::{UserAlreadyExists, UserNotFound};
use crate::user_repo::{NewUser, User, UserId, UserRepo, UserRepoError};
use anyhow::anyhow;
use async_trait::async_trait;
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

struct State {
    users: HashMap<UserId, User>,
    usernames: HashMap<String, UserId>,
    next_id: UserId,
}

pub struct MemUserRepo {
    state: RwLock<State>,
}

impl MemUserRepo {
    pub fn new() -> MemUserRepo {
        let state = State {
            users: HashMap::new(),
            usernames: HashMap::new(),
            next_id: 1,
        };
        MemUserRepo {
            state: RwLock::new(state),
        }
    }

    pub fn contains(&self, user_id: UserId) -> Result<bool, anyhow::Error> {
        Ok(self.read_lock()?.users.contains_key(&user_id))
    }

    fn read_lock(&self) -> Result<RwLockReadGuard<State>, anyhow::Error> {
        self.state
            .read()
            .map_err(|_| anyhow!("Unable to acquire lock"))
    }

    fn write_lock(&self) -> Result<RwLockWriteGuard<State>, anyhow::Error> {
        self.state
            .write()
            .map_err(|_| anyhow!("Unable to acquire lock"))
    }
}

#[async_trait]
impl UserRepo for MemUserRepo {
    async fn get_user(&self, user_id: UserId) -> Result<User, UserRepoError> {
        let read_guard = self.read_lock()?;

        read_guard
            .users
            .get(&user_id)
            .cloned()
            .ok_or_else(|| UserNotFound(user_id.to_string()))
    }

    async fn get_user_by_username(&self, username: &str) -> Result<User, UserRepoError> {
        let read_guard = self.read_lock()?;

        let Some(user_id) = read_guard.usernames.get(username) else {
            return Err(UserNotFound(username.to_owned()));
        };
        let user = read_guard
            .users
            .get(user_id)
            .expect("users should contain same ids as usernames")
            .clone();
        Ok(user)
    }

    async fn create_user(&self, new_user: NewUser) -> Result<User, UserRepoError> {
        let mut write_guard = self.write_lock()?;

        let id = write_guard.next_id;
        match write_guard.usernames.entry(new_user.username.clone()) {
            Entry::Occupied(_) => return Err(UserAlreadyExists(new_user.username)),
            Entry::Vacant(e) => {
                e.insert(id);
            }
        }
        write_guard.next_id += 1;

        let user = new_user.to_user(id);
        write_guard.users.insert(id, user.clone());

        Ok(user)
    }
}
