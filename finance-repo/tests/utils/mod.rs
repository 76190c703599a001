#![allow(dead_code)]

pub mod generator;

use finance_repo::transaction_repo::TransactionRepo;
use finance_repo::user_repo::{NewUser, UserId, UserRepo};
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

#[derive(Debug)]
pub enum RepoType {
    SQLx,
    Mem,
}

pub async fn build_repos(repo_type: RepoType) -> (Arc<dyn UserRepo>, Arc<dyn TransactionRepo>) {
    match repo_type {
        RepoType::SQLx => finance_repo::sqlx_repo::create_repos("sqlite::memory:", 1)
            .await
            .unwrap(),
        RepoType::Mem => finance_repo::mem_repo::create_repos(),
    }
}

pub fn unique_username() -> String {
    "test-user-".to_owned() + &Uuid::new_v4().to_string()
}

pub struct TestUser {
    pub id: UserId,
    pub username: String,
}

impl TestUser {
    pub async fn new(user_repo: &Arc<dyn UserRepo>) -> TestUser {
        let username = unique_username();
        let user = user_repo
            .create_user(NewUser::new(username.clone(), "not a real hash".to_owned()))
            .await
            .unwrap();
        info!(%username, user_id = user.id, "Created user");
        TestUser {
            id: user.id,
            username,
        }
    }
}
