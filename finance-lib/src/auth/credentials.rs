//! Registration and login against a [UserRepo]. Only argon2 hashes are stored.

use crate::auth::password::{self, PasswordError};
use crate::user::UserId;
use finance_repo::user_repo::{NewUser, UserRepo, UserRepoError};
use thiserror::Error;
use tracing::{info, instrument};

#[derive(Error, Debug)]
pub enum CredentialError {
    #[error("Username {0} already exists")]
    DuplicateUsername(String),
    #[error(transparent)]
    Password(#[from] PasswordError),
    #[error(transparent)]
    Storage(UserRepoError),
}

/// Creates a user and returns its id. A taken username is reported as
/// [CredentialError::DuplicateUsername].
#[instrument(skip(user_repo, password))]
pub async fn register(
    user_repo: &dyn UserRepo,
    username: String,
    password: String,
) -> Result<UserId, CredentialError> {
    let password_hash = password::hash_password(&password)?;

    match user_repo
        .create_user(NewUser::new(username, password_hash))
        .await
    {
        Ok(user) => {
            info!(user_id = user.id, "Registered user");
            Ok(user.id)
        }
        Err(UserRepoError::UserAlreadyExists(username)) => {
            Err(CredentialError::DuplicateUsername(username))
        }
        Err(e) => Err(CredentialError::Storage(e)),
    }
}

/// Returns the id of the user if `password` matches. Unknown usernames and wrong passwords both
/// give `Ok(None)`.
#[instrument(skip(user_repo, password))]
pub async fn authenticate(
    user_repo: &dyn UserRepo,
    username: &str,
    password: String,
) -> Result<Option<UserId>, CredentialError> {
    let user = match user_repo.get_user_by_username(username).await {
        Ok(user) => user,
        Err(UserRepoError::UserNotFound(_)) => return Ok(None),
        Err(e) => return Err(CredentialError::Storage(e)),
    };

    if password::verify_password(&password, &user.password_hash)? {
        Ok(Some(user.id))
    } else {
        Ok(None)
    }
}
