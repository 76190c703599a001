//! Argon2id password hashes in the PHC string format.

use argon2::{Config, Variant};
use thiserror::Error;

const SALT_LEN: usize = 32;

#[derive(Error, Debug)]
pub enum PasswordError {
    #[error("Unable to hash password")]
    Hash(#[source] argon2::Error),
    #[error("Stored password hash cannot be read")]
    MalformedHash(#[source] argon2::Error),
}

pub fn hash_password(password: &str) -> Result<String, PasswordError> {
    let config = Config {
        variant: Variant::Argon2id,
        ..Config::default()
    };
    let salt: [u8; SALT_LEN] = rand::random();
    argon2::hash_encoded(password.as_bytes(), &salt, &config).map_err(PasswordError::Hash)
}

/// A wrong password is `Ok(false)`. A stored hash that does not decode is an error, so a damaged
/// row is never reported as a failed login.
pub fn verify_password(password: &str, password_hash: &str) -> Result<bool, PasswordError> {
    argon2::verify_encoded(password_hash, password.as_bytes())
        .map_err(PasswordError::MalformedHash)
}

#[cfg(test)]
mod tests {
    use super::{hash_password, verify_password, PasswordError};

    #[test]
    fn verify_matching_password() {
        let hash = hash_password("hunter2").unwrap();
        assert!(verify_password("hunter2", &hash).unwrap());
    }

    #[test]
    fn verify_wrong_password() {
        let hash = hash_password("hunter2").unwrap();
        assert!(!verify_password("hunter3", &hash).unwrap());
    }

    #[test]
    fn hashes_are_salted_argon2id() {
        let first = hash_password("hunter2").unwrap();
        let second = hash_password("hunter2").unwrap();
        assert_ne!(first, second);
        assert!(first.starts_with("$argon2id$"));
        assert!(!first.contains("hunter2"));
    }

    #[test]
    fn malformed_hash() {
        let result = verify_password("hunter2", "hunter2");
        assert!(matches!(result, Err(PasswordError::MalformedHash(_))));
    }
}
