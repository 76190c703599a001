use crate::auth::credentials::CredentialError;
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use finance_repo::transaction_repo::TransactionRepoError;
use finance_repo::user_repo::UserRepoError;
use serde_json::json;
use thiserror::Error;
use tracing::error;

#[derive(Error, Debug)]
pub enum HandlerError {
    #[error(transparent)]
    UserRepo(#[from] UserRepoError),
    #[error(transparent)]
    TransactionRepo(#[from] TransactionRepoError),
    #[error(transparent)]
    Credential(#[from] CredentialError),
    #[error("{0}")]
    InvalidInput(String),
    #[error(transparent)]
    Token(#[from] jsonwebtoken::errors::Error),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ResponseError for HandlerError {
    fn status_code(&self) -> StatusCode {
        match self {
            HandlerError::UserRepo(UserRepoError::UserNotFound(_)) => StatusCode::NOT_FOUND,
            HandlerError::UserRepo(UserRepoError::UserAlreadyExists(_)) => StatusCode::CONFLICT,
            HandlerError::TransactionRepo(TransactionRepoError::UserNotFound(_)) => {
                StatusCode::NOT_FOUND
            }
            HandlerError::Credential(CredentialError::DuplicateUsername(_)) => StatusCode::CONFLICT,
            HandlerError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        let message = if status.is_server_error() {
            error!(error = ?self, "Request failed");
            "Internal server error".to_owned()
        } else {
            self.to_string()
        };
        HttpResponse::build(status).json(json!({ "error": message }))
    }
}
