use crate::auth::jwt::JWTAuth;
use actix_web::error::{InternalError, JsonPayloadError};
use actix_web::web::{Data, ServiceConfig};
use actix_web::{web, HttpResponse};
use actix_web_httpauth::middleware::HttpAuthentication;
use finance_repo::transaction_repo::TransactionRepo;
use finance_repo::user_repo::UserRepo;
use std::sync::Arc;
use ::tracing::error;

pub mod auth;
pub mod config;
mod error;
pub mod tracing;
pub mod transaction;
pub mod user;

pub use error::HandlerError;

/// Registers repos, auth and every service on an app. Routes under `/transactions` and `/user`
/// require a bearer token.
pub fn app_config_func(
    jwt_auth: JWTAuth,
    user_repo: Arc<dyn UserRepo>,
    transaction_repo: Arc<dyn TransactionRepo>,
    signups_enabled: bool,
) -> impl FnOnce(&mut ServiceConfig) {
    move |cfg| {
        let bearer_auth_middleware = HttpAuthentication::bearer(auth::credentials_validator);
        cfg.app_data(jwt_auth)
            .app_data(Data::new(user_repo))
            .app_data(Data::new(transaction_repo))
            .app_data(json_config())
            .service(transaction::transaction_service().wrap(bearer_auth_middleware.clone()))
            .service(user::user_service().wrap(bearer_auth_middleware))
            .service(auth::auth_service(signups_enabled));
    }
}

/// Turns JSON deserialization failures into a 400 with the parser's message.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, req| {
        error!(req_path = req.path(), %err);
        match err {
            JsonPayloadError::Deserialize(deserialize_err) => {
                let error_body = serde_json::json!({
                    "error": "Unable to parse JSON payload",
                    "detail": format!("{}", deserialize_err),
                });
                InternalError::from_response(
                    deserialize_err,
                    HttpResponse::BadRequest()
                        .content_type("application/json")
                        .body(error_body.to_string()),
                )
                .into()
            }
            _ => err.into(),
        }
    })
}
