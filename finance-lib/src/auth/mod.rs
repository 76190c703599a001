use crate::user::UserId;
use actix_web::dev::ServiceRequest;
use actix_web::error::ErrorInternalServerError;
use actix_web::{web, Error, HttpMessage, Scope};
use actix_web_httpauth::extractors::bearer::BearerAuth;
use actix_web_httpauth::extractors::{bearer, AuthenticationError};
use actix_web_httpauth::headers::www_authenticate::bearer::Bearer;
use jwt::JWTAuth;
use tracing::error;
use tracing_actix_web::RootSpan;

pub mod credentials;
mod handlers;
pub mod jwt;
pub mod password;

pub use handlers::UserCredentials;

/// Validates credentials using [JWTAuth]. If valid, injects the user id into request and into the
/// [RootSpan]
pub async fn credentials_validator(
    req: ServiceRequest,
    credentials: BearerAuth,
) -> Result<ServiceRequest, (Error, ServiceRequest)> {
    let Some(jwt_auth) = req.app_data::<JWTAuth>().cloned() else {
        error!("JWTAuth missing from app data");
        return Err((ErrorInternalServerError("authentication not configured"), req));
    };
    if let Ok(user) = jwt_auth.validate_token(credentials.token()) {
        if let Some(root_span) = req.extensions().get::<RootSpan>() {
            root_span.record("user_id", user);
        }
        req.extensions_mut().insert::<UserId>(user);
        Ok(req)
    } else {
        let challenge = Bearer::build().error(bearer::Error::InvalidToken).finish();
        Err((AuthenticationError::new(challenge).into(), req))
    }
}

/// Login and, if enabled, signup routes. These are not behind the bearer middleware.
pub fn auth_service(signups_enabled: bool) -> Scope {
    let scope = web::scope("/auth").service(handlers::get_token);
    if signups_enabled {
        scope.service(handlers::signup)
    } else {
        scope
    }
}
