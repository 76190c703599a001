use crate::auth::credentials;
use crate::auth::jwt::JWTAuth;
use crate::error::HandlerError;
use crate::user::UserId;
use actix_web::{post, web, HttpRequest, HttpResponse, Responder};
use anyhow::anyhow;
use finance_repo::user_repo::UserRepo;
use serde::Deserialize;
use serde::Serialize;
use std::sync::Arc;
use tracing::info;

#[derive(Serialize, Deserialize)]
pub struct UserCredentials {
    pub username: String,
    pub password: String,
}

#[derive(Serialize)]
struct SignupResponse {
    id: UserId,
}

#[post("/signup")]
pub async fn signup(
    user_repo: web::Data<Arc<dyn UserRepo>>,
    credentials: web::Json<UserCredentials>,
) -> Result<impl Responder, HandlerError> {
    let credentials = credentials.into_inner();
    if credentials.username.trim().is_empty() || credentials.password.is_empty() {
        return Err(HandlerError::InvalidInput(
            "username and password must not be empty".to_owned(),
        ));
    }
    // "alice" and " alice" would otherwise be two accounts
    if credentials.username.trim() != credentials.username {
        return Err(HandlerError::InvalidInput(
            "username must not start or end with whitespace".to_owned(),
        ));
    }

    let id =
        credentials::register(&***user_repo, credentials.username, credentials.password).await?;

    Ok(HttpResponse::Ok().json(SignupResponse { id }))
}

#[post("/get_token")]
pub async fn get_token(
    user_repo: web::Data<Arc<dyn UserRepo>>,
    credentials: web::Json<UserCredentials>,
    req: HttpRequest,
) -> Result<impl Responder, HandlerError> {
    let credentials = credentials.into_inner();

    let user_id =
        credentials::authenticate(&***user_repo, &credentials.username, credentials.password)
            .await?;

    let Some(user_id) = user_id else {
        info!(username = %credentials.username, "Login failed");
        return Ok(HttpResponse::Unauthorized().finish());
    };

    let jwt_auth = req
        .app_data::<JWTAuth>()
        .ok_or_else(|| anyhow!("JWTAuth missing from app data"))?;
    Ok(HttpResponse::Ok().body(jwt_auth.create_token(user_id)?))
}
