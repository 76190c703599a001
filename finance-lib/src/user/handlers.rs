use crate::error::HandlerError;
use crate::user::UserId;
use actix_web::{get, web, HttpResponse, Responder};
use finance_repo::user_repo::UserRepo;
use std::sync::Arc;

#[get("")]
pub async fn get_current_user(
    user_repo: web::Data<Arc<dyn UserRepo>>,
    user_id: web::ReqData<UserId>,
) -> Result<impl Responder, HandlerError> {
    let user = user_repo.get_user(user_id.into_inner()).await?;
    Ok(HttpResponse::Ok().json(user))
}
