mod handlers;

use actix_web::{web, Scope};

pub use finance_repo::user_repo::UserId;

pub fn user_service() -> Scope {
    web::scope("/user").service(handlers::get_current_user)
}
