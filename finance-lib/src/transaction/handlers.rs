use crate::error::HandlerError;
use crate::user::UserId;
use actix_web::{get, post, web, HttpResponse, Responder};
use finance_repo::transaction_repo::TransactionRepo;
use rust_decimal::Decimal;
use std::sync::Arc;
use tracing::info;

use super::TransactionRequest;

#[post("")]
pub async fn create_new_transaction(
    transaction_repo: web::Data<Arc<dyn TransactionRepo>>,
    user_id: web::ReqData<UserId>,
    request: web::Json<TransactionRequest>,
) -> Result<impl Responder, HandlerError> {
    let request = request.into_inner();
    if request.amount <= Decimal::ZERO {
        return Err(HandlerError::InvalidInput(
            "amount must be greater than zero".to_owned(),
        ));
    }

    let transaction = super::append(
        &***transaction_repo,
        user_id.into_inner(),
        request.amount,
        request.category,
        request.transaction_type,
    )
    .await?;
    info!(transaction_id = transaction.id, "Transaction added");

    Ok(HttpResponse::Ok().json(transaction))
}

#[get("")]
pub async fn get_all_transactions(
    transaction_repo: web::Data<Arc<dyn TransactionRepo>>,
    user_id: web::ReqData<UserId>,
) -> Result<impl Responder, HandlerError> {
    let transactions = transaction_repo
        .get_all_transactions(user_id.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(transactions))
}

#[get("/balance")]
pub async fn get_balance(
    transaction_repo: web::Data<Arc<dyn TransactionRepo>>,
    user_id: web::ReqData<UserId>,
) -> Result<impl Responder, HandlerError> {
    let balance = transaction_repo.get_balance(user_id.into_inner()).await?;
    Ok(HttpResponse::Ok().json(balance))
}
