mod handlers;

use crate::user::UserId;
use actix_web::{web, Scope};
use finance_repo::transaction_repo::{
    Category, NewTransaction, Transaction, TransactionRepo, TransactionRepoError, TransactionType,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

pub fn transaction_service() -> Scope {
    web::scope("/transactions")
        .service(handlers::create_new_transaction)
        .service(handlers::get_all_transactions)
        .service(handlers::get_balance)
}

/// Body of a transaction submission. The date is not part of it, the ledger stamps the current
/// date.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct TransactionRequest {
    pub amount: Decimal,
    pub category: Category,
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
}

impl TransactionRequest {
    pub fn new(
        amount: Decimal,
        category: Category,
        transaction_type: TransactionType,
    ) -> TransactionRequest {
        TransactionRequest {
            amount,
            category,
            transaction_type,
        }
    }
}

/// Appends a transaction dated today to the ledger of `user_id`.
pub async fn append(
    transaction_repo: &dyn TransactionRepo,
    user_id: UserId,
    amount: Decimal,
    category: Category,
    transaction_type: TransactionType,
) -> Result<Transaction, TransactionRepoError> {
    let new_transaction = NewTransaction::today(amount, category, transaction_type);
    transaction_repo
        .create_new_transaction(user_id, new_transaction)
        .await
}
