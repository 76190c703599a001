use crate::sqlx_repo::SQLxRepo;
use crate::transaction_repo::TransactionRepoError::UserNotFound;
use crate::transaction_repo::{
    Balance, NewTransaction, Transaction, TransactionRepo, TransactionRepoError,
};
use crate::user_repo::UserId;
use anyhow::Context;
use async_trait::async_trait;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use sqlx::{query_as, query_scalar};
use std::str::FromStr;
use tracing::instrument;

#[derive(sqlx::FromRow)]
struct TransactionEntry {
    id: i64,
    user_id: i64,
    amount: String,
    category: String,
    #[sqlx(rename = "type")]
    transaction_type: String,
    date: NaiveDate,
}

impl TryFrom<TransactionEntry> for Transaction {
    type Error = anyhow::Error;

    fn try_from(value: TransactionEntry) -> Result<Self, Self::Error> {
        let amount = Decimal::from_str(&value.amount)
            .with_context(|| format!("Invalid amount in transaction {}", value.id))?;
        Ok(Transaction::new(
            value.id,
            value.user_id,
            amount,
            value.category.parse()?,
            value.transaction_type.parse()?,
            value.date,
        ))
    }
}

#[async_trait]
impl TransactionRepo for SQLxRepo {
    #[instrument(skip(self, new_transaction))]
    async fn create_new_transaction(
        &self,
        user_id: UserId,
        new_transaction: NewTransaction,
    ) -> Result<Transaction, TransactionRepoError> {
        let result = query_scalar::<_, i64>(
            "INSERT INTO transactions(user_id, amount, category, type, date) VALUES (?, ?, ?, ?, ?) RETURNING id",
        )
        .bind(user_id)
        .bind(new_transaction.amount.to_string())
        .bind(new_transaction.category.as_str())
        .bind(new_transaction.transaction_type.as_str())
        .bind(new_transaction.date)
        .fetch_one(&self.pool)
        .await;

        let id = match result {
            Ok(id) => id,
            Err(sqlx::Error::Database(e)) if e.is_foreign_key_violation() => {
                return Err(UserNotFound(user_id))
            }
            Err(e) => {
                let e = anyhow::Error::new(e).context("Unable to insert transaction");
                return Err(e.into());
            }
        };

        Ok(new_transaction.to_transaction(id, user_id))
    }

    #[instrument(skip(self))]
    async fn get_all_transactions(
        &self,
        user_id: UserId,
    ) -> Result<Vec<Transaction>, TransactionRepoError> {
        let transaction_entries: Vec<TransactionEntry> = query_as(
            "SELECT id, user_id, amount, category, type, date FROM transactions WHERE user_id = ? ORDER BY id",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .with_context(|| format!("Unable to get transactions for user {}", user_id))?;

        let transactions = transaction_entries
            .into_iter()
            .map(Transaction::try_from)
            .collect::<Result<Vec<Transaction>, anyhow::Error>>()?;
        Ok(transactions)
    }

    #[instrument(skip(self))]
    async fn get_balance(&self, user_id: UserId) -> Result<Balance, TransactionRepoError> {
        // amounts are TEXT, so summing happens here rather than in SQL
        let rows: Vec<(String, String)> =
            query_as("SELECT type, amount FROM transactions WHERE user_id = ?")
                .bind(user_id)
                .fetch_all(&self.pool)
                .await
                .with_context(|| format!("Unable to get balance for user {}", user_id))?;

        let mut balance = Balance::default();
        for (transaction_type, amount) in rows {
            let amount = Decimal::from_str(&amount).context("Invalid amount")?;
            balance.add(transaction_type.parse()?, amount)?;
        }
        Ok(balance)
    }
}
