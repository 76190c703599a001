use crate::user_repo::UserId;
use anyhow::anyhow;
use async_trait::async_trait;
use chrono::{Local, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use thiserror::Error;

#[async_trait]
pub trait TransactionRepo: Sync + Send {
    /// Stores a new transaction for `user_id`. Fails with
    /// [TransactionRepoError::UserNotFound] if the user does not exist.
    async fn create_new_transaction(
        &self,
        user_id: UserId,
        new_transaction: NewTransaction,
    ) -> Result<Transaction, TransactionRepoError>;

    /// Returns every transaction of `user_id` in insertion order.
    async fn get_all_transactions(
        &self,
        user_id: UserId,
    ) -> Result<Vec<Transaction>, TransactionRepoError>;

    async fn get_balance(&self, user_id: UserId) -> Result<Balance, TransactionRepoError>;
}

#[derive(Error, Debug)]
pub enum TransactionRepoError {
    #[error("User with id {0} not found")]
    UserNotFound(UserId),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Category {
    Food,
    Transport,
    Entertainment,
    Bills,
    Others,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Food,
        Category::Transport,
        Category::Entertainment,
        Category::Bills,
        Category::Others,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Food => "Food",
            Category::Transport => "Transport",
            Category::Entertainment => "Entertainment",
            Category::Bills => "Bills",
            Category::Others => "Others",
        }
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| anyhow!("Unknown category: {}", s))
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum TransactionType {
    Income,
    Expense,
}

impl TransactionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Income => "Income",
            TransactionType::Expense => "Expense",
        }
    }
}

impl Display for TransactionType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransactionType {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Income" => Ok(TransactionType::Income),
            "Expense" => Ok(TransactionType::Expense),
            _ => Err(anyhow!("Unknown transaction type: {}", s)),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
pub struct Transaction {
    pub id: i64,
    pub user_id: UserId,
    pub amount: Decimal,
    pub category: Category,
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
    pub date: NaiveDate,
}

impl Transaction {
    pub const fn new(
        id: i64,
        user_id: UserId,
        amount: Decimal,
        category: Category,
        transaction_type: TransactionType,
        date: NaiveDate,
    ) -> Transaction {
        Transaction {
            id,
            user_id,
            amount,
            category,
            transaction_type,
            date,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
pub struct NewTransaction {
    pub amount: Decimal,
    pub category: Category,
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
    pub date: NaiveDate,
}

impl NewTransaction {
    pub const fn new(
        amount: Decimal,
        category: Category,
        transaction_type: TransactionType,
        date: NaiveDate,
    ) -> NewTransaction {
        NewTransaction {
            amount,
            category,
            transaction_type,
            date,
        }
    }

    /// A transaction dated with the current local date.
    pub fn today(
        amount: Decimal,
        category: Category,
        transaction_type: TransactionType,
    ) -> NewTransaction {
        NewTransaction::new(amount, category, transaction_type, Local::now().date_naive())
    }

    pub fn to_transaction(self, id: i64, user_id: UserId) -> Transaction {
        Transaction::new(
            id,
            user_id,
            self.amount,
            self.category,
            self.transaction_type,
            self.date,
        )
    }
}

/// Income and expense totals. Amounts are stored unsigned, so the direction
/// comes from [TransactionType].
#[derive(Serialize, Deserialize, Clone, PartialEq, Debug, Default)]
pub struct Balance {
    pub income: Decimal,
    pub expense: Decimal,
    pub net: Decimal,
}

impl Balance {
    pub fn from_transactions<'a>(
        transactions: impl IntoIterator<Item = &'a Transaction>,
    ) -> Result<Balance, anyhow::Error> {
        let mut balance = Balance::default();
        for t in transactions {
            balance.add(t.transaction_type, t.amount)?;
        }
        Ok(balance)
    }

    /// Fails instead of panicking when a total leaves the range of [Decimal].
    pub fn add(
        &mut self,
        transaction_type: TransactionType,
        amount: Decimal,
    ) -> Result<(), anyhow::Error> {
        let total = match transaction_type {
            TransactionType::Income => &mut self.income,
            TransactionType::Expense => &mut self.expense,
        };
        *total = total
            .checked_add(amount)
            .ok_or_else(|| anyhow!("Balance overflow adding {} {}", transaction_type, amount))?;
        self.net = self
            .income
            .checked_sub(self.expense)
            .ok_or_else(|| anyhow!("Balance overflow computing net"))?;
        Ok(())
    }
}
