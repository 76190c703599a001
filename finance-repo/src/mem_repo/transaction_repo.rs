use super::user_repo::MemUserRepo;
use crate::transaction_repo::TransactionRepoError::UserNotFound;
use crate::transaction_repo::{
    Balance, NewTransaction, Transaction, TransactionRepo, TransactionRepoError,
};
use crate::user_repo::UserId;
use anyhow::anyhow;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

struct State {
    transactions: HashMap<i64, Transaction>,
    user_transactions: HashMap<UserId, Vec<i64>>,
    next_id: i64,
}

pub struct MemTransactionRepo {
    state: RwLock<State>,
    user_repo: Arc<MemUserRepo>,
}

impl MemTransactionRepo {
    pub fn new(user_repo: Arc<MemUserRepo>) -> MemTransactionRepo {
        let state = State {
            transactions: HashMap::new(),
            user_transactions: HashMap::new(),
            next_id: 1,
        };
        MemTransactionRepo {
            state: RwLock::new(state),
            user_repo,
        }
    }

    fn read_lock(&self) -> Result<RwLockReadGuard<State>, anyhow::Error> {
        self.state
            .read()
            .map_err(|_| anyhow!("Unable to acquire lock"))
    }

    fn write_lock(&self) -> Result<RwLockWriteGuard<State>, anyhow::Error> {
        self.state
            .write()
            .map_err(|_| anyhow!("Unable to acquire lock"))
    }
}

#[async_trait]
impl TransactionRepo for MemTransactionRepo {
    async fn create_new_transaction(
        &self,
        user_id: UserId,
        new_transaction: NewTransaction,
    ) -> Result<Transaction, TransactionRepoError> {
        if !self.user_repo.contains(user_id)? {
            return Err(UserNotFound(user_id));
        }

        let mut write_guard = self.write_lock()?;

        let id = write_guard.next_id;
        write_guard.next_id += 1;

        let transaction = new_transaction.to_transaction(id, user_id);

        write_guard.transactions.insert(id, transaction.clone());
        write_guard
            .user_transactions
            .entry(user_id)
            .or_insert_with(Vec::new)
            .push(id);

        Ok(transaction)
    }

    async fn get_all_transactions(
        &self,
        user_id: UserId,
    ) -> Result<Vec<Transaction>, TransactionRepoError> {
        let read_guard = self.read_lock()?;

        let Some(transaction_ids) = read_guard.user_transactions.get(&user_id) else {
            return Ok(Vec::new());
        };

        let transactions = transaction_ids
            .iter()
            .map(|id| {
                read_guard
                    .transactions
                    .get(id)
                    .expect("transactions should have all the ids from user_transactions")
            })
            .cloned()
            .collect();

        Ok(transactions)
    }

    async fn get_balance(&self, user_id: UserId) -> Result<Balance, TransactionRepoError> {
        let transactions = self.get_all_transactions(user_id).await?;
        Ok(Balance::from_transactions(&transactions)?)
    }
}
