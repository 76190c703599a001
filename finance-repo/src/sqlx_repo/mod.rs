mod transaction_repo;
mod user_repo;

use crate::transaction_repo::TransactionRepo;
use crate::user_repo::UserRepo;
use anyhow::Context;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

const CREATE_USERS_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS users (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        username TEXT UNIQUE NOT NULL,
        password_hash TEXT NOT NULL
    )
"#;

const CREATE_TRANSACTIONS_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS transactions (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        user_id INTEGER NOT NULL,
        amount TEXT NOT NULL,
        category TEXT NOT NULL,
        type TEXT NOT NULL,
        date TEXT NOT NULL,
        FOREIGN KEY (user_id) REFERENCES users(id)
    )
"#;

pub struct SQLxRepo {
    pool: SqlitePool,
}

impl SQLxRepo {
    pub fn new(pool: SqlitePool) -> SQLxRepo {
        SQLxRepo { pool }
    }
}

/// Opens the SQLite database at `database_url`, creating the file and the tables if they are
/// missing.
pub async fn create_repos(
    database_url: &str,
    max_pool_size: u32,
) -> Result<(Arc<dyn UserRepo>, Arc<dyn TransactionRepo>), anyhow::Error> {
    let options = SqliteConnectOptions::from_str(database_url)
        .with_context(|| format!("Invalid database url {}", database_url))?
        .create_if_missing(true)
        .foreign_keys(true);

    // in-memory databases live and die with their connection
    let pool = SqlitePoolOptions::new()
        .max_connections(max_pool_size)
        .idle_timeout(None::<Duration>)
        .max_lifetime(None::<Duration>)
        .connect_with(options)
        .await
        .context("Unable to connect to database")?;

    create_tables(&pool).await?;
    info!(database_url, "Database ready");

    let repo = Arc::new(SQLxRepo::new(pool));
    let user_repo: Arc<dyn UserRepo> = repo.clone();
    let transaction_repo: Arc<dyn TransactionRepo> = repo;
    Ok((user_repo, transaction_repo))
}

async fn create_tables(pool: &SqlitePool) -> Result<(), anyhow::Error> {
    sqlx::query(CREATE_USERS_TABLE)
        .execute(pool)
        .await
        .context("Unable to create users table")?;
    sqlx::query(CREATE_TRANSACTIONS_TABLE)
        .execute(pool)
        .await
        .context("Unable to create transactions table")?;
    Ok(())
}
