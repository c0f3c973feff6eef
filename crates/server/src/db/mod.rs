//! Database operations for the `SQLite` store.
//!
//! This module is the only path through which persistent data is read or
//! written. Every statement is parameterized via `.bind()`; no value is ever
//! concatenated into statement text.
//!
//! ## Tables
//!
//! - `users` - Site accounts (credential hash in a dedicated column)
//! - `products` - Catalog rows
//! - `feedback` - Append-only product feedback
//! - `orders` / `order_items` - Order headers and their lines
//! - `cart_items` - Cart lines
//! - `sessions` - Tower-sessions storage, reset on boot
//!
//! # Migrations
//!
//! Migrations are stored in `crates/server/migrations/` and run via:
//! ```bash
//! cargo run -p shoplite-cli -- migrate
//! ```

pub mod cart;
pub mod feedback;
pub mod orders;
pub mod products;
pub mod users;

use std::str::FromStr;
use std::time::Duration;

use secrecy::ExposeSecret;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
use thiserror::Error;

pub use cart::CartRepository;
pub use feedback::FeedbackRepository;
pub use orders::OrderRepository;
pub use products::ProductRepository;
pub use users::UserRepository;

/// Errors that can occur during repository operations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Database error from sqlx.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Constraint violation (e.g., unique username).
    #[error("constraint violation: {0}")]
    Conflict(String),
}

/// Create a `SQLite` connection pool with sensible defaults.
///
/// Connections are acquired from the pool per statement (or per transaction)
/// and released on every exit path by the pool guard. Foreign keys are
/// enforced and the journal runs in WAL mode so concurrent readers don't
/// block the writer.
///
/// # Errors
///
/// Returns `sqlx::Error` if the connection cannot be established.
pub async fn create_pool(database_url: &secrecy::SecretString) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url.expose_secret())?
        .create_if_missing(true)
        .foreign_keys(true)
        .journal_mode(SqliteJournalMode::Wal);

    SqlitePoolOptions::new()
        .max_connections(10)
        .acquire_timeout(Duration::from_secs(10))
        .connect_with(options)
        .await
}
