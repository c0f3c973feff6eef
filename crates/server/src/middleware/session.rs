//! Session middleware configuration.
//!
//! Sets up `SQLite`-backed sessions using tower-sessions. The session table
//! lives in the same store as the rest of the data and is emptied at every
//! process start: a fresh boot carries no sessions over, while within a
//! process lifetime sessions persist across requests until they expire or
//! are destroyed by logout.

use sqlx::SqlitePool;
use tower_sessions::{Expiry, SessionManagerLayer};
use tower_sessions_sqlx_store::SqliteStore;

use crate::config::ShopliteConfig;

/// Session cookie name.
pub const SESSION_COOKIE_NAME: &str = "shoplite_session";

/// Session expiry time in seconds (7 days of inactivity).
const SESSION_EXPIRY_SECONDS: i64 = 7 * 24 * 60 * 60;

/// Name of the backing session table.
const SESSION_TABLE: &str = "sessions";

/// Create the `SQLite` session store.
///
/// The caller must run [`SqliteStore::migrate`] once at startup to create
/// the backing table, then [`clear_sessions`] to reset it.
#[must_use]
pub fn create_session_store(pool: &SqlitePool) -> SqliteStore {
    SqliteStore::new(pool.clone())
        .with_table_name(SESSION_TABLE)
        .expect("session table name is a valid identifier")
}

/// Empty the session table.
///
/// Run once at boot so no session survives a restart.
///
/// # Errors
///
/// Returns `sqlx::Error` if the delete fails.
pub async fn clear_sessions(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query("DELETE FROM sessions").execute(pool).await?;
    Ok(())
}

/// Create the session layer over a prepared store.
///
/// # Arguments
///
/// * `store` - Migrated `SQLite` session store
/// * `config` - Server configuration (for the Secure cookie decision)
#[must_use]
pub fn create_session_layer(
    store: SqliteStore,
    config: &ShopliteConfig,
) -> SessionManagerLayer<SqliteStore> {
    // Determine if we're in production (HTTPS)
    let is_secure = config.base_url.starts_with("https://");

    SessionManagerLayer::new(store)
        .with_name(SESSION_COOKIE_NAME)
        .with_expiry(Expiry::OnInactivity(
            tower_sessions::cookie::time::Duration::seconds(SESSION_EXPIRY_SECONDS),
        ))
        .with_secure(is_secure)
        .with_same_site(tower_sessions::cookie::SameSite::Lax)
        .with_http_only(true)
        .with_path("/")
}
