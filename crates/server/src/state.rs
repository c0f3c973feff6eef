//! Application state shared across handlers.

use std::sync::Arc;

use sqlx::SqlitePool;

use crate::blob::{BlobError, BlobStore};
use crate::config::ShopliteConfig;

/// Upload size cap for product images (5 MiB).
const MAX_IMAGE_BYTES: usize = 5 * 1024 * 1024;

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to
/// shared resources like the connection pool and configuration.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: ShopliteConfig,
    pool: SqlitePool,
    blobs: BlobStore,
}

impl AppState {
    /// Create a new application state.
    ///
    /// # Arguments
    ///
    /// * `config` - Server configuration
    /// * `pool` - `SQLite` connection pool
    ///
    /// # Errors
    ///
    /// Returns an error if the blob store directory cannot be created.
    pub fn new(config: ShopliteConfig, pool: SqlitePool) -> Result<Self, BlobError> {
        let blobs = BlobStore::new(config.upload_dir.clone(), MAX_IMAGE_BYTES)?;

        Ok(Self {
            inner: Arc::new(AppStateInner {
                config,
                pool,
                blobs,
            }),
        })
    }

    /// Get a reference to the server configuration.
    #[must_use]
    pub fn config(&self) -> &ShopliteConfig {
        &self.inner.config
    }

    /// Get a reference to the database connection pool.
    #[must_use]
    pub fn pool(&self) -> &SqlitePool {
        &self.inner.pool
    }

    /// Get a reference to the image blob store.
    #[must_use]
    pub fn blobs(&self) -> &BlobStore {
        &self.inner.blobs
    }
}
