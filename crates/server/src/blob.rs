//! Filesystem-backed blob store for uploaded product images.
//!
//! The rest of the system treats this as opaque: images go in as bytes and
//! come back as a filename handle stored on the product row. Files are
//! served by the static layer under `/uploads`.

use std::path::{Path, PathBuf};

use thiserror::Error;
use tokio::fs;
use tracing::debug;
use uuid::Uuid;

/// Errors from the blob store.
#[derive(Debug, Error)]
pub enum BlobError {
    #[error("blob storage error: {0}")]
    Storage(String),

    #[error("empty blob")]
    Empty,

    #[error("blob too large: {size} bytes (max {max})")]
    TooLarge { size: usize, max: usize },
}

/// Filesystem blob store rooted at one directory.
#[derive(Debug, Clone)]
pub struct BlobStore {
    base_path: PathBuf,
    max_size: usize,
}

impl BlobStore {
    /// Create a blob store, creating its directory if missing.
    ///
    /// # Errors
    ///
    /// Returns `BlobError::Storage` if the directory cannot be created.
    pub fn new(base_path: PathBuf, max_size: usize) -> Result<Self, BlobError> {
        std::fs::create_dir_all(&base_path).map_err(|e| {
            BlobError::Storage(format!(
                "failed to create blob directory '{}': {e}",
                base_path.display()
            ))
        })?;

        Ok(Self {
            base_path,
            max_size,
        })
    }

    /// The directory blobs are written into.
    #[must_use]
    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    /// Store an uploaded image, returning its filename handle.
    ///
    /// The handle is a fresh UUID with a `.png` extension, so callers never
    /// influence the path on disk.
    ///
    /// # Errors
    ///
    /// Returns `BlobError::Empty`, `BlobError::TooLarge`, or
    /// `BlobError::Storage` if the write fails.
    pub async fn store_image(&self, data: &[u8]) -> Result<String, BlobError> {
        if data.is_empty() {
            return Err(BlobError::Empty);
        }
        if data.len() > self.max_size {
            return Err(BlobError::TooLarge {
                size: data.len(),
                max: self.max_size,
            });
        }

        let filename = format!("{}.png", Uuid::new_v4());
        let path = self.base_path.join(&filename);

        fs::write(&path, data)
            .await
            .map_err(|e| BlobError::Storage(format!("failed to write blob {filename}: {e}")))?;

        debug!(handle = %filename, size = data.len(), "Stored image blob");
        Ok(filename)
    }
}
