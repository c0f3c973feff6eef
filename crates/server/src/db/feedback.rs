//! Feedback repository.

use sqlx::SqlitePool;

use shoplite_core::{FeedbackId, ProductId};

use super::RepositoryError;
use crate::models::{Feedback, NewFeedback};

/// Repository for feedback database operations.
pub struct FeedbackRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> FeedbackRepository<'a> {
    /// Create a new feedback repository.
    #[must_use]
    pub const fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Persist one feedback row, returning its store-assigned id.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the insert fails (including
    /// foreign-key violations for unknown products or users).
    pub async fn create(&self, new: &NewFeedback) -> Result<FeedbackId, RepositoryError> {
        let (id,): (FeedbackId,) = sqlx::query_as(
            r"
            INSERT INTO feedback (product_id, user_id, rating, comment)
            VALUES (?1, ?2, ?3, ?4)
            RETURNING id
            ",
        )
        .bind(new.product_id)
        .bind(new.user_id)
        .bind(new.rating)
        .bind(new.comment.as_deref())
        .fetch_one(self.pool)
        .await?;

        Ok(id)
    }

    /// All feedback rows for one product.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get_by_product(
        &self,
        product_id: ProductId,
    ) -> Result<Vec<Feedback>, RepositoryError> {
        let rows = sqlx::query_as::<_, Feedback>(
            r"
            SELECT id, product_id, user_id, rating, comment
            FROM feedback
            WHERE product_id = ?1
            ",
        )
        .bind(product_id)
        .fetch_all(self.pool)
        .await?;

        Ok(rows)
    }
}
