//! Product feedback models.

use serde::Serialize;

use shoplite_core::{FeedbackId, ProductId, UserId};

/// One feedback row. Append-only.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Feedback {
    pub id: FeedbackId,
    pub product_id: ProductId,
    pub user_id: UserId,
    pub rating: i64,
    pub comment: Option<String>,
}

/// Fields for a feedback row about to be persisted.
#[derive(Debug, Clone)]
pub struct NewFeedback {
    pub product_id: ProductId,
    pub user_id: UserId,
    pub rating: i64,
    pub comment: Option<String>,
}
