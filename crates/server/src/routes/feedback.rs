//! Feedback route handlers.

use axum::{
    Form, Json,
    extract::{Path, State},
};
use serde::{Deserialize, Serialize};

use shoplite_core::{FeedbackId, ProductId, UserId};

use crate::error::{AppError, Result};
use crate::models::{Feedback, NewFeedback};
use crate::services::CommerceService;
use crate::state::AppState;

/// Feedback form data.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackForm {
    pub product_id: Option<i64>,
    pub user_id: Option<i64>,
    pub rating: Option<i64>,
    pub comment: Option<String>,
}

/// Response body for a created feedback row.
#[derive(Debug, Serialize)]
pub struct FeedbackCreated {
    #[serde(rename = "lastId")]
    pub last_id: FeedbackId,
}

/// Record one feedback row. Unauthenticated.
pub async fn create(
    State(state): State<AppState>,
    Form(form): Form<FeedbackForm>,
) -> Result<Json<FeedbackCreated>> {
    let (Some(product_id), Some(user_id), Some(rating)) =
        (form.product_id, form.user_id, form.rating)
    else {
        return Err(AppError::BadRequest(
            "Missing required parameters: product id, user id, or rating".to_string(),
        ));
    };

    let last_id = CommerceService::new(state.pool())
        .add_feedback(&NewFeedback {
            product_id: ProductId::new(product_id),
            user_id: UserId::new(user_id),
            rating,
            comment: form.comment,
        })
        .await?;

    Ok(Json(FeedbackCreated { last_id }))
}

/// All feedback for one product. Unauthenticated read.
pub async fn for_product(
    State(state): State<AppState>,
    Path(product_id): Path<i64>,
) -> Result<Json<Vec<Feedback>>> {
    let rows = CommerceService::new(state.pool())
        .feedback_for_product(ProductId::new(product_id))
        .await?;
    Ok(Json(rows))
}
