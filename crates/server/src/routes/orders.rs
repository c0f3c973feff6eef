//! Order route handlers. Both routes are gated on an authenticated session.

use axum::{
    Form, Json,
    extract::{Path, State},
};
use serde::{Deserialize, Serialize};

use shoplite_core::{OrderId, UserId};

use crate::error::{AppError, Result};
use crate::middleware::RequireAuth;
use crate::models::{NewOrderItem, Order};
use crate::routes::non_empty;
use crate::services::CommerceService;
use crate::state::AppState;

/// Order placement form data. `items` arrives as a serialized JSON array.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderForm {
    pub user_id: Option<i64>,
    pub total_amount: Option<String>,
    pub items: Option<String>,
}

/// Response body for a placed order.
#[derive(Debug, Serialize)]
pub struct OrderPlaced {
    #[serde(rename = "orderId")]
    pub order_id: OrderId,
}

/// Place an order: one header plus one line per item, all-or-nothing.
pub async fn create(
    State(state): State<AppState>,
    RequireAuth(_user): RequireAuth,
    Form(form): Form<OrderForm>,
) -> Result<Json<OrderPlaced>> {
    let (Some(user_id), Some(total_amount), Some(items)) = (
        form.user_id,
        non_empty(form.total_amount),
        non_empty(form.items),
    ) else {
        return Err(AppError::BadRequest(
            "Missing required parameters: userId, totalAmount, or items".to_string(),
        ));
    };

    // The items collection is submitted serialized; a payload that does not
    // parse is an unexpected failure, not a validation one.
    let items: Vec<NewOrderItem> = serde_json::from_str(&items)
        .map_err(|e| AppError::Internal(format!("invalid items payload: {e}")))?;

    if items.is_empty() {
        return Err(AppError::BadRequest(
            "Missing required parameters: userId, totalAmount, or items".to_string(),
        ));
    }

    let order_id = CommerceService::new(state.pool())
        .place_order(UserId::new(user_id), &total_amount, &items)
        .await?;

    Ok(Json(OrderPlaced { order_id }))
}

/// Order history for one user.
pub async fn for_user(
    State(state): State<AppState>,
    RequireAuth(_user): RequireAuth,
    Path(user_id): Path<i64>,
) -> Result<Json<Vec<Order>>> {
    let orders = CommerceService::new(state.pool())
        .orders_for_user(UserId::new(user_id))
        .await?;
    Ok(Json(orders))
}
