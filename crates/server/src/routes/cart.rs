//! Cart route handlers. Both routes are gated on an authenticated session.

use axum::{
    Form, Json,
    extract::{Path, State},
};
use serde::{Deserialize, Serialize};

use shoplite_core::{CartItemId, ProductId, UserId};

use crate::error::{AppError, Result};
use crate::middleware::RequireAuth;
use crate::models::CartItem;
use crate::services::CommerceService;
use crate::state::AppState;

/// Cart-add form data.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartForm {
    pub product_id: Option<i64>,
    pub user_id: Option<i64>,
    pub quantity: Option<i64>,
}

/// Response body for an added cart line.
#[derive(Debug, Serialize)]
pub struct CartItemAdded {
    #[serde(rename = "lastId")]
    pub last_id: CartItemId,
}

/// Add one line to a user's cart. Quantity defaults to 1.
pub async fn add(
    State(state): State<AppState>,
    RequireAuth(_user): RequireAuth,
    Form(form): Form<CartForm>,
) -> Result<Json<CartItemAdded>> {
    let (Some(product_id), Some(user_id)) = (form.product_id, form.user_id) else {
        return Err(AppError::BadRequest(
            "Missing required parameters: product id or user id".to_string(),
        ));
    };

    let quantity = form.quantity.unwrap_or(1);

    let last_id = CommerceService::new(state.pool())
        .add_to_cart(UserId::new(user_id), ProductId::new(product_id), quantity)
        .await?;

    Ok(Json(CartItemAdded { last_id }))
}

/// All cart lines for one user.
pub async fn for_user(
    State(state): State<AppState>,
    RequireAuth(_user): RequireAuth,
    Path(user_id): Path<i64>,
) -> Result<Json<Vec<CartItem>>> {
    let items = CommerceService::new(state.pool())
        .cart_for_user(UserId::new(user_id))
        .await?;
    Ok(Json(items))
}
