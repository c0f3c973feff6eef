//! Cart line models.

use serde::Serialize;

use shoplite_core::{CartItemId, ProductId, UserId};

/// One cart line: a (user, product, quantity) triple.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct CartItem {
    pub id: CartItemId,
    pub user_id: UserId,
    pub product_id: ProductId,
    pub quantity: i64,
}
