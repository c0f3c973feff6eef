//! Order header and line-item models.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use shoplite_core::{OrderId, ProductId, UserId};

/// An order header. Created exactly once per placement request.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Order {
    pub id: OrderId,
    pub user_id: UserId,
    pub total_amount: String,
    pub date: NaiveDate,
}

/// One order line. Never created independently of its header.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct OrderItem {
    pub order_id: OrderId,
    pub product_id: ProductId,
    pub quantity: i64,
}

/// One entry of the serialized items collection submitted with an order.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewOrderItem {
    pub product_id: ProductId,
    pub quantity: i64,
}
