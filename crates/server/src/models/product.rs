//! Catalog product models.

use serde::Serialize;

use shoplite_core::ProductId;

/// A catalog product row.
///
/// Price and category are stored exactly as submitted; the catalog accepts
/// them as given without type or range validation. `image` is either `None`
/// or a filename handle previously issued by the blob store.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    pub price: String,
    pub category: String,
    pub image: Option<String>,
}

/// Fields for a product about to be persisted.
#[derive(Debug, Clone)]
pub struct NewProduct {
    pub name: String,
    pub description: String,
    pub price: String,
    pub category: String,
    pub image: Option<String>,
}
