//! Catalog search route handler.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::error::Result;
use crate::models::Product;
use crate::services::CatalogService;
use crate::state::AppState;

/// Substring search across name, description, and category.
pub async fn search(
    State(state): State<AppState>,
    Path(term): Path<String>,
) -> Result<Json<Vec<Product>>> {
    let products = CatalogService::new(state.pool()).search(&term).await?;
    Ok(Json(products))
}
