//! Catalog route handlers.

use axum::{
    Json,
    extract::{Multipart, Path, State},
};
use serde::Serialize;

use shoplite_core::ProductId;

use crate::error::{AppError, Result};
use crate::models::{NewProduct, Product};
use crate::routes::non_empty;
use crate::services::CatalogService;
use crate::state::AppState;

/// Response body for a created product.
#[derive(Debug, Serialize)]
pub struct ProductCreated {
    pub success: bool,
    pub id: ProductId,
}

/// Handle product submission (multipart form with an optional image file).
///
/// Required fields: name, description, price, category. Values are stored
/// as given; the image, when present, is handed to the blob store and only
/// its filename handle is persisted.
pub async fn create(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<ProductCreated>> {
    let mut name = None;
    let mut description = None;
    let mut price = None;
    let mut category = None;
    let mut image = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Internal(format!("malformed multipart body: {e}")))?
    {
        let field_name = field.name().map(ToString::to_string);
        match field_name.as_deref() {
            Some("name") => name = Some(read_text(field).await?),
            Some("description") => description = Some(read_text(field).await?),
            Some("price") => price = Some(read_text(field).await?),
            Some("category") => category = Some(read_text(field).await?),
            Some("image") => {
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::Internal(format!("failed to read upload: {e}")))?;
                if !data.is_empty() {
                    image = Some(state.blobs().store_image(&data).await?);
                }
            }
            _ => {}
        }
    }

    let (Some(name), Some(description), Some(price), Some(category)) = (
        non_empty(name),
        non_empty(description),
        non_empty(price),
        non_empty(category),
    ) else {
        return Err(AppError::BadRequest(
            "Missing required parameters: name, description, price, or category".to_string(),
        ));
    };

    let product = CatalogService::new(state.pool())
        .add_product(&NewProduct {
            name,
            description,
            price,
            category,
            image,
        })
        .await?;

    Ok(Json(ProductCreated {
        success: true,
        id: product.id,
    }))
}

/// All products.
pub async fn index(State(state): State<AppState>) -> Result<Json<Vec<Product>>> {
    let products = CatalogService::new(state.pool()).get_all().await?;
    Ok(Json(products))
}

/// One product by id.
///
/// An unknown id is answered with a client error rather than a 404; callers
/// depend on that wire contract.
pub async fn show(State(state): State<AppState>, Path(id): Path<i64>) -> Result<Json<Product>> {
    let product = CatalogService::new(state.pool())
        .get_by_id(ProductId::new(id))
        .await?
        .ok_or_else(|| {
            AppError::BadRequest("Invalid request: id does not exist".to_string())
        })?;

    Ok(Json(product))
}

/// All products of one category (exact match).
pub async fn by_category(
    State(state): State<AppState>,
    Path(category): Path<String>,
) -> Result<Json<Vec<Product>>> {
    let products = CatalogService::new(state.pool())
        .get_by_category(&category)
        .await?;
    Ok(Json(products))
}

async fn read_text(field: axum::extract::multipart::Field<'_>) -> Result<String> {
    field
        .text()
        .await
        .map_err(|e| AppError::Internal(format!("failed to read field: {e}")))
}
