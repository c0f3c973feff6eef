//! Profile route handlers.

use axum::{
    Json,
    extract::{Path, State},
};

use shoplite_core::UserId;

use crate::error::{AppError, Result};
use crate::middleware::RequireAuth;
use crate::models::User;
use crate::services::AuthService;
use crate::state::AppState;

/// Profile details for one user. Gated; the credential hash is not part of
/// the model, so it can never appear in the response.
pub async fn show(
    State(state): State<AppState>,
    RequireAuth(_user): RequireAuth,
    Path(id): Path<i64>,
) -> Result<Json<User>> {
    let user = AuthService::new(state.pool())
        .get_user(UserId::new(id))
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

    Ok(Json(user))
}
