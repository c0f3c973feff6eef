//! Page route handlers.
//!
//! Pages are static collaborators: these handlers only read them from the
//! configured public directory. `profile.html` is the one gated page, and
//! an unauthenticated request to it redirects to the login page rather
//! than failing with 401.

use axum::{extract::State, response::Html};

use crate::config::ShopliteConfig;
use crate::error::{AppError, Result};
use crate::middleware::RequireAuth;
use crate::state::AppState;

/// Serve the main page.
pub async fn main_page(State(state): State<AppState>) -> Result<Html<String>> {
    serve_page(state.config(), "main.html").await
}

/// Serve the profile page. Requires an authenticated session.
pub async fn profile_page(
    RequireAuth(_user): RequireAuth,
    State(state): State<AppState>,
) -> Result<Html<String>> {
    serve_page(state.config(), "profile.html").await
}

async fn serve_page(config: &ShopliteConfig, file: &str) -> Result<Html<String>> {
    let path = config.public_dir.join(file);
    let body = tokio::fs::read_to_string(&path)
        .await
        .map_err(|_| AppError::NotFound("Page not found".to_string()))?;
    Ok(Html(body))
}
