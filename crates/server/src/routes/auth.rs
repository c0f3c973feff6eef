//! Identity route handlers: login, registration, and logout.

use axum::{Form, Json, extract::State, http::StatusCode};
use serde::{Deserialize, Serialize};
use tower_sessions::Session;

use shoplite_core::UserId;

use crate::error::{AppError, Result};
use crate::middleware::set_current_user;
use crate::models::CurrentUser;
use crate::routes::non_empty;
use crate::services::AuthService;
use crate::state::AppState;

/// Login form data.
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub username: Option<String>,
    pub password: Option<String>,
}

/// Registration form data.
#[derive(Debug, Deserialize)]
pub struct RegisterForm {
    pub username: Option<String>,
    pub password: Option<String>,
    pub email: Option<String>,
}

/// Response body for a successful login or registration.
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub id: UserId,
}

/// Handle login form submission.
///
/// A successful login binds the user to the session; the credential itself
/// is never logged or echoed back.
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<LoginForm>,
) -> Result<Json<AuthResponse>> {
    let (Some(username), Some(password)) = (non_empty(form.username), non_empty(form.password))
    else {
        return Err(AppError::BadRequest(
            "Missing required parameters: username and password".to_string(),
        ));
    };

    let user = AuthService::new(state.pool())
        .login(&username, &password)
        .await?;

    bind_session(&session, &user.id, &user.username).await?;

    Ok(Json(AuthResponse { id: user.id }))
}

/// Handle registration form submission.
///
/// Registration implies login: the fresh account is immediately bound to
/// the session.
pub async fn register(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<RegisterForm>,
) -> Result<Json<AuthResponse>> {
    let (Some(username), Some(password), Some(email)) = (
        non_empty(form.username),
        non_empty(form.password),
        non_empty(form.email),
    ) else {
        return Err(AppError::BadRequest(
            "Missing required parameters: username, password, or email".to_string(),
        ));
    };

    let user = AuthService::new(state.pool())
        .register(&username, &password, &email)
        .await?;

    bind_session(&session, &user.id, &user.username).await?;

    Ok(Json(AuthResponse { id: user.id }))
}

/// Handle logout.
///
/// Flushes the whole session: the store record is deleted and the cookie
/// cleared. Destroying an already-absent session succeeds the same way.
pub async fn logout(session: Session) -> Result<StatusCode> {
    session
        .flush()
        .await
        .map_err(|e| AppError::Internal(format!("failed to destroy session: {e}")))?;

    Ok(StatusCode::OK)
}

async fn bind_session(session: &Session, id: &UserId, username: &str) -> Result<()> {
    set_current_user(
        session,
        &CurrentUser {
            id: *id,
            username: username.to_string(),
        },
    )
    .await
    .map_err(|e| AppError::Internal(format!("failed to persist session: {e}")))
}
