//! Middleware and extractors.

pub mod auth;
pub mod session;

pub use auth::{RequireAuth, set_current_user};
pub use session::{clear_sessions, create_session_layer, create_session_store};
