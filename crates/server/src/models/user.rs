//! User account models.

use serde::Serialize;

use shoplite_core::UserId;

/// A site account.
///
/// The credential hash deliberately lives outside this struct; it is only
/// ever surfaced to the identity service's login path, so serializing a
/// `User` can never leak it.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct User {
    pub id: UserId,
    pub username: String,
    pub email: String,
}
