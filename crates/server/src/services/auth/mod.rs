//! Authentication service.
//!
//! Registration and credential-based login. Credentials are hashed with
//! Argon2id before they touch the store and verified against the stored
//! hash on login; plaintext comparison never happens, and neither
//! credentials nor raw store errors are ever logged.

mod error;

pub use error::AuthError;

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use sqlx::SqlitePool;

use shoplite_core::UserId;

use crate::db::RepositoryError;
use crate::db::users::UserRepository;
use crate::models::User;

/// Authentication service.
///
/// Handles user registration and login.
pub struct AuthService<'a> {
    users: UserRepository<'a>,
}

impl<'a> AuthService<'a> {
    /// Create a new authentication service.
    #[must_use]
    pub const fn new(pool: &'a SqlitePool) -> Self {
        Self {
            users: UserRepository::new(pool),
        }
    }

    /// Register a new user with username, password, and email.
    ///
    /// Registration implies login; the caller is expected to bind the
    /// returned user to a session.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::UserAlreadyExists` if the username is taken.
    pub async fn register(
        &self,
        username: &str,
        password: &str,
        email: &str,
    ) -> Result<User, AuthError> {
        let password_hash = hash_password(password)?;

        let user = self
            .users
            .create(username, &password_hash, email)
            .await
            .map_err(|e| match e {
                RepositoryError::Conflict(_) => AuthError::UserAlreadyExists,
                other => AuthError::Repository(other),
            })?;

        Ok(user)
    }

    /// Login with username and password.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidCredentials` if the username/password is
    /// wrong; the two cases are indistinguishable to the caller.
    pub async fn login(&self, username: &str, password: &str) -> Result<User, AuthError> {
        let (user, password_hash) = self
            .users
            .get_password_hash(username)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        verify_password(password, &password_hash)?;

        Ok(user)
    }

    /// Get a user by ID.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Repository` if the database operation fails.
    pub async fn get_user(&self, user_id: UserId) -> Result<Option<User>, AuthError> {
        let user = self.users.get_by_id(user_id).await?;
        Ok(user)
    }
}

/// Hash a password using Argon2id.
fn hash_password(password: &str) -> Result<String, AuthError> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();

    argon2
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|_| AuthError::PasswordHash)
}

/// Verify a password against a hash.
fn verify_password(password: &str, hash: &str) -> Result<(), AuthError> {
    let parsed_hash = PasswordHash::new(hash).map_err(|_| AuthError::InvalidCredentials)?;
    let argon2 = Argon2::default();

    argon2
        .verify_password(password.as_bytes(), &parsed_hash)
        .map_err(|_| AuthError::InvalidCredentials)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::db::test_support::test_pool;

    #[test]
    fn hash_then_verify_round_trips() {
        let hash = hash_password("secret").unwrap();
        assert_ne!(hash, "secret");
        assert!(verify_password("secret", &hash).is_ok());
        assert!(verify_password("wrong", &hash).is_err());
    }

    #[tokio::test]
    async fn register_then_login_returns_same_user() {
        let pool = test_pool().await;
        let auth = AuthService::new(&pool);

        let registered = auth.register("alice", "secret", "a@x.com").await.unwrap();
        let logged_in = auth.login("alice", "secret").await.unwrap();

        assert_eq!(registered.id, logged_in.id);
    }

    #[tokio::test]
    async fn wrong_password_is_invalid_credentials() {
        let pool = test_pool().await;
        let auth = AuthService::new(&pool);

        auth.register("alice", "secret", "a@x.com").await.unwrap();
        let err = auth.login("alice", "wrong").await.unwrap_err();

        assert!(matches!(err, AuthError::InvalidCredentials));
    }

    #[tokio::test]
    async fn unknown_user_is_invalid_credentials() {
        let pool = test_pool().await;
        let auth = AuthService::new(&pool);

        let err = auth.login("nobody", "secret").await.unwrap_err();
        assert!(matches!(err, AuthError::InvalidCredentials));
    }

    #[tokio::test]
    async fn duplicate_registration_is_rejected() {
        let pool = test_pool().await;
        let auth = AuthService::new(&pool);

        auth.register("alice", "secret", "a@x.com").await.unwrap();
        let err = auth
            .register("alice", "other", "b@x.com")
            .await
            .unwrap_err();

        assert!(matches!(err, AuthError::UserAlreadyExists));
    }
}
