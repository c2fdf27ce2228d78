//! User store collaborator used by registration and login.

use async_trait::async_trait;

use crate::errors::domain::DomainError;

/// A stored user account
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRecord {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub password_hash: String,
}

/// Lookup and creation of user accounts.
///
/// Implementations must reject a second account with the same email with
/// `DomainError::Conflict(ConflictKind::UniqueEmail, _)`.
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn find_user_by_email(&self, email: &str) -> Result<Option<UserRecord>, DomainError>;

    async fn email_exists(&self, email: &str) -> Result<bool, DomainError>;

    /// Insert a user and return its new id.
    async fn create_user(
        &self,
        username: &str,
        email: &str,
        password_hash: &str,
    ) -> Result<i64, DomainError>;

    /// Cheap liveness check used by `/health`.
    async fn ping(&self) -> Result<(), DomainError>;
}
