//! Process-local user store.

use async_trait::async_trait;
use parking_lot::RwLock;

use super::users::{UserRecord, UserStore};
use crate::errors::domain::{ConflictKind, DomainError};

#[derive(Debug, Default)]
pub struct MemoryUserStore {
    users: RwLock<Vec<UserRecord>>,
}

impl MemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.users.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.read().is_empty()
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn find_user_by_email(&self, email: &str) -> Result<Option<UserRecord>, DomainError> {
        Ok(self.users.read().iter().find(|u| u.email == email).cloned())
    }

    async fn email_exists(&self, email: &str) -> Result<bool, DomainError> {
        Ok(self.users.read().iter().any(|u| u.email == email))
    }

    async fn create_user(
        &self,
        username: &str,
        email: &str,
        password_hash: &str,
    ) -> Result<i64, DomainError> {
        let mut users = self.users.write();
        if users.iter().any(|u| u.email == email) {
            return Err(DomainError::conflict(
                ConflictKind::UniqueEmail,
                "Email already registered",
            ));
        }

        let id = users.len() as i64 + 1;
        users.push(UserRecord {
            id,
            username: username.to_string(),
            email: email.to_string(),
            password_hash: password_hash.to_string(),
        });
        Ok(id)
    }

    async fn ping(&self) -> Result<(), DomainError> {
        Ok(())
    }
}
