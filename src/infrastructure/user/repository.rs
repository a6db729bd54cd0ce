//! Storage-backed user repository implementation

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::storage::Storage;
use crate::domain::user::{User, UserId, UserRepository};
use crate::domain::DomainError;

/// Storage-backed implementation of UserRepository
#[derive(Debug)]
pub struct StorageUserRepository {
    storage: Arc<dyn Storage<User>>,
}

impl StorageUserRepository {
    /// Create a new storage-backed repository
    pub fn new(storage: Arc<dyn Storage<User>>) -> Self {
        Self { storage }
    }
}

#[async_trait]
impl UserRepository for StorageUserRepository {
    async fn get(&self, id: &UserId) -> Result<Option<User>, DomainError> {
        self.storage.get(id).await
    }

    async fn get_by_username(&self, username: &str) -> Result<Option<User>, DomainError> {
        let users = self.storage.list().await?;

        Ok(users.into_iter().find(|u| u.username() == username))
    }

    async fn username_exists(&self, username: &str) -> Result<bool, DomainError> {
        Ok(self.get_by_username(username).await?.is_some())
    }

    async fn create(&self, user: User) -> Result<User, DomainError> {
        if self.username_exists(user.username()).await? {
            return Err(DomainError::conflict(format!(
                "Username '{}' is already taken",
                user.username()
            )));
        }

        self.storage.create(user).await
    }

    async fn update(&self, user: User) -> Result<User, DomainError> {
        if !self.storage.exists(user.id()).await? {
            return Err(DomainError::not_found(format!(
                "User '{}' not found",
                user.id().as_str()
            )));
        }

        self.storage.update(user).await
    }

    async fn record_login(&self, id: &UserId) -> Result<(), DomainError> {
        let mut user = self
            .storage
            .get(id)
            .await?
            .ok_or_else(|| DomainError::not_found(format!("User '{}' not found", id.as_str())))?;

        user.record_login();
        self.storage.update(user).await?;

        Ok(())
    }

    async fn count(&self) -> Result<usize, DomainError> {
        self.storage.count().await
    }
}
