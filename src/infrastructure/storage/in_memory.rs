//! In-memory storage implementation

use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;

use crate::domain::storage::{Storage, StorageEntity, StorageKey};
use crate::domain::DomainError;

/// Thread-safe in-memory storage
///
/// Used for testing and development; data is lost when the process
/// terminates. Concurrent mutations to the same entity serialize on the
/// inner lock, which is what gives add/remove member operations their
/// all-or-nothing behavior on this backend.
#[derive(Debug, Default)]
pub struct InMemoryStorage<E>
where
    E: StorageEntity,
{
    entities: RwLock<HashMap<String, E>>,
}

impl<E> InMemoryStorage<E>
where
    E: StorageEntity,
{
    /// Creates a new empty in-memory storage
    pub fn new() -> Self {
        Self {
            entities: RwLock::new(HashMap::new()),
        }
    }

    /// Creates storage pre-populated with entities
    pub fn with_entities(entities: Vec<E>) -> Self {
        let map = entities
            .into_iter()
            .map(|e| (e.key().as_str().to_string(), e))
            .collect();

        Self {
            entities: RwLock::new(map),
        }
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, HashMap<String, E>>, DomainError> {
        self.entities
            .read()
            .map_err(|e| DomainError::storage(format!("Failed to acquire read lock: {}", e)))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, HashMap<String, E>>, DomainError> {
        self.entities
            .write()
            .map_err(|e| DomainError::storage(format!("Failed to acquire write lock: {}", e)))
    }
}

#[async_trait]
impl<E> Storage<E> for InMemoryStorage<E>
where
    E: StorageEntity + 'static,
{
    async fn get(&self, key: &E::Key) -> Result<Option<E>, DomainError> {
        Ok(self.read()?.get(key.as_str()).cloned())
    }

    async fn list(&self) -> Result<Vec<E>, DomainError> {
        Ok(self.read()?.values().cloned().collect())
    }

    async fn create(&self, entity: E) -> Result<E, DomainError> {
        let key = entity.key().as_str().to_string();
        let mut entities = self.write()?;

        if entities.contains_key(&key) {
            return Err(DomainError::conflict(format!(
                "Entity with key '{}' already exists",
                key
            )));
        }

        entities.insert(key, entity.clone());
        Ok(entity)
    }

    async fn update(&self, entity: E) -> Result<E, DomainError> {
        let key = entity.key().as_str().to_string();
        let mut entities = self.write()?;

        if !entities.contains_key(&key) {
            return Err(DomainError::not_found(format!(
                "Entity with key '{}' not found",
                key
            )));
        }

        entities.insert(key, entity.clone());
        Ok(entity)
    }

    async fn delete(&self, key: &E::Key) -> Result<bool, DomainError> {
        Ok(self.write()?.remove(key.as_str()).is_some())
    }

    async fn exists(&self, key: &E::Key) -> Result<bool, DomainError> {
        Ok(self.read()?.contains_key(key.as_str()))
    }

    async fn count(&self) -> Result<usize, DomainError> {
        Ok(self.read()?.len())
    }

    async fn clear(&self) -> Result<(), DomainError> {
        self.write()?.clear();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::team::{Team, TeamAlias, TeamId};

    fn team(name: &str, alias: &str, owner: &str) -> Team {
        Team::new(name, TeamAlias::new(alias).unwrap(), owner).unwrap()
    }

    #[tokio::test]
    async fn test_create_and_get() {
        let storage: InMemoryStorage<Team> = InMemoryStorage::new();
        let entity = team("Infrastructure", "infra", "alice");
        let id = entity.id().clone();

        storage.create(entity).await.unwrap();

        let result = storage.get(&id).await.unwrap();
        assert_eq!(result.unwrap().name(), "Infrastructure");
    }

    #[tokio::test]
    async fn test_create_conflict() {
        let storage: InMemoryStorage<Team> = InMemoryStorage::new();
        let entity = team("Infrastructure", "infra", "alice");

        storage.create(entity.clone()).await.unwrap();
        let result = storage.create(entity).await;

        assert!(matches!(result, Err(DomainError::Conflict { .. })));
    }

    #[tokio::test]
    async fn test_update_not_found() {
        let storage: InMemoryStorage<Team> = InMemoryStorage::new();
        let entity = team("Infrastructure", "infra", "alice");

        let result = storage.update(entity).await;
        assert!(matches!(result, Err(DomainError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_delete() {
        let storage: InMemoryStorage<Team> = InMemoryStorage::new();
        let entity = team("Infrastructure", "infra", "alice");
        let id = entity.id().clone();

        storage.create(entity).await.unwrap();
        assert!(storage.delete(&id).await.unwrap());
        assert!(!storage.exists(&id).await.unwrap());
    }

    #[tokio::test]
    async fn test_delete_missing_returns_false() {
        let storage: InMemoryStorage<Team> = InMemoryStorage::new();

        let deleted = storage.delete(&TeamId::generate()).await.unwrap();
        assert!(!deleted);
    }

    #[tokio::test]
    async fn test_with_entities_and_count() {
        let storage = InMemoryStorage::with_entities(vec![
            team("Team A", "team-a", "alice"),
            team("Team B", "team-b", "bob"),
        ]);

        assert_eq!(storage.count().await.unwrap(), 2);

        storage.clear().await.unwrap();
        assert_eq!(storage.count().await.unwrap(), 0);
    }
}
