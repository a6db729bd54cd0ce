//! Storage-backed team repository implementation

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::storage::Storage;
use crate::domain::team::{Team, TeamId, TeamRepository};
use crate::domain::DomainError;

/// Storage-backed implementation of TeamRepository
///
/// Teams are keyed by id in the underlying storage; alias, name and
/// membership lookups scan the full list. Team counts stay small enough
/// that a scan is fine here.
#[derive(Debug)]
pub struct StorageTeamRepository {
    storage: Arc<dyn Storage<Team>>,
}

impl StorageTeamRepository {
    /// Create a new storage-backed repository
    pub fn new(storage: Arc<dyn Storage<Team>>) -> Self {
        Self { storage }
    }
}

#[async_trait]
impl TeamRepository for StorageTeamRepository {
    async fn get(&self, id: &TeamId) -> Result<Option<Team>, DomainError> {
        self.storage.get(id).await
    }

    async fn find_by_alias(&self, alias: &str) -> Result<Option<Team>, DomainError> {
        let teams = self.storage.list().await?;

        Ok(teams.into_iter().find(|t| t.alias().as_str() == alias))
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Team>, DomainError> {
        let teams = self.storage.list().await?;

        Ok(teams.into_iter().find(|t| t.name() == name))
    }

    async fn list_for_member(&self, user_id: &str) -> Result<Vec<Team>, DomainError> {
        let teams = self.storage.list().await?;
        let mut result: Vec<Team> = teams
            .into_iter()
            .filter(|t| t.contains_user(user_id))
            .collect();

        result.sort_by(|a, b| a.name().cmp(b.name()));

        Ok(result)
    }

    async fn create(&self, team: Team) -> Result<Team, DomainError> {
        if self.find_by_name(team.name()).await?.is_some() {
            return Err(DomainError::conflict(format!(
                "Team named '{}' already exists",
                team.name()
            )));
        }

        if self.find_by_alias(team.alias().as_str()).await?.is_some() {
            return Err(DomainError::conflict(format!(
                "Team alias '{}' already exists",
                team.alias()
            )));
        }

        self.storage.create(team).await
    }

    async fn update(&self, team: Team) -> Result<Team, DomainError> {
        if !self.storage.exists(team.id()).await? {
            return Err(DomainError::not_found(format!(
                "Team '{}' not found",
                team.id()
            )));
        }

        self.storage.update(team).await
    }

    async fn delete(&self, id: &TeamId) -> Result<bool, DomainError> {
        self.storage.delete(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::team::TeamAlias;
    use crate::infrastructure::storage::InMemoryStorage;

    fn create_repo() -> StorageTeamRepository {
        let storage = Arc::new(InMemoryStorage::<Team>::new());
        StorageTeamRepository::new(storage)
    }

    fn create_team(name: &str, alias: &str, owner: &str) -> Team {
        Team::new(name, TeamAlias::new(alias).unwrap(), owner).unwrap()
    }

    #[tokio::test]
    async fn test_create_and_get() {
        let repo = create_repo();
        let team = create_team("Team One", "team-one", "alice");
        let id = team.id().clone();

        repo.create(team).await.unwrap();

        let retrieved = repo.get(&id).await.unwrap();
        assert_eq!(retrieved.unwrap().name(), "Team One");
    }

    #[tokio::test]
    async fn test_create_duplicate_name() {
        let repo = create_repo();

        repo.create(create_team("Team One", "team-one", "alice"))
            .await
            .unwrap();

        let result = repo.create(create_team("Team One", "other-alias", "bob")).await;
        assert!(matches!(result, Err(DomainError::Conflict { .. })));
    }

    #[tokio::test]
    async fn test_create_duplicate_alias() {
        let repo = create_repo();

        repo.create(create_team("Team One", "team-one", "alice"))
            .await
            .unwrap();

        let result = repo.create(create_team("Other Name", "team-one", "bob")).await;
        assert!(matches!(result, Err(DomainError::Conflict { .. })));
    }

    #[tokio::test]
    async fn test_find_by_alias() {
        let repo = create_repo();

        repo.create(create_team("Team One", "team-one", "alice"))
            .await
            .unwrap();

        let found = repo.find_by_alias("team-one").await.unwrap();
        assert_eq!(found.unwrap().name(), "Team One");

        assert!(repo.find_by_alias("missing").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_find_by_name() {
        let repo = create_repo();

        repo.create(create_team("Team One", "team-one", "alice"))
            .await
            .unwrap();

        let found = repo.find_by_name("Team One").await.unwrap();
        assert_eq!(found.unwrap().alias().as_str(), "team-one");
    }

    #[tokio::test]
    async fn test_list_for_member_sorted_by_name() {
        let repo = create_repo();

        let mut zulu = create_team("Zulu", "zulu", "alice");
        zulu.add_users(&["bob".to_string()]).unwrap();
        repo.create(zulu).await.unwrap();

        repo.create(create_team("Alpha", "alpha", "bob")).await.unwrap();
        repo.create(create_team("Mid", "mid", "carol")).await.unwrap();

        let teams = repo.list_for_member("bob").await.unwrap();
        assert_eq!(teams.len(), 2);
        assert_eq!(teams[0].name(), "Alpha");
        assert_eq!(teams[1].name(), "Zulu");
    }

    #[tokio::test]
    async fn test_update_nonexistent() {
        let repo = create_repo();
        let team = create_team("Team One", "team-one", "alice");

        let result = repo.update(team).await;
        assert!(matches!(result, Err(DomainError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_delete() {
        let repo = create_repo();
        let team = create_team("Team One", "team-one", "alice");
        let id = team.id().clone();

        repo.create(team).await.unwrap();

        assert!(repo.delete(&id).await.unwrap());
        assert!(repo.get(&id).await.unwrap().is_none());
        assert!(!repo.delete(&id).await.unwrap());
    }
}
