//! Team repository trait

use async_trait::async_trait;

use super::entity::{Team, TeamId};
use crate::domain::DomainError;

/// Repository for managing teams
///
/// Teams are addressed by opaque id in storage but looked up by alias or
/// name at the API surface, so the repository carries secondary lookups.
#[async_trait]
pub trait TeamRepository: Send + Sync + std::fmt::Debug {
    /// Get a team by ID
    async fn get(&self, id: &TeamId) -> Result<Option<Team>, DomainError>;

    /// Find a team by its alias
    async fn find_by_alias(&self, alias: &str) -> Result<Option<Team>, DomainError>;

    /// Find a team by its display name
    async fn find_by_name(&self, name: &str) -> Result<Option<Team>, DomainError>;

    /// List all teams where `username` is a member, sorted by name
    async fn list_for_member(&self, username: &str) -> Result<Vec<Team>, DomainError>;

    /// Create a new team; fails if the name or alias is already taken
    async fn create(&self, team: Team) -> Result<Team, DomainError>;

    /// Update an existing team
    async fn update(&self, team: Team) -> Result<Team, DomainError>;

    /// Delete a team by ID
    async fn delete(&self, id: &TeamId) -> Result<bool, DomainError>;
}
