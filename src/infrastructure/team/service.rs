//! Team service enforcing ownership and membership rules

use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::team::{
    validate_team_name, Team, TeamAccessError, TeamAlias, TeamRepository,
};
use crate::domain::user::User;
use crate::domain::DomainError;

/// Request for creating a new team
#[derive(Debug, Clone)]
pub struct CreateTeamRequest {
    pub name: String,
    /// Derived from the name when absent
    pub alias: Option<String>,
}

/// Team service for managing teams and their rosters
///
/// Every operation takes the authenticated requester and checks their
/// relationship to the team before touching it: reads require
/// membership, deletion requires ownership. Callers that fail the check
/// get a [`TeamAccessError`] and the team stays untouched.
#[derive(Debug)]
pub struct TeamService<R: TeamRepository> {
    repository: Arc<R>,
}

impl<R: TeamRepository> TeamService<R> {
    /// Create a new team service
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Create a new team owned by the requester
    ///
    /// The requester becomes the owner and the only initial member. The
    /// alias is derived from the name when the request omits one.
    pub async fn create(
        &self,
        requester: &User,
        request: CreateTeamRequest,
    ) -> Result<Team, TeamAccessError> {
        info!(name = %request.name, owner = %requester.id(), "Creating team");

        validate_team_name(&request.name)
            .map_err(|e| DomainError::validation(e.to_string()))?;

        let alias = match request.alias {
            Some(alias) => TeamAlias::new(alias),
            None => TeamAlias::from_name(&request.name),
        }
        .map_err(|e| DomainError::validation(e.to_string()))?;

        let team = Team::new(&request.name, alias, requester.id().as_str())
            .map_err(|e| DomainError::validation(e.to_string()))?;

        Ok(self.repository.create(team).await?)
    }

    /// Delete a team by alias
    ///
    /// Only the owner may delete. A team that does not exist and a team
    /// the requester does not own produce the same error, so callers
    /// cannot probe for team existence through this operation.
    pub async fn delete(
        &self,
        requester: &User,
        alias: &str,
    ) -> Result<Team, TeamAccessError> {
        info!(alias = %alias, requester = %requester.id(), "Deleting team");

        let team = match self.repository.find_by_alias(alias).await? {
            Some(team) if team.is_owned_by(requester.id().as_str()) => team,
            _ => return Err(TeamAccessError::NotOwner),
        };

        self.repository.delete(team.id()).await?;

        Ok(team)
    }

    /// List the teams the requester belongs to, sorted by name
    pub async fn list_for_user(&self, requester: &User) -> Result<Vec<Team>, TeamAccessError> {
        debug!(requester = %requester.id(), "Listing teams for user");

        Ok(self
            .repository
            .list_for_member(requester.id().as_str())
            .await?)
    }

    /// Get a team the requester is a member of
    pub async fn get_info(&self, requester: &User, alias: &str) -> Result<Team, TeamAccessError> {
        let team = self.resolve(alias).await?;

        if !team.contains_user(requester.id().as_str()) {
            return Err(TeamAccessError::NotMember);
        }

        Ok(team)
    }

    /// Add users to a team the requester is a member of
    ///
    /// All-or-nothing: if any user is already on the roster, nothing is
    /// persisted.
    pub async fn add_members(
        &self,
        requester: &User,
        alias: &str,
        user_ids: &[String],
    ) -> Result<Team, TeamAccessError> {
        info!(alias = %alias, requester = %requester.id(), count = user_ids.len(), "Adding team members");

        let mut team = self.resolve(alias).await?;

        if !team.contains_user(requester.id().as_str()) {
            return Err(TeamAccessError::NotMember);
        }

        team.add_users(user_ids)?;

        Ok(self.repository.update(team).await?)
    }

    /// Remove users from a team the requester is a member of
    ///
    /// The owner can never be removed. All-or-nothing, as with
    /// [`add_members`](Self::add_members).
    pub async fn remove_members(
        &self,
        requester: &User,
        alias: &str,
        user_ids: &[String],
    ) -> Result<Team, TeamAccessError> {
        info!(alias = %alias, requester = %requester.id(), count = user_ids.len(), "Removing team members");

        let mut team = self.resolve(alias).await?;

        if !team.contains_user(requester.id().as_str()) {
            return Err(TeamAccessError::NotMember);
        }

        team.remove_users(user_ids)?;

        Ok(self.repository.update(team).await?)
    }

    async fn resolve(&self, alias: &str) -> Result<Team, TeamAccessError> {
        self.repository
            .find_by_alias(alias)
            .await?
            .ok_or_else(|| TeamAccessError::TeamNotFound(alias.to_string()))
    }
}
