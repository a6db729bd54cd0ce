//! Application state for shared services

use std::sync::Arc;

use crate::domain::team::{Team, TeamAccessError, TeamRepository};
use crate::domain::user::{User, UserRepository};
use crate::domain::DomainError;
use crate::infrastructure::auth::JwtGenerator;
use crate::infrastructure::team::{CreateTeamRequest, TeamService};
use crate::infrastructure::user::{CreateUserRequest, PasswordHasher, UserService};

/// Application state containing shared services using dynamic dispatch
#[derive(Clone)]
pub struct AppState {
    pub team_service: Arc<dyn TeamServiceTrait>,
    pub user_service: Arc<dyn UserServiceTrait>,
    pub jwt_service: Arc<dyn JwtGenerator>,
}

/// Trait for team service operations
#[async_trait::async_trait]
pub trait TeamServiceTrait: Send + Sync {
    async fn create(
        &self,
        requester: &User,
        request: CreateTeamRequest,
    ) -> Result<Team, TeamAccessError>;
    async fn delete(&self, requester: &User, alias: &str) -> Result<Team, TeamAccessError>;
    async fn list_for_user(&self, requester: &User) -> Result<Vec<Team>, TeamAccessError>;
    async fn get_info(&self, requester: &User, alias: &str) -> Result<Team, TeamAccessError>;
    async fn add_members(
        &self,
        requester: &User,
        alias: &str,
        user_ids: &[String],
    ) -> Result<Team, TeamAccessError>;
    async fn remove_members(
        &self,
        requester: &User,
        alias: &str,
        user_ids: &[String],
    ) -> Result<Team, TeamAccessError>;
}

/// Trait for user service operations
#[async_trait::async_trait]
pub trait UserServiceTrait: Send + Sync {
    async fn create(&self, request: CreateUserRequest) -> Result<User, DomainError>;
    async fn authenticate(
        &self,
        username: &str,
        password: &str,
    ) -> Result<Option<User>, DomainError>;
    async fn get(&self, id: &str) -> Result<Option<User>, DomainError>;
    async fn get_by_username(&self, username: &str) -> Result<Option<User>, DomainError>;
}

#[async_trait::async_trait]
impl<R: TeamRepository + 'static> TeamServiceTrait for TeamService<R> {
    async fn create(
        &self,
        requester: &User,
        request: CreateTeamRequest,
    ) -> Result<Team, TeamAccessError> {
        TeamService::create(self, requester, request).await
    }

    async fn delete(&self, requester: &User, alias: &str) -> Result<Team, TeamAccessError> {
        TeamService::delete(self, requester, alias).await
    }

    async fn list_for_user(&self, requester: &User) -> Result<Vec<Team>, TeamAccessError> {
        TeamService::list_for_user(self, requester).await
    }

    async fn get_info(&self, requester: &User, alias: &str) -> Result<Team, TeamAccessError> {
        TeamService::get_info(self, requester, alias).await
    }

    async fn add_members(
        &self,
        requester: &User,
        alias: &str,
        user_ids: &[String],
    ) -> Result<Team, TeamAccessError> {
        TeamService::add_members(self, requester, alias, user_ids).await
    }

    async fn remove_members(
        &self,
        requester: &User,
        alias: &str,
        user_ids: &[String],
    ) -> Result<Team, TeamAccessError> {
        TeamService::remove_members(self, requester, alias, user_ids).await
    }
}

#[async_trait::async_trait]
impl<R: UserRepository + 'static, H: PasswordHasher + 'static> UserServiceTrait
    for UserService<R, H>
{
    async fn create(&self, request: CreateUserRequest) -> Result<User, DomainError> {
        UserService::create(self, request).await
    }

    async fn authenticate(
        &self,
        username: &str,
        password: &str,
    ) -> Result<Option<User>, DomainError> {
        UserService::authenticate(self, username, password).await
    }

    async fn get(&self, id: &str) -> Result<Option<User>, DomainError> {
        UserService::get(self, id).await
    }

    async fn get_by_username(&self, username: &str) -> Result<Option<User>, DomainError> {
        UserService::get_by_username(self, username).await
    }
}

impl AppState {
    /// Create new application state with provided services
    pub fn new(
        team_service: Arc<dyn TeamServiceTrait>,
        user_service: Arc<dyn UserServiceTrait>,
        jwt_service: Arc<dyn JwtGenerator>,
    ) -> Self {
        Self {
            team_service,
            user_service,
            jwt_service,
        }
    }
}
