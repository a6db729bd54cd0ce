//! Team management endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::api::middleware::RequireUser;
use crate::api::state::AppState;
use crate::api::types::{ApiError, Json, BAD_REQUEST_BODY};
use crate::domain::team::Team;
use crate::infrastructure::team::CreateTeamRequest;

/// Request to create a new team
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTeamApiRequest {
    pub name: String,
    #[serde(default)]
    pub alias: Option<String>,
}

/// Request to add or remove team members
///
/// The `users` field is kept optional so its absence can be reported as
/// a malformed body rather than a deserialization failure. Entries are
/// raw JSON values; anything that is not a string is dropped.
#[derive(Debug, Clone, Deserialize)]
pub struct MembersApiRequest {
    #[serde(default)]
    pub users: Option<Vec<serde_json::Value>>,
}

/// Team representation returned by all team endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamResponse {
    /// Cleared in delete responses to signal the resource is gone
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub alias: String,
    pub owner: String,
    pub users: Vec<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<&Team> for TeamResponse {
    fn from(team: &Team) -> Self {
        Self {
            id: Some(team.id().to_string()),
            name: team.name().to_string(),
            alias: team.alias().as_str().to_string(),
            owner: team.owner().to_string(),
            users: team.users().to_vec(),
            created_at: team.created_at().to_rfc3339(),
            updated_at: team.updated_at().to_rfc3339(),
        }
    }
}

impl TeamResponse {
    fn deleted(team: &Team) -> Self {
        let mut response = Self::from(team);
        response.id = None;
        response
    }
}

/// Keeps string entries, drops everything else
fn extract_member_ids(values: &[serde_json::Value]) -> Vec<String> {
    values
        .iter()
        .filter_map(|v| v.as_str().map(String::from))
        .collect()
}

/// POST /teams
pub async fn create_team(
    State(state): State<AppState>,
    RequireUser(user): RequireUser,
    Json(request): Json<CreateTeamApiRequest>,
) -> Result<(StatusCode, Json<TeamResponse>), ApiError> {
    debug!(name = %request.name, requester = %user.id(), "Creating team");

    let service_request = CreateTeamRequest {
        name: request.name,
        alias: request.alias,
    };

    let team = state.team_service.create(&user, service_request).await?;

    Ok((StatusCode::CREATED, Json(TeamResponse::from(&team))))
}

/// DELETE /teams/{alias}
pub async fn delete_team(
    State(state): State<AppState>,
    RequireUser(user): RequireUser,
    Path(alias): Path<String>,
) -> Result<Json<TeamResponse>, ApiError> {
    debug!(alias = %alias, requester = %user.id(), "Deleting team");

    let team = state.team_service.delete(&user, &alias).await?;

    Ok(Json(TeamResponse::deleted(&team)))
}

/// GET /teams
pub async fn list_teams(
    State(state): State<AppState>,
    RequireUser(user): RequireUser,
) -> Result<Json<Vec<TeamResponse>>, ApiError> {
    debug!(requester = %user.id(), "Listing teams");

    let teams = state.team_service.list_for_user(&user).await?;

    Ok(Json(teams.iter().map(TeamResponse::from).collect()))
}

/// GET /teams/{alias}
pub async fn get_team_info(
    State(state): State<AppState>,
    RequireUser(user): RequireUser,
    Path(alias): Path<String>,
) -> Result<Json<TeamResponse>, ApiError> {
    debug!(alias = %alias, requester = %user.id(), "Getting team info");

    let team = state.team_service.get_info(&user, &alias).await?;

    Ok(Json(TeamResponse::from(&team)))
}

/// POST /teams/{alias}/users
pub async fn add_team_members(
    State(state): State<AppState>,
    RequireUser(user): RequireUser,
    Path(alias): Path<String>,
    Json(request): Json<MembersApiRequest>,
) -> Result<(StatusCode, Json<TeamResponse>), ApiError> {
    // Body shape is checked before touching the store
    let users = request
        .users
        .ok_or_else(|| ApiError::bad_request(BAD_REQUEST_BODY))?;
    let member_ids = extract_member_ids(&users);

    debug!(alias = %alias, requester = %user.id(), count = member_ids.len(), "Adding team members");

    let team = state
        .team_service
        .add_members(&user, &alias, &member_ids)
        .await?;

    Ok((StatusCode::CREATED, Json(TeamResponse::from(&team))))
}

/// DELETE /teams/{alias}/users
pub async fn remove_team_members(
    State(state): State<AppState>,
    RequireUser(user): RequireUser,
    Path(alias): Path<String>,
    Json(request): Json<MembersApiRequest>,
) -> Result<Json<TeamResponse>, ApiError> {
    let users = request
        .users
        .ok_or_else(|| ApiError::bad_request(BAD_REQUEST_BODY))?;
    let member_ids = extract_member_ids(&users);

    debug!(alias = %alias, requester = %user.id(), count = member_ids.len(), "Removing team members");

    let team = state
        .team_service
        .remove_members(&user, &alias, &member_ids)
        .await?;

    Ok(Json(TeamResponse::from(&team)))
}
