//! Team entity and related types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::error::TeamAccessError;
use super::validation::{validate_team_alias, validate_team_name, TeamValidationError};
use crate::domain::storage::{StorageEntity, StorageKey};

/// Opaque team identifier, assigned by the service at creation
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TeamId(String);

impl TeamId {
    /// Wrap an existing identifier
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generate a fresh identifier
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    /// Get the inner string value
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for TeamId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl StorageKey for TeamId {
    fn as_str(&self) -> &str {
        &self.0
    }
}

/// Team alias - the human-readable slug used for lookup in routes
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TeamAlias(String);

impl TeamAlias {
    /// Create a new alias after validation
    pub fn new(alias: impl Into<String>) -> Result<Self, TeamValidationError> {
        let alias = alias.into();
        validate_team_alias(&alias)?;
        Ok(Self(alias))
    }

    /// Derive an alias from a display name by slugifying it
    pub fn from_name(name: &str) -> Result<Self, TeamValidationError> {
        let mut slug = String::with_capacity(name.len());
        let mut last_was_hyphen = true;

        for c in name.chars() {
            if c.is_ascii_alphanumeric() {
                slug.push(c.to_ascii_lowercase());
                last_was_hyphen = false;
            } else if !last_was_hyphen {
                slug.push('-');
                last_was_hyphen = true;
            }
        }

        let slug = slug.trim_end_matches('-').to_string();
        Self::new(slug)
    }

    /// Get the inner string value
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for TeamAlias {
    type Error = TeamValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<TeamAlias> for String {
    fn from(alias: TeamAlias) -> Self {
        alias.0
    }
}

impl std::fmt::Display for TeamAlias {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Team entity
///
/// A team has exactly one owner, fixed at creation, and a duplicate-free
/// roster of member usernames that always includes the owner.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Team {
    /// Unique identifier
    id: TeamId,
    /// Display name, unique across teams
    name: String,
    /// Lookup slug, unique across teams
    alias: TeamAlias,
    /// Username of the creating user; immutable
    owner: String,
    /// Member usernames, no duplicates
    users: Vec<String>,
    /// Creation timestamp
    created_at: DateTime<Utc>,
    /// Last update timestamp
    updated_at: DateTime<Utc>,
}

impl Team {
    /// Create a new team owned by `owner`
    pub fn new(
        name: impl Into<String>,
        alias: TeamAlias,
        owner: impl Into<String>,
    ) -> Result<Self, TeamValidationError> {
        let name = name.into();
        validate_team_name(&name)?;
        let owner = owner.into();
        let now = Utc::now();

        Ok(Self {
            id: TeamId::generate(),
            name,
            alias,
            users: vec![owner.clone()],
            owner,
            created_at: now,
            updated_at: now,
        })
    }

    // Getters

    pub fn id(&self) -> &TeamId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn alias(&self) -> &TeamAlias {
        &self.alias
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn users(&self) -> &[String] {
        &self.users
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Check whether `username` owns this team
    pub fn is_owned_by(&self, username: &str) -> bool {
        self.owner == username
    }

    /// Check whether `username` is on the roster
    pub fn contains_user(&self, username: &str) -> bool {
        self.users.iter().any(|u| u == username)
    }

    // Mutators

    /// Add users to the roster. Fails if any of them is already a member;
    /// the team is left untouched on error. Repeated entries within a
    /// single request collapse to one, so the roster stays duplicate-free.
    pub fn add_users(&mut self, usernames: &[String]) -> Result<(), TeamAccessError> {
        let mut accepted: Vec<String> = Vec::with_capacity(usernames.len());

        for username in usernames {
            if self.contains_user(username) {
                return Err(TeamAccessError::AlreadyMember(username.clone()));
            }
            if !accepted.contains(username) {
                accepted.push(username.clone());
            }
        }

        self.users.append(&mut accepted);
        self.touch();
        Ok(())
    }

    /// Remove users from the roster. The owner can never be removed, and
    /// every target must currently be a member.
    pub fn remove_users(&mut self, usernames: &[String]) -> Result<(), TeamAccessError> {
        for username in usernames {
            if self.is_owned_by(username) {
                return Err(TeamAccessError::OwnerRemoval);
            }
            if !self.contains_user(username) {
                return Err(TeamAccessError::MemberNotFound(username.clone()));
            }
        }

        self.users.retain(|u| !usernames.contains(u));
        self.touch();
        Ok(())
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

impl StorageEntity for Team {
    type Key = TeamId;

    fn key(&self) -> &Self::Key {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_team(name: &str, alias: &str, owner: &str) -> Team {
        Team::new(name, TeamAlias::new(alias).unwrap(), owner).unwrap()
    }

    #[test]
    fn test_team_alias_valid() {
        let alias = TeamAlias::new("infra").unwrap();
        assert_eq!(alias.as_str(), "infra");
    }

    #[test]
    fn test_team_alias_invalid() {
        assert!(TeamAlias::new("").is_err());
        assert!(TeamAlias::new("-infra").is_err());
        assert!(TeamAlias::new("infra-").is_err());
        assert!(TeamAlias::new("in fra").is_err());
    }

    #[test]
    fn test_team_alias_from_name() {
        let alias = TeamAlias::from_name("Platform Engineering").unwrap();
        assert_eq!(alias.as_str(), "platform-engineering");
    }

    #[test]
    fn test_team_alias_from_name_collapses_symbols() {
        let alias = TeamAlias::from_name("Infra & Ops!").unwrap();
        assert_eq!(alias.as_str(), "infra-ops");
    }

    #[test]
    fn test_team_id_generate_unique() {
        assert_ne!(TeamId::generate(), TeamId::generate());
    }

    #[test]
    fn test_team_creation_sets_owner_as_member() {
        let team = create_team("Infrastructure", "infra", "alice");

        assert_eq!(team.name(), "Infrastructure");
        assert_eq!(team.owner(), "alice");
        assert!(team.is_owned_by("alice"));
        assert!(team.contains_user("alice"));
        assert_eq!(team.users(), ["alice"]);
    }

    #[test]
    fn test_team_invalid_name() {
        let alias = TeamAlias::new("infra").unwrap();
        assert!(Team::new("", alias, "alice").is_err());
    }

    #[test]
    fn test_add_users() {
        let mut team = create_team("Infrastructure", "infra", "alice");

        team.add_users(&["bob".to_string(), "carol".to_string()]).unwrap();

        assert!(team.contains_user("bob"));
        assert!(team.contains_user("carol"));
        assert_eq!(team.users().len(), 3);
    }

    #[test]
    fn test_add_users_collapses_repeated_entries() {
        let mut team = create_team("Infrastructure", "infra", "alice");

        team.add_users(&["bob".to_string(), "bob".to_string()]).unwrap();

        assert_eq!(team.users(), &["alice".to_string(), "bob".to_string()]);
    }

    #[test]
    fn test_add_users_updates_timestamp() {
        let mut team = create_team("Infrastructure", "infra", "alice");
        let before = team.updated_at();

        std::thread::sleep(std::time::Duration::from_millis(2));
        team.add_users(&["bob".to_string()]).unwrap();

        assert!(team.updated_at() > before);
    }

    #[test]
    fn test_add_users_rejects_duplicate() {
        let mut team = create_team("Infrastructure", "infra", "alice");

        let result = team.add_users(&["alice".to_string()]);
        assert!(matches!(result, Err(TeamAccessError::AlreadyMember(_))));
        assert_eq!(team.users().len(), 1);
    }

    #[test]
    fn test_remove_users() {
        let mut team = create_team("Infrastructure", "infra", "alice");
        team.add_users(&["bob".to_string()]).unwrap();

        team.remove_users(&["bob".to_string()]).unwrap();
        assert!(!team.contains_user("bob"));
    }

    #[test]
    fn test_remove_owner_rejected() {
        let mut team = create_team("Infrastructure", "infra", "alice");
        team.add_users(&["bob".to_string()]).unwrap();

        let result = team.remove_users(&["bob".to_string(), "alice".to_string()]);
        assert!(matches!(result, Err(TeamAccessError::OwnerRemoval)));
        // Roster untouched on error
        assert!(team.contains_user("bob"));
    }

    #[test]
    fn test_remove_nonexistent_member_rejected() {
        let mut team = create_team("Infrastructure", "infra", "alice");

        let result = team.remove_users(&["mallory".to_string()]);
        assert!(matches!(result, Err(TeamAccessError::MemberNotFound(_))));
    }

    #[test]
    fn test_team_serialization_round_trip() {
        let team = create_team("Infrastructure", "infra", "alice");

        let json = serde_json::to_string(&team).unwrap();
        let parsed: Team = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.id(), team.id());
        assert_eq!(parsed.alias(), team.alias());
        assert_eq!(parsed.users(), team.users());
    }
}
