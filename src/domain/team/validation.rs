//! Team validation

use thiserror::Error;

/// Errors that can occur during team validation
#[derive(Debug, Error, Clone, PartialEq)]
pub enum TeamValidationError {
    #[error("Team alias cannot be empty")]
    EmptyAlias,

    #[error("Team alias cannot exceed {0} characters")]
    AliasTooLong(usize),

    #[error("Team alias can only contain alphanumeric characters and hyphens")]
    InvalidAliasCharacters,

    #[error("Team alias cannot start or end with a hyphen")]
    InvalidAliasFormat,

    #[error("Team name cannot be empty")]
    EmptyName,

    #[error("Team name cannot exceed {0} characters")]
    NameTooLong(usize),
}

const MAX_TEAM_ALIAS_LENGTH: usize = 50;
const MAX_TEAM_NAME_LENGTH: usize = 100;

/// Validate a team alias
pub fn validate_team_alias(alias: &str) -> Result<(), TeamValidationError> {
    if alias.is_empty() {
        return Err(TeamValidationError::EmptyAlias);
    }

    if alias.len() > MAX_TEAM_ALIAS_LENGTH {
        return Err(TeamValidationError::AliasTooLong(MAX_TEAM_ALIAS_LENGTH));
    }

    if !alias
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-')
    {
        return Err(TeamValidationError::InvalidAliasCharacters);
    }

    if alias.starts_with('-') || alias.ends_with('-') {
        return Err(TeamValidationError::InvalidAliasFormat);
    }

    Ok(())
}

/// Validate a team name
pub fn validate_team_name(name: &str) -> Result<(), TeamValidationError> {
    if name.is_empty() {
        return Err(TeamValidationError::EmptyName);
    }

    if name.len() > MAX_TEAM_NAME_LENGTH {
        return Err(TeamValidationError::NameTooLong(MAX_TEAM_NAME_LENGTH));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_team_alias() {
        assert!(validate_team_alias("infra").is_ok());
        assert!(validate_team_alias("team123").is_ok());
        assert!(validate_team_alias("Platform-Eng").is_ok());
    }

    #[test]
    fn test_empty_team_alias() {
        assert_eq!(validate_team_alias(""), Err(TeamValidationError::EmptyAlias));
    }

    #[test]
    fn test_team_alias_too_long() {
        let long_alias = "a".repeat(51);
        assert_eq!(
            validate_team_alias(&long_alias),
            Err(TeamValidationError::AliasTooLong(50))
        );
    }

    #[test]
    fn test_invalid_team_alias_characters() {
        assert_eq!(
            validate_team_alias("team_name"),
            Err(TeamValidationError::InvalidAliasCharacters)
        );
        assert_eq!(
            validate_team_alias("team.name"),
            Err(TeamValidationError::InvalidAliasCharacters)
        );
    }

    #[test]
    fn test_invalid_team_alias_format() {
        assert_eq!(
            validate_team_alias("-team"),
            Err(TeamValidationError::InvalidAliasFormat)
        );
        assert_eq!(
            validate_team_alias("team-"),
            Err(TeamValidationError::InvalidAliasFormat)
        );
    }

    #[test]
    fn test_valid_team_name() {
        assert!(validate_team_name("Infrastructure").is_ok());
        assert!(validate_team_name("Team with spaces & symbols!").is_ok());
    }

    #[test]
    fn test_empty_team_name() {
        assert_eq!(validate_team_name(""), Err(TeamValidationError::EmptyName));
    }

    #[test]
    fn test_team_name_too_long() {
        let long_name = "a".repeat(101);
        assert_eq!(
            validate_team_name(&long_name),
            Err(TeamValidationError::NameTooLong(100))
        );
    }
}
