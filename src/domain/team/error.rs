//! Team access error taxonomy
//!
//! Every failure of a team operation carries a tagged kind; the API layer
//! owns the single kind-to-status translation table.

use thiserror::Error;

use crate::domain::DomainError;

/// Errors raised while authorizing and applying team operations
#[derive(Debug, Error)]
pub enum TeamAccessError {
    /// The referenced team does not exist
    #[error("Team '{0}' not found.")]
    TeamNotFound(String),

    /// The requester is not a member of the team
    #[error("You do not belong to this team!")]
    NotMember,

    /// Deletion requested by someone other than the owner. Existence of the
    /// team is deliberately not disclosed here.
    #[error("Team not found or you're not the owner.")]
    NotOwner,

    /// The user is already on the roster
    #[error("User '{0}' is already a member of this team.")]
    AlreadyMember(String),

    /// Removal target is not on the roster
    #[error("User '{0}' is not a member of this team.")]
    MemberNotFound(String),

    /// The owner can never be removed from their own team
    #[error("It is not possible to remove the owner from the team.")]
    OwnerRemoval,

    /// Underlying storage or validation failure
    #[error(transparent)]
    Domain(#[from] DomainError),
}
