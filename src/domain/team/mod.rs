//! Team domain module
//!
//! A team is the unit of shared ownership: one owner, a duplicate-free
//! roster of members, and an alias used for lookup at the API surface.

mod entity;
mod error;
mod repository;
mod validation;

pub use entity::{Team, TeamAlias, TeamId};
pub use error::TeamAccessError;
pub use repository::TeamRepository;
pub use validation::{validate_team_alias, validate_team_name, TeamValidationError};
