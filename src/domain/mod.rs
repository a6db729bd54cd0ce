//! Domain layer - Core business logic and entities

pub mod error;
pub mod storage;
pub mod team;
pub mod user;

pub use error::DomainError;
pub use storage::{Storage, StorageEntity, StorageKey};
pub use team::{Team, TeamAccessError, TeamAlias, TeamId, TeamRepository};
pub use user::{User, UserId, UserRepository, UserStatus};
