//! Team infrastructure: repository and service implementations

pub mod repository;
pub mod service;

pub use repository::StorageTeamRepository;
pub use service::{CreateTeamRequest, TeamService};
