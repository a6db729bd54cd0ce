//! User infrastructure: password hashing, repository and service

pub mod password;
pub mod repository;
pub mod service;

pub use password::{Argon2Hasher, PasswordHasher};
pub use repository::StorageUserRepository;
pub use service::{CreateUserRequest, UserService};
