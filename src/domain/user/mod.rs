//! User domain module

mod entity;
mod repository;
mod validation;

pub use entity::{User, UserId, UserStatus};
pub use repository::UserRepository;
pub use validation::{
    validate_password, validate_user_id, validate_username, UserValidationError,
};
