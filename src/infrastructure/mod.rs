//! Infrastructure layer: storage backends, services and cross-cutting concerns

pub mod auth;
pub mod logging;
pub mod storage;
pub mod team;
pub mod user;
