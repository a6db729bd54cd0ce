//! Storage backend implementations

pub mod factory;
pub mod in_memory;
pub mod postgres;

pub use factory::{StorageBackend, StorageConfig, StorageFactory};
pub use in_memory::InMemoryStorage;
pub use postgres::{PostgresConfig, PostgresStorage};
