//! Storage factory for runtime backend selection

use std::sync::Arc;

use crate::domain::storage::{Storage, StorageEntity};
use crate::domain::DomainError;

use super::in_memory::InMemoryStorage;
use super::postgres::{PostgresConfig, PostgresStorage};

/// Supported storage backends
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
    /// In-memory storage (for testing/development)
    InMemory,
    /// PostgreSQL storage
    Postgres,
}

impl StorageBackend {
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "memory" | "inmemory" | "in-memory" | "in_memory" => Some(Self::InMemory),
            "postgres" | "postgresql" | "pg" => Some(Self::Postgres),
            _ => None,
        }
    }
}

/// Storage configuration
#[derive(Debug, Clone)]
pub enum StorageConfig {
    /// In-memory storage configuration
    InMemory,
    /// PostgreSQL storage configuration
    Postgres(PostgresConfig),
}

impl StorageConfig {
    /// Creates an in-memory storage configuration
    pub fn in_memory() -> Self {
        Self::InMemory
    }

    /// Creates a PostgreSQL configuration from a URL
    pub fn postgres_url(url: impl Into<String>) -> Self {
        Self::Postgres(PostgresConfig::new(url))
    }

    /// Returns the configured backend
    pub fn backend(&self) -> StorageBackend {
        match self {
            Self::InMemory => StorageBackend::InMemory,
            Self::Postgres(_) => StorageBackend::Postgres,
        }
    }
}

/// Factory for creating storage instances
#[derive(Debug)]
pub struct StorageFactory;

impl StorageFactory {
    /// Creates a storage instance for the given configuration
    pub async fn create<E>(
        config: &StorageConfig,
        table_name: &str,
    ) -> Result<Arc<dyn Storage<E>>, DomainError>
    where
        E: StorageEntity + 'static,
    {
        match config {
            StorageConfig::InMemory => Ok(Arc::new(InMemoryStorage::<E>::new())),
            StorageConfig::Postgres(pg_config) => {
                let storage = PostgresStorage::<E>::connect(pg_config, table_name).await?;
                storage.ensure_table().await?;
                Ok(Arc::new(storage))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_parse() {
        assert_eq!(
            StorageBackend::parse("memory"),
            Some(StorageBackend::InMemory)
        );
        assert_eq!(
            StorageBackend::parse("in-memory"),
            Some(StorageBackend::InMemory)
        );
        assert_eq!(
            StorageBackend::parse("postgres"),
            Some(StorageBackend::Postgres)
        );
        assert_eq!(StorageBackend::parse("pg"), Some(StorageBackend::Postgres));
        assert_eq!(StorageBackend::parse("unknown"), None);
    }

    #[test]
    fn test_storage_config_backend() {
        assert_eq!(
            StorageConfig::in_memory().backend(),
            StorageBackend::InMemory
        );
        assert_eq!(
            StorageConfig::postgres_url("postgres://localhost/roster").backend(),
            StorageBackend::Postgres
        );
    }
}
