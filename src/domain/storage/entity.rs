//! Key and entity traits for the storage layer

use std::fmt::Debug;
use std::hash::Hash;

use serde::{de::DeserializeOwned, Serialize};

/// A storage key - a typed wrapper around a string identifier
pub trait StorageKey: Debug + Clone + PartialEq + Eq + Hash + Send + Sync {
    /// Returns the key as a string slice
    fn as_str(&self) -> &str;
}

/// An entity that can be persisted by a [`Storage`](super::Storage) backend
pub trait StorageEntity:
    Debug + Clone + Serialize + DeserializeOwned + Send + Sync
{
    /// The key type used to identify this entity
    type Key: StorageKey;

    /// Returns the key identifying this entity
    fn key(&self) -> &Self::Key;
}
