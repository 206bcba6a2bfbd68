//! Durable string slots keyed by name.
//!
//! The history only needs `get` and `set`; [`SqliteStore`](sqlite::SqliteStore)
//! persists to disk, [`MemoryStore`](memory::MemoryStore) is the in-memory
//! fake used by tests.

pub mod memory;
pub mod sqlite;

use anyhow::Result;

/// A synchronous key-value capability.
pub trait KeyValueStore: Send + Sync {
    /// Read a slot. `None` if it was never written.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Overwrite a slot.
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Drop a slot. Removing a missing key is not an error.
    fn remove(&self, key: &str) -> Result<()>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for std::sync::Arc<S> {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<()> {
        (**self).remove(key)
    }
}
