//! # Key-Value Slots
//!
//! A string-keyed, string-valued store with the semantics of browser local
//! storage: reads return the last value written, writes replace the value
//! whole.
//!
//! ## Available Stores
//!
//! - [`FileStore`](file::FileStore) - one JSON file per key in a data directory
//! - [`MemoryStore`](memory::MemoryStore) - process-local map, for tests and demos

pub mod file;
pub mod memory;

use crate::error::StorageResult;

/// A durable key-value slot.
///
/// Implementations must make `set` all-or-nothing: after a failed write the
/// previous value is still readable.
pub trait KeyValueStore: Send + Sync {
    /// Reads the value under `key`, or `None` if nothing was ever written.
    fn get(&self, key: &str) -> StorageResult<Option<String>>;

    /// Replaces the value under `key`.
    fn set(&self, key: &str, value: &str) -> StorageResult<()>;
}
