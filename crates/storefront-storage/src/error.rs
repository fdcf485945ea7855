//! # Storage Error Types
//!
//! Error types for the durable cart slot.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  std::io::Error / serde_json::Error                                    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  StorageError (this module) ← Adds the key and categorization          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  CartError::Storage (in app) ← mapped to the operation's toast          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

/// Storage operation errors.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Reading the slot failed (other than the slot being absent).
    #[error("Failed to read '{key}': {reason}")]
    ReadFailed { key: String, reason: String },

    /// Writing the slot failed; the previous value is still in place.
    #[error("Failed to write '{key}': {reason}")]
    WriteFailed { key: String, reason: String },

    /// The slot holds something that is not a valid cart.
    #[error("Stored value under '{key}' is not a valid cart: {reason}")]
    Corrupt { key: String, reason: String },

    /// Serializing a value for storage failed.
    #[error("Serialization failed: {0}")]
    Serialization(String),

    /// The backing store cannot be used (e.g. a poisoned lock).
    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}

impl StorageError {
    /// Creates a ReadFailed error for a key.
    pub fn read(key: impl Into<String>, reason: impl ToString) -> Self {
        StorageError::ReadFailed {
            key: key.into(),
            reason: reason.to_string(),
        }
    }

    /// Creates a WriteFailed error for a key.
    pub fn write(key: impl Into<String>, reason: impl ToString) -> Self {
        StorageError::WriteFailed {
            key: key.into(),
            reason: reason.to_string(),
        }
    }
}

impl From<serde_json::Error> for StorageError {
    fn from(err: serde_json::Error) -> Self {
        StorageError::Serialization(err.to_string())
    }
}

/// Result type for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;
