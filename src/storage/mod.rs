//! Storage layer for Venn
//!
//! Provides the string-valued key-value store that holds the persisted session
//! and theme mode, with atomic JSON file writes.

pub mod file_io;
pub mod kv;

pub use file_io::{read_json, write_json_atomic};
pub use kv::{FileStore, KeyValueStore, MemoryStore, SESSION_KEY, THEME_MODE_KEY};

use thiserror::Error;

/// Errors raised by the persistence layer
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StorageError {
    /// The backing medium could not be read or written
    #[error("Storage I/O error: {0}")]
    Io(String),

    /// Stored data exists but cannot be parsed
    #[error("Store is corrupt: {0}")]
    Corrupt(String),

    /// A value could not be serialized for storage
    #[error("Failed to serialize value: {0}")]
    Serialize(String),
}
