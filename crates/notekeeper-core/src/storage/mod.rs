//! Key-value storage backends
//!
//! The whole application state lives in a handful of string values, the same
//! shape as browser `localStorage`. Backends only need to get, set and remove
//! a string by key.

mod memory;
mod migrations;
mod sqlite;

pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

use crate::error::Result;

/// Key holding the serialized notebook/note document
pub const DOCUMENT_KEY: &str = "notekeeperDB";

/// Key holding the theme preference
pub const THEME_KEY: &str = "theme";

/// String key-value storage
pub trait KeyValueStore {
    /// Read the value stored under `key`, if any
    fn get_item(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value
    fn set_item(&self, key: &str, value: &str) -> Result<()>;

    /// Remove `key`; removing a missing key is not an error
    fn remove_item(&self, key: &str) -> Result<()>;
}
