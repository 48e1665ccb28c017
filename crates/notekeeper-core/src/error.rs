//! Error types for notekeeper-core

use thiserror::Error;

/// Result type alias using notekeeper-core's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in notekeeper-core operations
#[derive(Error, Debug)]
pub enum Error {
    /// A notebook, note, or rendered item does not exist
    #[error("Not found: {0}")]
    NotFound(String),

    /// A required field was missing or blank
    #[error("Validation error: {0}")]
    Validation(String),

    /// `SQLite` error
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Error {
    pub(crate) fn notebook_not_found(id: impl std::fmt::Display) -> Self {
        Self::NotFound(format!("notebook {id}"))
    }

    pub(crate) fn note_not_found(id: impl std::fmt::Display) -> Self {
        Self::NotFound(format!("note {id}"))
    }
}
