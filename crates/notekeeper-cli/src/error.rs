use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Core(#[from] notekeeper_core::Error),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
    #[error("No note title or text provided")]
    EmptyContent,
    #[error("Nothing to change: pass --title and/or --text")]
    NothingToEdit,
    #[error("ID cannot be empty")]
    EmptyId,
    #[error("Notebook not found for id/prefix/name: {0}")]
    NotebookNotFound(String),
    #[error("Note not found for id/prefix: {0}")]
    NoteNotFound(String),
    #[error("{0}")]
    AmbiguousId(String),
    #[error("Could not resolve a data directory; pass --db-path or set NOTEKEEPER_DB_PATH")]
    NoDataDir,
}
