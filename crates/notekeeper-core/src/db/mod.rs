//! Data-access layer for NoteKeeper

mod repository;

pub use repository::{DocumentRepository, NoteRepository, NotebookRepository};
