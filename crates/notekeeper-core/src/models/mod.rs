//! Data models for NoteKeeper

mod document;
mod note;
mod notebook;

pub use document::Document;
pub use note::{Note, NoteId, NoteInput};
pub use notebook::{Notebook, NotebookId};
