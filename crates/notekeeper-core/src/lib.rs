//! notekeeper-core - Core library for NoteKeeper
//!
//! This crate contains the notebook/note models, the key-value storage
//! backends, the document repository, and the client layer that keeps the
//! rendered view in sync with the stored data.

pub mod app;
pub mod client;
pub mod db;
pub mod error;
pub mod models;
pub mod storage;
pub mod theme;
pub mod util;

pub use app::App;
pub use client::{Client, DeleteConfirmModal, NoteModal, View};
pub use error::{Error, Result};
pub use models::{Document, Note, NoteId, NoteInput, Notebook, NotebookId};
