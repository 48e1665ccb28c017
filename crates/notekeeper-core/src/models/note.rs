//! Note model

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use super::NotebookId;

/// A unique identifier for a note, using UUID v7 (time-sortable)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct NoteId(Uuid);

impl NoteId {
    /// Create a new unique note ID from the current timestamp
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    /// Get the string representation of this ID
    #[must_use]
    pub fn as_str(&self) -> String {
        self.0.to_string()
    }
}

impl Default for NoteId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for NoteId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

/// Title and text entered in the note editor
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteInput {
    pub title: String,
    pub text: String,
}

impl NoteInput {
    pub fn new(title: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            text: text.into(),
        }
    }

    /// True when both title and text are empty or whitespace-only
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.title.trim().is_empty() && self.text.trim().is_empty()
    }
}

/// A titled text entry belonging to exactly one notebook
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    /// Unique identifier
    pub id: NoteId,
    /// Owning notebook
    pub notebook_id: NotebookId,
    pub title: String,
    pub text: String,
    /// Last save timestamp (Unix ms)
    pub posted_on: i64,
}

impl Note {
    /// Create a new note in the given notebook, stamped with the current time
    #[must_use]
    pub fn new(notebook_id: NotebookId, input: NoteInput) -> Self {
        Self {
            id: NoteId::new(),
            notebook_id,
            title: input.title,
            text: input.text,
            posted_on: chrono::Utc::now().timestamp_millis(),
        }
    }

    /// Replace title and text, refreshing the posted timestamp
    pub fn apply(&mut self, input: NoteInput) {
        self.title = input.title;
        self.text = input.text;
        self.posted_on = chrono::Utc::now().timestamp_millis();
    }
}
