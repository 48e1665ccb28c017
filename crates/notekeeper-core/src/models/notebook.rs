//! Notebook model

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// A unique identifier for a notebook, using UUID v7 (time-sortable)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct NotebookId(Uuid);

impl NotebookId {
    /// Create a new unique notebook ID from the current timestamp
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

impl Default for NotebookId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for NotebookId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for NotebookId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

/// A named container grouping notes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notebook {
    /// Unique identifier
    pub id: NotebookId,
    /// Display name
    pub name: String,
}

impl Notebook {
    /// Create a new notebook with a fresh identifier
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: NotebookId::new(),
            name: name.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notebook_id_unique() {
        let id1 = NotebookId::new();
        let id2 = NotebookId::new();
        assert_ne!(id1, id2);
    }

    #[test]
    fn test_notebook_id_parse() {
        let id = NotebookId::new();
        let parsed: NotebookId = id.as_str().parse().unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn test_notebook_id_is_time_sortable() {
        let first = NotebookId::new();
        let second = NotebookId::new();
        assert!(first < second);
    }

    #[test]
    fn test_notebook_serializes_id_as_string() {
        let notebook = Notebook::new("Work");
        let json = serde_json::to_value(&notebook).unwrap();
        assert_eq!(json["id"], notebook.id.as_str());
        assert_eq!(json["name"], "Work");
    }
}
