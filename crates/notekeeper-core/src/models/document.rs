//! Persisted document holding every notebook and note

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{Note, NoteId, Notebook, NotebookId};

/// The whole store: notebooks in insertion order, notes grouped by notebook
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    #[serde(default)]
    pub notebooks: Vec<Notebook>,
    #[serde(default)]
    pub notes: BTreeMap<NotebookId, Vec<Note>>,
}

impl Document {
    /// Parse a document from its JSON representation
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Serialize the document to compact JSON
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn notebook(&self, id: &NotebookId) -> Option<&Notebook> {
        self.notebooks.iter().find(|notebook| notebook.id == *id)
    }

    pub fn notebook_mut(&mut self, id: &NotebookId) -> Option<&mut Notebook> {
        self.notebooks.iter_mut().find(|notebook| notebook.id == *id)
    }

    pub fn notebook_index(&self, id: &NotebookId) -> Option<usize> {
        self.notebooks.iter().position(|notebook| notebook.id == *id)
    }

    /// Find a note in any notebook
    pub fn note(&self, id: &NoteId) -> Option<&Note> {
        self.notes.values().flatten().find(|note| note.id == *id)
    }

    /// Find a note in any notebook, mutably
    pub fn note_mut(&mut self, id: &NoteId) -> Option<&mut Note> {
        self.notes
            .values_mut()
            .flat_map(|notes| notes.iter_mut())
            .find(|note| note.id == *id)
    }

    /// Total number of notes across all notebooks
    pub fn note_count(&self) -> usize {
        self.notes.values().map(Vec::len).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NoteInput;
    use pretty_assertions::assert_eq;

    fn sample() -> Document {
        let work = Notebook::new("Work");
        let home = Notebook::new("Home");
        let mut doc = Document::default();
        doc.notes.insert(
            work.id,
            vec![
                Note::new(work.id, NoteInput::new("Standup", "9am")),
                Note::new(work.id, NoteInput::new("Review", "PR queue")),
            ],
        );
        doc.notes.insert(home.id, Vec::new());
        doc.notebooks.push(work);
        doc.notebooks.push(home);
        doc
    }

    #[test]
    fn test_round_trip_is_identity() {
        let doc = sample();
        let json = doc.to_json().unwrap();
        let parsed = Document::from_json(&json).unwrap();
        assert_eq!(parsed, doc);
    }

    #[test]
    fn test_notes_keyed_by_notebook_id() {
        let doc = sample();
        let json: serde_json::Value = serde_json::from_str(&doc.to_json().unwrap()).unwrap();
        let work_id = doc.notebooks[0].id.as_str();
        assert_eq!(json["notes"][&work_id].as_array().unwrap().len(), 2);
        assert_eq!(json["notes"][&work_id][0]["notebookId"], work_id.as_str());
    }

    #[test]
    fn test_missing_fields_default_to_empty() {
        let doc = Document::from_json("{}").unwrap();
        assert!(doc.notebooks.is_empty());
        assert!(doc.notes.is_empty());
    }

    #[test]
    fn test_find_note_across_notebooks() {
        let doc = sample();
        let target = doc.notes[&doc.notebooks[0].id][1].clone();
        assert_eq!(doc.note(&target.id), Some(&target));
        assert_eq!(doc.note(&NoteId::new()), None);
        assert_eq!(doc.note_count(), 2);
    }

    #[test]
    fn test_notebook_lookup() {
        let doc = sample();
        let home = doc.notebooks[1].clone();
        assert_eq!(doc.notebook(&home.id), Some(&home));
        assert_eq!(doc.notebook_index(&home.id), Some(1));
        assert_eq!(doc.notebook_index(&NotebookId::new()), None);
    }
}
