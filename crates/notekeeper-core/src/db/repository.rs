//! Notebook and note repositories over the persisted document
//!
//! Every mutating call loads the full document, changes it in memory and
//! writes the full document back under [`DOCUMENT_KEY`].

use crate::error::{Error, Result};
use crate::models::{Document, Note, NoteId, NoteInput, Notebook, NotebookId};
use crate::storage::{KeyValueStore, DOCUMENT_KEY};

/// Trait for notebook storage operations
pub trait NotebookRepository {
    /// Create a new notebook, appended after the existing ones
    fn create_notebook(&self, name: &str) -> Result<Notebook>;

    /// List notebooks in creation order
    fn list_notebooks(&self) -> Result<Vec<Notebook>>;

    /// Get a notebook by ID
    fn get_notebook(&self, id: &NotebookId) -> Result<Option<Notebook>>;

    /// Rename a notebook
    fn update_notebook(&self, id: &NotebookId, name: &str) -> Result<Notebook>;

    /// Delete a notebook together with all of its notes
    fn delete_notebook(&self, id: &NotebookId) -> Result<()>;
}

/// Trait for note storage operations
pub trait NoteRepository {
    /// Create a note at the front of the notebook's list
    fn create_note(&self, notebook_id: &NotebookId, input: NoteInput) -> Result<Note>;

    /// List a notebook's notes, newest first
    fn list_notes(&self, notebook_id: &NotebookId) -> Result<Vec<Note>>;

    /// Get a note by ID from any notebook
    fn get_note(&self, id: &NoteId) -> Result<Option<Note>>;

    /// Replace a note's title and text
    fn update_note(&self, id: &NoteId, input: NoteInput) -> Result<Note>;

    /// Delete a note, returning the notes left in its notebook
    fn delete_note(&self, notebook_id: &NotebookId, id: &NoteId) -> Result<Vec<Note>>;
}

/// Repository storing the whole [`Document`] as one JSON value
pub struct DocumentRepository<'a, S: KeyValueStore> {
    store: &'a S,
}

impl<'a, S: KeyValueStore> DocumentRepository<'a, S> {
    /// Create a new repository over the given store
    pub const fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// Load the document, or an empty one if nothing has been written yet
    pub fn load(&self) -> Result<Document> {
        match self.store.get_item(DOCUMENT_KEY)? {
            Some(json) => Ok(Document::from_json(&json)?),
            None => Ok(Document::default()),
        }
    }

    /// Persist the whole document
    pub fn save(&self, document: &Document) -> Result<()> {
        let json = document.to_json()?;
        self.store.set_item(DOCUMENT_KEY, &json)?;
        tracing::debug!(
            notebooks = document.notebooks.len(),
            notes = document.note_count(),
            "Saved document"
        );
        Ok(())
    }

    /// Load, mutate and save the document in one step
    fn modify<T>(&self, f: impl FnOnce(&mut Document) -> Result<T>) -> Result<T> {
        let mut document = self.load()?;
        let value = f(&mut document)?;
        self.save(&document)?;
        Ok(value)
    }
}

fn normalize_name(name: &str) -> Result<String> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        Err(Error::Validation("Notebook name cannot be empty".into()))
    } else {
        Ok(trimmed.to_string())
    }
}

fn validate_note(input: &NoteInput) -> Result<()> {
    if input.is_blank() {
        Err(Error::Validation("Note needs a title or some text".into()))
    } else {
        Ok(())
    }
}

impl<S: KeyValueStore> NotebookRepository for DocumentRepository<'_, S> {
    fn create_notebook(&self, name: &str) -> Result<Notebook> {
        let notebook = Notebook::new(normalize_name(name)?);

        self.modify(|document| {
            document.notes.insert(notebook.id, Vec::new());
            document.notebooks.push(notebook.clone());
            Ok(())
        })?;

        Ok(notebook)
    }

    fn list_notebooks(&self) -> Result<Vec<Notebook>> {
        Ok(self.load()?.notebooks)
    }

    fn get_notebook(&self, id: &NotebookId) -> Result<Option<Notebook>> {
        Ok(self.load()?.notebook(id).cloned())
    }

    fn update_notebook(&self, id: &NotebookId, name: &str) -> Result<Notebook> {
        let name = normalize_name(name)?;

        self.modify(|document| {
            let notebook = document
                .notebook_mut(id)
                .ok_or_else(|| Error::notebook_not_found(id))?;
            notebook.name = name;
            Ok(notebook.clone())
        })
    }

    fn delete_notebook(&self, id: &NotebookId) -> Result<()> {
        self.modify(|document| {
            let index = document
                .notebook_index(id)
                .ok_or_else(|| Error::notebook_not_found(id))?;
            document.notebooks.remove(index);
            let removed_notes = document.notes.remove(id).map_or(0, |notes| notes.len());
            tracing::info!("Deleted notebook {id} with {removed_notes} notes");
            Ok(())
        })
    }
}

impl<S: KeyValueStore> NoteRepository for DocumentRepository<'_, S> {
    fn create_note(&self, notebook_id: &NotebookId, input: NoteInput) -> Result<Note> {
        validate_note(&input)?;

        self.modify(|document| {
            if document.notebook(notebook_id).is_none() {
                return Err(Error::notebook_not_found(notebook_id));
            }
            let note = Note::new(*notebook_id, input);
            document
                .notes
                .entry(*notebook_id)
                .or_default()
                .insert(0, note.clone());
            Ok(note)
        })
    }

    fn list_notes(&self, notebook_id: &NotebookId) -> Result<Vec<Note>> {
        let mut document = self.load()?;
        if document.notebook(notebook_id).is_none() {
            return Err(Error::notebook_not_found(notebook_id));
        }
        Ok(document.notes.remove(notebook_id).unwrap_or_default())
    }

    fn get_note(&self, id: &NoteId) -> Result<Option<Note>> {
        Ok(self.load()?.note(id).cloned())
    }

    fn update_note(&self, id: &NoteId, input: NoteInput) -> Result<Note> {
        validate_note(&input)?;

        self.modify(|document| {
            let note = document
                .note_mut(id)
                .ok_or_else(|| Error::note_not_found(id))?;
            note.apply(input);
            Ok(note.clone())
        })
    }

    fn delete_note(&self, notebook_id: &NotebookId, id: &NoteId) -> Result<Vec<Note>> {
        self.modify(|document| {
            let notes = document
                .notes
                .get_mut(notebook_id)
                .ok_or_else(|| Error::notebook_not_found(notebook_id))?;
            let index = notes
                .iter()
                .position(|note| note.id == *id)
                .ok_or_else(|| Error::note_not_found(id))?;
            notes.remove(index);
            Ok(notes.clone())
        })
    }
}
