//! Application glue: user action → repository → client
//!
//! Each method is one user interaction. The repository is updated first and
//! the client renders whatever the repository returned, so the view always
//! matches the last committed write.

use crate::client::{Client, DeleteConfirmModal, NoteModal, View};
use crate::db::{DocumentRepository, NoteRepository, NotebookRepository};
use crate::error::{Error, Result};
use crate::models::{Note, NoteId, Notebook, NotebookId};
use crate::storage::KeyValueStore;
use crate::util::{now_millis, relative_time};

/// Name given to a notebook created with an empty name
pub const DEFAULT_NOTEBOOK_NAME: &str = "Untitled";

/// A NoteKeeper session over one store
pub struct App<'a, S: KeyValueStore> {
    repo: DocumentRepository<'a, S>,
    client: Client,
}

impl<'a, S: KeyValueStore> App<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self {
            repo: DocumentRepository::new(store),
            client: Client::new(),
        }
    }

    pub const fn view(&self) -> &View {
        self.client.view()
    }

    pub const fn repository(&self) -> &DocumentRepository<'a, S> {
        &self.repo
    }

    /// Initial render: notebook list, then the notes of the first notebook
    pub fn load(&mut self) -> Result<()> {
        let notebooks = self.repo.list_notebooks()?;
        self.client.read_notebooks(&notebooks);

        if let Some(active) = self.client.view().active {
            let notes = self.repo.list_notes(&active)?;
            self.client.read_notes(&notes);
        }

        tracing::debug!("Loaded {} notebooks", notebooks.len());
        Ok(())
    }

    /// Create a notebook; a blank name becomes [`DEFAULT_NOTEBOOK_NAME`]
    pub fn create_notebook(&mut self, name: &str) -> Result<Notebook> {
        let name = if name.trim().is_empty() {
            DEFAULT_NOTEBOOK_NAME
        } else {
            name
        };
        let notebook = self.repo.create_notebook(name)?;
        self.client.create_notebook(&notebook);
        Ok(notebook)
    }

    /// Make a notebook active and show its notes
    pub fn select_notebook(&mut self, id: &NotebookId) -> Result<()> {
        let notes = self.repo.list_notes(id)?;
        self.client.activate_notebook(id, &notes)
    }

    pub fn rename_notebook(&mut self, id: &NotebookId, name: &str) -> Result<Notebook> {
        self.ensure_nav_item(id)?;
        let notebook = self.repo.update_notebook(id, name)?;
        self.client.update_notebook(id, &notebook)?;
        Ok(notebook)
    }

    /// Open the confirmation dialog for deleting a notebook
    pub fn delete_notebook_modal(&self, id: &NotebookId) -> Result<DeleteConfirmModal> {
        let notebook = self
            .repo
            .get_notebook(id)?
            .ok_or_else(|| Error::notebook_not_found(id))?;
        let mut modal = DeleteConfirmModal::new(notebook.name);
        modal.open();
        Ok(modal)
    }

    /// Answer the notebook delete dialog. Returns whether anything was deleted.
    ///
    /// On confirm the notebook and its notes are removed and a neighbouring
    /// notebook becomes active. The dialog is closed either way.
    pub fn delete_notebook(
        &mut self,
        id: &NotebookId,
        modal: &mut DeleteConfirmModal,
        is_confirm: bool,
    ) -> Result<bool> {
        if let Err(error) = self.ensure_nav_item(id) {
            modal.close();
            return Err(error);
        }

        let outcome = modal.on_submit(is_confirm, |confirmed| {
            if confirmed {
                self.repo.delete_notebook(id).map(|()| true)
            } else {
                Ok(false)
            }
        });
        modal.close();

        if !outcome.transpose()?.unwrap_or(false) {
            return Ok(false);
        }

        if let Some(sibling) = self.client.delete_notebook(id)? {
            self.select_notebook(&sibling)?;
        }
        Ok(true)
    }

    /// Open a blank editor for a note in the active notebook
    pub fn new_note_modal(&self) -> Result<NoteModal> {
        self.active_notebook()?;
        let mut modal = NoteModal::blank();
        modal.open();
        Ok(modal)
    }

    /// Save the editor as a new note in the active notebook.
    ///
    /// Returns `None` when save is disabled. The dialog closes on success.
    pub fn create_note(&mut self, modal: &mut NoteModal) -> Result<Option<Note>> {
        let notebook_id = self.active_notebook()?;
        let Some(result) = modal.on_submit(|input| self.repo.create_note(&notebook_id, input))
        else {
            return Ok(None);
        };

        let note = result?;
        self.client.create_note(&note);
        modal.close();
        Ok(Some(note))
    }

    /// Open the editor prefilled with an existing note
    pub fn edit_note_modal(&self, id: &NoteId) -> Result<NoteModal> {
        let note = self.note(id)?;
        let mut modal = NoteModal::new(
            note.title,
            note.text,
            relative_time(note.posted_on, now_millis()),
        );
        modal.open();
        Ok(modal)
    }

    /// Save the editor over an existing note.
    ///
    /// Returns `None` when save is disabled. The dialog closes on success.
    pub fn update_note(&mut self, id: &NoteId, modal: &mut NoteModal) -> Result<Option<Note>> {
        let stored = self.note(id)?;
        self.ensure_card_shown(&stored)?;

        let Some(result) = modal.on_submit(|input| self.repo.update_note(id, input)) else {
            return Ok(None);
        };

        let note = result?;
        if self.client.view().is_active(&note.notebook_id) {
            self.client.update_note(id, &note)?;
        }
        modal.close();
        Ok(Some(note))
    }

    /// Open the confirmation dialog for deleting a note
    pub fn delete_note_modal(&self, id: &NoteId) -> Result<DeleteConfirmModal> {
        let note = self.note(id)?;
        let mut modal = DeleteConfirmModal::new(note.title);
        modal.open();
        Ok(modal)
    }

    /// Answer the note delete dialog. Returns whether the note was deleted.
    pub fn delete_note(
        &mut self,
        id: &NoteId,
        modal: &mut DeleteConfirmModal,
        is_confirm: bool,
    ) -> Result<bool> {
        let note = self.note(id)?;
        if let Err(error) = self.ensure_card_shown(&note) {
            modal.close();
            return Err(error);
        }

        let outcome = modal.on_submit(is_confirm, |confirmed| {
            if confirmed {
                self.repo.delete_note(&note.notebook_id, id).map(Some)
            } else {
                Ok(None)
            }
        });
        modal.close();

        let Some(remaining) = outcome.transpose()?.flatten() else {
            return Ok(false);
        };

        // Only notes of the shown notebook have cards
        if self.client.view().is_active(&note.notebook_id) {
            self.client.delete_note(id, remaining.len())?;
        }
        Ok(true)
    }

    /// Fail before writing when the notebook has no nav item to update
    fn ensure_nav_item(&self, id: &NotebookId) -> Result<()> {
        if self.client.has_nav_item(id) {
            Ok(())
        } else {
            Err(Error::notebook_not_found(id))
        }
    }

    /// Fail before writing when the note's notebook is shown but its card is not
    fn ensure_card_shown(&self, note: &Note) -> Result<()> {
        if self.client.view().is_active(&note.notebook_id) && !self.client.has_card(&note.id) {
            Err(Error::note_not_found(note.id))
        } else {
            Ok(())
        }
    }

    fn active_notebook(&self) -> Result<NotebookId> {
        let view = self.client.view();
        match view.active {
            Some(id) if view.note_create_enabled => Ok(id),
            _ => Err(Error::Validation("No notebook selected".into())),
        }
    }

    fn note(&self, id: &NoteId) -> Result<Note> {
        self.repo
            .get_note(id)?
            .ok_or_else(|| Error::note_not_found(id))
    }
}
