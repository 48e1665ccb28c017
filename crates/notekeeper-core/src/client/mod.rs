//! View synchronization
//!
//! [`Client`] mirrors repository results into a [`View`]: the notebook
//! sidebar, the active notebook, and the note panel. It never touches storage;
//! callers pass in whatever the repository returned.

mod modal;
mod view;

pub use modal::{DeleteConfirmModal, NoteModal};
pub use view::{NavItem, NotePanel, View};

use crate::error::{Error, Result};
use crate::models::{Note, NoteId, Notebook, NotebookId};

/// Keeps the [`View`] in step with the last committed repository result
#[derive(Debug, Default)]
pub struct Client {
    view: View,
}

impl Client {
    pub fn new() -> Self {
        Self::default()
    }

    pub const fn view(&self) -> &View {
        &self.view
    }

    /// Render the notebook list, activating the first notebook
    pub fn read_notebooks(&mut self, notebooks: &[Notebook]) {
        self.view.sidebar = notebooks.iter().map(NavItem::from).collect();
        self.view.note_create_enabled = !notebooks.is_empty();

        if let Some(first) = notebooks.first() {
            self.view.active = Some(first.id);
            self.view.panel_title.clone_from(&first.name);
        } else {
            self.reset_panel();
        }
    }

    /// Append a freshly created notebook and make it active with no notes
    pub fn create_notebook(&mut self, notebook: &Notebook) {
        self.view.sidebar.push(NavItem::from(notebook));
        self.view.active = Some(notebook.id);
        self.view.panel_title.clone_from(&notebook.name);
        self.view.panel = NotePanel::Empty;
        self.view.note_create_enabled = true;
    }

    /// Select a notebook and show its notes
    pub fn activate_notebook(&mut self, id: &NotebookId, notes: &[Note]) -> Result<()> {
        let name = self.nav_item(id)?.name.clone();
        self.view.active = Some(*id);
        self.view.panel_title = name;
        self.read_notes(notes);
        Ok(())
    }

    /// Replace a renamed notebook in place and make it active
    pub fn update_notebook(&mut self, id: &NotebookId, notebook: &Notebook) -> Result<()> {
        let index = self.nav_index(id)?;
        self.view.sidebar[index] = NavItem::from(notebook);
        self.view.active = Some(notebook.id);
        self.view.panel_title.clone_from(&notebook.name);
        Ok(())
    }

    /// Remove a notebook's nav item.
    ///
    /// Returns the neighbour to activate next (the following item, else the
    /// preceding one). When no notebooks remain the panel is cleared and note
    /// creation is disabled.
    pub fn delete_notebook(&mut self, id: &NotebookId) -> Result<Option<NotebookId>> {
        let index = self.nav_index(id)?;
        let sibling = self
            .view
            .sidebar
            .get(index + 1)
            .or_else(|| index.checked_sub(1).and_then(|prev| self.view.sidebar.get(prev)))
            .map(|item| item.id);

        self.view.sidebar.remove(index);
        if self.view.active == Some(*id) {
            self.view.active = None;
        }
        if sibling.is_none() {
            self.reset_panel();
        }

        Ok(sibling)
    }

    /// Put a new note card at the top of the panel
    pub fn create_note(&mut self, note: &Note) {
        match &mut self.view.panel {
            NotePanel::Cards(cards) => cards.insert(0, note.clone()),
            panel => *panel = NotePanel::Cards(vec![note.clone()]),
        }
    }

    /// Show a notebook's notes, or the empty placeholder
    pub fn read_notes(&mut self, notes: &[Note]) {
        self.view.panel = if notes.is_empty() {
            NotePanel::Empty
        } else {
            NotePanel::Cards(notes.to_vec())
        };
    }

    /// Replace an edited note card in place
    pub fn update_note(&mut self, id: &NoteId, note: &Note) -> Result<()> {
        let card = self
            .cards_mut()
            .and_then(|cards| cards.iter_mut().find(|card| card.id == *id))
            .ok_or_else(|| Error::NotFound(format!("note card {id}")))?;
        card.clone_from(note);
        Ok(())
    }

    /// Remove a note card; falls back to the placeholder when `remaining` is 0
    pub fn delete_note(&mut self, id: &NoteId, remaining: usize) -> Result<()> {
        let cards = self
            .cards_mut()
            .ok_or_else(|| Error::NotFound(format!("note card {id}")))?;
        let index = cards
            .iter()
            .position(|card| card.id == *id)
            .ok_or_else(|| Error::NotFound(format!("note card {id}")))?;
        cards.remove(index);

        if remaining == 0 || cards.is_empty() {
            self.view.panel = NotePanel::Empty;
        }
        Ok(())
    }

    pub fn has_nav_item(&self, id: &NotebookId) -> bool {
        self.nav_index(id).is_ok()
    }

    /// Whether a card for the note is currently shown
    pub fn has_card(&self, id: &NoteId) -> bool {
        self.view.panel.cards().iter().any(|card| card.id == *id)
    }

    fn reset_panel(&mut self) {
        self.view.active = None;
        self.view.panel_title.clear();
        self.view.panel = NotePanel::Blank;
        self.view.note_create_enabled = false;
    }

    fn nav_index(&self, id: &NotebookId) -> Result<usize> {
        self.view
            .sidebar
            .iter()
            .position(|item| item.id == *id)
            .ok_or_else(|| Error::NotFound(format!("notebook nav item {id}")))
    }

    fn nav_item(&self, id: &NotebookId) -> Result<&NavItem> {
        self.nav_index(id).map(|index| &self.view.sidebar[index])
    }

    fn cards_mut(&mut self) -> Option<&mut Vec<Note>> {
        match &mut self.view.panel {
            NotePanel::Cards(cards) => Some(cards),
            _ => None,
        }
    }
}
