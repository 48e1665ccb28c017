//! Rendered view tree

use crate::models::{Note, Notebook, NotebookId};

/// One notebook entry in the sidebar
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavItem {
    pub id: NotebookId,
    pub name: String,
}

impl From<&Notebook> for NavItem {
    fn from(notebook: &Notebook) -> Self {
        Self {
            id: notebook.id,
            name: notebook.name.clone(),
        }
    }
}

/// Content of the note panel
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum NotePanel {
    /// No notebook selected
    #[default]
    Blank,
    /// Notebook selected but it has no notes
    Empty,
    /// Note cards, top to bottom
    Cards(Vec<Note>),
}

impl NotePanel {
    pub fn cards(&self) -> &[Note] {
        match self {
            Self::Cards(cards) => cards,
            Self::Blank | Self::Empty => &[],
        }
    }
}

/// Everything the user currently sees
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct View {
    /// Notebook nav items in sidebar order
    pub sidebar: Vec<NavItem>,
    /// Highlighted notebook
    pub active: Option<NotebookId>,
    pub panel_title: String,
    pub panel: NotePanel,
    /// Whether the "create note" controls accept clicks
    pub note_create_enabled: bool,
}

impl View {
    pub fn is_active(&self, id: &NotebookId) -> bool {
        self.active.as_ref() == Some(id)
    }
}
