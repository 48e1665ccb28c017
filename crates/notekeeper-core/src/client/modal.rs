//! Note editor and delete confirmation dialogs

use crate::models::NoteInput;

/// Title shown in the editor when creating a note
pub const DEFAULT_NOTE_TITLE: &str = "Untitled";

/// Note editor dialog.
///
/// The save action starts disabled and is re-evaluated after every field
/// edit: it is enabled while the title or the text is non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteModal {
    title: String,
    text: String,
    time: String,
    open: bool,
    submit_enabled: bool,
}

impl NoteModal {
    /// Editor prefilled with an existing note's fields and relative time
    pub fn new(title: impl Into<String>, text: impl Into<String>, time: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            text: text.into(),
            time: time.into(),
            open: false,
            submit_enabled: false,
        }
    }

    /// Blank editor for a new note
    pub fn blank() -> Self {
        Self::new(DEFAULT_NOTE_TITLE, "", "")
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub const fn is_open(&self) -> bool {
        self.open
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn time(&self) -> &str {
        &self.time
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
        self.refresh_submit();
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.refresh_submit();
    }

    pub const fn is_submit_enabled(&self) -> bool {
        self.submit_enabled
    }

    /// Press save: hands the entered fields to `callback`.
    ///
    /// Returns `None` without calling `callback` when the dialog is closed or
    /// save is disabled. Save is disabled again until the next edit.
    pub fn on_submit<R>(&mut self, callback: impl FnOnce(NoteInput) -> R) -> Option<R> {
        if !self.open || !self.submit_enabled {
            return None;
        }
        self.submit_enabled = false;
        Some(callback(NoteInput::new(self.title.clone(), self.text.clone())))
    }

    fn refresh_submit(&mut self) {
        self.submit_enabled = !self.title.is_empty() || !self.text.is_empty();
    }
}

/// Yes/no dialog shown before deleting a notebook or note
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteConfirmModal {
    title: String,
    open: bool,
}

impl DeleteConfirmModal {
    /// Dialog asking about the item called `title`
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            open: false,
        }
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub const fn is_open(&self) -> bool {
        self.open
    }

    pub fn message(&self) -> String {
        format!("Are you sure you want to delete \"{}\"?", self.title)
    }

    /// Press one of the buttons; `is_confirm` is true for "Delete".
    ///
    /// Returns `None` without calling `callback` when the dialog is closed.
    pub fn on_submit<R>(&mut self, is_confirm: bool, callback: impl FnOnce(bool) -> R) -> Option<R> {
        if !self.open {
            return None;
        }
        Some(callback(is_confirm))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_note_modal_starts_disabled() {
        let mut modal = NoteModal::blank();
        modal.open();
        assert_eq!(modal.title(), "Untitled");
        assert!(!modal.is_submit_enabled());
        assert_eq!(modal.on_submit(|input| input), None);
    }

    #[test]
    fn test_note_modal_enables_after_edit() {
        let mut modal = NoteModal::blank();
        modal.open();
        modal.set_text("9am");
        assert!(modal.is_submit_enabled());

        let submitted = modal.on_submit(|input| input).unwrap();
        assert_eq!(submitted, NoteInput::new("Untitled", "9am"));
    }

    #[test]
    fn test_note_modal_disabled_when_both_fields_cleared() {
        let mut modal = NoteModal::new("Standup", "9am", "Just now");
        modal.open();
        modal.set_title("");
        assert!(modal.is_submit_enabled());
        modal.set_text("");
        assert!(!modal.is_submit_enabled());
    }

    #[test]
    fn test_note_modal_submit_is_one_shot() {
        let mut modal = NoteModal::blank();
        modal.open();
        modal.set_title("Once");

        let mut calls = 0;
        modal.on_submit(|_| calls += 1);
        modal.on_submit(|_| calls += 1);
        assert_eq!(calls, 1);
    }

    #[test]
    fn test_note_modal_closed_ignores_submit() {
        let mut modal = NoteModal::blank();
        modal.set_title("Hidden");
        assert!(!modal.is_open());
        assert_eq!(modal.on_submit(|input| input), None);

        modal.open();
        modal.close();
        assert_eq!(modal.on_submit(|input| input), None);
    }

    #[test]
    fn test_delete_confirm() {
        let mut modal = DeleteConfirmModal::new("Work");
        assert_eq!(modal.message(), "Are you sure you want to delete \"Work\"?");
        assert_eq!(modal.on_submit(true, |confirm| confirm), None);

        modal.open();
        assert_eq!(modal.on_submit(false, |confirm| confirm), Some(false));
        assert_eq!(modal.on_submit(true, |confirm| confirm), Some(true));
    }
}
