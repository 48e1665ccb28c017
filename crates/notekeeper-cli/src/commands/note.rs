use std::path::Path;

use notekeeper_core::db::{NoteRepository, NotebookRepository};
use notekeeper_core::util::{normalize_text_option, now_millis};
use notekeeper_core::App;

use crate::commands::common::{
    confirm, format_note_lines, note_to_list_item, open_store, read_piped_stdin, resolve_note,
    resolve_notebook, NoteListItem,
};
use crate::error::CliError;

pub fn run_add(
    notebook_query: &str,
    title: Option<String>,
    text: Option<String>,
    db_path: &Path,
) -> Result<(), CliError> {
    let store = open_store(db_path)?;
    let mut app = App::new(&store);
    app.load()?;

    let notebook = resolve_notebook(notebook_query, &app.repository().list_notebooks()?)?;
    app.select_notebook(&notebook.id)?;

    let text = match text {
        Some(text) => Some(text),
        None => read_piped_stdin()?,
    };

    let mut modal = app.new_note_modal()?;
    if let Some(title) = normalize_text_option(title) {
        modal.set_title(title);
    }
    if let Some(text) = text {
        modal.set_text(text);
    }

    let note = app.create_note(&mut modal)?.ok_or(CliError::EmptyContent)?;
    println!("{}", note.id);
    Ok(())
}

pub fn run_list(notebook_query: &str, as_json: bool, db_path: &Path) -> Result<(), CliError> {
    let store = open_store(db_path)?;
    let app = App::new(&store);
    let repo = app.repository();

    let notebook = resolve_notebook(notebook_query, &repo.list_notebooks()?)?;
    let notes = repo.list_notes(&notebook.id)?;
    let now_ms = now_millis();

    if as_json {
        let items = notes
            .iter()
            .map(|note| note_to_list_item(note, now_ms))
            .collect::<Vec<NoteListItem>>();
        println!("{}", serde_json::to_string_pretty(&items)?);
    } else {
        for line in format_note_lines(&notes, now_ms) {
            println!("{line}");
        }
    }

    Ok(())
}

pub fn run_edit(
    query: &str,
    title: Option<String>,
    text: Option<String>,
    db_path: &Path,
) -> Result<(), CliError> {
    if title.is_none() && text.is_none() {
        return Err(CliError::NothingToEdit);
    }

    let store = open_store(db_path)?;
    let mut app = App::new(&store);
    app.load()?;

    let note = resolve_note(query, &app.repository().load()?)?;
    app.select_notebook(&note.notebook_id)?;

    let mut modal = app.edit_note_modal(&note.id)?;
    if let Some(title) = title {
        modal.set_title(title);
    }
    if let Some(text) = text {
        modal.set_text(text);
    }

    let updated = app
        .update_note(&note.id, &mut modal)?
        .ok_or(CliError::EmptyContent)?;
    println!("{}", updated.id);
    Ok(())
}

pub fn run_delete(query: &str, skip_prompt: bool, db_path: &Path) -> Result<(), CliError> {
    let store = open_store(db_path)?;
    let mut app = App::new(&store);
    app.load()?;

    let note = resolve_note(query, &app.repository().load()?)?;
    app.select_notebook(&note.notebook_id)?;

    let mut modal = app.delete_note_modal(&note.id)?;
    let is_confirm = skip_prompt || confirm(&modal.message())?;

    if app.delete_note(&note.id, &mut modal, is_confirm)? {
        println!("{}", note.id);
    } else {
        eprintln!("Cancelled");
    }
    Ok(())
}
