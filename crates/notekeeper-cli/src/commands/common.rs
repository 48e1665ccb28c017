use std::env;
use std::io::{self, BufRead, IsTerminal, Read, Write};
use std::path::{Path, PathBuf};

use notekeeper_core::storage::SqliteStore;
use notekeeper_core::util::{normalize_text_option, relative_time};
use notekeeper_core::{Document, Note, NoteId, Notebook, NotebookId};
use serde::Serialize;

use crate::error::CliError;

/// Number of ID characters shown in compact listings
pub const SHORT_ID_LEN: usize = 13;

#[derive(Debug, Serialize)]
pub struct NotebookListItem {
    pub id: String,
    pub name: String,
    pub note_count: usize,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NoteListItem {
    pub id: String,
    pub notebook_id: String,
    pub title: String,
    pub text: String,
    pub posted_on: i64,
    pub relative_time: String,
}

pub fn notebook_to_list_item(notebook: &Notebook, document: &Document) -> NotebookListItem {
    NotebookListItem {
        id: notebook.id.to_string(),
        name: notebook.name.clone(),
        note_count: document.notes.get(&notebook.id).map_or(0, Vec::len),
    }
}

pub fn note_to_list_item(note: &Note, now_ms: i64) -> NoteListItem {
    NoteListItem {
        id: note.id.to_string(),
        notebook_id: note.notebook_id.to_string(),
        title: note.title.clone(),
        text: note.text.clone(),
        posted_on: note.posted_on,
        relative_time: relative_time(note.posted_on, now_ms),
    }
}

pub fn short_id(id: &str) -> String {
    id.chars().take(SHORT_ID_LEN).collect()
}

pub fn format_notebook_lines(items: &[NotebookListItem]) -> Vec<String> {
    items
        .iter()
        .map(|item| {
            let notes = if item.note_count == 1 {
                "1 note".to_string()
            } else {
                format!("{} notes", item.note_count)
            };
            format!("{}  {:<30}  {notes}", item.id, item.name)
        })
        .collect()
}

pub fn format_note_lines(notes: &[Note], now_ms: i64) -> Vec<String> {
    notes
        .iter()
        .map(|note| {
            let title = note_preview(&note.title, 30);
            let text = note_preview(&note.text, 40);
            let time = relative_time(note.posted_on, now_ms);
            format!("{}  {title:<30}  {text:<40}  {time}", note.id)
        })
        .collect()
}

/// First line of `value` with whitespace collapsed, cut to `max_chars`
pub fn note_preview(value: &str, max_chars: usize) -> String {
    let first_line = value.lines().next().unwrap_or("").trim();
    let collapsed = first_line.split_whitespace().collect::<Vec<_>>().join(" ");

    if collapsed.chars().count() <= max_chars {
        collapsed
    } else {
        let truncated = collapsed
            .chars()
            .take(max_chars.saturating_sub(3))
            .collect::<String>();
        format!("{truncated}...")
    }
}

pub fn normalize_identifier(id: &str) -> Result<String, CliError> {
    let trimmed = id.trim();
    if trimmed.is_empty() {
        Err(CliError::EmptyId)
    } else {
        Ok(trimmed.to_ascii_lowercase())
    }
}

/// Find a notebook by full ID, (case-insensitive) name, or unique ID prefix.
///
/// An exact name wins over a prefix, so a notebook called "01" is not
/// shadowed by every ID starting with those digits.
pub fn resolve_notebook(query: &str, notebooks: &[Notebook]) -> Result<Notebook, CliError> {
    let normalized = normalize_identifier(query)?;

    if let Ok(id) = normalized.parse::<NotebookId>() {
        if let Some(notebook) = notebooks.iter().find(|notebook| notebook.id == id) {
            return Ok(notebook.clone());
        }
    }

    let by_name = notebooks
        .iter()
        .filter(|notebook| notebook.name.trim().eq_ignore_ascii_case(query.trim()))
        .collect::<Vec<_>>();
    let candidates = if by_name.is_empty() {
        notebooks
            .iter()
            .filter(|notebook| notebook.id.to_string().starts_with(&normalized))
            .collect::<Vec<_>>()
    } else {
        by_name
    };

    match candidates.as_slice() {
        [] => Err(CliError::NotebookNotFound(query.to_string())),
        [notebook] => Ok((*notebook).clone()),
        many => Err(ambiguous(
            query,
            many.iter()
                .map(|notebook| format!("{} ({})", short_id(&notebook.id.to_string()), notebook.name)),
        )),
    }
}

/// Find a note in any notebook by full ID or unique ID prefix
pub fn resolve_note(query: &str, document: &Document) -> Result<Note, CliError> {
    let normalized = normalize_identifier(query)?;

    if let Ok(id) = normalized.parse::<NoteId>() {
        if let Some(note) = document.note(&id) {
            return Ok(note.clone());
        }
    }

    let candidates = document
        .notes
        .values()
        .flatten()
        .filter(|note| note.id.to_string().starts_with(&normalized))
        .collect::<Vec<_>>();

    match candidates.as_slice() {
        [] => Err(CliError::NoteNotFound(query.to_string())),
        [note] => Ok((*note).clone()),
        many => Err(ambiguous(
            query,
            many.iter().map(|note| short_id(&note.id.to_string())),
        )),
    }
}

fn ambiguous(query: &str, options: impl Iterator<Item = String>) -> CliError {
    let options = options.take(3).collect::<Vec<_>>().join(", ");
    CliError::AmbiguousId(format!("ID '{query}' is ambiguous; matches: {options}"))
}

pub fn read_piped_stdin() -> Result<Option<String>, CliError> {
    let stdin = io::stdin();
    if stdin.is_terminal() {
        return Ok(None);
    }

    let mut buffer = String::new();
    stdin.lock().read_to_string(&mut buffer)?;
    Ok(normalize_text_option(Some(buffer)))
}

/// Ask a yes/no question on the terminal. Without a terminal the answer is no.
pub fn confirm(question: &str) -> Result<bool, CliError> {
    let stdin = io::stdin();
    if !stdin.is_terminal() {
        return Ok(false);
    }

    let mut stderr = io::stderr();
    write!(stderr, "{question} [y/N] ")?;
    stderr.flush()?;

    let mut answer = String::new();
    stdin.lock().read_line(&mut answer)?;
    Ok(is_yes(&answer))
}

pub fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}

pub fn join_words(parts: &[String]) -> String {
    parts.join(" ").trim().to_string()
}

pub fn resolve_db_path(cli_db_path: Option<PathBuf>) -> Result<PathBuf, CliError> {
    cli_db_path
        .or_else(|| env::var_os("NOTEKEEPER_DB_PATH").map(PathBuf::from))
        .or_else(default_db_path)
        .ok_or(CliError::NoDataDir)
}

pub fn default_db_path() -> Option<PathBuf> {
    dirs::data_dir().map(|dir| dir.join("notekeeper").join("notekeeper.db"))
}

pub fn open_store(path: &Path) -> Result<SqliteStore, CliError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    Ok(SqliteStore::open(path)?)
}
