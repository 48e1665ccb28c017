//! Plain-text rendering of the client view

use chrono::{DateTime, TimeZone, Timelike};
use notekeeper_core::client::{NotePanel, View};
use notekeeper_core::util::{date_line, greeting_message, relative_time};

use crate::commands::common::{note_preview, short_id};

const EMPTY_NOTES: &str = "No notes";
const NO_NOTEBOOK: &str = "Create a notebook to start taking notes";

/// Greeting and date lines shown above everything else
pub fn render_header<Tz: TimeZone>(now: &DateTime<Tz>) -> Vec<String>
where
    Tz::Offset: std::fmt::Display,
{
    vec![
        greeting_message(now.hour()).to_string(),
        date_line(now),
    ]
}

/// Sidebar followed by the note panel
pub fn render_view(view: &View, now_ms: i64) -> Vec<String> {
    let mut lines = vec!["Notebooks".to_string()];

    if view.sidebar.is_empty() {
        lines.push("  (none)".to_string());
    }
    for item in &view.sidebar {
        let marker = if view.is_active(&item.id) { '*' } else { ' ' };
        lines.push(format!(
            "{marker} {}  {}",
            short_id(&item.id.to_string()),
            item.name
        ));
    }

    lines.push(String::new());

    match &view.panel {
        NotePanel::Blank => lines.push(NO_NOTEBOOK.to_string()),
        NotePanel::Empty => {
            lines.push(view.panel_title.clone());
            lines.push(format!("  {EMPTY_NOTES}"));
        }
        NotePanel::Cards(cards) => {
            lines.push(view.panel_title.clone());
            for card in cards {
                lines.push(String::new());
                lines.push(format!(
                    "  {}  {}  ({})",
                    short_id(&card.id.to_string()),
                    note_preview(&card.title, 60),
                    relative_time(card.posted_on, now_ms)
                ));
                lines.extend(card.text.lines().map(|line| format!("    {line}")));
            }
        }
    }

    lines
}
