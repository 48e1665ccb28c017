use std::path::PathBuf;

use clap::Parser;
use notekeeper_core::db::{DocumentRepository, NoteRepository, NotebookRepository};
use notekeeper_core::storage::MemoryStore;
use notekeeper_core::{Note, NoteInput, Notebook};
use pretty_assertions::assert_eq;

use crate::cli::{
    Cli, Commands, CompletionShell, NoteCommands, NotebookCommands, ThemeChoice, ThemeCommands,
};
use crate::commands::common::{
    format_note_lines, is_yes, join_words, normalize_identifier, note_preview, note_to_list_item,
    open_store, resolve_db_path, resolve_note, resolve_notebook, short_id,
};
use crate::commands::completions::completion_script;
use crate::commands::theme::theme_from_choice;
use crate::error::CliError;
use crate::system_theme::theme_override;

#[test]
fn normalize_identifier_rejects_empty() {
    assert!(matches!(normalize_identifier("   "), Err(CliError::EmptyId)));
    assert_eq!(normalize_identifier(" ABC ").unwrap(), "abc");
}

#[test]
fn join_words_keeps_spacing_between_words() {
    let parts = vec!["Side".to_string(), "projects".to_string()];
    assert_eq!(join_words(&parts), "Side projects");
    assert_eq!(join_words(&[]), "");
}

#[test]
fn is_yes_accepts_common_answers() {
    assert!(is_yes("y\n"));
    assert!(is_yes(" YES "));
    assert!(!is_yes(""));
    assert!(!is_yes("no"));
}

#[test]
fn note_preview_collapses_and_truncates() {
    assert_eq!(note_preview("  hello   world \nsecond", 40), "hello world");
    assert_eq!(note_preview("abcdefghij", 8), "abcde...");
}

#[test]
fn resolve_notebook_by_id_prefix_and_name() {
    let work = Notebook::new("Work");
    let home = Notebook::new("Home");
    let notebooks = vec![work.clone(), home.clone()];

    assert_eq!(
        resolve_notebook(&work.id.to_string(), &notebooks).unwrap(),
        work
    );
    assert_eq!(resolve_notebook("home", &notebooks).unwrap(), home);

    let full = home.id.to_string();
    let unique_prefix = &full[..30];
    assert_eq!(resolve_notebook(unique_prefix, &notebooks).unwrap(), home);
}

#[test]
fn resolve_notebook_reports_missing_and_ambiguous() {
    let notebooks = vec![Notebook::new("Work"), Notebook::new("work")];

    assert!(matches!(
        resolve_notebook("Garden", &notebooks),
        Err(CliError::NotebookNotFound(_))
    ));
    assert!(matches!(
        resolve_notebook("WORK", &notebooks),
        Err(CliError::AmbiguousId(_))
    ));
}

#[test]
fn resolve_notebook_prefers_exact_name_over_id_prefix() {
    // Time-ordered IDs all share their leading digits
    let notebooks = vec![
        Notebook::new("Work"),
        Notebook::new("01"),
        Notebook::new("Home"),
    ];

    assert_eq!(resolve_notebook("01", &notebooks).unwrap(), notebooks[1]);
}

#[test]
fn resolve_note_searches_every_notebook() {
    let store = MemoryStore::new();
    let repo = DocumentRepository::new(&store);
    let work = repo.create_notebook("Work").unwrap();
    let home = repo.create_notebook("Home").unwrap();
    repo.create_note(&work.id, NoteInput::new("Standup", "9am"))
        .unwrap();
    let groceries = repo
        .create_note(&home.id, NoteInput::new("Groceries", "milk"))
        .unwrap();

    let document = repo.load().unwrap();
    assert_eq!(
        resolve_note(&groceries.id.to_string(), &document).unwrap(),
        groceries
    );
    assert!(matches!(
        resolve_note("ffffffff", &document),
        Err(CliError::NoteNotFound(_))
    ));
}

#[test]
fn format_note_lines_include_id_and_time() {
    let work = Notebook::new("Work");
    let mut note = Note::new(work.id, NoteInput::new("Standup", "9am"));
    note.posted_on = 0;

    let lines = format_note_lines(&[note.clone()], 2 * 60 * 60_000);
    assert_eq!(lines.len(), 1);
    assert!(lines[0].starts_with(&note.id.to_string()));
    assert!(lines[0].contains("Standup"));
    assert!(lines[0].ends_with("2 hour ago"));
}

#[test]
fn note_list_item_uses_camel_case() {
    let work = Notebook::new("Work");
    let note = Note::new(work.id, NoteInput::new("Standup", "9am"));
    let item = note_to_list_item(&note, note.posted_on);

    let json = serde_json::to_value(&item).unwrap();
    assert_eq!(json["notebookId"], work.id.to_string());
    assert_eq!(json["relativeTime"], "Just now");
}

#[test]
fn short_id_keeps_timestamp_prefix() {
    assert_eq!(
        short_id("01890a5d-ac96-774b-bcce-b302099a8057"),
        "01890a5d-ac96"
    );
}

#[test]
fn resolve_db_path_prefers_explicit_path() {
    let explicit = PathBuf::from("/tmp/explicit.db");
    assert_eq!(resolve_db_path(Some(explicit.clone())).unwrap(), explicit);
}

#[test]
fn open_store_creates_parent_directories() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("nested").join("notekeeper.db");

    let store = open_store(&path).unwrap();
    let repo = DocumentRepository::new(&store);
    repo.create_notebook("Work").unwrap();

    assert!(path.exists());
    assert_eq!(repo.list_notebooks().unwrap().len(), 1);
}

#[test]
fn theme_override_parses_known_values() {
    assert_eq!(theme_override(Some("dark".to_string())), Some(true));
    assert_eq!(theme_override(Some("Light".to_string())), Some(false));
    assert_eq!(theme_override(Some("sepia".to_string())), None);
    assert_eq!(theme_override(None), None);
}

#[test]
fn theme_choice_maps_to_theme() {
    assert!(theme_from_choice(ThemeChoice::Dark).is_dark());
    assert!(!theme_from_choice(ThemeChoice::Light).is_dark());
}

#[test]
fn cli_parses_note_add() {
    let cli = Cli::try_parse_from([
        "notekeeper",
        "note",
        "add",
        "--notebook",
        "Work",
        "--title",
        "Standup",
        "--text",
        "9am",
    ])
    .unwrap();

    match cli.command {
        Some(Commands::Note {
            command:
                NoteCommands::Add {
                    notebook,
                    title,
                    text,
                },
        }) => {
            assert_eq!(notebook, "Work");
            assert_eq!(title.as_deref(), Some("Standup"));
            assert_eq!(text.as_deref(), Some("9am"));
        }
        _ => panic!("expected note add"),
    }
}

#[test]
fn cli_parses_notebook_rename_and_theme() {
    let cli = Cli::try_parse_from([
        "notekeeper",
        "--db-path",
        "/tmp/x.db",
        "notebook",
        "rename",
        "Wrok",
        "Side",
        "projects",
    ])
    .unwrap();
    assert_eq!(cli.db_path, Some(PathBuf::from("/tmp/x.db")));
    assert!(matches!(
        cli.command,
        Some(Commands::Notebook {
            command: NotebookCommands::Rename { ref name, .. }
        }) if name == &["Side".to_string(), "projects".to_string()]
    ));

    let cli = Cli::try_parse_from(["notekeeper", "theme", "set", "dark"]).unwrap();
    assert!(matches!(
        cli.command,
        Some(Commands::Theme {
            command: Some(ThemeCommands::Set {
                theme: ThemeChoice::Dark
            })
        })
    ));
}

#[test]
fn cli_requires_new_name_for_rename() {
    assert!(Cli::try_parse_from(["notekeeper", "notebook", "rename", "Work"]).is_err());
}

#[test]
fn completion_script_mentions_subcommands() {
    let script = String::from_utf8(completion_script(CompletionShell::Bash)).unwrap();
    assert!(script.contains("notekeeper"));
    assert!(script.contains("notebook"));
}
