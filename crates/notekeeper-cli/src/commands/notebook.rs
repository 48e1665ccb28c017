use std::path::Path;

use notekeeper_core::db::NotebookRepository;
use notekeeper_core::App;

use crate::commands::common::{
    confirm, format_notebook_lines, join_words, notebook_to_list_item, open_store,
    resolve_notebook, NotebookListItem,
};
use crate::error::CliError;

pub fn run_add(name_parts: &[String], db_path: &Path) -> Result<(), CliError> {
    let store = open_store(db_path)?;
    let mut app = App::new(&store);
    app.load()?;

    let notebook = app.create_notebook(&join_words(name_parts))?;
    println!("{}", notebook.id);
    Ok(())
}

pub fn run_list(as_json: bool, db_path: &Path) -> Result<(), CliError> {
    let store = open_store(db_path)?;
    let app = App::new(&store);
    let document = app.repository().load()?;

    let items = document
        .notebooks
        .iter()
        .map(|notebook| notebook_to_list_item(notebook, &document))
        .collect::<Vec<NotebookListItem>>();

    if as_json {
        println!("{}", serde_json::to_string_pretty(&items)?);
    } else {
        for line in format_notebook_lines(&items) {
            println!("{line}");
        }
    }

    Ok(())
}

pub fn run_rename(query: &str, name_parts: &[String], db_path: &Path) -> Result<(), CliError> {
    let store = open_store(db_path)?;
    let mut app = App::new(&store);
    app.load()?;

    let notebook = resolve_notebook(query, &app.repository().list_notebooks()?)?;
    let renamed = app.rename_notebook(&notebook.id, &join_words(name_parts))?;
    println!("{}", renamed.id);
    Ok(())
}

pub fn run_delete(query: &str, skip_prompt: bool, db_path: &Path) -> Result<(), CliError> {
    let store = open_store(db_path)?;
    let mut app = App::new(&store);
    app.load()?;

    let notebook = resolve_notebook(query, &app.repository().list_notebooks()?)?;
    let mut modal = app.delete_notebook_modal(&notebook.id)?;
    let is_confirm = skip_prompt || confirm(&modal.message())?;

    if app.delete_notebook(&notebook.id, &mut modal, is_confirm)? {
        tracing::info!("Deleted notebook '{}'", notebook.name);
        println!("{}", notebook.id);
    } else {
        eprintln!("Cancelled");
    }
    Ok(())
}
