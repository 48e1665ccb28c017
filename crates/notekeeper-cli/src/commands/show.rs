use std::path::Path;

use chrono::Local;
use notekeeper_core::db::NotebookRepository;
use notekeeper_core::util::now_millis;
use notekeeper_core::App;

use crate::commands::common::{open_store, resolve_notebook};
use crate::error::CliError;
use crate::render::{render_header, render_view};

pub fn run_show(notebook_query: Option<&str>, db_path: &Path) -> Result<(), CliError> {
    let store = open_store(db_path)?;
    let mut app = App::new(&store);
    app.load()?;

    if let Some(query) = notebook_query {
        let notebook = resolve_notebook(query, &app.repository().list_notebooks()?)?;
        app.select_notebook(&notebook.id)?;
    }

    for line in render_header(&Local::now()) {
        println!("{line}");
    }
    println!();
    for line in render_view(app.view(), now_millis()) {
        println!("{line}");
    }

    Ok(())
}
