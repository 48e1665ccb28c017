//! NoteKeeper CLI - notebooks and notes from the terminal

mod cli;
mod commands;
mod error;
mod render;
mod system_theme;

#[cfg(test)]
mod tests;

use clap::{CommandFactory, Parser};

use crate::cli::{Cli, Commands, NoteCommands, NotebookCommands};
use crate::commands::common::resolve_db_path;
use crate::error::CliError;

fn main() {
    if let Err(error) = run() {
        eprintln!("Error: {error}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), CliError> {
    dotenvy::dotenv().ok();
    init_tracing();

    let cli = Cli::parse();

    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        println!();
        return Ok(());
    };

    if let Commands::Completions { shell, output } = &command {
        return commands::completions::run_completions(*shell, output.as_deref());
    }

    let db_path = resolve_db_path(cli.db_path)?;
    tracing::debug!("Using store at {}", db_path.display());

    match command {
        Commands::Show { notebook } => commands::show::run_show(notebook.as_deref(), &db_path)?,
        Commands::Notebook { command } => run_notebook(command, &db_path)?,
        Commands::Note { command } => run_note(command, &db_path)?,
        Commands::Theme { command } => commands::theme::run_theme(command, &db_path)?,
        Commands::Export { output } => commands::export::run_export(output.as_deref(), &db_path)?,
        Commands::Completions { .. } => {}
    }

    Ok(())
}

fn run_notebook(command: NotebookCommands, db_path: &std::path::Path) -> Result<(), CliError> {
    use commands::notebook::{run_add, run_delete, run_list, run_rename};

    match command {
        NotebookCommands::Add { name } => run_add(&name, db_path),
        NotebookCommands::List { json } => run_list(json, db_path),
        NotebookCommands::Rename { notebook, name } => run_rename(&notebook, &name, db_path),
        NotebookCommands::Delete { notebook, yes } => run_delete(&notebook, yes, db_path),
    }
}

fn run_note(command: NoteCommands, db_path: &std::path::Path) -> Result<(), CliError> {
    use commands::note::{run_add, run_delete, run_edit, run_list};

    match command {
        NoteCommands::Add {
            notebook,
            title,
            text,
        } => run_add(&notebook, title, text, db_path),
        NoteCommands::List { notebook, json } => run_list(&notebook, json, db_path),
        NoteCommands::Edit { id, title, text } => run_edit(&id, title, text, db_path),
        NoteCommands::Delete { id, yes } => run_delete(&id, yes, db_path),
    }
}

fn init_tracing() {
    let mut filter = tracing_subscriber::EnvFilter::from_default_env();
    if let Ok(directive) = "notekeeper=info".parse() {
        filter = filter.add_directive(directive);
    }

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
