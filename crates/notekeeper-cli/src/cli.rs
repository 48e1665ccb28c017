use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "notekeeper")]
#[command(about = "Keep notes in notebooks from the command line")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Optional path to local store file
    #[arg(long, global = true, value_name = "PATH")]
    pub db_path: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show notebooks and the notes of the active notebook
    Show {
        /// Notebook ID, ID prefix, or name to open (first notebook when omitted)
        #[arg(short, long, value_name = "NOTEBOOK")]
        notebook: Option<String>,
    },
    /// Manage notebooks
    Notebook {
        #[command(subcommand)]
        command: NotebookCommands,
    },
    /// Manage notes
    Note {
        #[command(subcommand)]
        command: NoteCommands,
    },
    /// Show or change the color theme
    Theme {
        #[command(subcommand)]
        command: Option<ThemeCommands>,
    },
    /// Export the whole store as JSON
    Export {
        /// Optional output path (stdout when omitted)
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,
    },
    /// Generate shell completion scripts
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: CompletionShell,
        /// Optional output path (stdout when omitted)
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,
    },
}

#[derive(Subcommand)]
pub enum NotebookCommands {
    /// Create a new notebook
    #[command(alias = "new")]
    Add {
        /// Notebook name ("Untitled" when omitted)
        name: Vec<String>,
    },
    /// List notebooks
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Rename a notebook
    Rename {
        /// Notebook ID, ID prefix, or name
        notebook: String,
        /// New name
        #[arg(required = true)]
        name: Vec<String>,
    },
    /// Delete a notebook and all of its notes
    Delete {
        /// Notebook ID, ID prefix, or name
        notebook: String,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

#[derive(Subcommand)]
pub enum NoteCommands {
    /// Create a new note
    #[command(alias = "new")]
    Add {
        /// Notebook ID, ID prefix, or name
        #[arg(short, long, value_name = "NOTEBOOK")]
        notebook: String,
        /// Note title ("Untitled" when omitted)
        #[arg(short, long)]
        title: Option<String>,
        /// Note text (read from piped stdin when omitted)
        #[arg(long)]
        text: Option<String>,
    },
    /// List the notes of a notebook, newest first
    List {
        /// Notebook ID, ID prefix, or name
        #[arg(short, long, value_name = "NOTEBOOK")]
        notebook: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Edit a note's title or text
    Edit {
        /// Note ID or unique ID prefix
        id: String,
        /// New title
        #[arg(short, long)]
        title: Option<String>,
        /// New text
        #[arg(long)]
        text: Option<String>,
    },
    /// Delete a note
    Delete {
        /// Note ID or unique ID prefix
        id: String,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

#[derive(Subcommand)]
pub enum ThemeCommands {
    /// Print the current theme
    Show,
    /// Switch between light and dark
    Toggle,
    /// Set the theme explicitly
    Set {
        #[arg(value_enum)]
        theme: ThemeChoice,
    },
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum ThemeChoice {
    Light,
    Dark,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum CompletionShell {
    Bash,
    Zsh,
    Fish,
}
