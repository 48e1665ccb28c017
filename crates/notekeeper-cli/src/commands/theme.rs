use std::path::Path;

use notekeeper_core::theme::{load_theme, save_theme, toggle_theme, Theme};

use crate::cli::{ThemeChoice, ThemeCommands};
use crate::commands::common::open_store;
use crate::error::CliError;
use crate::system_theme::is_system_dark_mode;

pub fn run_theme(command: Option<ThemeCommands>, db_path: &Path) -> Result<(), CliError> {
    let store = open_store(db_path)?;
    let current = load_theme(&store, is_system_dark_mode())?;

    let theme = match command.unwrap_or(ThemeCommands::Show) {
        ThemeCommands::Show => current,
        ThemeCommands::Toggle => toggle_theme(&store, current)?,
        ThemeCommands::Set { theme } => {
            let theme = theme_from_choice(theme);
            save_theme(&store, theme)?;
            theme
        }
    };

    println!("{theme}");
    Ok(())
}

pub const fn theme_from_choice(choice: ThemeChoice) -> Theme {
    match choice {
        ThemeChoice::Light => Theme::Light,
        ThemeChoice::Dark => Theme::Dark,
    }
}
