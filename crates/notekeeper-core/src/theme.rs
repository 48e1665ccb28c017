//! Theme preference
//!
//! Stored as the plain string `"light"` or `"dark"` under [`THEME_KEY`]. When
//! nothing valid is stored the system color-scheme preference decides.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::storage::{KeyValueStore, THEME_KEY};

/// Light or dark color scheme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// The opposite theme
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Theme matching the system preference
    #[must_use]
    pub const fn from_system(system_is_dark: bool) -> Self {
        if system_is_dark {
            Self::Dark
        } else {
            Self::Light
        }
    }

    #[must_use]
    pub const fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(Error::Validation(format!("Unknown theme: {other}"))),
        }
    }
}

/// Load the stored theme, falling back to the system preference
pub fn load_theme(store: &impl KeyValueStore, system_is_dark: bool) -> Result<Theme> {
    let fallback = Theme::from_system(system_is_dark);

    let Some(value) = store.get_item(THEME_KEY)? else {
        return Ok(fallback);
    };

    match value.parse() {
        Ok(theme) => Ok(theme),
        Err(error) => {
            tracing::warn!("Ignoring stored theme: {error}. Using {fallback}.");
            Ok(fallback)
        }
    }
}

/// Persist the theme preference
pub fn save_theme(store: &impl KeyValueStore, theme: Theme) -> Result<()> {
    store.set_item(THEME_KEY, theme.as_str())
}

/// Flip `current`, persist and return the new theme
pub fn toggle_theme(store: &impl KeyValueStore, current: Theme) -> Result<Theme> {
    let theme = current.toggled();
    save_theme(store, theme)?;
    tracing::debug!("Theme switched to {theme}");
    Ok(theme)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    #[test]
    fn test_falls_back_to_system_preference() {
        let store = MemoryStore::new();
        assert_eq!(load_theme(&store, true).unwrap(), Theme::Dark);
        assert_eq!(load_theme(&store, false).unwrap(), Theme::Light);
    }

    #[test]
    fn test_stored_theme_wins_over_system() {
        let store = MemoryStore::new();
        save_theme(&store, Theme::Light).unwrap();
        assert_eq!(load_theme(&store, true).unwrap(), Theme::Light);
        assert_eq!(store.get_item(THEME_KEY).unwrap().as_deref(), Some("light"));
    }

    #[test]
    fn test_invalid_stored_theme_falls_back() {
        let store = MemoryStore::new();
        store.set_item(THEME_KEY, "sepia").unwrap();
        assert_eq!(load_theme(&store, true).unwrap(), Theme::Dark);
    }

    #[test]
    fn test_toggle_persists() {
        let store = MemoryStore::new();
        let theme = toggle_theme(&store, Theme::Light).unwrap();
        assert_eq!(theme, Theme::Dark);
        assert_eq!(load_theme(&store, false).unwrap(), Theme::Dark);

        let theme = toggle_theme(&store, theme).unwrap();
        assert_eq!(theme, Theme::Light);
        assert_eq!(load_theme(&store, true).unwrap(), Theme::Light);
    }

    #[test]
    fn test_parse_theme() {
        assert_eq!("Dark".parse::<Theme>().unwrap(), Theme::Dark);
        assert_eq!(" light ".parse::<Theme>().unwrap(), Theme::Light);
        assert!("system".parse::<Theme>().is_err());
        assert_eq!(serde_json::to_string(&Theme::Dark).unwrap(), "\"dark\"");
    }
}
