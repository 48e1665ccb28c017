//! System color-scheme detection
//!
//! `NOTEKEEPER_SYSTEM_THEME=light|dark` overrides the platform probe.

use std::sync::OnceLock;

use notekeeper_core::theme::Theme;

/// Cached system dark mode preference (detected once per process)
static SYSTEM_DARK_MODE: OnceLock<bool> = OnceLock::new();

/// Detect system dark mode preference (cached after first call)
pub fn is_system_dark_mode() -> bool {
    *SYSTEM_DARK_MODE.get_or_init(detect_system_dark_mode)
}

fn detect_system_dark_mode() -> bool {
    if let Some(is_dark) = theme_override(std::env::var("NOTEKEEPER_SYSTEM_THEME").ok()) {
        tracing::debug!("System theme taken from NOTEKEEPER_SYSTEM_THEME");
        return is_dark;
    }
    detect_system_dark_mode_impl()
}

/// Parse an override value; unknown values are ignored
pub fn theme_override(value: Option<String>) -> Option<bool> {
    let value = value?;
    match value.parse::<Theme>() {
        Ok(theme) => Some(theme.is_dark()),
        Err(error) => {
            tracing::warn!("Ignoring NOTEKEEPER_SYSTEM_THEME: {error}");
            None
        }
    }
}

#[cfg(target_os = "windows")]
fn detect_system_dark_mode_impl() -> bool {
    use std::process::Command;
    // AppsUseLightTheme: 0 = dark mode, 1 = light mode
    let output = Command::new("reg")
        .args([
            "query",
            r"HKCU\SOFTWARE\Microsoft\Windows\CurrentVersion\Themes\Personalize",
            "/v",
            "AppsUseLightTheme",
        ])
        .output();

    match output {
        Ok(output) => String::from_utf8_lossy(&output.stdout).contains("0x0"),
        Err(e) => {
            tracing::warn!("Failed to detect system theme: {e}. Defaulting to light mode.");
            false
        }
    }
}

#[cfg(target_os = "macos")]
fn detect_system_dark_mode_impl() -> bool {
    use std::process::Command;
    let output = Command::new("defaults")
        .args(["read", "-g", "AppleInterfaceStyle"])
        .output();

    match output {
        Ok(output) => String::from_utf8_lossy(&output.stdout)
            .trim()
            .eq_ignore_ascii_case("dark"),
        Err(e) => {
            tracing::warn!("Failed to detect system theme: {e}. Defaulting to light mode.");
            false
        }
    }
}

#[cfg(target_os = "linux")]
fn detect_system_dark_mode_impl() -> bool {
    std::env::var("GTK_THEME").is_ok_and(|theme| theme.to_lowercase().contains("dark"))
}

#[cfg(not(any(target_os = "windows", target_os = "macos", target_os = "linux")))]
fn detect_system_dark_mode_impl() -> bool {
    false
}
