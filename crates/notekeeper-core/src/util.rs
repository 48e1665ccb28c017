//! Shared formatting helpers used by the client and the CLI.

use chrono::{DateTime, TimeZone};

/// Describe how long ago `timestamp_ms` was, relative to `now_ms`.
///
/// Coarse buckets only: `Just now`, minutes, hours, then days.
pub fn relative_time(timestamp_ms: i64, now_ms: i64) -> String {
    let minutes = now_ms.saturating_sub(timestamp_ms) / 60_000;
    let hours = minutes / 60;
    let days = hours / 24;

    if minutes < 1 {
        "Just now".to_string()
    } else if minutes < 60 {
        format!("{minutes} min ago")
    } else if hours < 24 {
        format!("{hours} hour ago")
    } else {
        format!("{days} day ago")
    }
}

/// Greeting shown on the home header for the given hour of day (0-23).
pub const fn greeting_message(hour: u32) -> &'static str {
    match hour {
        5..=11 => "Good Morning",
        12..=16 => "Good Afternoon",
        17..=19 => "Good Evening",
        _ => "Good Night",
    }
}

/// Date line shown under the greeting, e.g. `Mon, Oct 19 2026`.
pub fn date_line<Tz: TimeZone>(date: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    date.format("%a, %b %d %Y").to_string()
}

/// Normalize optional text by trimming whitespace and removing empties.
///
/// Returns `None` when the input is `None` or the trimmed value is empty.
pub fn normalize_text_option(value: Option<String>) -> Option<String> {
    let value = value?;
    let value = value.trim();
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

/// Current Unix timestamp in milliseconds.
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn relative_time_buckets() {
        let now = 100 * 24 * 60 * 60_000;
        assert_eq!(relative_time(now, now), "Just now");
        assert_eq!(relative_time(now - 59_000, now), "Just now");
        assert_eq!(relative_time(now - 5 * 60_000, now), "5 min ago");
        assert_eq!(relative_time(now - 3 * 60 * 60_000, now), "3 hour ago");
        assert_eq!(relative_time(now - 2 * 24 * 60 * 60_000, now), "2 day ago");
    }

    #[test]
    fn relative_time_future_is_just_now() {
        assert_eq!(relative_time(2_000_000, 1_000_000), "Just now");
    }

    #[test]
    fn greeting_message_by_hour() {
        assert_eq!(greeting_message(0), "Good Night");
        assert_eq!(greeting_message(4), "Good Night");
        assert_eq!(greeting_message(5), "Good Morning");
        assert_eq!(greeting_message(12), "Good Afternoon");
        assert_eq!(greeting_message(17), "Good Evening");
        assert_eq!(greeting_message(20), "Good Night");
    }

    #[test]
    fn date_line_format() {
        let date = Utc.with_ymd_and_hms(2026, 10, 19, 8, 30, 0).unwrap();
        assert_eq!(date_line(&date), "Mon, Oct 19 2026");

        let date = Utc.with_ymd_and_hms(2024, 3, 5, 0, 0, 0).unwrap();
        assert_eq!(date_line(&date), "Tue, Mar 05 2024");
    }

    #[test]
    fn normalize_text_option_rejects_empty() {
        assert_eq!(normalize_text_option(None), None);
        assert_eq!(normalize_text_option(Some("   ".to_string())), None);
        assert_eq!(
            normalize_text_option(Some(" Work ".to_string())),
            Some("Work".to_string())
        );
    }
}
