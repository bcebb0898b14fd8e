//! Formatting of individual log entries
//!
//! An entry is ephemeral: formatted per call, written to the sinks, and
//! discarded. Nothing here is persisted.

use chrono::{DateTime, Local};

use crate::level::Severity;

/// Local time, millisecond precision.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

/// The instant to stamp an entry with.
pub fn now() -> DateTime<Local> {
    Local::now()
}

/// Render a `[<timestamp>] [<LEVEL>] <message>` line for the given instant.
pub fn format_entry(level: Severity, message: &str, at: DateTime<Local>) -> String {
    format!("[{}] [{}] {}", at.format(TIMESTAMP_FORMAT), level.tag(), message)
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, TimeZone};

    use super::*;

    fn pinned() -> DateTime<Local> {
        Local.with_ymd_and_hms(2024, 3, 5, 14, 30, 7).unwrap() + Duration::milliseconds(42)
    }

    #[test]
    fn test_entry_shape() {
        let line = format_entry(Severity::Info, "cache warmed", pinned());
        assert_eq!(line, "[2024-03-05 14:30:07.042] [INFO] cache warmed");
    }

    #[test]
    fn test_millisecond_width_is_fixed() {
        let at = Local.with_ymd_and_hms(2024, 3, 5, 14, 30, 7).unwrap();
        let line = format_entry(Severity::Error, "boom", at);
        assert_eq!(line, "[2024-03-05 14:30:07.000] [ERROR] boom");
    }

    #[test]
    fn test_empty_message_is_logged_as_is() {
        let line = format_entry(Severity::Warning, "", pinned());
        assert_eq!(line, "[2024-03-05 14:30:07.042] [WARNING] ");
    }
}
