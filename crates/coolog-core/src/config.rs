//! Logger construction parameters

use serde::{Deserialize, Serialize};

use crate::level::Severity;

/// Construction parameters for a [`Logger`](crate::Logger)
///
/// This is the logger's entire external configuration surface: no CLI
/// flags, no environment variables. The struct is serde-serializable so an
/// embedding program can carry it inside its own configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggerConfig {
    /// Initial severity threshold
    #[serde(default)]
    pub level: Severity,
    /// Whether to request file output
    #[serde(default)]
    pub to_file: bool,
    /// Candidate log filename; empty means "generate one"
    #[serde(default)]
    pub filename: String,
    /// Whether console output is colorized
    #[serde(default = "default_color")]
    pub color: bool,
}

fn default_color() -> bool {
    true
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            level: Severity::Info,
            to_file: false,
            filename: String::new(),
            color: true,
        }
    }
}

impl LoggerConfig {
    /// Console-only defaults: INFO threshold, color on, no file.
    pub fn new() -> Self {
        Self::default()
    }

    /// The stripped-down variant: console-only and uncolored.
    pub fn minimal() -> Self {
        Self {
            color: false,
            ..Self::default()
        }
    }

    /// Set the initial threshold.
    pub fn with_level(mut self, level: Severity) -> Self {
        self.level = level;
        self
    }

    /// Request file output with a candidate filename (empty = generate).
    pub fn with_file(mut self, filename: impl Into<String>) -> Self {
        self.to_file = true;
        self.filename = filename.into();
        self
    }

    /// Enable or disable console color.
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }
}
