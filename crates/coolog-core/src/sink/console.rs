//! Console sink implementation

use colored::Colorize;

use super::traits::Sink;
use crate::level::Severity;

/// A sink that writes entries to stdout
///
/// With color enabled each line is wrapped in an ANSI SGR escape keyed by
/// level; the file copy of the same entry stays plain.
#[derive(Debug, Clone)]
pub struct ConsoleSink {
    color: bool,
}

impl Default for ConsoleSink {
    fn default() -> Self {
        Self::new(true)
    }
}

impl ConsoleSink {
    /// Create a console sink; `color` selects colorized or plain output.
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    /// Apply the per-level color to a formatted line.
    ///
    /// Debug is cyan, Info green, Warning yellow, Error red. `Off` carries
    /// no color and is passed through unchanged.
    fn paint(&self, level: Severity, line: &str) -> String {
        if !self.color {
            return line.to_string();
        }
        match level {
            Severity::Debug => line.cyan().to_string(),
            Severity::Info => line.green().to_string(),
            Severity::Warning => line.yellow().to_string(),
            Severity::Error => line.red().to_string(),
            Severity::Off => line.to_string(),
        }
    }
}

impl Sink for ConsoleSink {
    fn emit(&self, level: Severity, line: &str) {
        println!("{}", self.paint(level, line));
    }
}
