//! The leveled logger

use std::sync::Arc;

use crate::config::LoggerConfig;
use crate::entry;
use crate::level::Severity;
use crate::registry::SinkRegistry;
use crate::sink::{ConsoleSink, SharedSink};

/// Leveled logger writing to the console and, optionally, one log file
///
/// Emission is synchronous and infallible: a message that passes the
/// threshold is formatted once, appended plain to the file sink when one is
/// attached, then written (optionally colorized) to stdout.
pub struct Logger {
    level: Severity,
    console: SharedSink,
    file: Option<SharedSink>,
}

impl Logger {
    /// Construct against the process-wide default registry.
    pub fn new(config: LoggerConfig) -> Self {
        Self::with_registry(config, SinkRegistry::global())
    }

    /// Construct against an explicit registry.
    ///
    /// Never fails: if the log file cannot be opened, a diagnostic goes to
    /// stderr and the instance falls back to console-only output. If the
    /// registry's file stream is already claimed by an earlier instance,
    /// this instance is console-only as well.
    pub fn with_registry(config: LoggerConfig, registry: &SinkRegistry) -> Self {
        let console: SharedSink = Arc::new(ConsoleSink::new(config.color));
        let file = if config.to_file {
            match registry.init_file(&config.filename) {
                Ok(attached) => attached.map(|sink| sink as SharedSink),
                Err(err) => {
                    eprintln!("{}", err);
                    None
                }
            }
        } else {
            None
        };
        Self {
            level: config.level,
            console,
            file,
        }
    }

    /// Construct from explicit sinks: one console slot and at most one file
    /// slot. This is the seam tests and embedders inject through.
    pub fn with_sinks(level: Severity, console: SharedSink, file: Option<SharedSink>) -> Self {
        Self {
            level,
            console,
            file,
        }
    }

    /// Active threshold.
    pub fn level(&self) -> Severity {
        self.level
    }

    /// Replace the threshold for all subsequent calls. Entries already
    /// emitted are unaffected.
    pub fn set_level(&mut self, level: Severity) {
        self.level = level;
    }

    /// Emit `message` at `level` if it passes the active threshold.
    ///
    /// The file sink receives the plain line first, then the console sink;
    /// both writes block the caller and neither reports failure.
    pub fn log(&self, level: Severity, message: &str) {
        if !self.level.permits(level) {
            return;
        }
        let line = entry::format_entry(level, message, entry::now());
        if let Some(file) = &self.file {
            file.emit(level, &line);
        }
        self.console.emit(level, &line);
    }

    /// Emit at `Debug`.
    pub fn debug(&self, message: &str) {
        self.log(Severity::Debug, message);
    }

    /// Emit at `Info`.
    pub fn info(&self, message: &str) {
        self.log(Severity::Info, message);
    }

    /// Emit at `Warning`.
    pub fn warning(&self, message: &str) {
        self.log(Severity::Warning, message);
    }

    /// Emit at `Error`.
    pub fn error(&self, message: &str) {
        self.log(Severity::Error, message);
    }
}
