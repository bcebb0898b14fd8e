//! CooLog Core
//!
//! A minimal leveled logger: it timestamps messages, filters them by a
//! severity threshold, and writes them to the console (optionally
//! colorized) and/or a single append-mode log file. Meant to be embedded
//! in other programs for diagnostic output; it is not a logging framework.
//!
//! ```no_run
//! use coolog_core::{Logger, LoggerConfig, Severity};
//!
//! let mut logger = Logger::new(LoggerConfig::new().with_file("app.log"));
//! logger.info("starting up");
//! logger.set_level(Severity::Warning);
//! logger.warning("disk almost full");
//! ```
//!
//! File output is claimed once per process: the first logger constructed
//! with a file request owns the shared stream (see [`SinkRegistry`]), and
//! later file-enabled loggers fall back to console-only output.

pub mod config;
pub mod entry;
pub mod error;
pub mod level;
pub mod logger;
pub mod registry;
pub mod sink;

// Re-export the surface most embedders need
pub use config::LoggerConfig;
pub use error::{Error, Result};
pub use level::Severity;
pub use logger::Logger;
pub use registry::SinkRegistry;
pub use sink::{ConsoleSink, FileSink, MemorySink, SharedSink, Sink};
