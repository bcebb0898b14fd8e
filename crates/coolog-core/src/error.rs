//! Error taxonomy

use std::path::PathBuf;

use thiserror::Error as ThisError;

/// Errors that can occur inside the crate.
///
/// `Logger::log` never returns one of these: a file-open failure is
/// reported to stderr at construction time and the instance falls back to
/// console-only output, and write failures after a successful open are
/// ignored.
#[derive(Debug, ThisError)]
pub enum Error {
    /// The log file could not be opened
    #[error("failed to open log file {}: {source}", .path.display())]
    OpenFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A severity name did not parse
    #[error("unknown severity level: {0}")]
    UnknownLevel(String),
}

impl Error {
    /// The log-file path involved, when the error has one.
    pub fn path(&self) -> Option<&PathBuf> {
        match self {
            Error::OpenFailed { path, .. } => Some(path),
            Error::UnknownLevel(_) => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
