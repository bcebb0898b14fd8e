//! File sink implementation

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use parking_lot::Mutex;

use super::traits::Sink;
use crate::error::Error;
use crate::level::Severity;

/// A sink that appends plain-text entries to a log file
///
/// Opening is the only fallible operation; writes after a successful open
/// are best-effort and never surfaced to the caller.
#[derive(Debug)]
pub struct FileSink {
    path: PathBuf,
    file: Mutex<File>,
}

impl FileSink {
    /// Open `path` in append mode, creating the file if it is missing.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, Error> {
        let path = path.into();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|source| Error::OpenFailed {
                path: path.clone(),
                source,
            })?;
        Ok(Self {
            path,
            file: Mutex::new(file),
        })
    }

    /// The path the sink writes to.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Sink for FileSink {
    fn emit(&self, _level: Severity, line: &str) {
        let mut file = self.file.lock();
        let _ = writeln!(file, "{}", line);
        let _ = file.flush();
    }
}
