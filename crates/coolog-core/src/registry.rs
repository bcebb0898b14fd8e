//! Process-wide file-sink state
//!
//! The registry owns the single shared log-file stream, the flag that
//! prevents reopening it, and the fallback-filename counter. It is an
//! explicit object rather than hidden globals so construction under test
//! can use a fresh registry rooted in a scratch directory;
//! [`SinkRegistry::global`] is the process-wide default that ordinary
//! construction goes through.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use once_cell::sync::Lazy;
use parking_lot::Mutex;

use crate::error::Result;
use crate::sink::FileSink;

/// Prefix for generated log filenames.
const GENERATED_PREFIX: &str = "mycoolog";

/// Extensions accepted on caller-supplied filenames, matched
/// case-insensitively.
const ACCEPTED_EXTENSIONS: [&str; 2] = [".log", ".txt"];

static GLOBAL: Lazy<Arc<SinkRegistry>> = Lazy::new(|| Arc::new(SinkRegistry::new(".")));

struct RegistryState {
    file: Option<Arc<FileSink>>,
    counter: u32,
}

/// Shared file-sink state for a family of loggers
pub struct SinkRegistry {
    dir: PathBuf,
    state: Mutex<RegistryState>,
}

impl SinkRegistry {
    /// Create a registry whose filename resolution is rooted at `dir`.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            state: Mutex::new(RegistryState {
                file: None,
                counter: 1,
            }),
        }
    }

    /// The process-wide default registry, rooted in the current directory.
    pub fn global() -> &'static Arc<SinkRegistry> {
        &GLOBAL
    }

    /// Directory filename resolution runs against.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// The shared file sink, if one has been opened.
    pub fn file(&self) -> Option<Arc<FileSink>> {
        self.state.lock().file.clone()
    }

    /// Open the shared log file for the first file-enabled logger.
    ///
    /// Returns `Ok(None)` once the stream is claimed: later callers stay
    /// console-only rather than sharing or redirecting it. On open failure
    /// the registry stays uninitialized, so a later construction may try
    /// again.
    pub fn init_file(&self, candidate: &str) -> Result<Option<Arc<FileSink>>> {
        let mut state = self.state.lock();
        if state.file.is_some() {
            return Ok(None);
        }
        let path = self.resolve_filename(&mut state, candidate);
        let sink = Arc::new(FileSink::open(path)?);
        state.file = Some(Arc::clone(&sink));
        Ok(Some(sink))
    }

    /// Pick the file to open: the candidate if it is usable, otherwise the
    /// next free generated name.
    ///
    /// A candidate is usable when it is non-empty, carries a `.log` or
    /// `.txt` extension, and no file by that name exists yet. The generated
    /// counter is monotonic for the registry's lifetime; it skips names
    /// already present on disk and is never reset between calls.
    fn resolve_filename(&self, state: &mut RegistryState, candidate: &str) -> PathBuf {
        if !candidate.is_empty() && has_accepted_extension(candidate) {
            let path = self.dir.join(candidate);
            if !path.exists() {
                return path;
            }
        }
        loop {
            let name = format!("{}{}.log", GENERATED_PREFIX, state.counter);
            state.counter += 1;
            let path = self.dir.join(name);
            if !path.exists() {
                return path;
            }
        }
    }
}

fn has_accepted_extension(name: &str) -> bool {
    let lower = name.to_ascii_lowercase();
    ACCEPTED_EXTENSIONS.iter().any(|ext| lower.ends_with(*ext))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_usable_candidate_is_kept_as_is() {
        let dir = tempfile::tempdir().unwrap();
        let registry = SinkRegistry::new(dir.path());

        let sink = registry.init_file("app.log").unwrap().unwrap();
        assert_eq!(sink.path(), dir.path().join("app.log"));
        assert!(dir.path().join("app.log").exists());
    }

    #[test]
    fn test_txt_extension_is_accepted_case_insensitively() {
        let dir = tempfile::tempdir().unwrap();
        let registry = SinkRegistry::new(dir.path());

        let sink = registry.init_file("Notes.TXT").unwrap().unwrap();
        assert_eq!(sink.path(), dir.path().join("Notes.TXT"));
    }

    #[test]
    fn test_wrong_extension_falls_back_to_generated_name() {
        let dir = tempfile::tempdir().unwrap();
        let registry = SinkRegistry::new(dir.path());

        let sink = registry.init_file("data.csv").unwrap().unwrap();
        assert_eq!(sink.path(), dir.path().join("mycoolog1.log"));
        assert!(!dir.path().join("data.csv").exists());
    }

    #[test]
    fn test_empty_candidate_generates_first_name() {
        let dir = tempfile::tempdir().unwrap();
        let registry = SinkRegistry::new(dir.path());

        let sink = registry.init_file("").unwrap().unwrap();
        assert_eq!(sink.path(), dir.path().join("mycoolog1.log"));
    }

    #[test]
    fn test_existing_candidate_is_not_reused() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("app.log"), "already here\n").unwrap();
        let registry = SinkRegistry::new(dir.path());

        let sink = registry.init_file("app.log").unwrap().unwrap();
        assert_eq!(sink.path(), dir.path().join("mycoolog1.log"));
    }

    #[test]
    fn test_generated_names_skip_existing_files() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("mycoolog1.log"), "").unwrap();
        std::fs::write(dir.path().join("mycoolog2.log"), "").unwrap();
        let registry = SinkRegistry::new(dir.path());

        let sink = registry.init_file("").unwrap().unwrap();
        assert_eq!(sink.path(), dir.path().join("mycoolog3.log"));
    }

    #[test]
    fn test_second_initialization_is_refused() {
        let dir = tempfile::tempdir().unwrap();
        let registry = SinkRegistry::new(dir.path());

        let first = registry.init_file("first.log").unwrap().unwrap();
        let second = registry.init_file("second.log").unwrap();
        assert!(second.is_none());
        assert!(!dir.path().join("second.log").exists());
        assert_eq!(registry.file().unwrap().path(), first.path());
    }

    #[test]
    fn test_failed_open_leaves_registry_uninitialized() {
        let parent = tempfile::tempdir().unwrap();
        let missing = parent.path().join("missing");
        let registry = SinkRegistry::new(&missing);

        assert!(registry.init_file("app.log").is_err());
        assert!(registry.file().is_none());

        // Once the directory exists a later construction may claim the
        // stream after all.
        std::fs::create_dir(&missing).unwrap();
        let sink = registry.init_file("app.log").unwrap().unwrap();
        assert_eq!(sink.path(), missing.join("app.log"));
    }

    #[test]
    fn test_counter_is_monotonic_across_attempts() {
        let parent = tempfile::tempdir().unwrap();
        let missing = parent.path().join("missing");
        let registry = SinkRegistry::new(&missing);

        // First attempt consumes mycoolog1 before the open fails.
        assert!(registry.init_file("").is_err());

        std::fs::create_dir(&missing).unwrap();
        let sink = registry.init_file("").unwrap().unwrap();
        assert_eq!(sink.path(), missing.join("mycoolog2.log"));
    }
}
