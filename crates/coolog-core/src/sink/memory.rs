//! In-memory sink

use parking_lot::Mutex;

use super::traits::Sink;
use crate::level::Severity;

/// A sink that records entries in memory
///
/// Useful for tests, and for embedders that surface log lines in their own
/// UI instead of a terminal.
#[derive(Debug, Default)]
pub struct MemorySink {
    entries: Mutex<Vec<(Severity, String)>>,
}

impl MemorySink {
    /// Create an empty memory sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded `(level, line)` pairs, oldest first.
    pub fn entries(&self) -> Vec<(Severity, String)> {
        self.entries.lock().clone()
    }

    /// Recorded lines only.
    pub fn lines(&self) -> Vec<String> {
        self.entries
            .lock()
            .iter()
            .map(|(_, line)| line.clone())
            .collect()
    }

    /// Drop everything recorded so far.
    pub fn clear(&self) {
        self.entries.lock().clear();
    }
}

impl Sink for MemorySink {
    fn emit(&self, level: Severity, line: &str) {
        self.entries.lock().push((level, line.to_string()));
    }
}
