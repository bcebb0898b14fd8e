//! Sink trait definition

use std::sync::Arc;

use crate::level::Severity;

/// Destination for formatted log entries
///
/// Implementations:
/// - `ConsoleSink`: stdout, optionally colorized
/// - `FileSink`: append-mode plain-text file
/// - `MemorySink`: in-memory capture for testing
///
/// `line` is the plain formatted entry; sinks that decorate it (color) do
/// so themselves. Emission is infallible by contract: sinks swallow write
/// errors rather than surfacing them to the logging call site.
pub trait Sink: Send + Sync {
    /// Write one formatted entry.
    fn emit(&self, level: Severity, line: &str);
}

/// Type alias for an Arc-wrapped sink
pub type SharedSink = Arc<dyn Sink>;
