//! Sink abstractions: destinations for formatted log entries

mod traits;
mod console;
mod file;
mod memory;

pub use traits::{Sink, SharedSink};
pub use console::ConsoleSink;
pub use file::FileSink;
pub use memory::MemorySink;
