//! Terminal input - raw bytes → decoded events → event queue.
//!
//! ```text
//! stdin (reader thread) → InputDecoder → ParsedEvent → InputSink (EventQueue)
//! ```

pub mod parser;
pub mod reader;

pub use parser::{InputDecoder, ParsedEvent};
pub use reader::StdinReader;

use crate::error::Error;

/// Destination for decoded input, implemented by the scheduler's queue.
///
/// Called from the thread that reads the terminal.
pub trait InputSink: Send + 'static {
    /// Deliver one decoded event. Returns false once nobody is listening.
    fn push(&self, event: ParsedEvent) -> bool;

    /// Report that input can no longer be read. Ends the UI session.
    fn fail(&self, error: Error);
}
