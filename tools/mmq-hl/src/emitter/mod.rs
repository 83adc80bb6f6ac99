//! Token emitters
//!
//! Output formats for a tokenized document:
//! - Listing: one row per token, for debugging the tokenizer
//! - Terminal: the query text, colored per token kind
//! - JSON: machine-readable tokens for editor integrations
//!
//! Every emitter implements [`TokenEmitter`].

mod json;
mod listing;
mod terminal;

pub use json::JsonEmitter;
pub use listing::ListingEmitter;
pub use terminal::{ColorMode, TerminalEmitter};

use std::io;

use mmq_lexer::LineTokens;

/// Trait for writing tokenized lines in some format.
pub trait TokenEmitter {
    /// Emit one line.
    fn emit_line(&mut self, line: &LineTokens<'_>) -> io::Result<()>;

    /// Emit a whole document.
    fn emit_all(&mut self, lines: &[LineTokens<'_>]) -> io::Result<()> {
        for line in lines {
            self.emit_line(line)?;
        }
        Ok(())
    }

    /// Write any trailing output and flush.
    fn finish(&mut self) -> io::Result<()>;
}
