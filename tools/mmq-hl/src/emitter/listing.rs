//! Listing Emitter
//!
//! One row per token: `line:start..end scope "text"`, with 1-based line
//! numbers and line-relative byte offsets.

use std::io::{self, Write};

use mmq_lexer::LineTokens;

use super::TokenEmitter;

pub struct ListingEmitter<W: Write> {
    writer: W,
}

impl<W: Write> ListingEmitter<W> {
    pub fn new(writer: W) -> Self {
        ListingEmitter { writer }
    }

    /// Consume the emitter, returning the writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> TokenEmitter for ListingEmitter<W> {
    fn emit_line(&mut self, line: &LineTokens<'_>) -> io::Result<()> {
        for token in &line.tokens {
            writeln!(
                self.writer,
                "{}:{} {} {:?}",
                line.line + 1,
                token.span,
                token.kind,
                token.text
            )?;
        }
        Ok(())
    }

    fn finish(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}
