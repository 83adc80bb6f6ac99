//! JSON Emitter
//!
//! Writes the document as a JSON array with one object per line:
//!
//! ```json
//! [
//!   {
//!     "line": 1,
//!     "start": 0,
//!     "end_state": "start",
//!     "tokens": [
//!       { "kind": "keyword", "text": "and", "span": { "start": 0, "end": 3 } }
//!     ]
//!   }
//! ]
//! ```

use std::io::{self, Write};

use mmq_lexer::{LineTokens, ScanState, Token};
use serde::Serialize;

use super::TokenEmitter;

#[derive(Serialize)]
struct JsonLine<'l, 't> {
    /// 1-based line number.
    line: usize,
    /// Byte offset of the line within the document.
    start: u32,
    end_state: &'static str,
    tokens: &'l [Token<'t>],
}

fn state_name(state: ScanState) -> &'static str {
    match state {
        ScanState::Start => "start",
        ScanState::InDoubleQuoteString => "double_quoted_string",
        ScanState::InSingleQuoteString => "single_quoted_string",
    }
}

/// JSON emitter for machine-readable output.
///
/// Lines are buffered and written as one array by [`finish`](TokenEmitter::finish).
pub struct JsonEmitter<W: Write> {
    writer: W,
    lines: Vec<serde_json::Value>,
}

impl<W: Write> JsonEmitter<W> {
    pub fn new(writer: W) -> Self {
        JsonEmitter {
            writer,
            lines: Vec::new(),
        }
    }

    /// Consume the emitter, returning the writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> TokenEmitter for JsonEmitter<W> {
    fn emit_line(&mut self, line: &LineTokens<'_>) -> io::Result<()> {
        let value = serde_json::to_value(JsonLine {
            line: line.line + 1,
            start: line.start,
            end_state: state_name(line.end_state),
            tokens: &line.tokens,
        })?;
        self.lines.push(value);
        Ok(())
    }

    fn finish(&mut self) -> io::Result<()> {
        serde_json::to_writer_pretty(&mut self.writer, &self.lines)?;
        writeln!(self.writer)?;
        self.lines.clear();
        self.writer.flush()
    }
}
