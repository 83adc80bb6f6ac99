//! Terminal Emitter
//!
//! Re-prints the query with ANSI colors. Adjacent tokens of the same kind
//! are merged first so each styled run gets a single escape sequence.

use std::io::{self, Write};
use std::str::FromStr;

use mmq_lexer::{coalesce, LineTokens, TokenKind};

use super::TokenEmitter;
use crate::CliError;

/// ANSI color codes for terminal output.
mod colors {
    pub const KEYWORD: &str = "\x1b[1;35m"; // Bold magenta
    pub const FUNCTION: &str = "\x1b[1;36m"; // Bold cyan
    pub const CONSTANT: &str = "\x1b[35m"; // Magenta
    pub const NUMERIC: &str = "\x1b[33m"; // Yellow
    pub const STRING: &str = "\x1b[32m"; // Green
    pub const ESCAPE: &str = "\x1b[1;32m"; // Bold green
    pub const COMMENT: &str = "\x1b[2m"; // Dim
    pub const ERROR: &str = "\x1b[1;31m"; // Bold red
    pub const RESET: &str = "\x1b[0m";
}

/// Color output mode for terminal emitter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorMode {
    /// Color only when writing to a terminal.
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    /// Resolve to a boolean. `is_tty` only matters for `Auto`.
    pub fn should_use_colors(self, is_tty: bool) -> bool {
        match self {
            ColorMode::Auto => is_tty,
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }
}

impl FromStr for ColorMode {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "auto" => Ok(ColorMode::Auto),
            "always" => Ok(ColorMode::Always),
            "never" => Ok(ColorMode::Never),
            other => Err(CliError::InvalidColor(other.to_owned())),
        }
    }
}

/// Style for a token kind, `None` for plain text.
fn style(kind: TokenKind) -> Option<&'static str> {
    match kind {
        TokenKind::Keyword => Some(colors::KEYWORD),
        TokenKind::Function => Some(colors::FUNCTION),
        TokenKind::Constant => Some(colors::CONSTANT),
        TokenKind::Numeric => Some(colors::NUMERIC),
        TokenKind::String => Some(colors::STRING),
        TokenKind::StringEscape => Some(colors::ESCAPE),
        TokenKind::Comment => Some(colors::COMMENT),
        TokenKind::Error => Some(colors::ERROR),
        TokenKind::Identifier
        | TokenKind::ParenOpen
        | TokenKind::ParenClose
        | TokenKind::Whitespace => None,
    }
}

/// Terminal emitter with optional color support.
pub struct TerminalEmitter<W: Write> {
    writer: W,
    colors: bool,
    first: bool,
    /// The last line written had text, so output needs a final newline.
    open_line: bool,
}

impl<W: Write> TerminalEmitter<W> {
    /// Create a terminal emitter.
    ///
    /// `is_tty` is only consulted for [`ColorMode::Auto`].
    pub fn with_color_mode(writer: W, mode: ColorMode, is_tty: bool) -> Self {
        TerminalEmitter {
            writer,
            colors: mode.should_use_colors(is_tty),
            first: true,
            open_line: false,
        }
    }

    /// Consume the emitter, returning the writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> TokenEmitter for TerminalEmitter<W> {
    fn emit_line(&mut self, line: &LineTokens<'_>) -> io::Result<()> {
        if !self.first {
            writeln!(self.writer)?;
        }
        self.first = false;

        let text: String = line.tokens.iter().map(|t| t.text).collect();
        for run in coalesce(&line.tokens) {
            let piece = &text[run.span.to_range()];
            match style(run.kind).filter(|_| self.colors) {
                Some(color) => write!(self.writer, "{color}{piece}{}", colors::RESET)?,
                None => self.writer.write_all(piece.as_bytes())?,
            }
        }
        self.open_line = !text.is_empty();
        Ok(())
    }

    fn finish(&mut self) -> io::Result<()> {
        if self.open_line {
            writeln!(self.writer)?;
            self.open_line = false;
        }
        self.writer.flush()
    }
}
