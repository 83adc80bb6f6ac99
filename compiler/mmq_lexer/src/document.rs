//! Whole-document tokenization.
//!
//! Editors hand the tokenizer one line at a time; this module does the
//! splitting and state threading for callers that hold the full text.

use mmq_lexer_core::ScanState;
use tracing::debug;

use crate::{LineTokenizer, Span, Token, TokenKind};

/// The tokens of one document line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LineTokens<'a> {
    /// Zero-based line number.
    pub line: usize,
    /// Byte offset of the line within the document.
    pub start: u32,
    /// Tokens with line-relative spans.
    pub tokens: Vec<Token<'a>>,
    /// State the following line starts from.
    pub end_state: ScanState,
}

impl LineTokens<'_> {
    /// Token kinds with document-relative spans.
    pub fn absolute(&self) -> impl Iterator<Item = (TokenKind, Span)> + '_ {
        self.tokens
            .iter()
            .map(|t| (t.kind, t.span.offset_by(self.start)))
    }
}

/// Iterator over the lines of a text, as `(offset, line)` pairs.
///
/// Lines end at `\n`, `\r\n` or a lone `\r`; terminators are not part of
/// the line. A text ending in a terminator has a final empty line, and the
/// empty text is one empty line.
#[derive(Clone, Debug)]
pub struct Lines<'a> {
    text: &'a str,
    pos: usize,
    done: bool,
}

impl<'a> Iterator for Lines<'a> {
    type Item = (u32, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let start = self.pos;
        let rest = &self.text[start..];
        let line = match rest.find(['\n', '\r']) {
            Some(end) => {
                let terminator = if rest[end..].starts_with("\r\n") { 2 } else { 1 };
                self.pos = start + end + terminator;
                &rest[..end]
            }
            None => {
                self.done = true;
                rest
            }
        };
        Some((to_offset(start), line))
    }
}

/// Split `text` into lines.
pub fn split_lines(text: &str) -> Lines<'_> {
    Lines {
        text,
        pos: 0,
        done: false,
    }
}

/// Tokenize a full document from [`ScanState::Start`].
///
/// Line start offsets saturate at `u32::MAX` in documents larger than that.
#[tracing::instrument(level = "debug", skip_all, fields(bytes = text.len()))]
pub fn tokenize_document<'a, T>(tokenizer: &T, text: &'a str) -> Vec<LineTokens<'a>>
where
    T: LineTokenizer + ?Sized,
{
    let mut state = ScanState::Start;
    let lines: Vec<LineTokens<'a>> = split_lines(text)
        .enumerate()
        .map(|(line, (start, source))| {
            let (tokens, end_state) = tokenizer.tokenize_line(state, source);
            state = end_state;
            LineTokens {
                line,
                start,
                tokens,
                end_state,
            }
        })
        .collect();
    debug!(lines = lines.len(), "tokenized document");
    lines
}

/// Document offset as `u32`; positions past `u32::MAX` saturate.
fn to_offset(pos: usize) -> u32 {
    u32::try_from(pos).unwrap_or(u32::MAX)
}
