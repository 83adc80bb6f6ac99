//! The cooking layer: raw scanner output to highlight tokens.
//!
//! [`QueryTokenizer`] drives a [`RawScanner`] over one line, slices the
//! matched text out of the line and maps each [`RawTag`] to a
//! [`TokenKind`]. Identifier tags are classified against the configured
//! [`Vocabulary`]; everything else maps one to one.

use mmq_lexer_core::{LineBuffer, RawScanner, RawTag, ScanOptions, ScanState, MAX_LINE_LEN};
use tracing::{debug, trace};

use crate::vocabulary::{Dialect, Vocabulary};
use crate::{LexerConfig, Span, Token, TokenKind};

/// Something that can tokenize a document line by line.
///
/// Implementations must be pure: the same `(state, line)` always produces
/// the same tokens and end state, so callers may tokenize lines in any
/// order or from several threads as long as they thread the states.
pub trait LineTokenizer: Send + Sync {
    /// Tokenize one line starting from `state`.
    ///
    /// Returns tokens covering the whole line in order, plus the state the
    /// next line starts from. Offsets are `u32`, so a line longer than
    /// [`MAX_LINE_LEN`] bytes is only covered up to that length.
    fn tokenize_line<'a>(&self, state: ScanState, line: &'a str) -> (Vec<Token<'a>>, ScanState);

    /// Tokenize consecutive lines, threading the state from each line into
    /// the next. Each entry holds a line's tokens and its end state.
    fn tokenize_lines<'a>(
        &self,
        state: ScanState,
        lines: &[&'a str],
    ) -> Vec<(Vec<Token<'a>>, ScanState)> {
        let mut state = state;
        lines
            .iter()
            .map(|line| {
                let (tokens, end) = self.tokenize_line(state, line);
                state = end;
                (tokens, end)
            })
            .collect()
    }
}

/// Tokenizer for the filter-query language.
///
/// Holds only immutable configuration; share it freely.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QueryTokenizer {
    options: ScanOptions,
    vocabulary: Vocabulary,
}

impl Default for QueryTokenizer {
    fn default() -> Self {
        Self::new(LexerConfig::default())
    }
}

impl QueryTokenizer {
    /// Build a tokenizer without validating the configuration.
    ///
    /// Use [`LexerConfig::build`] to validate first.
    pub fn new(config: LexerConfig) -> Self {
        QueryTokenizer {
            options: ScanOptions {
                comments: config.comments_enabled,
            },
            vocabulary: Vocabulary::new(config.functions, config.constants, config.keywords),
        }
    }

    pub fn for_dialect(dialect: Dialect) -> Self {
        Self::new(LexerConfig::for_dialect(dialect))
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    pub fn comments_enabled(&self) -> bool {
        self.options.comments
    }

    #[inline]
    fn cook(&self, tag: RawTag, text: &str) -> TokenKind {
        match tag {
            RawTag::Ident => self.vocabulary.classify(text),
            tag if tag.is_numeric() => TokenKind::Numeric,
            tag if tag.is_string_piece() => TokenKind::String,
            RawTag::StringEscape => TokenKind::StringEscape,
            RawTag::ParenOpen => TokenKind::ParenOpen,
            RawTag::ParenClose => TokenKind::ParenClose,
            RawTag::Whitespace => TokenKind::Whitespace,
            RawTag::Comment => TokenKind::Comment,
            // InvalidChar; Eof never reaches here
            _ => TokenKind::Error,
        }
    }
}

impl LineTokenizer for QueryTokenizer {
    fn tokenize_line<'a>(&self, state: ScanState, line: &'a str) -> (Vec<Token<'a>>, ScanState) {
        if line.len() > MAX_LINE_LEN {
            debug!(
                bytes = line.len(),
                limit = MAX_LINE_LEN,
                "line exceeds the offset range; tail left untokenized"
            );
        }
        let buf = LineBuffer::new(line);
        let mut scanner = RawScanner::new(buf.cursor(), state, self.options);
        let mut tokens = Vec::new();
        let mut offset = 0u32;
        for raw in scanner.by_ref() {
            let span = Span::new(offset, offset + raw.len);
            let text = &line[span.to_range()];
            tokens.push(Token::new(self.cook(raw.tag, text), text, span));
            offset = span.end;
        }
        let end_state = scanner.state();
        trace!(tokens = tokens.len(), ?state, ?end_state, "tokenized line");
        (tokens, end_state)
    }
}
