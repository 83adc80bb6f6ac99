//! Highlighting tokenizer for the mailing filter-query language.
//!
//! Turns query text into typed tokens an editor can colorize as the user
//! types. Scanning is line based and resumable: every line is tokenized
//! from the [`ScanState`] the previous line ended in, so a host can
//! re-highlight a single edited line without rescanning the document.
//!
//! # Architecture
//!
//! - `mmq_lexer_core` scans bytes into `(RawTag, len)` pairs
//! - [`QueryTokenizer`] cooks those into [`Token`]s, classifying identifiers
//!   against a [`Vocabulary`]
//! - [`LexerConfig`] / [`Dialect`] choose the keyword set and comment support
//! - [`tokenize_document`], [`HighlightCache`] and [`coalesce`] are the
//!   document-level conveniences built on [`LineTokenizer`]
//!
//! ```
//! use mmq_lexer::{Dialect, LineTokenizer, QueryTokenizer, ScanState, TokenKind};
//!
//! let tokenizer = QueryTokenizer::for_dialect(Dialect::Massmailer);
//! let (tokens, state) = tokenizer.tokenize_line(ScanState::Start, "upper(name)");
//! assert_eq!(tokens[0].kind, TokenKind::Function);
//! assert_eq!(state, ScanState::Start);
//! ```

mod cache;
mod config;
mod document;
mod spans;
mod token;
mod tokenizer;
mod vocabulary;

pub use cache::HighlightCache;
pub use config::{ConfigError, LexerConfig};
pub use document::{split_lines, tokenize_document, LineTokens, Lines};
pub use mmq_lexer_core::{ScanState, MAX_LINE_LEN};
pub use spans::{coalesce, HighlightSpan};
pub use token::{Span, Token, TokenKind};
pub use tokenizer::{LineTokenizer, QueryTokenizer};
pub use vocabulary::{
    Dialect, Vocabulary, WordSet, CONSTANTS, FUNCTIONS, MAILING_KEYWORDS, MASSMAILER_KEYWORDS,
};
