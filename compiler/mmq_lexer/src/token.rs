//! Highlight tokens: kinds, spans and the token value itself.

use std::fmt;

use serde::Serialize;

/// Byte range within a line (or a document, for [`LineTokens`](crate::LineTokens)
/// offsets).
///
/// Layout: 8 bytes total
/// - start: u32 - byte offset
/// - end: u32 - byte offset (exclusive)
#[derive(Copy, Clone, Eq, PartialEq, Hash, Default, Serialize)]
pub struct Span {
    pub start: u32,
    pub end: u32,
}

impl Span {
    /// Create a new span.
    #[inline]
    pub const fn new(start: u32, end: u32) -> Self {
        Span { start, end }
    }

    /// Length of the span in bytes.
    #[inline]
    pub const fn len(&self) -> u32 {
        self.end - self.start
    }

    /// Check if span is empty.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Check if an offset is within this span.
    #[inline]
    pub fn contains(&self, offset: u32) -> bool {
        offset >= self.start && offset < self.end
    }

    /// Merge two spans to create one covering both.
    #[inline]
    #[must_use]
    pub fn merge(self, other: Span) -> Span {
        Span {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }

    /// Shift both ends right by `offset`.
    #[inline]
    #[must_use]
    pub const fn offset_by(self, offset: u32) -> Span {
        Span {
            start: self.start + offset,
            end: self.end + offset,
        }
    }

    /// Convert to a `std::ops::Range`.
    #[inline]
    pub fn to_range(&self) -> std::ops::Range<usize> {
        self.start as usize..self.end as usize
    }
}

impl fmt::Debug for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

/// Highlight category of a token.
///
/// Serializes as its scope name (`"support.function"`, `"string.escape"`, ...),
/// which is also what renderers key their styles on.
#[repr(u8)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum TokenKind {
    #[serde(rename = "comment")]
    Comment,
    /// Any piece of a string literal: opener, body, continuation, closer.
    #[serde(rename = "string")]
    String,
    #[serde(rename = "string.escape")]
    StringEscape,
    /// Integer, long, hex or float literal.
    #[serde(rename = "constant.numeric")]
    Numeric,
    /// A word from the constant set (`true`, `null`, ...).
    #[serde(rename = "constant.language")]
    Constant,
    #[serde(rename = "keyword")]
    Keyword,
    #[serde(rename = "support.function")]
    Function,
    #[serde(rename = "identifier")]
    Identifier,
    #[serde(rename = "paren.open")]
    ParenOpen,
    #[serde(rename = "paren.close")]
    ParenClose,
    #[serde(rename = "whitespace")]
    Whitespace,
    /// A character no rule matched.
    #[serde(rename = "error")]
    Error,
}

impl TokenKind {
    /// Every kind, in declaration order.
    pub const ALL: [TokenKind; 12] = [
        TokenKind::Comment,
        TokenKind::String,
        TokenKind::StringEscape,
        TokenKind::Numeric,
        TokenKind::Constant,
        TokenKind::Keyword,
        TokenKind::Function,
        TokenKind::Identifier,
        TokenKind::ParenOpen,
        TokenKind::ParenClose,
        TokenKind::Whitespace,
        TokenKind::Error,
    ];

    /// Scope name used by renderers.
    pub const fn scope(self) -> &'static str {
        match self {
            TokenKind::Comment => "comment",
            TokenKind::String => "string",
            TokenKind::StringEscape => "string.escape",
            TokenKind::Numeric => "constant.numeric",
            TokenKind::Constant => "constant.language",
            TokenKind::Keyword => "keyword",
            TokenKind::Function => "support.function",
            TokenKind::Identifier => "identifier",
            TokenKind::ParenOpen => "paren.open",
            TokenKind::ParenClose => "paren.close",
            TokenKind::Whitespace => "whitespace",
            TokenKind::Error => "error",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.scope())
    }
}

/// One classified lexeme of a line.
///
/// `text` is exactly `line[span]`; spans are line-relative byte offsets.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub text: &'a str,
    pub span: Span,
}

impl<'a> Token<'a> {
    #[inline]
    pub const fn new(kind: TokenKind, text: &'a str, span: Span) -> Self {
        Token { kind, text, span }
    }

    /// Length in bytes. Never zero for tokens produced by a tokenizer.
    #[inline]
    pub const fn len(&self) -> u32 {
        self.span.len()
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.span.is_empty()
    }
}

impl fmt::Debug for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({:?}) @ {}", self.kind, self.text, self.span)
    }
}

const _: () = assert!(std::mem::size_of::<Span>() == 8);
const _: () = assert!(std::mem::size_of::<TokenKind>() == 1);

#[cfg(test)]
mod tests;
