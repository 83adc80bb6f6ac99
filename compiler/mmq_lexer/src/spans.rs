//! Render-ready highlight spans.
//!
//! The tokenizer reports every rule match separately, so a string literal
//! comes out as opener, body, escapes and closer. Renderers usually want one
//! run per style instead; [`coalesce`] merges adjacent tokens of the same
//! kind.

use serde::Serialize;

use crate::{Span, Token, TokenKind};

/// A styled byte range.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct HighlightSpan {
    pub kind: TokenKind,
    pub span: Span,
}

impl HighlightSpan {
    #[inline]
    pub const fn new(kind: TokenKind, span: Span) -> Self {
        HighlightSpan { kind, span }
    }
}

impl From<&Token<'_>> for HighlightSpan {
    fn from(token: &Token<'_>) -> Self {
        HighlightSpan::new(token.kind, token.span)
    }
}

impl From<Token<'_>> for HighlightSpan {
    fn from(token: Token<'_>) -> Self {
        HighlightSpan::new(token.kind, token.span)
    }
}

/// Merge runs of adjacent spans that share a kind.
///
/// Spans are merged only when they touch (`prev.end == next.start`), so the
/// covered bytes never change.
pub fn coalesce<I>(spans: I) -> Vec<HighlightSpan>
where
    I: IntoIterator,
    I::Item: Into<HighlightSpan>,
{
    let mut out: Vec<HighlightSpan> = Vec::new();
    for span in spans {
        let span = span.into();
        match out.last_mut() {
            Some(last) if last.kind == span.kind && last.span.end == span.span.start => {
                last.span = last.span.merge(span.span);
            }
            _ => out.push(span),
        }
    }
    out
}
