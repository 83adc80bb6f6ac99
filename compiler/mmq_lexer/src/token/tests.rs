#![allow(clippy::unwrap_used)]

use super::*;
use pretty_assertions::assert_eq;

// === Span ===

#[test]
fn span_basic() {
    let span = Span::new(10, 20);
    assert_eq!(span.len(), 10);
    assert!(!span.is_empty());
    assert!(span.contains(15));
    assert!(!span.contains(20));
    assert_eq!(span.to_range(), 10..20);
}

#[test]
fn span_merge_and_offset() {
    let merged = Span::new(10, 20).merge(Span::new(15, 30));
    assert_eq!(merged, Span::new(10, 30));
    assert_eq!(Span::new(2, 5).offset_by(100), Span::new(102, 105));
}

#[test]
fn span_formats_as_range() {
    assert_eq!(format!("{}", Span::new(3, 7)), "3..7");
    assert_eq!(format!("{:?}", Span::new(3, 7)), "3..7");
}

// === TokenKind ===

#[test]
fn scope_names() {
    assert_eq!(TokenKind::Function.scope(), "support.function");
    assert_eq!(TokenKind::Numeric.scope(), "constant.numeric");
    assert_eq!(TokenKind::Constant.scope(), "constant.language");
    assert_eq!(TokenKind::StringEscape.scope(), "string.escape");
    assert_eq!(TokenKind::Error.to_string(), "error");
}

#[test]
fn scope_names_are_distinct() {
    let mut scopes: Vec<&str> = TokenKind::ALL.iter().map(|kind| kind.scope()).collect();
    scopes.sort_unstable();
    scopes.dedup();
    assert_eq!(scopes.len(), TokenKind::ALL.len());
}

#[test]
fn serializes_as_scope() {
    for kind in TokenKind::ALL {
        let json = serde_json::to_string(&kind).unwrap();
        assert_eq!(json, format!("\"{}\"", kind.scope()));
    }
}

// === Token ===

#[test]
fn token_serializes_with_span() {
    let token = Token::new(TokenKind::Keyword, "and", Span::new(0, 3));
    let json = serde_json::to_value(token).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "kind": "keyword",
            "text": "and",
            "span": { "start": 0, "end": 3 },
        })
    );
}

#[test]
fn token_debug() {
    let token = Token::new(TokenKind::Function, "upper", Span::new(4, 9));
    assert_eq!(format!("{token:?}"), "support.function(\"upper\") @ 4..9");
    assert_eq!(token.len(), 5);
    assert!(!token.is_empty());
}
