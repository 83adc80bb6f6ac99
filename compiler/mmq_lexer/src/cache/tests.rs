use super::*;
use crate::{Dialect, QueryTokenizer, TokenKind};
use pretty_assertions::assert_eq;

/// Helper: tokenize `lines` from scratch the way the cache should.
fn full(tokenizer: &QueryTokenizer, lines: &[&str]) -> Vec<(Vec<HighlightSpan>, ScanState)> {
    tokenizer
        .tokenize_lines(ScanState::Start, lines)
        .into_iter()
        .map(|(tokens, end)| (tokens.iter().map(HighlightSpan::from).collect(), end))
        .collect()
}

fn cached(cache: &HighlightCache<QueryTokenizer>) -> Vec<(Vec<HighlightSpan>, ScanState)> {
    (0..cache.line_count())
        .map(|i| {
            (
                cache.tokens(i).map(<[_]>::to_vec).unwrap_or_default(),
                cache.end_state(i).unwrap_or_default(),
            )
        })
        .collect()
}

fn document(lines: usize) -> String {
    (0..lines)
        .map(|i| format!("upper(field{i}) == 'v{i}'"))
        .collect::<Vec<_>>()
        .join("\n")
}

// === Basics ===

#[test]
fn empty_cache() {
    let cache = HighlightCache::new(QueryTokenizer::default());
    assert!(cache.is_empty());
    assert_eq!(cache.line(0), None);
    assert_eq!(cache.tokens(0), None);
}

#[test]
fn with_text_tokenizes_every_line() {
    let cache = HighlightCache::with_text(QueryTokenizer::default(), "a\r\nb\"c\\\nd\"");
    assert_eq!(cache.line_count(), 3);
    assert_eq!(cache.line(1), Some("b\"c\\"));
    assert_eq!(cache.end_state(1), Some(ScanState::InDoubleQuoteString));
    assert_eq!(cache.tokens(2).map(|t| t[0].kind), Some(TokenKind::String));
    assert_eq!(cache.text(), "a\nb\"c\\\nd\"");
}

// === Convergence ===

#[test]
fn local_edit_touches_one_line() {
    let mut cache = HighlightCache::with_text(QueryTokenizer::default(), &document(100));
    let range = cache.replace_lines(50, 1, &["lower(x) is null"]);
    assert_eq!(range, 50..51);
    assert_eq!(cache.line_count(), 100);
}

#[test]
fn opening_continuation_spills_into_next_line() {
    let mut cache = HighlightCache::with_text(QueryTokenizer::default(), &document(10));
    let range = cache.replace_lines(3, 1, &["x == \"open\\"]);
    assert_eq!(range, 3..5);
    assert_eq!(cache.end_state(3), Some(ScanState::InDoubleQuoteString));
    assert_eq!(cache.tokens(4).map(|t| t[0].kind), Some(TokenKind::String));

    // Closing it again restores the previous highlighting of line 4.
    let range = cache.replace_lines(3, 1, &["x == 1"]);
    assert_eq!(range, 3..5);
    assert_eq!(cache.tokens(4).map(|t| t[0].kind), Some(TokenKind::Function));
}

#[test]
fn chained_continuations_propagate() {
    let mut cache = HighlightCache::with_text(QueryTokenizer::default(), "a\nb\\\nc\\\nd\ne");
    // Lines 1 and 2 end in a backslash but are not in a string yet.
    assert_eq!(cache.end_state(2), Some(ScanState::Start));
    let range = cache.replace_lines(0, 1, &["'a\\"]);
    assert_eq!(range, 0..4);
    assert_eq!(cache.end_state(2), Some(ScanState::InSingleQuoteString));
    assert_eq!(cache.end_state(3), Some(ScanState::Start));
}

#[test]
fn insert_and_delete_lines() {
    let mut cache = HighlightCache::with_text(QueryTokenizer::default(), &document(5));
    let range = cache.replace_lines(2, 0, &["x", "y"]);
    assert_eq!(range, 2..4);
    assert_eq!(cache.line_count(), 7);
    let range = cache.replace_lines(1, 3, &[]);
    assert_eq!(range, 1..1);
    assert_eq!(cache.line_count(), 4);
    assert_eq!(cache.line(1), Some("upper(field2) == 'v2'"));
}

#[test]
fn out_of_range_edits_are_clamped() {
    let mut cache = HighlightCache::with_text(QueryTokenizer::default(), "a");
    let range = cache.replace_lines(10, 5, &["b"]);
    assert_eq!(range, 1..2);
    assert_eq!(cache.text(), "a\nb");
}

#[test]
fn set_text_replaces_everything() {
    let tokenizer = QueryTokenizer::for_dialect(Dialect::Mailing);
    let mut cache = HighlightCache::with_text(tokenizer, &document(3));
    cache.set_text("using");
    assert_eq!(cache.line_count(), 1);
    assert_eq!(cache.tokens(0).map(|t| t[0].kind), Some(TokenKind::Keyword));
    assert!(!cache.tokenizer().comments_enabled());
}

// === Equivalence with full tokenization ===

#[test]
fn matches_full_tokenization_after_edits() {
    let tokenizer = QueryTokenizer::default();
    let mut cache = HighlightCache::with_text(tokenizer.clone(), &document(8));
    let edits: [(usize, usize, &[&str]); 5] = [
        (0, 0, &["\"a\\", "b\\"]),
        (4, 2, &["'x"]),
        (1, 1, &[]),
        (6, 0, &["# c", "d'\\", ""]),
        (0, 3, &["and"]),
    ];
    for (start, removed, inserted) in edits {
        cache.replace_lines(start, removed, inserted);
        let text = cache.text();
        let lines: Vec<&str> = text.split('\n').collect();
        assert_eq!(cached(&cache), full(&tokenizer, &lines));
    }
}

mod proptest_cache {
    use super::*;
    use proptest::prelude::*;

    fn line() -> impl Strategy<Value = String> {
        proptest::string::string_regex(r#"[a-z"'\\ ]{0,8}"#)
            .map_or_else(|_| Just(String::new()).boxed(), |s| s.boxed())
    }

    fn edit() -> impl Strategy<Value = (usize, usize, Vec<String>)> {
        (0usize..12, 0usize..4, proptest::collection::vec(line(), 0..4))
    }

    proptest! {
        #[test]
        fn incremental_equals_full(
            initial in proptest::collection::vec(line(), 0..10),
            edits in proptest::collection::vec(edit(), 1..8),
        ) {
            let tokenizer = QueryTokenizer::default();
            let mut cache = HighlightCache::new(tokenizer.clone());
            let initial: Vec<&str> = initial.iter().map(String::as_str).collect();
            cache.replace_lines(0, 0, &initial);
            for (start, removed, inserted) in &edits {
                let inserted: Vec<&str> = inserted.iter().map(String::as_str).collect();
                cache.replace_lines(*start, *removed, &inserted);
            }
            let lines: Vec<String> = (0..cache.line_count())
                .filter_map(|i| cache.line(i).map(str::to_owned))
                .collect();
            let lines: Vec<&str> = lines.iter().map(String::as_str).collect();
            prop_assert_eq!(cached(&cache), full(&tokenizer, &lines));
        }
    }
}
