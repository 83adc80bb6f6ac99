#![allow(clippy::unwrap_used)]

use super::*;
use crate::LexerConfig;
use pretty_assertions::assert_eq;

fn preset(dialect: Dialect) -> Vocabulary {
    LexerConfig::for_dialect(dialect).vocabulary()
}

// === Presets ===

#[test]
fn function_set_size() {
    let vocab = preset(Dialect::Massmailer);
    assert_eq!(vocab.functions.len(), 35);
    assert_eq!(vocab.constants.len(), 4);
}

#[test]
fn massmailer_keywords() {
    let vocab = preset(Dialect::Massmailer);
    assert_eq!(vocab.classify("alias"), TokenKind::Keyword);
    assert_eq!(vocab.classify("as"), TokenKind::Keyword);
    assert_eq!(vocab.classify("using"), TokenKind::Identifier);
    assert!(Dialect::Massmailer.comments_enabled());
}

#[test]
fn mailing_keywords() {
    let vocab = preset(Dialect::Mailing);
    assert_eq!(vocab.classify("using"), TokenKind::Keyword);
    assert_eq!(vocab.classify("alias"), TokenKind::Identifier);
    assert_eq!(vocab.classify("as"), TokenKind::Identifier);
    assert!(!Dialect::Mailing.comments_enabled());
}

#[test]
fn presets_share_everything_else() {
    let a: FxHashSet<&str> = MASSMAILER_KEYWORDS.iter().copied().collect();
    let b: FxHashSet<&str> = MAILING_KEYWORDS.iter().copied().collect();
    let mut only_a: Vec<&str> = a.difference(&b).copied().collect();
    let mut only_b: Vec<&str> = b.difference(&a).copied().collect();
    only_a.sort_unstable();
    only_b.sort_unstable();
    assert_eq!(only_a, vec!["alias", "as"]);
    assert_eq!(only_b, vec!["using"]);
}

// === Classification ===

#[test]
fn constants_classify() {
    let vocab = preset(Dialect::Mailing);
    for word in ["true", "false", "null", "empty"] {
        assert_eq!(vocab.classify(word), TokenKind::Constant, "{word}");
    }
}

#[test]
fn classification_is_case_sensitive() {
    let vocab = preset(Dialect::Massmailer);
    assert_eq!(vocab.classify("upper"), TokenKind::Function);
    assert_eq!(vocab.classify("UPPER"), TokenKind::Identifier);
    assert_eq!(vocab.classify("And"), TokenKind::Identifier);
    assert_eq!(vocab.classify("True"), TokenKind::Identifier);
}

#[test]
fn function_beats_constant_beats_keyword() {
    let vocab = Vocabulary::new(
        ["upper", "both"].into_iter().collect(),
        ["both", "null", "kw"].into_iter().collect(),
        ["upper", "kw", "and"].into_iter().collect(),
    );
    assert_eq!(vocab.classify("upper"), TokenKind::Function);
    assert_eq!(vocab.classify("both"), TokenKind::Function);
    assert_eq!(vocab.classify("kw"), TokenKind::Constant);
    assert_eq!(vocab.classify("and"), TokenKind::Keyword);
    assert_eq!(vocab.classify("name"), TokenKind::Identifier);
}

#[test]
fn overlaps_report_winner() {
    let vocab = Vocabulary::new(
        ["upper", "both"].into_iter().collect(),
        ["both", "kw"].into_iter().collect(),
        ["upper", "kw", "and"].into_iter().collect(),
    );
    assert_eq!(
        vocab.overlaps(),
        vec![
            ("both", TokenKind::Function),
            ("kw", TokenKind::Constant),
            ("upper", TokenKind::Function),
        ]
    );
    assert!(preset(Dialect::Massmailer)
        .overlaps()
        .is_empty());
}

#[test]
fn empty_vocabulary_yields_identifiers() {
    let vocab = Vocabulary::default();
    assert_eq!(vocab.classify("and"), TokenKind::Identifier);
}

// === WordSet ===

#[test]
fn word_set_basics() {
    let mut set = WordSet::new();
    assert!(set.is_empty());
    assert!(set.insert("b"));
    assert!(set.insert(String::from("a")));
    assert!(!set.insert("a"));
    assert_eq!(set.len(), 2);
    assert_eq!(set.sorted(), vec!["a", "b"]);
    assert_eq!(format!("{set:?}"), r#"{"a", "b"}"#);
}

// === Dialect ===

#[test]
fn dialect_from_str() {
    assert_eq!("massmailer".parse::<Dialect>().unwrap(), Dialect::Massmailer);
    assert_eq!("mailing".parse::<Dialect>().unwrap(), Dialect::Mailing);
    let err = "sql".parse::<Dialect>().unwrap_err();
    assert!(matches!(err, ConfigError::UnknownDialect(ref s) if s == "sql"));
}

#[test]
fn dialect_display_round_trips() {
    for dialect in [Dialect::Massmailer, Dialect::Mailing] {
        assert_eq!(dialect.to_string().parse::<Dialect>().unwrap(), dialect);
    }
    assert_eq!(Dialect::default(), Dialect::Massmailer);
}
