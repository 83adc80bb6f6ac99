//! Word sets and identifier classification.
//!
//! An identifier-shaped lexeme is looked up, case-sensitively, in three sets
//! in a fixed order:
//!
//! 1. **functions** → [`TokenKind::Function`]
//! 2. **constants** → [`TokenKind::Constant`]
//! 3. **keywords** → [`TokenKind::Keyword`]
//!
//! and falls back to [`TokenKind::Identifier`]. The sets may overlap; the
//! first set that contains the word wins.
//!
//! The two deployments of the query editor disagree on keywords and on
//! comment support. [`Dialect`] captures both presets.

use std::fmt;
use std::str::FromStr;

use rustc_hash::FxHashSet;

use crate::config::ConfigError;
use crate::TokenKind;

/// Built-in functions shared by both dialects.
pub const FUNCTIONS: &[&str] = &[
    "concatpair",
    "min",
    "coalesce",
    "concat",
    "keystransform",
    "valuestransform",
    "rangestartswith",
    "upper",
    "daytransform",
    "yeartransform",
    "variance",
    "lower",
    "rangeendswith",
    "minutetransform",
    "substr",
    "stddev",
    "greatest",
    "datetimedatetransform",
    "secondtransform",
    "max",
    "monthtransform",
    "sum",
    "isempty",
    "hourtransform",
    "unaccent",
    "avg",
    "slicetransform",
    "length",
    "indextransform",
    "count",
    "now",
    "keytransform",
    "arraylentransform",
    "weekdaytransform",
    "least",
];

/// Language constants shared by both dialects.
pub const CONSTANTS: &[&str] = &["true", "false", "null", "empty"];

/// Keywords of the `massmailer` query editor.
pub const MASSMAILER_KEYWORDS: &[&str] = &[
    "and", "or", "not", "is", "between", "alias", "contain", "contains", "start", "starts", "end",
    "ends", "match", "matches", "does", "doesn't", "with", "as",
];

/// Keywords of the older `mailing` query editor.
pub const MAILING_KEYWORDS: &[&str] = &[
    "and", "or", "not", "is", "between", "using", "contain", "contains", "start", "starts", "end",
    "ends", "match", "matches", "does", "doesn't", "with",
];

/// An exact-match, case-sensitive set of words.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct WordSet {
    words: FxHashSet<Box<str>>,
}

impl WordSet {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Add a word. Returns `false` if it was already present.
    pub fn insert(&mut self, word: impl Into<Box<str>>) -> bool {
        self.words.insert(word.into())
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Words in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(AsRef::as_ref)
    }

    /// Words in lexicographic order.
    pub fn sorted(&self) -> Vec<&str> {
        let mut words: Vec<&str> = self.iter().collect();
        words.sort_unstable();
        words
    }
}

impl<S: Into<Box<str>>> FromIterator<S> for WordSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        WordSet {
            words: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl fmt::Debug for WordSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.sorted()).finish()
    }
}

/// The three word sets consulted for identifier-shaped lexemes.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Vocabulary {
    pub functions: WordSet,
    pub constants: WordSet,
    pub keywords: WordSet,
}

impl Vocabulary {
    pub fn new(functions: WordSet, constants: WordSet, keywords: WordSet) -> Self {
        Vocabulary {
            functions,
            constants,
            keywords,
        }
    }

    /// Classify an identifier-shaped word.
    #[inline]
    pub fn classify(&self, word: &str) -> TokenKind {
        if self.functions.contains(word) {
            TokenKind::Function
        } else if self.constants.contains(word) {
            TokenKind::Constant
        } else if self.keywords.contains(word) {
            TokenKind::Keyword
        } else {
            TokenKind::Identifier
        }
    }

    /// Words present in more than one set, with the kind they resolve to.
    pub fn overlaps(&self) -> Vec<(&str, TokenKind)> {
        let sets = [&self.functions, &self.constants, &self.keywords];
        let mut out: Vec<(&str, TokenKind)> = Vec::new();
        for (i, set) in sets.iter().enumerate() {
            for word in set.iter() {
                let shadowed = sets[i + 1..].iter().any(|later| later.contains(word));
                let seen = out.iter().any(|(w, _)| *w == word);
                if shadowed && !seen {
                    out.push((word, self.classify(word)));
                }
            }
        }
        out.sort_unstable_by_key(|(w, _)| *w);
        out
    }
}

/// Deployment preset: keyword set plus comment support.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Dialect {
    /// The current editor: `alias`/`as` keywords, `#` comments.
    #[default]
    Massmailer,
    /// The older editor: `using` keyword, no comments.
    Mailing,
}

impl Dialect {
    pub const fn name(self) -> &'static str {
        match self {
            Dialect::Massmailer => "massmailer",
            Dialect::Mailing => "mailing",
        }
    }

    pub const fn keywords(self) -> &'static [&'static str] {
        match self {
            Dialect::Massmailer => MASSMAILER_KEYWORDS,
            Dialect::Mailing => MAILING_KEYWORDS,
        }
    }

    pub const fn comments_enabled(self) -> bool {
        matches!(self, Dialect::Massmailer)
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Dialect {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "massmailer" => Ok(Dialect::Massmailer),
            "mailing" => Ok(Dialect::Mailing),
            other => Err(ConfigError::UnknownDialect(other.to_owned())),
        }
    }
}

#[cfg(test)]
mod tests;
