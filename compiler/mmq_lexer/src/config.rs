//! Tokenizer configuration.
//!
//! A [`LexerConfig`] starts from a [`Dialect`] preset and can override any of
//! its parts, either in code or from a JSON file:
//!
//! ```json
//! {
//!     "dialect": "mailing",
//!     "comments": true,
//!     "keywords": ["and", "or", "using"],
//!     "functions": ["upper", "lower"],
//!     "constants": ["true", "false"]
//! }
//! ```
//!
//! Every field is optional. Missing word sets come from the dialect, which
//! defaults to `massmailer`.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use crate::vocabulary::{Dialect, Vocabulary, WordSet, CONSTANTS, FUNCTIONS};
use crate::QueryTokenizer;

/// Errors raised while building a configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file `{}`: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("unknown dialect `{0}` (expected `massmailer` or `mailing`)")]
    UnknownDialect(String),

    #[error("empty word in the {set} set")]
    EmptyWord { set: &'static str },

    #[error("word `{word}` in the {set} set contains whitespace")]
    InvalidWord { set: &'static str, word: String },
}

/// Everything the tokenizer needs besides the input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LexerConfig {
    /// Recognize `#` line comments.
    pub comments_enabled: bool,
    pub keywords: WordSet,
    pub functions: WordSet,
    pub constants: WordSet,
}

impl Default for LexerConfig {
    fn default() -> Self {
        Self::for_dialect(Dialect::default())
    }
}

impl LexerConfig {
    /// Configuration of a dialect preset.
    pub fn for_dialect(dialect: Dialect) -> Self {
        LexerConfig {
            comments_enabled: dialect.comments_enabled(),
            keywords: dialect.keywords().iter().copied().collect(),
            functions: FUNCTIONS.iter().copied().collect(),
            constants: CONSTANTS.iter().copied().collect(),
        }
    }

    #[must_use]
    pub fn with_comments(mut self, enabled: bool) -> Self {
        self.comments_enabled = enabled;
        self
    }

    #[must_use]
    pub fn with_keywords<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Box<str>>,
    {
        self.keywords = words.into_iter().collect();
        self
    }

    #[must_use]
    pub fn with_functions<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Box<str>>,
    {
        self.functions = words.into_iter().collect();
        self
    }

    #[must_use]
    pub fn with_constants<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Box<str>>,
    {
        self.constants = words.into_iter().collect();
        self
    }

    /// Parse a JSON configuration document.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let file: ConfigFile = serde_json::from_str(text)?;
        file.into_config()
    }

    /// Read and parse a JSON configuration file.
    #[tracing::instrument(level = "debug", skip_all, fields(path = %path.display()))]
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&text)
    }

    /// Check every word set.
    ///
    /// Empty words and words containing whitespace are rejected. Words the
    /// identifier rule can never produce, and words present in several sets,
    /// are accepted and reported at `debug` level.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (set, words) in self.sets() {
            for word in words.sorted() {
                if word.is_empty() {
                    return Err(ConfigError::EmptyWord { set });
                }
                if word.chars().any(char::is_whitespace) {
                    return Err(ConfigError::InvalidWord {
                        set,
                        word: word.to_owned(),
                    });
                }
                if !is_reachable_word(word) {
                    debug!(set, word, "word can never be produced by the identifier rule");
                }
            }
        }
        for (word, kind) in self.vocabulary().overlaps() {
            debug!(word, resolves_to = %kind, "word appears in more than one set");
        }
        Ok(())
    }

    /// The word sets as a lookup vocabulary.
    pub fn vocabulary(&self) -> Vocabulary {
        Vocabulary::new(
            self.functions.clone(),
            self.constants.clone(),
            self.keywords.clone(),
        )
    }

    /// Validate and build the tokenizer.
    pub fn build(self) -> Result<QueryTokenizer, ConfigError> {
        self.validate()?;
        Ok(QueryTokenizer::new(self))
    }

    fn sets(&self) -> [(&'static str, &WordSet); 3] {
        [
            ("keywords", &self.keywords),
            ("functions", &self.functions),
            ("constants", &self.constants),
        ]
    }
}

/// Whether `word` can come out of the identifier rule in one piece.
///
/// The rule only ends a match on a word boundary, so a word must start
/// with `[A-Za-z_$]`, continue with `[A-Za-z0-9_$]` and end on an ASCII
/// word character.
fn is_reachable_word(word: &str) -> bool {
    let bytes = word.as_bytes();
    let Some((&first, rest)) = bytes.split_first() else {
        return false;
    };
    let ident_start = first.is_ascii_alphabetic() || first == b'_' || first == b'$';
    let ident_rest = rest
        .iter()
        .all(|&b| b.is_ascii_alphanumeric() || b == b'_' || b == b'$');
    let ends_on_word = bytes
        .last()
        .is_some_and(|&b| b.is_ascii_alphanumeric() || b == b'_');
    ident_start && ident_rest && ends_on_word
}

/// On-disk shape of a configuration file.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    dialect: Option<String>,
    #[serde(alias = "commentsEnabled")]
    comments: Option<bool>,
    #[serde(alias = "keywordSet")]
    keywords: Option<Vec<String>>,
    #[serde(alias = "functionSet")]
    functions: Option<Vec<String>>,
    #[serde(alias = "constantSet")]
    constants: Option<Vec<String>>,
}

impl ConfigFile {
    fn into_config(self) -> Result<LexerConfig, ConfigError> {
        let dialect = match self.dialect.as_deref() {
            Some(name) => name.parse()?,
            None => Dialect::default(),
        };
        let mut config = LexerConfig::for_dialect(dialect);
        if let Some(comments) = self.comments {
            config = config.with_comments(comments);
        }
        if let Some(words) = self.keywords {
            config = config.with_keywords(words);
        }
        if let Some(words) = self.functions {
            config = config.with_functions(words);
        }
        if let Some(words) = self.constants {
            config = config.with_constants(words);
        }
        config.validate()?;
        Ok(config)
    }
}
