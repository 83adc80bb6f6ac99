//! Raw token tags produced by the scanner.
//!
//! Tags are grouped into discriminant ranges so that the category checks
//! below compile to range comparisons:
//!
//! | Range   | Category             |
//! |---------|----------------------|
//! | 0-15    | Identifiers & numbers|
//! | 16-31   | String pieces        |
//! | 80-95   | Delimiters           |
//! | 112-127 | Trivia               |
//! | 240-254 | Errors               |
//! | 255     | End of line          |

/// Classification of one raw lexeme.
///
/// Keywords, functions and constants are all [`RawTag::Ident`] at this
/// level; resolving them against a vocabulary is the cooking layer's job.
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RawTag {
    // === Identifiers & Numbers ===
    /// `[A-Za-z_$][A-Za-z0-9_$]*` ending on a word boundary.
    Ident = 0,
    /// Decimal integer: `0` or `[1-9][0-9]*`.
    Int = 1,
    /// Floating-point literal: `1.5`, `.5`, `3.`, `1e10`, `2.5E-3`.
    Float = 2,
    /// Hexadecimal integer: `0x1F`.
    HexInt = 3,
    /// Decimal or hexadecimal integer with an `l`/`L` suffix.
    LongInt = 4,

    // === String Pieces ===
    /// Opening quote, with an optional `i` (case-insensitive) prefix.
    StringOpen = 16,
    /// Ordinary characters inside a string literal.
    StringContent = 17,
    /// A recognized escape sequence such as `\n` or `\x41`.
    StringEscape = 18,
    /// A backslash as the last character of the line; the literal
    /// continues on the next line.
    StringContinuation = 19,
    /// The closing quote.
    StringClose = 20,

    // === Delimiters ===
    /// `(`, `[` or `{`.
    ParenOpen = 80,
    /// `)`, `]` or `}`.
    ParenClose = 81,

    // === Trivia ===
    /// A run of whitespace characters.
    Whitespace = 112,
    /// `#` through end of line (only when comments are enabled).
    Comment = 113,

    // === Errors ===
    /// A single character that no rule matches.
    InvalidChar = 240,

    // === Control ===
    /// End of line. Always has length 0.
    Eof = 255,
}

impl RawTag {
    /// Short human-readable name, used in debug listings.
    pub fn name(self) -> &'static str {
        match self {
            Self::Ident => "identifier",
            Self::Int => "integer",
            Self::Float => "float",
            Self::HexInt => "hex integer",
            Self::LongInt => "long integer",
            Self::StringOpen => "string opener",
            Self::StringContent => "string content",
            Self::StringEscape => "string escape",
            Self::StringContinuation => "line continuation",
            Self::StringClose => "string closer",
            Self::ParenOpen => "opening bracket",
            Self::ParenClose => "closing bracket",
            Self::Whitespace => "whitespace",
            Self::Comment => "comment",
            Self::InvalidChar => "invalid character",
            Self::Eof => "end of line",
        }
    }

    /// Returns `true` for numeric literal tags.
    #[inline]
    pub fn is_numeric(self) -> bool {
        matches!(self as u8, 1..=4)
    }

    /// Returns `true` for any piece of a string literal (except escapes).
    #[inline]
    pub fn is_string_piece(self) -> bool {
        matches!(
            self,
            Self::StringOpen | Self::StringContent | Self::StringContinuation | Self::StringClose
        )
    }
}

/// One raw token: a tag plus its length in bytes.
///
/// Positions are implicit: a token starts where the previous one ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RawToken {
    pub tag: RawTag,
    pub len: u32,
}

const _: () = assert!(std::mem::size_of::<RawToken>() == 8);
