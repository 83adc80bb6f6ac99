//! Scanner state carried from one line to the next.

/// Where the scanner stands at a line boundary.
///
/// Produced by scanning line *n* and supplied when scanning line *n+1*.
/// Only string literals ending in a backslash continuation carry over;
/// every other construct is closed by the end of the line.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ScanState {
    /// Between tokens. The state at the start of every document.
    #[default]
    Start,
    /// Inside a `"`-quoted string literal.
    InDoubleQuoteString,
    /// Inside a `'`-quoted string literal.
    InSingleQuoteString,
}

impl ScanState {
    /// The quote byte that closes the current string, if inside one.
    #[inline]
    pub fn quote(self) -> Option<u8> {
        match self {
            Self::Start => None,
            Self::InDoubleQuoteString => Some(b'"'),
            Self::InSingleQuoteString => Some(b'\''),
        }
    }

    /// The string state opened by `quote`.
    #[inline]
    pub(crate) fn for_quote(quote: u8) -> Self {
        if quote == b'\'' {
            Self::InSingleQuoteString
        } else {
            Self::InDoubleQuoteString
        }
    }
}
