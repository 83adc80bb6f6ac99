//! Hand-written raw scanner producing `(RawTag, len)` pairs for one line.
//!
//! The scanner operates on a sentinel-terminated [`Cursor`] and produces
//! [`RawToken`] values with zero heap allocation. It does not resolve
//! keywords; identifiers come out as [`RawTag::Ident`] and the cooking layer
//! classifies them.
//!
//! # Rule order
//!
//! In [`ScanState::Start`] the rules are tried in a fixed order and the first
//! one that matches wins:
//!
//! 1. `#` comment to end of line (only with [`ScanOptions::comments`]); like
//!    the regex `#.*$`, it fails when a line terminator (`\n`, `\r`, U+2028,
//!    U+2029) follows the `#` on the same line, leaving `#` an invalid char
//! 2. `"` opener, optionally prefixed by `i`, with at least one more char
//! 3. `'` opener, same shape
//! 4. float
//! 5. long integer (`l`/`L` suffix)
//! 6. integer
//! 7. identifier
//! 8. opening bracket, 9. closing bracket
//! 10. whitespace run
//! 11. any other single character: [`RawTag::InvalidChar`]
//!
//! Integers and identifiers must end on a word boundary. When they do not,
//! the rule fails (integers) or backs off to the longest prefix that does
//! (identifiers), exactly as a backtracking `\b` would.
//!
//! Inside a string the escape matcher runs first, then the trailing
//! backslash continuation, then the closing quote; everything else is
//! content. Reaching the end of the line without a closing quote closes the
//! string implicitly and the next line starts in [`ScanState::Start`].

use crate::cursor::{is_word_byte, Cursor};
use crate::scan_state::ScanState;
use crate::tag::{RawTag, RawToken};
use crate::LineBuffer;

/// Rule table switches.
///
/// The two deployments of the query editor share every rule except line
/// comments, which only one of them supports.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ScanOptions {
    /// Recognize `#` line comments.
    pub comments: bool,
}

/// Line scanner. Produces one token at a time as a `(tag, length)` pair.
///
/// Error conditions are encoded as [`RawTag::InvalidChar`], never as
/// `Result::Err`: every byte of the line ends up in exactly one token.
pub struct RawScanner<'a> {
    cursor: Cursor<'a>,
    state: ScanState,
    options: ScanOptions,
    /// The line ended on a continuation backslash, so the string state
    /// survives the end of the line.
    continued: bool,
}

impl<'a> RawScanner<'a> {
    /// Create a scanner resuming from `state`.
    pub fn new(cursor: Cursor<'a>, state: ScanState, options: ScanOptions) -> Self {
        Self {
            cursor,
            state,
            options,
            continued: false,
        }
    }

    /// Current scanner state.
    ///
    /// Once [`next_token`](Self::next_token) has returned [`RawTag::Eof`],
    /// this is the state to resume the next line from.
    pub fn state(&self) -> ScanState {
        self.state
    }

    /// Produce the next raw token.
    ///
    /// Returns `RawTag::Eof` with `len == 0` when the line is exhausted.
    /// Subsequent calls after EOF continue to return `Eof`.
    #[inline]
    pub fn next_token(&mut self) -> RawToken {
        match self.state.quote() {
            Some(quote) => self.string_piece(quote),
            None => self.start_token(),
        }
    }

    fn start_token(&mut self) -> RawToken {
        let start = self.cursor.pos();
        if self.cursor.is_eof() {
            return Self::eof();
        }
        match self.cursor.current() {
            b'#' if self.options.comments && !self.cursor.has_line_terminator_ahead() => {
                self.comment(start)
            }
            b'"' | b'\'' => self.string_open(start, 0),
            b'i' if matches!(self.cursor.peek(), b'"' | b'\'') => self.string_open(start, 1),
            b'0'..=b'9' | b'.' => self.number(start),
            b'a'..=b'z' | b'A'..=b'Z' | b'_' | b'$' => self.identifier(start),
            b'(' | b'[' | b'{' => self.single(start, RawTag::ParenOpen),
            b')' | b']' | b'}' => self.single(start, RawTag::ParenClose),
            b if is_ascii_js_whitespace(b) => self.whitespace(start),
            0x80..=0xFF => self.non_ascii(start),
            _ => self.invalid_char(start),
        }
    }

    // ─── End of line ──────────────────────────────────────────────

    fn eof() -> RawToken {
        RawToken {
            tag: RawTag::Eof,
            len: 0,
        }
    }

    #[inline]
    fn token(&self, tag: RawTag, start: u32) -> RawToken {
        RawToken {
            tag,
            len: self.cursor.pos() - start,
        }
    }

    fn single(&mut self, start: u32, tag: RawTag) -> RawToken {
        self.cursor.advance();
        self.token(tag, start)
    }

    // ─── Comments & Whitespace ────────────────────────────────────

    fn comment(&mut self, start: u32) -> RawToken {
        self.cursor.eat_to_eof();
        self.token(RawTag::Comment, start)
    }

    fn whitespace(&mut self, start: u32) -> RawToken {
        loop {
            self.cursor.eat_while(is_ascii_js_whitespace);
            if self.cursor.current() >= 0x80
                && self.cursor.current_char().is_some_and(is_js_whitespace)
            {
                self.cursor.advance_char();
            } else {
                break;
            }
        }
        self.token(RawTag::Whitespace, start)
    }

    fn non_ascii(&mut self, start: u32) -> RawToken {
        if self.cursor.current_char().is_some_and(is_js_whitespace) {
            self.whitespace(start)
        } else {
            self.invalid_char(start)
        }
    }

    // ─── String Openers ───────────────────────────────────────────

    /// Opener at `prefix` bytes ahead (0 for a bare quote, 1 after `i`).
    ///
    /// An opener needs at least one more character on the line; a quote
    /// as the very last character is not a string.
    fn string_open(&mut self, start: u32, prefix: u32) -> RawToken {
        let quote = self.cursor.peek_at(prefix);
        if self.has_char_at(prefix + 1) {
            self.cursor.advance_n(prefix + 1);
            self.state = ScanState::for_quote(quote);
            self.token(RawTag::StringOpen, start)
        } else if prefix > 0 {
            self.identifier(start)
        } else {
            self.invalid_char(start)
        }
    }

    /// Returns `true` if a non-terminator character sits `offset` bytes ahead.
    fn has_char_at(&self, offset: u32) -> bool {
        if self.cursor.pos() + offset >= self.cursor.source_len() {
            return false;
        }
        match self.cursor.peek_at(offset) {
            b'\n' | b'\r' => false,
            // U+2028 LINE SEPARATOR / U+2029 PARAGRAPH SEPARATOR
            0xE2 => !(self.cursor.peek_at(offset + 1) == 0x80
                && matches!(self.cursor.peek_at(offset + 2), 0xA8 | 0xA9)),
            _ => true,
        }
    }

    // ─── Numeric Literals ─────────────────────────────────────────

    fn number(&mut self, start: u32) -> RawToken {
        if let Some(len) = self.float_len() {
            self.cursor.advance_n(len);
            return self.token(RawTag::Float, start);
        }
        if let Some((len, tag)) = self.integer_len() {
            self.cursor.advance_n(len);
            return self.token(tag, start);
        }
        self.invalid_char(start)
    }

    /// Length of a float literal at the cursor.
    ///
    /// Exponent forms are tried before plain point forms, and a point form
    /// with a fraction before one without, so `1.5e3`, `3.e2` and `1e10`
    /// are taken whole while `1.5e` stops at `1.5`.
    fn float_len(&self) -> Option<u32> {
        let int_part = self.cursor.count_while(0, |b| b.is_ascii_digit());
        let point = if self.cursor.peek_at(int_part) == b'.' {
            let fraction = self.cursor.count_while(int_part + 1, |b| b.is_ascii_digit());
            if fraction > 0 {
                Some(int_part + 1 + fraction)
            } else if int_part > 0 {
                Some(int_part + 1)
            } else {
                None
            }
        } else {
            None
        };

        if let Some(len) = point {
            if let Some(exp) = self.exponent_len(len) {
                return Some(len + exp);
            }
        }
        if int_part > 0 {
            if let Some(exp) = self.exponent_len(int_part) {
                return Some(int_part + exp);
            }
        }
        point
    }

    /// Length of `[eE][+-]?[0-9]+` at `offset`.
    fn exponent_len(&self, offset: u32) -> Option<u32> {
        if !matches!(self.cursor.peek_at(offset), b'e' | b'E') {
            return None;
        }
        let sign = u32::from(matches!(self.cursor.peek_at(offset + 1), b'+' | b'-'));
        let digits = self
            .cursor
            .count_while(offset + 1 + sign, |b| b.is_ascii_digit());
        (digits > 0).then_some(1 + sign + digits)
    }

    /// Length and tag of an integer literal at the cursor.
    ///
    /// The decimal alternative is tried before the hexadecimal one, and the
    /// long-suffixed rule before the plain one. A lone `0` only matches when
    /// a word boundary follows, so `007` is not a literal.
    fn integer_len(&self) -> Option<(u32, RawTag)> {
        let candidates = [
            self.decimal_len().map(|len| (len, RawTag::Int)),
            self.hex_len().map(|len| (len, RawTag::HexInt)),
        ];

        for &(len, _) in candidates.iter().flatten() {
            if matches!(self.cursor.peek_at(len), b'l' | b'L') && self.cursor.is_boundary_at(len + 1) {
                return Some((len + 1, RawTag::LongInt));
            }
        }
        candidates
            .into_iter()
            .flatten()
            .find(|&(len, _)| self.cursor.is_boundary_at(len))
    }

    /// `[1-9][0-9]*` or `0`.
    fn decimal_len(&self) -> Option<u32> {
        match self.cursor.current() {
            b'0' => Some(1),
            b'1'..=b'9' => Some(self.cursor.count_while(0, |b| b.is_ascii_digit())),
            _ => None,
        }
    }

    /// `0[xX][0-9A-Fa-f]+`.
    fn hex_len(&self) -> Option<u32> {
        if self.cursor.current() != b'0' || !matches!(self.cursor.peek(), b'x' | b'X') {
            return None;
        }
        let digits = self.cursor.count_while(2, |b| b.is_ascii_hexdigit());
        (digits > 0).then_some(2 + digits)
    }

    // ─── Identifiers ──────────────────────────────────────────────

    fn identifier(&mut self, start: u32) -> RawToken {
        let run = self.cursor.count_while(0, is_ident_byte);
        match (1..=run).rev().find(|&len| self.cursor.is_boundary_at(len)) {
            Some(len) => {
                self.cursor.advance_n(len);
                self.token(RawTag::Ident, start)
            }
            None => self.invalid_char(start),
        }
    }

    // ─── String Bodies ────────────────────────────────────────────

    fn string_piece(&mut self, quote: u8) -> RawToken {
        let start = self.cursor.pos();
        if self.cursor.is_eof() {
            if !self.continued {
                self.state = ScanState::Start;
            }
            return Self::eof();
        }
        match self.cursor.current() {
            b'\\' => {
                if let Some(len) = self.escape_len() {
                    self.cursor.advance_n(len);
                    self.token(RawTag::StringEscape, start)
                } else if self.cursor.is_last() {
                    self.cursor.advance();
                    self.continued = true;
                    self.token(RawTag::StringContinuation, start)
                } else {
                    self.string_content(start, quote)
                }
            }
            b if b == quote => {
                self.cursor.advance();
                self.state = ScanState::Start;
                self.token(RawTag::StringClose, start)
            }
            _ => self.string_content(start, quote),
        }
    }

    /// Content run up to the next escape, continuation, closing quote or
    /// end of line. Backslashes that start none of those are content.
    fn string_content(&mut self, start: u32, quote: u8) -> RawToken {
        loop {
            match self.cursor.skip_to_string_delim(quote) {
                b'\\' if self.escape_len().is_none() && !self.cursor.is_last() => {
                    self.cursor.advance();
                }
                _ => break,
            }
        }
        self.token(RawTag::StringContent, start)
    }

    /// Length of the escape sequence starting at the current `\`, if any.
    ///
    /// Recognized: `\xHH`, `\OOO` (octal), `\\ \a \b \f \n \r \t \v \' \"`,
    /// `\UHHHHHHHH` and `\uHHHH`.
    fn escape_len(&self) -> Option<u32> {
        let hex_run = |offset: u32, n: u32| (0..n).all(|i| self.cursor.peek_at(offset + i).is_ascii_hexdigit());
        let is_octal = |b: u8| matches!(b, b'0'..=b'7');

        match self.cursor.peek() {
            b'x' if hex_run(2, 2) => Some(4),
            b'0'..=b'7' if is_octal(self.cursor.peek_at(2)) && is_octal(self.cursor.peek_at(3)) => {
                Some(4)
            }
            b'\\' | b'a' | b'b' | b'f' | b'n' | b'r' | b't' | b'v' | b'\'' | b'"' => Some(2),
            b'U' if hex_run(2, 8) => Some(10),
            b'u' if hex_run(2, 4) => Some(6),
            _ => None,
        }
    }

    // ─── Error tokens ─────────────────────────────────────────────

    fn invalid_char(&mut self, start: u32) -> RawToken {
        self.cursor.advance_char();
        self.token(RawTag::InvalidChar, start)
    }
}

impl Iterator for RawScanner<'_> {
    type Item = RawToken;

    fn next(&mut self) -> Option<RawToken> {
        let tok = self.next_token();
        if tok.tag == RawTag::Eof {
            None
        } else {
            Some(tok)
        }
    }
}

/// Identifier bytes: regex word bytes plus `$`.
#[inline]
fn is_ident_byte(b: u8) -> bool {
    is_word_byte(b) || b == b'$'
}

/// ASCII members of [`is_js_whitespace`].
#[inline]
fn is_ascii_js_whitespace(b: u8) -> bool {
    matches!(b, b'\t' | b'\n' | 0x0B | 0x0C | b'\r' | b' ')
}

/// The whitespace class of the query editor's regex engine (`\s`).
fn is_js_whitespace(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n'
            | '\u{0B}'
            | '\u{0C}'
            | '\r'
            | ' '
            | '\u{A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}

/// Convenience function: scan one line from `state` and collect its tokens.
///
/// Returns every token except the final `Eof`, plus the state the next line
/// should start from. For streaming access, construct a [`LineBuffer`] and
/// a [`RawScanner`] directly.
pub fn scan_line(line: &str, state: ScanState, options: ScanOptions) -> (Vec<RawToken>, ScanState) {
    let buf = LineBuffer::new(line);
    let mut scanner = RawScanner::new(buf.cursor(), state, options);
    let tokens: Vec<RawToken> = scanner.by_ref().collect();
    (tokens, scanner.state())
}
