//! Byte cursor over a sentinel-terminated line buffer.
//!
//! The cursor advances through the buffer byte-by-byte. End of line is
//! detected when the current byte equals the sentinel (`0x00`) and the
//! position has reached the line length. A null byte at `pos < source_len`
//! is an interior null and is scanned like any other unrecognized byte.

/// Byte cursor over a sentinel-terminated line.
///
/// Created via [`LineBuffer::cursor()`](crate::LineBuffer::cursor).
/// The cursor is [`Copy`], so rule matchers can take a snapshot, probe
/// ahead, and simply drop the snapshot when the rule does not match.
///
/// # Invariant
///
/// `buf[source_len] == 0x00` and every byte after it is `0x00`. This is
/// guaranteed by [`LineBuffer`](crate::LineBuffer) construction.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    /// Sentinel-terminated buffer (line + sentinel + padding).
    buf: &'a [u8],
    /// Current read position (byte index into `buf`).
    pos: u32,
    /// Length of the line content (excludes sentinel and padding).
    source_len: u32,
}

const _: () = assert!(std::mem::size_of::<Cursor<'static>>() <= 24);

impl<'a> Cursor<'a> {
    /// Create a new cursor at position 0 over a sentinel-terminated buffer.
    pub(crate) fn new(buf: &'a [u8], source_len: u32) -> Self {
        debug_assert!(
            (source_len as usize) < buf.len(),
            "sentinel must be within buffer bounds"
        );
        debug_assert!(buf[source_len as usize] == 0, "sentinel byte must be 0x00");
        Self {
            buf,
            pos: 0,
            source_len,
        }
    }

    /// Returns the byte at the current position (`0x00` at end of line).
    #[inline]
    pub fn current(&self) -> u8 {
        self.buf[self.pos as usize]
    }

    /// Returns the byte one position ahead of current.
    #[inline]
    pub fn peek(&self) -> u8 {
        self.peek_at(1)
    }

    /// Returns the byte `offset` positions ahead of current.
    ///
    /// Reads past the padding return `0x00`, the same value the padding
    /// itself holds, so callers never need to bounds-check.
    #[inline]
    pub fn peek_at(&self, offset: u32) -> u8 {
        self.buf
            .get(self.pos as usize + offset as usize)
            .copied()
            .unwrap_or(0)
    }

    /// Advance the cursor by one byte.
    #[inline]
    pub fn advance(&mut self) {
        self.pos += 1;
    }

    /// Advance the cursor by `n` bytes.
    #[inline]
    pub fn advance_n(&mut self, n: u32) {
        self.pos += n;
    }

    /// Returns `true` if the cursor has reached the end of the line.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.source_len
    }

    /// Returns `true` if the current byte is the last byte of the line.
    #[inline]
    pub fn is_last(&self) -> bool {
        self.pos + 1 == self.source_len
    }

    /// Current byte offset in the line.
    #[inline]
    pub fn pos(&self) -> u32 {
        self.pos
    }

    /// Length of the line content (excludes sentinel and padding).
    #[inline]
    pub fn source_len(&self) -> u32 {
        self.source_len
    }

    /// Number of bytes in the run starting at `offset` for which `pred`
    /// holds. Does not move the cursor.
    ///
    /// `pred(0)` must return `false`; the sentinel then ends every run.
    #[inline]
    pub fn count_while(&self, offset: u32, pred: impl Fn(u8) -> bool) -> u32 {
        let mut n = 0;
        while pred(self.peek_at(offset + n)) {
            n += 1;
        }
        n
    }

    /// Advance while `pred` returns `true` for the current byte.
    ///
    /// `pred(0)` must return `false`; the sentinel then ends the loop.
    #[inline]
    pub fn eat_while(&mut self, pred: impl Fn(u8) -> bool) {
        while pred(self.buf[self.pos as usize]) {
            self.pos += 1;
        }
    }

    /// Returns the number of bytes in the UTF-8 character starting with `byte`.
    ///
    /// - `0xC0..=0xDF`: 2 bytes
    /// - `0xE0..=0xEF`: 3 bytes
    /// - `0xF0..=0xF7`: 4 bytes
    /// - Everything else (ASCII, continuation, invalid): 1 byte
    #[inline]
    pub fn utf8_char_width(byte: u8) -> u32 {
        match byte {
            0xC0..=0xDF => 2,
            0xE0..=0xEF => 3,
            0xF0..=0xF7 => 4,
            _ => 1,
        }
    }

    /// Decode the character at the current position.
    ///
    /// Returns `None` at end of line.
    pub fn current_char(&self) -> Option<char> {
        if self.is_eof() {
            return None;
        }
        let start = self.pos as usize;
        let width = Self::utf8_char_width(self.current()) as usize;
        let end = (start + width).min(self.source_len as usize);
        std::str::from_utf8(&self.buf[start..end])
            .ok()
            .and_then(|s| s.chars().next())
    }

    /// Advance the cursor past one full UTF-8 character.
    #[inline]
    pub fn advance_char(&mut self) {
        let width = Self::utf8_char_width(self.current());
        self.advance_n(width.min(self.source_len.saturating_sub(self.pos)).max(1));
    }

    /// Move the cursor to the end of the line.
    #[inline]
    pub fn eat_to_eof(&mut self) {
        self.pos = self.pos.max(self.source_len);
    }

    /// Advance past ordinary string content to the next byte that may end
    /// a content run: `quote` or `\`. Returns the byte found, or `0` at end
    /// of line.
    ///
    /// Interior null bytes are ordinary string content.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "remaining.len() <= source_len which fits in u32"
    )]
    pub fn skip_to_string_delim(&mut self, quote: u8) -> u8 {
        if self.is_eof() {
            return 0;
        }
        let remaining = &self.buf[self.pos as usize..self.source_len as usize];
        if let Some(offset) = memchr::memchr2(quote, b'\\', remaining) {
            self.pos += offset as u32;
            self.buf[self.pos as usize]
        } else {
            self.pos = self.source_len;
            0
        }
    }

    /// Returns `true` if a line terminator (`\n`, `\r`, U+2028 or U+2029)
    /// occurs between the current position and the end of the line.
    pub fn has_line_terminator_ahead(&self) -> bool {
        if self.is_eof() {
            return false;
        }
        let mut rest = &self.buf[self.pos as usize..self.source_len as usize];
        while let Some(i) = memchr::memchr3(b'\n', b'\r', 0xE2, rest) {
            if rest[i] != 0xE2 || matches!(rest.get(i + 1..i + 3), Some([0x80, 0xA8 | 0xA9])) {
                return true;
            }
            rest = &rest[i + 1..];
        }
        false
    }

    /// Returns `true` if a regex word boundary (`\b`) sits `offset` bytes
    /// ahead of the current position.
    ///
    /// Word bytes are `[A-Za-z0-9_]`; the start and the end of the line
    /// count as non-word.
    #[inline]
    pub fn is_boundary_at(&self, offset: u32) -> bool {
        let at = self.pos + offset;
        let before = if at == 0 {
            0
        } else {
            self.buf.get(at as usize - 1).copied().unwrap_or(0)
        };
        let after = if at >= self.source_len {
            0
        } else {
            self.buf[at as usize]
        };
        is_word_byte(before) != is_word_byte(after)
    }
}

/// Returns `true` for ASCII regex word bytes: `[A-Za-z0-9_]`.
#[inline]
pub(crate) fn is_word_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}
