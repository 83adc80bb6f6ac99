//! Sentinel-terminated line buffer for zero-bounds-check scanning.
//!
//! The buffer guarantees a `0x00` sentinel byte after the line content,
//! allowing the scanner to detect end of line without explicit bounds
//! checking. The total size is rounded up to the next 64-byte boundary and
//! always leaves at least [`LOOKAHEAD`] zero bytes after the sentinel, so
//! the fixed-width escape matchers (`\UXXXXXXXX` is the longest) can peek
//! ahead without checking length first.

use crate::Cursor;

/// Cache line size in bytes, used for buffer alignment padding.
const CACHE_LINE: usize = 64;

/// Zero bytes guaranteed after the sentinel.
pub(crate) const LOOKAHEAD: usize = 16;

/// Longest line, in bytes, that is scanned in full. Offsets are `u32`.
pub const MAX_LINE_LEN: usize = u32::MAX as usize;

/// Number of line bytes kept in the buffer.
#[inline]
pub(crate) fn content_len(len: usize) -> u32 {
    u32::try_from(len).unwrap_or(u32::MAX)
}

/// Sentinel-terminated copy of a single line of query text.
///
/// # Layout
///
/// ```text
/// [line_bytes..., 0x00, padding_zeros...]
///  ^              ^     ^
///  0              |     rounded up to 64-byte boundary
///            source_len (sentinel)
/// ```
#[derive(Clone, Debug)]
pub struct LineBuffer {
    /// Owned buffer: `[line_bytes..., 0x00 sentinel, 0x00 padding...]`.
    buf: Vec<u8>,
    /// Length of the line content (excludes sentinel and padding).
    source_len: u32,
}

impl LineBuffer {
    /// Create a new sentinel-terminated buffer from one line of text.
    ///
    /// The line should not contain line terminators; hosts split documents
    /// into lines before scanning. Lines longer than [`MAX_LINE_LEN`] bytes
    /// are truncated to that length, so their tail is never scanned.
    pub fn new(line: &str) -> Self {
        let line_bytes = line.as_bytes();
        let source_len_u32 = content_len(line_bytes.len());
        let source_len = source_len_u32 as usize;

        // Round up to next 64-byte boundary (minimum: line + sentinel + lookahead).
        let padded_len = (source_len + 1 + LOOKAHEAD + CACHE_LINE - 1) & !(CACHE_LINE - 1);

        // The sentinel (buf[source_len]) and padding are already 0x00.
        let mut buf = vec![0u8; padded_len];
        buf[..source_len].copy_from_slice(&line_bytes[..source_len]);

        Self {
            buf,
            source_len: source_len_u32,
        }
    }

    /// Returns the line bytes (without sentinel or padding).
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.source_len as usize]
    }

    /// Create a [`Cursor`] positioned at byte 0.
    pub fn cursor(&self) -> Cursor<'_> {
        Cursor::new(&self.buf, self.source_len)
    }

    /// Length of the line content in bytes.
    pub fn len(&self) -> u32 {
        self.source_len
    }

    /// Returns `true` if the line is empty.
    pub fn is_empty(&self) -> bool {
        self.source_len == 0
    }
}
