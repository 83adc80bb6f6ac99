//! Low-level, line-resumable scanner for the mailing filter-query language.
//!
//! This crate turns one line of query text into `(RawTag, len)` pairs. It
//! knows nothing about keyword tables, configuration files or rendering;
//! those live in `mmq_lexer`. The pieces:
//!
//! - [`LineBuffer`]: sentinel-terminated copy of a line
//! - [`Cursor`]: byte cursor over a [`LineBuffer`]
//! - [`RawScanner`]: the rule table, driven by a [`ScanState`]
//! - [`RawTag`] / [`RawToken`]: scanner output
//!
//! String literals may continue onto the next line through a trailing
//! backslash, so every scan starts from the [`ScanState`] the previous line
//! ended in.

mod cursor;
mod line_buffer;
mod raw_scanner;
mod scan_state;
mod tag;

pub use cursor::Cursor;
pub use line_buffer::{LineBuffer, MAX_LINE_LEN};
pub use raw_scanner::{scan_line, RawScanner, ScanOptions};
pub use scan_state::ScanState;
pub use tag::{RawTag, RawToken};
