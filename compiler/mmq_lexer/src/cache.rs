//! Incremental per-line highlighting.
//!
//! An editor re-highlights after every keystroke. [`HighlightCache`] keeps
//! each line's tokens together with the state the line was scanned from and
//! the state it ended in. After an edit only the changed lines are
//! re-tokenized, plus any following lines whose start state changed. The
//! walk stops at the first untouched line whose cached start state matches
//! the state flowing into it.

use std::ops::Range;

use mmq_lexer_core::ScanState;
use tracing::debug;

use crate::document::split_lines;
use crate::{HighlightSpan, LineTokenizer};

#[derive(Clone, Debug, PartialEq, Eq)]
struct CachedLine {
    text: String,
    start_state: ScanState,
    end_state: ScanState,
    tokens: Vec<HighlightSpan>,
}

impl CachedLine {
    fn pending(text: &str) -> Self {
        CachedLine {
            text: text.to_owned(),
            start_state: ScanState::Start,
            end_state: ScanState::Start,
            tokens: Vec::new(),
        }
    }

    fn retokenize<T: LineTokenizer + ?Sized>(&mut self, tokenizer: &T, state: ScanState) {
        let (tokens, end_state) = tokenizer.tokenize_line(state, &self.text);
        self.tokens = tokens.iter().map(HighlightSpan::from).collect();
        self.start_state = state;
        self.end_state = end_state;
    }
}

/// Line-oriented token cache for one document.
#[derive(Clone, Debug)]
pub struct HighlightCache<T> {
    tokenizer: T,
    lines: Vec<CachedLine>,
}

impl<T: LineTokenizer> HighlightCache<T> {
    /// An empty cache with no lines.
    pub fn new(tokenizer: T) -> Self {
        HighlightCache {
            tokenizer,
            lines: Vec::new(),
        }
    }

    /// A cache holding `text`, fully tokenized.
    pub fn with_text(tokenizer: T, text: &str) -> Self {
        let mut cache = Self::new(tokenizer);
        cache.set_text(text);
        cache
    }

    pub fn tokenizer(&self) -> &T {
        &self.tokenizer
    }

    /// Replace the whole document.
    pub fn set_text(&mut self, text: &str) {
        let lines: Vec<&str> = split_lines(text).map(|(_, line)| line).collect();
        self.replace_lines(0, self.lines.len(), &lines);
    }

    /// Replace `removed` lines starting at line `start` with `inserted`.
    ///
    /// `start` and `removed` are clamped to the document. Inserted lines
    /// must not contain line terminators. Returns the range of line indices
    /// (after the edit) that were re-tokenized.
    pub fn replace_lines(&mut self, start: usize, removed: usize, inserted: &[&str]) -> Range<usize> {
        let start = start.min(self.lines.len());
        let removed = removed.min(self.lines.len() - start);
        let tail = self.lines.split_off(start + removed);
        self.lines.truncate(start);
        self.lines
            .extend(inserted.iter().map(|text| CachedLine::pending(text)));
        self.lines.extend(tail);

        let edited_end = start + inserted.len();
        let mut state = match start.checked_sub(1) {
            Some(prev) => self.lines[prev].end_state,
            None => ScanState::Start,
        };
        let mut index = start;
        while let Some(line) = self.lines.get_mut(index) {
            if index >= edited_end && line.start_state == state {
                break;
            }
            line.retokenize(&self.tokenizer, state);
            state = line.end_state;
            index += 1;
        }

        debug!(
            start,
            removed,
            inserted = inserted.len(),
            retokenized = index - start,
            "updated highlight cache"
        );
        start..index
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn line(&self, index: usize) -> Option<&str> {
        self.lines.get(index).map(|line| line.text.as_str())
    }

    /// Tokens of line `index`, with line-relative spans.
    pub fn tokens(&self, index: usize) -> Option<&[HighlightSpan]> {
        self.lines.get(index).map(|line| line.tokens.as_slice())
    }

    /// State line `index` ended in.
    pub fn end_state(&self, index: usize) -> Option<ScanState> {
        self.lines.get(index).map(|line| line.end_state)
    }

    /// The document text, lines joined with `\n`.
    pub fn text(&self) -> String {
        let lines: Vec<&str> = self.lines.iter().map(|line| line.text.as_str()).collect();
        lines.join("\n")
    }
}

#[cfg(test)]
mod tests;
