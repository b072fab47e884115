//! Raw document buffer
//!
//! The whole document (header row and body rows) lives in one rope. All
//! public positions are byte offsets, which is what the tokenizer reports;
//! conversion to rope char indices happens here and nowhere else.

use std::fmt;
use std::ops::Range;

use ropey::Rope;

/// Byte-addressed text buffer backed by a `ropey::Rope`
#[derive(Clone, Default)]
pub struct RawBuffer {
    rope: Rope,
}

impl RawBuffer {
    pub fn new(text: &str) -> Self {
        Self {
            rope: Rope::from_str(text),
        }
    }

    /// Length in bytes
    pub fn len(&self) -> usize {
        self.rope.len_bytes()
    }

    pub fn is_empty(&self) -> bool {
        self.rope.len_bytes() == 0
    }

    fn char_range(&self, range: Range<usize>) -> Range<usize> {
        let len = self.len();
        let start = range.start.min(len);
        let end = range.end.clamp(start, len);
        self.rope.byte_to_char(start)..self.rope.byte_to_char(end)
    }

    /// Copy out the bytes in `[start, end)`
    pub fn slice(&self, range: Range<usize>) -> String {
        let chars = self.char_range(range);
        self.rope.slice(chars).to_string()
    }

    /// Remove the bytes in `[start, end)` and return them
    pub fn remove(&mut self, range: Range<usize>) -> String {
        let chars = self.char_range(range);
        let removed = self.rope.slice(chars.clone()).to_string();
        if !chars.is_empty() {
            self.rope.remove(chars);
        }
        removed
    }

    /// Insert `text` at byte offset `at`
    pub fn insert(&mut self, at: usize, text: &str) {
        if text.is_empty() {
            return;
        }
        let at = self.rope.byte_to_char(at.min(self.len()));
        self.rope.insert(at, text);
    }

    pub fn ends_with(&self, suffix: &str) -> bool {
        let len = self.len();
        if suffix.is_empty() || suffix.len() > len {
            return suffix.is_empty();
        }
        self.slice(len - suffix.len()..len) == suffix
    }

    /// Replace the whole content
    pub fn replace_all(&mut self, text: &str) {
        self.rope = Rope::from_str(text);
    }
}

impl fmt::Display for RawBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for chunk in self.rope.chunks() {
            f.write_str(chunk)?;
        }
        Ok(())
    }
}

impl fmt::Debug for RawBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("RawBuffer").field(&self.to_string()).finish()
    }
}
