//! Splice engine
//!
//! `slice_out` and `insert_at` are the only two ways the buffer is mutated.
//! Neither adds delimiters on its own: callers pass delimiter-correct text.

use super::buffer::RawBuffer;
use super::coords::Coordinates;
use super::dialect::Dialect;
use super::index::DsvIndex;
use super::resolver::OffsetResolver;

/// Mutable view over the buffer with the index it was last parsed into
pub struct Splicer<'a> {
    buffer: &'a mut RawBuffer,
    index: &'a DsvIndex,
    dialect: &'a Dialect,
}

impl<'a> Splicer<'a> {
    pub fn new(buffer: &'a mut RawBuffer, index: &'a DsvIndex, dialect: &'a Dialect) -> Self {
        Self {
            buffer,
            index,
            dialect,
        }
    }

    pub fn resolver(&self) -> OffsetResolver<'_> {
        OffsetResolver::new(self.index, self.dialect, self.buffer)
    }

    pub fn dialect(&self) -> &Dialect {
        self.dialect
    }

    pub fn buffer(&self) -> &RawBuffer {
        self.buffer
    }

    pub fn row_count(&self) -> usize {
        self.resolver().row_count()
    }

    pub fn column_count(&self) -> usize {
        self.resolver().column_count()
    }

    /// Extract the text at `coords`, removing it unless `keeping_value`
    ///
    /// See [`OffsetResolver::slice_range`] for how `keeping_cell` and the
    /// trim detection pick the range.
    pub fn slice_out(&mut self, coords: Coordinates, keeping_cell: bool, keeping_value: bool) -> String {
        let range = self.resolver().slice_range(coords, keeping_cell);
        tracing::trace!(
            row = coords.row,
            column = ?coords.column,
            start = range.start,
            end = range.end,
            keeping_cell,
            keeping_value,
            "slice_out"
        );
        if keeping_value {
            self.buffer.slice(range)
        } else {
            self.buffer.remove(range)
        }
    }

    /// Read the text `slice_out` would extract, without mutating
    pub fn peek(&self, coords: Coordinates, keeping_cell: bool) -> String {
        let range = self.resolver().slice_range(coords, keeping_cell);
        self.buffer.slice(range)
    }

    /// Insert `value` verbatim at `coords`
    pub fn insert_at(&mut self, value: &str, coords: Coordinates) {
        let at = self.resolver().insertion_index(coords);
        tracing::trace!(row = coords.row, column = ?coords.column, at, len = value.len(), "insert_at");
        self.buffer.insert(at, value);
    }

    /// Insert `value` at a raw byte offset (header row edits)
    pub(crate) fn insert_raw(&mut self, at: usize, value: &str) {
        self.buffer.insert(at, value);
    }

    /// Remove a raw byte range (header row edits)
    pub(crate) fn remove_raw(&mut self, range: std::ops::Range<usize>) -> String {
        self.buffer.remove(range)
    }
}
