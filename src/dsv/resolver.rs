//! Coordinate → byte offset resolution
//!
//! Pure lookups against one structural index. The index describes the buffer
//! as it was before the current operation started; operations that splice
//! several times resolve every offset against that layout and apply their
//! edits back-to-front so later splices never shift earlier offsets.
//!
//! The only live read of the buffer is its length, used for the end of the
//! last row. Back-to-front ordering makes the last row the first one touched.

use super::buffer::RawBuffer;
use super::coords::Coordinates;
use super::dialect::Dialect;
use super::index::{DsvIndex, RowRegion};

/// Offset lookups for one (index, dialect, buffer) triple
pub struct OffsetResolver<'a> {
    index: &'a DsvIndex,
    dialect: &'a Dialect,
    buffer: &'a RawBuffer,
}

impl<'a> OffsetResolver<'a> {
    pub fn new(index: &'a DsvIndex, dialect: &'a Dialect, buffer: &'a RawBuffer) -> Self {
        Self {
            index,
            dialect,
            buffer,
        }
    }

    pub fn row_count(&self) -> usize {
        self.index.row_count(RowRegion::Body)
    }

    pub fn column_count(&self) -> usize {
        self.index.column_count()
    }

    /// Byte offset where the cell (or the row, when no column is given) starts
    pub fn first_index(&self, coords: Coordinates) -> usize {
        self.index
            .get_offset_index(coords.row + 1, coords.column.unwrap_or(0))
    }

    /// Byte offset one past the cell content, before any following delimiter
    ///
    /// The last cell of a row and whole rows end at [`row_end`](Self::row_end).
    pub fn last_index(&self, coords: Coordinates) -> usize {
        match coords.column {
            Some(column) if column + 1 < self.column_count() => self
                .index
                .get_offset_index(coords.row + 1, column + 1)
                .saturating_sub(self.dialect.delimiter.len()),
            _ => self.row_end(coords.row),
        }
    }

    /// End of a body row's content, excluding its row delimiter
    pub fn row_end(&self, row: usize) -> usize {
        if row + 1 < self.row_count() {
            self.index
                .get_offset_index(row + 2, 0)
                .saturating_sub(self.dialect.row_delimiter.len())
        } else {
            self.content_end()
        }
    }

    /// End of the header row's content, excluding its row delimiter
    pub fn header_end(&self) -> usize {
        if self.row_count() > 0 {
            self.index
                .get_offset_index(1, 0)
                .saturating_sub(self.dialect.row_delimiter.len())
        } else {
            self.content_end()
        }
    }

    /// Buffer length, minus a row delimiter that terminates the document
    pub fn content_end(&self) -> usize {
        let len = self.buffer.len();
        if self.buffer.ends_with(&self.dialect.row_delimiter) {
            len - self.dialect.row_delimiter.len()
        } else {
            len
        }
    }

    /// Removing the last column or the last row must take the preceding
    /// delimiter with it instead of the following one.
    pub fn is_trim_operation(&self, coords: Coordinates) -> bool {
        match coords.column {
            Some(column) => self.column_count().checked_sub(1) == Some(column),
            None => self.row_count().checked_sub(1) == Some(coords.row),
        }
    }

    /// Inserting at or past the current bounds anchors to the end of the
    /// previous cell or row, since the target does not exist yet.
    pub fn is_extension_operation(&self, coords: Coordinates) -> bool {
        coords.column.is_some_and(|c| c >= self.column_count()) || coords.row >= self.row_count()
    }

    /// Row-major predecessor; whole rows step by rows and saturate at row 0
    pub fn previous_cell(&self, coords: Coordinates) -> Coordinates {
        match coords.column {
            None => Coordinates::row(coords.row.saturating_sub(1)),
            Some(0) => Coordinates::cell(
                coords.row.saturating_sub(1),
                self.column_count().saturating_sub(1),
            ),
            Some(column) => Coordinates::cell(coords.row, column - 1),
        }
    }

    /// Row-major successor; the last column wraps to column 0 of the next row
    pub fn next_cell(&self, coords: Coordinates) -> Coordinates {
        match coords.column {
            None => Coordinates::row(coords.row + 1),
            Some(column) if column + 1 == self.column_count() => {
                Coordinates::cell(coords.row + 1, 0)
            }
            Some(column) => Coordinates::cell(coords.row, column + 1),
        }
    }

    /// Start of the region removed by a trim operation
    ///
    /// The first body row has no previous body row; its preceding delimiter
    /// belongs to the header row.
    fn trim_start(&self, coords: Coordinates) -> usize {
        if coords.is_row() && coords.row == 0 {
            self.header_end()
        } else {
            self.last_index(self.previous_cell(coords))
        }
    }

    /// Byte range addressed by a slice at `coords`
    ///
    /// - `keeping_cell`: the cell content only; the delimiters stay.
    /// - trim operation: preceding delimiter plus content.
    /// - otherwise: content plus following delimiter.
    pub fn slice_range(&self, coords: Coordinates, keeping_cell: bool) -> std::ops::Range<usize> {
        let (start, end) = if keeping_cell {
            (self.first_index(coords), self.last_index(coords))
        } else if self.is_trim_operation(coords) {
            (self.trim_start(coords), self.last_index(coords))
        } else {
            (
                self.first_index(coords),
                self.first_index(self.next_cell(coords)),
            )
        };
        start..end.max(start)
    }

    /// Byte offset where a value inserted at `coords` goes
    pub fn insertion_index(&self, coords: Coordinates) -> usize {
        if self.is_extension_operation(coords) {
            self.last_index(self.previous_cell(coords))
        } else {
            self.first_index(coords)
        }
    }
}
