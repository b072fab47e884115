//! Structural edits composed from splices
//!
//! Every multi-splice edit walks rows (and columns) from last to first. All
//! offsets come from the pre-edit index, so touching the end of the buffer
//! first keeps the offsets of not-yet-visited cells valid.
//!
//! These functions only rewrite the buffer. Header list bookkeeping, change
//! descriptors, history and notification belong to the model.

use super::coords::{CellSelection, Coordinates};
use super::splice::Splicer;

impl Splicer<'_> {
    /// Overwrite one cell's content
    pub fn set_cell(&mut self, row: usize, column: usize, value: &str) {
        let cell = Coordinates::cell(row, column);
        self.slice_out(cell, true, false);
        self.insert_at(value, cell);
    }

    /// Text of an empty row for insertion at `row`
    ///
    /// Inside the document the row carries its own trailing row delimiter;
    /// appended past the last row it leads with one instead.
    pub fn blank_row(&self, row: usize) -> String {
        let dialect = self.dialect();
        let cells = dialect
            .delimiter
            .repeat(self.column_count().saturating_sub(1));
        if row >= self.row_count() {
            format!("{}{}", dialect.row_delimiter, cells)
        } else {
            format!("{}{}", cells, dialect.row_delimiter)
        }
    }

    pub fn insert_row(&mut self, row: usize) {
        let blank = self.blank_row(row);
        self.insert_at(&blank, Coordinates::row(row));
    }

    /// Remove a body row, returning the removed text with its delimiter
    pub fn delete_row(&mut self, row: usize) -> String {
        self.slice_out(Coordinates::row(row), false, false)
    }

    /// Insert an empty column before `column` (or append at the end) and
    /// append `name` to the header row
    pub fn insert_column(&mut self, column: usize, name: &str) {
        let delimiter = self.dialect().delimiter.clone();
        for row in (0..self.row_count()).rev() {
            self.insert_at(&delimiter, Coordinates::cell(row, column));
        }
        // The header precedes every body row, so its end is still valid.
        let header_end = self.resolver().header_end();
        self.insert_raw(header_end, &format!("{}{}", delimiter, name));
    }

    /// Remove `column` from every body row and drop the header row's last
    /// `delimiter + name`
    pub fn delete_column(&mut self, column: usize) {
        for row in (0..self.row_count()).rev() {
            self.slice_out(Coordinates::cell(row, column), false, false);
        }
        let header_end = self.resolver().header_end();
        let header = self.buffer().slice(0..header_end);
        match header.rfind(self.dialect().delimiter.as_str()) {
            Some(at) => {
                self.remove_raw(at..header_end);
            }
            None => tracing::warn!("header row has no delimiter to remove"),
        }
    }

    /// Move body row `start` so it ends up at index `end`
    ///
    /// Moving down inserts before removing so the source offset is still
    /// valid; moving up removes first. A row moving into or out of the last
    /// position swaps its row delimiter between leading and trailing.
    pub fn move_row(&mut self, start: usize, end: usize) {
        let row_delimiter = self.dialect().row_delimiter.clone();
        let last = self.row_count().saturating_sub(1);

        if start < end {
            let mut value = self.slice_out(Coordinates::row(start), false, true);
            if end == last {
                value = lead_with(&value, &row_delimiter);
            }
            self.insert_at(&value, Coordinates::row(end + 1));
            self.slice_out(Coordinates::row(start), false, false);
        } else {
            let mut value = self.slice_out(Coordinates::row(start), false, false);
            if start == last {
                value = trail_with(&value, &row_delimiter);
            }
            self.insert_at(&value, Coordinates::row(end));
        }
    }

    /// Move column `start` so it ends up at index `end`, row by row
    pub fn move_column(&mut self, start: usize, end: usize) {
        let delimiter = self.dialect().delimiter.clone();
        let last = self.column_count().saturating_sub(1);

        for row in (0..self.row_count()).rev() {
            if start < end {
                let mut value = self.slice_out(Coordinates::cell(row, start), false, true);
                if end == last {
                    value = lead_with(&value, &delimiter);
                }
                self.insert_at(&value, Coordinates::cell(row, end + 1));
                self.slice_out(Coordinates::cell(row, start), false, false);
            } else {
                let mut value = self.slice_out(Coordinates::cell(row, start), false, false);
                if start == last {
                    value = trail_with(&value, &delimiter);
                }
                self.insert_at(&value, Coordinates::cell(row, end));
            }
        }
    }

    /// Extract every cell of `selection` row-major; cells are emptied unless
    /// `keeping_value`
    pub fn extract_region(&mut self, selection: &CellSelection, keeping_value: bool) -> Vec<Vec<String>> {
        let rows = selection.row_span();
        let columns = selection.column_span();
        let mut region = vec![vec![String::new(); columns]; rows];

        for i in (0..rows).rev() {
            for j in (0..columns).rev() {
                let cell = Coordinates::cell(selection.start_row + i, selection.start_column + j);
                region[i][j] = self.slice_out(cell, true, keeping_value);
            }
        }
        region
    }

    /// Overwrite a `rows × columns` block starting at `start` with `values`
    pub fn overwrite_region(&mut self, start: (usize, usize), rows: usize, columns: usize, values: &[Vec<String>]) {
        for i in (0..rows).rev() {
            for j in (0..columns).rev() {
                let value = values
                    .get(i)
                    .and_then(|row| row.get(j))
                    .map(String::as_str)
                    .unwrap_or("");
                self.set_cell(start.0 + i, start.1 + j, value);
            }
        }
    }
}

/// `value<delim>` → `<delim>value`
fn lead_with(value: &str, delimiter: &str) -> String {
    format!(
        "{}{}",
        delimiter,
        value.strip_suffix(delimiter).unwrap_or(value)
    )
}

/// `<delim>value` → `value<delim>`
fn trail_with(value: &str, delimiter: &str) -> String {
    format!(
        "{}{}",
        value.strip_prefix(delimiter).unwrap_or(value),
        delimiter
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dsv::buffer::RawBuffer;
    use crate::dsv::dialect::Dialect;
    use crate::dsv::index::DsvIndex;

    fn apply(text: &str, dialect: &Dialect, f: impl FnOnce(&mut Splicer<'_>)) -> String {
        let index = DsvIndex::parse(text, dialect).unwrap();
        let mut buffer = RawBuffer::new(text);
        f(&mut Splicer::new(&mut buffer, &index, dialect));
        buffer.to_string()
    }

    fn csv(text: &str, f: impl FnOnce(&mut Splicer<'_>)) -> String {
        apply(text, &Dialect::csv(), f)
    }

    const DOC: &str = "A,B\n1,2\n3,4\n";

    #[test]
    fn test_set_cell() {
        assert_eq!(csv(DOC, |s| s.set_cell(0, 1, "9")), "A,B\n1,9\n3,4\n");
        assert_eq!(csv(DOC, |s| s.set_cell(1, 1, "long")), "A,B\n1,2\n3,long\n");
    }

    #[test]
    fn test_insert_row_inside_and_at_end() {
        assert_eq!(csv(DOC, |s| s.insert_row(0)), "A,B\n,\n1,2\n3,4\n");
        assert_eq!(csv(DOC, |s| s.insert_row(2)), "A,B\n1,2\n3,4\n,\n");
        assert_eq!(csv("A,B\n1,2", |s| s.insert_row(1)), "A,B\n1,2\n,");
    }

    #[test]
    fn test_insert_row_into_empty_body() {
        assert_eq!(csv("A,B\n", |s| s.insert_row(0)), "A,B\n,\n");
    }

    #[test]
    fn test_delete_rows() {
        assert_eq!(csv(DOC, |s| { s.delete_row(0); }), "A,B\n3,4\n");
        assert_eq!(csv(DOC, |s| { s.delete_row(1); }), "A,B\n1,2\n");
        assert_eq!(csv("A,B\n1,2\n", |s| { s.delete_row(0); }), "A,B\n");
    }

    #[test]
    fn test_insert_column_appends_header_name() {
        assert_eq!(csv(DOC, |s| s.insert_column(2, "C")), "A,B,C\n1,2,\n3,4,\n");
        assert_eq!(csv(DOC, |s| s.insert_column(0, "C")), "A,B,C\n,1,2\n,3,4\n");
    }

    #[test]
    fn test_delete_column() {
        assert_eq!(csv("A,B,C\n1,2,\n3,4,\n", |s| s.delete_column(2)), DOC);
        assert_eq!(csv("A,B,C\n,1,2\n,3,4\n", |s| s.delete_column(0)), DOC);
        assert_eq!(csv("A,B,C\n1,2,3\n", |s| s.delete_column(1)), "A,B\n1,3\n");
    }

    #[test]
    fn test_move_row_down_and_up() {
        let doc = "H\na\nb\nc\n";
        assert_eq!(csv(doc, |s| s.move_row(0, 1)), "H\nb\na\nc\n");
        assert_eq!(csv(doc, |s| s.move_row(0, 2)), "H\nb\nc\na\n");
        assert_eq!(csv(doc, |s| s.move_row(2, 0)), "H\nc\na\nb\n");
        assert_eq!(csv(doc, |s| s.move_row(1, 0)), "H\nb\na\nc\n");
    }

    #[test]
    fn test_move_row_without_trailing_delimiter() {
        let doc = "H\na\nb\nc";
        assert_eq!(csv(doc, |s| s.move_row(0, 2)), "H\nb\nc\na");
        assert_eq!(csv(doc, |s| s.move_row(2, 0)), "H\nc\na\nb");
    }

    #[test]
    fn test_move_column_right_and_left() {
        let doc = "A,B,C\n1,2,3\n4,5,6\n";
        assert_eq!(csv(doc, |s| s.move_column(0, 1)), "A,B,C\n2,1,3\n5,4,6\n");
        assert_eq!(csv(doc, |s| s.move_column(0, 2)), "A,B,C\n2,3,1\n5,6,4\n");
        assert_eq!(csv(doc, |s| s.move_column(2, 0)), "A,B,C\n3,1,2\n6,4,5\n");
        assert_eq!(csv(doc, |s| s.move_column(1, 0)), "A,B,C\n2,1,3\n5,4,6\n");
    }

    #[test]
    fn test_multi_char_delimiters() {
        let dialect = Dialect::new("::", "\r\n");
        let doc = "A::B\r\n1::2\r\n3::4\r\n";
        assert_eq!(
            apply(doc, &dialect, |s| s.move_column(1, 0)),
            "A::B\r\n2::1\r\n4::3\r\n"
        );
        assert_eq!(
            apply(doc, &dialect, |s| s.insert_column(2, "C")),
            "A::B::C\r\n1::2::\r\n3::4::\r\n"
        );
        assert_eq!(
            apply(doc, &dialect, |s| s.move_row(1, 0)),
            "A::B\r\n3::4\r\n1::2\r\n"
        );
    }

    #[test]
    fn test_extract_region_copy_and_cut() {
        let doc = "A,B,C\n1,2,3\n4,5,6\n";
        let sel = CellSelection::new(0, 1, 1, 2);

        let mut copied = Vec::new();
        let text = csv(doc, |s| copied = s.extract_region(&sel, true));
        assert_eq!(text, doc);
        assert_eq!(copied, vec![vec!["2", "3"], vec!["5", "6"]]);

        let text = csv(doc, |s| {
            s.extract_region(&sel, false);
        });
        assert_eq!(text, "A,B,C\n1,,\n4,,\n");
    }

    #[test]
    fn test_overwrite_region() {
        let doc = "A,B,C\n1,2,3\n4,5,6\n";
        let values = vec![vec!["x".to_string(), "y".to_string()]];
        assert_eq!(
            csv(doc, |s| s.overwrite_region((1, 0), 1, 2, &values)),
            "A,B,C\n1,2,3\nx,y,6\n"
        );
    }

    #[test]
    fn test_delimiter_swaps() {
        assert_eq!(lead_with("a,", ","), ",a");
        assert_eq!(trail_with(",a", ","), "a,");
        assert_eq!(lead_with("a\r\n", "\r\n"), "\r\na");
    }
}
