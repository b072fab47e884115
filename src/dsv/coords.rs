//! Logical addressing of cells, rows and rectangular selections

use serde::{Deserialize, Serialize};

/// A body cell, or a whole body row when `column` is `None`
///
/// Rows are 0-based over the body; the header row is not addressable here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coordinates {
    pub row: usize,
    pub column: Option<usize>,
}

impl Coordinates {
    pub fn cell(row: usize, column: usize) -> Self {
        Self {
            row,
            column: Some(column),
        }
    }

    pub fn row(row: usize) -> Self {
        Self { row, column: None }
    }

    pub fn is_row(&self) -> bool {
        self.column.is_none()
    }
}

/// Inclusive rectangular cell selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellSelection {
    pub start_row: usize,
    pub start_column: usize,
    pub end_row: usize,
    pub end_column: usize,
}

impl CellSelection {
    pub fn new(start_row: usize, start_column: usize, end_row: usize, end_column: usize) -> Self {
        Self {
            start_row,
            start_column,
            end_row,
            end_column,
        }
    }

    /// Selection of a single cell
    pub fn single(row: usize, column: usize) -> Self {
        Self::new(row, column, row, column)
    }

    pub fn row_span(&self) -> usize {
        self.end_row.saturating_sub(self.start_row) + 1
    }

    pub fn column_span(&self) -> usize {
        self.end_column.saturating_sub(self.start_column) + 1
    }
}

/// Grid region a cell address refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CellRegion {
    #[default]
    Body,
    RowHeader,
    ColumnHeader,
    CornerHeader,
}

/// Whether a clipboard extraction leaves the cells in place
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ClipboardMode {
    CutCells,
    CopyCells,
}

/// Spreadsheet-style column name for a 1-based column number
///
/// 1 → "A", 26 → "Z", 27 → "AA", 703 → "AAA". Zero yields an empty name.
pub fn column_name(mut number: usize) -> String {
    let mut name = Vec::new();
    while number > 0 {
        let rem = (number - 1) % 26;
        name.push(b'A' + rem as u8);
        number = (number - 1) / 26;
    }
    name.reverse();
    String::from_utf8(name).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_name() {
        assert_eq!(column_name(0), "");
        assert_eq!(column_name(1), "A");
        assert_eq!(column_name(3), "C");
        assert_eq!(column_name(26), "Z");
        assert_eq!(column_name(27), "AA");
        assert_eq!(column_name(52), "AZ");
        assert_eq!(column_name(703), "AAA");
    }

    #[test]
    fn test_selection_spans() {
        let sel = CellSelection::new(1, 2, 3, 2);
        assert_eq!(sel.row_span(), 3);
        assert_eq!(sel.column_span(), 1);
        assert_eq!(CellSelection::single(4, 4).row_span(), 1);
    }

    #[test]
    fn test_clipboard_mode_serde_names() {
        let mode: ClipboardMode = serde_yaml::from_str("copy-cells").unwrap();
        assert_eq!(mode, ClipboardMode::CopyCells);
    }
}
