//! In-memory clipboard and external paste data

use std::io::Cursor;

use super::dialect::Dialect;
use super::index::ParseError;

/// Rectangular block of cell values, row-major
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClipboardBuffer {
    cells: Vec<Vec<String>>,
}

impl ClipboardBuffer {
    pub fn new(cells: Vec<Vec<String>>) -> Self {
        Self { cells }
    }

    pub fn rows(&self) -> usize {
        self.cells.len()
    }

    /// Width of the block, taken from its first row
    pub fn columns(&self) -> usize {
        self.cells.first().map_or(0, Vec::len)
    }

    pub fn is_empty(&self) -> bool {
        self.rows() == 0 || self.columns() == 0
    }

    pub fn cells(&self) -> &[Vec<String>] {
        &self.cells
    }

    pub fn get(&self, row: usize, column: usize) -> Option<&str> {
        self.cells.get(row)?.get(column).map(String::as_str)
    }

    /// Join the block back into text with the dialect's separators
    pub fn to_text(&self, dialect: &Dialect) -> String {
        self.cells
            .iter()
            .map(|row| row.join(&dialect.delimiter))
            .collect::<Vec<_>>()
            .join(&dialect.row_delimiter)
    }
}

/// Split pasted text into cells
///
/// Rows end at any line terminator and cells split on `separator`. Quotes
/// are not interpreted: the text is taken the way a spreadsheet copies it.
/// A blank line is a row with one empty cell; only a single trailing
/// terminator is dropped.
pub fn parse_paste_data(data: &str, separator: u8) -> Result<ClipboardBuffer, ParseError> {
    let mut builder = csv::ReaderBuilder::new();
    builder
        .delimiter(separator)
        .has_headers(false)
        .flexible(true)
        .quoting(false);

    let mut rows = Vec::new();
    for (line_num, line) in data.lines().enumerate() {
        let mut reader = builder.from_reader(Cursor::new(line.as_bytes()));
        match reader.records().next() {
            Some(Ok(record)) => rows.push(record.iter().map(str::to_string).collect()),
            Some(Err(e)) => {
                return Err(ParseError {
                    message: e.to_string(),
                    line: Some(line_num + 1),
                });
            }
            None => rows.push(vec![String::new()]),
        }
    }
    Ok(ClipboardBuffer::new(rows))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_tab_separated_block() {
        let clip = parse_paste_data("1\t2\n3\t4\n", b'\t').unwrap();
        assert_eq!(clip.rows(), 2);
        assert_eq!(clip.columns(), 2);
        assert_eq!(clip.get(1, 0), Some("3"));
    }

    #[test]
    fn test_parse_keeps_quotes_literal() {
        let clip = parse_paste_data("\"a\tb\"\n", b'\t').unwrap();
        assert_eq!(clip.cells(), &[vec!["\"a".to_string(), "b\"".to_string()]]);
    }

    #[test]
    fn test_parse_empty_data() {
        let clip = parse_paste_data("", b'\t').unwrap();
        assert!(clip.is_empty());
    }

    #[test]
    fn test_parse_blank_lines_are_rows() {
        let clip = parse_paste_data("x\n\ny\n\n", b'\t').unwrap();
        assert_eq!(clip.rows(), 4);
        assert_eq!(clip.get(1, 0), Some(""));
        assert_eq!(clip.get(2, 0), Some("y"));
        assert_eq!(clip.get(3, 0), Some(""));
    }

    #[test]
    fn test_parse_crlf_rows() {
        let clip = parse_paste_data("a,b\r\nc,d", b',').unwrap();
        assert_eq!(clip.rows(), 2);
        assert_eq!(clip.get(1, 1), Some("d"));
    }

    #[test]
    fn test_to_text_uses_dialect() {
        let clip = ClipboardBuffer::new(vec![
            vec!["1".to_string(), "2".to_string()],
            vec!["3".to_string(), "4".to_string()],
        ]);
        assert_eq!(clip.to_text(&Dialect::csv()), "1,2\n3,4");
        assert_eq!(clip.to_text(&Dialect::new("::", "\r\n")), "1::2\r\n3::4");
    }
}
