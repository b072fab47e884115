//! Structural index of a DSV buffer
//!
//! Tokenizes a snapshot of the raw buffer into per-row cell start offsets.
//! Row 0 of the index is the header row; body row `r` is index row `r + 1`.

use super::dialect::Dialect;

/// Error type for DSV tokenizing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    pub message: String,
    pub line: Option<usize>,
}

impl ParseError {
    pub(crate) fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            line: None,
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.line {
            Some(line) => write!(f, "DSV parse error at line {}: {}", line, self.message),
            None => write!(f, "DSV parse error: {}", self.message),
        }
    }
}

impl std::error::Error for ParseError {}

#[derive(Debug, Clone, PartialEq, Eq)]
struct RowSpan {
    /// Byte offset where each cell starts
    cells: Vec<usize>,
    /// Byte offset one past the row content (before its row delimiter)
    end: usize,
}

/// Row and cell offsets of one buffer snapshot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DsvIndex {
    rows: Vec<RowSpan>,
    header: Vec<String>,
    column_count: usize,
    len: usize,
}

impl DsvIndex {
    /// Tokenize `text` with the given dialect
    pub fn parse(text: &str, dialect: &Dialect) -> Result<Self, ParseError> {
        dialect.validate()?;
        let quote = dialect.quote.map(|q| q as u8);

        let bytes = text.as_bytes();
        let delim = dialect.delimiter.as_bytes();
        let row_delim = dialect.row_delimiter.as_bytes();

        let mut rows = Vec::new();
        let mut cells = vec![0];
        let mut in_quotes = false;
        let mut at_row_start = true;
        let mut i = 0;

        while i < bytes.len() {
            if quote == Some(bytes[i]) {
                in_quotes = !in_quotes;
                at_row_start = false;
                i += 1;
                continue;
            }
            if !in_quotes {
                if bytes[i..].starts_with(row_delim) {
                    rows.push(RowSpan {
                        cells: std::mem::take(&mut cells),
                        end: i,
                    });
                    i += row_delim.len();
                    cells.push(i);
                    at_row_start = true;
                    continue;
                }
                if bytes[i..].starts_with(delim) {
                    i += delim.len();
                    cells.push(i);
                    at_row_start = false;
                    continue;
                }
            }
            at_row_start = false;
            i += 1;
        }

        if in_quotes {
            tracing::warn!(
                row = rows.len(),
                "unterminated quote, treating the rest of the buffer as one cell"
            );
        }

        // A trailing row delimiter terminates the last row instead of opening
        // an empty one.
        if !at_row_start || rows.is_empty() {
            rows.push(RowSpan {
                cells,
                end: bytes.len(),
            });
        }

        let header = rows[0]
            .cells
            .iter()
            .enumerate()
            .map(|(col, &start)| {
                let end = rows[0]
                    .cells
                    .get(col + 1)
                    .map(|next| next - delim.len())
                    .unwrap_or(rows[0].end);
                text[start..end].to_string()
            })
            .collect::<Vec<_>>();
        let column_count = header.len();

        Ok(Self {
            rows,
            header,
            column_count,
            len: bytes.len(),
        })
    }

    /// Number of rows in `region`
    pub fn row_count(&self, region: RowRegion) -> usize {
        match region {
            RowRegion::Body => self.rows.len().saturating_sub(1),
            RowRegion::ColumnHeader => 1,
        }
    }

    /// Number of columns, taken from the header row
    pub fn column_count(&self) -> usize {
        self.column_count
    }

    /// Header names as they appear in row 0
    pub fn header(&self) -> &[String] {
        &self.header
    }

    /// Byte offset where `column` of index row `row` starts
    ///
    /// Missing cells of a ragged row resolve to the row end; rows past the
    /// end resolve to the snapshot length.
    pub fn get_offset_index(&self, row: usize, column: usize) -> usize {
        match self.rows.get(row) {
            Some(span) => span.cells.get(column).copied().unwrap_or(span.end),
            None => self.len,
        }
    }
}

/// Row regions known to the tokenizer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowRegion {
    Body,
    ColumnHeader,
}
