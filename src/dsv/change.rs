//! Structured change descriptions
//!
//! Every mutation produces exactly one [`ChangeDescriptor`]. The renderer uses
//! it to redraw only the affected region and the transaction log stores it so
//! undo can emit the structural inverse.

use serde::{Deserialize, Serialize};

/// Description of one completed edit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum ChangeDescriptor {
    #[serde(rename_all = "camelCase")]
    CellsChanged {
        row: usize,
        column: usize,
        row_span: usize,
        column_span: usize,
    },
    RowsInserted {
        index: usize,
        span: usize,
    },
    RowsRemoved {
        index: usize,
        span: usize,
    },
    ColumnsInserted {
        index: usize,
        span: usize,
    },
    ColumnsRemoved {
        index: usize,
        span: usize,
    },
    RowsMoved {
        index: usize,
        destination: usize,
        span: usize,
    },
    ColumnsMoved {
        index: usize,
        destination: usize,
        span: usize,
    },
    ModelReset,
}

impl ChangeDescriptor {
    pub fn cell(row: usize, column: usize) -> Self {
        Self::CellsChanged {
            row,
            column,
            row_span: 1,
            column_span: 1,
        }
    }

    /// The change that undoes this one
    ///
    /// Cell changes invert to the same region, insertions to removals (and
    /// back), and moves swap source and destination.
    pub fn inverse(&self) -> Self {
        match *self {
            Self::CellsChanged { .. } | Self::ModelReset => self.clone(),
            Self::RowsInserted { index, span } => Self::RowsRemoved { index, span },
            Self::RowsRemoved { index, span } => Self::RowsInserted { index, span },
            Self::ColumnsInserted { index, span } => Self::ColumnsRemoved { index, span },
            Self::ColumnsRemoved { index, span } => Self::ColumnsInserted { index, span },
            Self::RowsMoved {
                index,
                destination,
                span,
            } => Self::RowsMoved {
                index: destination,
                destination: index,
                span,
            },
            Self::ColumnsMoved {
                index,
                destination,
                span,
            } => Self::ColumnsMoved {
                index: destination,
                destination: index,
                span,
            },
        }
    }
}
