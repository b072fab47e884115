//! Cut, copy and paste handlers

use crate::dsv::{CellSelection, ChangeDescriptor, ClipboardMode, EditableDsvModel, TransactionLog};
use crate::messages::DsvMsg;

use super::out_of_bounds;

/// Handle clipboard messages
pub fn update_clipboard<L: TransactionLog>(
    model: &mut EditableDsvModel<L>,
    msg: DsvMsg,
) -> Option<ChangeDescriptor> {
    match msg {
        DsvMsg::Cut(selection) => extract(model, selection, ClipboardMode::CutCells),
        DsvMsg::Copy(selection) => extract(model, selection, ClipboardMode::CopyCells),
        DsvMsg::Paste { row, column, data } => {
            let rows = model.row_count();
            let columns = model.column_count();
            if row >= rows || column >= columns {
                return out_of_bounds("paste", rows, columns);
            }
            model.paste(row, column, data.as_deref())
        }
        DsvMsg::ClearClipboard => {
            model.clear_clipboard();
            None
        }
        other => {
            tracing::warn!(?other, "update_clipboard: unexpected message");
            None
        }
    }
}

fn extract<L: TransactionLog>(
    model: &mut EditableDsvModel<L>,
    selection: CellSelection,
    mode: ClipboardMode,
) -> Option<ChangeDescriptor> {
    let rows = model.row_count();
    let columns = model.column_count();
    let inverted =
        selection.start_row > selection.end_row || selection.start_column > selection.end_column;
    if inverted || selection.end_row >= rows || selection.end_column >= columns {
        return out_of_bounds("selection", rows, columns);
    }
    model.cut_and_copy(selection, mode)
}
