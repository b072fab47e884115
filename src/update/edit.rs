//! Cell and structural edit handlers

use crate::dsv::{ChangeDescriptor, EditableDsvModel, TransactionLog};
use crate::messages::DsvMsg;

use super::out_of_bounds;

/// Handle cell and structure messages
pub fn update_edit<L: TransactionLog>(
    model: &mut EditableDsvModel<L>,
    msg: DsvMsg,
) -> Option<ChangeDescriptor> {
    let rows = model.row_count();
    let columns = model.column_count();

    match msg {
        DsvMsg::SetData {
            row,
            column,
            value,
            region,
        } => {
            if row >= rows || column >= columns {
                return out_of_bounds("set-data", rows, columns);
            }
            model
                .set_data(region, row, column, &value)
                .then(|| ChangeDescriptor::cell(row, column))
        }
        DsvMsg::AddRow { row } => {
            if row > rows {
                return out_of_bounds("add-row", rows, columns);
            }
            Some(model.add_row(row))
        }
        DsvMsg::AddColumn { column } => {
            if column > columns {
                return out_of_bounds("add-column", rows, columns);
            }
            Some(model.add_column(column))
        }
        DsvMsg::RemoveRow { row } => {
            if row >= rows {
                return out_of_bounds("remove-row", rows, columns);
            }
            Some(model.remove_row(row))
        }
        DsvMsg::RemoveColumn { column } => {
            if column >= columns {
                return out_of_bounds("remove-column", rows, columns);
            }
            model.remove_column(column)
        }
        DsvMsg::MoveRow { start, end } => {
            if start >= rows || end >= rows {
                return out_of_bounds("move-row", rows, columns);
            }
            model.move_row(start, end)
        }
        DsvMsg::MoveColumn { start, end } => {
            if start >= columns || end >= columns {
                return out_of_bounds("move-column", rows, columns);
            }
            model.move_column(start, end)
        }
        other => {
            tracing::warn!(?other, "update_edit: unexpected message");
            None
        }
    }
}
