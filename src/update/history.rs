//! Undo/redo handlers

use crate::dsv::{ChangeDescriptor, EditableDsvModel, TransactionLog};
use crate::messages::DsvMsg;

/// Handle history messages
pub fn update_history<L: TransactionLog>(
    model: &mut EditableDsvModel<L>,
    msg: DsvMsg,
) -> Option<ChangeDescriptor> {
    match msg {
        DsvMsg::Undo => {
            let change = model.undo_last();
            if change.is_none() {
                tracing::debug!("update_history: nothing to undo");
            }
            change
        }
        DsvMsg::Redo => {
            let change = model.redo_last();
            if change.is_none() {
                tracing::debug!("update_history: nothing to redo");
            }
            change
        }
        other => {
            tracing::warn!(?other, "update_history: unexpected message");
            None
        }
    }
}
