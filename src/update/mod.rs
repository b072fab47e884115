//! Update functions for the Elm-style architecture
//!
//! All edit requests flow through [`update`]. Handlers check coordinates
//! against the current grid before calling into the model, which itself
//! trusts its callers; an out-of-bounds message is logged and dropped.

mod clipboard;
mod edit;
mod history;

use crate::dsv::{ChangeDescriptor, EditableDsvModel, TransactionLog};
use crate::messages::DsvMsg;

pub use clipboard::update_clipboard;
pub use edit::update_edit;
pub use history::update_history;

/// Main update function - dispatches to sub-handlers
pub fn update<L: TransactionLog>(
    model: &mut EditableDsvModel<L>,
    msg: DsvMsg,
) -> Option<ChangeDescriptor> {
    tracing::debug!(?msg, "update");
    match msg {
        DsvMsg::Cut(_) | DsvMsg::Copy(_) | DsvMsg::Paste { .. } | DsvMsg::ClearClipboard => {
            update_clipboard(model, msg)
        }
        DsvMsg::Undo | DsvMsg::Redo => update_history(model, msg),
        DsvMsg::SetDialect(dialect) => match model.set_dialect(dialect) {
            Ok(()) => Some(ChangeDescriptor::ModelReset),
            Err(e) => {
                tracing::warn!("Rejected dialect: {}", e);
                None
            }
        },
        msg => update_edit(model, msg),
    }
}

/// Log and reject a message whose coordinates fall outside the grid
fn out_of_bounds(what: &str, rows: usize, columns: usize) -> Option<ChangeDescriptor> {
    tracing::warn!(rows, columns, "{} out of bounds, ignoring", what);
    None
}
