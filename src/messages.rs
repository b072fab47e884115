//! Message types for the Elm-style architecture
//!
//! Every edit a host (or an edit script) can request is a [`DsvMsg`].
//! Messages deserialize from YAML/JSON with an `op` tag:
//!
//! ```yaml
//! - op: set-data
//!   row: 0
//!   column: 1
//!   value: "9"
//! - op: move-row
//!   start: 0
//!   end: 2
//! - op: undo
//! ```

use serde::{Deserialize, Serialize};

use crate::dsv::{CellRegion, CellSelection, Dialect};

/// Edit requests dispatched by [`crate::update::update`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "kebab-case")]
pub enum DsvMsg {
    // === Cells ===
    SetData {
        row: usize,
        column: usize,
        value: String,
        #[serde(default)]
        region: CellRegion,
    },

    // === Structure ===
    AddRow { row: usize },
    AddColumn { column: usize },
    RemoveRow { row: usize },
    RemoveColumn { column: usize },
    MoveRow { start: usize, end: usize },
    MoveColumn { start: usize, end: usize },

    // === Clipboard ===
    Cut(CellSelection),
    Copy(CellSelection),
    /// Paste the clipboard, or `data` when the clipboard is empty
    Paste {
        row: usize,
        column: usize,
        #[serde(default)]
        data: Option<String>,
    },
    ClearClipboard,

    // === History ===
    Undo,
    Redo,

    // === Dialect ===
    SetDialect(Dialect),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_script_deserializes() {
        let script = r#"
- op: set-data
  row: 0
  column: 1
  value: "9"
- op: cut
  start_row: 0
  start_column: 0
  end_row: 1
  end_column: 0
- op: paste
  row: 0
  column: 1
- op: set-dialect
  delimiter: ";"
- op: undo
"#;
        let msgs: Vec<DsvMsg> = serde_yaml::from_str(script).unwrap();
        assert_eq!(
            msgs[0],
            DsvMsg::SetData {
                row: 0,
                column: 1,
                value: "9".to_string(),
                region: CellRegion::Body,
            }
        );
        assert_eq!(msgs[1], DsvMsg::Cut(CellSelection::new(0, 0, 1, 0)));
        assert_eq!(
            msgs[2],
            DsvMsg::Paste {
                row: 0,
                column: 1,
                data: None
            }
        );
        assert_eq!(msgs[3], DsvMsg::SetDialect(Dialect::semicolon()));
        assert_eq!(msgs[4], DsvMsg::Undo);
    }
}
