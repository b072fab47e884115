//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use std::sync::mpsc::Receiver;

use dsv_edit::dsv::{ChangeDescriptor, Dialect, EditableDsvModel, ModelEvent};

pub const DOC: &str = "A,B\n1,2\n3,4\n";
pub const THREE_ROWS: &str = "A,B\n1,2\n3,4\n5,6\n";
pub const WIDE: &str = "A,B,C\n1,2,3\n4,5,6\n7,8,9\n";

/// Create a CSV model over `text`
pub fn test_model(text: &str) -> EditableDsvModel {
    EditableDsvModel::new(text, Dialect::csv()).unwrap()
}

/// Create a model with an arbitrary dialect
pub fn test_model_with(text: &str, dialect: Dialect) -> EditableDsvModel {
    EditableDsvModel::new(text, dialect).unwrap()
}

/// Drain the change descriptors received so far
pub fn changes(rx: &Receiver<ModelEvent>) -> Vec<ChangeDescriptor> {
    rx.try_iter()
        .filter_map(|event| match event {
            ModelEvent::Changed(change) => Some(change),
            _ => None,
        })
        .collect()
}

/// Documents exercised by the round-trip tests: trailing row delimiter or
/// not, single and multi-character delimiters
pub fn fixtures() -> Vec<(String, Dialect)> {
    vec![
        (WIDE.to_string(), Dialect::csv()),
        ("A,B,C\n1,2,3\n4,5,6".to_string(), Dialect::csv()),
        ("A\tB\tC\nx\t\tz\n\t\t\n".to_string(), Dialect::tsv()),
        (
            "A::B::C\r\n1::2::3\r\n4::5::6\r\n".to_string(),
            Dialect::new("::", "\r\n"),
        ),
    ]
}
