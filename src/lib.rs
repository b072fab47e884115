//! dsv-edit - editable delimiter-separated documents
//!
//! This crate provides a byte-exact, mutable model of a DSV document with
//! structural edits, undo/redo and change notification, driven through the
//! Elm Architecture pattern (`DsvMsg` → `update`).

pub mod cli;
pub mod config;
pub mod config_paths;
pub mod dsv;
pub mod messages;
pub mod tracing;
pub mod update;

// Re-export commonly used types
pub use config::DsvConfig;
pub use dsv::{ChangeDescriptor, Dialect, EditableDsvModel, ModelEvent};
pub use messages::DsvMsg;
pub use update::update;
