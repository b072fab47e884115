//! Editable DSV document engine
//!
//! Edits a delimiter-separated document in place: coordinates resolve to
//! byte offsets, edits splice exactly the affected substring (delimiters
//! included), and every edit is committed to a transaction log and
//! broadcast as a [`ChangeDescriptor`].
//!
//! # Architecture
//!
//! ```text
//! EditableDsvModel
//! ├── RawBuffer (rope)      ← Splicer (slice_out / insert_at)
//! ├── DsvIndex              ← OffsetResolver (coords → byte offsets)
//! ├── ParseWorker           ← background re-parse, generation tagged
//! ├── Notifier              → ModelEvent subscribers
//! └── TransactionLog        → undo / redo
//! ```

mod buffer;
mod change;
mod clipboard;
mod coords;
mod dialect;
mod edits;
mod history;
mod index;
mod model;
mod notify;
mod reparse;
mod resolver;
mod splice;

pub use buffer::RawBuffer;
pub use change::ChangeDescriptor;
pub use clipboard::{parse_paste_data, ClipboardBuffer};
pub use coords::{column_name, CellRegion, CellSelection, ClipboardMode, Coordinates};
pub use dialect::Dialect;
pub use history::{HistoryError, MemoryLog, Transaction, TransactionLog, DEFAULT_HISTORY_DEPTH};
pub use index::{DsvIndex, ParseError, RowRegion};
pub use model::{EditableDsvModel, ModelOptions};
pub use notify::{ModelEvent, Notifier};
pub use reparse::{ParseCompleted, ParseWorker, WaitOutcome};
pub use resolver::OffsetResolver;
pub use splice::Splicer;
