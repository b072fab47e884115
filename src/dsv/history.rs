//! Transaction log
//!
//! Every mutation commits a [`Transaction`] holding the state it produced.
//! The log keeps a cursor on the current record; undo and redo move the
//! cursor and the model restores its buffer from the record under it.
//!
//! ```text
//! [reset] [t1] [t2] [t3]
//!                ^ cursor after one undo, t3 is the redo branch
//! ```

use serde::{Deserialize, Serialize};

use super::change::ChangeDescriptor;
use super::dialect::Dialect;

/// Snapshot of the document after one mutation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub raw_data: String,
    pub header: Vec<String>,
    /// Dialect the header was derived with
    #[serde(default)]
    pub dialect: Dialect,
    pub change: ChangeDescriptor,
}

/// Errors from misusing the transaction protocol
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HistoryError {
    /// `begin_transaction` while a transaction is already open
    AlreadyOpen,
    /// `update_record` or `end_transaction` without `begin_transaction`
    NotOpen,
}

impl std::fmt::Display for HistoryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AlreadyOpen => write!(f, "transaction already open"),
            Self::NotOpen => write!(f, "no open transaction"),
        }
    }
}

impl std::error::Error for HistoryError {}

/// Storage the model commits into and restores from
pub trait TransactionLog {
    fn begin_transaction(&mut self) -> Result<(), HistoryError>;

    /// Stage the record for the open transaction, replacing any staged one
    fn update_record(&mut self, record: Transaction) -> Result<(), HistoryError>;

    /// Commit the staged record; a transaction with nothing staged is dropped
    fn end_transaction(&mut self) -> Result<(), HistoryError>;

    /// Step back one record; false when already at the oldest
    fn undo(&mut self) -> bool;

    /// Step forward one record; false when there is no redo branch
    fn redo(&mut self) -> bool;

    /// The record under the cursor
    fn get_record(&self) -> Option<&Transaction>;

    fn can_undo(&self) -> bool;

    fn can_redo(&self) -> bool;
}

pub const DEFAULT_HISTORY_DEPTH: usize = 100;

/// In-memory log with a bounded number of records
#[derive(Debug, Clone)]
pub struct MemoryLog {
    records: Vec<Transaction>,
    cursor: usize,
    staged: Option<Transaction>,
    open: bool,
    max_depth: usize,
}

impl Default for MemoryLog {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_DEPTH)
    }
}

impl MemoryLog {
    /// `max_depth` counts undo steps; one extra record holds the base state
    pub fn new(max_depth: usize) -> Self {
        Self {
            records: Vec::new(),
            cursor: 0,
            staged: None,
            open: false,
            max_depth: max_depth.max(1),
        }
    }

    /// All committed records, oldest first, including the redo branch
    pub fn records(&self) -> &[Transaction] {
        &self.records
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    fn commit(&mut self, record: Transaction) {
        if !self.records.is_empty() {
            self.records.truncate(self.cursor + 1);
        }
        self.records.push(record);

        let overflow = self.records.len().saturating_sub(self.max_depth + 1);
        if overflow > 0 {
            self.records.drain(..overflow);
            tracing::trace!(dropped = overflow, "history depth reached");
        }
        self.cursor = self.records.len() - 1;
    }
}

impl TransactionLog for MemoryLog {
    fn begin_transaction(&mut self) -> Result<(), HistoryError> {
        if self.open {
            return Err(HistoryError::AlreadyOpen);
        }
        self.open = true;
        self.staged = None;
        Ok(())
    }

    fn update_record(&mut self, record: Transaction) -> Result<(), HistoryError> {
        if !self.open {
            return Err(HistoryError::NotOpen);
        }
        self.staged = Some(record);
        Ok(())
    }

    fn end_transaction(&mut self) -> Result<(), HistoryError> {
        if !self.open {
            return Err(HistoryError::NotOpen);
        }
        self.open = false;
        if let Some(record) = self.staged.take() {
            self.commit(record);
        }
        Ok(())
    }

    fn undo(&mut self) -> bool {
        if self.can_undo() {
            self.cursor -= 1;
            true
        } else {
            false
        }
    }

    fn redo(&mut self) -> bool {
        if self.can_redo() {
            self.cursor += 1;
            true
        } else {
            false
        }
    }

    fn get_record(&self) -> Option<&Transaction> {
        self.records.get(self.cursor)
    }

    fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    fn can_redo(&self) -> bool {
        self.cursor + 1 < self.records.len()
    }
}
