//! Editable DSV model
//!
//! Owns the raw buffer, the header list and the structural index, and runs
//! every edit through the same cycle:
//!
//! ```text
//! barrier → splice (back-to-front) → commit transaction
//!         → request re-parse (suppressed generation) → broadcast change
//! ```
//!
//! The barrier makes sure the index describes the current buffer before
//! any offset is resolved. Re-parses started by the model's own edits are
//! adopted silently; any other completion (a dialect change) reaches
//! subscribers as `ModelReset`.

use std::sync::mpsc::Receiver;
use std::time::Duration;

use super::buffer::RawBuffer;
use super::change::ChangeDescriptor;
use super::clipboard::{parse_paste_data, ClipboardBuffer};
use super::coords::{column_name, CellRegion, CellSelection, ClipboardMode, Coordinates};
use super::dialect::Dialect;
use super::history::{HistoryError, MemoryLog, Transaction, TransactionLog};
use super::index::{DsvIndex, ParseError, RowRegion};
use super::notify::{ModelEvent, Notifier};
use super::reparse::{ParseCompleted, ParseWorker, WaitOutcome};
use super::splice::Splicer;

/// Tunables that do not belong to the dialect
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelOptions {
    /// How long an edit waits for the pending re-parse before indexing
    /// synchronously
    pub barrier_timeout: Duration,
    /// Cell separator for external paste data
    pub paste_separator: u8,
}

impl Default for ModelOptions {
    fn default() -> Self {
        Self {
            barrier_timeout: Duration::from_millis(500),
            paste_separator: b'\t',
        }
    }
}

/// Mutable DSV document with undo/redo and change notification
pub struct EditableDsvModel<L: TransactionLog = MemoryLog> {
    buffer: RawBuffer,
    header: Vec<String>,
    dialect: Dialect,
    index: DsvIndex,
    /// Generation the index was built from
    index_generation: u64,
    /// Generation of the re-parse requested for the current buffer
    buffer_generation: u64,
    worker: ParseWorker,
    notifier: Notifier,
    log: L,
    clipboard: Option<ClipboardBuffer>,
    options: ModelOptions,
}

impl EditableDsvModel<MemoryLog> {
    pub fn new(text: &str, dialect: Dialect) -> Result<Self, ParseError> {
        Self::with_log(text, dialect, MemoryLog::default(), ModelOptions::default())
    }
}

impl<L: TransactionLog> EditableDsvModel<L> {
    /// Build a model over `text`, committing its initial state to `log`
    pub fn with_log(
        text: &str,
        dialect: Dialect,
        log: L,
        options: ModelOptions,
    ) -> Result<Self, ParseError> {
        let index = DsvIndex::parse(text, &dialect)?;
        let header = index.header().to_vec();
        let mut model = Self {
            buffer: RawBuffer::new(text),
            header,
            dialect,
            index,
            index_generation: 0,
            buffer_generation: 0,
            worker: ParseWorker::new(),
            notifier: Notifier::new(),
            log,
            clipboard: None,
            options,
        };
        model.commit(ChangeDescriptor::ModelReset);
        tracing::debug!(
            rows = model.index.row_count(RowRegion::Body),
            columns = model.header.len(),
            "model created"
        );
        Ok(model)
    }

    // ---- accessors ----

    pub fn subscribe(&mut self) -> Receiver<ModelEvent> {
        self.notifier.subscribe()
    }

    pub fn dialect(&self) -> &Dialect {
        &self.dialect
    }

    pub fn header(&self) -> &[String] {
        &self.header
    }

    pub fn column_count(&mut self) -> usize {
        self.ensure_index();
        self.index.column_count()
    }

    pub fn row_count(&mut self) -> usize {
        self.ensure_index();
        self.index.row_count(RowRegion::Body)
    }

    /// Raw text of a body cell, quotes included
    pub fn data(&mut self, row: usize, column: usize) -> Option<String> {
        self.ensure_index();
        if row >= self.index.row_count(RowRegion::Body) || column >= self.index.column_count() {
            return None;
        }
        Some(self.splicer().peek(Coordinates::cell(row, column), true))
    }

    pub fn raw_data(&self) -> String {
        self.buffer.to_string()
    }

    /// Buffer text after the header row
    pub fn body_text(&self) -> String {
        let raw = self.buffer.to_string();
        match raw.find(self.dialect.row_delimiter.as_str()) {
            Some(at) => raw[at + self.dialect.row_delimiter.len()..].to_string(),
            None => String::new(),
        }
    }

    pub fn clipboard(&self) -> Option<&ClipboardBuffer> {
        self.clipboard.as_ref()
    }

    pub fn clipboard_text(&self) -> Option<String> {
        self.clipboard
            .as_ref()
            .map(|clip| clip.to_text(&self.dialect))
    }

    pub fn clear_clipboard(&mut self) {
        self.clipboard = None;
    }

    pub fn can_undo(&self) -> bool {
        self.log.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.log.can_redo()
    }

    pub fn log(&self) -> &L {
        &self.log
    }

    /// Whether the index already describes the current buffer
    pub fn is_index_current(&self) -> bool {
        self.index_generation == self.buffer_generation
    }

    // ---- structural edits ----

    /// Overwrite a body cell; other regions are read-only
    pub fn set_data(&mut self, region: CellRegion, row: usize, column: usize, value: &str) -> bool {
        if region != CellRegion::Body {
            tracing::debug!(?region, row, column, "ignoring edit outside the body");
            return false;
        }
        self.ensure_index();
        tracing::debug!(row, column, "set_data");
        self.splicer().set_cell(row, column, value);
        self.finish(ChangeDescriptor::cell(row, column));
        true
    }

    pub fn add_row(&mut self, row: usize) -> ChangeDescriptor {
        self.ensure_index();
        tracing::debug!(row, "add_row");
        self.splicer().insert_row(row);
        self.finish(ChangeDescriptor::RowsInserted { index: row, span: 1 })
    }

    pub fn add_column(&mut self, column: usize) -> ChangeDescriptor {
        self.ensure_index();
        let name = column_name(self.header.len() + 1);
        tracing::debug!(column, %name, "add_column");
        self.splicer().insert_column(column, &name);
        self.header.push(name);
        self.finish(ChangeDescriptor::ColumnsInserted {
            index: column,
            span: 1,
        })
    }

    pub fn remove_row(&mut self, row: usize) -> ChangeDescriptor {
        self.ensure_index();
        tracing::debug!(row, "remove_row");
        self.splicer().delete_row(row);
        self.finish(ChangeDescriptor::RowsRemoved { index: row, span: 1 })
    }

    /// Remove a column; the last remaining column cannot be removed
    pub fn remove_column(&mut self, column: usize) -> Option<ChangeDescriptor> {
        self.ensure_index();
        if self.index.column_count() <= 1 {
            tracing::debug!(column, "refusing to remove the only column");
            return None;
        }
        tracing::debug!(column, "remove_column");
        self.splicer().delete_column(column);
        self.header.pop();
        Some(self.finish(ChangeDescriptor::ColumnsRemoved {
            index: column,
            span: 1,
        }))
    }

    pub fn move_row(&mut self, start: usize, end: usize) -> Option<ChangeDescriptor> {
        if start == end {
            return None;
        }
        self.ensure_index();
        tracing::debug!(start, end, "move_row");
        self.splicer().move_row(start, end);
        Some(self.finish(ChangeDescriptor::RowsMoved {
            index: start,
            destination: end,
            span: 1,
        }))
    }

    pub fn move_column(&mut self, start: usize, end: usize) -> Option<ChangeDescriptor> {
        if start == end {
            return None;
        }
        self.ensure_index();
        tracing::debug!(start, end, "move_column");
        self.splicer().move_column(start, end);
        Some(self.finish(ChangeDescriptor::ColumnsMoved {
            index: start,
            destination: end,
            span: 1,
        }))
    }

    /// Fill the clipboard from `selection`; a cut also empties the cells
    ///
    /// Copying leaves the buffer alone and returns `None`.
    pub fn cut_and_copy(&mut self, selection: CellSelection, mode: ClipboardMode) -> Option<ChangeDescriptor> {
        self.ensure_index();
        let keeping_value = mode == ClipboardMode::CopyCells;
        let cells = self.splicer().extract_region(&selection, keeping_value);
        tracing::debug!(?selection, ?mode, "cut_and_copy");
        self.clipboard = Some(ClipboardBuffer::new(cells));

        if keeping_value {
            return None;
        }
        Some(self.finish(ChangeDescriptor::CellsChanged {
            row: selection.start_row,
            column: selection.start_column,
            row_span: selection.row_span(),
            column_span: selection.column_span(),
        }))
    }

    /// Overwrite cells starting at (`row`, `column`)
    ///
    /// The in-memory clipboard wins over `data`. The pasted block is clipped
    /// to the grid; rows and columns are never added.
    pub fn paste(&mut self, row: usize, column: usize, data: Option<&str>) -> Option<ChangeDescriptor> {
        let source = match (&self.clipboard, data) {
            (Some(clip), _) if !clip.is_empty() => clip.clone(),
            (_, Some(data)) => match parse_paste_data(data, self.options.paste_separator) {
                Ok(clip) => clip,
                Err(e) => {
                    tracing::warn!("Failed to parse paste data: {}", e);
                    return None;
                }
            },
            _ => return None,
        };

        self.ensure_index();
        let rows = source
            .rows()
            .min(self.index.row_count(RowRegion::Body).saturating_sub(row));
        let columns = source
            .columns()
            .min(self.index.column_count().saturating_sub(column));
        if rows == 0 || columns == 0 {
            tracing::debug!(row, column, "nothing to paste");
            return None;
        }

        self.notifier.emit(ModelEvent::CancelEditing);
        tracing::debug!(row, column, rows, columns, "paste");
        self.splicer()
            .overwrite_region((row, column), rows, columns, source.cells());
        Some(self.finish(ChangeDescriptor::CellsChanged {
            row,
            column,
            row_span: rows,
            column_span: columns,
        }))
    }

    // ---- dialect ----

    /// Re-interpret the buffer with another dialect
    ///
    /// The buffer is untouched. The re-parse re-derives the header, reaches
    /// subscribers as `ModelReset` and is committed so undo brings the old
    /// dialect back.
    pub fn set_dialect(&mut self, dialect: Dialect) -> Result<(), ParseError> {
        dialect.validate()?;
        tracing::debug!(?dialect, "set_dialect");
        self.dialect = dialect;
        let generation = self
            .worker
            .request(self.buffer.to_string(), self.dialect.clone());
        self.notifier.forget_before(generation);
        self.buffer_generation = generation;
        self.ensure_index();
        self.commit(ChangeDescriptor::ModelReset);
        Ok(())
    }

    // ---- undo / redo ----

    /// Roll back one transaction and broadcast the inverse of `change`
    pub fn undo(&mut self, change: Option<&ChangeDescriptor>) -> Option<ChangeDescriptor> {
        let change = change?;
        self.ensure_index();
        if !self.log.undo() {
            tracing::debug!("nothing to undo");
            return None;
        }
        let Some(record) = self.log.get_record().cloned() else {
            tracing::warn!("transaction log has no record after undo");
            return None;
        };
        self.buffer.replace_all(&record.raw_data);
        self.header = record.header;
        self.dialect = record.dialect;

        let inverse = change.inverse();
        tracing::debug!(?change, ?inverse, "undo");
        self.handle_emits(inverse.clone());
        Some(inverse)
    }

    /// Restore `snapshot` and broadcast `change` unchanged
    ///
    /// The caller owns the log position; [`redo_last`](Self::redo_last)
    /// advances the log and calls this with the record it lands on.
    pub fn redo(&mut self, change: Option<&ChangeDescriptor>, snapshot: &str) -> Option<ChangeDescriptor> {
        let change = change?;
        self.ensure_index();
        match change {
            ChangeDescriptor::ColumnsInserted { .. } => {
                self.header.push(column_name(self.header.len() + 1));
            }
            ChangeDescriptor::ColumnsRemoved { .. } => {
                self.header.pop();
            }
            _ => {}
        }
        self.buffer.replace_all(snapshot);
        tracing::debug!(?change, "redo");
        self.handle_emits(change.clone());
        Some(change.clone())
    }

    /// Undo the change recorded under the log cursor
    pub fn undo_last(&mut self) -> Option<ChangeDescriptor> {
        let change = self.log.get_record()?.change.clone();
        self.undo(Some(&change))
    }

    /// Advance the log and redo the change it lands on
    pub fn redo_last(&mut self) -> Option<ChangeDescriptor> {
        if !self.log.redo() {
            tracing::debug!("nothing to redo");
            return None;
        }
        let record = self.log.get_record()?.clone();
        self.dialect = record.dialect.clone();
        let change = self.redo(Some(&record.change), &record.raw_data);
        self.header = record.header;
        change
    }

    // ---- re-parse plumbing ----

    /// Adopt re-parse completions that have already arrived
    pub fn poll_parse(&mut self) {
        for done in self.worker.drain() {
            self.accept(done);
        }
    }

    /// Wait until the index describes the current buffer
    fn ensure_index(&mut self) {
        self.poll_parse();
        if self.is_index_current() {
            return;
        }

        let generation = self.buffer_generation;
        match self.worker.wait_for(generation, self.options.barrier_timeout) {
            WaitOutcome::Ready(done, others) => {
                for other in others {
                    self.accept(other);
                }
                self.accept(done);
            }
            WaitOutcome::TimedOut(others) => {
                for other in others {
                    self.accept(other);
                }
            }
        }

        if !self.is_index_current() {
            tracing::warn!(generation, "re-parse did not arrive in time, indexing synchronously");
            let forward = self.notifier.should_forward(generation);
            match DsvIndex::parse(&self.buffer.to_string(), &self.dialect) {
                Ok(index) => self.adopt(generation, index, forward),
                Err(e) => tracing::warn!("Failed to index buffer: {}", e),
            }
        }
    }

    fn accept(&mut self, done: ParseCompleted) {
        let forward = self.notifier.should_forward(done.generation);
        if done.generation != self.buffer_generation || done.generation == self.index_generation {
            tracing::trace!(
                generation = done.generation,
                current = self.buffer_generation,
                "discarding stale re-parse"
            );
            return;
        }
        match done.result {
            Ok(index) => self.adopt(done.generation, index, forward),
            Err(e) => tracing::warn!(generation = done.generation, "Re-parse failed: {}", e),
        }
    }

    fn adopt(&mut self, generation: u64, index: DsvIndex, forward: bool) {
        self.index = index;
        self.index_generation = generation;
        if forward {
            self.header = self.index.header().to_vec();
            tracing::debug!(generation, columns = self.header.len(), "external re-parse adopted");
            self.notifier
                .emit(ModelEvent::Changed(ChangeDescriptor::ModelReset));
        }
    }

    fn splicer(&mut self) -> Splicer<'_> {
        Splicer::new(&mut self.buffer, &self.index, &self.dialect)
    }

    /// Commit and broadcast a completed edit
    fn finish(&mut self, change: ChangeDescriptor) -> ChangeDescriptor {
        self.commit(change.clone());
        self.handle_emits(change.clone());
        change
    }

    fn commit(&mut self, change: ChangeDescriptor) {
        if let Err(e) = self.try_commit(change) {
            tracing::warn!("Failed to commit transaction: {}", e);
        }
    }

    fn try_commit(&mut self, change: ChangeDescriptor) -> Result<(), HistoryError> {
        let record = Transaction {
            raw_data: self.buffer.to_string(),
            header: self.header.clone(),
            dialect: self.dialect.clone(),
            change,
        };
        self.log.begin_transaction()?;
        if let Err(e) = self.log.update_record(record) {
            let _ = self.log.end_transaction();
            return Err(e);
        }
        self.log.end_transaction()
    }

    /// Start the suppressed re-parse, then broadcast
    fn handle_emits(&mut self, change: ChangeDescriptor) {
        let generation = self
            .worker
            .request(self.buffer.to_string(), self.dialect.clone());
        self.notifier.suppress(generation);
        self.notifier.forget_before(generation);
        self.buffer_generation = generation;

        self.notifier.emit(ModelEvent::Changed(change));
        let body = self.body_text();
        self.notifier.emit(ModelEvent::RawTextUpdated(body));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOC: &str = "A,B\n1,2\n3,4\n";

    fn model(text: &str) -> EditableDsvModel {
        EditableDsvModel::new(text, Dialect::csv()).unwrap()
    }

    fn changes(rx: &Receiver<ModelEvent>) -> Vec<ChangeDescriptor> {
        rx.try_iter()
            .filter_map(|event| match event {
                ModelEvent::Changed(change) => Some(change),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_set_data_emits_cell_change() {
        let mut m = model(DOC);
        let rx = m.subscribe();
        assert!(m.set_data(CellRegion::Body, 0, 1, "9"));
        assert_eq!(m.raw_data(), "A,B\n1,9\n3,4\n");
        assert_eq!(changes(&rx), vec![ChangeDescriptor::cell(0, 1)]);
    }

    #[test]
    fn test_set_data_outside_body_is_rejected() {
        let mut m = model(DOC);
        assert!(!m.set_data(CellRegion::ColumnHeader, 0, 0, "x"));
        assert_eq!(m.raw_data(), DOC);
        assert!(!m.can_undo());
    }

    #[test]
    fn test_add_column_updates_header() {
        let mut m = model(DOC);
        m.add_column(2);
        assert_eq!(m.header(), ["A", "B", "C"]);
        assert_eq!(m.raw_data(), "A,B,C\n1,2,\n3,4,\n");
        assert_eq!(m.column_count(), 3);
    }

    #[test]
    fn test_remove_row_emits_rows_removed() {
        let mut m = model(DOC);
        let change = m.remove_row(0);
        assert_eq!(change, ChangeDescriptor::RowsRemoved { index: 0, span: 1 });
        assert_eq!(m.raw_data(), "A,B\n3,4\n");
        assert_eq!(m.row_count(), 1);
    }

    #[test]
    fn test_consecutive_edits_see_fresh_index() {
        let mut m = model(DOC);
        m.add_row(0);
        m.set_data(CellRegion::Body, 0, 0, "x");
        m.add_column(0);
        m.set_data(CellRegion::Body, 2, 0, "y");
        assert_eq!(m.raw_data(), "A,B,C\n,x,\n,1,2\ny,3,4\n");
    }

    #[test]
    fn test_move_to_same_place_is_noop() {
        let mut m = model(DOC);
        let rx = m.subscribe();
        assert!(m.move_row(1, 1).is_none());
        assert!(m.move_column(0, 0).is_none());
        assert!(rx.try_recv().is_err());
        assert!(!m.can_undo());
    }

    #[test]
    fn test_remove_only_column_is_noop() {
        let mut m = model("A\n1\n");
        assert!(m.remove_column(0).is_none());
        assert_eq!(m.raw_data(), "A\n1\n");
    }

    #[test]
    fn test_copy_does_not_mutate_or_emit() {
        let mut m = model(DOC);
        let rx = m.subscribe();
        assert!(m
            .cut_and_copy(CellSelection::new(0, 0, 1, 0), ClipboardMode::CopyCells)
            .is_none());
        assert_eq!(m.raw_data(), DOC);
        assert!(rx.try_recv().is_err());
        assert_eq!(m.clipboard_text().as_deref(), Some("1\n3"));
    }

    #[test]
    fn test_cut_then_paste_moves_values() {
        let mut m = model(DOC);
        m.cut_and_copy(CellSelection::new(0, 0, 1, 0), ClipboardMode::CutCells);
        assert_eq!(m.raw_data(), "A,B\n,2\n,4\n");

        let change = m.paste(0, 1, None);
        assert_eq!(
            change,
            Some(ChangeDescriptor::CellsChanged {
                row: 0,
                column: 1,
                row_span: 2,
                column_span: 1
            })
        );
        assert_eq!(m.raw_data(), "A,B\n,1\n,3\n");
    }

    #[test]
    fn test_paste_clips_to_grid() {
        let mut m = model(DOC);
        let rx = m.subscribe();
        let change = m.paste(1, 1, Some("x\ty\nz\tw\n"));
        assert_eq!(
            change,
            Some(ChangeDescriptor::CellsChanged {
                row: 1,
                column: 1,
                row_span: 1,
                column_span: 1
            })
        );
        assert_eq!(m.raw_data(), "A,B\n1,2\n3,x\n");
        assert_eq!(rx.try_recv(), Ok(ModelEvent::CancelEditing));
    }

    #[test]
    fn test_paste_with_nothing_is_noop() {
        let mut m = model(DOC);
        assert!(m.paste(0, 0, None).is_none());
        assert!(m.paste(0, 0, Some("")).is_none());
        assert!(m.paste(5, 0, Some("x")).is_none());
        assert!(!m.can_undo());
    }

    #[test]
    fn test_undo_restores_and_inverts() {
        let mut m = model(DOC);
        let change = m.add_column(0);
        let rx = m.subscribe();

        let inverse = m.undo(Some(&change));
        assert_eq!(inverse, Some(ChangeDescriptor::ColumnsRemoved { index: 0, span: 1 }));
        assert_eq!(m.raw_data(), DOC);
        assert_eq!(m.header(), ["A", "B"]);
        assert_eq!(changes(&rx), vec![ChangeDescriptor::ColumnsRemoved { index: 0, span: 1 }]);
    }

    #[test]
    fn test_undo_without_change_is_noop() {
        let mut m = model(DOC);
        m.set_data(CellRegion::Body, 0, 0, "x");
        assert!(m.undo(None).is_none());
        assert_eq!(m.raw_data(), "A,B\nx,2\n3,4\n");
    }

    #[test]
    fn test_undo_past_initial_state_is_noop() {
        let mut m = model(DOC);
        assert!(m.undo_last().is_none());
        assert_eq!(m.raw_data(), DOC);
    }

    #[test]
    fn test_redo_patches_header() {
        let mut m = model(DOC);
        let change = m.add_column(2);
        let snapshot = m.raw_data();
        m.undo(Some(&change));

        let redone = m.redo(Some(&change), &snapshot);
        assert_eq!(redone, Some(change));
        assert_eq!(m.raw_data(), "A,B,C\n1,2,\n3,4,\n");
        assert_eq!(m.header(), ["A", "B", "C"]);
    }

    #[test]
    fn test_undo_last_redo_last() {
        let mut m = model(DOC);
        m.move_row(0, 1);
        assert_eq!(m.raw_data(), "A,B\n3,4\n1,2\n");

        assert_eq!(
            m.undo_last(),
            Some(ChangeDescriptor::RowsMoved {
                index: 1,
                destination: 0,
                span: 1
            })
        );
        assert_eq!(m.raw_data(), DOC);
        assert!(m.can_redo());

        m.redo_last();
        assert_eq!(m.raw_data(), "A,B\n3,4\n1,2\n");
        assert!(!m.can_redo());
    }

    #[test]
    fn test_own_reparse_is_not_forwarded() {
        let mut m = model(DOC);
        let rx = m.subscribe();
        m.add_row(2);
        // row_count waits for the re-parse to land
        assert_eq!(m.row_count(), 3);
        m.poll_parse();
        assert_eq!(changes(&rx), vec![ChangeDescriptor::RowsInserted { index: 2, span: 1 }]);
    }

    #[test]
    fn test_set_dialect_emits_model_reset() {
        let mut m = model("A;B\n1;2\n");
        assert_eq!(m.header(), ["A;B"]);
        let rx = m.subscribe();

        m.set_dialect(Dialect::semicolon()).unwrap();
        assert_eq!(m.row_count(), 1);
        assert_eq!(m.header(), ["A", "B"]);
        assert_eq!(changes(&rx), vec![ChangeDescriptor::ModelReset]);
        assert_eq!(m.data(0, 1).as_deref(), Some("2"));
    }

    #[test]
    fn test_undo_across_set_dialect_keeps_header_in_step() {
        let mut m = model("A;B\n1;2\n");
        m.set_dialect(Dialect::semicolon()).unwrap();
        m.set_data(CellRegion::Body, 0, 0, "9");

        m.undo_last();
        assert_eq!(m.raw_data(), "A;B\n1;2\n");
        assert_eq!(m.header(), ["A", "B"]);
        assert_eq!(m.column_count(), 2);
        assert_eq!(m.add_column(2), ChangeDescriptor::ColumnsInserted { index: 2, span: 1 });
        assert_eq!(m.header(), ["A", "B", "C"]);
        assert_eq!(m.raw_data(), "A;B;C\n1;2;\n");
    }

    #[test]
    fn test_undo_set_dialect_restores_previous_dialect() {
        let mut m = model("A;B\n1;2\n");
        m.set_dialect(Dialect::semicolon()).unwrap();
        assert!(m.can_undo());

        assert_eq!(m.undo_last(), Some(ChangeDescriptor::ModelReset));
        assert_eq!(m.dialect(), &Dialect::csv());
        assert_eq!(m.header(), ["A;B"]);
        assert_eq!(m.column_count(), 1);

        m.redo_last();
        assert_eq!(m.dialect(), &Dialect::semicolon());
        assert_eq!(m.header(), ["A", "B"]);
        assert_eq!(m.column_count(), 2);
    }

    #[test]
    fn test_set_dialect_rejects_empty_delimiter() {
        let mut m = model(DOC);
        assert!(m.set_dialect(Dialect::new("", "\n")).is_err());
        assert_eq!(m.dialect(), &Dialect::csv());
    }

    #[test]
    fn test_raw_text_updated_carries_body() {
        let mut m = model(DOC);
        let rx = m.subscribe();
        m.set_data(CellRegion::Body, 1, 0, "7");
        let bodies: Vec<_> = rx
            .try_iter()
            .filter_map(|event| match event {
                ModelEvent::RawTextUpdated(body) => Some(body),
                _ => None,
            })
            .collect();
        assert_eq!(bodies, vec!["1,2\n7,4\n".to_string()]);
    }

    #[test]
    fn test_data_out_of_bounds() {
        let mut m = model(DOC);
        assert_eq!(m.data(1, 1).as_deref(), Some("4"));
        assert!(m.data(2, 0).is_none());
        assert!(m.data(0, 2).is_none());
    }
}
