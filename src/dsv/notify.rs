//! Change notification
//!
//! Subscribers get a channel of [`ModelEvent`]s. Re-parse completions of
//! generations the model started for its own edits are suppressed: the
//! change they describe has already been broadcast precisely.

use std::collections::HashSet;
use std::sync::mpsc::{self, Receiver, Sender};

use super::change::ChangeDescriptor;

/// Event delivered to subscribers (typically a grid renderer)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelEvent {
    /// A completed edit, for partial redraw
    Changed(ChangeDescriptor),
    /// Sent before a paste so an open cell editor can close first
    CancelEditing,
    /// Body text (buffer minus the header row) after an edit
    RawTextUpdated(String),
}

/// Fan-out of model events plus the set of suppressed re-parse generations
#[derive(Debug, Default)]
pub struct Notifier {
    subscribers: Vec<Sender<ModelEvent>>,
    suppressed: HashSet<u64>,
}

impl Notifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self) -> Receiver<ModelEvent> {
        let (tx, rx) = mpsc::channel();
        self.subscribers.push(tx);
        rx
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    /// Send to every live subscriber; dropped receivers are forgotten
    pub fn emit(&mut self, event: ModelEvent) {
        self.subscribers.retain(|tx| tx.send(event.clone()).is_ok());
    }

    /// Mark a re-parse generation as started by the model itself
    pub fn suppress(&mut self, generation: u64) {
        self.suppressed.insert(generation);
    }

    /// Whether the completion of `generation` should reach subscribers
    ///
    /// Consumes the suppression mark, so each generation is decided once.
    pub fn should_forward(&mut self, generation: u64) -> bool {
        !self.suppressed.remove(&generation)
    }

    /// Drop suppression marks for generations older than `current`
    pub fn forget_before(&mut self, current: u64) {
        self.suppressed.retain(|&generation| generation >= current);
    }
}
