//! Background re-parse with generation tokens
//!
//! ```text
//! edit → request(snapshot) → generation N → (worker thread)
//!      → ParseCompleted { generation: N, .. } → poll / wait_for(N)
//! ```
//!
//! The worker only ever sees an owned snapshot of the buffer. Completions
//! carry their generation back so the model can tell its own re-parses from
//! stale or foreign ones.

use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::time::{Duration, Instant};

use super::dialect::Dialect;
use super::index::{DsvIndex, ParseError};

/// Result of one background parse
#[derive(Debug)]
pub struct ParseCompleted {
    pub generation: u64,
    pub result: Result<DsvIndex, ParseError>,
}

/// Outcome of waiting for a specific generation
#[derive(Debug)]
pub enum WaitOutcome {
    /// The requested generation arrived; other completions drained meanwhile
    /// are returned alongside it
    Ready(ParseCompleted, Vec<ParseCompleted>),
    /// Gave up waiting; completions drained meanwhile are returned
    TimedOut(Vec<ParseCompleted>),
}

/// Spawns parse jobs and collects their completions
pub struct ParseWorker {
    tx: Sender<ParseCompleted>,
    rx: Receiver<ParseCompleted>,
    next_generation: u64,
}

impl Default for ParseWorker {
    fn default() -> Self {
        Self::new()
    }
}

impl ParseWorker {
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel();
        Self {
            tx,
            rx,
            next_generation: 0,
        }
    }

    /// Reserve the next generation number without spawning a job
    pub fn next_generation(&mut self) -> u64 {
        self.next_generation = self.next_generation.wrapping_add(1);
        self.next_generation
    }

    /// Parse `snapshot` on a worker thread, returning the generation tag
    pub fn request(&mut self, snapshot: String, dialect: Dialect) -> u64 {
        let generation = self.next_generation();
        let tx = self.tx.clone();
        tracing::trace!(generation, bytes = snapshot.len(), "reparse requested");
        std::thread::spawn(move || {
            let result = DsvIndex::parse(&snapshot, &dialect);
            let _ = tx.send(ParseCompleted { generation, result });
        });
        generation
    }

    /// Collect every completion that has already arrived
    pub fn drain(&self) -> Vec<ParseCompleted> {
        self.rx.try_iter().collect()
    }

    /// Block until `generation` completes or `timeout` elapses
    pub fn wait_for(&self, generation: u64, timeout: Duration) -> WaitOutcome {
        let deadline = Instant::now() + timeout;
        let mut others = Vec::new();
        loop {
            let remaining = deadline.saturating_duration_since(Instant::now());
            match self.rx.recv_timeout(remaining) {
                Ok(done) if done.generation == generation => {
                    return WaitOutcome::Ready(done, others);
                }
                Ok(done) => others.push(done),
                Err(RecvTimeoutError::Timeout) | Err(RecvTimeoutError::Disconnected) => {
                    return WaitOutcome::TimedOut(others);
                }
            }
        }
    }
}
