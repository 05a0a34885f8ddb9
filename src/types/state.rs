//! Resumable parse-state bookkeeping.

use serde::{Deserialize, Serialize};

/// Consumed-byte offset for a profiler data stream.
///
/// Owned by one stream parser and advanced by exactly one record width per
/// successfully decoded sample, never on failure. Each emitted particle
/// carries a deep copy so a caller can persist it and later resume parsing
/// from exactly that offset.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ParseState {
    position: u64,
}

impl ParseState {
    /// State for a stream that has not been read yet.
    pub fn new() -> Self {
        Self { position: 0 }
    }

    /// State for a stream already consumed up to `position` bytes.
    pub fn at_position(position: u64) -> Self {
        Self { position }
    }

    /// Total bytes consumed from the stream so far.
    pub fn position(&self) -> u64 {
        self.position
    }

    /// Advance past a consumed record. Called only after a successful decode.
    pub(crate) fn advance(&mut self, bytes: u64) {
        self.position += bytes;
    }
}
