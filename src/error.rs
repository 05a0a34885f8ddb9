//! Error types for profiler telemetry processing.
//!
//! All errors implement the `std::error::Error` trait and carry structured
//! context for debugging and recovery decisions.
//!
//! ## Error Categories
//!
//! - **File Errors**: Problems reading profiler data files
//! - **Sample Decode Errors**: Malformed sample records that cannot be unpacked
//! - **Parse Errors**: Structural problems in the surrounding data stream
//! - **State Errors**: Invalid resume offsets or state bookkeeping violations
//!
//! End-of-data is *not* represented here: a buffer shorter than a full sample
//! record is a normal stream boundary and surfaces as
//! [`ParseOutcome::EndOfStream`](crate::ParseOutcome::EndOfStream), never as
//! an error.
//!
//! ## Abort vs. Skip
//!
//! A decode failure leaves the stream offset at the start of the bad record,
//! so callers choose the policy:
//!
//! ```rust
//! use parwire::WfpError;
//!
//! let error = WfpError::sample_decode(&[0u8; 3], "record too short");
//! if error.is_sample_error() {
//!     // a single bad record; skipping past it is sound
//! }
//! ```

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for telemetry operations.
pub type Result<T, E = WfpError> = std::result::Result<T, E>;

/// Main error type for profiler telemetry operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum WfpError {
    #[error("profiler data file error: {path}")]
    File {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to decode {} byte sample record: {details}", record.len())]
    SampleDecode { record: Vec<u8>, details: String },

    #[error("parse error in {context}: {details}")]
    Parse { context: String, details: String },

    #[error("parser state error: {details}")]
    State { details: String },
}

impl WfpError {
    /// Returns whether this error is confined to a single sample record.
    ///
    /// Sample-level errors leave the stream resumable at the failed record's
    /// start, so a caller may advance past the record and continue. File,
    /// parse, and state errors affect the whole stream and are not skippable.
    pub fn is_sample_error(&self) -> bool {
        match self {
            WfpError::SampleDecode { .. } => true,
            WfpError::File { .. } => false,
            WfpError::Parse { .. } => false,
            WfpError::State { .. } => false,
        }
    }

    /// Helper constructor for file errors with path context.
    pub fn file_error(path: PathBuf, source: std::io::Error) -> Self {
        WfpError::File { path, source }
    }

    /// Helper constructor for sample decode errors, capturing the offending
    /// record bytes alongside the cause.
    pub fn sample_decode(record: &[u8], details: impl Into<String>) -> Self {
        WfpError::SampleDecode { record: record.to_vec(), details: details.into() }
    }

    /// Helper constructor for stream parse errors.
    pub fn parse_error(context: impl Into<String>, details: impl Into<String>) -> Self {
        WfpError::Parse { context: context.into(), details: details.into() }
    }

    /// Helper constructor for parser state errors.
    pub fn state_error(details: impl Into<String>) -> Self {
        WfpError::State { details: details.into() }
    }
}

impl From<std::io::Error> for WfpError {
    fn from(err: std::io::Error) -> Self {
        WfpError::File { path: PathBuf::from("<unknown>"), source: err }
    }
}
