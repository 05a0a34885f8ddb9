//! Record source trait for data streams.

use crate::Result;

/// Trait for sources of fixed-width sample records.
///
/// Sources abstract over where the byte stream comes from (data file,
/// in-memory buffer, test harness) and handle their own buffering. The
/// parser core never performs I/O itself; it only consumes the windows a
/// source hands it.
pub trait RecordSource {
    /// Get the next record window from the stream.
    ///
    /// Returns:
    /// - `Ok(Some(bytes))` - the next window; a full record is
    ///   [`SAMPLE_BYTES`](crate::wfp::SAMPLE_BYTES) long, and a shorter
    ///   window signals the end-of-data boundary
    /// - `Ok(None)` - stream exhausted (normal termination)
    /// - `Err(e)` - error reading the underlying stream
    fn next_record(&mut self) -> Result<Option<Vec<u8>>>;
}
