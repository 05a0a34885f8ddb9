//! Profiler data file reader.
//!
//! Serves successive fixed-width sample record windows from a data file
//! downloaded off the profiler's STC Imodem logger. This is the I/O side of
//! the pipeline: the parser core never touches a file, it only consumes the
//! windows a reader hands it.
//!
//! ## Performance Notes
//!
//! - File data is loaded into memory at construction time
//! - Window reads are O(1) slice copies
//! - Repositioning from a persisted state is O(1)

use super::format::SAMPLE_BYTES;
use crate::source::RecordSource;
use crate::types::ParseState;
use crate::{Result, WfpError};
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::{trace, warn};

/// Fixed-width record reader over a profiler data stream.
pub struct WfpFileReader {
    data: Vec<u8>,
    position: usize,
    path: PathBuf,
    total_records: usize,
}

impl WfpFileReader {
    /// Open a profiler data file for reading.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut file = File::open(&path)
            .map_err(|e| WfpError::File { path: path.as_ref().to_path_buf(), source: e })?;

        let mut data = Vec::new();
        file.read_to_end(&mut data)
            .map_err(|e| WfpError::File { path: path.as_ref().to_path_buf(), source: e })?;

        Ok(Self::from_bytes_with_path(data, path.as_ref().to_path_buf()))
    }

    /// Create a reader over in-memory stream bytes.
    pub fn from_bytes(data: &[u8]) -> Self {
        Self::from_bytes_with_path(data.to_vec(), PathBuf::from("<memory>"))
    }

    fn from_bytes_with_path(data: Vec<u8>, path: PathBuf) -> Self {
        let total_records = data.len() / SAMPLE_BYTES;
        let trailing = data.len() % SAMPLE_BYTES;
        if trailing != 0 {
            warn!(
                "stream length {} is not a whole number of {} byte records ({} trailing bytes)",
                data.len(),
                SAMPLE_BYTES,
                trailing
            );
        }

        Self { data, position: 0, path, total_records }
    }

    /// Number of whole sample records in the stream.
    pub fn total_records(&self) -> usize {
        self.total_records
    }

    /// Current byte offset into the stream.
    pub fn position(&self) -> usize {
        self.position
    }

    /// The file path this reader was opened from.
    pub fn file_path(&self) -> &Path {
        &self.path
    }

    /// Reposition the reader to a persisted parse state.
    ///
    /// The offset must lie on a record boundary inside the stream; anything
    /// else indicates the state belongs to a different stream and fails with
    /// [`WfpError::State`].
    pub fn resume(&mut self, state: &ParseState) -> Result<()> {
        let position = usize::try_from(state.position()).map_err(|_| {
            WfpError::state_error(format!(
                "resume offset {} does not fit in addressable memory",
                state.position()
            ))
        })?;

        if position > self.data.len() {
            return Err(WfpError::state_error(format!(
                "resume offset {} is beyond the {} byte stream",
                position,
                self.data.len()
            )));
        }

        if position % SAMPLE_BYTES != 0 {
            return Err(WfpError::state_error(format!(
                "resume offset {position} is not a {SAMPLE_BYTES} byte record boundary"
            )));
        }

        self.position = position;
        Ok(())
    }
}

impl RecordSource for WfpFileReader {
    /// Read the next record window.
    ///
    /// Returns the next [`SAMPLE_BYTES`]-sized window, the shorter tail once
    /// at end-of-data, then `None`.
    fn next_record(&mut self) -> Result<Option<Vec<u8>>> {
        if self.position >= self.data.len() {
            return Ok(None);
        }

        let start = self.position;
        let end = (start + SAMPLE_BYTES).min(self.data.len());
        let window = self.data[start..end].to_vec();
        trace!("serving {} byte window at offset {}", window.len(), start);

        self.position = end;
        Ok(Some(window))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::build_sample_record;

    fn two_record_stream() -> Vec<u8> {
        let mut data = build_sample_record(10, [0.0; 4], [0; 3]);
        data.extend_from_slice(&build_sample_record(36, [0.0; 4], [0; 3]));
        data
    }

    #[test]
    fn serves_full_windows_then_none() {
        let data = two_record_stream();
        let mut reader = WfpFileReader::from_bytes(&data);

        assert_eq!(reader.total_records(), 2);

        let first = reader.next_record().unwrap().expect("first window");
        assert_eq!(first.len(), SAMPLE_BYTES);
        assert_eq!(first, &data[..SAMPLE_BYTES]);

        let second = reader.next_record().unwrap().expect("second window");
        assert_eq!(second, &data[SAMPLE_BYTES..]);

        assert!(reader.next_record().unwrap().is_none());
        assert!(reader.next_record().unwrap().is_none());
    }

    #[test]
    fn serves_short_tail_exactly_once() {
        let mut data = build_sample_record(10, [0.0; 4], [0; 3]);
        data.extend_from_slice(&[1, 2, 3, 4, 5]);
        let mut reader = WfpFileReader::from_bytes(&data);

        assert_eq!(reader.total_records(), 1);
        assert_eq!(reader.next_record().unwrap().unwrap().len(), SAMPLE_BYTES);

        let tail = reader.next_record().unwrap().expect("short tail window");
        assert_eq!(tail, vec![1, 2, 3, 4, 5]);

        assert!(reader.next_record().unwrap().is_none());
    }

    #[test]
    fn empty_stream_is_immediately_exhausted() {
        let mut reader = WfpFileReader::from_bytes(&[]);
        assert_eq!(reader.total_records(), 0);
        assert!(reader.next_record().unwrap().is_none());
    }

    #[test]
    fn resume_repositions_to_a_record_boundary() {
        let data = two_record_stream();
        let mut reader = WfpFileReader::from_bytes(&data);

        reader.resume(&ParseState::at_position(SAMPLE_BYTES as u64)).expect("valid offset");
        assert_eq!(reader.position(), SAMPLE_BYTES);

        let window = reader.next_record().unwrap().expect("second record");
        assert_eq!(window, &data[SAMPLE_BYTES..]);
    }

    #[test]
    fn resume_rejects_offsets_outside_the_stream() {
        let mut reader = WfpFileReader::from_bytes(&two_record_stream());
        let error = reader
            .resume(&ParseState::at_position(10 * SAMPLE_BYTES as u64))
            .expect_err("offset beyond stream");
        assert!(matches!(error, WfpError::State { .. }));
    }

    #[test]
    fn resume_rejects_mid_record_offsets() {
        let mut reader = WfpFileReader::from_bytes(&two_record_stream());
        let error =
            reader.resume(&ParseState::at_position(13)).expect_err("offset inside a record");
        assert!(matches!(error, WfpError::State { .. }));
    }

    #[test]
    fn open_surfaces_missing_file_as_file_error() {
        let error = WfpFileReader::open("/nonexistent/E0000000.DAT")
            .err()
            .expect("missing file should fail");
        assert!(matches!(error, WfpError::File { .. }));
    }
}
