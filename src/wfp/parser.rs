//! Stream parser for PAR sample records.
//!
//! Drives record-by-record extraction over an unbounded byte stream,
//! maintaining resumable offset state and deriving NTP timestamps. The
//! parser performs no I/O; callers (or [`ParticleStream`]) feed it windows
//! obtained from a [`RecordSource`].

use super::format::{self, ParadSample, SAMPLE_BYTES};
use crate::Result;
use crate::ntp;
use crate::source::RecordSource;
use crate::types::{ParseState, Particle};
use tracing::{debug, trace};

/// Outcome of one [`ParadParser::parse_next_record`] call.
///
/// End-of-data and decode failure are distinct conditions: a short buffer is
/// the normal stream boundary, while a full-width record that fails to
/// unpack is a genuine error surfaced through `Err`.
#[derive(Debug, Clone, PartialEq)]
pub enum ParseOutcome {
    /// A record was decoded. The state snapshot is a deep copy reflecting
    /// every byte consumed so far, suitable for persisting.
    Sample { particle: Particle, state: ParseState },
    /// The supplied buffer was shorter than one record; state is unchanged.
    EndOfStream,
}

/// Parser for the PAR instrument record stream.
#[derive(Debug, Clone, Default)]
pub struct ParadParser {
    state: ParseState,
    current_timestamp: f64,
}

impl ParadParser {
    /// Parser for a stream that has not been read yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parser resuming at a previously persisted offset.
    pub fn resume(state: ParseState) -> Self {
        Self { state, current_timestamp: 0.0 }
    }

    /// Consumed-byte state as of the last successfully decoded record.
    pub fn state(&self) -> &ParseState {
        &self.state
    }

    /// NTP timestamp of the most recently seen record, `0.0` before the
    /// first one.
    pub fn current_timestamp(&self) -> f64 {
        self.current_timestamp
    }

    /// Parse the next candidate record buffer from the stream.
    ///
    /// A buffer shorter than [`SAMPLE_BYTES`] is the end-of-data boundary
    /// and yields [`ParseOutcome::EndOfStream`] with no state change.
    /// Otherwise the leading timestamp is converted to NTP-epoch seconds,
    /// the full record is decoded, and on success the internal state
    /// advances by exactly [`SAMPLE_BYTES`] before a snapshot is returned
    /// with the particle. On decode failure the error propagates and the
    /// state is untouched, leaving the stream resumable at the failed
    /// record's start.
    pub fn parse_next_record(&mut self, record: &[u8]) -> Result<ParseOutcome> {
        if record.len() < SAMPLE_BYTES {
            trace!("short window of {} bytes, treating as end of stream", record.len());
            return Ok(ParseOutcome::EndOfStream);
        }

        // The leading timestamp is readable independently of the full
        // decode; it becomes the particle's authoritative time.
        let wfp_seconds = format::record_timestamp(record)?;
        let ntp_timestamp = ntp::unix_to_ntp(wfp_seconds);
        debug!("converting record timestamp {} to ntp timestamp {}", wfp_seconds, ntp_timestamp);
        self.current_timestamp = ntp_timestamp;

        let sample = ParadSample::decode(record)?;
        let particle = Particle::from_sample(&sample, record, ntp_timestamp);

        self.state.advance(SAMPLE_BYTES as u64);
        let snapshot = self.state.clone();
        trace!("emitting particle with read state {:?}", snapshot);

        Ok(ParseOutcome::Sample { particle, state: snapshot })
    }
}

/// Iterator driver pairing a [`RecordSource`] with a [`ParadParser`].
///
/// Yields one `(Particle, ParseState)` pair per decoded record and stops at
/// the stream boundary. Errors are yielded as items; the caller owns the
/// abort-vs-skip policy and may keep iterating after an error, which skips
/// past the failed window.
#[derive(Debug)]
pub struct ParticleStream<S> {
    source: S,
    parser: ParadParser,
}

impl<S: RecordSource> ParticleStream<S> {
    /// Stream over a source that has not been read yet.
    pub fn new(source: S) -> Self {
        Self { source, parser: ParadParser::new() }
    }

    /// Stream resuming from a persisted parser state.
    ///
    /// The source must already be positioned at the matching offset (see
    /// [`WfpFileReader::resume`](crate::wfp::WfpFileReader::resume)).
    pub fn resume(source: S, state: ParseState) -> Self {
        Self { source, parser: ParadParser::resume(state) }
    }

    /// The parser driving this stream.
    pub fn parser(&self) -> &ParadParser {
        &self.parser
    }

    /// Consume the stream, returning the underlying source.
    pub fn into_source(self) -> S {
        self.source
    }
}

impl<S: RecordSource> Iterator for ParticleStream<S> {
    type Item = Result<(Particle, ParseState)>;

    fn next(&mut self) -> Option<Self::Item> {
        let record = match self.source.next_record() {
            Ok(Some(record)) => record,
            Ok(None) => return None,
            Err(e) => return Some(Err(e)),
        };

        match self.parser.parse_next_record(&record) {
            Ok(ParseOutcome::Sample { particle, state }) => Some(Ok((particle, state))),
            Ok(ParseOutcome::EndOfStream) => None,
            Err(e) => Some(Err(e)),
        }
    }
}
