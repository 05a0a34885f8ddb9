//! Type-safe Rust library for PAR sensor telemetry from wire-following
//! profiler data streams.
//!
//! Parwire decodes the fixed-width binary sample records a submersible PAR
//! (photosynthetically active radiation) sensor telemeters through an STC
//! Imodem, and emits one structured particle per record.
//!
//! # Features
//!
//! - **Record decoding**: big-endian, bounds-checked unpacking of the 26-byte
//!   sample wire format
//! - **Resumable parsing**: consumed-byte state snapshots let a stream be
//!   parsed incrementally across chunks and process restarts
//! - **Timestamp derivation**: instrument-epoch seconds converted to the
//!   NTP-epoch timestamps downstream consumers order by
//! - **Type safety**: malformed records fail with the offending bytes
//!   attached; the stream offset never advances past a record that did not
//!   decode
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use parwire::Parwire;
//!
//! fn main() -> parwire::Result<()> {
//!     for emitted in Parwire::open("/deployment/E0000001.DAT")? {
//!         let (particle, state) = emitted?;
//!         println!(
//!             "{} @ {} ({} bytes consumed)",
//!             particle.particle_type(),
//!             particle.internal_timestamp(),
//!             state.position()
//!         );
//!     }
//!     Ok(())
//! }
//! ```

// Core types and error handling
mod error;
pub mod ntp;
pub mod source;
#[cfg(any(test, feature = "benchmark"))]
pub mod test_utils;
pub mod types;

// Data source and parsing modules
pub mod wfp;

// Core exports
pub use error::*;
pub use source::RecordSource;
pub use types::*;

// Parsing exports
pub use wfp::{
    PARAD_K_INSTRUMENT, ParadParser, ParadSample, ParseOutcome, ParticleStream, SAMPLE_BYTES,
    WfpFileReader,
};

/// Unified entry point for profiler telemetry streams.
///
/// This factory provides a consistent API for starting a fresh parse of a
/// profiler data file and for resuming one from a persisted state.
///
/// # Examples
///
/// ## Fresh parse
/// ```rust,no_run
/// use parwire::Parwire;
///
/// # fn main() -> parwire::Result<()> {
/// let stream = Parwire::open("/deployment/E0000001.DAT")?;
/// # Ok(())
/// # }
/// ```
///
/// ## Resume from a persisted state
/// ```rust,no_run
/// use parwire::{ParseState, Parwire};
///
/// # fn main() -> parwire::Result<()> {
/// let state = ParseState::at_position(26);
/// let stream = Parwire::resume("/deployment/E0000001.DAT", state)?;
/// # Ok(())
/// # }
/// ```
pub struct Parwire;

impl Parwire {
    /// Open a profiler data file and stream particles from its start.
    ///
    /// # Errors
    ///
    /// Returns an error if the file does not exist or is not readable.
    pub fn open<P: AsRef<std::path::Path>>(path: P) -> Result<ParticleStream<WfpFileReader>> {
        Ok(ParticleStream::new(WfpFileReader::open(path)?))
    }

    /// Open a profiler data file and resume streaming from a persisted
    /// parse state.
    ///
    /// # Errors
    ///
    /// Returns an error if the file is not readable or the state's offset
    /// does not lie on a record boundary inside the file.
    pub fn resume<P: AsRef<std::path::Path>>(
        path: P,
        state: ParseState,
    ) -> Result<ParticleStream<WfpFileReader>> {
        let mut reader = WfpFileReader::open(path)?;
        reader.resume(&state)?;
        Ok(ParticleStream::resume(reader, state))
    }
}
