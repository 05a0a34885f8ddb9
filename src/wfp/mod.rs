//! PAR sample stream reading and parsing support.
//!
//! This module provides the wire format and decoder for the fixed-width
//! sample records the STC Imodem telemeters, the resumable stream parser
//! that turns records into particles, and the file reader that serves
//! record windows to the parser.

pub mod format;
pub mod parser;
pub mod reader;

pub use format::{PARAD_K_INSTRUMENT, ParadSample, SAMPLE_BYTES, record_timestamp};
pub use parser::{ParadParser, ParseOutcome, ParticleStream};
pub use reader::WfpFileReader;
