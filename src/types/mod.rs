//! Core types for profiler telemetry output.
//!
//! This module provides the foundational data structures shared by the
//! instrument decoders and the stream parser:
//! - [`Particle`] is the externally visible output record: a stream tag, an
//!   authoritative NTP-epoch timestamp, and an ordered name/value payload
//! - [`ParticleBuilder`] is the seam instrument-specific sample types
//!   implement to produce their particle payload
//! - [`ParseState`] is the resumable consumed-byte bookkeeping that lets a
//!   stream be parsed incrementally across chunks and process restarts

mod particle;
mod state;

// Re-export all public types
pub use particle::{FieldValue, Particle, ParticleBuilder, ParticleValue};
pub use state::ParseState;
