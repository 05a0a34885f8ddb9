//! Test utilities for building wire-format sample records.
//!
//! Shared by unit tests and benchmarks so every test site assembles records
//! through the same byte layout.

#![cfg(any(test, feature = "benchmark"))]

use crate::wfp::SAMPLE_BYTES;

/// Assemble one wire-format sample record from its typed fields.
///
/// Fields are written big-endian in wire order: the timestamp, the four
/// floats (the last one is the PAR value), then the three reserved shorts.
pub fn build_sample_record(timestamp: u32, floats: [f32; 4], shorts: [i16; 3]) -> Vec<u8> {
    let mut record = Vec::with_capacity(SAMPLE_BYTES);
    record.extend_from_slice(&timestamp.to_be_bytes());
    for float in floats {
        record.extend_from_slice(&float.to_be_bytes());
    }
    for short in shorts {
        record.extend_from_slice(&short.to_be_bytes());
    }
    debug_assert_eq!(record.len(), SAMPLE_BYTES);
    record
}

/// Concatenate consecutive sample records, one per `(timestamp, par_value)`
/// pair, with the undocumented fields zeroed.
pub fn build_sample_stream(samples: &[(u32, f32)]) -> Vec<u8> {
    let mut data = Vec::with_capacity(samples.len() * SAMPLE_BYTES);
    for (timestamp, par_value) in samples {
        data.extend_from_slice(&build_sample_record(
            *timestamp,
            [0.0, 0.0, 0.0, *par_value],
            [0; 3],
        ));
    }
    data
}
