//! PAR sample wire format and record decoding.
//!
//! Defines the binary layout of the fixed-width sample records the STC
//! Imodem telemeters for the PAR sensor, and provides the decoder from one
//! raw record to a typed sample.
//!
//! ## Record Layout
//!
//! Each record is exactly [`SAMPLE_BYTES`] bytes, big-endian, no padding:
//!
//! ```text
//! offset  0   u32   seconds since the instrument epoch
//! offset  4   f32   engineering field (undocumented, discarded)
//! offset  8   f32   engineering field (undocumented, discarded)
//! offset 12   f32   engineering field (undocumented, discarded)
//! offset 16   f32   PAR value
//! offset 20   i16   reserved (discarded)
//! offset 22   i16   reserved (discarded)
//! offset 24   i16   reserved (discarded)
//! ```
//!
//! Only the timestamp and the PAR value are semantic output. The remaining
//! fields must still parse at their declared widths for the record to be
//! considered well formed; their meaning is not documented by the vendor and
//! they are never exposed.

use crate::types::{FieldValue, ParticleBuilder, ParticleValue};
use crate::{Result, WfpError};
use tracing::trace;

/// Fixed sample record width in bytes: one u32, four f32s, three i16s.
pub const SAMPLE_BYTES: usize = 26;

/// Stream tag for PAR instrument particles.
pub const PARAD_K_INSTRUMENT: &str = "parad_k__stc_imodem_instrument";

// Byte offsets of the semantic fields
const TIMESTAMP_OFFSET: usize = 0;
const PAR_VALUE_OFFSET: usize = 16;

// Offsets of the width-validated, discarded fields
const DISCARDED_FLOAT_OFFSETS: [usize; 3] = [4, 8, 12];
const RESERVED_SHORT_OFFSETS: [usize; 3] = [20, 22, 24];

/// One decoded PAR sample record.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParadSample {
    wfp_timestamp: u32,
    par_value: f32,
}

impl ParadSample {
    /// Decode a raw sample record.
    ///
    /// The buffer must be exactly [`SAMPLE_BYTES`] long; both short and
    /// oversized buffers fail with [`WfpError::SampleDecode`] carrying the
    /// offending bytes. No partial sample is ever produced.
    pub fn decode(record: &[u8]) -> Result<Self> {
        if record.len() != SAMPLE_BYTES {
            return Err(WfpError::sample_decode(
                record,
                format!("expected exactly {SAMPLE_BYTES} bytes, got {}", record.len()),
            ));
        }

        let fail = |e: WfpError| WfpError::sample_decode(record, e.to_string());

        let wfp_timestamp = parse_u32_be(record, TIMESTAMP_OFFSET).map_err(fail)?;

        for offset in DISCARDED_FLOAT_OFFSETS {
            parse_f32_be(record, offset).map_err(fail)?;
        }

        let par_value = parse_f32_be(record, PAR_VALUE_OFFSET).map_err(fail)?;

        for offset in RESERVED_SHORT_OFFSETS {
            parse_i16_be(record, offset).map_err(fail)?;
        }

        trace!("decoded PAR sample: wfp_timestamp={}, par_val_v={}", wfp_timestamp, par_value);

        Ok(Self { wfp_timestamp, par_value })
    }

    /// Record timestamp in whole seconds of the instrument epoch.
    pub fn wfp_timestamp(&self) -> u32 {
        self.wfp_timestamp
    }

    /// PAR reading, preserved bit-for-bit with no scaling applied.
    pub fn par_value(&self) -> f32 {
        self.par_value
    }
}

impl ParticleBuilder for ParadSample {
    fn particle_type(&self) -> &'static str {
        PARAD_K_INSTRUMENT
    }

    fn particle_values(&self) -> Vec<ParticleValue> {
        // Order is part of the downstream contract: timestamp, then PAR value
        vec![
            ParticleValue {
                value_id: "wfp_timestamp",
                value: FieldValue::UInt32(self.wfp_timestamp),
            },
            ParticleValue { value_id: "par_val_v", value: FieldValue::Float32(self.par_value) },
        ]
    }
}

/// Read the leading record timestamp without decoding the full sample.
///
/// The stream parser derives its current NTP timestamp from this field
/// before attempting the full decode.
pub fn record_timestamp(record: &[u8]) -> Result<u32> {
    parse_u32_be(record, TIMESTAMP_OFFSET)
        .map_err(|e| WfpError::sample_decode(record, e.to_string()))
}

/// Safe byte parsing helpers with bounds checking
fn parse_u32_be(data: &[u8], offset: usize) -> Result<u32> {
    let bytes = data.get(offset..offset + 4).ok_or_else(|| {
        WfpError::parse_error(
            "u32 field",
            format!(
                "insufficient data at offset {} (need 4 bytes, have {})",
                offset,
                data.len().saturating_sub(offset)
            ),
        )
    })?;
    Ok(u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
}

fn parse_f32_be(data: &[u8], offset: usize) -> Result<f32> {
    let bytes = data.get(offset..offset + 4).ok_or_else(|| {
        WfpError::parse_error(
            "f32 field",
            format!(
                "insufficient data at offset {} (need 4 bytes, have {})",
                offset,
                data.len().saturating_sub(offset)
            ),
        )
    })?;
    Ok(f32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
}

fn parse_i16_be(data: &[u8], offset: usize) -> Result<i16> {
    let bytes = data.get(offset..offset + 2).ok_or_else(|| {
        WfpError::parse_error(
            "i16 field",
            format!(
                "insufficient data at offset {} (need 2 bytes, have {})",
                offset,
                data.len().saturating_sub(offset)
            ),
        )
    })?;
    Ok(i16::from_be_bytes([bytes[0], bytes[1]]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::build_sample_record;

    #[test]
    fn decodes_known_record_fields() {
        let record = build_sample_record(1_000_000_000, [0.1, 0.2, 0.3, 1.5], [1, -2, 3]);
        let sample = ParadSample::decode(&record).expect("record should decode");

        assert_eq!(sample.wfp_timestamp(), 1_000_000_000);
        assert_eq!(sample.par_value(), 1.5);
    }

    #[test]
    fn short_buffer_fails_without_partial_result() {
        for len in [0, 1, 4, SAMPLE_BYTES - 1] {
            let record = vec![0u8; len];
            let error = ParadSample::decode(&record).expect_err("short buffer must not decode");
            match error {
                WfpError::SampleDecode { record: captured, .. } => {
                    assert_eq!(captured.len(), len, "error should carry the offending bytes");
                }
                other => panic!("Expected SampleDecode error, got {other:?}"),
            }
        }
    }

    #[test]
    fn oversized_buffer_fails_to_decode() {
        let mut record = build_sample_record(100, [0.0; 4], [0; 3]);
        record.push(0xFF);

        let error = ParadSample::decode(&record).expect_err("oversized buffer must not decode");
        assert!(error.is_sample_error());
        assert!(error.to_string().contains("27"));
    }

    #[test]
    fn particle_payload_is_timestamp_then_par_value() {
        let record = build_sample_record(1_358_366_393, [9.0, 9.0, 9.0, 2.75], [0, 0, 0]);
        let sample = ParadSample::decode(&record).unwrap();

        assert_eq!(sample.particle_type(), PARAD_K_INSTRUMENT);

        let values = sample.particle_values();
        assert_eq!(values.len(), 2);
        assert_eq!(values[0].value_id, "wfp_timestamp");
        assert_eq!(values[0].value, FieldValue::UInt32(1_358_366_393));
        assert_eq!(values[1].value_id, "par_val_v");
        assert_eq!(values[1].value, FieldValue::Float32(2.75));
    }

    #[test]
    fn leading_timestamp_matches_full_decode() {
        let record = build_sample_record(42, [0.0; 4], [0; 3]);
        let sample = ParadSample::decode(&record).unwrap();
        assert_eq!(record_timestamp(&record).unwrap(), sample.wfp_timestamp());
    }

    #[test]
    fn leading_timestamp_requires_four_bytes() {
        let error = record_timestamp(&[0xAB, 0xCD]).expect_err("two bytes cannot hold a u32");
        assert!(error.is_sample_error());
    }

    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn any_valid_record_round_trips_bit_for_bit(
                timestamp in any::<u32>(),
                float_bits in [any::<u32>(), any::<u32>(), any::<u32>(), any::<u32>()],
                shorts in [any::<i16>(), any::<i16>(), any::<i16>()]
            ) {
                let floats = float_bits.map(f32::from_bits);
                let record = build_sample_record(timestamp, floats, shorts);
                prop_assert_eq!(record.len(), SAMPLE_BYTES);

                let sample = ParadSample::decode(&record).expect("well-formed record must decode");
                prop_assert_eq!(sample.wfp_timestamp(), timestamp);
                // Bit comparison keeps NaN payloads honest
                prop_assert_eq!(sample.par_value().to_bits(), float_bits[3]);
            }

            #[test]
            fn any_wrong_length_buffer_is_rejected(
                data in prop::collection::vec(any::<u8>(), 0..64)
                    .prop_filter("wrong length only", |d| d.len() != SAMPLE_BYTES)
            ) {
                let error = ParadSample::decode(&data).expect_err("wrong length must fail");
                prop_assert!(error.is_sample_error());
            }
        }
    }
}
