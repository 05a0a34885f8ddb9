//! Particle representation and the builder seam for instrument decoders.

use serde::Serialize;

/// A single typed field value carried by a particle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    UInt32(u32),
    Float32(f32),
}

/// One named value in a particle's ordered payload.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ParticleValue {
    pub value_id: &'static str,
    pub value: FieldValue,
}

/// Capability implemented by instrument-specific sample types to produce
/// their particle payload.
///
/// Decoders yield a typed sample; this trait turns the sample into the tag
/// and ordered name/value list for its particle. Instrument decoders share
/// the particle machinery through this seam rather than through inheritance.
pub trait ParticleBuilder {
    /// Stream tag identifying the instrument/record kind.
    fn particle_type(&self) -> &'static str;

    /// Ordered name/value pairs for the particle payload. Order is part of
    /// the downstream contract and must be stable.
    fn particle_values(&self) -> Vec<ParticleValue>;
}

/// Structured, immutable output record: a stream tag, an authoritative
/// NTP-epoch timestamp, and an ordered list of named values.
#[derive(Debug, Clone, Serialize)]
pub struct Particle {
    #[serde(rename = "stream_name")]
    particle_type: &'static str,
    internal_timestamp: f64,
    #[serde(skip)]
    raw: Vec<u8>,
    values: Vec<ParticleValue>,
}

impl Particle {
    /// Build a particle from a decoded sample.
    ///
    /// `internal_timestamp` is NTP-epoch seconds, the authoritative time used
    /// for ordering. `raw` is the record the sample was decoded from; it
    /// participates in equality but is not serialized.
    pub fn from_sample(sample: &impl ParticleBuilder, raw: &[u8], internal_timestamp: f64) -> Self {
        Self {
            particle_type: sample.particle_type(),
            internal_timestamp,
            raw: raw.to_vec(),
            values: sample.particle_values(),
        }
    }

    /// Stream tag for this particle.
    pub fn particle_type(&self) -> &'static str {
        self.particle_type
    }

    /// Authoritative NTP-epoch timestamp in seconds.
    pub fn internal_timestamp(&self) -> f64 {
        self.internal_timestamp
    }

    /// Raw record bytes this particle was decoded from.
    pub fn raw(&self) -> &[u8] {
        &self.raw
    }

    /// Ordered payload values.
    pub fn values(&self) -> &[ParticleValue] {
        &self.values
    }
}

/// A particle has no identity beyond its raw bytes and derived timestamp.
impl PartialEq for Particle {
    fn eq(&self, other: &Self) -> bool {
        self.raw == other.raw && self.internal_timestamp == other.internal_timestamp
    }
}
