//! Instrument-epoch to NTP-epoch timestamp conversion.
//!
//! The profiler's controller clock reports whole seconds in a POSIX-style
//! epoch (1970-01-01). Downstream consumers order particles by NTP-epoch
//! timestamps (1900-01-01), so every record timestamp is shifted by the fixed
//! offset between the two epochs. The conversion is a pure affine map; the
//! same input always yields the same output.

/// Seconds between the NTP epoch (1900-01-01) and the Unix epoch (1970-01-01).
///
/// 70 years, including 17 leap days: (70 * 365 + 17) * 86400.
pub const NTP_UNIX_EPOCH_DELTA_SECONDS: u64 = 2_208_988_800;

/// Convert whole seconds in the instrument's POSIX-style epoch to NTP-epoch
/// seconds.
///
/// The widened `f64` result is exact: every `u32` second count plus the epoch
/// delta fits well inside f64's 53-bit integer range.
pub fn unix_to_ntp(seconds: u32) -> f64 {
    seconds as f64 + NTP_UNIX_EPOCH_DELTA_SECONDS as f64
}
