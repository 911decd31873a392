//! Brightness arithmetic.
//!
//! Conversions between raw controller values and percentages, plus the
//! request ([`adjustment`]) and fade ([`fade`]) value objects built on them.

pub mod adjustment;
pub mod fade;

use crate::util::normalize;

/// The lowest raw value a controller can take
pub const MINIMUM_RAW_BRIGHTNESS: u64 = 0;

/// Lower bound of a percent brightness
pub const MINIMUM_PERCENT: f64 = 0.0;

/// Upper bound of a percent brightness
pub const MAXIMUM_PERCENT: f64 = 100.0;

/// Convert a raw controller value into a percentage of `max`.
pub fn percent_from_raw(raw: u64, max: u64) -> f64 {
    raw as f64 / max as f64 * 100.0
}

/// Convert a percentage of `max` into a raw value, truncating toward zero.
///
/// The result is not clamped; pass it through [`clamp_raw`] before writing.
pub fn raw_from_percent(percent: f64, max: u64) -> i64 {
    (percent * max as f64 / 100.0).trunc() as i64
}

/// Clamp a raw value into `[MINIMUM_RAW_BRIGHTNESS, max]`.
pub fn clamp_raw(raw: i64, max: u64) -> u64 {
    let max = i64::try_from(max).unwrap_or(i64::MAX);
    normalize(raw, MINIMUM_RAW_BRIGHTNESS as i64, max) as u64
}
