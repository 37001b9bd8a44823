//! Raw host parameter encoding.
//!
//! Hardware hosts deliver knob positions as 10-bit integers. These helpers
//! convert between that encoding and the unit-range floats the DSP setters
//! take.

/// Largest raw value of a 10-bit host parameter.
pub const PARAM_10BIT_MAX: i32 = 1023;

/// Convert a raw 10-bit parameter (0..=1023) to a float in [0.0, 1.0].
///
/// Out-of-range raw values are clamped first.
#[inline]
pub fn param_10bit_to_f32(raw: i32) -> f32 {
    raw.clamp(0, PARAM_10BIT_MAX) as f32 * (1.0 / PARAM_10BIT_MAX as f32)
}

/// Convert a float in [0.0, 1.0] back to the raw 10-bit encoding,
/// rounding to the nearest step.
#[inline]
pub fn param_f32_to_10bit(value: f32) -> i32 {
    (value.clamp(0.0, 1.0) * PARAM_10BIT_MAX as f32 + 0.5) as i32
}
