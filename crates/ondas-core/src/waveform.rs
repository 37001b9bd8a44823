//! Stateless waveform generators.
//!
//! Each function maps a phase value in [0, 1) to a signed sample in
//! approximately [-1, 1]. There is no internal state and no error
//! condition; callers own the phase counters (see [`crate::phase`]).
//!
//! The [`tilt`] distortion can transiently push a pulse sample outside
//! [-1, 1]; callers saturate before final output quantization.

/// Lower clamp bound for the saw/triangle morph mix.
///
/// Keeps both paths alive near the extremes so the blend stays continuous
/// and downstream processing never sees a fully disabled branch.
pub const MORPH_MIX_MIN: f32 = 0.005;

/// Upper clamp bound for the saw/triangle morph mix.
pub const MORPH_MIX_MAX: f32 = 0.995;

/// Sawtooth: linear ramp from -1 at phase 0 to +1 approaching phase 1.
#[inline]
pub fn saw(phase: f32) -> f32 {
    2.0 * phase - 1.0
}

/// Triangle: piecewise-linear, peak-to-peak exactly [-1, 1].
///
/// Rises on [0, 0.25), falls on [0.25, 0.75), rises again on [0.75, 1).
/// Continuous at both segment boundaries, so there is no step discontinuity
/// anywhere in the cycle.
#[inline]
pub fn triangle(phase: f32) -> f32 {
    if phase < 0.25 {
        phase * 4.0
    } else if phase < 0.75 {
        (0.5 - phase) * 4.0
    } else {
        (phase - 1.0) * 4.0
    }
}

/// Pulse: +1 while `phase <= threshold`, -1 after.
///
/// The step at the threshold is a hard edge by design. `threshold` is the
/// effective duty cycle after any PWM modulation; callers clamp it into
/// [0.1, 0.9] before the per-sample loop (see the pulse oscillator in
/// ondas-synth).
#[inline]
pub fn pulse(phase: f32, threshold: f32) -> f32 {
    if phase - threshold <= 0.0 { 1.0 } else { -1.0 }
}

/// Angle distortion: scales a sample by `1 - angle * phase`.
///
/// Tilts the flat portions of a pulse into ramps. `angle` is expected in
/// [0, 0.8]. The result is intentionally not clamped here; high angles can
/// transiently exceed [-1, 1] and the output boundary saturates.
#[inline]
pub fn tilt(sample: f32, angle: f32, phase: f32) -> f32 {
    sample * (1.0 - angle * phase)
}

/// Saw/triangle crossfade: `(1 - mix) * saw + mix * triangle`.
///
/// `mix` is clamped to [[`MORPH_MIX_MIN`], [`MORPH_MIX_MAX`]].
#[inline]
pub fn morph(phase: f32, mix: f32) -> f32 {
    let mix = mix.clamp(MORPH_MIX_MIN, MORPH_MIX_MAX);
    (1.0 - mix) * saw(phase) + mix * triangle(phase)
}
