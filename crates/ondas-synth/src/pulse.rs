//! Pulse oscillator with PWM and angle distortion.
//!
//! A single-lane pulse/square oscillator. The duty cycle can be modulated
//! by a per-block PWM offset (typically a shape LFO sampled by the host
//! once per callback); the offset is interpolated linearly across the
//! block so the pulse width glides instead of stepping.

use ondas_core::events::FLAG_RESET;
use ondas_core::{PendingEvents, PhaseAccumulator, pulse, tilt};

/// Effective duty cycle is always kept inside this window, whatever the
/// base duty and PWM offset add up to.
const DUTY_MIN: f32 = 0.1;
const DUTY_MAX: f32 = 0.9;

/// Hard-edged pulse oscillator with duty, PWM, and angle tilt.
///
/// The step at the duty threshold is intentional — this generator is not
/// band-limited. The angle distortion multiplies the raw ±1 output by
/// `1 - angle * phase`, tilting the flat portions into ramps; for the
/// angle range [0, 0.8] the result stays within [-1, 1], and no extra
/// clamp is applied before output.
#[derive(Debug, Default)]
pub struct PulseOscillator {
    acc: PhaseAccumulator,
    /// Base duty cycle in [0.1, 0.9], before PWM offset.
    duty: f32,
    /// Angle distortion amount in [0, 0.8].
    angle: f32,
    /// PWM offset reached at the end of the previous block.
    lfoz: f32,
    events: PendingEvents,
}

impl PulseOscillator {
    /// Create a pulse oscillator at the narrowest duty cycle.
    pub fn new() -> Self {
        Self {
            acc: PhaseAccumulator::new(),
            duty: DUTY_MIN,
            angle: 0.0,
            lfoz: 0.0,
            events: PendingEvents::new(),
        }
    }

    /// Set the base duty cycle from a unit control value in [0, 1].
    pub fn set_shape(&mut self, value: f32) {
        self.duty = DUTY_MIN + value.clamp(0.0, 1.0) * (DUTY_MAX - DUTY_MIN);
    }

    /// Set the angle distortion from a unit control value in [0, 1].
    pub fn set_angle(&mut self, value: f32) {
        self.angle = 0.8 * value.clamp(0.0, 1.0);
    }

    /// Base duty cycle currently in effect.
    pub fn duty(&self) -> f32 {
        self.duty
    }

    /// Mark a note-on: phase restarts at the next block boundary.
    pub fn note_on(&mut self) {
        self.events.raise(FLAG_RESET);
    }

    /// Render one block.
    ///
    /// `w` is the per-sample phase increment for the current note;
    /// `shape_lfo` is the PWM offset for this block, reached by linear
    /// interpolation from the previous block's value. A pending reset
    /// zeroes the phase and snaps the interpolator to the new LFO value
    /// so a fresh note does not glide in from stale modulation.
    pub fn process_block(&mut self, w: f32, shape_lfo: f32, out: &mut [f32]) {
        let flags = self.events.take();

        let w = w.max(0.0);
        if flags & FLAG_RESET != 0 {
            self.acc.reset();
            self.lfoz = shape_lfo;
        }

        let mut lfoz = self.lfoz;
        let lfo_inc = (shape_lfo - lfoz) / out.len() as f32;

        for sample in out.iter_mut() {
            let threshold = (self.duty + lfoz).clamp(DUTY_MIN, DUTY_MAX);
            let phase = self.acc.tick(w);
            *sample = tilt(pulse(phase, threshold), self.angle, phase);
            lfoz += lfo_inc;
        }

        self.lfoz = lfoz;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SR: f32 = 48000.0;

    #[test]
    fn duty_cycle_controls_positive_fraction() {
        let mut osc = PulseOscillator::new();
        osc.set_shape(0.5); // duty = 0.5
        osc.note_on();

        let w = 100.0 / SR;
        let mut block = [0.0; 48000];
        osc.process_block(w, 0.0, &mut block);

        let positive = block.iter().filter(|&&s| s > 0.0).count();
        let ratio = positive as f32 / block.len() as f32;
        assert!(
            (ratio - 0.5).abs() < 0.02,
            "expected ~50% positive, got {:.1}%",
            ratio * 100.0
        );
    }

    #[test]
    fn output_bipolar_without_angle() {
        let mut osc = PulseOscillator::new();
        osc.set_shape(0.25);
        osc.note_on();
        let mut block = [0.0; 1024];
        osc.process_block(440.0 / SR, 0.0, &mut block);
        for &s in &block {
            assert!(s == 1.0 || s == -1.0);
        }
    }

    #[test]
    fn angle_tilts_but_stays_in_range() {
        let mut osc = PulseOscillator::new();
        osc.set_shape(0.5);
        osc.set_angle(1.0); // angle = 0.8
        osc.note_on();
        let mut block = [0.0; 4096];
        osc.process_block(440.0 / SR, 0.0, &mut block);
        let mut saw_non_unit = false;
        for &s in &block {
            assert!(s.abs() <= 1.0 + 1e-6, "tilted sample {s} out of range");
            if s.abs() < 0.999 {
                saw_non_unit = true;
            }
        }
        assert!(saw_non_unit, "angle had no effect");
    }

    #[test]
    fn pwm_offset_clamps_threshold() {
        let mut osc = PulseOscillator::new();
        osc.set_shape(1.0); // duty = 0.9
        osc.note_on();
        // Large positive PWM would push past 0.9; the clamp keeps some
        // negative portion in every cycle.
        let mut block = [0.0; 48000];
        osc.process_block(100.0 / SR, 0.5, &mut block);
        assert!(block.iter().any(|&s| s < 0.0), "threshold clamp failed");
    }

    #[test]
    fn lfo_interpolates_across_block() {
        let mut osc = PulseOscillator::new();
        osc.set_shape(0.5);
        osc.note_on();

        let mut warmup = [0.0; 64];
        osc.process_block(100.0 / SR, 0.0, &mut warmup);
        // Next block targets a different PWM value; lfoz must land on it.
        let mut block = [0.0; 64];
        osc.process_block(100.0 / SR, 0.2, &mut block);
        assert!((osc.lfoz - 0.2).abs() < 1e-4);
    }

    #[test]
    fn reset_snaps_lfo_state() {
        let mut osc = PulseOscillator::new();
        osc.set_shape(0.5);
        osc.note_on();
        let mut block = [0.0; 64];
        osc.process_block(100.0 / SR, -0.3, &mut block);

        osc.note_on();
        osc.process_block(100.0 / SR, 0.3, &mut block);
        // After the reset the interpolator starts at the new value, so it
        // ends there too.
        assert!((osc.lfoz - 0.3).abs() < 1e-5);
    }
}
