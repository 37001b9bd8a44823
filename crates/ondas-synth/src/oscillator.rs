//! Multi-lane morphing oscillator with symmetric detune spread.
//!
//! Each lane is an independent phase accumulator; all lanes run the same
//! saw/triangle morph and are summed at equal weight `1/LANES`. Lane
//! frequencies fan out in equally spaced octave offsets centered on the
//! base pitch, so widening the spread thickens the sound without shifting
//! the perceived pitch.

use ondas_core::events::{FLAG_DETUNE_RANGE, FLAG_RESET};
use ondas_core::{PendingEvents, advance_phase, fast_exp2, lerp, morph};

/// Narrowest detune fan width in octaves (one semitone).
pub const MIN_DETUNE_OCTAVES: f32 = 0.0833;

/// Widest detune fan width in octaves.
pub const MAX_DETUNE_OCTAVES: f32 = 8.0;

/// Saw/triangle morphing oscillator with `LANES` detuned phase lanes.
///
/// The lane count is fixed at compile time (no allocation); a single
/// undetuned oscillator is just the `LANES = 1` special case.
///
/// # Event model
///
/// [`note_on`](Self::note_on) and [`set_detune_spread`](Self::set_detune_spread)
/// only raise pending flags. [`process_block`](Self::process_block) drains the
/// flags once at block start, recomputes the detune width if requested,
/// unconditionally re-derives lane increments from the host pitch, applies
/// any phase reset, and then runs the branch-free per-sample loop.
#[derive(Debug)]
pub struct MorphOscillator<const LANES: usize> {
    /// Per-lane phase, each in [0, 1).
    phases: [f32; LANES],
    /// Per-lane phase increment per sample.
    increments: [f32; LANES],
    /// Current full width of the detune fan in octaves.
    max_detune: f32,
    /// Events raised by the host side, drained once per block.
    events: PendingEvents,

    /// Saw/triangle mix: 0 = saw, 1 = triangle.
    morph_mix: f32,
    /// Detune spread control in [0, 1], mapped to octaves on the next
    /// block after a detune-range-changed flag.
    detune_spread: f32,
}

impl<const LANES: usize> Default for MorphOscillator<LANES> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const LANES: usize> MorphOscillator<LANES> {
    /// Create an oscillator with all phases at zero and the narrowest
    /// detune fan.
    pub fn new() -> Self {
        const { assert!(LANES > 0, "oscillator needs at least one lane") };
        Self {
            phases: [0.0; LANES],
            increments: [0.0; LANES],
            max_detune: MIN_DETUNE_OCTAVES,
            events: PendingEvents::new(),
            morph_mix: 0.0,
            detune_spread: 0.0,
        }
    }

    /// Set the saw/triangle mix (0 = saw, 1 = triangle).
    ///
    /// Applied immediately; the blend itself is clamped away from the
    /// extremes inside the generator.
    pub fn set_morph_mix(&mut self, mix: f32) {
        self.morph_mix = mix.clamp(0.0, 1.0);
    }

    /// Current saw/triangle mix.
    pub fn morph_mix(&self) -> f32 {
        self.morph_mix
    }

    /// Set the detune spread control in [0, 1].
    ///
    /// The value is stored immediately, but the octave width of the fan is
    /// only recomputed at the next block boundary (a flagged, block-granular
    /// update rather than a per-sample one).
    pub fn set_detune_spread(&mut self, spread: f32) {
        self.detune_spread = spread.clamp(0.0, 1.0);
        self.events.raise(FLAG_DETUNE_RANGE);
    }

    /// Current detune spread control value.
    pub fn detune_spread(&self) -> f32 {
        self.detune_spread
    }

    /// Mark a note-on: all lane phases will be zeroed at the next block
    /// boundary. Callable from a host event context.
    pub fn note_on(&mut self) {
        self.events.raise(FLAG_RESET);
    }

    /// Current detune fan width in octaves (updated at block boundaries).
    pub fn max_detune(&self) -> f32 {
        self.max_detune
    }

    /// Per-lane increments as last derived. Test/diagnostic use.
    pub fn increments(&self) -> &[f32; LANES] {
        &self.increments
    }

    /// Derive per-lane increments from the base increment `w`.
    ///
    /// Lanes sit at equally spaced octave offsets spanning
    /// `[-max_detune/2, +max_detune/2]`; the mean offset is zero, so the
    /// center pitch is invariant under spread changes. A single lane gets
    /// `w` exactly, untouched by detune.
    fn update_pitch(&mut self, w: f32) {
        let w = w.max(0.0);
        if LANES == 1 {
            self.increments[0] = w;
            return;
        }

        let step = self.max_detune / (LANES - 1) as f32;
        let mut offset = -self.max_detune / 2.0;
        for increment in &mut self.increments {
            *increment = w * fast_exp2(offset);
            offset += step;
        }
    }

    /// Render one block of samples.
    ///
    /// `w` is the per-sample phase increment for the current note
    /// (frequency / sample rate), re-read every block so pitch always
    /// tracks the host even without an explicit event.
    pub fn process_block(&mut self, w: f32, out: &mut [f32]) {
        // Drain pending events exactly once, at the block boundary.
        let flags = self.events.take();

        if flags & FLAG_DETUNE_RANGE != 0 {
            self.max_detune = lerp(MIN_DETUNE_OCTAVES, MAX_DETUNE_OCTAVES, self.detune_spread);
        }

        self.update_pitch(w);

        if flags & FLAG_RESET != 0 {
            self.phases = [0.0; LANES];
        }

        let mix = self.morph_mix;
        let scale = 1.0 / LANES as f32;

        for sample in out.iter_mut() {
            let mut sig = 0.0;
            for i in 0..LANES {
                sig += morph(self.phases[i], mix);
                self.phases[i] = advance_phase(self.phases[i], self.increments[i]);
            }
            *sample = sig * scale;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SR: f32 = 48000.0;

    fn base_increment(freq: f32) -> f32 {
        freq / SR
    }

    #[test]
    fn single_lane_ignores_detune() {
        let mut osc: MorphOscillator<1> = MorphOscillator::new();
        osc.set_detune_spread(1.0);
        let w = base_increment(440.0);
        let mut block = [0.0; 16];
        osc.process_block(w, &mut block);
        assert_eq!(osc.increments()[0], w);
    }

    #[test]
    fn three_lane_full_spread_is_symmetric() {
        let mut osc: MorphOscillator<3> = MorphOscillator::new();
        osc.set_detune_spread(1.0); // width 8 octaves
        let w = base_increment(440.0);
        let mut block = [0.0; 16];
        osc.process_block(w, &mut block);

        let incs = osc.increments();
        let expected_low = w * libm::exp2f(-4.0);
        let expected_high = w * libm::exp2f(4.0);
        assert!((incs[0] - expected_low).abs() / expected_low < 0.005);
        assert!((incs[1] - w).abs() / w < 0.005);
        assert!((incs[2] - expected_high).abs() / expected_high < 0.005);
    }

    #[test]
    fn spread_preserves_center_octave() {
        // Mean octave offset must be zero: log2 of the increments should
        // average to log2(w).
        let mut osc: MorphOscillator<5> = MorphOscillator::new();
        osc.set_detune_spread(0.7);
        let w = base_increment(440.0);
        let mut block = [0.0; 8];
        osc.process_block(w, &mut block);

        let mean_log: f32 = osc
            .increments()
            .iter()
            .map(|&i| libm::log2f(i))
            .sum::<f32>()
            / 5.0;
        assert!(
            (mean_log - libm::log2f(w)).abs() < 0.01,
            "center pitch drifted: {mean_log} vs {}",
            libm::log2f(w)
        );
    }

    #[test]
    fn detune_width_updates_only_on_flag() {
        let mut osc: MorphOscillator<3> = MorphOscillator::new();
        let w = base_increment(220.0);
        let mut block = [0.0; 8];

        osc.set_detune_spread(1.0);
        osc.process_block(w, &mut block);
        assert!((osc.max_detune() - MAX_DETUNE_OCTAVES).abs() < 1e-6);

        // Mutating the field through the setter raises the flag again;
        // without it the width must stay put across blocks.
        osc.process_block(w, &mut block);
        assert!((osc.max_detune() - MAX_DETUNE_OCTAVES).abs() < 1e-6);
    }

    #[test]
    fn reset_defers_to_block_boundary() {
        let mut osc: MorphOscillator<2> = MorphOscillator::new();
        let w = base_increment(1000.0);
        let mut block = [0.0; 64];

        // Run a block so phases move off zero
        osc.process_block(w, &mut block);
        let mid_block = block[32];

        // Raise the reset mid-"block" (between callbacks)
        osc.note_on();

        // Samples already emitted are unaffected; next block restarts the
        // cycle, so its first sample matches a fresh oscillator's.
        let mut fresh: MorphOscillator<2> = MorphOscillator::new();
        let mut fresh_block = [0.0; 64];
        fresh.process_block(w, &mut fresh_block);

        let mut next_block = [0.0; 64];
        osc.process_block(w, &mut next_block);

        assert_eq!(next_block[0], fresh_block[0]);
        assert_ne!(mid_block, 0.0);
    }

    #[test]
    fn reset_applies_exactly_once() {
        let mut osc: MorphOscillator<2> = MorphOscillator::new();
        let w = base_increment(1000.0);
        let mut block = [0.0; 37]; // odd length so phase ends off-zero

        osc.note_on();
        osc.process_block(w, &mut block);
        let after_first = block[0];

        // Second block must NOT re-apply the reset
        osc.process_block(w, &mut block);
        assert_ne!(block[0], after_first);
    }

    #[test]
    fn output_is_bounded() {
        let mut osc: MorphOscillator<7> = MorphOscillator::new();
        osc.set_morph_mix(0.5);
        osc.set_detune_spread(0.5);
        osc.note_on();
        let w = base_increment(440.0);
        let mut block = [0.0; 480];
        for _ in 0..100 {
            osc.process_block(w, &mut block);
            for &s in &block {
                assert!((-1.0..=1.0).contains(&s), "sample {s} out of range");
            }
        }
    }

    #[test]
    fn negative_increment_clamps_to_zero() {
        let mut osc: MorphOscillator<1> = MorphOscillator::new();
        let mut block = [0.0; 8];
        osc.process_block(-0.1, &mut block);
        assert_eq!(osc.increments()[0], 0.0);
    }
}
