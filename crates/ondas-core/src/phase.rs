//! Phase accumulation for waveform oscillators.
//!
//! A phase accumulator is a running counter in [0, 1) representing the
//! position within one waveform cycle. Each sample it advances by a
//! per-sample increment (`frequency / sample_rate`) and wraps by dropping
//! its integer part.
//!
//! Single-precision accumulation drifts slightly over very long runs; that
//! is an accepted tradeoff for audio-range frequencies, not something this
//! module tries to compensate for.

/// Advance a phase value by `increment` and wrap into [0, 1).
///
/// Tolerates increments up to at least 0.5 (high pitches). `increment`
/// must be non-negative; callers clamp at the increment-derivation
/// boundary so this stays branch-free in the hot loop.
#[inline]
pub fn advance_phase(phase: f32, increment: f32) -> f32 {
    let next = phase + increment;
    next - (next as u32) as f32
}

/// Single-lane stateful phase accumulator.
///
/// Multi-lane oscillators keep raw `[f32; N]` phase arrays and call
/// [`advance_phase`] directly; this wrapper suits single-lane users like
/// the pulse oscillator.
#[derive(Debug, Clone, Copy, Default)]
pub struct PhaseAccumulator {
    phase: f32,
}

impl PhaseAccumulator {
    /// Create an accumulator at phase 0.
    pub fn new() -> Self {
        Self { phase: 0.0 }
    }

    /// Current phase in [0, 1).
    #[inline]
    pub fn phase(&self) -> f32 {
        self.phase
    }

    /// Reset phase to 0.
    pub fn reset(&mut self) {
        self.phase = 0.0;
    }

    /// Return the current phase, then advance by `increment`.
    #[inline]
    pub fn tick(&mut self, increment: f32) -> f32 {
        let current = self.phase;
        self.phase = advance_phase(self.phase, increment);
        current
    }
}
