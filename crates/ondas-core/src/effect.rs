//! Core Effect trait.
//!
//! The [`Effect`] trait is the seam between DSP cores and the host-facing
//! unit layer. It is object-safe, allocation-free, and designed for
//! real-time callbacks: every method does a fixed, bounded amount of work.

/// Core trait for audio effects.
///
/// Effects process samples one at a time or in blocks. Implementations
/// must not allocate or block inside any processing method.
///
/// # Example
///
/// ```rust
/// use ondas_core::Effect;
///
/// struct Gain {
///     gain: f32,
/// }
///
/// impl Effect for Gain {
///     fn process(&mut self, input: f32) -> f32 {
///         input * self.gain
///     }
///
///     fn set_sample_rate(&mut self, _sample_rate: f32) {}
///
///     fn reset(&mut self) {}
/// }
/// ```
pub trait Effect {
    /// Process a single sample.
    ///
    /// # Arguments
    /// * `input` - Input sample, typically in range [-1.0, 1.0]
    fn process(&mut self, input: f32) -> f32;

    /// Process a stereo sample pair.
    ///
    /// Default implementation sums to mono, processes once, and returns
    /// the shared result on both channels — the behavior of a mono effect
    /// in a stereo insert slot.
    #[inline]
    fn process_stereo(&mut self, left: f32, right: f32) -> (f32, f32) {
        let out = self.process(crate::math::mono_sum(left, right));
        (out, out)
    }

    /// Process a block of samples.
    ///
    /// Default implementation calls `process()` per sample. Effects may
    /// override for more efficient block processing.
    ///
    /// # Panics
    /// Default implementation panics if `input.len() != output.len()`
    fn process_block(&mut self, input: &[f32], output: &mut [f32]) {
        debug_assert_eq!(
            input.len(),
            output.len(),
            "Input and output buffers must have same length"
        );
        for (inp, out) in input.iter().zip(output.iter_mut()) {
            *out = self.process(*inp);
        }
    }

    /// Process a block of samples in-place.
    fn process_block_inplace(&mut self, buffer: &mut [f32]) {
        for sample in buffer.iter_mut() {
            *sample = self.process(*sample);
        }
    }

    /// Update the sample rate.
    ///
    /// Effects recalculate any rate-dependent state (delay times in
    /// samples, increments, etc.).
    fn set_sample_rate(&mut self, sample_rate: f32);

    /// Reset internal state without changing parameters.
    fn reset(&mut self);
}
