//! Fixed-capacity delay line for feedback echo effects.
//!
//! [`FeedbackDelayLine`] is a circular sample buffer whose capacity is set
//! once at construction (typically 2 seconds of audio at the configured
//! sample rate) and whose *active* length — the delay time in samples —
//! changes at runtime.
//!
//! # Zeroed-tail invariant
//!
//! The region beyond the active length is always zero. Shrinking the
//! active length clears the newly excluded tail, so lengthening the line
//! again later reads back silence instead of replaying stale energy.
//!
//! # Memory
//!
//! The buffer is heap-allocated during construction but never reallocates.
//! No allocations occur during audio processing.

#[cfg(not(feature = "std"))]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std as alloc;

use alloc::vec;
use alloc::vec::Vec;

/// Circular delay buffer with a runtime active length.
///
/// The read tap and write position coincide: [`tap`](Self::tap) returns the
/// oldest sample inside the active window (written `active_len` samples
/// ago), and [`push`](Self::push) overwrites that slot and advances. This
/// is the classic single-tap feedback topology — the effect layer reads the
/// tap, mixes, and pushes `feedback * (tap + input)` back in.
///
/// # Example
///
/// ```rust
/// use ondas_core::FeedbackDelayLine;
///
/// let mut line = FeedbackDelayLine::new(48000 * 2);
/// line.set_active_length(4800); // 100 ms at 48 kHz
///
/// let delayed = line.tap();
/// line.push(1.0 + 0.5 * delayed);
/// ```
#[derive(Debug, Clone)]
pub struct FeedbackDelayLine {
    /// Circular buffer storage; `buffer[active_len..]` is always zero.
    buffer: Vec<f32>,
    /// Write position, always `< active_len`.
    write_index: usize,
    /// Current delay time in samples, `1..=capacity`.
    active_len: usize,
}

impl FeedbackDelayLine {
    /// Create a zeroed delay line with the given capacity in samples.
    ///
    /// The active length starts at full capacity.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is 0.
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "Delay capacity must be > 0");

        Self {
            buffer: vec![0.0; capacity],
            write_index: 0,
            active_len: capacity,
        }
    }

    /// Create a delay line sized for `max_seconds` of audio.
    pub fn from_time(sample_rate: f32, max_seconds: f32) -> Self {
        Self::new((sample_rate * max_seconds) as usize)
    }

    /// Maximum delay capacity in samples.
    pub fn capacity(&self) -> usize {
        self.buffer.len()
    }

    /// Current delay time in samples.
    pub fn active_length(&self) -> usize {
        self.active_len
    }

    /// Read the delayed sample — the value written `active_len` pushes ago.
    #[inline]
    pub fn tap(&self) -> f32 {
        self.buffer[self.write_index]
    }

    /// Store a sample at the write position and advance modulo the active
    /// length.
    #[inline]
    pub fn push(&mut self, sample: f32) {
        self.buffer[self.write_index] = sample;
        self.write_index = (self.write_index + 1) % self.active_len;
    }

    /// Change the delay time in samples.
    ///
    /// `len` is clamped to `[1, capacity]`. The write index is re-wrapped
    /// into the new range and the tail beyond `len` is cleared, upholding
    /// the zeroed-tail invariant.
    pub fn set_active_length(&mut self, len: usize) {
        let len = len.clamp(1, self.buffer.len());
        self.active_len = len;
        self.write_index %= len;
        self.buffer[len..].fill(0.0);
    }

    /// Zero the entire buffer and rewind the write position.
    pub fn clear(&mut self) {
        self.buffer.fill(0.0);
        self.write_index = 0;
    }
}
