//! Cross-context pending-event flags.
//!
//! Host runtimes deliver note and parameter events between audio blocks,
//! possibly from a different priority context than the render callback.
//! Events never mutate oscillator state directly; they *mark* transitions
//! in an atomic flag set that the render side drains exactly once at the
//! start of each block. Events arriving mid-block are therefore deferred
//! to the next block boundary instead of tearing state partway through.
//!
//! This is the only state shared between the event-producing side and the
//! render side. Everything else (phases, increments, delay buffers) is
//! mutated by the block processor alone and needs no synchronization.

use core::sync::atomic::{AtomicU8, Ordering};

/// Note-on (or explicit reset) requested: zero all lane phases at the next
/// block boundary.
pub const FLAG_RESET: u8 = 1 << 0;

/// Detune-range parameter changed: recompute the maximum detune width
/// before deriving per-lane increments.
pub const FLAG_DETUNE_RANGE: u8 = 1 << 1;

/// Atomic pending-event flag set with a single-consumer contract.
///
/// Producers (note/parameter callbacks) call [`raise`](Self::raise); the
/// block processor — the only consumer — calls [`take`](Self::take) once
/// per block. `raise` is a bitwise-OR so concurrent producers never lose
/// each other's flags; `take` is a swap-to-zero so each flag is observed
/// exactly once.
///
/// # Example
///
/// ```rust
/// use ondas_core::PendingEvents;
/// use ondas_core::events::FLAG_RESET;
///
/// let events = PendingEvents::new();
/// events.raise(FLAG_RESET);
///
/// let flags = events.take();
/// assert!(flags & FLAG_RESET != 0);
/// assert_eq!(events.take(), 0);
/// ```
#[derive(Debug, Default)]
pub struct PendingEvents {
    flags: AtomicU8,
}

impl PendingEvents {
    /// Create an empty flag set.
    pub const fn new() -> Self {
        Self {
            flags: AtomicU8::new(0),
        }
    }

    /// Mark one or more pending events (producer side).
    #[inline]
    pub fn raise(&self, bits: u8) {
        self.flags.fetch_or(bits, Ordering::Release);
    }

    /// Drain all pending events (consumer side, once per block).
    ///
    /// Returns the flags that were set and clears them in one atomic step.
    #[inline]
    pub fn take(&self) -> u8 {
        self.flags.swap(0, Ordering::Acquire)
    }

    /// Peek without clearing. Test/diagnostic use only.
    pub fn pending(&self) -> u8 {
        self.flags.load(Ordering::Relaxed)
    }
}
