//! Ondas Core - DSP primitives for a single synthesizer voice/effect slot
//!
//! This crate provides the foundational building blocks for sample-by-sample
//! audio synthesis under hard real-time constraints: no allocation in the
//! render path, bounded per-sample cost, and explicit block-boundary event
//! handling.
//!
//! # Core Abstractions
//!
//! ## Waveform Generators
//!
//! Pure `phase -> sample` functions in [`waveform`]:
//!
//! - [`saw`] - linear ramp
//! - [`triangle`] - piecewise-linear, continuous at segment boundaries
//! - [`pulse`] - hard-edged pulse with caller-supplied threshold
//! - [`morph`] - saw/triangle crossfade
//! - [`tilt`] - angle distortion for pulse shapes
//!
//! ## Phase Accumulation
//!
//! - [`advance_phase`] - wrap a phase counter into [0, 1)
//! - [`PhaseAccumulator`] - single-lane stateful wrapper
//!
//! ## Delay Line
//!
//! - [`FeedbackDelayLine`] - fixed-capacity ring buffer with a runtime
//!   active length and a zeroed-tail invariant for click-free length changes
//!
//! ## Cross-Context Events
//!
//! - [`PendingEvents`] - atomic flag set for deferring note/parameter events
//!   to the next block boundary
//!
//! ## Effect System
//!
//! - [`Effect`] - object-safe trait for audio effects
//! - [`ParameterInfo`] - index-based parameter discovery
//!
//! ## Utilities
//!
//! - Math helpers: [`lerp`], [`wet_dry_mix`], [`flush_denormal`], [`mono_sum`]
//! - [`fast_exp2`] - polynomial `2^x` for detune ratio computation
//!
//! # no_std Support
//!
//! This crate is `no_std` compatible for embedded audio applications.
//! Disable the default `std` feature in your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! ondas-core = { version = "0.1", default-features = false }
//! ```
//!
//! # Design Principles
//!
//! - **Real-time safe**: No allocations in audio processing paths
//! - **No dependencies on std**: Pure `no_std` with `libm` for math
//! - **Block-boundary events**: asynchronous events only mark pending
//!   transitions; the render side applies them once per block

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

pub mod delay;
pub mod effect;
pub mod events;
pub mod fast_math;
pub mod math;
pub mod param_info;
pub mod phase;
pub mod waveform;

// Re-export main types at crate root
pub use delay::FeedbackDelayLine;
pub use effect::Effect;
pub use events::PendingEvents;
pub use fast_math::fast_exp2;
pub use math::{flush_denormal, lerp, mono_sum, ms_to_samples, wet_dry_mix};
pub use param_info::{ParamDescriptor, ParamUnit, ParameterInfo};
pub use phase::{PhaseAccumulator, advance_phase};
pub use waveform::{MORPH_MIX_MAX, MORPH_MIX_MIN, morph, pulse, saw, tilt, triangle};
