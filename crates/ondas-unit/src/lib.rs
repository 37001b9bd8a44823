//! Host-facing unit shims.
//!
//! An embedded synth runtime talks to DSP code through a small callback
//! surface: construct against a runtime descriptor, render blocks from a
//! packed pitch word, receive note and raw parameter events. This crate
//! wraps the oscillator and effect cores from `ondas-synth` / `ondas-fx`
//! into that shape and handles the raw 10-bit parameter encoding.
//!
//! Construction is the only fallible step ([`UnitError`]); everything on
//! the render path is clamped, allocation-free, and panic-free.

mod delay_unit;
mod descriptor;
mod error;
mod osc_unit;
mod params;

pub use delay_unit::{DELAY_PARAM_FEEDBACK, DELAY_PARAM_MIX, DELAY_PARAM_TIME, DelayUnit};
pub use descriptor::UnitDescriptor;
pub use error::UnitError;
pub use osc_unit::{OSC_PARAM_SHAPE, OSC_PARAM_SHIFT_SHAPE, OscUnit};
pub use params::{PARAM_10BIT_MAX, param_10bit_to_f32, param_f32_to_10bit};
