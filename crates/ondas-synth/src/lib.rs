//! Ondas Synth - oscillator cores for a single synthesizer voice slot
//!
//! This crate provides the block-oriented oscillator cores that sit behind
//! a host audio callback: a multi-lane detuned morphing oscillator and a
//! pulse oscillator with PWM and angle distortion.
//!
//! # Core Components
//!
//! ## Morphing Oscillator
//!
//! [`MorphOscillator`] crossfades between saw and triangle waves across a
//! fan of detuned lanes spread symmetrically around the base pitch:
//!
//! ```rust
//! use ondas_synth::{MorphOscillator, note_to_increment};
//!
//! let mut osc: MorphOscillator<7> = MorphOscillator::new();
//! osc.set_morph_mix(0.5);
//! osc.set_detune_spread(0.3);
//! osc.note_on();
//!
//! let mut block = [0.0_f32; 64];
//! let w = note_to_increment(69, 0, 48000.0); // A4
//! osc.process_block(w, &mut block);
//! ```
//!
//! ## Pulse Oscillator
//!
//! [`PulseOscillator`] generates a hard-edged pulse with a duty cycle,
//! per-block-interpolated PWM offset, and an optional angle distortion
//! that tilts the flat portions into ramps.
//!
//! ## Pitch Helpers
//!
//! - [`midi_to_freq`] - MIDI note number to Hz
//! - [`note_to_increment`] - note + sub-semitone fraction to a per-sample
//!   phase increment
//!
//! # Event Model
//!
//! Note-on and parameter events only *mark* pending transitions in an
//! atomic flag set ([`ondas_core::PendingEvents`]); each oscillator applies
//! them exactly once at the start of its next block, so mid-block events
//! never tear state partway through a render.
//!
//! # no_std Support
//!
//! This crate is `no_std` compatible. Disable the default `std` feature:
//!
//! ```toml
//! [dependencies]
//! ondas-synth = { version = "0.1", default-features = false }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

pub mod oscillator;
pub mod pitch;
pub mod pulse;

// Re-export main types at crate root
pub use oscillator::{MAX_DETUNE_OCTAVES, MIN_DETUNE_OCTAVES, MorphOscillator};
pub use pitch::{midi_to_freq, note_to_increment};
pub use pulse::PulseOscillator;
