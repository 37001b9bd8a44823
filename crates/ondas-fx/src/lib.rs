//! Ondas FX - effect implementations for the ondas voice/effect slot
//!
//! Currently provides one effect:
//!
//! - [`Echo`] - feedback delay with independently configurable delay time,
//!   feedback gain, and wet/dry mix, backed by a fixed-capacity delay line
//!
//! All effects implement [`ondas_core::Effect`] for processing and
//! [`ondas_core::ParameterInfo`] for parameter discovery.
//!
//! # Example
//!
//! ```rust
//! use ondas_fx::Echo;
//! use ondas_core::Effect;
//!
//! let mut echo = Echo::new(48000.0);
//! echo.set_time_seconds(0.25);
//! echo.set_feedback(0.4);
//! echo.set_mix(0.5);
//!
//! let output = echo.process(0.5);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

pub mod echo;

pub use echo::Echo;
