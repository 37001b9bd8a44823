//! Host shim for the feedback echo effect.

use ondas_core::{Effect, lerp};
use ondas_fx::Echo;

use crate::descriptor::UnitDescriptor;
use crate::error::UnitError;
use crate::params::{param_10bit_to_f32, param_f32_to_10bit};

/// Raw parameter id for the delay time knob.
pub const DELAY_PARAM_TIME: u8 = 0;
/// Raw parameter id for the feedback knob.
pub const DELAY_PARAM_FEEDBACK: u8 = 1;
/// Raw parameter id for the wet/dry mix knob.
pub const DELAY_PARAM_MIX: u8 = 2;

/// Shortest delay time the time knob can dial in, in seconds.
const TIME_MIN_SECONDS: f32 = 0.001;
/// Longest delay time the time knob can dial in, in seconds.
const TIME_MAX_SECONDS: f32 = 1.9;

/// Delay unit: the [`Echo`] effect behind the host callback surface.
///
/// Processes interleaved stereo in place, collapsing to mono through the
/// echo and writing the shared result to both channels. Knob positions
/// are kept in their normalized form so they read back exactly as set.
#[derive(Debug)]
pub struct DelayUnit {
    echo: Echo,
    time_value: f32,
    feedback_value: f32,
    mix_value: f32,
}

impl DelayUnit {
    /// Build a delay unit against the host's runtime descriptor.
    ///
    /// Delay slots are stereo-in, stereo-out; any other geometry is
    /// rejected, as is a non-positive or non-finite sample rate.
    pub fn new(desc: &UnitDescriptor) -> Result<Self, UnitError> {
        if !desc.sample_rate.is_finite() || desc.sample_rate <= 0.0 {
            return Err(UnitError::InvalidSampleRate(desc.sample_rate));
        }
        if desc.input_channels != 2 || desc.output_channels != 2 {
            return Err(UnitError::InvalidGeometry {
                input: desc.input_channels,
                output: desc.output_channels,
            });
        }
        Ok(Self {
            echo: Echo::new(desc.sample_rate),
            time_value: 0.0,
            feedback_value: 0.0,
            mix_value: 0.0,
        })
    }

    /// Process one block of interleaved stereo frames in place.
    ///
    /// A trailing odd sample (malformed interleaving) is left untouched.
    pub fn process_in_place(&mut self, buffer: &mut [f32]) {
        for frame in buffer.chunks_exact_mut(2) {
            let (l, r) = self.echo.process_stereo(frame[0], frame[1]);
            frame[0] = l;
            frame[1] = r;
        }
    }

    /// Apply a raw 10-bit parameter change. Unrecognized ids are ignored.
    pub fn set_parameter(&mut self, id: u8, raw: i32) {
        let value = param_10bit_to_f32(raw);
        match id {
            DELAY_PARAM_TIME => {
                #[cfg(feature = "tracing")]
                tracing::debug!("param time: {value}");
                self.time_value = value;
                self.echo
                    .set_time_seconds(lerp(TIME_MIN_SECONDS, TIME_MAX_SECONDS, value));
            }
            DELAY_PARAM_FEEDBACK => {
                #[cfg(feature = "tracing")]
                tracing::debug!("param feedback: {value}");
                self.feedback_value = value;
                self.echo.set_feedback(value);
            }
            DELAY_PARAM_MIX => {
                #[cfg(feature = "tracing")]
                tracing::debug!("param mix: {value}");
                self.mix_value = value;
                self.echo.set_mix(value);
            }
            _ => {}
        }
    }

    /// Read back a parameter in the raw 10-bit encoding, or `None` for an
    /// unrecognized id.
    pub fn get_parameter(&self, id: u8) -> Option<i32> {
        match id {
            DELAY_PARAM_TIME => Some(param_f32_to_10bit(self.time_value)),
            DELAY_PARAM_FEEDBACK => Some(param_f32_to_10bit(self.feedback_value)),
            DELAY_PARAM_MIX => Some(param_f32_to_10bit(self.mix_value)),
            _ => None,
        }
    }

    /// Clear the delay buffer without touching parameter values.
    pub fn reset(&mut self) {
        self.echo.reset();
    }
}
