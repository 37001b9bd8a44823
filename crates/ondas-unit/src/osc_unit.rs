//! Host shim for the detuned morph oscillator.

use ondas_synth::{MorphOscillator, note_to_increment};

use crate::descriptor::UnitDescriptor;
use crate::error::UnitError;
use crate::params::{param_10bit_to_f32, param_f32_to_10bit};

/// Raw parameter id for the detune spread knob.
pub const OSC_PARAM_SHAPE: u8 = 0;
/// Raw parameter id for the saw/triangle morph knob.
pub const OSC_PARAM_SHIFT_SHAPE: u8 = 1;

/// Oscillator unit: a [`MorphOscillator`] behind the host callback surface.
///
/// The host drives it with one [`render`](Self::render) call per audio
/// block and delivers note and knob events between blocks. Events only
/// raise flags on the oscillator; the oscillator itself applies them at
/// the next block boundary.
#[derive(Debug)]
pub struct OscUnit<const LANES: usize> {
    osc: MorphOscillator<LANES>,
    sample_rate: f32,
}

impl<const LANES: usize> OscUnit<LANES> {
    /// Build an oscillator unit against the host's runtime descriptor.
    ///
    /// Oscillator slots are mono-output with a stereo input bus; any other
    /// geometry is rejected, as is a non-positive or non-finite sample
    /// rate.
    pub fn new(desc: &UnitDescriptor) -> Result<Self, UnitError> {
        if !desc.sample_rate.is_finite() || desc.sample_rate <= 0.0 {
            return Err(UnitError::InvalidSampleRate(desc.sample_rate));
        }
        if desc.input_channels != 2 || desc.output_channels != 1 {
            return Err(UnitError::InvalidGeometry {
                input: desc.input_channels,
                output: desc.output_channels,
            });
        }
        Ok(Self {
            osc: MorphOscillator::new(),
            sample_rate: desc.sample_rate,
        })
    }

    /// Render one mono block.
    ///
    /// `pitch` packs the MIDI note number in the high byte and a
    /// 1/256-semitone fraction in the low byte, re-read every block so the
    /// oscillator always tracks the host's current pitch.
    pub fn render(&mut self, pitch: u16, out: &mut [f32]) {
        let note = (pitch >> 8) as u8;
        let fraction = (pitch & 0xFF) as u8;
        let w = note_to_increment(note, fraction, self.sample_rate);
        self.osc.process_block(w, out);
    }

    /// Note-on event. Queues a phase reset for the next block; velocity is
    /// accepted for interface compatibility and ignored.
    pub fn note_on(&mut self, note: u8, velocity: u8) {
        #[cfg(feature = "tracing")]
        tracing::debug!("note_on: note {note} velocity {velocity}");
        let _ = (note, velocity);
        self.osc.note_on();
    }

    /// Note-off event. The oscillator free-runs, so there is nothing to
    /// release.
    pub fn note_off(&mut self, _note: u8) {}

    /// Apply a raw 10-bit parameter change. Unrecognized ids are ignored.
    pub fn set_parameter(&mut self, id: u8, raw: i32) {
        let value = param_10bit_to_f32(raw);
        match id {
            OSC_PARAM_SHAPE => {
                #[cfg(feature = "tracing")]
                tracing::debug!("param shape: {value}");
                self.osc.set_detune_spread(value);
            }
            OSC_PARAM_SHIFT_SHAPE => {
                #[cfg(feature = "tracing")]
                tracing::debug!("param shift-shape: {value}");
                self.osc.set_morph_mix(value);
            }
            _ => {}
        }
    }

    /// Read back a parameter in the raw 10-bit encoding, or `None` for an
    /// unrecognized id.
    pub fn get_parameter(&self, id: u8) -> Option<i32> {
        match id {
            OSC_PARAM_SHAPE => Some(param_f32_to_10bit(self.osc.detune_spread())),
            OSC_PARAM_SHIFT_SHAPE => Some(param_f32_to_10bit(self.osc.morph_mix())),
            _ => None,
        }
    }

    /// The wrapped oscillator core, for direct inspection.
    pub fn oscillator(&self) -> &MorphOscillator<LANES> {
        &self.osc
    }
}
