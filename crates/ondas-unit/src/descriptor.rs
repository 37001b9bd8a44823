//! Runtime descriptor handed to units at construction.

/// Describes the runtime environment a unit is being loaded into.
///
/// Units validate the descriptor once in their constructor and cache what
/// they need; the host never changes these values while the unit is live.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnitDescriptor {
    /// Sample rate in Hz.
    pub sample_rate: f32,
    /// Number of interleaved input channels per frame.
    pub input_channels: usize,
    /// Number of interleaved output channels per frame.
    pub output_channels: usize,
}

impl UnitDescriptor {
    /// Descriptor for an oscillator slot: stereo input bus, mono output.
    pub fn osc(sample_rate: f32) -> Self {
        Self {
            sample_rate,
            input_channels: 2,
            output_channels: 1,
        }
    }

    /// Descriptor for a stereo insert effect slot.
    pub fn stereo_fx(sample_rate: f32) -> Self {
        Self {
            sample_rate,
            input_channels: 2,
            output_channels: 2,
        }
    }
}
