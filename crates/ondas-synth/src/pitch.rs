//! Pitch conversion helpers.
//!
//! Host runtimes report pitch as a MIDI-style note number plus a
//! sub-semitone fraction in 1/256ths. The oscillator cores work purely in
//! per-sample phase increments, so the conversion happens once per block
//! at the unit boundary.

/// Convert MIDI note number to frequency in Hz (A4 = 69 = 440 Hz).
#[inline]
pub fn midi_to_freq(note: u8) -> f32 {
    440.0 * libm::powf(2.0, (note as f32 - 69.0) / 12.0)
}

/// Convert a MIDI note plus a 1/256-semitone fraction to a per-sample
/// phase increment at the given sample rate.
///
/// Monotonic in `(note, fraction)`: a higher note or fraction always
/// yields a strictly larger increment.
#[inline]
pub fn note_to_increment(note: u8, fraction: u8, sample_rate: f32) -> f32 {
    let fractional_note = note as f32 + fraction as f32 / 256.0;
    let freq = 440.0 * libm::powf(2.0, (fractional_note - 69.0) / 12.0);
    freq / sample_rate
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn a4_is_440() {
        assert!((midi_to_freq(69) - 440.0).abs() < 0.01);
    }

    #[test]
    fn octave_doubles_frequency() {
        assert!((midi_to_freq(81) - 880.0).abs() < 0.01);
        assert!((midi_to_freq(57) - 220.0).abs() < 0.01);
    }

    #[test]
    fn increment_matches_frequency_over_rate() {
        let w = note_to_increment(69, 0, 48000.0);
        assert!((w - 440.0 / 48000.0).abs() < 1e-7);
    }

    #[test]
    fn increment_is_monotonic() {
        let mut prev = 0.0;
        for note in 0..=127 {
            for fraction in [0_u8, 64, 128, 192] {
                let w = note_to_increment(note, fraction, 48000.0);
                assert!(w > prev, "not monotonic at note {note} frac {fraction}");
                prev = w;
            }
        }
    }

    #[test]
    fn fraction_sits_between_adjacent_notes() {
        let low = note_to_increment(60, 0, 48000.0);
        let mid = note_to_increment(60, 128, 48000.0);
        let high = note_to_increment(61, 0, 48000.0);
        assert!(low < mid && mid < high);
    }
}
