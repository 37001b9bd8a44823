//! Render a few seconds of detuned morph oscillator through the echo and
//! write the result to `render_demo.wav`.
//!
//! ```sh
//! cargo run -p ondas-unit --example render_demo
//! ```

use hound::{SampleFormat, WavSpec, WavWriter};
use ondas_unit::{
    DELAY_PARAM_FEEDBACK, DELAY_PARAM_MIX, DELAY_PARAM_TIME, DelayUnit, OSC_PARAM_SHAPE,
    OSC_PARAM_SHIFT_SHAPE, OscUnit, UnitDescriptor,
};

const SAMPLE_RATE: f32 = 48000.0;
const BLOCK_FRAMES: usize = 64;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut osc: OscUnit<7> = OscUnit::new(&UnitDescriptor::osc(SAMPLE_RATE))?;
    osc.set_parameter(OSC_PARAM_SHAPE, 200); // mild detune spread
    osc.set_parameter(OSC_PARAM_SHIFT_SHAPE, 512); // halfway to triangle

    let mut delay = DelayUnit::new(&UnitDescriptor::stereo_fx(SAMPLE_RATE))?;
    delay.set_parameter(DELAY_PARAM_TIME, 200); // ~380 ms
    delay.set_parameter(DELAY_PARAM_FEEDBACK, 500);
    delay.set_parameter(DELAY_PARAM_MIX, 350);

    let spec = WavSpec {
        channels: 2,
        sample_rate: SAMPLE_RATE as u32,
        bits_per_sample: 32,
        sample_format: SampleFormat::Float,
    };
    let mut writer = WavWriter::create("render_demo.wav", spec)?;

    // A short phrase: each note plays for half a second.
    let notes: [u8; 4] = [57, 60, 64, 69];
    let blocks_per_note = (SAMPLE_RATE / 2.0) as usize / BLOCK_FRAMES;

    let mut mono = [0.0f32; BLOCK_FRAMES];
    let mut stereo = [0.0f32; 2 * BLOCK_FRAMES];

    for &note in &notes {
        osc.note_on(note, 100);
        let pitch = u16::from(note) << 8;
        for _ in 0..blocks_per_note {
            osc.render(pitch, &mut mono);
            for (i, &s) in mono.iter().enumerate() {
                stereo[2 * i] = s * 0.5;
                stereo[2 * i + 1] = s * 0.5;
            }
            delay.process_in_place(&mut stereo);
            for &s in &stereo {
                writer.write_sample(s)?;
            }
        }
        osc.note_off(note);
    }

    // Let the echo tail ring out for another second.
    for _ in 0..(SAMPLE_RATE as usize / BLOCK_FRAMES) {
        stereo.fill(0.0);
        delay.process_in_place(&mut stereo);
        for &s in &stereo {
            writer.write_sample(s)?;
        }
    }

    writer.finalize()?;
    println!("wrote render_demo.wav");
    Ok(())
}
