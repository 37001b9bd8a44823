//! Feedback echo effect with time, feedback, and mix control.

use ondas_core::{
    Effect, FeedbackDelayLine, ParamDescriptor, ParamUnit, ParameterInfo, flush_denormal,
    mono_sum,
};

/// Fixed delay capacity in seconds; the time parameter moves within it.
const MAX_DELAY_SECONDS: f32 = 2.0;

/// Feedback gain ceiling. Unity or higher feedback is unstable (each pass
/// re-injects at least as much energy as it reads), so it is excluded at
/// the setter rather than detected at runtime.
const FEEDBACK_MAX: f32 = 0.95;

/// Feedback delay/echo effect.
///
/// Per sample: `out = dry * input + wet * tap`, then
/// `push(feedback * (tap + input))` — the delayed tap is read *before* the
/// write, and energy re-enters the buffer scaled by the feedback gain, so
/// each echo is `feedback` times quieter than the last.
///
/// Changing the delay time re-wraps the write position and clears the
/// buffer beyond the new length, so a later lengthening reads back silence
/// instead of a stale tail.
///
/// ## Parameter Indices (`ParameterInfo`)
///
/// | Index | Name | Range | Default |
/// |-------|------|-------|---------|
/// | 0 | Delay Time | 1.0–2000.0 ms | 1000.0 |
/// | 1 | Feedback | 0–95% | 20.0 |
/// | 2 | Mix | 0–100% | 50.0 |
///
/// # Example
///
/// ```rust
/// use ondas_fx::Echo;
/// use ondas_core::Effect;
///
/// let mut echo = Echo::new(48000.0);
/// echo.set_time_seconds(0.5);
/// echo.set_feedback(0.2);
/// echo.set_mix(0.5);
///
/// let output = echo.process(1.0);
/// ```
#[derive(Debug, Clone)]
pub struct Echo {
    line: FeedbackDelayLine,
    feedback: f32,
    wet_mix: f32,
    /// Always maintained as `1 - wet_mix`.
    dry_mix: f32,
    sample_rate: f32,
}

impl Echo {
    /// Create an echo with a 2-second delay capacity at the given sample
    /// rate. Defaults: 1 s delay, 0.2 feedback, 0.5 mix.
    pub fn new(sample_rate: f32) -> Self {
        let mut line = FeedbackDelayLine::from_time(sample_rate, MAX_DELAY_SECONDS);
        line.set_active_length(sample_rate as usize);
        Self {
            line,
            feedback: 0.2,
            wet_mix: 0.5,
            dry_mix: 0.5,
            sample_rate,
        }
    }

    /// Set the delay time in seconds, clamped to the line's capacity.
    pub fn set_time_seconds(&mut self, seconds: f32) {
        let samples = (seconds.max(0.0) * self.sample_rate) as usize;
        self.line.set_active_length(samples);
    }

    /// Set the feedback gain, clamped to [0, 0.95].
    pub fn set_feedback(&mut self, feedback: f32) {
        self.feedback = feedback.clamp(0.0, FEEDBACK_MAX);
    }

    /// Set the wet/dry mix in [0, 1]; the dry gain follows as `1 - mix`.
    pub fn set_mix(&mut self, mix: f32) {
        self.wet_mix = mix.clamp(0.0, 1.0);
        self.dry_mix = 1.0 - self.wet_mix;
    }

    /// Current delay time in seconds.
    pub fn time_seconds(&self) -> f32 {
        self.line.active_length() as f32 / self.sample_rate
    }

    /// Current feedback gain.
    pub fn feedback(&self) -> f32 {
        self.feedback
    }

    /// Current wet mix.
    pub fn mix(&self) -> f32 {
        self.wet_mix
    }
}

impl Effect for Echo {
    #[inline]
    fn process(&mut self, input: f32) -> f32 {
        let wet = self.line.tap();
        let output = self.dry_mix * input + self.wet_mix * wet;
        self.line
            .push(flush_denormal(self.feedback * (wet + input)));
        output
    }

    /// Stereo pairs collapse to a shared mono delayed signal: both
    /// channels receive the same output, fed from the mono sum.
    #[inline]
    fn process_stereo(&mut self, left: f32, right: f32) -> (f32, f32) {
        let out = self.process(mono_sum(left, right));
        (out, out)
    }

    fn set_sample_rate(&mut self, sample_rate: f32) {
        let seconds = self.time_seconds();
        self.sample_rate = sample_rate;
        self.line = FeedbackDelayLine::from_time(sample_rate, MAX_DELAY_SECONDS);
        self.set_time_seconds(seconds);
    }

    fn reset(&mut self) {
        self.line.clear();
    }
}

impl ParameterInfo for Echo {
    fn param_count(&self) -> usize {
        3
    }

    fn param_info(&self, index: usize) -> Option<ParamDescriptor> {
        match index {
            0 => Some(ParamDescriptor {
                name: "Delay Time",
                short_name: "Time",
                unit: ParamUnit::Milliseconds,
                min: 1.0,
                max: 2000.0,
                default: 1000.0,
                step: 1.0,
            }),
            1 => Some(ParamDescriptor {
                name: "Feedback",
                short_name: "Feedback",
                unit: ParamUnit::Percent,
                min: 0.0,
                max: 95.0,
                default: 20.0,
                step: 1.0,
            }),
            2 => Some(ParamDescriptor {
                name: "Mix",
                short_name: "Mix",
                unit: ParamUnit::Percent,
                min: 0.0,
                max: 100.0,
                default: 50.0,
                step: 1.0,
            }),
            _ => None,
        }
    }

    fn get_param(&self, index: usize) -> f32 {
        match index {
            0 => self.time_seconds() * 1000.0,
            1 => self.feedback * 100.0,
            2 => self.wet_mix * 100.0,
            _ => 0.0,
        }
    }

    fn set_param(&mut self, index: usize, value: f32) {
        match index {
            0 => self.set_time_seconds(value / 1000.0),
            1 => self.set_feedback(value / 100.0),
            2 => self.set_mix(value / 100.0),
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SR: f32 = 48000.0;

    #[test]
    fn impulse_produces_geometric_echo_train() {
        let mut echo = Echo::new(SR);
        echo.set_time_seconds(0.01); // 480 samples
        echo.set_feedback(0.2);
        echo.set_mix(0.5);
        echo.reset();

        let delay_samples = 480;
        let mut output = Vec::new();
        output.push(echo.process(1.0));
        for _ in 0..(delay_samples * 4) {
            output.push(echo.process(0.0));
        }

        // First echo: wet * feedback * impulse = 0.5 * 0.2
        let first = output[delay_samples];
        assert!((first - 0.1).abs() < 1e-5, "first echo {first}");

        // Each successive echo decays by the feedback ratio
        let second = output[delay_samples * 2];
        let third = output[delay_samples * 3];
        assert!((second / first - 0.2).abs() < 1e-3);
        assert!((third / second - 0.2).abs() < 1e-3);
    }

    #[test]
    fn dry_passes_through_at_zero_mix() {
        let mut echo = Echo::new(SR);
        echo.set_mix(0.0);
        let out = echo.process(0.7);
        assert!((out - 0.7).abs() < 1e-6);
    }

    #[test]
    fn mix_complement_always_holds() {
        let mut echo = Echo::new(SR);
        for &m in &[0.0, 0.25, 0.5, 0.99, 1.0, 2.0] {
            echo.set_mix(m);
            assert!((echo.dry_mix + echo.wet_mix - 1.0).abs() < 1e-6);
        }
    }

    #[test]
    fn feedback_clamped_below_unity() {
        let mut echo = Echo::new(SR);
        echo.set_feedback(1.5);
        assert!(echo.feedback() < 1.0);
        assert_eq!(echo.feedback(), 0.95);
    }

    #[test]
    fn set_feedback_is_idempotent() {
        let mut echo = Echo::new(SR);
        echo.set_feedback(0.3);
        let once = echo.feedback();
        echo.set_feedback(0.3);
        assert_eq!(echo.feedback(), once);
    }

    #[test]
    fn shortened_then_lengthened_time_reads_silence() {
        let mut echo = Echo::new(1000.0); // 1 kHz rate for small buffers
        echo.set_time_seconds(1.0); // 1000 samples
        echo.set_feedback(0.5);
        echo.set_mix(1.0);

        // Fill the full second with nonzero signal
        for _ in 0..1000 {
            echo.process(0.8);
        }

        echo.set_time_seconds(0.5);
        echo.set_time_seconds(1.0);

        // Skip the surviving first half, then the re-exposed tail must be
        // silent
        let mut outputs = Vec::new();
        for _ in 0..1000 {
            outputs.push(echo.process(0.0));
        }
        for (i, &out) in outputs.iter().enumerate().skip(500) {
            assert_eq!(out, 0.0, "stale data at sample {i}");
        }
    }

    #[test]
    fn stereo_collapses_to_shared_mono() {
        let mut echo = Echo::new(SR);
        echo.set_mix(0.3);
        let (l, r) = echo.process_stereo(1.0, 0.0);
        assert_eq!(l, r);
        // dry part of the mono sum: 0.7 * 0.5
        assert!((l - 0.35).abs() < 1e-6);
    }

    #[test]
    fn long_run_with_high_feedback_stays_bounded() {
        let mut echo = Echo::new(SR);
        echo.set_time_seconds(0.005);
        echo.set_feedback(0.95);
        echo.set_mix(1.0);

        let mut peak = 0.0_f32;
        for i in 0..200_000 {
            let input = if i < 100 { 1.0 } else { 0.0 };
            let out = echo.process(input);
            assert!(out.is_finite());
            peak = peak.max(out.abs());
        }
        // Geometric series bound: sum of inputs over (1 - feedback)
        assert!(peak < 100.0 / (1.0 - 0.95) + 1.0);
    }

    #[test]
    fn param_info_roundtrip() {
        let mut echo = Echo::new(SR);
        assert_eq!(echo.param_count(), 3);
        assert!(echo.param_info(3).is_none());

        echo.set_param(0, 250.0); // ms
        assert!((echo.get_param(0) - 250.0).abs() < 1.0);

        echo.set_param(1, 40.0); // percent
        assert!((echo.get_param(1) - 40.0).abs() < 0.01);

        echo.set_param(2, 75.0);
        assert!((echo.get_param(2) - 75.0).abs() < 0.01);

        // Unknown index ignored
        echo.set_param(9, 1.0);
    }
}
