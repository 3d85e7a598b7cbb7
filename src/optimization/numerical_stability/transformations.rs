//! Numerical stability utilities.
//!
//! Provides guarded implementations of the logistic transform and of the
//! logarithm used by the Bernoulli log-likelihood. Both are prone to
//! overflow or `ln(0)` in naïve form.
//!
//! # Provided items
//! - [`LOG_EPS`]: the ε added inside every log-likelihood logarithm
//!   (`1e-24`), so `ln(p + ε)` stays finite when `p` is exactly zero.
//! - [`PROB_CEIL`]: largest `f64` strictly below one; upper clamp for
//!   probabilities.
//! - [`logistic(x)`]: overflow-free `1 / (1 + exp(-x))`, unclamped.
//! - [`safe_logistic(x)`]: `logistic` clamped so the result stays in the
//!   open interval (0, 1) for every finite `x`.
//! - [`guarded_ln(p)`]: `ln(p + LOG_EPS)`.

/// Additive guard inside the log-likelihood logarithms.
pub const LOG_EPS: f64 = 1e-24;

/// Largest `f64` strictly below one.
pub const PROB_CEIL: f64 = 1.0 - f64::EPSILON / 2.0;

/// Numerically stable logistic function `σ(x) = 1 / (1 + exp(-x))`.
///
/// The exponential is only ever evaluated at a non-positive argument, so it
/// cannot overflow:
///
/// - For `x ≥ 0`, `σ(x) = 1 / (1 + exp(-x))`.
/// - For `x < 0`, `σ(x) = exp(x) / (1 + exp(x))`.
///
/// The result is *not* clamped: it rounds to exactly `1.0` for `x ≳ 37` and
/// to `0.0` for `x ≲ -745`. The log-likelihood uses this form so that
/// saturated rows are absorbed by `LOG_EPS` alone.
pub fn logistic(x: f64) -> f64 {
    if x >= 0.0 {
        1.0 / (1.0 + (-x).exp())
    } else {
        let e = x.exp();
        e / (1.0 + e)
    }
}

/// [`logistic`] clamped to `[f64::MIN_POSITIVE, PROB_CEIL]`.
///
/// The clamp only changes values that would otherwise round to exactly 0 or 1
/// (`|x| ≳ 37` on the upper side, `x ≲ -708` on the lower side), so reported
/// probabilities always lie in the open interval (0, 1).
///
/// # Parameters
/// - `x`: real input (a logit).
///
/// # Returns
/// - `σ(x)` in the open interval (0, 1).
pub fn safe_logistic(x: f64) -> f64 {
    logistic(x).clamp(f64::MIN_POSITIVE, PROB_CEIL)
}

/// `ln(p + LOG_EPS)`; finite for every `p ≥ 0`.
#[inline]
pub fn guarded_ln(p: f64) -> f64 {
    (p + LOG_EPS).ln()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Agreement of `safe_logistic` with the naïve formula on a safe grid.
    // - Symmetry σ(-x) = 1 - σ(x) away from the clamp.
    // - The open-interval guarantee in both tails.
    // - Finiteness of `guarded_ln` at zero.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Verify that the two-branch evaluation matches `1 / (1 + exp(-x))`
    // where the naïve formula is well conditioned.
    //
    // Given
    // -----
    // - A grid of x values in [-20, 20].
    //
    // Expect
    // ------
    // - Relative agreement to 1e-12.
    fn safe_logistic_matches_naive_formula() {
        for i in -40..=40 {
            let x = i as f64 * 0.5;
            let naive = 1.0 / (1.0 + (-x).exp());
            assert_relative_eq!(safe_logistic(x), naive, max_relative = 1e-12);
        }
        assert_eq!(safe_logistic(0.0), 0.5);
    }

    #[test]
    // Purpose
    // -------
    // Check the symmetry of the logistic function.
    //
    // Given
    // -----
    // - x in {0.1, 1, 5, 15}.
    //
    // Expect
    // ------
    // - σ(-x) + σ(x) = 1 up to rounding.
    fn safe_logistic_is_symmetric() {
        for &x in &[0.1, 1.0, 5.0, 15.0] {
            assert_relative_eq!(safe_logistic(-x) + safe_logistic(x), 1.0, epsilon = 1e-15);
        }
    }

    #[test]
    // Purpose
    // -------
    // Ensure extreme logits never produce exactly 0 or 1 (or NaN).
    //
    // Given
    // -----
    // - x in {±50, ±800, ±f64::MAX}.
    //
    // Expect
    // ------
    // - 0 < σ(x) < 1 in every case.
    fn safe_logistic_stays_in_open_interval() {
        for &x in &[50.0, -50.0, 800.0, -800.0, f64::MAX, -f64::MAX] {
            let p = safe_logistic(x);
            assert!(p > 0.0 && p < 1.0, "σ({x}) = {p} escaped (0, 1)");
        }
    }

    #[test]
    // Purpose
    // -------
    // The unclamped form saturates to exactly 0 and 1 where the clamped one
    // does not.
    //
    // Given
    // -----
    // - x = 45 and x = -800.
    //
    // Expect
    // ------
    // - logistic(45) == 1 and logistic(-800) == 0.
    // - safe_logistic(45) == PROB_CEIL.
    fn logistic_is_unclamped_at_saturation() {
        assert_eq!(logistic(45.0), 1.0);
        assert_eq!(logistic(-800.0), 0.0);
        assert_eq!(safe_logistic(45.0), PROB_CEIL);
        assert_relative_eq!(logistic(0.3), safe_logistic(0.3));
    }

    #[test]
    // Purpose
    // -------
    // Confirm the ε guard keeps `ln` finite at zero.
    //
    // Given
    // -----
    // - p = 0 and p = 1.
    //
    // Expect
    // ------
    // - ln(ε) at zero and ≈ 0 at one.
    fn guarded_ln_is_finite_at_zero() {
        assert_relative_eq!(guarded_ln(0.0), LOG_EPS.ln());
        assert!(guarded_ln(0.0).is_finite());
        assert_relative_eq!(guarded_ln(1.0), 0.0, epsilon = 1e-15);
    }
}
