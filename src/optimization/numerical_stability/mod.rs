//! numerical_stability: guarded scalar transforms for the logistic model.
//!
//! Purpose
//! -------
//! Collect the small numerical primitives that keep logistic-regression
//! arithmetic well conditioned: a logistic transform that cannot overflow and
//! never returns exactly 0 or 1, and the ε-guarded logarithm used by the
//! Bernoulli log-likelihood.
//!
//! Key behaviors
//! -------------
//! - `logistic` evaluates `1 / (1 + exp(-x))` through a sign-split form;
//!   `safe_logistic` additionally clamps the result into the open interval
//!   (0, 1) for reported probabilities.
//! - `guarded_ln` evaluates `ln(p + LOG_EPS)` so probabilities at the
//!   boundary are absorbed instead of raised as errors.
//!
//! Conventions
//! -----------
//! - Pure functions over `f64`; no logging, I/O, or global state, so they are
//!   safe to call inside tight per-row loops.
//!
//! Testing notes
//! -------------
//! - Unit tests in [`transformations`] compare against naïve formulas on safe
//!   grids and check tail behavior.

pub mod transformations;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::transformations::{LOG_EPS, PROB_CEIL, guarded_ln, logistic, safe_logistic};

pub mod prelude {
    pub use super::transformations::{LOG_EPS, guarded_ln, logistic, safe_logistic};
}
