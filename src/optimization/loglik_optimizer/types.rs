//! loglik_optimizer::types: shared numeric aliases and default settings.
//!
//! Purpose
//! -------
//! Centralize the numeric types used by the gradient-ascent loops so the rest
//! of the optimizer can stay agnostic to `ndarray` details, and record the
//! documented default learning rates and iteration caps in one place.
//!
//! Conventions
//! -----------
//! - `Weights` and `Grad` are conceptually column vectors of length `m + 1`
//!   (intercept first).
//! - `Design` is the `n × (m + 1)` design matrix, rows are observations.
//! - `Labels` holds one {0, 1} label per design row, stored as `f64` so it
//!   enters the gradient arithmetic directly.
use ndarray::{Array1, Array2};

/// Weight vector `w`, intercept at index 0.
pub type Weights = Array1<f64>;

/// Gradient of the log-likelihood with respect to `w`; same shape as
/// [`Weights`].
pub type Grad = Array1<f64>;

/// Design matrix: leading constant column followed by standardized features.
pub type Design = Array2<f64>;

/// Binary labels aligned with the rows of a [`Design`].
pub type Labels = Array1<f64>;

/// Default learning rate for batch gradient ascent.
pub const DEFAULT_BATCH_ALPHA: f64 = 1e-7;

/// Default iteration cap for batch gradient ascent.
pub const DEFAULT_BATCH_MAX_ITER: usize = 10_000;

/// Default learning rate for stochastic gradient ascent.
pub const DEFAULT_STOCHASTIC_ALPHA: f64 = 0.1;

/// Default epoch cap for stochastic gradient ascent.
pub const DEFAULT_STOCHASTIC_MAX_ITER: usize = 100;

/// Default log-likelihood change tolerance.
pub const DEFAULT_TOLERANCE: f64 = 1e-5;
