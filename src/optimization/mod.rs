//! optimization: gradient-ascent stack, numerical helpers, and error surface.
//!
//! Purpose
//! -------
//! Provide the optimization layer for model fitting: first-order ascent loops
//! over a log-likelihood, numerically guarded scalar transforms, and a single
//! error/result surface. Models implement a log-likelihood and its gradient;
//! this layer owns step sizes, stopping rules and diagnostics.
//!
//! Key behaviors
//! -------------
//! - Batch and stochastic gradient ascent (`loglik_optimizer`) with a
//!   log-likelihood-change tolerance and an iteration cap.
//! - Stable logistic and ε-guarded logarithm helpers
//!   (`numerical_stability`).
//! - Configuration issues and numerical failures normalized into
//!   `errors::OptError` with the `OptResult<T>` alias.
//!
//! Conventions
//! -----------
//! - Weights, gradients and design matrices are `ndarray` containers over
//!   `f64` (see `loglik_optimizer::types`).
//! - Public entry points that can fail return `OptResult<T>`.
//! - Only the ascent loops log, and only through the `log` facade.
//!
//! Downstream usage
//! ----------------
//! - The logistic model implements `LogLikelihood` / `RowLogLikelihood` and
//!   calls `ascend_batch` / `ascend_stochastic` with its own weights, history
//!   and shuffled data copy.
//! - Front-ends can import everything via `optimization::prelude::*`.

pub mod errors;
pub mod loglik_optimizer;
pub mod numerical_stability;

pub mod prelude {
    pub use super::errors::{OptError, OptResult};
    pub use super::loglik_optimizer::prelude::*;
    pub use super::numerical_stability::prelude::*;
}
