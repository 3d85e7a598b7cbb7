//! loglik_optimizer: first-order ascent on log-likelihoods.
//!
//! Purpose
//! -------
//! Provide the fitting loops used by the logistic model: a batch gradient
//! ascent and a stochastic per-row variant, both with a log-likelihood-change
//! stopping rule and an iteration cap. Callers implement [`LogLikelihood`]
//! (plus [`RowLogLikelihood`] for the stochastic loop) and call
//! [`ascend_batch`] or [`ascend_stochastic`].
//!
//! Key behaviors
//! -------------
//! - Update a caller-owned weight vector in place with `w ← w + α · g`, so
//!   repeated calls resume from the current weights.
//! - Rebuild a caller-owned history vector on every call: the initial value,
//!   then one value per iteration (batch) or epoch (stochastic).
//! - Stop when `|value_new − value_old| ≤ tolerance` or when `max_iter`
//!   iterations have run; both are reported through [`AscentOutcome`], never
//!   as errors.
//! - Draw a fresh row permutation per epoch from an injected [`RowShuffler`]
//!   and apply it to a separately owned copy of the data.
//!
//! Invariants & assumptions
//! ------------------------
//! - `grad` is the direction being *climbed*; `value` is only used through
//!   absolute differences, so its sign convention is up to the model.
//! - Gradients and values are validated as finite every step; a failure
//!   aborts the run with an [`OptError`](crate::optimization::errors::OptError).
//! - Single-threaded; all state is borrowed from the caller for the duration
//!   of the call.
//!
//! Conventions
//! -----------
//! - Numeric containers are the aliases in [`types`] (`Weights`, `Grad`,
//!   `Design`, `Labels`).
//! - Progress is reported through the `log` facade: `debug!` at start and
//!   finish, `trace!` per iteration. No logger is installed here.
//!
//! Testing notes
//! -------------
//! - Unit tests in [`batch`] and [`stochastic`] drive the loops with small
//!   quadratic objectives where the iterates can be computed by hand.
//! - Logistic-specific convergence is covered in `logistic::models::logit`
//!   and the integration tests.

pub mod batch;
pub mod shuffle;
pub mod stochastic;
pub mod traits;
pub mod types;
pub mod validation;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::batch::ascend_batch;
pub use self::shuffle::{RandomShuffler, RowShuffler};
pub use self::stochastic::ascend_stochastic;
pub use self::traits::{AscentOptions, AscentOutcome, LogLikelihood, RowLogLikelihood};
pub use self::types::{Design, Grad, Labels, Weights};

pub mod prelude {
    pub use super::batch::ascend_batch;
    pub use super::shuffle::{RandomShuffler, RowShuffler};
    pub use super::stochastic::ascend_stochastic;
    pub use super::traits::{AscentOptions, AscentOutcome, LogLikelihood, RowLogLikelihood};
    pub use super::types::{Grad, Weights};
}
