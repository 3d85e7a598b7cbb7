//! models: user-facing logistic regression model.
//!
//! Purpose
//! -------
//! Expose [`LogisticRegression`], which owns standardization statistics, the
//! design matrix and its shuffled copy, weights and likelihood history, and
//! drives the batch and stochastic ascent loops from
//! `optimization::loglik_optimizer`.
//!
//! Testing notes
//! -------------
//! - Unit tests in [`logit`] cover construction failures, predictions at
//!   zero weights, convergence on separable toy data, monotone history with
//!   a small step, resumption semantics, coefficient mapping, and
//!   shuffle alignment.
//! - `tests/integration_logit_pipeline.rs` exercises the full pipeline on a
//!   larger synthetic dataset.

pub mod logit;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::logit::LogisticRegression;

pub mod prelude {
    pub use super::logit::LogisticRegression;
}
