//! logistic: binary logistic regression (data, likelihood, model, errors).
//!
//! Purpose
//! -------
//! Provide a from-scratch binary logistic regression under one namespace:
//! feature standardization and likelihood primitives in [`core`], the
//! [`LogisticRegression`] model in [`models`], and the [`LogitError`] surface
//! in [`errors`]. This is the entry point most consumers (including the
//! Python bindings) should depend on.
//!
//! Key behaviors
//! -------------
//! - Standardize raw features with training-set mean and population std, and
//!   prepend an intercept column.
//! - Fit weights by batch or stochastic gradient ascent on the Bernoulli
//!   log-likelihood, resuming from the current weights on every call.
//! - Score new rows with the stored statistics and map weights back to
//!   raw-feature coefficients.
//!
//! Invariants & assumptions
//! ------------------------
//! - Labels are exactly 0 or 1; features are finite; no feature column is
//!   constant. All three are checked at construction.
//! - Weights have length `m + 1` with the intercept at index 0.
//! - A model instance is single-owner; nothing here is shared across
//!   instances.
//!
//! Conventions
//! -----------
//! - `log_likelihood()` reports the *negated* log-likelihood while the ascent
//!   step climbs the positive one. Convergence uses the absolute change, so
//!   the pairing is consistent.
//! - Errors are [`LogitResult`]; optimizer failures arrive wrapped as
//!   [`LogitError::OptimizationFailed`].
//!
//! Downstream usage
//! ----------------
//! 1. `LogisticRegression::new(x.view(), y.view(), 1e-5)?`
//! 2. `model.gradient_ascent(&AscentOptions::batch())?` or
//!    `model.stochastic_gradient_ascent(&AscentOptions::stochastic())?`
//! 3. `model.predict_probability(x_new.view())?`, `model.get_coefficients()`,
//!    `model.likelihood_history()`, `model.results()`.

pub mod core;
pub mod errors;
pub mod models;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::core::{DesignData, LogitOptions, LogisticLikelihood, Standardizer};
pub use self::errors::{LogitError, LogitResult};
pub use self::models::LogisticRegression;

pub mod prelude {
    pub use super::{
        DesignData, LogisticLikelihood, LogisticRegression, LogitError, LogitOptions, LogitResult,
        Standardizer,
    };
}
