//! core: data, standardization and likelihood for logistic regression.
//!
//! Purpose
//! -------
//! Collect the building blocks the logistic model is assembled from: input
//! validation, the training-set [`Standardizer`], the row-aligned
//! [`DesignData`] container, the Bernoulli log-likelihood with its batch and
//! per-row gradients, and model-level [`LogitOptions`].
//!
//! Key behaviors
//! -------------
//! - Validate raw features (non-empty, finite) and labels (count, {0, 1}).
//! - Standardize features with population statistics and prepend the
//!   intercept column; map standardized weights back to raw coefficients.
//! - Keep features and labels aligned through row permutations.
//! - Evaluate probabilities, the negated log-likelihood and its ascent
//!   gradient, and expose them to the optimizer via [`LogisticLikelihood`].
//!
//! Invariants & assumptions
//! ------------------------
//! - Design matrices carry the intercept in column 0 and `m` standardized
//!   feature columns after it.
//! - Every standardization std is finite and strictly positive.
//! - Probabilities are strictly inside (0, 1).
//!
//! Conventions
//! -----------
//! - This module performs no I/O and no logging. Failures are reported as
//!   `LogitResult` for data problems and `OptResult` for anything the
//!   optimizer calls into.
//!
//! Testing notes
//! -------------
//! - Unit tests live next to each submodule: statistics and coefficient
//!   mapping in [`standardizer`], alignment under permutation in [`data`],
//!   closed forms and finite-difference gradient checks in [`likelihood`].

pub mod data;
pub mod likelihood;
pub mod options;
pub mod standardizer;
pub mod validation;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::data::DesignData;
pub use self::likelihood::{
    LogisticLikelihood, log_likelihood, log_likelihood_gradient, probability, row_probability,
    row_log_likelihood_gradient,
};
pub use self::options::LogitOptions;
pub use self::standardizer::Standardizer;
pub use self::validation::{
    validate_feature_count, validate_features, validate_finite, validate_labels,
};

pub mod prelude {
    pub use super::data::DesignData;
    pub use super::likelihood::LogisticLikelihood;
    pub use super::options::LogitOptions;
    pub use super::standardizer::Standardizer;
}
