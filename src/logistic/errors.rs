//! Errors for the logistic regression model (input validation, standardization,
//! inference shape checks, and optimizer failures).
//!
//! [`LogitError`] is the model-level error type. It implements
//! `Display`/`Error` and converts to a Python `ValueError` when the
//! `python-bindings` feature is enabled.
//!
//! ## Conventions
//! - **Indices are 0-based**; `row` indexes observations, `col`/`feature`
//!   indexes raw feature columns (before the intercept column is added).
//! - Labels must be exactly `0.0` or `1.0`.
//! - Optimizer configuration errors other than the tolerance are carried as
//!   [`LogitError::OptimizationFailed`] with the optimizer's message.
use crate::optimization::errors::OptError;
#[cfg(feature = "python-bindings")]
use pyo3::{PyErr, exceptions::PyValueError};

/// Result alias for model operations that may produce [`LogitError`].
pub type LogitResult<T> = Result<T, LogitError>;

/// Unified error type for logistic regression.
#[derive(Debug, Clone, PartialEq)]
pub enum LogitError {
    // ---- Input/data validation ----
    /// Feature matrix has no rows.
    EmptyData,

    /// Feature matrix has no columns.
    NoFeatures,

    /// Feature rows and label count differ.
    RowCountMismatch { features: usize, labels: usize },

    /// A feature value is NaN/±inf.
    NonFiniteFeature { row: usize, col: usize, value: f64 },

    /// A label is not exactly 0 or 1.
    InvalidLabel { index: usize, value: f64 },

    // ---- Standardization ----
    /// A feature column has zero variance, so it cannot be standardized.
    ZeroVariance { feature: usize, std: f64 },

    /// Inference data has a different number of features than training data.
    FeatureCountMismatch { expected: usize, found: usize },

    // ---- Options ----
    /// Tolerance must be finite and > 0.
    InvalidTolerance { tol: f64, reason: &'static str },

    // ---- Estimation / optimizer ----
    /// Optimizer failed; include a human-readable status/reason.
    OptimizationFailed { status: String },
}

impl std::error::Error for LogitError {}

impl std::fmt::Display for LogitError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            // ---- Input/data validation ----
            LogitError::EmptyData => {
                write!(f, "Feature matrix has no rows.")
            }
            LogitError::NoFeatures => {
                write!(f, "Feature matrix has no columns.")
            }
            LogitError::RowCountMismatch { features, labels } => {
                write!(f, "Feature matrix has {features} rows but {labels} labels were given.")
            }
            LogitError::NonFiniteFeature { row, col, value } => {
                write!(f, "Feature value at row {row}, column {col} is non-finite: {value}")
            }
            LogitError::InvalidLabel { index, value } => {
                write!(f, "Label at index {index} must be 0 or 1; got: {value}")
            }
            // ---- Standardization ----
            LogitError::ZeroVariance { feature, std } => {
                write!(
                    f,
                    "Feature {feature} has zero variance (std = {std}); it cannot be standardized."
                )
            }
            LogitError::FeatureCountMismatch { expected, found } => {
                write!(f, "Feature count mismatch: model has {expected} features, got {found}")
            }
            // ---- Options ----
            LogitError::InvalidTolerance { tol, reason } => {
                write!(f, "Invalid tolerance {tol}: {reason}")
            }
            // ---- Estimation / optimizer ----
            LogitError::OptimizationFailed { status } => {
                write!(f, "Optimizer failed with status: {status}")
            }
        }
    }
}

impl From<OptError> for LogitError {
    fn from(err: OptError) -> LogitError {
        match err {
            OptError::InvalidTolerance { tol, reason } => LogitError::InvalidTolerance { tol, reason },
            other => LogitError::OptimizationFailed { status: other.to_string() },
        }
    }
}

/// Convert a [`LogitError`] into a Python `ValueError` with the error message.
///
/// This is used at the Rust↔Python boundary to surface domain errors cleanly.
#[cfg(feature = "python-bindings")]
impl std::convert::From<LogitError> for PyErr {
    fn from(err: LogitError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}
