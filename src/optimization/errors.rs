//! Errors for the gradient-ascent optimizer layer.
//!
//! [`OptError`] covers configuration mistakes (learning rate, tolerance,
//! iteration cap), dimension mismatches between weights, gradients and data,
//! and numerical failures (non-finite gradients or log-likelihood values)
//! detected while the ascent loops run.
#[cfg(feature = "python-bindings")]
use pyo3::{PyErr, exceptions::PyValueError};

/// Crate-wide result alias for optimizer operations.
pub type OptResult<T> = Result<T, OptError>;

#[derive(Debug, Clone, PartialEq)]
pub enum OptError {
    // ---- AscentOptions ----
    /// Learning rate needs to be positive and finite.
    InvalidAlpha {
        alpha: f64,
        reason: &'static str,
    },

    /// Log-likelihood change tolerance needs to be positive and finite.
    InvalidTolerance {
        tol: f64,
        reason: &'static str,
    },

    /// Maximum iterations needs to be positive.
    InvalidMaxIter {
        max_iter: usize,
        reason: &'static str,
    },

    // ---- Gradient ----
    /// Gradient dimensions do not match weight dimensions.
    GradientDimMismatch {
        expected: usize,
        found: usize,
    },

    /// Gradient elements need to be finite.
    InvalidGradient {
        index: usize,
        value: f64,
        reason: &'static str,
    },

    // ---- Weights / data ----
    /// Weight vector length does not match the design matrix width.
    WeightDimMismatch {
        expected: usize,
        found: usize,
    },

    /// Row index outside of the data.
    RowOutOfRange {
        row: usize,
        n_rows: usize,
    },

    /// A row permutation does not cover every row exactly once.
    InvalidPermutation {
        n_rows: usize,
        reason: &'static str,
    },

    // ---- Objective ----
    /// Log-likelihood evaluated to a non-finite value.
    NonFiniteLogLik {
        value: f64,
    },
}

impl std::error::Error for OptError {}

impl std::fmt::Display for OptError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            // ---- AscentOptions ----
            OptError::InvalidAlpha { alpha, reason } => {
                write!(f, "Invalid learning rate {alpha}: {reason}")
            }
            OptError::InvalidTolerance { tol, reason } => {
                write!(f, "Invalid log-likelihood change tolerance {tol}: {reason}")
            }
            OptError::InvalidMaxIter { max_iter, reason } => {
                write!(f, "Invalid maximum iterations {max_iter}: {reason}")
            }

            // ---- Gradient ----
            OptError::GradientDimMismatch { expected, found } => {
                write!(f, "Gradient dimension mismatch: expected {expected}, found {found}")
            }
            OptError::InvalidGradient { index, value, reason } => {
                write!(f, "Invalid gradient at index {index}: {value}: {reason}")
            }

            // ---- Weights / data ----
            OptError::WeightDimMismatch { expected, found } => {
                write!(f, "Weight dimension mismatch: expected {expected}, found {found}")
            }
            OptError::RowOutOfRange { row, n_rows } => {
                write!(f, "Row {row} out of range for data with {n_rows} rows")
            }
            OptError::InvalidPermutation { n_rows, reason } => {
                write!(f, "Invalid row permutation for {n_rows} rows: {reason}")
            }

            // ---- Objective ----
            OptError::NonFiniteLogLik { value } => {
                write!(f, "Non-finite log-likelihood value: {value}")
            }
        }
    }
}

/// Convert an [`OptError`] into a Python `ValueError` with the error message.
#[cfg(feature = "python-bindings")]
impl std::convert::From<OptError> for PyErr {
    fn from(err: OptError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    // Purpose
    // -------
    // Check that `Display` carries the offending values so messages surfaced
    // to callers are actionable.
    //
    // Given
    // -----
    // - An `InvalidAlpha` and a `GradientDimMismatch` error.
    //
    // Expect
    // ------
    // - Each message contains the numbers stored in the variant.
    fn display_includes_offending_values() {
        let alpha = OptError::InvalidAlpha { alpha: -0.5, reason: "Must be positive." };
        let dim = OptError::GradientDimMismatch { expected: 3, found: 2 };

        assert!(alpha.to_string().contains("-0.5"));
        assert!(dim.to_string().contains("expected 3, found 2"));
    }
}
