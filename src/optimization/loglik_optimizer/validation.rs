//! Validation helpers for gradient-ascent optimization.
//!
//! This module centralizes the consistency checks used across the optimizer
//! interface:
//!
//! - **Option checks**: [`verify_alpha`], [`verify_tolerance`],
//!   [`verify_max_iter`] ensure configuration values are usable.
//! - **Gradient validation**: [`validate_grad`] enforces correct dimension
//!   and finite entries.
//! - **Weights**: [`validate_weights_dim`] checks the weight vector against
//!   the design width.
//! - **Objective values**: [`validate_value`] rejects non-finite
//!   log-likelihoods.
//! - **Permutations**: [`validate_permutation`] checks that a shuffle covers
//!   each row exactly once.
use crate::optimization::{
    errors::{OptError, OptResult},
    loglik_optimizer::types::{Grad, Weights},
};

/// Validate a learning rate.
///
/// # Errors
/// Returns [`OptError::InvalidAlpha`] if `alpha` is non-finite or ≤ 0.0.
pub fn verify_alpha(alpha: f64) -> OptResult<()> {
    if !alpha.is_finite() {
        return Err(OptError::InvalidAlpha { alpha, reason: "Learning rate must be finite." });
    }
    if alpha <= 0.0 {
        return Err(OptError::InvalidAlpha { alpha, reason: "Learning rate must be positive." });
    }
    Ok(())
}

/// Validate the log-likelihood change tolerance.
///
/// # Errors
/// Returns [`OptError::InvalidTolerance`] if the value is non-finite or ≤ 0.0.
pub fn verify_tolerance(tol: f64) -> OptResult<()> {
    if !tol.is_finite() {
        return Err(OptError::InvalidTolerance { tol, reason: "Tolerance must be finite." });
    }
    if tol <= 0.0 {
        return Err(OptError::InvalidTolerance { tol, reason: "Tolerance must be positive." });
    }
    Ok(())
}

/// Validate the iteration cap.
///
/// # Errors
/// Returns [`OptError::InvalidMaxIter`] if `max_iter == 0`.
pub fn verify_max_iter(max_iter: usize) -> OptResult<()> {
    if max_iter == 0 {
        return Err(OptError::InvalidMaxIter {
            max_iter,
            reason: "Maximum iterations must be greater than zero.",
        });
    }
    Ok(())
}

/// Validate a gradient vector against dimension and finiteness.
///
/// # Errors
/// - [`OptError::GradientDimMismatch`] if length does not match `dim`.
/// - [`OptError::InvalidGradient`] with the index/value of the first
///   offending element.
pub fn validate_grad(grad: &Grad, dim: usize) -> OptResult<()> {
    if grad.len() != dim {
        return Err(OptError::GradientDimMismatch { expected: dim, found: grad.len() });
    }
    for (index, &value) in grad.iter().enumerate() {
        if !value.is_finite() {
            return Err(OptError::InvalidGradient {
                index,
                value,
                reason: "Gradient elements must be finite.",
            });
        }
    }
    Ok(())
}

/// Validate that the weight vector has one entry per design column.
///
/// # Errors
/// Returns [`OptError::WeightDimMismatch`] on a length mismatch.
pub fn validate_weights_dim(weights: &Weights, n_cols: usize) -> OptResult<()> {
    if weights.len() != n_cols {
        return Err(OptError::WeightDimMismatch { expected: n_cols, found: weights.len() });
    }
    Ok(())
}

/// Validate that a log-likelihood value is finite.
///
/// # Errors
/// Returns [`OptError::NonFiniteLogLik`] if the value is `NaN` or infinite.
pub fn validate_value(value: f64) -> OptResult<()> {
    if !value.is_finite() {
        return Err(OptError::NonFiniteLogLik { value });
    }
    Ok(())
}

/// Validate that `perm` is a permutation of `0..n_rows`.
///
/// # Errors
/// Returns [`OptError::InvalidPermutation`] on a length mismatch, an index out
/// of range, or a repeated index.
pub fn validate_permutation(perm: &[usize], n_rows: usize) -> OptResult<()> {
    if perm.len() != n_rows {
        return Err(OptError::InvalidPermutation {
            n_rows,
            reason: "Permutation length must equal the number of rows.",
        });
    }
    let mut seen = vec![false; n_rows];
    for &row in perm {
        if row >= n_rows {
            return Err(OptError::InvalidPermutation {
                n_rows,
                reason: "Permutation index out of range.",
            });
        }
        if seen[row] {
            return Err(OptError::InvalidPermutation {
                n_rows,
                reason: "Permutation repeats a row.",
            });
        }
        seen[row] = true;
    }
    Ok(())
}
