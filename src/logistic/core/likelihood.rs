//! Bernoulli log-likelihood of the logistic model and its gradients.
//!
//! With design matrix `X` (intercept column first), labels `y ∈ {0, 1}ⁿ` and
//! weights `w`:
//!
//! ```text
//! pᵢ     = σ(xᵢ · w)
//! value  = −Σᵢ [ yᵢ ln(pᵢ + ε) + (1 − yᵢ) ln(1 − pᵢ + ε) ]      ε = 1e-24
//! grad   = Xᵀ (y − p)
//! gradᵢ  = (yᵢ − pᵢ) · xᵢ
//! ```
//!
//! Note the signs: `value` is the *negated* log-likelihood (a cross-entropy,
//! never negative) while `grad` is the gradient of the *positive*
//! log-likelihood, i.e. the ascent direction. The optimizer only uses `value`
//! through absolute differences, so the pairing is consistent.
//!
//! `value` and the gradients use the unclamped σ, so a saturated row with
//! `pᵢ` rounding to exactly 1 and `yᵢ = 0` contributes `−ln ε ≈ 55.26`.
//! Only the reported probabilities are clamped into (0, 1).
use crate::{
    logistic::core::data::DesignData,
    optimization::{
        errors::{OptError, OptResult},
        loglik_optimizer::{
            traits::{LogLikelihood, RowLogLikelihood},
            types::{Grad, Weights},
            validation::validate_weights_dim,
        },
        numerical_stability::transformations::{guarded_ln, logistic, safe_logistic},
    },
};
use ndarray::{Array1, Zip};

/// Predicted probability `σ(xᵢ · w)` for every row of the design.
///
/// Values lie in the open interval (0, 1).
pub fn probability(data: &DesignData, weights: &Weights) -> Array1<f64> {
    data.features().dot(weights).mapv(safe_logistic)
}

fn raw_probability(data: &DesignData, weights: &Weights) -> Array1<f64> {
    data.features().dot(weights).mapv(logistic)
}

/// Negated log-likelihood at `weights`.
pub fn log_likelihood(data: &DesignData, weights: &Weights) -> f64 {
    let p = raw_probability(data, weights);
    let total = Zip::from(data.labels())
        .and(&p)
        .fold(0.0, |acc, &y, &p| acc + y * guarded_ln(p) + (1.0 - y) * guarded_ln(1.0 - p));
    -total
}

/// Full-batch gradient `Xᵀ(y − p)`.
pub fn log_likelihood_gradient(data: &DesignData, weights: &Weights) -> Grad {
    let residual = data.labels() - &raw_probability(data, weights);
    data.features().t().dot(&residual)
}

/// Probability for a single row.
///
/// # Errors
/// - [`OptError::RowOutOfRange`] if `row >= n_rows`.
pub fn row_probability(data: &DesignData, weights: &Weights, row: usize) -> OptResult<f64> {
    check_row(data, row)?;
    Ok(safe_logistic(data.features().row(row).dot(weights)))
}

/// Gradient contributed by a single row, `(yᵢ − pᵢ) · xᵢ`.
///
/// # Errors
/// - [`OptError::RowOutOfRange`] if `row >= n_rows`.
pub fn row_log_likelihood_gradient(
    data: &DesignData, weights: &Weights, row: usize,
) -> OptResult<Grad> {
    check_row(data, row)?;
    let p = logistic(data.features().row(row).dot(weights));
    let residual = data.labels()[row] - p;
    Ok(data.features().row(row).mapv(|x| residual * x))
}

fn check_row(data: &DesignData, row: usize) -> OptResult<()> {
    if row >= data.n_rows() {
        return Err(OptError::RowOutOfRange { row, n_rows: data.n_rows() });
    }
    Ok(())
}

/// Stateless adapter exposing the logistic likelihood to the ascent loops.
///
/// The model owns weights and data in separate fields; keeping the objective
/// a unit struct lets the loops borrow those fields independently.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LogisticLikelihood;

impl LogLikelihood for LogisticLikelihood {
    type Data = DesignData;

    fn value(&self, weights: &Weights, data: &DesignData) -> OptResult<f64> {
        Ok(log_likelihood(data, weights))
    }

    fn grad(&self, weights: &Weights, data: &DesignData) -> OptResult<Grad> {
        Ok(log_likelihood_gradient(data, weights))
    }

    fn check(&self, weights: &Weights, data: &DesignData) -> OptResult<()> {
        validate_weights_dim(weights, data.n_cols())
    }
}

impl RowLogLikelihood for LogisticLikelihood {
    fn n_rows(&self, data: &DesignData) -> usize {
        data.n_rows()
    }

    fn row_grad(&self, weights: &Weights, data: &DesignData, row: usize) -> OptResult<Grad> {
        row_log_likelihood_gradient(data, weights, row)
    }

    fn permute_rows(&self, data: &mut DesignData, perm: &[usize]) -> OptResult<()> {
        data.permute_rows(perm)
    }
}
