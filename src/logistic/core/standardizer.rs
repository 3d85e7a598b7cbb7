//! Per-column z-score standardization and its inverse on coefficients.
//!
//! Purpose
//! -------
//! Hold the training-set mean and population standard deviation of every raw
//! feature column, build the standardized design matrix (intercept column of
//! ones followed by `(x − mean) / std`), and map weights learned on that scale
//! back to coefficients for the raw features.
//!
//! Invariants
//! ----------
//! - `mean.len() == std.len() == m`, the raw feature count.
//! - Every `std[j]` is finite and strictly positive; fitting rejects columns
//!   whose values are all identical.
//! - The statistics are computed once, on the training data, and reused for
//!   inference inputs.
//!
//! Conventions
//! -----------
//! - Population standard deviation (`ddof = 0`).
//! - Design matrices are `n × (m + 1)` with the intercept in column 0.
use crate::{
    logistic::{
        core::validation::{validate_feature_count, validate_features, validate_finite},
        errors::{LogitError, LogitResult},
    },
    optimization::loglik_optimizer::types::{Design, Weights},
};
use ndarray::{Array1, Array2, ArrayView2, Axis, s};

/// Training-set column statistics used for standardization.
#[derive(Debug, Clone, PartialEq)]
pub struct Standardizer {
    mean: Array1<f64>,
    std: Array1<f64>,
}

impl Standardizer {
    /// Compute column means and population standard deviations of `x`.
    ///
    /// # Errors
    /// - Propagates [`validate_features`] (empty shapes, non-finite entries).
    /// - [`LogitError::ZeroVariance`] for the first column whose values are
    ///   all identical, or whose standard deviation is not a finite positive
    ///   number.
    pub fn fit(x: ArrayView2<f64>) -> LogitResult<Self> {
        validate_features(x)?;
        let mean = x.mean_axis(Axis(0)).ok_or(LogitError::EmptyData)?;
        let std = x.std_axis(Axis(0), 0.0);

        for (feature, (column, &s)) in x.axis_iter(Axis(1)).zip(std.iter()).enumerate() {
            let first = column[0];
            let constant = column.iter().all(|&v| v == first);
            if constant || !s.is_finite() || s <= 0.0 {
                return Err(LogitError::ZeroVariance { feature, std: s });
            }
        }
        Ok(Self { mean, std })
    }

    pub fn mean(&self) -> &Array1<f64> {
        &self.mean
    }

    pub fn std(&self) -> &Array1<f64> {
        &self.std
    }

    /// Raw feature count `m`.
    pub fn n_features(&self) -> usize {
        self.mean.len()
    }

    /// Build the standardized design matrix for `x` using the stored
    /// statistics.
    ///
    /// Zero rows are accepted and yield a `0 × (m + 1)` design.
    ///
    /// # Errors
    /// - [`LogitError::FeatureCountMismatch`] if `x` does not have `m` columns
    ///   (including `0 × 0` inputs).
    /// - [`LogitError::NonFiniteFeature`] for the first NaN/±∞ entry.
    pub fn transform(&self, x: ArrayView2<f64>) -> LogitResult<Design> {
        validate_feature_count(self.n_features(), x.ncols())?;
        validate_finite(x)?;

        let mut design = Array2::<f64>::ones((x.nrows(), x.ncols() + 1));
        let mut body = design.slice_mut(s![.., 1..]);
        body.assign(&x);
        body -= &self.mean;
        body /= &self.std;
        Ok(design)
    }

    /// Map standardized-scale weights `[w₀, w₁..wₘ]` to raw-scale coefficients.
    ///
    /// `coef[j] = w[j] / std[j−1]` for `j ≥ 1` and
    /// `coef[0] = w₀ − Σⱼ mean[j−1] · w[j] / std[j−1]`, so that
    /// `coef₀ + Σ coefⱼ·xⱼ` equals the standardized linear predictor for every
    /// raw row `x`.
    ///
    /// # Panics
    /// If `weights.len() != m + 1`. The model guarantees this by construction.
    pub fn to_original_scale(&self, weights: &Weights) -> Array1<f64> {
        let slopes = &weights.slice(s![1..]) / &self.std;
        let intercept = weights[0] - self.mean.dot(&slopes);

        let mut coef = Array1::<f64>::zeros(weights.len());
        coef[0] = intercept;
        coef.slice_mut(s![1..]).assign(&slopes);
        coef
    }
}
