//! Row-aligned design matrix and labels.
//!
//! Purpose
//! -------
//! Carry the standardized design matrix together with its labels as one
//! value, so that every reordering moves both arrays at once. The model keeps
//! two of these: the training data in its original order, and an
//! independently owned copy that the stochastic optimizer permutes each epoch.
//!
//! Invariants
//! ----------
//! - `features.nrows() == labels.len()`.
//! - After any number of `permute_rows` calls, `labels[i]` still belongs to
//!   the observation in `features.row(i)`.
use crate::{
    logistic::errors::{LogitError, LogitResult},
    optimization::{
        errors::OptResult,
        loglik_optimizer::{types::Design, types::Labels, validation::validate_permutation},
    },
};
use ndarray::Axis;

/// `DesignData`: design matrix plus aligned labels.
///
/// Fields
/// ------
/// - `features`: `n × (m + 1)` design matrix, intercept column first.
/// - `labels`: `n` labels in {0, 1}.
#[derive(Debug, Clone, PartialEq)]
pub struct DesignData {
    features: Design,
    labels: Labels,
}

impl DesignData {
    /// Pair a design matrix with its labels.
    ///
    /// # Errors
    /// - [`LogitError::RowCountMismatch`] when the row and label counts differ.
    pub fn new(features: Design, labels: Labels) -> LogitResult<Self> {
        if features.nrows() != labels.len() {
            return Err(LogitError::RowCountMismatch {
                features: features.nrows(),
                labels: labels.len(),
            });
        }
        Ok(Self { features, labels })
    }

    pub fn features(&self) -> &Design {
        &self.features
    }

    pub fn labels(&self) -> &Labels {
        &self.labels
    }

    pub fn n_rows(&self) -> usize {
        self.features.nrows()
    }

    /// Number of design columns, intercept included.
    pub fn n_cols(&self) -> usize {
        self.features.ncols()
    }

    /// Reorder rows so that new row `i` is old row `perm[i]`, moving features
    /// and labels together.
    ///
    /// # Errors
    /// - `OptError::InvalidPermutation` if `perm` is not a permutation of
    ///   `0..n_rows`. The data is left untouched in that case.
    pub fn permute_rows(&mut self, perm: &[usize]) -> OptResult<()> {
        validate_permutation(perm, self.n_rows())?;
        self.features = self.features.select(Axis(0), perm);
        self.labels = self.labels.select(Axis(0), perm);
        Ok(())
    }
}
