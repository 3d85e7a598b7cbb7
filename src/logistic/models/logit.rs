//! Binary logistic regression fitted by gradient ascent.
//!
//! [`LogisticRegression`] owns all training state: the [`Standardizer`]
//! fitted on the raw features, the standardized design (original order), a
//! separately owned copy that the stochastic optimizer reshuffles, the weight
//! vector (zeros at construction, intercept first), the likelihood history of
//! the last optimizer call, and that call's [`AscentOutcome`].
//!
//! Lifecycle:
//! 1. `new` validates `X`/`y`, fits the standardizer and builds the design.
//! 2. `gradient_ascent` / `stochastic_gradient_ascent` may be called any
//!    number of times, in any order; each resumes from the current weights and
//!    rebuilds the history from scratch.
//! 3. `predict_probability` and `get_coefficients` read the current weights.
use crate::{
    logistic::{
        core::{
            data::DesignData,
            likelihood::{self, LogisticLikelihood},
            options::LogitOptions,
            standardizer::Standardizer,
            validation::validate_labels,
        },
        errors::LogitResult,
    },
    optimization::loglik_optimizer::{
        batch::ascend_batch,
        shuffle::{RandomShuffler, RowShuffler},
        stochastic::ascend_stochastic,
        traits::{AscentOptions, AscentOutcome},
        types::{Grad, Weights},
    },
};
use ndarray::{Array1, ArrayView1, ArrayView2};

/// Logistic regression model with batch and stochastic gradient ascent.
///
/// # Notes
/// - Weights live on the standardized scale; use [`get_coefficients`] for
///   raw-scale coefficients.
/// - `results` is `None` until an optimizer has run.
///
/// [`get_coefficients`]: LogisticRegression::get_coefficients
#[derive(Debug, Clone, PartialEq)]
pub struct LogisticRegression {
    standardizer: Standardizer,
    data: DesignData,
    shuffled: DesignData,
    weights: Weights,
    likelihood_history: Vec<f64>,
    results: Option<AscentOutcome>,
    options: LogitOptions,
}

impl LogisticRegression {
    /// Build a model from raw features `x` (n × m) and labels `y` (length n).
    ///
    /// # Errors
    /// - `LogitError::InvalidTolerance` if `tolerance` is non-finite or `<= 0`.
    /// - Any error of [`LogisticRegression::with_options`].
    pub fn new(x: ArrayView2<f64>, y: ArrayView1<f64>, tolerance: f64) -> LogitResult<Self> {
        Self::with_options(x, y, LogitOptions::new(tolerance)?)
    }

    /// Build a model with explicit [`LogitOptions`].
    ///
    /// # Errors
    /// - `EmptyData` / `NoFeatures` / `NonFiniteFeature` for malformed `x`.
    /// - `RowCountMismatch` / `InvalidLabel` for malformed `y`.
    /// - `ZeroVariance` if any feature column is constant.
    pub fn with_options(
        x: ArrayView2<f64>, y: ArrayView1<f64>, options: LogitOptions,
    ) -> LogitResult<Self> {
        LogitOptions::new(options.tolerance)?;
        let standardizer = Standardizer::fit(x)?;
        validate_labels(y, x.nrows())?;

        let design = standardizer.transform(x)?;
        let weights = Weights::zeros(design.ncols());
        let data = DesignData::new(design, y.to_owned())?;
        let shuffled = data.clone();

        Ok(Self {
            standardizer,
            data,
            shuffled,
            weights,
            likelihood_history: Vec::new(),
            results: None,
            options,
        })
    }

    // ---- Likelihood engine -------------------------------------------------

    /// Probability of label 1 for every training row at the current weights.
    pub fn probability(&self) -> Array1<f64> {
        likelihood::probability(&self.data, &self.weights)
    }

    /// Negated log-likelihood at the current weights (smaller is better).
    pub fn log_likelihood(&self) -> f64 {
        likelihood::log_likelihood(&self.data, &self.weights)
    }

    /// Gradient of the log-likelihood at the current weights (ascent
    /// direction).
    pub fn log_likelihood_gradient(&self) -> Grad {
        likelihood::log_likelihood_gradient(&self.data, &self.weights)
    }

    /// Probability for row `row` of the *shuffled* training copy.
    ///
    /// # Errors
    /// - `OptimizationFailed` wrapping `RowOutOfRange` if `row >= n`.
    pub fn row_probability(&self, row: usize) -> LogitResult<f64> {
        Ok(likelihood::row_probability(&self.shuffled, &self.weights, row)?)
    }

    /// Gradient contribution of row `row` of the *shuffled* training copy.
    ///
    /// # Errors
    /// - `OptimizationFailed` wrapping `RowOutOfRange` if `row >= n`.
    pub fn row_log_likelihood_gradient(&self, row: usize) -> LogitResult<Grad> {
        Ok(likelihood::row_log_likelihood_gradient(&self.shuffled, &self.weights, row)?)
    }

    // ---- Optimizers --------------------------------------------------------

    /// Full-batch gradient ascent from the current weights.
    ///
    /// Stops when the change in [`log_likelihood`](Self::log_likelihood) is at
    /// most the model tolerance or after `opts.max_iter` steps; neither case is
    /// an error. The history is reset to the initial value plus one entry per
    /// step, and the outcome is stored in [`results`](Self::results).
    ///
    /// # Errors
    /// - Invalid `opts`, or a non-finite gradient/value during the run. The
    ///   weights keep whatever steps completed before the failure and
    ///   [`results`](Self::results) is `None`.
    pub fn gradient_ascent(&mut self, opts: &AscentOptions) -> LogitResult<()> {
        self.results = None;
        let outcome = ascend_batch(
            &LogisticLikelihood,
            &mut self.weights,
            &self.data,
            &mut self.likelihood_history,
            self.options.tolerance,
            opts,
        )?;
        self.results = Some(outcome);
        Ok(())
    }

    /// Stochastic (per-row) gradient ascent from the current weights.
    ///
    /// Rows are reshuffled before every epoch with a [`RandomShuffler`] seeded
    /// from `opts.seed` (OS entropy when `None`). Each row step adds
    /// `alpha · (yᵢ − pᵢ) · xᵢ` without dividing by the row count.
    ///
    /// # Errors
    /// Same as [`gradient_ascent`](Self::gradient_ascent).
    pub fn stochastic_gradient_ascent(&mut self, opts: &AscentOptions) -> LogitResult<()> {
        let mut shuffler = RandomShuffler::from_seed_option(opts.seed);
        self.stochastic_gradient_ascent_with(opts, &mut shuffler)
    }

    /// Stochastic gradient ascent with a caller-supplied permutation source.
    /// `opts.seed` is ignored.
    ///
    /// # Errors
    /// Same as [`gradient_ascent`](Self::gradient_ascent), plus
    /// `InvalidPermutation` if `shuffler` returns a non-permutation.
    pub fn stochastic_gradient_ascent_with<S: RowShuffler + ?Sized>(
        &mut self, opts: &AscentOptions, shuffler: &mut S,
    ) -> LogitResult<()> {
        self.results = None;
        let outcome = ascend_stochastic(
            &LogisticLikelihood,
            &mut self.weights,
            &self.data,
            &mut self.shuffled,
            &mut self.likelihood_history,
            self.options.tolerance,
            opts,
            shuffler,
        )?;
        self.results = Some(outcome);
        Ok(())
    }

    // ---- Inference ---------------------------------------------------------

    /// Probability of label 1 for raw rows `x_new`, standardized with the
    /// training statistics.
    ///
    /// # Errors
    /// - `FeatureCountMismatch` if `x_new` does not have the training column
    ///   count; `NonFiniteFeature` for a NaN/±∞ entry.
    ///
    /// A `0 × m` input yields an empty array.
    pub fn predict_probability(&self, x_new: ArrayView2<f64>) -> LogitResult<Array1<f64>> {
        let design = self.standardizer.transform(x_new)?;
        let labels = Array1::zeros(design.nrows());
        let scoring = DesignData::new(design, labels)?;
        Ok(likelihood::probability(&scoring, &self.weights))
    }

    /// Raw-scale coefficients, intercept first.
    pub fn get_coefficients(&self) -> Array1<f64> {
        self.standardizer.to_original_scale(&self.weights)
    }

    // ---- Accessors ---------------------------------------------------------

    pub fn weights(&self) -> &Weights {
        &self.weights
    }

    pub fn likelihood_history(&self) -> &[f64] {
        &self.likelihood_history
    }

    pub fn results(&self) -> Option<&AscentOutcome> {
        self.results.as_ref()
    }

    pub fn standardizer(&self) -> &Standardizer {
        &self.standardizer
    }

    /// Training design in original row order.
    pub fn design(&self) -> &DesignData {
        &self.data
    }

    /// Training design in the order of the last stochastic epoch.
    pub fn shuffled(&self) -> &DesignData {
        &self.shuffled
    }

    pub fn tolerance(&self) -> f64 {
        self.options.tolerance
    }
}
