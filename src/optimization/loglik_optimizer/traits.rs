//! Public API surface for gradient-ascent optimization.
//!
//! - [`LogLikelihood`]: trait a model implements to be fitted by batch ascent.
//! - [`RowLogLikelihood`]: per-row extension used by the stochastic loop.
//! - [`AscentOptions`]: learning rate, iteration cap and shuffle seed.
//! - [`AscentOutcome`]: normalized diagnostics returned by both loops.
//!
//! Convention: the loops *add* `alpha · grad` to the weights, so `grad` must be
//! the gradient of the quantity being climbed. `value` is only consumed as a
//! convergence signal through `|value_new − value_old|`; its sign is free.
use crate::optimization::{
    errors::OptResult,
    loglik_optimizer::{
        types::{
            DEFAULT_BATCH_ALPHA, DEFAULT_BATCH_MAX_ITER, DEFAULT_STOCHASTIC_ALPHA,
            DEFAULT_STOCHASTIC_MAX_ITER, Grad, Weights,
        },
        validation::{validate_grad, validate_value, verify_alpha, verify_max_iter},
    },
};

/// Objective interface for batch gradient ascent.
///
/// - `type Data`: per-model data carried into `value`/`grad`/`check`.
///
/// Required:
/// - `value(&Weights, &Data) -> OptResult<f64>`: convergence signal at `w`.
/// - `grad(&Weights, &Data) -> OptResult<Grad>`: ascent direction at `w`.
/// - `check(&Weights, &Data) -> OptResult<()>`: validation hook to reject
///   inconsistent `w`/`data` pairs. Called once before optimization.
pub trait LogLikelihood {
    type Data;

    fn value(&self, weights: &Weights, data: &Self::Data) -> OptResult<f64>;
    fn grad(&self, weights: &Weights, data: &Self::Data) -> OptResult<Grad>;
    fn check(&self, weights: &Weights, data: &Self::Data) -> OptResult<()>;
}

/// Per-row extension of [`LogLikelihood`] for stochastic ascent.
///
/// The stochastic loop owns a separately shuffled copy of the data. Rows are
/// addressed by their position in that copy, and `permute_rows` must move every
/// row-aligned array (features *and* labels) together.
pub trait RowLogLikelihood: LogLikelihood {
    fn n_rows(&self, data: &Self::Data) -> usize;

    /// Ascent direction contributed by row `row` alone.
    fn row_grad(&self, weights: &Weights, data: &Self::Data, row: usize) -> OptResult<Grad>;

    /// Reorder rows so that new row `i` is old row `perm[i]`.
    fn permute_rows(&self, data: &mut Self::Data, perm: &[usize]) -> OptResult<()>;
}

/// Optimizer-level configuration.
///
/// Fields:
/// - `alpha: f64`: learning rate; finite and `> 0`.
/// - `max_iter: usize`: iteration cap (epochs for the stochastic loop); `> 0`.
/// - `seed: Option<u64>`: seed for the stochastic row shuffle; `None` draws
///   from OS entropy. Ignored by the batch loop.
///
/// Defaults:
/// - [`AscentOptions::batch`]: `alpha = 1e-7`, `max_iter = 10_000`.
/// - [`AscentOptions::stochastic`]: `alpha = 0.1`, `max_iter = 100`.
/// - `Default` is the batch configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AscentOptions {
    pub alpha: f64,
    pub max_iter: usize,
    pub seed: Option<u64>,
}

impl AscentOptions {
    /// Construct validated options.
    ///
    /// # Errors
    /// - [`OptError::InvalidAlpha`](crate::optimization::errors::OptError::InvalidAlpha)
    ///   for a non-finite or non-positive learning rate.
    /// - [`OptError::InvalidMaxIter`](crate::optimization::errors::OptError::InvalidMaxIter)
    ///   if `max_iter == 0`.
    pub fn new(alpha: f64, max_iter: usize, seed: Option<u64>) -> OptResult<Self> {
        let opts = Self { alpha, max_iter, seed };
        opts.validate()?;
        Ok(opts)
    }

    /// Documented batch defaults (`alpha = 1e-7`, `max_iter = 10_000`).
    pub fn batch() -> Self {
        Self { alpha: DEFAULT_BATCH_ALPHA, max_iter: DEFAULT_BATCH_MAX_ITER, seed: None }
    }

    /// Documented stochastic defaults (`alpha = 0.1`, `max_iter = 100`).
    pub fn stochastic() -> Self {
        Self { alpha: DEFAULT_STOCHASTIC_ALPHA, max_iter: DEFAULT_STOCHASTIC_MAX_ITER, seed: None }
    }

    /// Return a copy with the shuffle seed set.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Re-check the public fields; the loops call this before running since
    /// fields can be mutated after construction.
    pub fn validate(&self) -> OptResult<()> {
        verify_alpha(self.alpha)?;
        verify_max_iter(self.max_iter)
    }
}

impl Default for AscentOptions {
    fn default() -> Self {
        Self::batch()
    }
}

/// Canonical result of an ascent run.
///
/// - `value`: last recorded convergence value (the final history entry).
/// - `converged`: `true` when the tolerance criterion stopped the run, `false`
///   when the iteration cap did. Both are normal termination.
/// - `status`: human-readable termination reason.
/// - `iterations`: completed iterations (epochs for the stochastic loop).
/// - `grad_norm`: L2 norm of the full-batch gradient at the final weights.
#[derive(Debug, Clone, PartialEq)]
pub struct AscentOutcome {
    pub value: f64,
    pub converged: bool,
    pub status: String,
    pub iterations: usize,
    pub grad_norm: Option<f64>,
}

impl AscentOutcome {
    /// Build a validated [`AscentOutcome`] from raw loop state.
    ///
    /// # Errors
    /// - Propagates `validate_value` on `value`.
    /// - Propagates `validate_grad` on `grad` when present.
    pub fn new(
        value: f64, last_difference: f64, tolerance: f64, iterations: usize, grad: Option<&Grad>,
    ) -> OptResult<Self> {
        validate_value(value)?;
        let converged = last_difference <= tolerance;
        let status = if converged {
            format!("Log-likelihood change {last_difference:e} within tolerance {tolerance:e}")
        } else {
            format!("Maximum iterations ({iterations}) reached")
        };
        let grad_norm = match grad {
            Some(g) => {
                validate_grad(g, g.len())?;
                Some(g.dot(g).sqrt())
            }
            None => None,
        };
        Ok(Self { value, converged, status, iterations, grad_norm })
    }
}
