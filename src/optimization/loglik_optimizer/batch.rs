//! Batch gradient ascent.
//!
//! One step per iteration along the full-data gradient:
//!
//! ```text
//! w ← w + α · ∇ℓ(w)
//! ```
//!
//! The run stops when the absolute change of the convergence value between
//! consecutive iterations is at most `tolerance`, or after `max_iter`
//! iterations. Both are normal termination; [`AscentOutcome::converged`]
//! records which one applied.
use crate::optimization::{
    errors::OptResult,
    loglik_optimizer::{
        traits::{AscentOptions, AscentOutcome, LogLikelihood},
        types::Weights,
        validation::{validate_grad, validate_value, verify_tolerance},
    },
};
use log::{debug, trace};

/// Run batch gradient ascent on `weights` in place.
///
/// # Behavior
/// 1. Validate `opts`, `tolerance`, and `(weights, data)` via `f.check`.
/// 2. Clear `history` and record the initial value.
/// 3. Loop while `difference > tolerance && iteration < opts.max_iter`:
///    step along `f.grad`, re-evaluate, push the new value to `history`.
///    `difference` starts at `tolerance + 1`, so at least one step is taken.
/// 4. Evaluate the gradient at the final weights for diagnostics.
///
/// Weights are *not* reset: a second call resumes from where the first left
/// off. Only `history` is rebuilt.
///
/// # Errors
/// - Configuration errors from `opts.validate()` / `verify_tolerance`.
/// - Any error returned by `f.check`, `f.value`, `f.grad`.
/// - `OptError::InvalidGradient` / `OptError::NonFiniteLogLik` when the
///   arithmetic leaves the finite range. Weights keep the updates applied
///   before the failure.
pub fn ascend_batch<F: LogLikelihood>(
    f: &F, weights: &mut Weights, data: &F::Data, history: &mut Vec<f64>, tolerance: f64,
    opts: &AscentOptions,
) -> OptResult<AscentOutcome> {
    opts.validate()?;
    verify_tolerance(tolerance)?;
    f.check(weights, data)?;
    let dim = weights.len();

    let mut previous = f.value(weights, data)?;
    validate_value(previous)?;
    history.clear();
    history.push(previous);

    debug!(
        "batch ascent start: alpha={:e}, max_iter={}, tolerance={:e}, initial={}",
        opts.alpha, opts.max_iter, tolerance, previous
    );

    let mut difference = tolerance + 1.0;
    let mut iteration = 0;
    while difference > tolerance && iteration < opts.max_iter {
        let grad = f.grad(weights, data)?;
        validate_grad(&grad, dim)?;
        weights.scaled_add(opts.alpha, &grad);

        let current = f.value(weights, data)?;
        validate_value(current)?;
        difference = (current - previous).abs();
        previous = current;
        history.push(previous);
        iteration += 1;
        trace!("batch iteration {iteration}: value={previous}, change={difference:e}");
    }

    let final_grad = f.grad(weights, data)?;
    let outcome = AscentOutcome::new(previous, difference, tolerance, iteration, Some(&final_grad))?;
    debug!(
        "batch ascent finished after {} iterations: converged={}, value={}, {}",
        outcome.iterations, outcome.converged, outcome.value, outcome.status
    );
    Ok(outcome)
}
