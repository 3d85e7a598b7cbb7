//! Stochastic (per-row) gradient ascent.
//!
//! Each epoch reshuffles a private copy of the data, then takes one step per
//! row using that row's gradient alone:
//!
//! ```text
//! for i in 0..n:  w ← w + α · ∇ℓᵢ(w)
//! ```
//!
//! Row steps are not divided by `n`, so a full epoch moves the weights by
//! roughly `α · n` gradient units; larger datasets move further per epoch.
//! Convergence is checked once per epoch with the same rule as the batch
//! loop, evaluated on the unshuffled data.
use crate::optimization::{
    errors::OptResult,
    loglik_optimizer::{
        shuffle::RowShuffler,
        traits::{AscentOptions, AscentOutcome, RowLogLikelihood},
        types::Weights,
        validation::{validate_grad, validate_permutation, validate_value, verify_tolerance},
    },
};
use log::{debug, trace};

/// Run stochastic gradient ascent on `weights` in place.
///
/// # Parameters
/// - `f`: per-row objective.
/// - `weights`: current weights, updated in place (never reset).
/// - `data`: data in its original order; used for the convergence value.
/// - `shuffled`: independently owned copy of the data, permuted before every
///   epoch (including the first). Row lookups during an epoch index this copy.
/// - `history`: cleared, then receives the initial value plus one value per
///   epoch.
/// - `tolerance`, `opts`: stopping rule and step configuration.
/// - `shuffler`: permutation source; inject a seeded or fixed shuffler for
///   reproducible runs.
///
/// # Errors
/// - Configuration errors from `opts.validate()` / `verify_tolerance`.
/// - Errors from `f.check` on either `data` or `shuffled`.
/// - `OptError::InvalidPermutation` when `shuffler` returns a non-permutation.
/// - Errors from `f.value`, `f.row_grad`, `f.permute_rows`, and finiteness
///   checks on gradients and values.
pub fn ascend_stochastic<F, S>(
    f: &F, weights: &mut Weights, data: &F::Data, shuffled: &mut F::Data, history: &mut Vec<f64>,
    tolerance: f64, opts: &AscentOptions, shuffler: &mut S,
) -> OptResult<AscentOutcome>
where
    F: RowLogLikelihood,
    S: RowShuffler + ?Sized,
{
    opts.validate()?;
    verify_tolerance(tolerance)?;
    f.check(weights, data)?;
    f.check(weights, shuffled)?;
    let dim = weights.len();
    let n_rows = f.n_rows(shuffled);

    let mut previous = f.value(weights, data)?;
    validate_value(previous)?;
    history.clear();
    history.push(previous);

    debug!(
        "stochastic ascent start: alpha={:e}, max_epochs={}, rows={}, tolerance={:e}, initial={}",
        opts.alpha, opts.max_iter, n_rows, tolerance, previous
    );

    let mut difference = tolerance + 1.0;
    let mut epoch = 0;
    while difference > tolerance && epoch < opts.max_iter {
        let perm = shuffler.permutation(n_rows);
        validate_permutation(&perm, n_rows)?;
        f.permute_rows(shuffled, &perm)?;

        for row in 0..n_rows {
            let grad = f.row_grad(weights, shuffled, row)?;
            validate_grad(&grad, dim)?;
            weights.scaled_add(opts.alpha, &grad);
        }

        let current = f.value(weights, data)?;
        validate_value(current)?;
        difference = (current - previous).abs();
        previous = current;
        history.push(previous);
        epoch += 1;
        trace!("stochastic epoch {epoch}: value={previous}, change={difference:e}");
    }

    let final_grad = f.grad(weights, data)?;
    let outcome = AscentOutcome::new(previous, difference, tolerance, epoch, Some(&final_grad))?;
    debug!(
        "stochastic ascent finished after {} epochs: converged={}, value={}, {}",
        outcome.iterations, outcome.converged, outcome.value, outcome.status
    );
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::optimization::{
        errors::{OptError, OptResult},
        loglik_optimizer::{shuffle::RandomShuffler, traits::LogLikelihood, types::Grad},
    };
    use approx::assert_relative_eq;
    use ndarray::{Array1, Axis, array};

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests use a per-row least-squares objective on targets `t`:
    // ℓ(w) = -½ Σᵢ (w − tᵢ)², ∇ℓᵢ(w) = tᵢ − w (w is 1-dimensional), with the
    // data carried as (targets, original ids) so permutations are observable.
    // They cover:
    // - the visiting order imposed by the shuffler,
    // - epoch/history bookkeeping and the unnormalized per-row step,
    // - rejection of non-permutations.
    // -------------------------------------------------------------------------

    #[derive(Debug, Clone, PartialEq)]
    struct Rows {
        targets: Array1<f64>,
        ids: Array1<f64>,
    }

    struct LeastSquares;

    impl LogLikelihood for LeastSquares {
        type Data = Rows;

        fn value(&self, w: &Weights, data: &Rows) -> OptResult<f64> {
            Ok(-0.5 * data.targets.iter().map(|t| (w[0] - t).powi(2)).sum::<f64>())
        }

        fn grad(&self, w: &Weights, data: &Rows) -> OptResult<Grad> {
            Ok(array![data.targets.iter().map(|t| t - w[0]).sum::<f64>()])
        }

        fn check(&self, w: &Weights, _: &Rows) -> OptResult<()> {
            if w.len() != 1 {
                return Err(OptError::WeightDimMismatch { expected: 1, found: w.len() });
            }
            Ok(())
        }
    }

    impl RowLogLikelihood for LeastSquares {
        fn n_rows(&self, data: &Rows) -> usize {
            data.targets.len()
        }

        fn row_grad(&self, w: &Weights, data: &Rows, row: usize) -> OptResult<Grad> {
            Ok(array![data.targets[row] - w[0]])
        }

        fn permute_rows(&self, data: &mut Rows, perm: &[usize]) -> OptResult<()> {
            data.targets = data.targets.select(Axis(0), perm);
            data.ids = data.ids.select(Axis(0), perm);
            Ok(())
        }
    }

    /// Reverses the current order every epoch.
    struct Reverse;

    impl RowShuffler for Reverse {
        fn permutation(&mut self, n_rows: usize) -> Vec<usize> {
            (0..n_rows).rev().collect()
        }
    }

    /// Returns a fixed, possibly invalid, sequence.
    struct Fixed(Vec<usize>);

    impl RowShuffler for Fixed {
        fn permutation(&mut self, _: usize) -> Vec<usize> {
            self.0.clone()
        }
    }

    fn rows() -> Rows {
        Rows { targets: array![1.0, 2.0, 3.0], ids: array![0.0, 1.0, 2.0] }
    }

    #[test]
    // Purpose
    // -------
    // The first epoch visits rows in the injected order and each row step is
    // unnormalized.
    //
    // Given
    // -----
    // - targets [1, 2, 3], α = 0.5, one epoch, `Reverse` shuffler.
    //
    // Expect
    // ------
    // - Visiting order 3, 2, 1: w = 0 → 1.5 → 1.75 → 1.375.
    // - The shuffled copy is reversed, with targets and ids still aligned.
    fn first_epoch_follows_injected_order() {
        let data = rows();
        let mut shuffled = data.clone();
        let mut w = array![0.0];
        let mut history = Vec::new();
        let opts = AscentOptions::new(0.5, 1, None).unwrap();

        let out = ascend_stochastic(
            &LeastSquares,
            &mut w,
            &data,
            &mut shuffled,
            &mut history,
            1e-8,
            &opts,
            &mut Reverse,
        )
        .unwrap();

        assert_relative_eq!(w[0], 1.375);
        assert_eq!(out.iterations, 1);
        assert_eq!(history.len(), 2);
        assert_eq!(shuffled.targets, array![3.0, 2.0, 1.0]);
        for (t, id) in shuffled.targets.iter().zip(shuffled.ids.iter()) {
            assert_eq!(*t, data.targets[*id as usize]);
        }
        assert_eq!(data, rows());
    }

    #[test]
    // Purpose
    // -------
    // With a random shuffler the run reaches the mean of the targets and the
    // shuffled copy keeps targets aligned with their ids.
    //
    // Given
    // -----
    // - targets [1, 2, 3], α = 0.05, tolerance 1e-12, seeded shuffler.
    //
    // Expect
    // ------
    // - w near 2 (per-row steps with small α hover around the mean).
    // - Every shuffled target matches its original row.
    fn random_shuffle_converges_near_mean_and_keeps_alignment() {
        let data = rows();
        let mut shuffled = data.clone();
        let mut w = array![0.0];
        let mut history = Vec::new();
        let opts = AscentOptions::new(0.05, 500, None).unwrap();
        let mut shuffler = RandomShuffler::seeded(11);

        let out = ascend_stochastic(
            &LeastSquares,
            &mut w,
            &data,
            &mut shuffled,
            &mut history,
            1e-12,
            &opts,
            &mut shuffler,
        )
        .unwrap();

        assert_relative_eq!(w[0], 2.0, epsilon = 0.1);
        assert_eq!(history.len(), out.iterations + 1);
        for (t, id) in shuffled.targets.iter().zip(shuffled.ids.iter()) {
            assert_eq!(*t, data.targets[*id as usize]);
        }
    }

    #[test]
    // Purpose
    // -------
    // A shuffler returning something other than a permutation is rejected
    // before any step is taken.
    //
    // Given
    // -----
    // - `Fixed(vec![0, 0, 1])` on 3 rows.
    //
    // Expect
    // ------
    // - `OptError::InvalidPermutation`; weights unchanged.
    fn rejects_invalid_permutation() {
        let data = rows();
        let mut shuffled = data.clone();
        let mut w = array![0.0];
        let mut history = Vec::new();
        let opts = AscentOptions::stochastic();

        let err = ascend_stochastic(
            &LeastSquares,
            &mut w,
            &data,
            &mut shuffled,
            &mut history,
            1e-5,
            &opts,
            &mut Fixed(vec![0, 0, 1]),
        )
        .unwrap_err();

        assert!(matches!(err, OptError::InvalidPermutation { n_rows: 3, .. }));
        assert_eq!(w, array![0.0]);
    }
}
