//! Row-permutation sources for stochastic ascent.
//!
//! The stochastic loop asks a [`RowShuffler`] for a fresh permutation before
//! every epoch. [`RandomShuffler`] draws uniform permutations from any `rand`
//! generator; tests and callers that need a fixed visiting order can
//! implement the trait directly.
use rand::{Rng, SeedableRng, rngs::StdRng, seq::SliceRandom};

/// Source of row permutations.
///
/// Implementations must return a permutation of `0..n_rows`; the stochastic
/// loop validates this and fails with `OptError::InvalidPermutation`
/// otherwise.
pub trait RowShuffler {
    fn permutation(&mut self, n_rows: usize) -> Vec<usize>;
}

/// Uniform random permutations backed by a `rand` generator.
#[derive(Debug, Clone)]
pub struct RandomShuffler<R: Rng = StdRng> {
    rng: R,
}

impl<R: Rng> RandomShuffler<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RandomShuffler<StdRng> {
    /// Reproducible shuffler seeded from `seed`.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// Shuffler seeded from OS entropy.
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }

    /// `seeded` when a seed is given, `from_entropy` otherwise.
    pub fn from_seed_option(seed: Option<u64>) -> Self {
        match seed {
            Some(s) => Self::seeded(s),
            None => Self::from_entropy(),
        }
    }
}

impl<R: Rng> RowShuffler for RandomShuffler<R> {
    fn permutation(&mut self, n_rows: usize) -> Vec<usize> {
        let mut rows: Vec<usize> = (0..n_rows).collect();
        rows.shuffle(&mut self.rng);
        rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::optimization::loglik_optimizer::validation::validate_permutation;

    #[test]
    // Purpose
    // -------
    // Random permutations are valid and reproducible under a fixed seed.
    //
    // Given
    // -----
    // - Two shufflers seeded with 42 and one seeded with 43; n = 50.
    //
    // Expect
    // ------
    // - Every draw is a permutation of 0..50.
    // - Equal seeds give equal sequences of draws.
    // - A different seed gives a different first draw.
    fn seeded_shuffler_is_reproducible_and_valid() {
        let mut a = RandomShuffler::seeded(42);
        let mut b = RandomShuffler::seeded(42);
        let mut c = RandomShuffler::seeded(43);

        let a1 = a.permutation(50);
        let a2 = a.permutation(50);
        assert!(validate_permutation(&a1, 50).is_ok());
        assert!(validate_permutation(&a2, 50).is_ok());
        assert_eq!(a1, b.permutation(50));
        assert_eq!(a2, b.permutation(50));
        assert_ne!(a1, c.permutation(50));
    }

    #[test]
    fn empty_permutation_for_zero_rows() {
        let mut s = RandomShuffler::seeded(0);
        assert!(s.permutation(0).is_empty());
    }
}
