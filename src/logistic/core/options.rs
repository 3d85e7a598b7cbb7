//! Model-level options.
//!
//! The tolerance belongs to the model rather than to a single optimizer call:
//! both the batch and the stochastic ascent stop when the change in the
//! negated log-likelihood between consecutive iterations (or epochs) is at
//! most `tolerance`.
use crate::{
    logistic::errors::LogitResult,
    optimization::loglik_optimizer::{types::DEFAULT_TOLERANCE, validation::verify_tolerance},
};

/// LogitOptions: configuration fixed at model construction.
///
/// Fields
/// ------
/// - `tolerance`: convergence threshold on `|value_new − value_old|`; finite
///   and `> 0`. Defaults to `1e-5`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LogitOptions {
    pub tolerance: f64,
}

impl LogitOptions {
    /// # Errors
    /// - `LogitError::InvalidTolerance` if `tolerance` is non-finite or `<= 0`.
    pub fn new(tolerance: f64) -> LogitResult<Self> {
        verify_tolerance(tolerance)?;
        Ok(Self { tolerance })
    }
}

impl Default for LogitOptions {
    fn default() -> Self {
        Self { tolerance: DEFAULT_TOLERANCE }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logistic::errors::LogitError;

    #[test]
    fn new_validates_tolerance_and_default_is_documented() {
        assert_eq!(LogitOptions::default().tolerance, 1e-5);
        assert_eq!(LogitOptions::new(1e-3).unwrap().tolerance, 1e-3);
        assert!(matches!(LogitOptions::new(0.0), Err(LogitError::InvalidTolerance { .. })));
        assert!(matches!(LogitOptions::new(f64::NAN), Err(LogitError::InvalidTolerance { .. })));
    }
}
