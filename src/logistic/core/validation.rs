//! Input validation for training and inference data.
//!
//! Every check reports the first offending element so callers can locate the
//! problem in their arrays.
use crate::logistic::errors::{LogitError, LogitResult};
use ndarray::{ArrayView1, ArrayView2};

/// Validate a raw feature matrix: at least one row and one column, all
/// entries finite.
///
/// # Errors
/// - [`LogitError::EmptyData`] when `x` has no rows.
/// - [`LogitError::NoFeatures`] when `x` has no columns.
/// - [`LogitError::NonFiniteFeature`] for the first NaN/±∞ entry.
pub fn validate_features(x: ArrayView2<f64>) -> LogitResult<()> {
    if x.nrows() == 0 {
        return Err(LogitError::EmptyData);
    }
    if x.ncols() == 0 {
        return Err(LogitError::NoFeatures);
    }
    validate_finite(x)
}

/// Check that every entry of `x` is finite. Any shape is accepted, including
/// zero rows.
///
/// # Errors
/// - [`LogitError::NonFiniteFeature`] for the first NaN/±∞ entry.
pub fn validate_finite(x: ArrayView2<f64>) -> LogitResult<()> {
    for ((row, col), &value) in x.indexed_iter() {
        if !value.is_finite() {
            return Err(LogitError::NonFiniteFeature { row, col, value });
        }
    }
    Ok(())
}

/// Validate labels against the feature row count; every label must be exactly
/// `0.0` or `1.0`.
///
/// # Errors
/// - [`LogitError::RowCountMismatch`] when `y.len() != n_rows`.
/// - [`LogitError::InvalidLabel`] for the first label outside {0, 1}.
pub fn validate_labels(y: ArrayView1<f64>, n_rows: usize) -> LogitResult<()> {
    if y.len() != n_rows {
        return Err(LogitError::RowCountMismatch { features: n_rows, labels: y.len() });
    }
    for (index, &value) in y.iter().enumerate() {
        if value != 0.0 && value != 1.0 {
            return Err(LogitError::InvalidLabel { index, value });
        }
    }
    Ok(())
}

/// Check that inference data has the training feature count.
///
/// # Errors
/// Returns [`LogitError::FeatureCountMismatch`] otherwise.
pub fn validate_feature_count(expected: usize, found: usize) -> LogitResult<()> {
    if expected != found {
        return Err(LogitError::FeatureCountMismatch { expected, found });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{Array2, array};

    #[test]
    // Purpose
    // -------
    // Feature validation rejects empty shapes and non-finite entries with
    // their coordinates.
    //
    // Given
    // -----
    // - a 0×2 matrix, a 2×0 matrix, and [[1, 2], [3, NaN]].
    //
    // Expect
    // ------
    // - `EmptyData`, `NoFeatures`, `NonFiniteFeature { row: 1, col: 1, .. }`.
    fn validate_features_rejects_empty_and_non_finite() {
        let empty = Array2::<f64>::zeros((0, 2));
        assert_eq!(validate_features(empty.view()), Err(LogitError::EmptyData));

        let no_cols = Array2::<f64>::zeros((2, 0));
        assert_eq!(validate_features(no_cols.view()), Err(LogitError::NoFeatures));

        let nan = array![[1.0, 2.0], [3.0, f64::NAN]];
        assert!(matches!(
            validate_features(nan.view()),
            Err(LogitError::NonFiniteFeature { row: 1, col: 1, .. })
        ));

        assert!(validate_features(array![[1.0, 2.0]].view()).is_ok());
    }

    #[test]
    fn validate_finite_accepts_zero_rows() {
        assert!(validate_finite(Array2::<f64>::zeros((0, 3)).view()).is_ok());
        assert!(matches!(
            validate_finite(array![[f64::INFINITY]].view()),
            Err(LogitError::NonFiniteFeature { row: 0, col: 0, .. })
        ));
    }

    #[test]
    // Purpose
    // -------
    // Label validation checks the count first, then the {0, 1} domain.
    //
    // Given
    // -----
    // - 3 labels for 2 rows; labels [0, 0.5]; labels [1, 0].
    //
    // Expect
    // ------
    // - `RowCountMismatch`, `InvalidLabel { index: 1 }`, Ok.
    fn validate_labels_checks_count_then_domain() {
        assert_eq!(
            validate_labels(array![0.0, 1.0, 0.0].view(), 2),
            Err(LogitError::RowCountMismatch { features: 2, labels: 3 })
        );
        assert_eq!(
            validate_labels(array![0.0, 0.5].view(), 2),
            Err(LogitError::InvalidLabel { index: 1, value: 0.5 })
        );
        assert!(validate_labels(array![1.0, 0.0].view(), 2).is_ok());
    }

    #[test]
    fn validate_feature_count_reports_both_counts() {
        assert!(validate_feature_count(3, 3).is_ok());
        assert_eq!(
            validate_feature_count(3, 2),
            Err(LogitError::FeatureCountMismatch { expected: 3, found: 2 })
        );
    }
}
