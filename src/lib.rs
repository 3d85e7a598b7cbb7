//! rust_logit: binary logistic regression with Python bindings.
//!
//! Purpose
//! -------
//! Serve as the crate root for Rust callers and as the PyO3 bridge that exposes
//! the logistic regression model to Python via the `_rust_logit` extension
//! module. When the `python-bindings` feature is enabled, this module defines
//! the Python-facing classes.
//!
//! Key behaviors
//! -------------
//! - Re-export the core Rust modules (`logistic` and `optimization`) as the
//!   public crate surface.
//! - Define `#[pyclass]` wrappers and the `#[pymodule]` initializer for the
//!   `_rust_logit` Python extension.
//!
//! Invariants & assumptions
//! ------------------------
//! - All numerical work is implemented in the inner Rust modules; this file
//!   performs only FFI glue, array conversion, and error mapping.
//! - The Python-visible `LogisticRegression` mirrors the Rust
//!   [`logistic::LogisticRegression`] API with keyword defaults matching
//!   `AscentOptions::batch()` / `AscentOptions::stochastic()` and
//!   `LogitOptions::default()`.
//!
//! Conventions
//! -----------
//! - Errors from core Rust code are `LogitError` internally and become Python
//!   `ValueError`s at the PyO3 boundary.
//! - The crate never installs a logger; optimizer progress goes through the
//!   `log` facade and is visible only if the host application installs one.
//!
//! Downstream usage
//! ----------------
//! - Native Rust code depends on [`logistic`] (or `logistic::prelude::*`) and
//!   can ignore the PyO3 items guarded by the `python-bindings` feature.
//! - The Python packaging layer imports `_rust_logit` and re-exports its
//!   classes.
//!
//! Testing notes
//! -------------
//! - Core numerical behavior is covered by unit tests in the inner modules and
//!   by `tests/integration_logit_pipeline.rs`.

pub mod logistic;
pub mod optimization;
pub mod utils;

#[cfg(feature = "python-bindings")]
use pyo3::{prelude::*, types::PyAny};

#[cfg(feature = "python-bindings")]
use crate::{
    logistic::{LogisticRegression, errors::LogitError},
    optimization::loglik_optimizer::traits::{AscentOptions, AscentOutcome},
    utils::{extract_matrix, extract_vector},
};

/// LogisticRegression: Python-facing wrapper for [`LogisticRegression`].
///
/// Constructed from Python via `LogisticRegression(x, y, tolerance=1e-5)`:
/// - `x`: 2-D array-like of finite `f64`, shape `(n, m)`.
/// - `y`: 1-D array-like of `0.0`/`1.0`, length `n`.
/// - `tolerance`: positive convergence threshold on the log-likelihood change.
///
/// Both optimizers mutate the model in place and return `None`; inspect
/// `weights`, `likelihood_history` and `results` afterwards.
#[cfg(feature = "python-bindings")]
#[pyclass(module = "rust_logit", name = "LogisticRegression")]
pub struct Logit {
    pub inner: LogisticRegression,
}

#[cfg(feature = "python-bindings")]
#[pymethods]
impl Logit {
    #[new]
    #[pyo3(signature = (x, y, tolerance = 1e-5), text_signature = "(x, y, /, tolerance=1e-5)")]
    pub fn new<'py>(
        py: Python<'py>, x: &Bound<'py, PyAny>, y: &Bound<'py, PyAny>, tolerance: f64,
    ) -> PyResult<Self> {
        let x = extract_matrix(x)?;
        let y = extract_vector(py, y)?;
        let inner = LogisticRegression::new(x.view(), y.view(), tolerance)?;
        Ok(Logit { inner })
    }

    #[pyo3(
        signature = (alpha = 1e-7, max_iterations = 10_000),
        text_signature = "(self, /, alpha=1e-7, max_iterations=10000)"
    )]
    pub fn gradient_ascent(&mut self, alpha: f64, max_iterations: usize) -> PyResult<()> {
        let opts = AscentOptions::new(alpha, max_iterations, None).map_err(LogitError::from)?;
        self.inner.gradient_ascent(&opts)?;
        Ok(())
    }

    #[pyo3(
        signature = (alpha = 0.1, max_iterations = 100, seed = None),
        text_signature = "(self, /, alpha=0.1, max_iterations=100, seed=None)"
    )]
    pub fn stochastic_gradient_ascent(
        &mut self, alpha: f64, max_iterations: usize, seed: Option<u64>,
    ) -> PyResult<()> {
        let opts = AscentOptions::new(alpha, max_iterations, seed).map_err(LogitError::from)?;
        self.inner.stochastic_gradient_ascent(&opts)?;
        Ok(())
    }

    #[pyo3(text_signature = "(self, x_new)")]
    pub fn predict_probability<'py>(&self, x_new: &Bound<'py, PyAny>) -> PyResult<Vec<f64>> {
        let x_new = extract_matrix(x_new)?;
        Ok(self.inner.predict_probability(x_new.view())?.to_vec())
    }

    /// Raw-scale coefficients, intercept first.
    pub fn get_coefficients(&self) -> Vec<f64> {
        self.inner.get_coefficients().to_vec()
    }

    #[getter]
    pub fn weights(&self) -> Vec<f64> {
        self.inner.weights().to_vec()
    }

    #[getter]
    pub fn likelihood_history(&self) -> Vec<f64> {
        self.inner.likelihood_history().to_vec()
    }

    /// Diagnostics of the last optimizer call, or `None` before any fit.
    #[getter]
    pub fn results(&self) -> Option<LogitOutcome> {
        self.inner.results().cloned().map(|inner| LogitOutcome { inner })
    }
}

#[cfg(feature = "python-bindings")]
#[pyclass(module = "rust_logit")]
pub struct LogitOutcome {
    pub inner: AscentOutcome,
}

#[cfg(feature = "python-bindings")]
#[pymethods]
impl LogitOutcome {
    #[getter]
    pub fn value(&self) -> f64 {
        self.inner.value
    }

    #[getter]
    pub fn converged(&self) -> bool {
        self.inner.converged
    }

    #[getter]
    pub fn status(&self) -> String {
        self.inner.status.clone()
    }

    #[getter]
    pub fn iterations(&self) -> usize {
        self.inner.iterations
    }

    #[getter]
    pub fn grad_norm(&self) -> Option<f64> {
        self.inner.grad_norm
    }
}

#[cfg(feature = "python-bindings")]
#[pymodule]
fn _rust_logit<'py>(_py: Python<'py>, m: &Bound<'py, PyModule>) -> PyResult<()> {
    m.add_class::<Logit>()?;
    m.add_class::<LogitOutcome>()?;
    Ok(())
}
