//! High-level API for closed-form curve fitting.
//!
//! ## Purpose
//!
//! This module provides the primary user-facing entry point. It implements a
//! fluent builder pattern for configuring the model family and the
//! singularity policy, and a processor exposing the three operations: fit,
//! evaluate, and predict.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder with sensible defaults for all parameters.
//! * **Validated**: Parameters are validated when `.build()` is called.
//! * **Type-Safe**: Generic over `Float` types for flexible precision.
//!
//! ### Configuration Flow
//!
//! 1. Create a [`CurveFitBuilder`] via `CurveFit::new()`.
//! 2. Chain configuration methods (`.model()`, `.singularity_tolerance()`).
//! 3. Call `.build()` to obtain a [`CurveFitter`] processor.
//! 4. Call `.fit(&samples)`, then `.evaluate(..)` / `.predict(..)`.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::engine::executor::{FitConfig, FitExecutor};
use crate::engine::validator::Validator;
use crate::evaluation::diagnostics::Diagnostics;
use crate::evaluation::prediction;
use crate::primitives::sample::zip_xy;

// Publicly re-exported types
pub use crate::algorithms::types::{FitModel, LinearFit, ModelKind, QuadraticFit};
pub use crate::engine::output::{EvaluationResult, FitResult, Prediction};
pub use crate::primitives::errors::FitError;
pub use crate::primitives::sample::Sample;

// ============================================================================
// Builder
// ============================================================================

/// Fluent builder for configuring a curve fitter.
#[derive(Debug, Clone)]
pub struct CurveFitBuilder<T: Float> {
    /// Model family to fit (default: Linear).
    pub model: Option<ModelKind>,

    /// Singularity tolerance; `None` (default) rejects exact zeros only.
    pub singularity_tolerance: Option<T>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub(crate) duplicate_param: Option<&'static str>,
}

impl<T: Float> Default for CurveFitBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> CurveFitBuilder<T> {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            model: None,
            singularity_tolerance: None,
            duplicate_param: None,
        }
    }

    /// Set the model family to fit.
    pub fn model(mut self, kind: ModelKind) -> Self {
        if self.model.is_some() {
            self.duplicate_param = Some("model");
        }
        self.model = Some(kind);
        self
    }

    /// Set the singularity tolerance.
    ///
    /// By default only an exactly zero normal-equation denominator (or
    /// determinant) is rejected as degenerate, matching the plain formula
    /// evaluation. With a tolerance `eps`, any system with
    /// `|denominator| <= eps` is rejected instead, trading acceptance of
    /// ill-conditioned fits for early failure. `eps` must be finite and
    /// non-negative.
    pub fn singularity_tolerance(mut self, eps: T) -> Self {
        if self.singularity_tolerance.is_some() {
            self.duplicate_param = Some("singularity_tolerance");
        }
        self.singularity_tolerance = Some(eps);
        self
    }

    /// Validate the configuration and build the processor.
    pub fn build(self) -> Result<CurveFitter<T>, FitError> {
        // Check for duplicate parameter configuration
        Validator::validate_no_duplicates(self.duplicate_param)?;

        // Validate tolerance
        Validator::validate_tolerance(self.singularity_tolerance)?;

        Ok(CurveFitter {
            config: FitConfig {
                kind: self.model.unwrap_or_default(),
                tolerance: self.singularity_tolerance,
            },
        })
    }
}

// ============================================================================
// Processor
// ============================================================================

/// Configured curve-fitting processor.
///
/// All operations are pure functions of their arguments; the processor holds
/// only configuration and may be shared freely across threads.
#[derive(Debug, Clone, Copy)]
pub struct CurveFitter<T: Float> {
    config: FitConfig<T>,
}

impl<T: Float> CurveFitter<T> {
    /// Fit the configured model to `samples` by least squares.
    pub fn fit(&self, samples: &[Sample<T>]) -> Result<FitResult<T>, FitError> {
        FitExecutor::run(samples, self.config)
    }

    /// Fit from parallel x/y slices.
    ///
    /// Convenience wrapper that checks the lengths match and zips the slices
    /// into samples before fitting.
    pub fn fit_xy(&self, x: &[T], y: &[T]) -> Result<FitResult<T>, FitError> {
        Validator::validate_xy_lengths(x, y)?;
        let samples: Vec<Sample<T>> = zip_xy(x, y);
        self.fit(&samples)
    }

    /// Score `fit` against `samples` (training or held-out; n ≥ 1).
    pub fn evaluate(
        &self,
        fit: &FitResult<T>,
        samples: &[Sample<T>],
    ) -> Result<EvaluationResult<T>, FitError> {
        Diagnostics::compute(&fit.model, samples)
    }

    /// Predict the response of `fit` at an arbitrary `x`.
    pub fn predict(&self, fit: &FitResult<T>, x: T) -> Result<Prediction<T>, FitError> {
        prediction::predict(&fit.model, x)
    }
}
