//! Fit orchestration: validate, solve, assemble.
//!
//! ## Purpose
//!
//! This module runs a complete fit: it validates the dataset against the
//! requested model's requirements, dispatches to the matching closed-form
//! solver, and assembles the `FitResult` with its rendered equation.
//!
//! ## Design notes
//!
//! * **Stateless**: The executor is a pure function of `(samples, config)`;
//!   repeated runs over the same inputs are bit-identical.
//! * **Dispatch**: Model selection is a plain match; both solvers share the
//!   singularity policy carried in the config.
//!
//! ## Non-goals
//!
//! * This module does not evaluate or predict (evaluation layer).
//! * This module does not retry: inputs are deterministic, so a failed run
//!   reproduces the same error.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::linear::fit_linear;
use crate::algorithms::quadratic::fit_quadratic;
use crate::algorithms::types::{FitModel, ModelKind};
use crate::engine::output::FitResult;
use crate::engine::validator::Validator;
use crate::primitives::errors::FitError;
use crate::primitives::sample::Sample;

// ============================================================================
// Configuration
// ============================================================================

/// Resolved configuration for a fit run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FitConfig<T> {
    /// Model family to fit.
    pub kind: ModelKind,
    /// Singularity tolerance; `None` means exact-zero detection.
    pub tolerance: Option<T>,
}

// ============================================================================
// Executor
// ============================================================================

/// Stateless fit executor.
pub struct FitExecutor;

impl FitExecutor {
    /// Validate `samples` and fit the configured model.
    pub fn run<T: Float>(
        samples: &[Sample<T>],
        config: FitConfig<T>,
    ) -> Result<FitResult<T>, FitError> {
        Validator::validate_samples(samples, config.kind.min_points())?;

        let model = match config.kind {
            ModelKind::Linear => FitModel::Linear(fit_linear(samples, config.tolerance)?),
            ModelKind::Quadratic => FitModel::Quadratic(fit_quadratic(samples, config.tolerance)?),
        };

        Ok(FitResult {
            equation: model.equation(),
            model,
            n: samples.len(),
        })
    }
}
