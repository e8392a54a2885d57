//! Output types for fitting and evaluation.
//!
//! ## Purpose
//!
//! This module defines the structs handed back to callers: `FitResult` (the
//! fitted model plus its rendered equation), `EvaluationResult` (diagnostic
//! metrics and residuals), and `Prediction` (a single evaluated point).
//!
//! ## Design notes
//!
//! * **Immutable**: Results are plain data created fresh per call, never
//!   mutated or cached by the library.
//! * **Display**: Both result types render a human-readable summary block;
//!   all display rounding happens here, computation keeps full precision.
//!
//! ## Non-goals
//!
//! * This module does not serialize results to any wire or file format.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::fmt;
use num_traits::Float;

// Internal dependencies
use crate::algorithms::types::{FitModel, ModelKind};
use crate::evaluation::diagnostics::Diagnostics;
use crate::evaluation::prediction;
use crate::primitives::errors::FitError;
use crate::primitives::sample::Sample;

// ============================================================================
// Fit Result
// ============================================================================

/// A fitted model together with its rendered equation.
#[derive(Debug, Clone, PartialEq)]
pub struct FitResult<T> {
    /// The fitted model (full-precision coefficients).
    pub model: FitModel<T>,
    /// Human-readable equation, coefficients rounded to 4 decimal digits.
    pub equation: String,
    /// Number of samples the model was fitted on.
    pub n: usize,
}

impl<T: Float> FitResult<T> {
    /// The model family of this fit.
    #[inline]
    pub fn kind(&self) -> ModelKind {
        self.model.kind()
    }

    /// Score this fit against `samples` (training or held-out; n ≥ 1).
    pub fn evaluate(&self, samples: &[Sample<T>]) -> Result<EvaluationResult<T>, FitError> {
        Diagnostics::compute(&self.model, samples)
    }

    /// Predict the response at an arbitrary `x` (extrapolation allowed).
    pub fn predict(&self, x: T) -> Result<Prediction<T>, FitError> {
        prediction::predict(&self.model, x)
    }
}

impl<T: Float> fmt::Display for FitResult<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Summary:")?;
        writeln!(f, "  Model: {:?}", self.kind())?;
        writeln!(f, "  Data points: {}", self.n)?;
        write!(f, "  Equation: {}", self.equation)
    }
}

// ============================================================================
// Evaluation Result
// ============================================================================

/// Diagnostic metrics for a fit over a dataset.
#[derive(Debug, Clone, PartialEq)]
pub struct EvaluationResult<T> {
    /// Coefficient of determination (share of response variance explained).
    pub r_squared: T,
    /// Mean absolute error of the residuals.
    pub mae: T,
    /// Root mean squared error of the residuals.
    pub rmse: T,
    /// Per-sample `(x, y − ŷ)` pairs in dataset order.
    pub residuals: Vec<(T, T)>,
}

impl<T: Float> fmt::Display for EvaluationResult<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Diagnostics:")?;
        writeln!(
            f,
            "  R^2:  {:.6}",
            self.r_squared.to_f64().unwrap_or(f64::NAN)
        )?;
        writeln!(f, "  MAE:  {:.6}", self.mae.to_f64().unwrap_or(f64::NAN))?;
        writeln!(f, "  RMSE: {:.6}", self.rmse.to_f64().unwrap_or(f64::NAN))?;
        writeln!(f)?;
        writeln!(f, "Residuals:")?;
        writeln!(f, "{:>9} {:>12}", "X", "Residual")?;
        writeln!(f, "  {}", "-".repeat(20))?;
        for &(x, r) in &self.residuals {
            writeln!(
                f,
                "{:>9.2} {:>12.5}",
                x.to_f64().unwrap_or(f64::NAN),
                r.to_f64().unwrap_or(f64::NAN)
            )?;
        }
        Ok(())
    }
}

// ============================================================================
// Prediction
// ============================================================================

/// A single on-demand model evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Prediction<T> {
    /// The queried x value.
    pub x: T,
    /// The model's response at `x`.
    pub predicted_y: T,
}
