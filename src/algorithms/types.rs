//! Model types for closed-form curve fitting.
//!
//! ## Purpose
//!
//! This module defines the model taxonomy (`ModelKind`), the coefficient
//! structs (`LinearFit`, `QuadraticFit`), and the `FitModel` tagged union
//! that unifies them behind one evaluation and rendering surface.
//!
//! ## Design notes
//!
//! * **Single evaluation path**: Every predicted value in the crate flows
//!   through `FitModel::value_at`, so residual computation and on-demand
//!   prediction are bit-identical for the same x.
//! * **Display rounding**: Equation strings round coefficients to four
//!   decimal digits; the structs keep full precision for computation.
//!
//! ## Key concepts
//!
//! * **Tagged union**: `FitModel` is the seam where an alternative fitting
//!   strategy would plug in; the solvers in this crate are all closed-form.
//!
//! ## Non-goals
//!
//! * This module does not fit models (see `linear` and `quadratic`).
//! * This module does not own display formatting beyond the equation string.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::format;
#[cfg(not(feature = "std"))]
use alloc::string::String;

// External dependencies
use num_traits::Float;

// ============================================================================
// Model Kind
// ============================================================================

/// The family of model fitted to the dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModelKind {
    /// Straight line `y = slope·x + intercept`. Requires n ≥ 2.
    #[default]
    Linear,
    /// Degree-2 polynomial `y = a·x² + b·x + c`. Requires n ≥ 3.
    Quadratic,
}

impl ModelKind {
    /// Minimum number of samples required to determine a unique fit.
    #[inline]
    pub fn min_points(&self) -> usize {
        match self {
            ModelKind::Linear => 2,
            ModelKind::Quadratic => 3,
        }
    }
}

// ============================================================================
// Coefficient Structs
// ============================================================================

/// Coefficients of a fitted straight line `y = slope·x + intercept`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearFit<T> {
    /// Slope of the fitted line.
    pub slope: T,
    /// y-intercept of the fitted line.
    pub intercept: T,
}

/// Coefficients of a fitted parabola `y = a·x² + b·x + c`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuadraticFit<T> {
    /// Quadratic coefficient.
    pub a: T,
    /// Linear coefficient.
    pub b: T,
    /// Constant term.
    pub c: T,
}

// ============================================================================
// Fit Model
// ============================================================================

/// A fitted model: either a straight line or a parabola.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FitModel<T> {
    /// Straight-line fit.
    Linear(LinearFit<T>),
    /// Degree-2 polynomial fit.
    Quadratic(QuadraticFit<T>),
}

impl<T: Float> FitModel<T> {
    /// The model family of this fit.
    #[inline]
    pub fn kind(&self) -> ModelKind {
        match self {
            FitModel::Linear(_) => ModelKind::Linear,
            FitModel::Quadratic(_) => ModelKind::Quadratic,
        }
    }

    /// Evaluate the model at `x` (Horner's scheme).
    ///
    /// This is the single evaluation path for residuals and predictions.
    #[inline]
    pub fn value_at(&self, x: T) -> T {
        match self {
            FitModel::Linear(f) => f.slope * x + f.intercept,
            FitModel::Quadratic(f) => (f.a * x + f.b) * x + f.c,
        }
    }

    /// Render the human-readable equation string.
    ///
    /// Coefficients are rounded to four decimal digits for display only;
    /// the stored coefficients keep full precision.
    pub fn equation(&self) -> String {
        match self {
            FitModel::Linear(f) => format!(
                "Y = {:.4}X + {:.4}",
                f.slope.to_f64().unwrap_or(f64::NAN),
                f.intercept.to_f64().unwrap_or(f64::NAN)
            ),
            FitModel::Quadratic(f) => format!(
                "Y = {:.4}X² + {:.4}X + {:.4}",
                f.a.to_f64().unwrap_or(f64::NAN),
                f.b.to_f64().unwrap_or(f64::NAN),
                f.c.to_f64().unwrap_or(f64::NAN)
            ),
        }
    }
}
