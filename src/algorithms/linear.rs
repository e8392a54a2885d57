//! Closed-form straight-line least squares.
//!
//! ## Purpose
//!
//! This module fits `y = slope·x + intercept` by solving the single-variable
//! normal equations over scalar sums. No matrix machinery is involved: the
//! 2×2 system collapses to one division for the slope and one for the
//! intercept.
//!
//! ## Design notes
//!
//! * **Formula**:
//!   `slope = (n·Σxy − Σx·Σy) / (n·Σx² − (Σx)²)`,
//!   `intercept = (Σy − slope·Σx) / n` (equivalently `ȳ − slope·x̄`).
//! * **Singularity**: The denominator is zero exactly when all x values are
//!   identical (a vertical line with no finite slope). By default only an
//!   exact zero is rejected; a caller-supplied tolerance widens the rejection
//!   band to `|denominator| <= tol`.
//!
//! ## Invariants
//!
//! * A returned fit contains only finite coefficients.
//! * Repeated calls over the same data are bit-identical (no hidden state).
//!
//! ## Non-goals
//!
//! * This module does not validate finiteness of inputs (engine validator).
//! * This module does not weight samples or handle multiple predictors.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::types::LinearFit;
use crate::math::sums::LinearSums;
use crate::primitives::errors::FitError;
use crate::primitives::sample::Sample;

// ============================================================================
// Solver
// ============================================================================

/// Fit a straight line through `samples` by least squares.
///
/// Requires n ≥ 2 and at least two distinct x values. `tolerance` widens the
/// singularity rejection from exact zero to `|denominator| <= tolerance`.
pub fn fit_linear<T: Float>(
    samples: &[Sample<T>],
    tolerance: Option<T>,
) -> Result<LinearFit<T>, FitError> {
    let n = samples.len();
    if n < 2 {
        return Err(FitError::TooFewPoints { got: n, min: 2 });
    }

    let sums = LinearSums::accumulate(samples);
    let denom = sums.denominator();

    if is_singular(denom, tolerance) {
        return Err(FitError::SingularSystem {
            det: denom.to_f64().unwrap_or(f64::NAN),
        });
    }

    let slope = (sums.n * sums.sxy - sums.sx * sums.sy) / denom;
    let intercept = (sums.sy - slope * sums.sx) / sums.n;

    Ok(LinearFit { slope, intercept })
}

/// Singularity test shared by both solvers.
///
/// Exact-zero comparison by default; tolerance-banded when configured.
#[inline]
pub(crate) fn is_singular<T: Float>(det: T, tolerance: Option<T>) -> bool {
    match tolerance {
        Some(tol) => det.abs() <= tol,
        None => det == T::zero(),
    }
}
