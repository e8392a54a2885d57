//! Closed-form quadratic least squares via Cramer's rule.
//!
//! ## Purpose
//!
//! This module fits `y = a·x² + b·x + c` by solving the 3×3 normal-equations
//! system built from the power sums `Σx..Σx⁴, Σy, Σxy, Σx²y`. The system is
//! small and symmetric, so Cramer's rule (one determinant per unknown) is the
//! direct solution method.
//!
//! ## Design notes
//!
//! * **System**:
//!   ```text
//!   | n    Σx   Σx² |   | c |   | Σy   |
//!   | Σx   Σx²  Σx³ | · | b | = | Σxy  |
//!   | Σx²  Σx³  Σx⁴ |   | a |   | Σx²y |
//!   ```
//! * **Cramer**: `c = Dc/D`, `b = Db/D`, `a = Da/D`, where each numerator
//!   determinant replaces one column of the coefficient matrix with the
//!   right-hand side.
//! * **Singularity**: `D` is zero when the x values are too collapsed to
//!   determine a parabola (fewer than three distinct values). Exact-zero
//!   rejection by default, tolerance-banded when configured.
//!
//! ## Invariants
//!
//! * A returned fit contains only finite coefficients.
//! * Three samples with distinct x values are fitted exactly (zero residuals).
//!
//! ## Non-goals
//!
//! * This module does not generalize to higher polynomial degrees.
//! * This module does not precondition or equilibrate the system.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::linear::is_singular;
use crate::algorithms::types::QuadraticFit;
use crate::math::determinant::{det3, replace_column};
use crate::math::sums::QuadraticSums;
use crate::primitives::errors::FitError;
use crate::primitives::sample::Sample;

// ============================================================================
// Solver
// ============================================================================

/// Fit a parabola through `samples` by least squares.
///
/// Requires n ≥ 3 and at least three distinct x values. `tolerance` widens
/// the singularity rejection from exact zero to `|D| <= tolerance`.
pub fn fit_quadratic<T: Float>(
    samples: &[Sample<T>],
    tolerance: Option<T>,
) -> Result<QuadraticFit<T>, FitError> {
    let n = samples.len();
    if n < 3 {
        return Err(FitError::TooFewPoints { got: n, min: 3 });
    }

    let s = QuadraticSums::accumulate(samples);

    // Coefficient matrix of the normal equations, unknowns ordered (c, b, a).
    let m = [
        s.n, s.sx, s.sx2, //
        s.sx, s.sx2, s.sx3, //
        s.sx2, s.sx3, s.sx4,
    ];
    let rhs = [s.sy, s.sxy, s.sx2y];

    let d = det3(&m);
    if is_singular(d, tolerance) {
        return Err(FitError::SingularSystem {
            det: d.to_f64().unwrap_or(f64::NAN),
        });
    }

    let c = det3(&replace_column(&m, 0, &rhs)) / d;
    let b = det3(&replace_column(&m, 1, &rhs)) / d;
    let a = det3(&replace_column(&m, 2, &rhs)) / d;

    Ok(QuadraticFit { a, b, c })
}
