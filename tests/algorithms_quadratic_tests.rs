#![cfg(feature = "dev")]
//! Tests for the closed-form degree-2 solver.
//!
//! These tests verify the Cramer's-rule solution of the 3×3 normal-equations
//! system:
//! - Exact interpolation through three points
//! - Least-squares coefficients for overdetermined data
//! - Singularity detection for collapsed x values
//!
//! ## Test Organization
//!
//! 1. **Exact Fits** - parabolas through exactly three points
//! 2. **Least Squares** - overdetermined datasets
//! 3. **Degeneracies** - too few points and singular systems

use approx::assert_relative_eq;

use curvefit_rs::internals::algorithms::quadratic::fit_quadratic;
use curvefit_rs::internals::primitives::errors::FitError;
use curvefit_rs::internals::primitives::sample::Sample;

fn samples(points: &[(f64, f64)]) -> Vec<Sample<f64>> {
    points.iter().map(|&(x, y)| Sample::new(x, y)).collect()
}

// ============================================================================
// Exact Fit Tests
// ============================================================================

/// Three points with distinct x values determine the parabola exactly.
#[test]
fn test_three_points_exact() {
    // y = x² − x + 2 through (1,2), (2,4), (3,8).
    // Cramer with integer sums: D = 4, Dc = 8, Db = −4, Da = 4.
    let fit = fit_quadratic(&samples(&[(1.0, 2.0), (2.0, 4.0), (3.0, 8.0)]), None).unwrap();
    assert_relative_eq!(fit.a, 1.0, epsilon = 1e-12);
    assert_relative_eq!(fit.b, -1.0, epsilon = 1e-12);
    assert_relative_eq!(fit.c, 2.0, epsilon = 1e-12);
}

/// A pure parabola through the origin.
#[test]
fn test_pure_square() {
    // y = x² through (−1,1), (0,0), (1,1).
    let fit = fit_quadratic(&samples(&[(-1.0, 1.0), (0.0, 0.0), (1.0, 1.0)]), None).unwrap();
    assert_relative_eq!(fit.a, 1.0, epsilon = 1e-12);
    assert_relative_eq!(fit.b, 0.0, epsilon = 1e-12);
    assert_relative_eq!(fit.c, 0.0, epsilon = 1e-12);
}

/// Collinear points yield a = 0 and reduce to the line through them.
#[test]
fn test_collinear_points_zero_curvature() {
    // y = 2x + 1 through three collinear points.
    let fit = fit_quadratic(&samples(&[(0.0, 1.0), (1.0, 3.0), (2.0, 5.0)]), None).unwrap();
    assert_relative_eq!(fit.a, 0.0, epsilon = 1e-10);
    assert_relative_eq!(fit.b, 2.0, epsilon = 1e-10);
    assert_relative_eq!(fit.c, 1.0, epsilon = 1e-10);
}

// ============================================================================
// Least Squares Tests
// ============================================================================

/// Exact samples of a known parabola are recovered from seven points.
#[test]
fn test_overdetermined_exact_recovery() {
    // y = 0.5x² − 2x + 3 sampled at x = 0..6.
    let data: Vec<Sample<f64>> = (0..=6)
        .map(|i| {
            let x = i as f64;
            Sample::new(x, 0.5 * x * x - 2.0 * x + 3.0)
        })
        .collect();

    let fit = fit_quadratic(&data, None).unwrap();
    assert_relative_eq!(fit.a, 0.5, epsilon = 1e-9);
    assert_relative_eq!(fit.b, -2.0, epsilon = 1e-9);
    assert_relative_eq!(fit.c, 3.0, epsilon = 1e-9);
}

/// Repeated fits over the same data are bit-identical.
#[test]
fn test_deterministic() {
    let data = samples(&[(0.0, 1.1), (1.0, 2.0), (2.0, 4.9), (3.0, 10.2)]);
    let first = fit_quadratic(&data, None).unwrap();
    let second = fit_quadratic(&data, None).unwrap();
    assert_eq!(first.a.to_bits(), second.a.to_bits());
    assert_eq!(first.b.to_bits(), second.b.to_bits());
    assert_eq!(first.c.to_bits(), second.c.to_bits());
}

// ============================================================================
// Degeneracy Tests
// ============================================================================

/// Two points are insufficient for a parabola.
#[test]
fn test_two_points() {
    let err = fit_quadratic(&samples(&[(1.0, 1.0), (2.0, 4.0)]), None).unwrap_err();
    assert_eq!(err, FitError::TooFewPoints { got: 2, min: 3 });
}

/// All-identical x values collapse the system.
#[test]
fn test_identical_x_singular() {
    // n = 3, Σx = 6, Σx² = 12, Σx³ = 24, Σx⁴ = 48: D = 0 exactly.
    let err = fit_quadratic(&samples(&[(2.0, 1.0), (2.0, 2.0), (2.0, 3.0)]), None).unwrap_err();
    assert_eq!(err, FitError::SingularSystem { det: 0.0 });
}

/// Only two distinct x values are still insufficient for degree 2.
#[test]
fn test_two_distinct_x_singular() {
    // x: [1, 1, 2] — the 3×3 system has rank 2.
    let err = fit_quadratic(&samples(&[(1.0, 1.0), (1.0, 2.0), (2.0, 3.0)]), None).unwrap_err();
    assert!(matches!(err, FitError::SingularSystem { .. }));
}

/// A tolerance band widens the singularity rejection.
#[test]
fn test_tolerance_band() {
    // Nearly collapsed x values: D is tiny but nonzero.
    let data = samples(&[(0.0, 1.0), (1e-3, 2.0), (2e-3, 3.0)]);

    assert!(fit_quadratic(&data, None).is_ok());
    assert!(matches!(
        fit_quadratic(&data, Some(1e-3)).unwrap_err(),
        FitError::SingularSystem { .. }
    ));
}
