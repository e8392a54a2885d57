#![cfg(feature = "dev")]
//! Tests for input and parameter validation.
//!
//! These tests verify the fail-fast checks applied before any fitting work:
//! - Dataset checks (emptiness, minimum counts, finiteness)
//! - Parallel-slice length agreement
//! - Builder parameter checks (tolerance bounds, duplicates)
//!
//! ## Test Organization
//!
//! 1. **Dataset Validation** - sample-level checks
//! 2. **Slice Validation** - x/y length agreement
//! 3. **Parameter Validation** - tolerance and duplicate detection

use curvefit_rs::internals::engine::validator::Validator;
use curvefit_rs::internals::primitives::errors::FitError;
use curvefit_rs::internals::primitives::sample::Sample;

fn samples(points: &[(f64, f64)]) -> Vec<Sample<f64>> {
    points.iter().map(|&(x, y)| Sample::new(x, y)).collect()
}

// ============================================================================
// Dataset Validation Tests
// ============================================================================

/// A well-formed dataset passes.
#[test]
fn test_valid_samples() {
    let data = samples(&[(1.0, 2.0), (2.0, 4.0), (3.0, 6.0)]);
    assert!(Validator::validate_samples(&data, 2).is_ok());
}

/// Emptiness is detected before the minimum-count check.
#[test]
fn test_empty_dataset() {
    let data: Vec<Sample<f64>> = vec![];
    assert_eq!(
        Validator::validate_samples(&data, 2).unwrap_err(),
        FitError::EmptyInput
    );
}

/// Non-empty but undersized datasets report the actual and required counts.
#[test]
fn test_too_few_points() {
    let data = samples(&[(1.0, 2.0), (2.0, 4.0)]);
    assert_eq!(
        Validator::validate_samples(&data, 3).unwrap_err(),
        FitError::TooFewPoints { got: 2, min: 3 }
    );
}

/// A NaN x value is reported with its index.
#[test]
fn test_nan_x_reported_with_index() {
    let data = samples(&[(1.0, 2.0), (f64::NAN, 4.0)]);
    match Validator::validate_samples(&data, 2).unwrap_err() {
        FitError::InvalidNumericValue(detail) => assert!(detail.starts_with("x[1]=")),
        e => panic!("unexpected error: {}", e),
    }
}

/// An infinite y value is reported with its index.
#[test]
fn test_infinite_y_reported_with_index() {
    let data = samples(&[(1.0, 2.0), (2.0, 4.0), (3.0, f64::INFINITY)]);
    match Validator::validate_samples(&data, 2).unwrap_err() {
        FitError::InvalidNumericValue(detail) => assert!(detail.starts_with("y[2]=")),
        e => panic!("unexpected error: {}", e),
    }
}

/// Validation stops at the first offending sample.
#[test]
fn test_fail_fast_on_first_violation() {
    let data = samples(&[(f64::NAN, 1.0), (f64::NAN, 2.0)]);
    match Validator::validate_samples(&data, 2).unwrap_err() {
        FitError::InvalidNumericValue(detail) => assert!(detail.starts_with("x[0]=")),
        e => panic!("unexpected error: {}", e),
    }
}

// ============================================================================
// Slice Validation Tests
// ============================================================================

/// Matching lengths pass, including both empty.
#[test]
fn test_matching_slice_lengths() {
    assert!(Validator::validate_xy_lengths(&[1.0, 2.0], &[3.0, 4.0]).is_ok());
    let empty: [f64; 0] = [];
    assert!(Validator::validate_xy_lengths(&empty, &empty).is_ok());
}

/// Mismatched lengths carry both lengths in the error.
#[test]
fn test_mismatched_slice_lengths() {
    assert_eq!(
        Validator::validate_xy_lengths(&[1.0, 2.0, 3.0], &[1.0]).unwrap_err(),
        FitError::MismatchedInputs { x_len: 3, y_len: 1 }
    );
}

/// Scalar validation accepts finite values and rejects NaN/Inf.
#[test]
fn test_scalar_validation() {
    assert!(Validator::validate_scalar(0.0, "x").is_ok());
    assert!(Validator::validate_scalar(-1e300, "x").is_ok());
    assert!(Validator::validate_scalar(f64::NAN, "x").is_err());
    assert!(Validator::validate_scalar(f64::INFINITY, "x").is_err());
}

// ============================================================================
// Parameter Validation Tests
// ============================================================================

/// The default (no tolerance) and valid tolerances pass.
#[test]
fn test_valid_tolerances() {
    assert!(Validator::validate_tolerance::<f64>(None).is_ok());
    assert!(Validator::validate_tolerance(Some(0.0)).is_ok());
    assert!(Validator::validate_tolerance(Some(1e-9)).is_ok());
}

/// Negative and non-finite tolerances are rejected.
#[test]
fn test_invalid_tolerances() {
    assert_eq!(
        Validator::validate_tolerance(Some(-0.5)).unwrap_err(),
        FitError::InvalidTolerance(-0.5)
    );
    assert!(Validator::validate_tolerance(Some(f64::NAN)).is_err());
    assert!(Validator::validate_tolerance(Some(f64::INFINITY)).is_err());
}

/// Duplicate tracking converts the recorded parameter name into an error.
#[test]
fn test_duplicate_detection() {
    assert!(Validator::validate_no_duplicates(None).is_ok());
    assert_eq!(
        Validator::validate_no_duplicates(Some("model")).unwrap_err(),
        FitError::DuplicateParameter { parameter: "model" }
    );
}
