//! Input validation for fitting configuration and data.
//!
//! ## Purpose
//!
//! This module provides validation functions for datasets and builder
//! parameters. It checks requirements such as minimum sample counts, finite
//! values, and tolerance bounds.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Efficiency**: Checks are ordered from cheap to expensive.
//! * **Generics**: Validation is generic over `Float` types.
//!
//! ## Key concepts
//!
//! * **Minimum points**: 2 for the linear model, 3 for the quadratic model.
//! * **Finite checks**: Every x and y must be finite (no NaN/Inf).
//!
//! ## Invariants
//!
//! * All validated inputs satisfy their respective mathematical constraints.
//! * Validation logic is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not sort, transform, or filter input data.
//! * This module does not detect singular systems (solver responsibility).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::format;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::FitError;
use crate::primitives::sample::Sample;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for fitting configuration and input data.
///
/// Provides static methods returning `Result<(), FitError>` that fail fast
/// upon identifying the first violation.
pub struct Validator;

impl Validator {
    // ========================================================================
    // Core Input Validation
    // ========================================================================

    /// Validate a dataset for fitting with the given minimum sample count.
    pub fn validate_samples<T: Float>(
        samples: &[Sample<T>],
        min_points: usize,
    ) -> Result<(), FitError> {
        // Check 1: Non-empty dataset
        if samples.is_empty() {
            return Err(FitError::EmptyInput);
        }

        // Check 2: Sufficient points for the requested model
        if samples.len() < min_points {
            return Err(FitError::TooFewPoints {
                got: samples.len(),
                min: min_points,
            });
        }

        // Check 3: All values finite
        for (i, s) in samples.iter().enumerate() {
            if !s.x.is_finite() {
                return Err(FitError::InvalidNumericValue(format!(
                    "x[{}]={}",
                    i,
                    s.x.to_f64().unwrap_or(f64::NAN)
                )));
            }
            if !s.y.is_finite() {
                return Err(FitError::InvalidNumericValue(format!(
                    "y[{}]={}",
                    i,
                    s.y.to_f64().unwrap_or(f64::NAN)
                )));
            }
        }

        Ok(())
    }

    /// Validate that parallel x/y slices have matching lengths.
    pub fn validate_xy_lengths<T: Float>(x: &[T], y: &[T]) -> Result<(), FitError> {
        if x.len() != y.len() {
            return Err(FitError::MismatchedInputs {
                x_len: x.len(),
                y_len: y.len(),
            });
        }
        Ok(())
    }

    /// Validate a single numeric value for finiteness.
    pub fn validate_scalar<T: Float>(val: T, name: &str) -> Result<(), FitError> {
        if !val.is_finite() {
            return Err(FitError::InvalidNumericValue(format!(
                "{}={}",
                name,
                val.to_f64().unwrap_or(f64::NAN)
            )));
        }
        Ok(())
    }

    // ========================================================================
    // Parameter Validation
    // ========================================================================

    /// Validate the singularity tolerance.
    ///
    /// # Notes
    ///
    /// * `None` means exact-zero singularity detection (the default).
    /// * A configured tolerance must be finite and non-negative.
    pub fn validate_tolerance<T: Float>(tolerance: Option<T>) -> Result<(), FitError> {
        if let Some(tol) = tolerance {
            if !tol.is_finite() || tol < T::zero() {
                return Err(FitError::InvalidTolerance(
                    tol.to_f64().unwrap_or(f64::NAN),
                ));
            }
        }
        Ok(())
    }

    /// Validate that no parameters were set multiple times in the builder.
    pub fn validate_no_duplicates(duplicate_param: Option<&'static str>) -> Result<(), FitError> {
        if let Some(param) = duplicate_param {
            return Err(FitError::DuplicateParameter { parameter: param });
        }
        Ok(())
    }
}
