//! Shared error types for curve fitting and evaluation.
//!
//! ## Purpose
//!
//! This module defines the unified `FitError` enum returned by every
//! fallible operation in the crate: input validation, solving, metric
//! computation, and prediction.
//!
//! ## Design notes
//!
//! * **Specific variants**: Each failure mode has its own variant with the
//!   offending values attached, so callers can branch without string parsing.
//! * **Deterministic**: Every error is a pure function of the inputs.
//!   Retrying with the same data reproduces the same error.
//! * **f64 payloads**: Numeric payloads are stored as `f64` regardless of the
//!   working precision, converted at the failure site.
//!
//! ## Key concepts
//!
//! * **Degenerate input**: `EmptyInput`, `TooFewPoints`, and
//!   `SingularSystem` — the dataset cannot determine a unique fit.
//! * **Undefined metric**: `UndefinedRSquared` — R² has no value for the
//!   given data, while the remaining metrics stay computable and are carried
//!   inside the error.
//!
//! ## Non-goals
//!
//! * This module does not log or format errors for any particular UI.
//! * This module does not classify errors as retryable (none are).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;

// External dependencies
use core::fmt;

// ============================================================================
// Error Type
// ============================================================================

/// Errors produced by fitting, evaluation, and prediction.
#[derive(Debug, Clone, PartialEq)]
pub enum FitError {
    /// The input dataset contains no samples.
    EmptyInput,

    /// Parallel x/y slices have different lengths.
    MismatchedInputs {
        /// Length of the x slice.
        x_len: usize,
        /// Length of the y slice.
        y_len: usize,
    },

    /// The dataset is too small for the requested model.
    TooFewPoints {
        /// Number of samples provided.
        got: usize,
        /// Minimum number of samples required.
        min: usize,
    },

    /// A value in the input is NaN or infinite.
    InvalidNumericValue(String),

    /// The normal-equations system is singular and admits no unique solution.
    ///
    /// For the linear model this is the denominator `n·Sxx − Sx²`; for the
    /// quadratic model it is the determinant of the 3×3 coefficient matrix.
    SingularSystem {
        /// The degenerate determinant or denominator value.
        det: f64,
    },

    /// R² is mathematically undefined because every y value is identical
    /// (`SStot = 0`). MAE and RMSE remain well-defined and are carried here.
    UndefinedRSquared {
        /// Mean absolute error of the evaluated fit.
        mae: f64,
        /// Root mean squared error of the evaluated fit.
        rmse: f64,
    },

    /// The configured singularity tolerance is negative or non-finite.
    InvalidTolerance(f64),

    /// A builder parameter was set more than once.
    DuplicateParameter {
        /// Name of the duplicated parameter.
        parameter: &'static str,
    },
}

impl fmt::Display for FitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FitError::EmptyInput => write!(f, "Input dataset is empty"),
            FitError::MismatchedInputs { x_len, y_len } => {
                write!(f, "Length mismatch: x has {} points, y has {}", x_len, y_len)
            }
            FitError::TooFewPoints { got, min } => {
                write!(f, "Too few points: got {}, need at least {}", got, min)
            }
            FitError::InvalidNumericValue(detail) => {
                write!(f, "Invalid numeric value: {}", detail)
            }
            FitError::SingularSystem { det } => {
                write!(
                    f,
                    "Singular system: determinant {} admits no unique solution",
                    det
                )
            }
            FitError::UndefinedRSquared { mae, rmse } => {
                write!(
                    f,
                    "R² undefined: all y values identical (MAE {}, RMSE {})",
                    mae, rmse
                )
            }
            FitError::InvalidTolerance(tol) => {
                write!(f, "Invalid tolerance: {} (must be finite and >= 0)", tol)
            }
            FitError::DuplicateParameter { parameter } => {
                write!(f, "Parameter '{}' was set more than once", parameter)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for FitError {}
