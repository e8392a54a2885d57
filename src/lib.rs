//! # curvefit-rs — Closed-Form Curve Fitting for Rust
//!
//! A small, deterministic least-squares fitting library: straight-line and
//! degree-2 polynomial models solved in closed form, with diagnostic metrics
//! (R², MAE, RMSE, residuals) and on-demand prediction.
//!
//! ## What does it do?
//!
//! Given a dataset of (x, y) samples, the crate fits either
//!
//! - a **straight line** `y = slope·x + intercept` (n ≥ 2), via the
//!   single-variable normal equations over scalar sums, or
//! - a **parabola** `y = a·x² + b·x + c` (n ≥ 3), via Cramer's rule over the
//!   power sums of the 3×3 normal-equations system,
//!
//! and then scores any fit against a dataset (residuals in input order, mean
//! absolute error, root mean squared error, coefficient of determination) and
//! answers point predictions at arbitrary x.
//!
//! **Key properties:**
//! - Pure functions over immutable input: no I/O, no logging, no caching,
//!   no shared state between calls
//! - Deterministic: fitting the same data twice is bit-identical
//! - Degenerate inputs (too few points, collapsed x values) fail with
//!   specific errors rather than returning NaN coefficients
//! - Generic over `f32`/`f64` via `num_traits::Float`
//!
//! ## Quick Start
//!
//! ```rust
//! use curvefit_rs::prelude::*;
//!
//! let data = vec![
//!     Sample::new(1.0, 2.0),
//!     Sample::new(2.0, 4.0),
//! ];
//!
//! // Build the fitter
//! let fitter = CurveFit::new().model(Linear).build()?;
//!
//! // Fit the model to the data
//! let fit = fitter.fit(&data)?;
//! assert_eq!(fit.equation, "Y = 2.0000X + 0.0000");
//!
//! // Predict at a new x (extrapolation is allowed)
//! let p = fitter.predict(&fit, 10.0)?;
//! assert_eq!(p.predicted_y, 20.0);
//! # Result::<(), FitError>::Ok(())
//! ```
//!
//! ### Quadratic fit and diagnostics
//!
//! ```rust
//! use curvefit_rs::prelude::*;
//!
//! let data = vec![
//!     Sample::new(1.0, 2.0),
//!     Sample::new(2.0, 4.0),
//!     Sample::new(3.0, 8.0),
//! ];
//!
//! let fitter = CurveFit::new().model(Quadratic).build()?;
//! let fit = fitter.fit(&data)?;
//!
//! // Three distinct x values determine the parabola exactly
//! let eval = fitter.evaluate(&fit, &data)?;
//! assert_eq!(eval.r_squared, 1.0);
//! assert!(eval.residuals.iter().all(|&(_, r)| r == 0.0));
//! # Result::<(), FitError>::Ok(())
//! ```
//!
//! ### Result and Error Handling
//!
//! Every operation returns a `Result<_, FitError>`. The `?` operator is
//! idiomatic:
//!
//! ```rust
//! use curvefit_rs::prelude::*;
//!
//! // All x identical: no finite slope exists
//! let flat = vec![Sample::new(1.0, 1.0), Sample::new(1.0, 2.0)];
//!
//! let fitter = CurveFit::new().model(Linear).build()?;
//! match fitter.fit(&flat) {
//!     Ok(_) => unreachable!(),
//!     Err(FitError::SingularSystem { det }) => assert_eq!(det, 0.0),
//!     Err(e) => panic!("unexpected error: {}", e),
//! }
//! # Result::<(), FitError>::Ok(())
//! ```
//!
//! Failure modes are deterministic and never retried internally: the same
//! input always reproduces the same error, and the library never logs or
//! suppresses — the caller decides user-visible behavior.
//!
//! | Variant | Meaning |
//! |---|---|
//! | `EmptyInput` | the dataset contains no samples |
//! | `TooFewPoints` | fewer samples than the model needs (2 linear, 3 quadratic) |
//! | `MismatchedInputs` | parallel x/y slices differ in length |
//! | `InvalidNumericValue` | a NaN/infinite value in the data or query |
//! | `SingularSystem` | degenerate denominator/determinant (collapsed x) |
//! | `UndefinedRSquared` | all y identical; carries the still-defined MAE/RMSE |
//!
//! ## Parameters
//!
//! | Parameter | Default | Options | Description |
//! |---|---|---|---|
//! | **model** | `Linear` | `Linear`, `Quadratic` | Model family to fit |
//! | **singularity_tolerance** | exact zero | finite `eps >= 0` | Reject `\|denom\| <= eps` as degenerate |
//!
//! By default only an exactly zero denominator (or determinant) is treated as
//! degenerate, matching the plain formula evaluation. Near-singular systems
//! then produce numerically unstable but accepted coefficients; configure a
//! tolerance to reject them early instead.
//!
//! ## Minimal Usage (no_std / Embedded)
//!
//! The crate supports `no_std` environments. Disable default features to
//! remove the standard library dependency (an allocator is still required):
//!
//! ```toml
//! [dependencies]
//! curvefit_rs = { version = "0.1", default-features = false }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_docs)]

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

// ============================================================================
// Internal Modules
// ============================================================================

// Layer 1: Primitives - data structures and error types.
//
// Contains the `Sample` observation type and the shared `FitError` enum.
mod primitives;

// Layer 2: Math - pure mathematical functions.
//
// Contains power-sum accumulation for the normal equations and the 3×3
// determinant expansion used by Cramer's rule.
mod math;

// Layer 3: Algorithms - closed-form solvers.
//
// Contains the straight-line and quadratic least-squares solvers and the
// `FitModel` tagged union they produce.
mod algorithms;

// Layer 4: Evaluation - scoring and prediction.
//
// Contains diagnostic metrics (residuals, R², MAE, RMSE) and on-demand
// point prediction.
mod evaluation;

// Layer 5: Engine - validation and orchestration.
//
// Contains fail-fast input validation, the fit executor, and the
// caller-facing result types.
mod engine;

// High-level fluent API.
//
// Provides the `CurveFit` builder for configuring and running fits.
mod api;

// ============================================================================
// Prelude
// ============================================================================

/// Standard prelude.
///
/// This module is intended to be wildcard-imported for convenient access to
/// the most commonly used types:
///
/// ```
/// use curvefit_rs::prelude::*;
/// ```
pub mod prelude {
    pub use crate::api::{
        CurveFitBuilder as CurveFit, CurveFitter, EvaluationResult, FitError, FitModel, FitResult,
        LinearFit, ModelKind,
        ModelKind::{Linear, Quadratic},
        Prediction, QuadraticFit, Sample,
    };
}

// ============================================================================
// Testing re-exports
// ============================================================================

/// Internal modules for development and testing.
///
/// This module re-exports internal modules for development and testing
/// purposes. It is only available with the `dev` feature enabled.
///
/// **Warning**: These are internal implementation details and may change
/// without notice. Do not use in production code.
#[cfg(feature = "dev")]
pub mod internals {
    /// Internal primitive types and errors.
    pub mod primitives {
        pub use crate::primitives::*;
    }
    /// Internal math functions.
    pub mod math {
        pub use crate::math::*;
    }
    /// Internal solvers and model types.
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    /// Internal evaluation and diagnostics.
    pub mod evaluation {
        pub use crate::evaluation::*;
    }
    /// Internal validation and orchestration.
    pub mod engine {
        pub use crate::engine::*;
    }
    /// Internal API.
    pub mod api {
        pub use crate::api::*;
    }
}
