//! On-demand point prediction.
//!
//! ## Purpose
//!
//! This module evaluates a fitted model at an arbitrary x value. There is no
//! range restriction: extrapolation beyond the training domain is allowed and
//! is the caller's responsibility to interpret.
//!
//! ## Invariants
//!
//! * Prediction at a training x reproduces the predicted value used in that
//!   sample's residual exactly (single evaluation path).
//!
//! ## Non-goals
//!
//! * This module does not attach uncertainty to predictions.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::types::FitModel;
use crate::engine::output::Prediction;
use crate::engine::validator::Validator;
use crate::primitives::errors::FitError;

// ============================================================================
// Prediction
// ============================================================================

/// Evaluate `model` at `x`.
///
/// Fails with `InvalidNumericValue` when `x` is NaN or infinite.
pub fn predict<T: Float>(model: &FitModel<T>, x: T) -> Result<Prediction<T>, FitError> {
    Validator::validate_scalar(x, "x")?;

    Ok(Prediction {
        x,
        predicted_y: model.value_at(x),
    })
}
