//! Fit-quality diagnostics: residuals, R², MAE, RMSE.
//!
//! ## Purpose
//!
//! This module scores a fitted model against a dataset (the training set or a
//! held-out one). For each sample it computes the residual `yᵢ − ŷᵢ`, then
//! aggregates mean absolute error, root mean squared error, and the
//! coefficient of determination.
//!
//! ## Design notes
//!
//! * **Formulas**:
//!   ```text
//!   MAE  = mean(|rᵢ|)
//!   RMSE = sqrt(mean(rᵢ²))
//!   R²   = 1 − SSres/SStot,  SSres = Σrᵢ²,  SStot = Σ(yᵢ − ȳ)²
//!   ```
//! * **Input order**: Residuals are reported in dataset order.
//! * **Undefined R²**: When `SStot = 0` (all y identical) R² has no value.
//!   Rather than dividing by zero, the computation fails with
//!   `UndefinedRSquared` carrying the still well-defined MAE and RMSE.
//!
//! ## Invariants
//!
//! * MAE ≥ 0 and RMSE ≥ 0 for any input.
//! * Predicted values come from `FitModel::value_at`, the same path used by
//!   on-demand prediction.
//!
//! ## Non-goals
//!
//! * This module does not compute confidence intervals or effective degrees
//!   of freedom.
//! * This module does not clamp R² into [0, 1]; a fit worse than the mean
//!   predictor legitimately scores below zero.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::types::FitModel;
use crate::engine::output::EvaluationResult;
use crate::primitives::errors::FitError;
use crate::primitives::sample::Sample;

// ============================================================================
// Diagnostics
// ============================================================================

/// Diagnostic metric computation over a fitted model and a dataset.
pub struct Diagnostics;

impl Diagnostics {
    /// Score `model` against `samples` (n ≥ 1).
    ///
    /// Fails with `EmptyInput` on an empty dataset and with
    /// `UndefinedRSquared` when every y value is identical.
    pub fn compute<T: Float>(
        model: &FitModel<T>,
        samples: &[Sample<T>],
    ) -> Result<EvaluationResult<T>, FitError> {
        if samples.is_empty() {
            return Err(FitError::EmptyInput);
        }

        let n = T::from(samples.len()).unwrap_or_else(T::one);

        // Pass 1: residuals in input order, plus Σy for the mean.
        let mut residuals: Vec<(T, T)> = Vec::with_capacity(samples.len());
        let mut sum_y = T::zero();
        let mut sum_abs = T::zero();
        let mut ss_res = T::zero();

        for s in samples {
            let r = s.y - model.value_at(s.x);
            residuals.push((s.x, r));
            sum_y = sum_y + s.y;
            sum_abs = sum_abs + r.abs();
            ss_res = ss_res + r * r;
        }

        let mae = sum_abs / n;
        let rmse = (ss_res / n).sqrt();

        // Pass 2: total sum of squares around the mean response.
        let mean_y = sum_y / n;
        let mut ss_tot = T::zero();
        for s in samples {
            let d = s.y - mean_y;
            ss_tot = ss_tot + d * d;
        }

        if ss_tot == T::zero() {
            return Err(FitError::UndefinedRSquared {
                mae: mae.to_f64().unwrap_or(f64::NAN),
                rmse: rmse.to_f64().unwrap_or(f64::NAN),
            });
        }

        let r_squared = T::one() - ss_res / ss_tot;

        Ok(EvaluationResult {
            r_squared,
            mae,
            rmse,
            residuals,
        })
    }
}
