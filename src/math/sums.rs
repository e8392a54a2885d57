//! Power-sum accumulation for normal-equation solvers.
//!
//! ## Purpose
//!
//! This module computes the scalar sums that parameterize the closed-form
//! least-squares solvers: `Σx, Σy, Σxy, Σx²` for the linear model, plus
//! `Σx³, Σx⁴, Σx²y` for the quadratic model.
//!
//! ## Design notes
//!
//! * **Single pass**: Each accumulator is filled in one sweep over the data.
//! * **Order-independent**: Sums are commutative, so the sample order does
//!   not affect the fitted coefficients.
//!
//! ## Invariants
//!
//! * Accumulation over finite inputs yields finite sums for datasets of
//!   practical size; finiteness of the inputs is enforced upstream.
//!
//! ## Non-goals
//!
//! * This module does not use compensated (Kahan) summation.
//! * This module does not validate its inputs.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::sample::Sample;

// ============================================================================
// Linear Sums
// ============================================================================

/// Scalar sums for the straight-line normal equations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearSums<T> {
    /// Sample count as a float.
    pub n: T,
    /// Σx
    pub sx: T,
    /// Σy
    pub sy: T,
    /// Σxy
    pub sxy: T,
    /// Σx²
    pub sxx: T,
}

impl<T: Float> LinearSums<T> {
    /// Accumulate the linear-model sums over a dataset in one pass.
    pub fn accumulate(samples: &[Sample<T>]) -> Self {
        let mut sx = T::zero();
        let mut sy = T::zero();
        let mut sxy = T::zero();
        let mut sxx = T::zero();

        for s in samples {
            sx = sx + s.x;
            sy = sy + s.y;
            sxy = sxy + s.x * s.y;
            sxx = sxx + s.x * s.x;
        }

        Self {
            n: T::from(samples.len()).unwrap_or_else(T::zero),
            sx,
            sy,
            sxy,
            sxx,
        }
    }

    /// The normal-equation denominator `n·Σx² − (Σx)²`.
    ///
    /// Zero exactly when all x values are identical.
    #[inline]
    pub fn denominator(&self) -> T {
        self.n * self.sxx - self.sx * self.sx
    }
}

// ============================================================================
// Quadratic Sums
// ============================================================================

/// Scalar power sums for the degree-2 normal equations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuadraticSums<T> {
    /// Sample count as a float.
    pub n: T,
    /// Σx
    pub sx: T,
    /// Σx²
    pub sx2: T,
    /// Σx³
    pub sx3: T,
    /// Σx⁴
    pub sx4: T,
    /// Σy
    pub sy: T,
    /// Σxy
    pub sxy: T,
    /// Σx²y
    pub sx2y: T,
}

impl<T: Float> QuadraticSums<T> {
    /// Accumulate the quadratic-model power sums over a dataset in one pass.
    pub fn accumulate(samples: &[Sample<T>]) -> Self {
        let mut sx = T::zero();
        let mut sx2 = T::zero();
        let mut sx3 = T::zero();
        let mut sx4 = T::zero();
        let mut sy = T::zero();
        let mut sxy = T::zero();
        let mut sx2y = T::zero();

        for s in samples {
            let x2 = s.x * s.x;
            sx = sx + s.x;
            sx2 = sx2 + x2;
            sx3 = sx3 + x2 * s.x;
            sx4 = sx4 + x2 * x2;
            sy = sy + s.y;
            sxy = sxy + s.x * s.y;
            sx2y = sx2y + x2 * s.y;
        }

        Self {
            n: T::from(samples.len()).unwrap_or_else(T::zero),
            sx,
            sx2,
            sx3,
            sx4,
            sy,
            sxy,
            sx2y,
        }
    }
}
