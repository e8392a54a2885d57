//! Dataset primitives for curve fitting.
//!
//! ## Purpose
//!
//! This module defines `Sample`, the single observation type consumed by the
//! fitting and evaluation layers. A dataset is an ordered `&[Sample<T>]`;
//! ordering does not affect the fitted coefficients but is preserved in
//! residual reporting.
//!
//! ## Invariants
//!
//! * The fitting layers require finite x and y; finiteness is enforced by the
//!   engine validator, not by this type.
//!
//! ## Non-goals
//!
//! * This module does not parse, sort, or deduplicate data.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// ============================================================================
// Sample
// ============================================================================

/// A single (x, y) observation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample<T> {
    /// Predictor value.
    pub x: T,
    /// Response value.
    pub y: T,
}

impl<T: Float> Sample<T> {
    /// Create a new sample.
    #[inline]
    pub fn new(x: T, y: T) -> Self {
        Self { x, y }
    }
}

impl<T: Float> From<(T, T)> for Sample<T> {
    #[inline]
    fn from((x, y): (T, T)) -> Self {
        Self { x, y }
    }
}

/// Zip parallel x/y slices into an owned sample vector.
///
/// The slices must have equal length; the caller is expected to have run the
/// validator's length check first.
#[inline]
pub fn zip_xy<T: Float>(x: &[T], y: &[T]) -> Vec<Sample<T>> {
    x.iter()
        .zip(y.iter())
        .map(|(&xi, &yi)| Sample::new(xi, yi))
        .collect()
}
