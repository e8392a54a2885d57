//! 3×3 determinants for Cramer's rule.
//!
//! ## Purpose
//!
//! This module provides the determinant expansion used by the quadratic
//! solver. The degree-2 normal equations form a 3×3 symmetric system small
//! enough that a direct cofactor expansion is both the fastest and the most
//! transparent solution method.
//!
//! ## Design notes
//!
//! * **Row-major layout**: Matrices are `[T; 9]` in row-major order.
//! * **First-row expansion**: `det = m00·C00 − m01·C01 + m02·C02`.
//!
//! ## Non-goals
//!
//! * This module does not solve general n×n systems.
//! * This module does not apply pivoting or conditioning.

// External dependencies
use num_traits::Float;

// ============================================================================
// Determinant
// ============================================================================

/// Determinant of a 3×3 matrix given in row-major order.
#[inline]
pub fn det3<T: Float>(m: &[T; 9]) -> T {
    m[0] * (m[4] * m[8] - m[5] * m[7]) - m[1] * (m[3] * m[8] - m[5] * m[6])
        + m[2] * (m[3] * m[7] - m[4] * m[6])
}

/// Replace column `col` of a 3×3 row-major matrix with the vector `v`.
///
/// Used to build the numerator matrices of Cramer's rule.
#[inline]
pub fn replace_column<T: Float>(m: &[T; 9], col: usize, v: &[T; 3]) -> [T; 9] {
    let mut out = *m;
    out[col] = v[0];
    out[3 + col] = v[1];
    out[6 + col] = v[2];
    out
}
