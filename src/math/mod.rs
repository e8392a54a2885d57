//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides pure mathematical functions used by the solvers:
//! - Power/cross-sum accumulation for the normal equations
//! - 3×3 determinants for Cramer's rule
//!
//! These are reusable numeric building blocks with no model-specific logic.
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Engine
//!   ↓
//! Layer 4: Evaluation
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Power/cross-sum accumulation over datasets.
pub mod sums;

/// 3×3 determinant expansion for Cramer's rule.
pub mod determinant;
