//! Layer 3: Algorithms
//!
//! # Purpose
//!
//! This layer contains the closed-form least-squares solvers and the model
//! types they produce:
//! - **types**: `ModelKind`, `LinearFit`, `QuadraticFit`, `FitModel`
//! - **linear**: straight-line normal-equation solver
//! - **quadratic**: degree-2 Cramer's-rule solver
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
//! Layer 3: Algorithms ← You are here
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Model taxonomy and the `FitModel` tagged union.
pub mod types;

/// Closed-form straight-line solver.
pub mod linear;

/// Closed-form quadratic solver (Cramer's rule).
pub mod quadratic;
