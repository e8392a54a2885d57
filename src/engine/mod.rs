//! Layer 5: Engine
//!
//! # Purpose
//!
//! This layer orchestrates fitting and owns the caller-facing result types:
//! - **validator**: fail-fast input and parameter validation
//! - **executor**: validate → solve → assemble pipeline
//! - **output**: `FitResult`, `EvaluationResult`, `Prediction`
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Engine ← You are here
//!   ↓
//! Layer 4: Evaluation
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Fail-fast validation of datasets and parameters.
pub mod validator;

/// Fit orchestration.
pub mod executor;

/// Caller-facing result types.
pub mod output;
