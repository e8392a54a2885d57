//! Layer 1: Primitives
//!
//! # Purpose
//!
//! This layer provides the fundamental building blocks shared by every other
//! layer:
//! - **sample**: The `Sample` observation type and dataset helpers
//! - **errors**: Shared error types (`FitError`)
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
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives ← You are here
//! ```

/// Shared error types (`FitError`).
pub mod errors;

/// The `Sample` observation type.
pub mod sample;
