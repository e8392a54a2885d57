//! Layer 4: Evaluation
//!
//! # Purpose
//!
//! This layer scores fitted models and answers prediction queries:
//! - **diagnostics**: residuals, R², MAE, RMSE
//! - **prediction**: pure model evaluation at arbitrary x
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Engine
//!   ↓
//! Layer 4: Evaluation ← You are here
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Diagnostic metrics (residuals, R², MAE, RMSE).
pub mod diagnostics;

/// On-demand point prediction.
pub mod prediction;
