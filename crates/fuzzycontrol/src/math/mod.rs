//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides pure mathematical building blocks:
//! - Membership functions mapping crisp values to degrees
//! - Composition operators (t-norms paired with max aggregation)
//! - The sampled universe of discourse used for defuzzification
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Adapters
//!   ↓
//! Layer 4: Engine
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Membership functions.
pub mod membership;

/// Composition operators.
pub mod operators;

/// Sampled universe of discourse.
pub mod universe;
