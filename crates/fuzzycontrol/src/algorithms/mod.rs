//! Layer 3: Algorithms
//!
//! Core fuzzy algorithms: relational composition, fuzzification and
//! defuzzification.

/// Transposition and max-based composition.
pub mod composition;

/// Crisp values to membership matrices.
pub mod fuzzification;

/// Membership degrees to crisp values.
pub mod defuzzification;
