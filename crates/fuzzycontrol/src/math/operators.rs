//! Fuzzy operators used by relational composition.
//!
//! ## Purpose
//!
//! This module provides the t-norm and s-norm (conjunction/disjunction)
//! pairs that define how two fuzzy relations are chained together.
//!
//! ## Key concepts
//!
//! * **Max-min**: Zadeh's composition. `max_k min(a_ik, b_kj)`.
//! * **Max-product**: Algebraic variant. `max_k (a_ik * b_kj)`.
//!
//! ## Invariants
//!
//! * Both operators map `[0, 1] x [0, 1]` into `[0, 1]`.
//! * The aggregation (max) is the same for every operator; only the pairwise
//!   conjunction differs.

// External dependencies
use num_traits::Float;

/// Conjunction used inside a max-based relational composition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CompositionOp {
    /// Max-min composition.
    ///
    /// This is the default.
    #[default]
    MaxMin,

    /// Max-product composition.
    MaxProd,
}

impl CompositionOp {
    /// Get the name of the composition operator.
    #[inline]
    pub const fn name(&self) -> &'static str {
        match self {
            CompositionOp::MaxMin => "MaxMin",
            CompositionOp::MaxProd => "MaxProd",
        }
    }

    /// Pairwise conjunction of two membership degrees.
    #[inline]
    pub fn conjunction<T: Float>(&self, a: T, b: T) -> T {
        match self {
            CompositionOp::MaxMin => a.min(b),
            CompositionOp::MaxProd => a * b,
        }
    }

    /// Aggregate a sequence of conjunctions (the "max" of max-min).
    ///
    /// An empty sequence aggregates to zero.
    #[inline]
    pub fn aggregate<T: Float>(values: impl IntoIterator<Item = T>) -> T {
        values.into_iter().reduce(T::max).unwrap_or_else(T::zero)
    }
}
