//! Error types for fuzzy controller operations.
//!
//! ## Purpose
//!
//! This module defines every failure a matrix, registry or controller object
//! can report. All public operations return `Result<_, FuzzyError>`; none of
//! them abort the process on a recoverable condition.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors carry the offending dimensions or object types.
//! * **No-std**: Supports `no_std` environments by using `alloc` for dynamic messages.
//! * **Trait Implementation**: Implements `Display` and `std::error::Error` (when `std` is enabled).
//!
//! ## Key concepts
//!
//! 1. **Storage errors**: Allocation failure, empty operands, bad shapes.
//! 2. **Algebra errors**: Incompatible dimensions for composition.
//! 3. **Lifecycle errors**: Register/unregister out of order.
//! 4. **Dispatch errors**: A capability invoked on the wrong object type.
//!
//! ## Invariants
//!
//! * Returning an error never leaves the receiver in a partially updated state.
//!
//! ## Non-goals
//!
//! * This module does not perform the checks itself (see `engine::validator`).
//! * This module does not log or print anything.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(feature = "std")]
use std::error::Error;
#[cfg(feature = "std")]
use std::string::String;

// External dependencies
use core::fmt::{Display, Formatter, Result};

// Internal dependencies
use crate::primitives::kind::ObjectType;

// ============================================================================
// Error Type
// ============================================================================

/// Error type for fuzzy controller operations.
#[derive(Debug, Clone, PartialEq)]
pub enum FuzzyError {
    /// Storage for a `rows x cols` matrix could not be allocated
    /// (element count overflow or allocator failure).
    AllocationError {
        /// Requested row count.
        rows: usize,
        /// Requested column count.
        cols: usize,
    },

    /// Inner dimensions of a composition do not agree.
    DimensionMismatch {
        /// Column count of the left operand.
        left_cols: usize,
        /// Row count of the right operand.
        right_rows: usize,
    },

    /// The source matrix holds no storage.
    UninitializedOrEmpty,

    /// An operation was invoked out of order.
    StateError(&'static str),

    /// A capability was invoked on an object of the wrong type.
    WrongObjectType {
        /// Type required by the capability.
        expected: ObjectType,
        /// Type of the object the capability was invoked on.
        found: ObjectType,
    },

    /// The membership registry has no entries.
    EmptyRegistry,

    /// The object has not been registered.
    NotRegistered,

    /// The object is already registered.
    AlreadyRegistered,

    /// A cell access was outside the matrix.
    IndexOutOfBounds {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
        /// Matrix row count.
        rows: usize,
        /// Matrix column count.
        cols: usize,
    },

    /// A flat buffer does not hold exactly `rows * cols` elements.
    InvalidShape {
        /// Requested row count.
        rows: usize,
        /// Requested column count.
        cols: usize,
        /// Length of the supplied buffer.
        len: usize,
    },

    /// The sampled universe of discourse is unusable.
    InvalidUniverse(String),

    /// The aggregated output membership is zero everywhere.
    ZeroMembership,

    /// Parameter was set multiple times in the builder.
    DuplicateParameter {
        /// Name of the parameter that was set multiple times.
        parameter: &'static str,
    },

    /// A required builder parameter was never set.
    MissingParameter {
        /// Name of the missing parameter.
        parameter: &'static str,
    },
}

impl FuzzyError {
    /// Whether the error reports an out-of-order lifecycle call.
    pub fn is_state_error(&self) -> bool {
        matches!(
            self,
            Self::StateError(_) | Self::NotRegistered | Self::AlreadyRegistered
        )
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for FuzzyError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::AllocationError { rows, cols } => {
                write!(f, "Cannot allocate a {rows}x{cols} fuzzy matrix")
            }
            Self::DimensionMismatch {
                left_cols,
                right_rows,
            } => {
                write!(
                    f,
                    "Dimension mismatch: left operand has {left_cols} columns, right operand has {right_rows} rows"
                )
            }
            Self::UninitializedOrEmpty => write!(f, "Matrix is uninitialized or empty"),
            Self::StateError(msg) => write!(f, "Invalid state: {msg}"),
            Self::WrongObjectType { expected, found } => {
                write!(f, "Wrong object type: expected {expected}, found {found}")
            }
            Self::EmptyRegistry => write!(f, "No membership functions registered"),
            Self::NotRegistered => write!(f, "Object is not registered"),
            Self::AlreadyRegistered => {
                write!(f, "Object is already registered; unregister it first")
            }
            Self::IndexOutOfBounds {
                row,
                col,
                rows,
                cols,
            } => {
                write!(
                    f,
                    "Index ({row}, {col}) out of bounds for a {rows}x{cols} matrix"
                )
            }
            Self::InvalidShape { rows, cols, len } => {
                write!(
                    f,
                    "Invalid shape: {rows}x{cols} needs {} elements, got {len}",
                    rows.saturating_mul(*cols)
                )
            }
            Self::InvalidUniverse(msg) => write!(f, "Invalid universe: {msg}"),
            Self::ZeroMembership => {
                write!(f, "Cannot defuzzify: aggregated membership is zero")
            }
            Self::DuplicateParameter { parameter } => {
                write!(
                    f,
                    "Parameter '{parameter}' was set multiple times. Each parameter can only be configured once."
                )
            }
            Self::MissingParameter { parameter } => {
                write!(f, "Parameter '{parameter}' is required")
            }
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

#[cfg(feature = "std")]
impl Error for FuzzyError {}
