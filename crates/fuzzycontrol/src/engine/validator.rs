//! Capability and state checks for fuzzy controller objects.
//!
//! ## Purpose
//!
//! This module centralizes every check that gates an operation on the state
//! or type of its receiver. The object model has no method tables: a
//! capability is available exactly when these checks pass.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Ordering**: Registration is checked before type, type before registry
//!   contents.
//!
//! ## Invariants
//!
//! * Validation is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not constrain crisp input values; membership functions
//!   interpret them.

// Internal dependencies
use crate::primitives::errors::FuzzyError;
use crate::primitives::kind::ObjectType;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for object state and capabilities.
pub struct Validator;

impl Validator {
    // ========================================================================
    // Lifecycle
    // ========================================================================

    /// Require a registered (non-null) object.
    #[inline]
    pub fn require_registered(kind: ObjectType) -> Result<(), FuzzyError> {
        if !kind.is_registered() {
            return Err(FuzzyError::NotRegistered);
        }
        Ok(())
    }

    /// Require an unregistered object.
    #[inline]
    pub fn require_unregistered(kind: ObjectType) -> Result<(), FuzzyError> {
        if kind.is_registered() {
            return Err(FuzzyError::AlreadyRegistered);
        }
        Ok(())
    }

    /// Validate the type an object is being registered as.
    pub fn validate_register_kind(kind: ObjectType) -> Result<(), FuzzyError> {
        if !kind.is_registered() {
            return Err(FuzzyError::StateError(
                "an object cannot be registered with the Null type",
            ));
        }
        Ok(())
    }

    // ========================================================================
    // Capabilities
    // ========================================================================

    /// Require a registered object of exactly `expected` type.
    pub fn require_kind(found: ObjectType, expected: ObjectType) -> Result<(), FuzzyError> {
        Self::require_registered(found)?;
        if found != expected {
            return Err(FuzzyError::WrongObjectType { expected, found });
        }
        Ok(())
    }

    /// Require at least one membership function.
    #[inline]
    pub fn require_registry(len: usize) -> Result<(), FuzzyError> {
        if len == 0 {
            return Err(FuzzyError::EmptyRegistry);
        }
        Ok(())
    }

    /// Require one matrix column per membership function.
    pub fn validate_columns(cols: usize, registry_len: usize) -> Result<(), FuzzyError> {
        if cols != registry_len {
            return Err(FuzzyError::DimensionMismatch {
                left_cols: cols,
                right_rows: registry_len,
            });
        }
        Ok(())
    }

    // ========================================================================
    // Builder
    // ========================================================================

    /// Validate that no parameters were set multiple times in the builder.
    pub fn validate_no_duplicates(duplicate_param: Option<&'static str>) -> Result<(), FuzzyError> {
        if let Some(param) = duplicate_param {
            return Err(FuzzyError::DuplicateParameter { parameter: param });
        }
        Ok(())
    }
}
