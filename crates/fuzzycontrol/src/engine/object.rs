//! Base record of the controller object model.
//!
//! ## Purpose
//!
//! Every controller component (input, inference slot, output) starts from
//! an `FcObject`: a name plus an `ObjectType` tag. The tag, checked through
//! `Validator`, replaces per-object method tables.
//!
//! ## Key concepts
//!
//! * **Null**: The init state. Nothing but `register` is allowed.
//! * **Registered**: Tagged with a non-null type and named.
//!
//! ## Invariants
//!
//! * `kind == Null` implies an empty name.
//! * Unregistering restores a record equal to `FcObject::new()`.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(feature = "std")]
use std::string::String;

// Internal dependencies
use crate::engine::registry::MembershipRegistry;
use crate::engine::report::MembershipReport;
use crate::engine::validator::Validator;
use crate::primitives::errors::FuzzyError;
use crate::primitives::matrix::FuzzyMatrix;

pub use crate::primitives::kind::ObjectType;

// ============================================================================
// Base Record
// ============================================================================

/// Name and type tag of a controller object.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FcObject {
    name: String,
    kind: ObjectType,
}

impl FcObject {
    /// Create an object in the Null state.
    pub const fn new() -> Self {
        Self {
            name: String::new(),
            kind: ObjectType::Null,
        }
    }

    /// Object name; empty while unregistered.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Object type tag.
    #[inline]
    pub fn kind(&self) -> ObjectType {
        self.kind
    }

    /// Whether the object carries a non-null tag.
    #[inline]
    pub fn is_registered(&self) -> bool {
        self.kind.is_registered()
    }

    /// Tag the object as `kind` and name it.
    pub fn register(&mut self, kind: ObjectType, name: &str) -> Result<(), FuzzyError> {
        Validator::require_unregistered(self.kind)?;
        Validator::validate_register_kind(kind)?;
        self.name = String::from(name);
        self.kind = kind;
        Ok(())
    }

    /// Return to the Null state, clearing the name.
    pub fn unregister(&mut self) -> Result<(), FuzzyError> {
        Validator::require_registered(self.kind)?;
        *self = Self::new();
        Ok(())
    }
}

// ============================================================================
// Shared Capability Surface
// ============================================================================

/// Read-only view shared by every controller object variant.
pub trait FuzzyObject<T> {
    /// Base record.
    fn object(&self) -> &FcObject;

    /// Membership matrix currently stored on the object.
    fn membership_matrix(&self) -> &FuzzyMatrix<T>;

    /// Membership functions in column order.
    fn registry(&self) -> &MembershipRegistry<T>;

    /// Object name.
    fn name(&self) -> &str {
        self.object().name()
    }

    /// Object type tag.
    fn kind(&self) -> ObjectType {
        self.object().kind()
    }

    /// Labeled, printable view of the membership matrix.
    fn report(&self) -> MembershipReport<'_, T>
    where
        Self: Sized,
    {
        MembershipReport::new(self.object(), self.membership_matrix(), self.registry())
    }
}
