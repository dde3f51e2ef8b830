//! Object type tags for fuzzy controller components.
//!
//! The tag is the sole dispatch mechanism of the object model: every
//! capability restricted to a subset of object types checks the tag of its
//! receiver before doing any work.

// External dependencies
use core::fmt::{Display, Formatter, Result};

/// Type of a fuzzy controller object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ObjectType {
    /// Unregistered object. No capability is available.
    #[default]
    Null,

    /// Input interface: turns crisp measurements into membership degrees.
    Input,

    /// Reserved for rule evaluation. Registers like any other object but
    /// exposes no input or output capability.
    Inference,

    /// Output interface: turns membership degrees into crisp values.
    Output,
}

impl ObjectType {
    /// Get the name of the object type.
    #[inline]
    pub const fn name(&self) -> &'static str {
        match self {
            ObjectType::Null => "Null",
            ObjectType::Input => "Input",
            ObjectType::Inference => "Inference",
            ObjectType::Output => "Output",
        }
    }

    /// Whether this is a registered (non-null) type.
    #[inline]
    pub const fn is_registered(&self) -> bool {
        !matches!(self, ObjectType::Null)
    }

    /// Whether this type carries the fuzzification capability.
    #[inline]
    pub const fn is_input(&self) -> bool {
        matches!(self, ObjectType::Input)
    }

    /// Whether this type is the reserved inference slot.
    #[inline]
    pub const fn is_inference(&self) -> bool {
        matches!(self, ObjectType::Inference)
    }

    /// Whether this type carries the defuzzification capability.
    #[inline]
    pub const fn is_output(&self) -> bool {
        matches!(self, ObjectType::Output)
    }
}

impl Display for ObjectType {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        f.write_str(self.name())
    }
}
