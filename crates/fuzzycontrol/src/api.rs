//! High-level API for building controller variables.
//!
//! ## Purpose
//!
//! This module provides the primary user-facing entry point for configuring
//! controller inputs and outputs. It implements a fluent builder pattern for
//! naming a variable, registering its fuzzy sets, and choosing its role.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder; only the name is mandatory.
//! * **Polymorphic**: Uses marker types to transition to role-specific builders.
//! * **Validated**: Parameters are validated when `.build()` is called on the
//!   role builder.
//!
//! ## Key concepts
//!
//! ### Configuration Flow
//!
//! 1. Create an [`InterfaceBuilder`] via `InterfaceBuilder::new()`.
//! 2. Chain configuration methods (`.name()`, `.membership()`, `.shape()`).
//! 3. Select a role via `.adapter(Adapter::Input)` or
//!    `.adapter(Adapter::Output)` and call `.build()`.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::{string::String, vec::Vec};
#[cfg(feature = "std")]
use std::{string::String, vec::Vec};

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::adapters::input::InputBuilder;
use crate::adapters::output::OutputBuilder;

// Publicly re-exported types
pub use crate::adapters::input::FcInput;
pub use crate::adapters::output::FcOutput;
pub use crate::algorithms::defuzzification::DefuzzificationMethod;
pub use crate::engine::object::{FcObject, FuzzyObject, ObjectType};
pub use crate::math::membership::MembershipFunction;
pub use crate::primitives::errors::FuzzyError;

/// Marker types for selecting the variable role.
#[allow(non_snake_case)]
pub mod Adapter {
    pub use super::{Input, Output};
}

/// Fluent builder for configuring controller variables.
#[derive(Debug, Clone)]
pub struct InterfaceBuilder<T> {
    /// Variable name.
    pub name: Option<String>,

    /// Membership functions in column order.
    pub memberships: Vec<(String, MembershipFunction<T>)>,

    /// Universe bounds and sample count (Output only).
    pub universe: Option<(T, T, usize)>,

    /// Defuzzification method (Output only).
    pub defuzzification: Option<DefuzzificationMethod>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl<T: Float> Default for InterfaceBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> InterfaceBuilder<T> {
    /// Select a role to transition to a role-specific builder.
    pub fn adapter<A>(self, _adapter: A) -> A::Output
    where
        A: InterfaceAdapter<T>,
    {
        A::convert(self)
    }

    /// Create a new builder with no parameters set.
    pub fn new() -> Self {
        Self {
            name: None,
            memberships: Vec::new(),
            universe: None,
            defuzzification: None,
            duplicate_param: None,
        }
    }

    /// Set the variable name.
    pub fn name(mut self, name: &str) -> Self {
        if self.name.is_some() {
            self.duplicate_param = Some("name");
        }
        self.name = Some(String::from(name));
        self
    }

    /// Append a plain membership function under `label`.
    pub fn membership(self, label: &str, f: fn(T) -> T) -> Self {
        self.shape(label, MembershipFunction::Custom(f))
    }

    /// Append a membership function of any shape under `label`.
    pub fn shape(mut self, label: &str, function: MembershipFunction<T>) -> Self {
        self.memberships.push((String::from(label), function));
        self
    }

    /// Set the universe of discourse (Output only).
    pub fn universe(mut self, min: T, max: T, points: usize) -> Self {
        if self.universe.is_some() {
            self.duplicate_param = Some("universe");
        }
        self.universe = Some((min, max, points));
        self
    }

    /// Set the defuzzification method (Output only).
    pub fn defuzzification(mut self, method: DefuzzificationMethod) -> Self {
        if self.defuzzification.is_some() {
            self.duplicate_param = Some("defuzzification");
        }
        self.defuzzification = Some(method);
        self
    }
}

// ============================================================================
// Adapter Selection
// ============================================================================

/// Trait for transitioning from a generic builder to a role-specific one.
pub trait InterfaceAdapter<T: Float> {
    /// The role-specific builder.
    type Output;

    /// Convert a generic [`InterfaceBuilder`] into a role-specific builder.
    fn convert(builder: InterfaceBuilder<T>) -> Self::Output;
}

/// Marker for a controller input.
#[derive(Debug, Clone, Copy)]
pub struct Input;

impl<T: Float> InterfaceAdapter<T> for Input {
    type Output = InputBuilder<T>;

    fn convert(builder: InterfaceBuilder<T>) -> Self::Output {
        let mut result = InputBuilder::default();

        result.name = builder.name;
        result.memberships = builder.memberships;
        result.duplicate_param = builder.duplicate_param;

        // Output-only parameters are ignored
        result
    }
}

/// Marker for a controller output.
#[derive(Debug, Clone, Copy)]
pub struct Output;

impl<T: Float> InterfaceAdapter<T> for Output {
    type Output = OutputBuilder<T>;

    fn convert(builder: InterfaceBuilder<T>) -> Self::Output {
        let mut result = OutputBuilder::default();

        result.name = builder.name;
        result.memberships = builder.memberships;
        result.universe = builder.universe;
        result.defuzzification = builder.defuzzification;
        result.duplicate_param = builder.duplicate_param;

        result
    }
}
