//! Input adapter: crisp measurements in, membership degrees out.
//!
//! ## Purpose
//!
//! `FcInput` is an `FcInterface` registered with the `Input` tag. It exposes
//! only the operations that make sense on a controller input, so calling
//! defuzzification on an input does not type-check.
//!
//! ## Design notes
//!
//! * **Delegation**: Every method forwards to the wrapped interface, which
//!   still performs the tag checks.
//! * **Builder**: `InputBuilder` collects the name and membership functions
//!   and registers them in one step.
//!
//! ## Invariants
//!
//! * A registered `FcInput` always carries the `Input` tag.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::{string::String, vec::Vec};
#[cfg(feature = "std")]
use std::{string::String, vec::Vec};

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::engine::interface::FcInterface;
use crate::engine::object::{FcObject, FuzzyObject, ObjectType};
use crate::engine::registry::MembershipRegistry;
use crate::engine::validator::Validator;
use crate::math::membership::MembershipFunction;
use crate::primitives::errors::FuzzyError;
use crate::primitives::matrix::FuzzyMatrix;

// ============================================================================
// Input Object
// ============================================================================

/// Controller input variable.
#[derive(Debug, Clone)]
pub struct FcInput<T> {
    interface: FcInterface<T>,
}

impl<T> Default for FcInput<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FcInput<T> {
    /// Create an unregistered input.
    pub const fn new() -> Self {
        Self {
            interface: FcInterface::new(),
        }
    }

    /// Underlying interface object.
    #[inline]
    pub fn interface(&self) -> &FcInterface<T> {
        &self.interface
    }
}

impl<T: Float> FcInput<T> {
    /// Register as an `Input` named `name`.
    pub fn register(&mut self, name: &str) -> Result<(), FuzzyError> {
        self.interface.register(ObjectType::Input, name)
    }

    /// Release all owned resources and return to the Null state.
    pub fn unregister(&mut self) -> Result<(), FuzzyError> {
        self.interface.unregister()
    }

    /// Append a plain membership function under `label`.
    pub fn add_membership_fn(&mut self, f: fn(T) -> T, label: &str) -> Result<(), FuzzyError> {
        self.interface.add_membership_fn(f, label)
    }

    /// Append a membership function of any shape under `label`.
    pub fn add_membership_shape(
        &mut self,
        function: MembershipFunction<T>,
        label: &str,
    ) -> Result<(), FuzzyError> {
        self.interface.add_membership_shape(function, label)
    }

    /// Remove every membership function.
    pub fn clear_membership_fn(&mut self) -> Result<(), FuzzyError> {
        self.interface.clear_membership_fn()
    }

    /// Fuzzify `values` into the stored membership matrix.
    pub fn fuzzing(&mut self, values: &[T]) -> Result<(), FuzzyError> {
        self.interface.fuzzing(values)
    }

    /// Fuzzify `values`, evaluating rows in parallel.
    #[cfg(feature = "parallel")]
    pub fn fuzzing_parallel(&mut self, values: &[T]) -> Result<(), FuzzyError>
    where
        T: Send + Sync,
    {
        self.interface.fuzzing_parallel(values)
    }

    /// Degree of `values[row]` in the fuzzy set labeled `label`.
    pub fn degree(&self, row: usize, label: &str) -> Option<T> {
        let col = self.interface.registry().position(label)?;
        self.interface.membership_matrix().get(row, col)
    }
}

impl<T> FuzzyObject<T> for FcInput<T> {
    fn object(&self) -> &FcObject {
        self.interface.object()
    }

    fn membership_matrix(&self) -> &FuzzyMatrix<T> {
        self.interface.membership_matrix()
    }

    fn registry(&self) -> &MembershipRegistry<T> {
        self.interface.registry()
    }
}

// ============================================================================
// Input Builder
// ============================================================================

/// Builder for a registered [`FcInput`].
#[derive(Debug, Clone)]
pub struct InputBuilder<T> {
    /// Object name.
    pub name: Option<String>,

    /// Membership functions in column order.
    pub memberships: Vec<(String, MembershipFunction<T>)>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl<T> Default for InputBuilder<T> {
    fn default() -> Self {
        Self {
            name: None,
            memberships: Vec::new(),
            duplicate_param: None,
        }
    }
}

impl<T: Float> InputBuilder<T> {
    /// Append a plain membership function under `label`.
    pub fn membership(self, label: &str, f: fn(T) -> T) -> Self {
        self.shape(label, MembershipFunction::Custom(f))
    }

    /// Append a membership function of any shape under `label`.
    pub fn shape(mut self, label: &str, function: MembershipFunction<T>) -> Self {
        self.memberships.push((String::from(label), function));
        self
    }

    /// Validate the configuration and register the input.
    pub fn build(self) -> Result<FcInput<T>, FuzzyError> {
        // Check for duplicate parameter configuration
        Validator::validate_no_duplicates(self.duplicate_param)?;

        let name = self.name.ok_or(FuzzyError::MissingParameter { parameter: "name" })?;

        let mut input = FcInput::new();
        input.register(&name)?;
        for (label, function) in &self.memberships {
            input.add_membership_shape(*function, label)?;
        }
        Ok(input)
    }
}
