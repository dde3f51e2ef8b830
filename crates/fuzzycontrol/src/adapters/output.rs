//! Output adapter: inferred membership degrees in, crisp actions out.
//!
//! ## Purpose
//!
//! `FcOutput` is an `FcInterface` registered with the `Output` tag. It
//! stores the membership degrees produced by inference and converts each
//! row back into a crisp value.
//!
//! ## Design notes
//!
//! * **Configured defuzzification**: The universe and method are stored on
//!   the output so `unfuzzing()` needs no arguments; `unfuzzing_with()`
//!   overrides both for a single call.
//!
//! ## Key concepts
//!
//! * **Rows**: One row per inference result, one column per output set.
//!
//! ## Invariants
//!
//! * A stored membership matrix has exactly one column per registered
//!   membership function.
//!
//! ## Non-goals
//!
//! * This adapter does not run inference; degrees are supplied by the host.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::{string::String, vec::Vec};
#[cfg(feature = "std")]
use std::{string::String, vec::Vec};

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::defuzzification::DefuzzificationMethod;
use crate::engine::interface::FcInterface;
use crate::engine::object::{FcObject, FuzzyObject, ObjectType};
use crate::engine::registry::MembershipRegistry;
use crate::engine::validator::Validator;
use crate::math::membership::MembershipFunction;
use crate::math::universe::Universe;
use crate::primitives::errors::FuzzyError;
use crate::primitives::matrix::FuzzyMatrix;

// ============================================================================
// Output Object
// ============================================================================

/// Controller output variable.
#[derive(Debug, Clone)]
pub struct FcOutput<T> {
    interface: FcInterface<T>,
    universe: Option<Universe<T>>,
    method: DefuzzificationMethod,
}

impl<T> Default for FcOutput<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FcOutput<T> {
    /// Create an unregistered output with no universe configured.
    pub const fn new() -> Self {
        Self {
            interface: FcInterface::new(),
            universe: None,
            method: DefuzzificationMethod::Centroid,
        }
    }

    /// Underlying interface object.
    #[inline]
    pub fn interface(&self) -> &FcInterface<T> {
        &self.interface
    }

    /// Configured defuzzification method.
    #[inline]
    pub fn method(&self) -> DefuzzificationMethod {
        self.method
    }

    /// Change the defuzzification method.
    pub fn set_method(&mut self, method: DefuzzificationMethod) {
        self.method = method;
    }
}

impl<T: Float> FcOutput<T> {
    /// Register as an `Output` named `name`.
    pub fn register(&mut self, name: &str) -> Result<(), FuzzyError> {
        self.interface.register(ObjectType::Output, name)
    }

    /// Release all owned resources and return to the Null state.
    ///
    /// The universe and method are reset to their defaults as well.
    pub fn unregister(&mut self) -> Result<(), FuzzyError> {
        self.interface.unregister()?;
        self.universe = None;
        self.method = DefuzzificationMethod::default();
        Ok(())
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

    /// Configured universe of discourse.
    #[inline]
    pub fn universe(&self) -> Option<&Universe<T>> {
        self.universe.as_ref()
    }

    /// Replace the universe of discourse.
    pub fn set_universe(&mut self, universe: Universe<T>) {
        self.universe = Some(universe);
    }

    /// Store inferred degrees, one column per registered output set.
    pub fn set_membership(&mut self, matrix: FuzzyMatrix<T>) -> Result<(), FuzzyError> {
        self.interface.set_membership(matrix)
    }

    /// Defuzzify every stored row with the configured universe and method.
    pub fn unfuzzing(&self) -> Result<Vec<T>, FuzzyError> {
        let universe = self
            .universe
            .as_ref()
            .ok_or(FuzzyError::MissingParameter { parameter: "universe" })?;
        self.interface.unfuzzing(universe, self.method)
    }

    /// Defuzzify every stored row with an explicit universe and method.
    pub fn unfuzzing_with(
        &self,
        universe: &Universe<T>,
        method: DefuzzificationMethod,
    ) -> Result<Vec<T>, FuzzyError> {
        self.interface.unfuzzing(universe, method)
    }
}

impl<T> FuzzyObject<T> for FcOutput<T> {
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
// Output Builder
// ============================================================================

/// Builder for a registered [`FcOutput`].
#[derive(Debug, Clone)]
pub struct OutputBuilder<T> {
    /// Object name.
    pub name: Option<String>,

    /// Membership functions in column order.
    pub memberships: Vec<(String, MembershipFunction<T>)>,

    /// Universe bounds and sample count.
    pub universe: Option<(T, T, usize)>,

    /// Defuzzification method, `Centroid` when unset.
    pub defuzzification: Option<DefuzzificationMethod>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl<T> Default for OutputBuilder<T> {
    fn default() -> Self {
        Self {
            name: None,
            memberships: Vec::new(),
            universe: None,
            defuzzification: None,
            duplicate_param: None,
        }
    }
}

impl<T: Float> OutputBuilder<T> {
    /// Append a plain membership function under `label`.
    pub fn membership(self, label: &str, f: fn(T) -> T) -> Self {
        self.shape(label, MembershipFunction::Custom(f))
    }

    /// Append a membership function of any shape under `label`.
    pub fn shape(mut self, label: &str, function: MembershipFunction<T>) -> Self {
        self.memberships.push((String::from(label), function));
        self
    }

    /// Set the universe of discourse used for defuzzification.
    pub fn universe(mut self, min: T, max: T, points: usize) -> Self {
        if self.universe.is_some() {
            self.duplicate_param = Some("universe");
        }
        self.universe = Some((min, max, points));
        self
    }

    /// Set the defuzzification method.
    pub fn defuzzification(mut self, method: DefuzzificationMethod) -> Self {
        if self.defuzzification.is_some() {
            self.duplicate_param = Some("defuzzification");
        }
        self.defuzzification = Some(method);
        self
    }

    /// Validate the configuration and register the output.
    pub fn build(self) -> Result<FcOutput<T>, FuzzyError> {
        // Check for duplicate parameter configuration
        Validator::validate_no_duplicates(self.duplicate_param)?;

        let name = self.name.ok_or(FuzzyError::MissingParameter { parameter: "name" })?;
        let universe = match self.universe {
            Some((min, max, points)) => Some(Universe::new(min, max, points)?),
            None => None,
        };

        let mut output = FcOutput::new();
        output.register(&name)?;
        for (label, function) in &self.memberships {
            output.add_membership_shape(*function, label)?;
        }
        output.universe = universe;
        output.method = self.defuzzification.unwrap_or_default();
        Ok(output)
    }
}
