//! Interface objects: the input/output boundary of a fuzzy controller.
//!
//! ## Purpose
//!
//! `FcInterface` bundles a base record, a membership matrix and a membership
//! registry, and dispatches every capability by checking the type tag:
//! fuzzification is available to inputs, defuzzification to outputs, and the
//! reserved inference type gets neither.
//!
//! ## Design notes
//!
//! * **Tag dispatch**: Each gated operation calls `Validator` first. There is
//!   no per-object function table.
//! * **Rollback**: A matrix rebuild happens in a scratch matrix; the stored
//!   matrix is replaced only after the rebuild fully succeeds.
//!
//! ## Key concepts
//!
//! * **Lifecycle**: `new` (Null) → `register` → mutate registry / fuzzify →
//!   `unregister` (Null again). Re-registration behaves like a fresh object.
//! * **Column order**: Column `j` of the matrix belongs to registry entry `j`.
//!
//! ## Invariants
//!
//! * While unregistered, the matrix and registry are empty.
//! * After fuzzification the matrix is `values.len() x registry.len()`.
//!
//! ## Non-goals
//!
//! * This module does not evaluate fuzzy rules.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::defuzzification::{defuzzify, DefuzzificationMethod};
use crate::algorithms::fuzzification::fuzzify;
use crate::engine::object::{FcObject, FuzzyObject, ObjectType};
use crate::engine::registry::MembershipRegistry;
use crate::engine::validator::Validator;
use crate::math::membership::MembershipFunction;
use crate::math::universe::Universe;
use crate::primitives::errors::FuzzyError;
use crate::primitives::matrix::FuzzyMatrix;

// ============================================================================
// Interface Object
// ============================================================================

/// Controller object owning a membership matrix and registry.
#[derive(Debug, Clone)]
pub struct FcInterface<T> {
    obj: FcObject,
    data: FuzzyMatrix<T>,
    membership_fns: MembershipRegistry<T>,
}

impl<T> Default for FcInterface<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FcInterface<T> {
    /// Create an interface in the Null state.
    pub const fn new() -> Self {
        Self {
            obj: FcObject::new(),
            data: FuzzyMatrix::new(),
            membership_fns: MembershipRegistry::new(),
        }
    }

    /// Whether the interface carries a non-null tag.
    #[inline]
    pub fn is_registered(&self) -> bool {
        self.obj.is_registered()
    }
}

impl<T: Float> FcInterface<T> {
    // ========================================================================
    // Lifecycle
    // ========================================================================

    /// Tag the interface as `kind`, name it, and start from an empty matrix
    /// and registry.
    pub fn register(&mut self, kind: ObjectType, name: &str) -> Result<(), FuzzyError> {
        self.obj.register(kind, name)?;
        self.data.init();
        self.membership_fns.clear();
        Ok(())
    }

    /// Release the matrix and every registry entry and return to the Null
    /// state.
    pub fn unregister(&mut self) -> Result<(), FuzzyError> {
        self.obj.unregister()?;
        self.data.delete();
        self.membership_fns.clear();
        Ok(())
    }

    // ========================================================================
    // Registry
    // ========================================================================

    /// Append a plain membership function under `label`.
    pub fn add_membership_fn(&mut self, f: fn(T) -> T, label: &str) -> Result<(), FuzzyError> {
        self.add_membership_shape(MembershipFunction::Custom(f), label)
    }

    /// Append a membership function of any shape under `label`.
    pub fn add_membership_shape(
        &mut self,
        function: MembershipFunction<T>,
        label: &str,
    ) -> Result<(), FuzzyError> {
        Validator::require_registered(self.obj.kind())?;
        self.membership_fns.push(label, function);
        Ok(())
    }

    /// Remove every membership function.
    pub fn clear_membership_fn(&mut self) -> Result<(), FuzzyError> {
        Validator::require_registered(self.obj.kind())?;
        self.membership_fns.clear();
        Ok(())
    }

    // ========================================================================
    // Input Capability
    // ========================================================================

    /// Fuzzify `values`, replacing the stored membership matrix.
    ///
    /// Row `i` holds the degrees of `values[i]`, column `j` the degrees
    /// produced by the `j`-th registered function. If the new matrix cannot
    /// be built, the previous one is kept.
    pub fn fuzzing(&mut self, values: &[T]) -> Result<(), FuzzyError> {
        self.check_fuzzing()?;
        self.data = fuzzify(values, self.membership_fns.as_slice())?;
        Ok(())
    }

    /// Parallel variant of [`FcInterface::fuzzing`]; produces the same matrix.
    #[cfg(feature = "parallel")]
    pub fn fuzzing_parallel(&mut self, values: &[T]) -> Result<(), FuzzyError>
    where
        T: Send + Sync,
    {
        self.check_fuzzing()?;
        self.data =
            crate::algorithms::fuzzification::fuzzify_parallel(values, self.membership_fns.as_slice())?;
        Ok(())
    }

    fn check_fuzzing(&self) -> Result<(), FuzzyError> {
        Validator::require_kind(self.obj.kind(), ObjectType::Input)?;
        Validator::require_registry(self.membership_fns.len())
    }

    // ========================================================================
    // Output Capability
    // ========================================================================

    /// Store inferred membership degrees, one column per registered output
    /// set.
    pub fn set_membership(&mut self, matrix: FuzzyMatrix<T>) -> Result<(), FuzzyError> {
        Validator::require_kind(self.obj.kind(), ObjectType::Output)?;
        Validator::require_registry(self.membership_fns.len())?;
        Validator::validate_columns(matrix.cols(), self.membership_fns.len())?;
        self.data = matrix;
        Ok(())
    }

    /// Defuzzify every row of the stored matrix into one crisp value.
    pub fn unfuzzing(
        &self,
        universe: &Universe<T>,
        method: DefuzzificationMethod,
    ) -> Result<Vec<T>, FuzzyError> {
        Validator::require_kind(self.obj.kind(), ObjectType::Output)?;
        Validator::require_registry(self.membership_fns.len())?;
        if self.data.is_empty() {
            return Err(FuzzyError::StateError(
                "no membership degrees stored before defuzzification",
            ));
        }

        let functions = self.membership_fns.as_slice();
        self.data
            .iter_rows()
            .map(|degrees| defuzzify(degrees, functions, universe, method))
            .collect()
    }
}

impl<T> FuzzyObject<T> for FcInterface<T> {
    fn object(&self) -> &FcObject {
        &self.obj
    }

    fn membership_matrix(&self) -> &FuzzyMatrix<T> {
        &self.data
    }

    fn registry(&self) -> &MembershipRegistry<T> {
        &self.membership_fns
    }
}
