//! Human-readable membership reports.
//!
//! The core never prints. Hosts that want to show a fuzzified object format
//! a `MembershipReport` with `Display`, the same way they would format a
//! bare `FuzzyMatrix`.

// External dependencies
use core::fmt::{Display, Formatter, Result};
use num_traits::Float;

// Internal dependencies
use crate::engine::object::FcObject;
use crate::engine::registry::MembershipRegistry;
use crate::primitives::matrix::FuzzyMatrix;

/// Membership matrix annotated with its object name and column labels.
#[derive(Debug, Clone, Copy)]
pub struct MembershipReport<'a, T> {
    object: &'a FcObject,
    matrix: &'a FuzzyMatrix<T>,
    registry: &'a MembershipRegistry<T>,
}

impl<'a, T> MembershipReport<'a, T> {
    pub(crate) fn new(
        object: &'a FcObject,
        matrix: &'a FuzzyMatrix<T>,
        registry: &'a MembershipRegistry<T>,
    ) -> Self {
        Self {
            object,
            matrix,
            registry,
        }
    }
}

impl<T: Float + Display> Display for MembershipReport<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "{} ({}):", self.object.name(), self.object.kind())?;

        write!(f, "{:>6}", "")?;
        for label in self.registry.labels() {
            write!(f, " {label:>10}")?;
        }
        writeln!(f)?;

        if self.matrix.is_empty() {
            return writeln!(f, "  (no membership degrees)");
        }

        for (i, row) in self.matrix.iter_rows().enumerate() {
            write!(f, "{i:>6}")?;
            for value in row {
                write!(f, " {value:>10.4}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
