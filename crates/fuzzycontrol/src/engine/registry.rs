//! Ordered membership function registry.
//!
//! ## Purpose
//!
//! Each controller object owns one registry: the labeled membership
//! functions of its fuzzy sets, in insertion order. The position of an entry
//! is the column it fills during fuzzification.
//!
//! ## Invariants
//!
//! * Entries keep insertion order; there is no reordering API.
//! * Labels are owned copies of the caller's strings.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::math::membership::{LabeledMembership, MembershipFunction};

/// Insertion-ordered sequence of labeled membership functions.
#[derive(Debug, Clone)]
pub struct MembershipRegistry<T> {
    entries: Vec<LabeledMembership<T>>,
}

impl<T> Default for MembershipRegistry<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> MembershipRegistry<T> {
    /// Create an empty registry.
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Number of entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the registry has no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Remove and release every entry.
    pub fn clear(&mut self) {
        self.entries = Vec::new();
    }

    /// Entries in insertion order.
    #[inline]
    pub fn as_slice(&self) -> &[LabeledMembership<T>] {
        &self.entries
    }

    /// Entry `j`, i.e. the function filling column `j`.
    #[inline]
    pub fn get(&self, j: usize) -> Option<&LabeledMembership<T>> {
        self.entries.get(j)
    }

    /// Labels in column order.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.label.as_str())
    }

    /// Column of the first entry labeled `label`.
    pub fn position(&self, label: &str) -> Option<usize> {
        self.entries.iter().position(|e| e.label == label)
    }
}

impl<T: Float> MembershipRegistry<T> {
    /// Append `function` under a copy of `label`.
    pub fn push(&mut self, label: &str, function: MembershipFunction<T>) {
        self.entries.push(LabeledMembership::new(label, function));
    }
}
