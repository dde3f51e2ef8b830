//! Sampled universe of discourse.
//!
//! ## Purpose
//!
//! Defuzzification integrates the aggregated output membership over the
//! output variable's domain. This module provides the evenly spaced sample
//! grid used for that numerical integration.
//!
//! ## Design notes
//!
//! * Samples are computed like numpy's `linspace`: `min + step * i`, with the
//!   last sample pinned to `max`.
//!
//! ## Invariants
//!
//! * `min < max`, both finite, and at least two samples.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::format;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::FuzzyError;

/// Evenly spaced samples of `[min, max]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Universe<T> {
    min: T,
    max: T,
    points: usize,
}

impl<T: Float> Universe<T> {
    /// Create a universe of `points` samples spanning `[min, max]`.
    pub fn new(min: T, max: T, points: usize) -> Result<Self, FuzzyError> {
        if !min.is_finite() || !max.is_finite() {
            return Err(FuzzyError::InvalidUniverse(format!(
                "bounds must be finite, got [{}, {}]",
                min.to_f64().unwrap_or(f64::NAN),
                max.to_f64().unwrap_or(f64::NAN)
            )));
        }
        if min >= max {
            return Err(FuzzyError::InvalidUniverse(format!(
                "min must be below max, got [{}, {}]",
                min.to_f64().unwrap_or(f64::NAN),
                max.to_f64().unwrap_or(f64::NAN)
            )));
        }
        if points < 2 {
            return Err(FuzzyError::InvalidUniverse(format!(
                "at least 2 samples required, got {points}"
            )));
        }
        Ok(Self { min, max, points })
    }

    /// Lower bound.
    #[inline]
    pub fn min(&self) -> T {
        self.min
    }

    /// Upper bound.
    #[inline]
    pub fn max(&self) -> T {
        self.max
    }

    /// Number of samples.
    #[inline]
    pub fn points(&self) -> usize {
        self.points
    }

    /// Distance between consecutive samples.
    #[inline]
    pub fn step(&self) -> T {
        // points >= 2 is checked at construction
        let intervals = T::from(self.points - 1).unwrap_or_else(T::one);
        (self.max - self.min) / intervals
    }

    /// Sample `i`, with the last one pinned to `max`.
    #[inline]
    pub fn sample(&self, i: usize) -> T {
        if i + 1 >= self.points {
            self.max
        } else {
            self.min + self.step() * T::from(i).unwrap_or_else(T::zero)
        }
    }

    /// Iterate over every sample in increasing order.
    pub fn iter(&self) -> impl Iterator<Item = T> + '_ {
        (0..self.points).map(move |i| self.sample(i))
    }
}
