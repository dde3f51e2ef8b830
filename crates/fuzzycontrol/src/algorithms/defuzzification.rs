//! Defuzzification of output membership degrees.
//!
//! ## Purpose
//!
//! This module converts one row of output membership degrees (one degree per
//! output fuzzy set) back into a crisp value.
//!
//! ## Design notes
//!
//! * **Mamdani clipping**: Each output set is clipped at its degree and the
//!   clipped sets are combined with max, giving
//!   `mu(u) = max_j min(degree_j, f_j(u))`.
//! * **Sampled**: The aggregated curve is evaluated on a `Universe` grid and
//!   all methods operate on those samples.
//!
//! ## Key concepts
//!
//! * **Centroid**: `sum(u * mu(u)) / sum(mu(u))`.
//! * **Bisector**: First sample where the cumulative area reaches half.
//! * **Maximum family**: Mean, smallest or largest sample attaining the peak.
//!
//! ## Invariants
//!
//! * The returned value always lies within `[universe.min(), universe.max()]`.
//!
//! ## Non-goals
//!
//! * This module does not evaluate rules; degrees arrive precomputed.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::math::membership::LabeledMembership;
use crate::math::universe::Universe;
use crate::primitives::buffer::try_with_capacity;
use crate::primitives::errors::FuzzyError;

// ============================================================================
// Method Enum
// ============================================================================

/// Method for defuzzificating the aggregated output membership function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DefuzzificationMethod {
    /// Center of gravity.
    #[default]
    Centroid,

    /// Bisector of area.
    Bisector,

    /// Mean of the values for which the membership function is maximum.
    MeanOfMaximum,

    /// Smallest value for which the membership function is maximum.
    SmallestOfMaximum,

    /// Largest value for which the membership function is maximum.
    LargestOfMaximum,
}

impl DefuzzificationMethod {
    /// Get the name of the defuzzification method.
    #[inline]
    pub const fn name(&self) -> &'static str {
        match self {
            DefuzzificationMethod::Centroid => "Centroid",
            DefuzzificationMethod::Bisector => "Bisector",
            DefuzzificationMethod::MeanOfMaximum => "MeanOfMaximum",
            DefuzzificationMethod::SmallestOfMaximum => "SmallestOfMaximum",
            DefuzzificationMethod::LargestOfMaximum => "LargestOfMaximum",
        }
    }

    /// Crisp value of a curve sampled on `universe`.
    pub fn apply<T: Float>(&self, universe: &Universe<T>, curve: &[T]) -> Result<T, FuzzyError> {
        debug_assert_eq!(curve.len(), universe.points());

        match self {
            DefuzzificationMethod::Centroid => {
                let (num, den) = universe
                    .iter()
                    .zip(curve)
                    .fold((T::zero(), T::zero()), |(num, den), (u, &mu)| {
                        (num + u * mu, den + mu)
                    });
                if den <= T::zero() {
                    return Err(FuzzyError::ZeroMembership);
                }
                Ok(num / den)
            }
            DefuzzificationMethod::Bisector => {
                let total = curve.iter().fold(T::zero(), |acc, &mu| acc + mu);
                if total <= T::zero() {
                    return Err(FuzzyError::ZeroMembership);
                }
                let half = total / (T::one() + T::one());
                let mut cumulative = T::zero();
                for (u, &mu) in universe.iter().zip(curve) {
                    cumulative = cumulative + mu;
                    if cumulative >= half {
                        return Ok(u);
                    }
                }
                Ok(universe.max())
            }
            DefuzzificationMethod::MeanOfMaximum
            | DefuzzificationMethod::SmallestOfMaximum
            | DefuzzificationMethod::LargestOfMaximum => {
                let peak = curve.iter().copied().fold(T::zero(), T::max);
                if peak <= T::zero() {
                    return Err(FuzzyError::ZeroMembership);
                }
                let mut at_peak = universe
                    .iter()
                    .zip(curve)
                    .filter(|&(_, &mu)| mu == peak)
                    .map(|(u, _)| u);

                // peak > 0 was attained by at least one sample
                let result = match self {
                    DefuzzificationMethod::SmallestOfMaximum => at_peak.next(),
                    DefuzzificationMethod::LargestOfMaximum => at_peak.last(),
                    _ => {
                        let (sum, count) = at_peak
                            .fold((T::zero(), 0usize), |(sum, n), u| (sum + u, n + 1));
                        T::from(count).map(|n| sum / n)
                    }
                };
                result.ok_or(FuzzyError::ZeroMembership)
            }
        }
    }
}

// ============================================================================
// Aggregation
// ============================================================================

/// Sample `max_j min(degrees[j], functions[j](u))` on every point of
/// `universe`.
///
/// The sample buffer is reserved up front; a universe too large to hold
/// fails with `AllocationError` instead of aborting.
pub fn aggregate_curve<T: Float>(
    degrees: &[T],
    functions: &[LabeledMembership<T>],
    universe: &Universe<T>,
) -> Result<Vec<T>, FuzzyError> {
    let mut curve = try_with_capacity(1, universe.points())?;
    curve.extend(universe.iter().map(|u| {
        degrees
            .iter()
            .zip(functions)
            .map(|(&degree, f)| degree.min(f.evaluate(u)))
            .fold(T::zero(), T::max)
    }));
    Ok(curve)
}

/// Crisp value of one row of output degrees.
pub fn defuzzify<T: Float>(
    degrees: &[T],
    functions: &[LabeledMembership<T>],
    universe: &Universe<T>,
    method: DefuzzificationMethod,
) -> Result<T, FuzzyError> {
    let curve = aggregate_curve(degrees, functions, universe)?;
    method.apply(universe, &curve)
}
