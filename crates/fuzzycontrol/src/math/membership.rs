//! Membership functions mapping crisp values to membership degrees.
//!
//! ## Purpose
//!
//! This module provides `MembershipFunction`, the pure mapping
//! `AccurateNumber -> FuzzyNumber` stored in every membership registry
//! entry. Host code can supply its own `fn(T) -> T` or pick one of the
//! standard parametric shapes.
//!
//! ## Design notes
//!
//! * **Stateless**: Every variant is `Copy`; evaluating never mutates.
//! * **Shapes**: Parameters follow the usual textbook conventions.
//! * **Generics**: Generic over `Float` types.
//!
//! ## Invariants
//!
//! * Built-in shapes return values in `[0, 1]` for any finite input.
//! * Custom functions are trusted to be pure; their range is not checked.
//!
//! ## Non-goals
//!
//! * This module does not validate shape parameters (a degenerate triangle
//!   with `a == b` simply has a vertical left edge).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(feature = "std")]
use std::string::String;

// External dependencies
use num_traits::Float;

// ============================================================================
// Membership Function Enum
// ============================================================================

/// Membership function of a fuzzy set.
#[derive(Debug, Clone, Copy)]
pub enum MembershipFunction<T> {
    /// User supplied pure function.
    Custom(fn(T) -> T),

    /// Triangle rising on `[a, b]` and falling on `[b, c]`.
    Triangular {
        /// Left foot.
        a: T,
        /// Peak.
        b: T,
        /// Right foot.
        c: T,
    },

    /// Trapezoid rising on `[a, b]`, flat on `[b, c]`, falling on `[c, d]`.
    Trapezoidal {
        /// Left foot.
        a: T,
        /// Left shoulder.
        b: T,
        /// Right shoulder.
        c: T,
        /// Right foot.
        d: T,
    },

    /// Gaussian bell: exp(-(x - center)^2 / (2 * sigma^2)).
    Gaussian {
        /// Peak location.
        center: T,
        /// Standard deviation.
        sigma: T,
    },

    /// Logistic curve: 1 / (1 + exp(-slope * (x - center))).
    Sigmoid {
        /// Steepness; negative values give a falling curve.
        slope: T,
        /// Inflection point.
        center: T,
    },

    /// One at exactly `value`, zero elsewhere.
    Singleton {
        /// The crisp point.
        value: T,
    },
}

impl<T> From<fn(T) -> T> for MembershipFunction<T> {
    fn from(f: fn(T) -> T) -> Self {
        MembershipFunction::Custom(f)
    }
}

impl<T: Float> MembershipFunction<T> {
    /// Get the name of the membership shape.
    #[inline]
    pub const fn name(&self) -> &'static str {
        match self {
            MembershipFunction::Custom(_) => "Custom",
            MembershipFunction::Triangular { .. } => "Triangular",
            MembershipFunction::Trapezoidal { .. } => "Trapezoidal",
            MembershipFunction::Gaussian { .. } => "Gaussian",
            MembershipFunction::Sigmoid { .. } => "Sigmoid",
            MembershipFunction::Singleton { .. } => "Singleton",
        }
    }

    /// Membership degree of `x`.
    #[inline]
    pub fn evaluate(&self, x: T) -> T {
        match *self {
            MembershipFunction::Custom(f) => f(x),
            MembershipFunction::Triangular { a, b, c } => Self::triangular(x, a, b, c),
            MembershipFunction::Trapezoidal { a, b, c, d } => Self::trapezoidal(x, a, b, c, d),
            MembershipFunction::Gaussian { center, sigma } => {
                // Zero width collapses to a singleton at the center
                if sigma == T::zero() {
                    return if x == center { T::one() } else { T::zero() };
                }
                let two = T::one() + T::one();
                let z = x - center;
                (-(z * z) / (two * sigma * sigma)).exp()
            }
            MembershipFunction::Sigmoid { slope, center } => {
                T::one() / (T::one() + (-slope * (x - center)).exp())
            }
            MembershipFunction::Singleton { value } => {
                if x == value {
                    T::one()
                } else {
                    T::zero()
                }
            }
        }
    }

    fn triangular(x: T, a: T, b: T, c: T) -> T {
        if x < a || x > c {
            T::zero()
        } else if x == b {
            T::one()
        } else if x < b {
            (x - a) / (b - a)
        } else {
            (c - x) / (c - b)
        }
    }

    fn trapezoidal(x: T, a: T, b: T, c: T, d: T) -> T {
        if x < a || x > d {
            T::zero()
        } else if x >= b && x <= c {
            T::one()
        } else if x < b {
            (x - a) / (b - a)
        } else {
            (d - x) / (d - c)
        }
    }
}

// ============================================================================
// Labeled Entry
// ============================================================================

/// A membership function together with the label of its fuzzy set.
#[derive(Debug, Clone)]
pub struct LabeledMembership<T> {
    /// Label of the fuzzy set (e.g. "cold").
    pub label: String,

    /// Membership function of the fuzzy set.
    pub function: MembershipFunction<T>,
}

impl<T: Float> LabeledMembership<T> {
    /// Pair `function` with an owned copy of `label`.
    pub fn new(label: &str, function: MembershipFunction<T>) -> Self {
        Self {
            label: String::from(label),
            function,
        }
    }

    /// Membership degree of `x` in this fuzzy set.
    #[inline]
    pub fn evaluate(&self, x: T) -> T {
        self.function.evaluate(x)
    }
}
