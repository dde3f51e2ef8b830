//! # fuzzycontrol: numeric core of a fuzzy logic controller
//!
//! Fuzzy membership matrices, max-min relational composition, and the
//! input/output object model of a fuzzy controller, for **Rust** with
//! `no_std` support.
//!
//! ## What is a fuzzy controller?
//!
//! A fuzzy controller maps crisp measurements (a temperature, a distance)
//! onto degrees of membership in linguistic sets ("cold", "near"), combines
//! those degrees through fuzzy relations, and maps the result back to a
//! crisp action. This crate provides the numeric layer underneath: the
//! matrix type, its algebra, fuzzification, and defuzzification.
//!
//! ## Quick Start
//!
//! ### Fuzzifying measurements
//!
//! ```rust
//! use fuzzycontrol::prelude::*;
//!
//! let mut temperature = InterfaceBuilder::new()
//!     .name("temperature")
//!     .shape("cold", MembershipFunction::Trapezoidal { a: -40.0, b: -40.0, c: 5.0, d: 15.0 })
//!     .shape("warm", MembershipFunction::Triangular { a: 5.0, b: 20.0, c: 30.0 })
//!     .shape("hot", MembershipFunction::Trapezoidal { a: 25.0, b: 35.0, c: 60.0, d: 60.0 })
//!     .adapter(Input)
//!     .build()?;
//!
//! temperature.fuzzing(&[0.0, 12.5, 27.0])?;
//!
//! // One row per measurement, one column per fuzzy set
//! assert_eq!(temperature.membership_matrix().shape(), (3, 3));
//! println!("{}", temperature.report());
//! # Result::<(), FuzzyError>::Ok(())
//! ```
//!
//! ```text
//! temperature (Input):
//!              cold       warm        hot
//!      0     1.0000     0.0000     0.0000
//!      1     0.2500     0.5000     0.0000
//!      2     0.0000     0.3000     0.2000
//! ```
//!
//! ### Composing fuzzy relations
//!
//! ```rust
//! use fuzzycontrol::prelude::*;
//!
//! let r = FuzzyMatrix::from_rows(&[[0.2, 0.8], [0.6, 0.4]])?;
//! let s = FuzzyMatrix::from_rows(&[[0.5, 0.9], [0.7, 0.1]])?;
//!
//! // result[i][j] = max_k min(r[i][k], s[k][j])
//! let mut result = FuzzyMatrix::new();
//! compose(&r, &s, &mut result)?;
//!
//! assert_eq!(result.get(0, 0), Some(0.7));
//! assert_eq!(result.get(1, 1), Some(0.6));
//! # Result::<(), FuzzyError>::Ok(())
//! ```
//!
//! ### Defuzzifying an output
//!
//! ```rust
//! use fuzzycontrol::prelude::*;
//!
//! let mut fan = InterfaceBuilder::new()
//!     .name("fan")
//!     .shape("slow", MembershipFunction::Triangular { a: 0.0, b: 0.0, c: 50.0 })
//!     .shape("fast", MembershipFunction::Triangular { a: 50.0, b: 100.0, c: 100.0 })
//!     .universe(0.0, 100.0, 101)
//!     .defuzzification(MeanOfMaximum)
//!     .adapter(Output)
//!     .build()?;
//!
//! // Degrees produced by inference: fully "fast"
//! fan.set_membership(FuzzyMatrix::from_rows(&[[0.0, 1.0]])?)?;
//!
//! let speed = fan.unfuzzing()?;
//! assert_eq!(speed, vec![100.0]);
//! # Result::<(), FuzzyError>::Ok(())
//! ```
//!
//! ## Object model
//!
//! Every controller object carries a type tag:
//!
//! | Tag         | Capabilities                                   |
//! |-------------|------------------------------------------------|
//! | `Null`      | `register` only                                |
//! | `Input`     | registry management, fuzzification             |
//! | `Inference` | registry management (reserved for rule layers) |
//! | `Output`    | registry management, defuzzification           |
//!
//! Calling a capability on the wrong tag returns
//! [`FuzzyError::WrongObjectType`](prelude::FuzzyError::WrongObjectType);
//! calling anything but `register` on a `Null` object returns
//! [`FuzzyError::NotRegistered`](prelude::FuzzyError::NotRegistered).
//!
//! ## Error Handling
//!
//! Every fallible operation returns `Result<_, FuzzyError>`. Failed
//! operations leave their receiver unchanged: matrices are rebuilt in a
//! scratch buffer and swapped in only on success.
//!
//! ## Feature flags
//!
//! * `std` (default): `std::error::Error` implementation.
//! * `parallel`: Row-parallel fuzzification through `rayon`.
//! * `ndarray`: Conversions between `FuzzyMatrix` and `ndarray::Array2`.
//! * `dev`: Exposes the internal layers under `internals` for testing.
//!
//! ## no_std Support
//!
//! Disable default features to build for `no_std` targets (`alloc` is
//! still required):
//!
//! ```toml
//! [dependencies]
//! fuzzycontrol = { version = "0.1", default-features = false }
//! ```
//!
//! ## License
//!
//! See the repository for license information and contribution guidelines.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

// Layer 1: Primitives - data structures and basic utilities.
mod primitives;

// Layer 2: Math - membership functions and operators.
mod math;

// Layer 3: Algorithms - composition, fuzzification, defuzzification.
mod algorithms;

// Layer 4: Engine - object model and capability dispatch.
mod engine;

// Layer 5: Adapters - role-specific controller variables.
mod adapters;

// High-level fluent API for building controller variables.
mod api;

// Standard fuzzycontrol prelude.
pub mod prelude {
    pub use crate::algorithms::composition::{compose, compose_with, transpose};
    pub use crate::api::{
        Adapter::{Input, Output},
        DefuzzificationMethod,
        DefuzzificationMethod::Bisector,
        DefuzzificationMethod::Centroid,
        DefuzzificationMethod::LargestOfMaximum,
        DefuzzificationMethod::MeanOfMaximum,
        DefuzzificationMethod::SmallestOfMaximum,
        FcInput, FcObject, FcOutput, FuzzyError, FuzzyObject, InterfaceAdapter, InterfaceBuilder,
        MembershipFunction, ObjectType,
    };
    pub use crate::engine::interface::FcInterface;
    pub use crate::engine::registry::MembershipRegistry;
    pub use crate::engine::report::MembershipReport;
    pub use crate::math::membership::LabeledMembership;
    pub use crate::math::operators::CompositionOp;
    pub use crate::math::universe::Universe;
    pub use crate::primitives::matrix::FuzzyMatrix;
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing purposes.
// It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod math {
        pub use crate::math::*;
    }
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod adapters {
        pub use crate::adapters::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
}
