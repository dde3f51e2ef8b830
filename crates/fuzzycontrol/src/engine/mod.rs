//! Layer 4: Engine
//!
//! # Purpose
//!
//! This layer implements the controller object model:
//! - The base record (name and type tag) and the shared `FuzzyObject` view
//! - The ordered membership function registry
//! - The tag-dispatched interface object (fuzzification and defuzzification)
//! - State and capability validation
//! - Printable membership reports
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Adapters
//!   ↓
//! Layer 4: Engine ← You are here
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Base record and shared object view.
pub mod object;

/// Membership function registry.
pub mod registry;

/// Input/output interface object.
pub mod interface;

/// State and capability validation.
pub mod validator;

/// Labeled membership matrix display.
pub mod report;
