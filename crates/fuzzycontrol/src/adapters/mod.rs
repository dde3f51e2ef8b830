//! Layer 5: Adapters
//!
//! # Purpose
//!
//! This layer provides user-facing controller variables that adapt the
//! engine's interface object to a fixed role:
//!
//! - **Input**: Crisp measurements to membership degrees
//! - **Output**: Inferred membership degrees to crisp values
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Adapters ← You are here
//!   ↓
//! Layer 4: Engine
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Controller input variable.
pub mod input;

/// Controller output variable.
pub mod output;
