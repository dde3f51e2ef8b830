//! Fallible buffer allocation for fuzzy matrices.
//!
//! ## Purpose
//!
//! Every matrix rebuild (create, reshape, transpose, compose, fuzzification)
//! first allocates its new storage through this module. Allocation failures
//! and element-count overflows surface as `FuzzyError::AllocationError`
//! instead of aborting, so the caller can keep its previous buffer intact.
//!
//! ## Design notes
//!
//! * **Build then swap**: Helpers only ever produce a fresh `Vec`; callers
//!   replace their storage after the new buffer is fully populated.
//! * **Exact capacity**: Uses `try_reserve_exact`, matrices never grow in place.
//!
//! ## Invariants
//!
//! * A returned buffer has exactly `rows * cols` initialized elements.
//! * `rows == 0 || cols == 0` yields an empty, unallocated `Vec`.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Zero;

// Internal dependencies
use crate::primitives::errors::FuzzyError;

// ============================================================================
// Allocation Helpers
// ============================================================================

/// Compute `rows * cols`, failing on overflow.
#[inline]
pub fn checked_len(rows: usize, cols: usize) -> Result<usize, FuzzyError> {
    rows.checked_mul(cols)
        .ok_or(FuzzyError::AllocationError { rows, cols })
}

/// Allocate an empty buffer able to hold `rows * cols` elements.
pub fn try_with_capacity<T>(rows: usize, cols: usize) -> Result<Vec<T>, FuzzyError> {
    let len = checked_len(rows, cols)?;
    let mut buf = Vec::new();
    if len > 0 {
        buf.try_reserve_exact(len)
            .map_err(|_| FuzzyError::AllocationError { rows, cols })?;
    }
    Ok(buf)
}

/// Allocate a zero-filled buffer of `rows * cols` elements.
pub fn try_zeroed<T: Zero + Clone>(rows: usize, cols: usize) -> Result<Vec<T>, FuzzyError> {
    let mut buf = try_with_capacity(rows, cols)?;
    let len = rows * cols;
    buf.resize(len, T::zero());
    Ok(buf)
}
