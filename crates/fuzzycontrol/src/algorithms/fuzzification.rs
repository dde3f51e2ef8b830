//! Fuzzification of crisp measurements.
//!
//! ## Purpose
//!
//! This module turns a sequence of crisp values into a membership matrix:
//! one row per value, one column per labeled membership function, in
//! registration order.
//!
//! ## Design notes
//!
//! * **Out-of-place**: The matrix is built from scratch and handed back; the
//!   caller decides when to replace its stored matrix.
//! * **Parallelism**: With the `parallel` feature, rows can be evaluated
//!   across threads via `rayon`. Cells are independent, so both passes
//!   produce identical matrices.
//!
//! ## Invariants
//!
//! * `cell(i, j) == functions[j].evaluate(values[i])`.
//! * The output shape is `values.len() x functions.len()`, collapsing to
//!   the empty state when either is zero.

// Feature-gated imports
#[cfg(feature = "parallel")]
use crate::primitives::buffer::try_zeroed;
#[cfg(feature = "parallel")]
use rayon::prelude::*;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::math::membership::LabeledMembership;
use crate::primitives::buffer::try_with_capacity;
use crate::primitives::errors::FuzzyError;
use crate::primitives::matrix::FuzzyMatrix;

/// Evaluate every membership function at every value.
pub fn fuzzify<T: Float>(
    values: &[T],
    functions: &[LabeledMembership<T>],
) -> Result<FuzzyMatrix<T>, FuzzyError> {
    let (rows, cols) = (values.len(), functions.len());
    let mut data = try_with_capacity(rows, cols)?;

    for &x in values {
        data.extend(functions.iter().map(|f| f.evaluate(x)));
    }

    let mut m = FuzzyMatrix::new();
    m.replace_storage(rows, cols, data);
    Ok(m)
}

/// Evaluate every membership function at every value, one row per task.
#[cfg(feature = "parallel")]
pub fn fuzzify_parallel<T>(
    values: &[T],
    functions: &[LabeledMembership<T>],
) -> Result<FuzzyMatrix<T>, FuzzyError>
where
    T: Float + Send + Sync,
{
    let (rows, cols) = (values.len(), functions.len());
    let mut data = try_zeroed(rows, cols)?;

    if !data.is_empty() {
        data.par_chunks_mut(cols)
            .zip(values.par_iter())
            .for_each(|(row, &x)| {
                for (cell, f) in row.iter_mut().zip(functions) {
                    *cell = f.evaluate(x);
                }
            });
    }

    let mut m = FuzzyMatrix::new();
    m.replace_storage(rows, cols, data);
    Ok(m)
}
