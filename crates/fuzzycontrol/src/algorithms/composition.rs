//! Transposition and relational composition of fuzzy matrices.
//!
//! ## Purpose
//!
//! This module provides the two matrix-to-matrix operations inference is
//! built from: transposition and max-based composition (the fuzzy analogue
//! of matrix multiplication).
//!
//! ## Design notes
//!
//! * **Out-of-place**: Results are built in a fresh buffer and installed into
//!   the destination only on success, so a failed call leaves it untouched.
//! * **Single formula**: Every composition, including the row-vector case,
//!   runs through the same `max_k op(a_ik, b_kj)` loop.
//!
//! ## Key concepts
//!
//! * **Max-min composition**: `result[i][j] = max_k min(a[i][k], b[k][j])`,
//!   defined when `cols(a) == rows(b)`; the result is `rows(a) x cols(b)`.
//! * **Row-vector convention**: When both operands are single rows and the
//!   left one has more than one column, the left row is read as a column
//!   (a `1 x n` and an `n x 1` row-major buffer are identical). The inner
//!   dimension is then 1, and the result is the `n x m` relation
//!   `min(a[i], b[j])`, i.e. the fuzzy direct product of the two sets.
//!
//! ## Invariants
//!
//! * `transpose(transpose(m)) == m` for every non-empty `m`.
//! * Mismatched inner dimensions never allocate or touch the result.
//!
//! ## Non-goals
//!
//! * This module does not implement general linear algebra.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::math::operators::CompositionOp;
use crate::primitives::buffer::try_with_capacity;
use crate::primitives::errors::FuzzyError;
use crate::primitives::matrix::FuzzyMatrix;

// ============================================================================
// Transposition
// ============================================================================

/// Write the transpose of `src` into `dst`.
///
/// `dst` becomes `cols(src) x rows(src)` with `dst[c][r] == src[r][c]`.
pub fn transpose<T: Float>(src: &FuzzyMatrix<T>, dst: &mut FuzzyMatrix<T>) -> Result<(), FuzzyError> {
    if src.is_empty() {
        return Err(FuzzyError::UninitializedOrEmpty);
    }

    let (rows, cols) = src.shape();
    let cells = src.as_slice();
    let mut data: Vec<T> = try_with_capacity(cols, rows)?;
    for c in 0..cols {
        data.extend((0..rows).map(|r| cells[r * cols + c]));
    }

    dst.replace_storage(cols, rows, data);
    Ok(())
}

// ============================================================================
// Composition
// ============================================================================

/// Max-min composition of `a` and `b` into `result`.
pub fn compose<T: Float>(
    a: &FuzzyMatrix<T>,
    b: &FuzzyMatrix<T>,
    result: &mut FuzzyMatrix<T>,
) -> Result<(), FuzzyError> {
    compose_with(a, b, result, CompositionOp::MaxMin)
}

/// Max-based composition of `a` and `b` into `result` using `op` as the
/// pairwise conjunction.
pub fn compose_with<T: Float>(
    a: &FuzzyMatrix<T>,
    b: &FuzzyMatrix<T>,
    result: &mut FuzzyMatrix<T>,
    op: CompositionOp,
) -> Result<(), FuzzyError> {
    let (rows, data) = compose_buffer(a, b, op)?;
    result.replace_storage(rows, b.cols(), data);
    Ok(())
}

/// Effective `(rows, inner)` shape of the left operand.
#[inline]
fn left_shape<T>(a: &FuzzyMatrix<T>, b: &FuzzyMatrix<T>) -> (usize, usize) {
    if a.is_row_vector() && b.is_row_vector() && a.cols() != 1 {
        (a.cols(), 1)
    } else {
        a.shape()
    }
}

fn compose_buffer<T: Float>(
    a: &FuzzyMatrix<T>,
    b: &FuzzyMatrix<T>,
    op: CompositionOp,
) -> Result<(usize, Vec<T>), FuzzyError> {
    if a.is_empty() || b.is_empty() {
        return Err(FuzzyError::UninitializedOrEmpty);
    }

    let (rows, inner) = left_shape(a, b);
    if inner != b.rows() {
        return Err(FuzzyError::DimensionMismatch {
            left_cols: a.cols(),
            right_rows: b.rows(),
        });
    }

    let cols = b.cols();
    let lhs = a.as_slice();
    let rhs = b.as_slice();
    let mut data = try_with_capacity(rows, cols)?;

    for a_row in lhs.chunks_exact(inner) {
        for j in 0..cols {
            let terms = a_row
                .iter()
                .enumerate()
                .map(|(k, &a_ik)| op.conjunction(a_ik, rhs[k * cols + j]));
            data.push(CompositionOp::aggregate(terms));
        }
    }

    Ok((rows, data))
}

// ============================================================================
// Convenience Methods
// ============================================================================

impl<T: Float> FuzzyMatrix<T> {
    /// Return the transpose as a new matrix.
    pub fn transposed(&self) -> Result<Self, FuzzyError> {
        let mut dst = Self::new();
        transpose(self, &mut dst)?;
        Ok(dst)
    }

    /// Max-min composition `self ∘ rhs` as a new matrix.
    pub fn compose(&self, rhs: &Self) -> Result<Self, FuzzyError> {
        self.compose_with(rhs, CompositionOp::MaxMin)
    }

    /// Max-based composition `self ∘ rhs` with an explicit operator.
    pub fn compose_with(&self, rhs: &Self, op: CompositionOp) -> Result<Self, FuzzyError> {
        let mut dst = Self::new();
        compose_with(self, rhs, &mut dst, op)?;
        Ok(dst)
    }
}
