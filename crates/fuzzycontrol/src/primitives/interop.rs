//! `ndarray` interoperability for fuzzy matrices.
//!
//! ## Purpose
//!
//! Lets host code that already keeps its data in `ndarray` containers pass
//! two-dimensional arrays in and out of the matrix engine.
//!
//! ## Invariants
//!
//! * Conversions preserve row-major cell order.
//! * Non-standard layouts (transposed views, strided slices) are copied in
//!   logical order rather than rejected.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// External dependencies
use ndarray::{Array2, ArrayBase, Data, Ix2};
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::FuzzyError;
use crate::primitives::matrix::FuzzyMatrix;

impl<T: Float> FuzzyMatrix<T> {
    /// Copy a two-dimensional array into a new matrix.
    pub fn from_array2<S>(array: &ArrayBase<S, Ix2>) -> Result<Self, FuzzyError>
    where
        S: Data<Elem = T>,
    {
        let (rows, cols) = array.dim();
        let data: Vec<T> = match array.as_slice() {
            Some(slice) => slice.to_vec(),
            None => array.iter().copied().collect(),
        };
        Self::from_vec(rows, cols, data)
    }

    /// Copy the matrix into an owned `Array2`.
    pub fn to_array2(&self) -> Result<Array2<T>, FuzzyError> {
        Array2::from_shape_vec((self.rows(), self.cols()), self.as_slice().to_vec()).map_err(
            |_| FuzzyError::InvalidShape {
                rows: self.rows(),
                cols: self.cols(),
                len: self.len(),
            },
        )
    }
}
