//! Dynamic matrix of membership degrees.
//!
//! ## Purpose
//!
//! This module provides `FuzzyMatrix`, the storage type every other layer
//! reads from and writes into: fuzzification results, composed relations and
//! defuzzification inputs are all fuzzy matrices.
//!
//! ## Design notes
//!
//! * **Contiguous**: One row-major `Vec<T>` plus row/column metadata.
//! * **Strong guarantee**: Every resizing operation allocates a new buffer,
//!   fills it, and only then swaps it in. A failed call leaves the previous
//!   contents untouched.
//! * **Generics**: Generic over `Float` types.
//!
//! ## Key concepts
//!
//! * **Empty state**: `rows == 0 || cols == 0`, no backing storage. A fresh
//!   matrix, a deleted matrix and a matrix created with a zero dimension are
//!   all equal.
//! * **Flat reshape**: Re-partitions the row-major sequence into new
//!   dimensions.
//! * **Structural reshape**: Keeps every original row independent, cropping
//!   or zero-padding rows and columns.
//!
//! ## Invariants
//!
//! * Empty state implies `data.is_empty()` and `rows == cols == 0`.
//! * Otherwise `data.len() == rows * cols`.
//!
//! ## Non-goals
//!
//! * This module does not clamp values to `[0, 1]`; that is a convention of
//!   membership functions.
//! * This module does not implement composition or transposition (see
//!   `algorithms::composition`).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::cmp::min;
use core::fmt::{Display, Formatter, Result as FmtResult};
use core::ops::{ControlFlow, Index, IndexMut};
use num_traits::Float;

// Internal dependencies
use crate::primitives::buffer::{checked_len, try_with_capacity, try_zeroed};
use crate::primitives::errors::FuzzyError;

// ============================================================================
// Matrix Structure
// ============================================================================

/// Row-major matrix of fuzzy numbers.
#[derive(Debug, Clone, PartialEq)]
pub struct FuzzyMatrix<T> {
    rows: usize,
    cols: usize,
    data: Vec<T>,
}

impl<T> Default for FuzzyMatrix<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FuzzyMatrix<T> {
    // ========================================================================
    // Lifecycle
    // ========================================================================

    /// Create a matrix in the empty state.
    #[inline]
    pub const fn new() -> Self {
        Self {
            rows: 0,
            cols: 0,
            data: Vec::new(),
        }
    }

    /// Reset to the empty state. Calling it repeatedly has no further effect.
    #[inline]
    pub fn init(&mut self) {
        *self = Self::new();
    }

    /// Release the storage and return to the empty state.
    ///
    /// A no-op on an empty matrix.
    pub fn delete(&mut self) {
        if !self.is_empty() {
            self.init();
        }
    }

    // ========================================================================
    // Shape Accessors
    // ========================================================================

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// `(rows, cols)`.
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Total number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the matrix holds no storage.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Whether the matrix is a single row.
    #[inline]
    pub fn is_row_vector(&self) -> bool {
        self.rows == 1
    }

    // ========================================================================
    // Element Access
    // ========================================================================

    /// Row-major view of every cell.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Mutable row-major view of every cell.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Borrow row `r`.
    pub fn row(&self, r: usize) -> Option<&[T]> {
        if r < self.rows {
            let start = r * self.cols;
            Some(&self.data[start..start + self.cols])
        } else {
            None
        }
    }

    /// Mutably borrow row `r`.
    pub fn row_mut(&mut self, r: usize) -> Option<&mut [T]> {
        if r < self.rows {
            let start = r * self.cols;
            Some(&mut self.data[start..start + self.cols])
        } else {
            None
        }
    }

    /// Iterate over rows in order.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[T]> {
        // chunks(0) panics; an empty matrix yields no rows either way
        self.data.chunks(self.cols.max(1))
    }

    #[inline]
    fn offset(&self, row: usize, col: usize) -> Option<usize> {
        (row < self.rows && col < self.cols).then(|| row * self.cols + col)
    }

    #[inline]
    fn out_of_bounds(&self, row: usize, col: usize) -> FuzzyError {
        FuzzyError::IndexOutOfBounds {
            row,
            col,
            rows: self.rows,
            cols: self.cols,
        }
    }

    /// Install a fully built buffer, normalizing zero dimensions to the empty
    /// state.
    pub(crate) fn replace_storage(&mut self, rows: usize, cols: usize, data: Vec<T>) {
        debug_assert_eq!(data.len(), rows * cols, "buffer does not match shape");
        if data.is_empty() {
            self.init();
        } else {
            self.rows = rows;
            self.cols = cols;
            self.data = data;
        }
    }
}

impl<T: Float> FuzzyMatrix<T> {
    // ========================================================================
    // Constructors
    // ========================================================================

    /// Create a zero-filled `rows x cols` matrix.
    pub fn zeros(rows: usize, cols: usize) -> Result<Self, FuzzyError> {
        let mut m = Self::new();
        m.create(rows, cols)?;
        Ok(m)
    }

    /// Wrap a row-major buffer of exactly `rows * cols` elements.
    pub fn from_vec(rows: usize, cols: usize, data: Vec<T>) -> Result<Self, FuzzyError> {
        let len = checked_len(rows, cols)?;
        if len != data.len() {
            return Err(FuzzyError::InvalidShape {
                rows,
                cols,
                len: data.len(),
            });
        }
        let mut m = Self::new();
        m.replace_storage(rows, cols, data);
        Ok(m)
    }

    /// Build a matrix from equally long rows.
    pub fn from_rows<R: AsRef<[T]>>(rows: &[R]) -> Result<Self, FuzzyError> {
        let n_rows = rows.len();
        let n_cols = rows.first().map_or(0, |r| r.as_ref().len());
        let mut data = try_with_capacity(n_rows, n_cols)?;
        for r in rows {
            let r = r.as_ref();
            if r.len() != n_cols {
                let len = rows.iter().map(|r| r.as_ref().len()).sum::<usize>();
                return Err(FuzzyError::InvalidShape {
                    rows: n_rows,
                    cols: n_cols,
                    len,
                });
            }
            data.extend_from_slice(r);
        }
        Self::from_vec(n_rows, n_cols, data)
    }

    // ========================================================================
    // Storage Management
    // ========================================================================

    /// Allocate zero-initialized storage for `rows x cols` cells.
    ///
    /// Prior storage is released once the new buffer exists. On failure the
    /// previous contents are kept.
    pub fn create(&mut self, rows: usize, cols: usize) -> Result<(), FuzzyError> {
        let data = try_zeroed(rows, cols)?;
        self.replace_storage(rows, cols, data);
        Ok(())
    }

    /// Resize to the shape of `src` and duplicate every cell.
    pub fn copy_from(&mut self, src: &FuzzyMatrix<T>) -> Result<(), FuzzyError> {
        if src.is_empty() {
            return Err(FuzzyError::UninitializedOrEmpty);
        }
        let mut data = try_with_capacity(src.rows, src.cols)?;
        data.extend_from_slice(&src.data);
        self.replace_storage(src.rows, src.cols, data);
        Ok(())
    }

    /// Zero every cell in place. Dimensions are unchanged.
    pub fn clear(&mut self) {
        self.data.fill(T::zero());
    }

    /// Flat reshape: re-partition the row-major sequence into
    /// `rows x cols`.
    ///
    /// Cells past the new length are dropped, cells past the old length are
    /// zero.
    pub fn reshape(&mut self, rows: usize, cols: usize) -> Result<(), FuzzyError> {
        let mut data = try_zeroed(rows, cols)?;
        let kept = min(data.len(), self.data.len());
        data[..kept].copy_from_slice(&self.data[..kept]);
        self.replace_storage(rows, cols, data);
        Ok(())
    }

    /// Structural reshape: keep `(r, c)` for every `r < min(rows)` and
    /// `c < min(cols)`, zero everywhere else.
    ///
    /// Values never move across original row boundaries.
    pub fn reshape_structural(&mut self, rows: usize, cols: usize) -> Result<(), FuzzyError> {
        let mut data = try_zeroed(rows, cols)?;
        let keep_rows = min(self.rows, rows);
        let keep_cols = min(self.cols, cols);
        for r in 0..keep_rows {
            let src = r * self.cols;
            let dst = r * cols;
            data[dst..dst + keep_cols].copy_from_slice(&self.data[src..src + keep_cols]);
        }
        self.replace_storage(rows, cols, data);
        Ok(())
    }

    // ========================================================================
    // Checked Access
    // ========================================================================

    /// Value at `(row, col)`.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Option<T> {
        self.offset(row, col).map(|i| self.data[i])
    }

    /// Overwrite the value at `(row, col)`.
    pub fn set(&mut self, row: usize, col: usize, value: T) -> Result<(), FuzzyError> {
        let i = self
            .offset(row, col)
            .ok_or_else(|| self.out_of_bounds(row, col))?;
        self.data[i] = value;
        Ok(())
    }

    // ========================================================================
    // Traversal
    // ========================================================================

    /// Visit every cell in row-major order as `(row, col, value)`.
    ///
    /// Returning `ControlFlow::Break` from `visit` stops the walk; this is
    /// not an error.
    pub fn traverse<F>(&self, mut visit: F) -> Result<(), FuzzyError>
    where
        F: FnMut(usize, usize, T) -> ControlFlow<()>,
    {
        if self.is_empty() {
            return Err(FuzzyError::UninitializedOrEmpty);
        }
        for (i, &value) in self.data.iter().enumerate() {
            if visit(i / self.cols, i % self.cols, value).is_break() {
                break;
            }
        }
        Ok(())
    }

    /// Largest cell value, `None` when empty.
    pub fn max_value(&self) -> Option<T> {
        self.data.iter().copied().reduce(T::max)
    }

    /// Smallest cell value, `None` when empty.
    pub fn min_value(&self) -> Option<T> {
        self.data.iter().copied().reduce(T::min)
    }
}

// ============================================================================
// Indexing
// ============================================================================

impl<T> Index<(usize, usize)> for FuzzyMatrix<T> {
    type Output = T;

    fn index(&self, (row, col): (usize, usize)) -> &T {
        match self.offset(row, col) {
            Some(i) => &self.data[i],
            None => panic!(
                "index ({row}, {col}) out of bounds for a {}x{} matrix",
                self.rows, self.cols
            ),
        }
    }
}

impl<T> IndexMut<(usize, usize)> for FuzzyMatrix<T> {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        match self.offset(row, col) {
            Some(i) => &mut self.data[i],
            None => panic!(
                "index ({row}, {col}) out of bounds for a {}x{} matrix",
                self.rows, self.cols
            ),
        }
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

impl<T: Float + Display> Display for FuzzyMatrix<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        if self.is_empty() {
            return writeln!(f, "(empty 0x0)");
        }
        writeln!(f, "({}x{})", self.rows, self.cols)?;
        for row in self.iter_rows() {
            let mut first = true;
            for value in row {
                if !first {
                    write!(f, "\t")?;
                }
                write!(f, "{value:.4}")?;
                first = false;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
