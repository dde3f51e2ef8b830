//! Tests for relational composition.
//!
//! Max-min composition is the fuzzy analogue of matrix multiplication:
//! `result[i][j] = max_k min(a[i][k], b[k][j])`.
//!
//! ## Test Organization
//!
//! 1. **Max-Min Composition** - Correctness against a direct computation
//! 2. **Dimension Errors** - Mismatches leave every operand untouched
//! 3. **Row Vectors** - The single-row convention
//! 4. **Operators** - Max-product composition

use approx::assert_relative_eq;
use fuzzycontrol::prelude::*;

/// Direct max-min composition used as a reference.
fn reference_max_min(a: &[&[f64]], b: &[&[f64]]) -> Vec<Vec<f64>> {
    let inner = b.len();
    let cols = b[0].len();
    a.iter()
        .map(|row| {
            (0..cols)
                .map(|j| {
                    (0..inner)
                        .map(|k| row[k].min(b[k][j]))
                        .fold(f64::NEG_INFINITY, f64::max)
                })
                .collect()
        })
        .collect()
}

// ============================================================================
// Max-Min Composition Tests
// ============================================================================

/// Test max-min composition of two square relations.
#[test]
fn test_compose_square() {
    let r = FuzzyMatrix::from_rows(&[[0.2, 0.8], [0.6, 0.4]]).unwrap();
    let s = FuzzyMatrix::from_rows(&[[0.5, 0.9], [0.7, 0.1]]).unwrap();
    let mut result = FuzzyMatrix::new();

    compose(&r, &s, &mut result).unwrap();

    assert_eq!(result.shape(), (2, 2));
    assert_eq!(result.as_slice(), &[0.7, 0.2, 0.5, 0.6]);
}

/// Test max-min composition of rectangular relations against a reference.
#[test]
fn test_compose_rectangular_matches_reference() {
    let a_rows: [&[f64]; 2] = [&[0.1, 0.9, 0.4], &[0.7, 0.3, 0.6]];
    let b_rows: [&[f64]; 3] = [&[0.5, 0.2, 1.0, 0.0], &[0.8, 0.6, 0.3, 0.1], &[0.2, 0.9, 0.4, 0.7]];
    let a = FuzzyMatrix::from_rows(&a_rows).unwrap();
    let b = FuzzyMatrix::from_rows(&b_rows).unwrap();

    let result = a.compose(&b).unwrap();
    let expected = reference_max_min(&a_rows, &b_rows);

    assert_eq!(result.shape(), (2, 4));
    for (i, row) in expected.iter().enumerate() {
        for (j, &value) in row.iter().enumerate() {
            assert_relative_eq!(result[(i, j)], value);
        }
    }
}

/// Test that composing with a column of ones selects the row maximum.
#[test]
fn test_compose_with_ones_column() {
    let a = FuzzyMatrix::from_rows(&[[0.2, 0.6, 0.4], [0.9, 0.1, 0.3]]).unwrap();
    let ones = FuzzyMatrix::from_rows(&[[1.0], [1.0], [1.0]]).unwrap();

    let result = a.compose(&ones).unwrap();

    assert_eq!(result.shape(), (2, 1));
    assert_eq!(result.as_slice(), &[0.6, 0.9]);
}

/// Test that the result replaces prior contents of the destination.
#[test]
fn test_compose_overwrites_result() {
    let a = FuzzyMatrix::from_rows(&[[0.3, 0.5]]).unwrap();
    let b = FuzzyMatrix::from_rows(&[[0.4], [0.8]]).unwrap();
    let mut result = FuzzyMatrix::zeros(4, 4).unwrap();

    compose(&a, &b, &mut result).unwrap();

    assert_eq!(result.shape(), (1, 1));
    assert_eq!(result[(0, 0)], 0.5);
}

// ============================================================================
// Dimension Error Tests
// ============================================================================

/// Test that mismatched inner dimensions fail without touching anything.
#[test]
fn test_compose_dimension_mismatch() {
    let a = FuzzyMatrix::from_rows(&[[0.1, 0.2], [0.3, 0.4]]).unwrap();
    let b = FuzzyMatrix::from_rows(&[[0.5, 0.6], [0.7, 0.8], [0.9, 1.0]]).unwrap();
    let mut result = FuzzyMatrix::from_rows(&[[0.25]]).unwrap();
    let (a0, b0, r0) = (a.clone(), b.clone(), result.clone());

    let err = compose(&a, &b, &mut result).unwrap_err();

    assert_eq!(
        err,
        FuzzyError::DimensionMismatch {
            left_cols: 2,
            right_rows: 3
        }
    );
    assert_eq!(a, a0);
    assert_eq!(b, b0);
    assert_eq!(result, r0);
}

/// Test that composing with an empty operand fails.
#[test]
fn test_compose_empty_operand() {
    let a = FuzzyMatrix::from_rows(&[[0.1, 0.2]]).unwrap();
    let empty = FuzzyMatrix::<f64>::new();
    let mut result = FuzzyMatrix::new();

    assert_eq!(
        compose(&a, &empty, &mut result),
        Err(FuzzyError::UninitializedOrEmpty)
    );
    assert_eq!(
        compose(&empty, &a, &mut result),
        Err(FuzzyError::UninitializedOrEmpty)
    );
    assert!(result.is_empty());
}

// ============================================================================
// Row Vector Tests
// ============================================================================

/// Test composing two single-row sets.
///
/// The left row is read as a column, so the result is the relation
/// `min(a[i], b[j])` between the two sets.
#[test]
fn test_compose_row_vectors() {
    let a = FuzzyMatrix::<f64>::from_rows(&[[0.0058, 0.9633, 0.3978]]).unwrap();
    let b = FuzzyMatrix::from_rows(&[[0.8999, 0.5896]]).unwrap();
    let mut result = FuzzyMatrix::new();

    compose(&a, &b, &mut result).unwrap();

    assert_eq!(result.shape(), (3, 2));
    for i in 0..3 {
        for j in 0..2 {
            let expected = a[(0, i)].min(b[(0, j)]);
            assert_eq!(result[(i, j)], expected, "cell ({i}, {j})");
        }
    }
    assert_eq!(result.row(1), Some(&[0.8999, 0.5896][..]));
}

/// Test re-running a composition after copying the result into the left
/// operand.
#[test]
fn test_compose_copy_back_rerun() {
    let mut a = FuzzyMatrix::from_rows(&[[0.0058, 0.9633, 0.3978]]).unwrap();
    let b = FuzzyMatrix::from_rows(&[[0.8999, 0.5896]]).unwrap();
    let b_before = b.clone();
    let mut result = FuzzyMatrix::new();

    compose(&a, &b, &mut result).unwrap();
    a.copy_from(&result).unwrap();
    let result_before = result.clone();

    // 3x2 composed with 1x2 has mismatched inner dimensions
    let err = compose(&a, &b, &mut result).unwrap_err();

    assert_eq!(
        err,
        FuzzyError::DimensionMismatch {
            left_cols: 2,
            right_rows: 1
        }
    );
    assert_eq!(b, b_before);
    assert_eq!(result, result_before);
    assert_eq!(a, result);
}

/// Test that a single-cell left row composes as a plain 1x1 matrix.
#[test]
fn test_compose_single_cell_row() {
    let a = FuzzyMatrix::from_rows(&[[0.4]]).unwrap();
    let b = FuzzyMatrix::from_rows(&[[0.9, 0.2, 0.6]]).unwrap();

    let result = a.compose(&b).unwrap();

    assert_eq!(result.shape(), (1, 3));
    assert_eq!(result.as_slice(), &[0.4, 0.2, 0.4]);
}

// ============================================================================
// Operator Tests
// ============================================================================

/// Test max-product composition.
#[test]
fn test_compose_max_product() {
    let r = FuzzyMatrix::from_rows(&[[0.2, 0.8], [0.6, 0.4]]).unwrap();
    let s = FuzzyMatrix::from_rows(&[[0.5, 0.9], [0.7, 0.1]]).unwrap();

    let result = r.compose_with(&s, CompositionOp::MaxProd).unwrap();

    assert_relative_eq!(result[(0, 0)], 0.56, epsilon = 1e-12);
    assert_relative_eq!(result[(0, 1)], 0.18, epsilon = 1e-12);
    assert_relative_eq!(result[(1, 0)], 0.30, epsilon = 1e-12);
    assert_relative_eq!(result[(1, 1)], 0.54, epsilon = 1e-12);
}

/// Test that the default operator is max-min.
#[test]
fn test_default_operator_is_max_min() {
    assert_eq!(CompositionOp::default(), CompositionOp::MaxMin);

    let r = FuzzyMatrix::from_rows(&[[0.2, 0.8]]).unwrap();
    let s = FuzzyMatrix::from_rows(&[[0.5], [0.7]]).unwrap();
    assert_eq!(
        r.compose(&s).unwrap(),
        r.compose_with(&s, CompositionOp::default()).unwrap()
    );
}
