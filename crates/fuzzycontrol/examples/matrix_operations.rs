//! Fuzzy Matrix Operation Examples
//!
//! This example walks through the matrix layer:
//! - Creating and filling a matrix, then traversing it
//! - Transposition
//! - Composing two single-row fuzzy sets, then re-running on the result
//! - Flat reshape, clear and structural reshape
//!
//! Each scenario includes the expected output as comments.

use core::ops::ControlFlow;
use fuzzycontrol::prelude::*;

fn main() -> Result<(), FuzzyError> {
    println!("{}", "=".repeat(64));
    println!("Fuzzy Matrix Operations");
    println!("{}", "=".repeat(64));
    println!();

    example_1_traverse_and_transpose()?;
    example_2_row_composition()?;
    example_3_reshape_and_clear()?;

    Ok(())
}

/// Fill `m` with `cell(r, c) = r * cols + c`.
fn fill_counting(m: &mut FuzzyMatrix<f64>) -> Result<(), FuzzyError> {
    let (rows, cols) = m.shape();
    for r in 0..rows {
        for c in 0..cols {
            m.set(r, c, (r * cols + c) as f64)?;
        }
    }
    Ok(())
}

/// Example 1: Traverse and Transpose
/// A 3x4 counting matrix visited cell by cell, then transposed
fn example_1_traverse_and_transpose() -> Result<(), FuzzyError> {
    println!("Example 1: Traverse and Transpose");
    println!("{}", "-".repeat(64));

    let mut mat = FuzzyMatrix::new();
    mat.create(3, 4)?;
    fill_counting(&mut mat)?;

    mat.traverse(|_, c, value| {
        print!("{value:.2}\t");
        if c == 3 {
            println!();
        }
        ControlFlow::Continue(())
    })?;
    println!();

    let mut mat_t = FuzzyMatrix::new();
    transpose(&mat, &mut mat_t)?;
    println!("mat {mat}");
    println!("matT {mat_t}");

    // Expected: matT is 4x3 and matT[1][2] == 9
    println!("matT[1][2] = {}", mat_t[(1, 2)]);
    println!();

    Ok(())
}

/// Example 2: Row Composition
/// Composing two single-row fuzzy sets yields their min relation
fn example_2_row_composition() -> Result<(), FuzzyError> {
    println!("Example 2: Row Composition");
    println!("{}", "-".repeat(64));

    let mut mat1 = FuzzyMatrix::from_rows(&[[0.0058, 0.9633, 0.3978]])?;
    let mat2 = FuzzyMatrix::from_rows(&[[0.8999, 0.5896]])?;
    let mut result = FuzzyMatrix::new();

    println!("1st composition");
    compose(&mat1, &mat2, &mut result)?;
    println!("mat1 {mat1}");
    println!("mat2 {mat2}");
    println!("result {result}");
    // Expected result (3x2):
    //   0.0058  0.0058
    //   0.8999  0.5896
    //   0.3978  0.3978

    println!("2nd composition");
    mat1.copy_from(&result)?;
    match compose(&mat1, &mat2, &mut result) {
        Ok(()) => println!("result {result}"),
        // Expected: 3x2 against 1x2 does not compose; mat2 and result stay as they were
        Err(err) => println!("error: {err}"),
    }
    println!("mat1 {mat1}");
    println!("mat2 {mat2}");
    println!();

    Ok(())
}

/// Example 3: Reshape and Clear
/// Flat reshapes keep the row-major prefix; structural reshapes keep rows
fn example_3_reshape_and_clear() -> Result<(), FuzzyError> {
    println!("Example 3: Reshape and Clear");
    println!("{}", "-".repeat(64));

    let mut mat = FuzzyMatrix::zeros(3, 4)?;
    fill_counting(&mut mat)?;
    println!("ori mat {mat}");

    mat.reshape(5, 5)?;
    println!("reshape mat {mat}");
    mat.reshape(9, 5)?;
    println!("reshape mat again {mat}");
    mat.reshape(5, 5)?;
    println!("reshape mat again 2 {mat}");

    mat.clear();
    println!("reshape mat clear {mat}");

    fill_counting(&mut mat)?;
    println!("then {mat}");

    // Expected: the 5x5 block is kept, row and column 5 are zero
    mat.reshape_structural(6, 6)?;
    println!("reshape_s mat {mat}");

    Ok(())
}
