//! Tests for controller interface objects.
//!
//! An interface couples a type tag, a membership registry and a membership
//! matrix. Capabilities are gated on the tag: inputs fuzzify, outputs
//! defuzzify, and unregistered objects do nothing but register.
//!
//! ## Test Organization
//!
//! 1. **Lifecycle** - Register, unregister, re-register
//! 2. **Registry** - Adding and clearing membership functions
//! 3. **Fuzzification** - Matrix contents and idempotence
//! 4. **Dispatch** - Wrong object types
//! 5. **Defuzzification** - Output degrees back to crisp values
//! 6. **Role Objects** - `FcInput` and `FcOutput`

use approx::assert_relative_eq;
use fuzzycontrol::prelude::*;

fn low(x: f64) -> f64 {
    (1.0 - x / 10.0).clamp(0.0, 1.0)
}

fn mid(x: f64) -> f64 {
    (1.0 - (x - 5.0).abs() / 5.0).clamp(0.0, 1.0)
}

fn high(x: f64) -> f64 {
    (x / 10.0).clamp(0.0, 1.0)
}

/// Registered input with `low`, `mid` and `high`.
fn input_interface() -> FcInterface<f64> {
    let mut iface = FcInterface::new();
    iface.register(ObjectType::Input, "level").unwrap();
    iface.add_membership_fn(low, "low").unwrap();
    iface.add_membership_fn(mid, "mid").unwrap();
    iface.add_membership_fn(high, "high").unwrap();
    iface
}

/// Registered output with one symmetric triangle on `[0, 100]`.
fn output_interface() -> FcInterface<f64> {
    let mut iface = FcInterface::new();
    iface.register(ObjectType::Output, "valve").unwrap();
    iface
        .add_membership_shape(
            MembershipFunction::Triangular {
                a: 0.0,
                b: 50.0,
                c: 100.0,
            },
            "half",
        )
        .unwrap();
    iface
}

// ============================================================================
// Lifecycle Tests
// ============================================================================

/// Test that a new interface is unregistered and empty.
#[test]
fn test_new_interface_is_null() {
    let iface = FcInterface::<f64>::new();

    assert_eq!(iface.kind(), ObjectType::Null);
    assert!(!iface.is_registered());
    assert_eq!(iface.name(), "");
    assert!(iface.membership_matrix().is_empty());
    assert!(iface.registry().is_empty());
}

/// Test registering sets the name and tag.
#[test]
fn test_register_sets_name_and_kind() {
    let mut iface = FcInterface::<f64>::new();
    iface.register(ObjectType::Input, "temperature").unwrap();

    assert_eq!(iface.kind(), ObjectType::Input);
    assert_eq!(iface.name(), "temperature");
    assert!(iface.membership_matrix().is_empty());
}

/// Test that registering with the Null tag is a state error.
#[test]
fn test_register_null_kind_fails() {
    let mut iface = FcInterface::<f64>::new();
    let err = iface.register(ObjectType::Null, "nothing").unwrap_err();

    assert!(matches!(err, FuzzyError::StateError(_)));
    assert!(err.is_state_error());
    assert!(!iface.is_registered());
}

/// Test that registering twice is rejected.
#[test]
fn test_double_register_fails() {
    let mut iface = input_interface();

    assert_eq!(
        iface.register(ObjectType::Output, "other"),
        Err(FuzzyError::AlreadyRegistered)
    );
    assert_eq!(iface.name(), "level");
    assert_eq!(iface.registry().len(), 3);
}

/// Test that unregistering an unregistered object is rejected.
#[test]
fn test_unregister_unregistered_fails() {
    let mut iface = FcInterface::<f64>::new();

    assert_eq!(iface.unregister(), Err(FuzzyError::NotRegistered));
}

/// Test that unregistering releases the matrix and registry.
#[test]
fn test_unregister_releases_everything() {
    let mut iface = input_interface();
    iface.fuzzing(&[1.0, 2.0]).unwrap();

    iface.unregister().unwrap();

    assert_eq!(iface.kind(), ObjectType::Null);
    assert_eq!(iface.name(), "");
    assert!(iface.membership_matrix().is_empty());
    assert!(iface.registry().is_empty());
}

/// Test that a re-registered object behaves like a fresh one.
#[test]
fn test_reregister_is_equivalent_to_fresh() {
    let mut reused = input_interface();
    reused.fuzzing(&[3.0, 7.0]).unwrap();
    reused.unregister().unwrap();
    reused.register(ObjectType::Input, "level").unwrap();

    let mut fresh = FcInterface::<f64>::new();
    fresh.register(ObjectType::Input, "level").unwrap();

    assert_eq!(reused.object(), fresh.object());
    assert_eq!(reused.membership_matrix(), fresh.membership_matrix());
    assert_eq!(reused.registry().len(), fresh.registry().len());

    // Both objects accept the same registry and produce the same matrix
    for iface in [&mut reused, &mut fresh] {
        iface.add_membership_fn(mid, "mid").unwrap();
        iface.fuzzing(&[2.5]).unwrap();
    }
    assert_eq!(reused.membership_matrix(), fresh.membership_matrix());
}

// ============================================================================
// Registry Tests
// ============================================================================

/// Test that adding a function before registering is rejected.
#[test]
fn test_add_before_register_fails() {
    let mut iface = FcInterface::<f64>::new();

    assert_eq!(
        iface.add_membership_fn(low, "low"),
        Err(FuzzyError::NotRegistered)
    );
    assert_eq!(
        iface.add_membership_shape(MembershipFunction::Singleton { value: 1.0 }, "one"),
        Err(FuzzyError::NotRegistered)
    );
    assert_eq!(iface.clear_membership_fn(), Err(FuzzyError::NotRegistered));
}

/// Test that labels keep insertion order.
#[test]
fn test_registry_keeps_insertion_order() {
    let iface = input_interface();
    let labels: Vec<&str> = iface.registry().labels().collect();

    assert_eq!(labels, ["low", "mid", "high"]);
    assert_eq!(iface.registry().position("high"), Some(2));
    assert_eq!(iface.registry().position("none"), None);
}

/// Test that labels are owned copies.
#[test]
fn test_labels_are_copied() {
    let mut iface = FcInterface::<f64>::new();
    iface.register(ObjectType::Input, "x").unwrap();
    {
        let label = String::from("transient");
        iface.add_membership_fn(low, &label).unwrap();
    }

    assert_eq!(iface.registry().get(0).unwrap().label, "transient");
}

/// Test that clearing the registry keeps the stored matrix.
#[test]
fn test_clear_membership_fn() {
    let mut iface = input_interface();
    iface.fuzzing(&[4.0]).unwrap();
    let before = iface.membership_matrix().clone();

    iface.clear_membership_fn().unwrap();

    assert!(iface.registry().is_empty());
    assert_eq!(iface.fuzzing(&[4.0]), Err(FuzzyError::EmptyRegistry));
    assert_eq!(iface.membership_matrix(), &before);
}

// ============================================================================
// Fuzzification Tests
// ============================================================================

/// Test that fuzzing evaluates every function at every value exactly.
#[test]
fn test_fuzzing_matrix_contents() {
    let mut iface = input_interface();
    let values = [2.0, 6.5];
    let functions: [fn(f64) -> f64; 3] = [low, mid, high];

    iface.fuzzing(&values).unwrap();
    let m = iface.membership_matrix();

    assert_eq!(m.shape(), (2, 3));
    for (i, &v) in values.iter().enumerate() {
        for (j, f) in functions.iter().enumerate() {
            assert_eq!(m[(i, j)], f(v), "cell ({i}, {j})");
        }
    }
}

/// Test fuzzing with built-in shapes.
#[test]
fn test_fuzzing_with_shapes() {
    let mut iface = FcInterface::<f64>::new();
    iface.register(ObjectType::Input, "temperature").unwrap();
    iface
        .add_membership_shape(
            MembershipFunction::Trapezoidal {
                a: -40.0,
                b: -40.0,
                c: 5.0,
                d: 15.0,
            },
            "cold",
        )
        .unwrap();
    iface
        .add_membership_shape(
            MembershipFunction::Triangular {
                a: 5.0,
                b: 20.0,
                c: 30.0,
            },
            "warm",
        )
        .unwrap();

    iface.fuzzing(&[0.0, 12.5, 27.0]).unwrap();
    let m = iface.membership_matrix();

    assert_relative_eq!(m[(0, 0)], 1.0);
    assert_relative_eq!(m[(0, 1)], 0.0);
    assert_relative_eq!(m[(1, 0)], 0.25);
    assert_relative_eq!(m[(1, 1)], 0.5);
    assert_relative_eq!(m[(2, 0)], 0.0);
    assert_relative_eq!(m[(2, 1)], 0.3, epsilon = 1e-12);
}

/// Test that fuzzing the same values twice gives the same matrix.
#[test]
fn test_fuzzing_is_idempotent() {
    let mut iface = input_interface();
    let values = [0.5, 5.0, 9.5];

    iface.fuzzing(&values).unwrap();
    let first = iface.membership_matrix().clone();
    iface.fuzzing(&values).unwrap();

    assert_eq!(iface.membership_matrix(), &first);
}

/// Test that fuzzing replaces a previously stored matrix.
#[test]
fn test_fuzzing_replaces_matrix() {
    let mut iface = input_interface();
    iface.fuzzing(&[1.0, 2.0, 3.0, 4.0]).unwrap();
    assert_eq!(iface.membership_matrix().shape(), (4, 3));

    iface.fuzzing(&[5.0]).unwrap();
    assert_eq!(iface.membership_matrix().shape(), (1, 3));
    assert_eq!(iface.membership_matrix()[(0, 1)], 1.0);
}

/// Test that fuzzing no values yields an empty matrix.
#[test]
fn test_fuzzing_empty_values() {
    let mut iface = input_interface();
    iface.fuzzing(&[1.0]).unwrap();

    iface.fuzzing(&[]).unwrap();

    assert!(iface.membership_matrix().is_empty());
}

/// Test that fuzzing with an empty registry is rejected.
#[test]
fn test_fuzzing_empty_registry_fails() {
    let mut iface = FcInterface::<f64>::new();
    iface.register(ObjectType::Input, "x").unwrap();

    assert_eq!(iface.fuzzing(&[1.0]), Err(FuzzyError::EmptyRegistry));
    assert!(iface.membership_matrix().is_empty());
}

// ============================================================================
// Dispatch Tests
// ============================================================================

/// Test that fuzzing an unregistered object is rejected.
#[test]
fn test_fuzzing_unregistered_fails() {
    let mut iface = FcInterface::<f64>::new();

    assert_eq!(iface.fuzzing(&[1.0]), Err(FuzzyError::NotRegistered));
}

/// Test that outputs cannot fuzzify.
#[test]
fn test_output_cannot_fuzzify() {
    let mut iface = output_interface();

    assert_eq!(
        iface.fuzzing(&[1.0]),
        Err(FuzzyError::WrongObjectType {
            expected: ObjectType::Input,
            found: ObjectType::Output
        })
    );
}

/// Test that the inference tag carries a registry but no capabilities.
#[test]
fn test_inference_has_no_io_capability() {
    let mut iface = FcInterface::<f64>::new();
    iface.register(ObjectType::Inference, "rules").unwrap();
    iface.add_membership_fn(low, "low").unwrap();

    assert_eq!(iface.registry().len(), 1);
    assert_eq!(
        iface.fuzzing(&[1.0]),
        Err(FuzzyError::WrongObjectType {
            expected: ObjectType::Input,
            found: ObjectType::Inference
        })
    );

    let universe = Universe::new(0.0, 1.0, 11).unwrap();
    assert_eq!(
        iface.unfuzzing(&universe, DefuzzificationMethod::Centroid),
        Err(FuzzyError::WrongObjectType {
            expected: ObjectType::Output,
            found: ObjectType::Inference
        })
    );
}

/// Test that inputs cannot accept output degrees.
#[test]
fn test_input_cannot_set_membership() {
    let mut iface = input_interface();
    let degrees = FuzzyMatrix::from_rows(&[[0.1, 0.2, 0.3]]).unwrap();

    assert!(matches!(
        iface.set_membership(degrees),
        Err(FuzzyError::WrongObjectType { .. })
    ));
}

// ============================================================================
// Defuzzification Tests
// ============================================================================

/// Test that unfuzzing requires stored degrees.
#[test]
fn test_unfuzzing_without_degrees_fails() {
    let iface = output_interface();
    let universe = Universe::new(0.0, 100.0, 101).unwrap();

    let err = iface
        .unfuzzing(&universe, DefuzzificationMethod::Centroid)
        .unwrap_err();
    assert!(matches!(err, FuzzyError::StateError(_)));
}

/// Test that stored degrees need one column per output set.
#[test]
fn test_set_membership_column_mismatch() {
    let mut iface = output_interface();
    let degrees = FuzzyMatrix::from_rows(&[[0.5, 0.5]]).unwrap();

    assert_eq!(
        iface.set_membership(degrees),
        Err(FuzzyError::DimensionMismatch {
            left_cols: 2,
            right_rows: 1
        })
    );
    assert!(iface.membership_matrix().is_empty());
}

/// Test every defuzzification method on a clipped symmetric triangle.
#[test]
fn test_unfuzzing_methods() {
    let mut iface = output_interface();
    let universe = Universe::new(0.0, 100.0, 101).unwrap();
    iface
        .set_membership(FuzzyMatrix::from_rows(&[[0.5]]).unwrap())
        .unwrap();

    let crisp = |method| iface.unfuzzing(&universe, method).unwrap()[0];

    assert_relative_eq!(crisp(DefuzzificationMethod::Centroid), 50.0, epsilon = 1e-9);
    assert_relative_eq!(crisp(DefuzzificationMethod::Bisector), 50.0);
    assert_relative_eq!(crisp(DefuzzificationMethod::MeanOfMaximum), 50.0, epsilon = 1e-9);
    assert_relative_eq!(crisp(DefuzzificationMethod::SmallestOfMaximum), 25.0);
    assert_relative_eq!(crisp(DefuzzificationMethod::LargestOfMaximum), 75.0);
}

/// Test that every row yields one crisp value.
#[test]
fn test_unfuzzing_one_value_per_row() {
    let mut iface = output_interface();
    let universe = Universe::new(0.0, 100.0, 101).unwrap();
    iface
        .set_membership(FuzzyMatrix::from_rows(&[[1.0], [0.2], [0.9]]).unwrap())
        .unwrap();

    let crisp = iface
        .unfuzzing(&universe, DefuzzificationMethod::Centroid)
        .unwrap();

    assert_eq!(crisp.len(), 3);
    for value in crisp {
        assert_relative_eq!(value, 50.0, epsilon = 1e-9);
    }
}

/// Test that an all-zero row cannot be defuzzified.
#[test]
fn test_unfuzzing_zero_membership() {
    let mut iface = output_interface();
    let universe = Universe::new(0.0, 100.0, 101).unwrap();
    iface
        .set_membership(FuzzyMatrix::from_rows(&[[0.0]]).unwrap())
        .unwrap();

    assert_eq!(
        iface.unfuzzing(&universe, DefuzzificationMethod::Centroid),
        Err(FuzzyError::ZeroMembership)
    );
}

/// Test that a universe too large to sample is reported, not aborted on.
#[test]
fn test_unfuzzing_oversized_universe_fails() {
    let mut iface = output_interface();
    iface
        .set_membership(FuzzyMatrix::from_rows(&[[1.0]]).unwrap())
        .unwrap();
    let universe = Universe::new(0.0, 1.0, usize::MAX).unwrap();

    assert!(matches!(
        iface.unfuzzing(&universe, DefuzzificationMethod::Centroid),
        Err(FuzzyError::AllocationError { .. })
    ));
    assert_eq!(iface.membership_matrix().shape(), (1, 1));
}

/// Test universe validation.
#[test]
fn test_invalid_universe() {
    assert!(matches!(
        Universe::new(1.0, 1.0, 10),
        Err(FuzzyError::InvalidUniverse(_))
    ));
    assert!(matches!(
        Universe::new(0.0, f64::INFINITY, 10),
        Err(FuzzyError::InvalidUniverse(_))
    ));
    assert!(matches!(
        Universe::new(0.0, 1.0, 1),
        Err(FuzzyError::InvalidUniverse(_))
    ));
}

// ============================================================================
// Role Object Tests
// ============================================================================

/// Test that `FcInput` registers with the input tag and fuzzifies.
#[test]
fn test_fc_input() {
    let mut input = FcInput::<f64>::new();
    input.register("level").unwrap();
    input.add_membership_fn(low, "low").unwrap();
    input.add_membership_fn(high, "high").unwrap();

    input.fuzzing(&[2.0, 8.0]).unwrap();

    assert_eq!(input.kind(), ObjectType::Input);
    assert_relative_eq!(input.degree(0, "low").unwrap(), 0.8);
    assert_relative_eq!(input.degree(1, "high").unwrap(), 0.8);
    assert_eq!(input.degree(0, "mid"), None);
    assert_eq!(input.degree(5, "low"), None);
}

/// Test that `FcOutput` needs a universe before argument-free unfuzzing.
#[test]
fn test_fc_output_requires_universe() {
    let mut output = FcOutput::<f64>::new();
    output.register("valve").unwrap();
    output
        .add_membership_shape(
            MembershipFunction::Triangular {
                a: 0.0,
                b: 50.0,
                c: 100.0,
            },
            "half",
        )
        .unwrap();
    output
        .set_membership(FuzzyMatrix::from_rows(&[[1.0]]).unwrap())
        .unwrap();

    assert_eq!(
        output.unfuzzing(),
        Err(FuzzyError::MissingParameter {
            parameter: "universe"
        })
    );

    output.set_universe(Universe::new(0.0, 100.0, 101).unwrap());
    output.set_method(DefuzzificationMethod::LargestOfMaximum);
    assert_eq!(output.unfuzzing().unwrap(), vec![50.0]);
}

/// Test that a re-registered output drops its universe and method.
#[test]
fn test_fc_output_reregister_is_equivalent_to_fresh() {
    let half = MembershipFunction::Triangular {
        a: 0.0,
        b: 50.0,
        c: 100.0,
    };

    let mut reused = InterfaceBuilder::new()
        .name("valve")
        .shape("half", half)
        .universe(0.0, 100.0, 101)
        .defuzzification(MeanOfMaximum)
        .adapter(Output)
        .build()
        .unwrap();
    reused.unregister().unwrap();
    reused.register("valve").unwrap();

    let mut fresh = FcOutput::<f64>::new();
    fresh.register("valve").unwrap();

    assert_eq!(reused.object(), fresh.object());
    assert_eq!(reused.method(), fresh.method());
    assert!(reused.universe().is_none());

    for output in [&mut reused, &mut fresh] {
        output.add_membership_shape(half, "half").unwrap();
        output
            .set_membership(FuzzyMatrix::from_rows(&[[1.0]]).unwrap())
            .unwrap();
    }
    assert_eq!(reused.unfuzzing(), fresh.unfuzzing());
    assert_eq!(
        reused.unfuzzing(),
        Err(FuzzyError::MissingParameter {
            parameter: "universe"
        })
    );
}

/// Test that the report lists the object, labels and degrees.
#[test]
fn test_membership_report() {
    let mut iface = input_interface();
    iface.fuzzing(&[5.0]).unwrap();

    let text = iface.report().to_string();

    assert!(text.starts_with("level (Input):"));
    assert!(text.contains("low"));
    assert!(text.contains("high"));
    assert!(text.contains("1.0000"));
}
