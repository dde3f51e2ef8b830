//! Fuzzy Controller Pipeline Example
//!
//! This example connects an input and an output through a fuzzy relation:
//! - Fuzzify temperature readings into cold/warm/hot degrees
//! - Compose the degrees with a rule relation (temperature set -> fan set)
//! - Defuzzify the resulting fan degrees into crisp speeds
//!
//! The relation matrix plays the role of a rule base: entry `(i, j)` is the
//! strength of the rule "if temperature is set i then fan is set j".

use fuzzycontrol::prelude::*;

fn main() -> Result<(), FuzzyError> {
    println!("{}", "=".repeat(64));
    println!("Fuzzy Controller Pipeline");
    println!("{}", "=".repeat(64));
    println!();

    let mut temperature = InterfaceBuilder::new()
        .name("temperature")
        .shape(
            "cold",
            MembershipFunction::Trapezoidal {
                a: -40.0,
                b: -40.0,
                c: 10.0,
                d: 18.0,
            },
        )
        .shape(
            "warm",
            MembershipFunction::Triangular {
                a: 12.0,
                b: 21.0,
                c: 30.0,
            },
        )
        .shape(
            "hot",
            MembershipFunction::Trapezoidal {
                a: 24.0,
                b: 32.0,
                c: 60.0,
                d: 60.0,
            },
        )
        .adapter(Input)
        .build()?;

    let mut fan = InterfaceBuilder::new()
        .name("fan")
        .shape(
            "off",
            MembershipFunction::Triangular {
                a: 0.0,
                b: 0.0,
                c: 30.0,
            },
        )
        .shape(
            "medium",
            MembershipFunction::Triangular {
                a: 20.0,
                b: 50.0,
                c: 80.0,
            },
        )
        .shape(
            "full",
            MembershipFunction::Triangular {
                a: 70.0,
                b: 100.0,
                c: 100.0,
            },
        )
        .universe(0.0, 100.0, 201)
        .defuzzification(Centroid)
        .adapter(Output)
        .build()?;

    // Rows: cold, warm, hot. Columns: off, medium, full.
    let rules = FuzzyMatrix::from_rows(&[
        [1.0, 0.2, 0.0],
        [0.1, 1.0, 0.3],
        [0.0, 0.4, 1.0],
    ])?;

    let readings = [5.0, 16.0, 22.0, 27.0, 35.0];
    temperature.fuzzing(&readings)?;
    println!("{}", temperature.report());

    let degrees = temperature.membership_matrix().compose(&rules)?;
    fan.set_membership(degrees)?;
    println!("{}", fan.report());

    let speeds = fan.unfuzzing()?;
    println!("{:>12} {:>12}", "temperature", "fan speed");
    println!("{}", "-".repeat(25));
    for (t, s) in readings.iter().zip(&speeds) {
        println!("{t:>12.1} {s:>12.2}");
    }

    Ok(())
}
