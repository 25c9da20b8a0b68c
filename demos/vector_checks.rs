// demos/vector_checks.rs

use vector_value::{Vector, VectorError};

/// Runs a fixed list of checks against `Vector` and reports each one.
fn main() {
    env_logger::init();

    let vector = Vector::zero(3);
    check(
        "vector is equal to Vector(0, 0, 0)",
        vector.equals(Some(&Vector::from([0, 0, 0]))),
    );
    check(
        "vector is not equal to Vector(1, 1, 0)",
        !vector.equals(Some(&Vector::from([1, 1, 0]))),
    );

    let vector2 = Vector::from([1, 2, 2]);
    check("vector2 length should be equal to 3.0", vector2.length() == 3.0);

    let vector3 = Vector::from([1, 1, 1]);
    match vector2.add(Some(&vector3)) {
        Ok(vector4) => {
            let expected = Vector::from([2, 3, 3]);
            check(
                &format!("vector2 + vector3 is equal to {}", expected),
                vector4.equals(Some(&expected)),
            );
            check(
                &format!("vector2 + vector3 is equal to {}", expected),
                vector4 == expected,
            );
        }
        Err(e) => {
            log::error!("Error adding vectors: {}", e);
            check("vector2 + vector3 succeeds", false);
        }
    }
    check(
        "vector2 is unchanged after addition",
        vector2 == Vector::from([1, 2, 2]),
    );

    let short = Vector::from([1, 2]);
    check(
        &format!("adding {} to vector2 is rejected", short),
        matches!(
            vector2.add(Some(&short)),
            Err(VectorError::DimensionMismatch { .. })
        ),
    );
}

fn check(description: &str, outcome: bool) {
    println!("{}: {}", description, outcome);
    if !outcome {
        log::error!("check failed: {}", description);
    }
}
