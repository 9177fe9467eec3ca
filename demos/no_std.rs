//! Converts the Molniya orbit with the `libm` math backend.
//!
//! Run with `cargo run --example no_std --no-default-features --features libm`
//! so the library is built as `no_std`.

use keplerian_state::{KeplerianElements, OrbitShape, StateVector, Vector3};

fn main() {
    let elements = KeplerianElements::new(
        26.61027e6_f64,
        0.74,
        1.1065387,
        4.4413224,
        2.3561945,
        1.0471976,
    );
    let state = elements.to_state_vector();

    let expected = StateVector::new(
        Vector3::new(1291531.9110829858, 8450543.876143208, -2033574.4395068954),
        Vector3::new(-3289.3293343014566, 2493.426660153324, -7662.032058431621),
    );
    assert!((state.position - expected.position).norm() < 1e-10 * expected.position.norm());
    assert!((state.velocity - expected.velocity).norm() < 1e-10 * expected.velocity.norm());

    let recovered = state.to_elements(elements.gravitational_parameter());
    assert_eq!(recovered.shape(), OrbitShape::EllipticInclined);
    assert!((recovered.eccentricity - 0.74).abs() < 1e-12);

    let single = KeplerianElements::new(26.61027e6_f32, 0.74, 1.1065387, 4.4413224, 2.3561945, 1.0471976);
    let recovered = single
        .to_state_vector()
        .to_elements(single.gravitational_parameter());
    assert!((recovered.eccentricity - 0.74).abs() < 1e-4);
}
