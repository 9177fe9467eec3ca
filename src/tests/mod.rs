#![cfg(test)]

extern crate std;
use std::format;

use core::f64::consts::{FRAC_PI_2, PI, TAU};

use crate::{
    ElementsError, KeplerianElements, OrbitShape, PhysicalConstants, StateVector, Vector3,
};


use assertions::*;
use seeders::*;

const RANDOM_ITERS: usize = 2000;

fn molniya() -> KeplerianElements<f64> {
    KeplerianElements::new(26.61027e6, 0.74, 1.1065387, 4.4413224, 2.3561945, 1.0471976)
}

fn mu_earth() -> f64 {
    PhysicalConstants::get().mu_earth()
}

#[test]
fn molniya_state_vector() {
    let state = molniya().to_state_vector();

    // Published figures, rounded to about six significant digits
    assert_vec3_relative_eq(
        state.position,
        Vector3::new(1.291533e6, 8.450544e6, -2.033574e6),
        1e-5,
        "Molniya position",
    );
    assert_vec3_relative_eq(
        state.velocity,
        Vector3::new(-3289.33, 2493.43, -7662.05),
        1e-5,
        "Molniya velocity",
    );

    // Full precision for the same inputs
    let expected = StateVector::new(
        Vector3::new(1291531.9110829858, 8450543.876143208, -2033574.4395068954),
        Vector3::new(-3289.3293343014566, 2493.426660153324, -7662.032058431621),
    );
    assert_state_relative_eq(&state, &expected, 1e-10, "Molniya");
}

#[test]
fn molniya_round_trip() {
    let elements = molniya();
    let state = elements.to_state_vector();
    let recovered = state.to_elements(mu_earth());

    assert_eq!(recovered.shape(), OrbitShape::EllipticInclined);
    assert_elements_eq(&recovered, &elements, ElementsTolerance::DOUBLE, "Molniya");
    assert_eq!(state.try_to_elements(mu_earth()), Ok(recovered));
}

#[test]
fn molniya_single_precision() {
    let elements = KeplerianElements::new(
        26.61027e6_f32,
        0.74,
        1.1065387,
        4.4413224,
        2.3561945,
        1.0471976,
    );
    let state = elements.to_state_vector();

    assert_vec3_relative_eq(
        state.position,
        Vector3::new(1.291533e6, 8.450544e6, -2.033574e6),
        1e-4,
        "Molniya position",
    );
    assert_vec3_relative_eq(
        state.velocity,
        Vector3::new(-3289.33, 2493.43, -7662.05),
        1e-4,
        "Molniya velocity",
    );

    let recovered = state.to_elements(elements.gravitational_parameter());
    assert_elements_eq(&recovered, &elements, ElementsTolerance::SINGLE, "Molniya");
}

#[test]
fn elements_round_trip() {
    for elements in random_any_iter(RANDOM_ITERS) {
        let state = elements.to_state_vector();
        let recovered = state.to_elements(elements.gravitational_parameter());

        let what = format!("round trip of {elements:?}");
        assert_eq!(recovered.shape(), elements.shape(), "{what}");
        assert_elements_in_range(&recovered, &what);
        assert_elements_eq(&recovered, &elements, ElementsTolerance::DOUBLE, &what);
    }
}

#[test]
fn elements_round_trip_single() {
    for seed in random_any_iter(RANDOM_ITERS) {
        let eccentricity = if seed.shape().is_circular() {
            0.0
        } else {
            rand::random_range(ELLIPTIC_ECCENTRICITY_F32)
        };
        let mut seed = seed;
        seed.eccentricity = eccentricity;
        let elements = to_single(&seed);

        let state = elements.to_state_vector();
        let recovered = state.to_elements(elements.gravitational_parameter());

        let what = format!("single-precision round trip of {elements:?}");
        assert_eq!(recovered.shape(), elements.shape(), "{what}");
        assert_elements_in_range(&recovered, &what);
        assert_elements_eq(&recovered, &elements, ElementsTolerance::SINGLE, &what);
    }
}

#[test]
fn state_round_trip() {
    let mu = mu_earth();
    for elements in random_any_iter(RANDOM_ITERS) {
        let state = elements.to_state_vector();
        let again = state.to_elements(mu).to_state_vector();

        assert_state_relative_eq(&again, &state, 1e-10, &format!("{elements:?}"));
    }
}

#[test]
fn single_precision_keeps_small_eccentricity() {
    let eccentricity = 5e-5_f32;
    for step in 0..16 {
        let true_anomaly = step as f32 * core::f32::consts::TAU / 16.0;
        let elements = KeplerianElements::new(7.0e6_f32, eccentricity, 0.5, 1.0, 2.0, true_anomaly);
        let recovered = elements
            .to_state_vector()
            .to_elements(elements.gravitational_parameter());

        let what = format!("e = {eccentricity}, nu = {true_anomaly}");
        assert_eq!(recovered.shape(), OrbitShape::EllipticInclined, "{what}");
        assert_almost_eq(
            recovered.eccentricity as f64,
            eccentricity as f64,
            5e-6,
            &format!("eccentricity of {what}"),
        );
        assert_almost_eq(
            recovered.inclination as f64,
            0.5,
            1e-5,
            &format!("inclination of {what}"),
        );
    }
}

#[test]
fn near_circular_double_precision() {
    let mu = mu_earth();
    for eccentricity in [1e-11, 5e-11, 1.01e-10, 2e-10, 1e-9, 1e-8] {
        for step in 0..64 {
            let true_anomaly = step as f64 * TAU / 64.0;
            let elements = KeplerianElements::new(7.0e6, eccentricity, 0.5, 1.0, 2.0, true_anomaly);
            let state = elements.to_state_vector();
            let recovered = state.to_elements(mu);

            let what = format!("e = {eccentricity}, nu = {true_anomaly}");
            if eccentricity < 1e-10 {
                assert_eq!(recovered.shape(), OrbitShape::CircularInclined, "{what}");
            } else {
                assert_eq!(recovered.shape(), OrbitShape::EllipticInclined, "{what}");
                assert_almost_eq(
                    recovered.eccentricity,
                    eccentricity,
                    1e-12,
                    &format!("eccentricity of {what}"),
                );
            }

            // Dropping or splitting a tiny eccentricity moves the state by about e
            assert_state_relative_eq(&recovered.to_state_vector(), &state, 1e-7, &what);
        }
    }
}

#[test]
fn each_shape_round_trips() {
    let seeders: [(OrbitShape, fn() -> KeplerianElements<f64>); 4] = [
        (OrbitShape::EllipticInclined, random_elliptic_inclined),
        (OrbitShape::EllipticEquatorial, random_elliptic_equatorial),
        (OrbitShape::CircularInclined, random_circular_inclined),
        (OrbitShape::CircularEquatorial, random_circular_equatorial),
    ];

    for (shape, seeder) in seeders {
        for _ in 0..RANDOM_ITERS / 4 {
            let elements = seeder();
            let recovered = elements.to_state_vector().to_elements(mu_earth());

            assert_eq!(elements.shape(), shape);
            assert_elements_eq(
                &recovered,
                &elements,
                ElementsTolerance::DOUBLE,
                &format!("{shape:?}"),
            );
        }
    }
}

#[test]
fn circular_equatorial_anomaly_from_x_axis() {
    // Prograde, a quarter turn before the x axis
    let state = StateVector::new(Vector3::new(0.0, -2.0, 0.0), Vector3::new(0.5_f64.sqrt(), 0.0, 0.0));
    let elements = state.to_elements(1.0);

    assert_eq!(elements.shape(), OrbitShape::CircularEquatorial);
    assert_eq!(elements.eccentricity, 0.0);
    assert_eq!(elements.inclination, 0.0);
    assert_eq!(elements.right_ascension_ascending_node, 0.0);
    assert_eq!(elements.argument_of_periapsis, 0.0);
    assert_almost_eq(elements.semi_major_axis, 2.0, 1e-14, "semi-major axis");
    assert_angle_eq(elements.true_anomaly, 1.5 * PI, 1e-14, "true anomaly");
}

#[test]
fn circular_inclined_anomaly_from_node() {
    // Polar orbit over the south pole, moving towards +x
    let state = StateVector::new(Vector3::new(0.0, 0.0, -1.0), Vector3::new(1.0, 0.0, 0.0));
    let elements = state.to_elements(1.0);

    assert_eq!(elements.shape(), OrbitShape::CircularInclined);
    assert_eq!(elements.eccentricity, 0.0);
    assert_eq!(elements.argument_of_periapsis, 0.0);
    assert_almost_eq(elements.inclination, FRAC_PI_2, 1e-15, "inclination");
    assert_eq!(elements.right_ascension_ascending_node, 0.0);
    assert_angle_eq(elements.true_anomaly, 1.5 * PI, 1e-15, "true anomaly");
}

#[test]
fn elliptic_equatorial_longitude_of_periapsis() {
    // At periapsis on the +y axis
    let prograde = StateVector::new(Vector3::new(0.0, 1.0, 0.0), Vector3::new(-1.2, 0.0, 0.0));
    let elements = prograde.to_elements(1.0);

    assert_eq!(elements.shape(), OrbitShape::EllipticEquatorial);
    assert_eq!(elements.right_ascension_ascending_node, 0.0);
    assert_almost_eq(elements.eccentricity, 0.44, 1e-14, "eccentricity");
    assert_almost_eq(elements.argument_of_periapsis, FRAC_PI_2, 1e-14, "prograde argument of periapsis");
    assert_angle_eq(elements.true_anomaly, 0.0, 1e-7, "prograde true anomaly");

    // Same point, flown the other way round
    let retrograde = StateVector::new(Vector3::new(0.0, 1.0, 0.0), Vector3::new(1.2, 0.0, 0.0));
    let elements = retrograde.to_elements(1.0);

    assert_eq!(elements.shape(), OrbitShape::EllipticEquatorial);
    assert_eq!(elements.inclination, PI);
    assert_almost_eq(elements.argument_of_periapsis, 1.5 * PI, 1e-14, "retrograde argument of periapsis");
    assert_angle_eq(elements.true_anomaly, 0.0, 1e-7, "retrograde true anomaly");
    assert_state_relative_eq(&elements.to_state_vector(), &retrograde, 1e-14, "retrograde");
}

#[test]
fn retrograde_equatorial_circle() {
    let state = StateVector::new(Vector3::new(1.0, 0.0, 0.0), Vector3::new(0.0, -1.0, 0.0));
    let elements = state.to_elements(1.0);

    assert_eq!(elements.shape(), OrbitShape::CircularEquatorial);
    assert_eq!(elements.inclination, PI);
    assert_eq!(elements.right_ascension_ascending_node, 0.0);
    assert_eq!(elements.argument_of_periapsis, 0.0);
    assert_eq!(elements.true_anomaly, 0.0);
    assert_state_relative_eq(&elements.to_state_vector(), &state, 1e-15, "retrograde circle");
}

#[test]
fn elliptic_true_anomaly_follows_radial_velocity() {
    for true_anomaly in [0.5, 2.0, 3.0, 3.5, 5.0, 6.0] {
        let mut elements = molniya();
        elements.true_anomaly = true_anomaly;
        let state = elements.to_state_vector();
        let recovered = state.to_elements(mu_earth());

        // Outbound on the first half of the orbit, inbound on the second
        assert_eq!(state.radial_velocity() > 0.0, true_anomaly < PI);
        assert_angle_eq(recovered.true_anomaly, true_anomaly, 1e-10, "true anomaly");
    }
}

#[test]
fn acos_arguments_at_the_boundary() {
    // Every acos in the conversion gets an argument of ±1 up to round-off
    let boundary = [0.0, PI, TAU - 1e-12];
    let mu = mu_earth();

    for &angle in &boundary {
        for &other in &boundary {
            for (eccentricity, inclination) in [(0.0, 0.0), (0.0, PI), (0.0, 1.0), (0.3, 0.0), (0.3, PI), (0.3, 1.0)] {
                let elements = KeplerianElements::new(7.0e6, eccentricity, inclination, angle, other, angle);
                let recovered = elements.to_state_vector().to_elements(mu);

                let what = format!("{elements:?} -> {recovered:?}");
                assert_elements_in_range(&recovered, &what);
                assert_almost_eq(recovered.semi_major_axis, 7.0e6, 1e-3, &what);
            }
        }
    }

    for _ in 0..RANDOM_ITERS {
        let radius = rand::random_range(1.0..1e8);
        let speed = (mu / radius).sqrt();
        let direction: f64 = rand::random_range(0.0..TAU);
        let (sin, cos) = direction.sin_cos();

        // On an axis, moving along the other one
        let state = StateVector::new(Vector3::new(radius * cos, radius * sin, 0.0), Vector3::new(-speed * sin, speed * cos, 0.0));
        let elements = state.to_elements(mu);

        assert_elements_in_range(&elements, &format!("{state:?}"));
        assert_angle_eq(elements.true_anomaly, direction, 1e-7, "true anomaly from the x axis");
    }
}

#[test]
fn conversions_are_inverse_operations() {
    let elements = molniya();

    let from_elements = StateVector::from_elements(&elements);
    let from_owned: StateVector<f64> = elements.into();
    let from_ref = StateVector::from(&elements);

    assert_eq!(from_elements, elements.to_state_vector());
    assert_eq!(from_owned, from_elements);
    assert_eq!(from_ref, from_elements);
    assert_eq!(
        KeplerianElements::from_state_vector(&from_elements, mu_earth()),
        from_elements.to_elements(mu_earth())
    );
}

#[test]
fn derived_quantities_agree_between_representations() {
    let mu = mu_earth();
    for elements in random_any_iter(RANDOM_ITERS) {
        let state = elements.to_state_vector();
        let what = format!("{elements:?}");

        assert_relative_eq(
            state.specific_angular_momentum(),
            elements.specific_angular_momentum(),
            1e-12,
            &format!("angular momentum of {what}"),
        );
        assert_relative_eq(
            state.specific_orbital_energy(mu),
            elements.specific_orbital_energy(),
            1e-10,
            &format!("energy of {what}"),
        );

        let radius = state.position.norm();
        assert!(radius >= elements.periapsis() * (1.0 - 1e-12), "{what}");
        assert!(radius <= elements.apoapsis() * (1.0 + 1e-12), "{what}");
    }
}

#[test]
fn perifocal_frame_axes() {
    let elements = molniya();
    let rotation = elements.perifocal_to_inertial();
    let state = elements.to_state_vector();

    // The perifocal z axis is the angular momentum direction
    let normal = rotation.transform(Vector3::new(0.0, 0.0, 1.0));
    assert_vec3_relative_eq(normal, state.angular_momentum().unit(), 1e-14, "orbit normal");

    // The perifocal x axis points towards periapsis
    let periapsis = rotation.transform(Vector3::new(1.0, 0.0, 0.0));
    assert_vec3_relative_eq(periapsis, state.eccentricity_vector(mu_earth()).unit(), 1e-12, "periapsis");

    // Position in the perifocal plane
    let perifocal = rotation.inverse_transform(state.position);
    assert!(perifocal.z.abs() < 1e-8 * perifocal.norm());
}

#[test]
fn checked_elements() {
    let valid = KeplerianElements::try_new(7.0e6, 0.1, 0.5, 1.0, 2.0, 3.0, mu_earth());
    assert!(valid.is_ok());

    let mut elements = molniya();
    elements.eccentricity = 1.2;
    assert_eq!(elements.validate(), Err(ElementsError::Unbound));

    let hyperbolic = StateVector::new(Vector3::new(7.0e6, 0.0, 0.0), Vector3::new(0.0, 15.0e3, 0.0));
    assert_eq!(hyperbolic.try_to_elements(mu_earth()), Err(ElementsError::Unbound));
}
