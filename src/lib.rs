//! # Keplerian State Conversion
//! This library crate converts between the two usual descriptions of a body
//! on a two-body orbit:
//!
//! - a Cartesian [`StateVector`]: the inertial position and velocity at one
//!   instant, and
//! - a set of classical [`KeplerianElements`]: semi-major axis, eccentricity,
//!   inclination, right ascension of the ascending node, argument of
//!   periapsis and true anomaly.
//!
//! Only bound orbits (eccentricity below one) are supported.
//!
//! Everything is generic over the floating-point type through the [`Real`]
//! trait, which is implemented for both [`f32`] and [`f64`].
//!
//! ## Getting started
//! This crate provides these main structs:
//! - [`KeplerianElements`]: The six classical orbital elements, together
//!   with the gravitational parameter of the central body.
//! - [`StateVector`]: A position and velocity in the inertial frame.
//! - [`Vector3`] and [`Matrix3x3`]: The small amount of linear algebra the
//!   conversions need. Both convert to and from their [`glam`] counterparts.
//! - [`PhysicalConstants`]: Earth and time constants, in one immutable value
//!   you can pass around.
//!
//! Orbits that are circular or lie in the reference plane lose some of their
//! reference directions. See [`OrbitShape`] for the conventions used.
//!
//! ## Example
//!
//! ```rust
//! use keplerian_state::{KeplerianElements, PhysicalConstants, StateVector, Vector3};
//!
//! # fn main() {
//! let mu = PhysicalConstants::get().mu_earth();
//!
//! // A circular orbit 7000 km from the center of the Earth
//! let speed = (mu / 7.0e6).sqrt();
//! let state = StateVector::new(Vector3::new(7.0e6, 0.0, 0.0), Vector3::new(0.0, speed, 0.0));
//!
//! let elements = state.to_elements(mu);
//! assert!((elements.semi_major_axis - 7.0e6).abs() < 1e-3);
//! assert_eq!(elements.eccentricity, 0.0);
//!
//! let back = elements.to_state_vector();
//! assert!((back.position - state.position).norm() < 1e-3);
//! # }
//! ```
//!
//! ## Features
//! - `std` (default): Use the standard library for math functions.
//! - `libm`: Use [`libm`](https://docs.rs/libm) for math functions, for
//!   `no_std` targets.
//! - `serde`: Derive `Serialize` and `Deserialize` for the public types.

#![warn(missing_docs)]
#![cfg_attr(not(feature = "std"), no_std)]

use core::fmt;

pub mod constants;
mod elements;
mod math;
mod matrix3x3;
mod state_vector;
mod vector3;

pub use constants::{LeapSecondInsertion, LeapSecondTable, PhysicalConstants};
pub use elements::{KeplerianElements, OrbitShape};
pub use math::Real;
pub use matrix3x3::Matrix3x3;
pub use state_vector::StateVector;
pub use vector3::Vector3;

/// An error to describe why a conversion or a set of elements was rejected.
#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum ElementsError {
    /// ### A value was NaN or infinite.
    NonFinite,

    /// ### The gravitational parameter was zero or negative.
    /// The gravitational parameter is `G * M`, and a central body with no
    /// mass can't hold anything in orbit.
    NonPositiveGravitationalParameter,

    /// ### The semi-major axis was zero or negative.
    /// Bound orbits always have a positive semi-major axis.
    NonPositiveSemiMajorAxis,

    /// ### The eccentricity was negative.
    NegativeEccentricity,

    /// ### The orbit is parabolic or hyperbolic.
    /// Only eccentricities below one are supported.
    Unbound,

    /// ### The inclination was outside `[0, π]`.
    InclinationOutOfRange,

    /// ### The position was at the center of the central body.
    ZeroPosition,

    /// ### The velocity was zero or parallel to the position.
    /// With no angular momentum there is no orbital plane.
    ZeroAngularMomentum,
}

impl ElementsError {
    const fn message(&self) -> &'static str {
        match self {
            ElementsError::NonFinite => "A value was NaN or infinite.",
            ElementsError::NonPositiveGravitationalParameter => {
                "The gravitational parameter must be positive."
            }
            ElementsError::NonPositiveSemiMajorAxis => "The semi-major axis must be positive.",
            ElementsError::NegativeEccentricity => "The eccentricity must not be negative.",
            ElementsError::Unbound => "Parabolic and hyperbolic orbits are not supported.",
            ElementsError::InclinationOutOfRange => "The inclination must be between 0 and pi.",
            ElementsError::ZeroPosition => "The position must not be at the origin.",
            ElementsError::ZeroAngularMomentum => {
                "The velocity must not be zero or parallel to the position."
            }
        }
    }
}

impl fmt::Display for ElementsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl core::error::Error for ElementsError {}

#[cfg(test)]
mod tests;
