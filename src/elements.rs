#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{ElementsError, Matrix3x3, PhysicalConstants, Real, StateVector, Vector3};

/// A struct representing the classical orbital elements of a bound orbit.
///
/// The six elements are public; the gravitational parameter of the central
/// body is fixed when the struct is created and can only be read back with
/// [`gravitational_parameter`][Self::gravitational_parameter].
///
/// # Example
/// ```
/// use keplerian_state::{KeplerianElements, StateVector};
///
/// let elements = KeplerianElements::new(
///     // Semi-major axis, in meters
///     26.61027e6_f64,
///
///     // Eccentricity
///     0.74,
///
///     // Inclination
///     1.1065387,
///
///     // Right ascension of the ascending node
///     4.4413224,
///
///     // Argument of periapsis
///     2.3561945,
///
///     // True anomaly
///     1.0471976,
/// );
///
/// let state = elements.to_state_vector();
/// let recovered = state.to_elements(elements.gravitational_parameter());
///
/// assert!((recovered.eccentricity - 0.74).abs() < 1e-12);
/// assert!((recovered.true_anomaly - 1.0471976).abs() < 1e-10);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct KeplerianElements<T: Real> {
    /// The semi-major axis, in the length unit of the gravitational parameter.
    ///
    /// Half the longest diameter of the ellipse.
    pub semi_major_axis: T,

    /// The eccentricity of the orbit.
    ///
    /// Zero for a circle, approaching one as the ellipse stretches.
    /// Values of one and above (parabolas and hyperbolas) are not supported.
    ///
    /// See more: <https://en.wikipedia.org/wiki/Orbital_eccentricity>
    pub eccentricity: T,

    /// The inclination of the orbit, in radians, in `[0, π]`.
    ///
    /// The angle between the orbital plane and the reference plane.
    pub inclination: T,

    /// The right ascension of the ascending node, in radians, in `[0, 2π)`.
    ///
    /// The angle from the reference x axis to the point where the orbit
    /// crosses the reference plane going north.
    /// Zero by convention for equatorial orbits, which have no such point.
    pub right_ascension_ascending_node: T,

    /// The argument of periapsis, in radians, in `[0, 2π)`.
    ///
    /// The angle from the ascending node to periapsis, measured in the
    /// direction of motion.
    /// Zero by convention for circular orbits, which have no periapsis.
    pub argument_of_periapsis: T,

    /// The true anomaly, in radians, in `[0, 2π)`.
    ///
    /// The angle from periapsis to the current position, measured in the
    /// direction of motion.
    pub true_anomaly: T,

    mu: T,
}

/// How degenerate an orbit's geometry is.
///
/// Circular orbits have no periapsis and equatorial orbits have no
/// ascending node, so some of the angles are measured from a substitute
/// reference direction:
///
/// | shape | Ω | ω | ν measured from |
/// |---|---|---|---|
/// | `EllipticInclined` | node | from node | periapsis |
/// | `EllipticEquatorial` | 0 | from x axis | periapsis |
/// | `CircularInclined` | node | 0 | ascending node |
/// | `CircularEquatorial` | 0 | 0 | x axis |
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OrbitShape {
    /// Both periapsis and ascending node are defined.
    EllipticInclined,
    /// Periapsis is defined, but the orbit lies in the reference plane.
    EllipticEquatorial,
    /// The ascending node is defined, but the orbit is a circle.
    CircularInclined,
    /// A circle in the reference plane.
    CircularEquatorial,
}

impl OrbitShape {
    /// Classifies an orbit by the length of its eccentricity vector and of
    /// its node vector (`ẑ × ĥ`, whose length is `sin i`).
    pub fn classify<T: Real>(eccentricity: T, node: T) -> Self {
        let circular = eccentricity < T::DEGENERACY_TOLERANCE;
        let equatorial = node < T::DEGENERACY_TOLERANCE;

        match (circular, equatorial) {
            (false, false) => Self::EllipticInclined,
            (false, true) => Self::EllipticEquatorial,
            (true, false) => Self::CircularInclined,
            (true, true) => Self::CircularEquatorial,
        }
    }

    /// Whether the orbit has no periapsis.
    pub const fn is_circular(self) -> bool {
        matches!(self, Self::CircularInclined | Self::CircularEquatorial)
    }

    /// Whether the orbit has no ascending node.
    pub const fn is_equatorial(self) -> bool {
        matches!(self, Self::EllipticEquatorial | Self::CircularEquatorial)
    }
}

/// Maps an `acos` result in `[0, π]` onto `[0, 2π)` by taking the explicit
/// mirror image when `reflect` is set.
#[inline]
fn reflect_if<T: Real>(angle: T, reflect: bool) -> T {
    if !reflect || angle <= T::ZERO {
        return angle;
    }

    let reflected = T::TAU - angle;
    if reflected < T::TAU {
        reflected
    } else {
        T::ZERO
    }
}

impl<T: Real> KeplerianElements<T> {
    /// Creates a new set of elements around the Earth.
    ///
    /// The gravitational parameter is
    /// [`PhysicalConstants::mu_earth`] of the standard constants.
    ///
    /// # Arguments
    /// - `semi_major_axis`: in meters
    /// - `eccentricity`: in `[0, 1)`
    /// - `inclination`, `right_ascension_ascending_node`,
    ///   `argument_of_periapsis`, `true_anomaly`: in radians
    pub fn new(
        semi_major_axis: T,
        eccentricity: T,
        inclination: T,
        right_ascension_ascending_node: T,
        argument_of_periapsis: T,
        true_anomaly: T,
    ) -> Self {
        Self::with_gravitational_parameter(
            semi_major_axis,
            eccentricity,
            inclination,
            right_ascension_ascending_node,
            argument_of_periapsis,
            true_anomaly,
            PhysicalConstants::get().mu_earth_as(),
        )
    }

    /// Creates a new set of elements around a body with gravitational
    /// parameter `mu`.
    ///
    /// Nothing is validated; see [`try_new`][Self::try_new] for a checked
    /// version.
    #[doc(alias = "with_mu")]
    pub fn with_gravitational_parameter(
        semi_major_axis: T,
        eccentricity: T,
        inclination: T,
        right_ascension_ascending_node: T,
        argument_of_periapsis: T,
        true_anomaly: T,
        mu: T,
    ) -> Self {
        Self {
            semi_major_axis,
            eccentricity,
            inclination,
            right_ascension_ascending_node,
            argument_of_periapsis,
            true_anomaly,
            mu,
        }
    }

    /// Creates a new set of elements, rejecting values outside the supported
    /// domain.
    ///
    /// # Errors
    /// See [`validate`][Self::validate].
    ///
    /// # Example
    /// ```
    /// use keplerian_state::{ElementsError, KeplerianElements};
    ///
    /// let hyperbolic = KeplerianElements::try_new(1.0e7, 1.5, 0.0, 0.0, 0.0, 0.0, 3.986e14);
    /// assert_eq!(hyperbolic, Err(ElementsError::Unbound));
    ///
    /// let fine = KeplerianElements::try_new(1.0e7, 0.5, 0.0, 0.0, 0.0, 0.0, 3.986e14);
    /// assert!(fine.is_ok());
    /// ```
    pub fn try_new(
        semi_major_axis: T,
        eccentricity: T,
        inclination: T,
        right_ascension_ascending_node: T,
        argument_of_periapsis: T,
        true_anomaly: T,
        mu: T,
    ) -> Result<Self, ElementsError> {
        let elements = Self::with_gravitational_parameter(
            semi_major_axis,
            eccentricity,
            inclination,
            right_ascension_ascending_node,
            argument_of_periapsis,
            true_anomaly,
            mu,
        );
        elements.validate()?;
        Ok(elements)
    }

    /// Creates a new set of elements from the periapsis and apoapsis
    /// distances instead of the semi-major axis and eccentricity.
    pub fn with_apsides(
        periapsis: T,
        apoapsis: T,
        inclination: T,
        right_ascension_ascending_node: T,
        argument_of_periapsis: T,
        true_anomaly: T,
        mu: T,
    ) -> Self {
        Self::with_gravitational_parameter(
            Self::semi_major_axis_from_apsides(periapsis, apoapsis),
            Self::eccentricity_from_apsides(periapsis, apoapsis),
            inclination,
            right_ascension_ascending_node,
            argument_of_periapsis,
            true_anomaly,
            mu,
        )
    }

    /// Checks that the elements describe a supported bound orbit.
    ///
    /// # Errors
    /// - [`ElementsError::NonFinite`] if any value is NaN or infinite.
    /// - [`ElementsError::NonPositiveGravitationalParameter`] if `mu <= 0`.
    /// - [`ElementsError::NonPositiveSemiMajorAxis`] if `a <= 0`.
    /// - [`ElementsError::NegativeEccentricity`] if `e < 0`.
    /// - [`ElementsError::Unbound`] if `e >= 1`.
    /// - [`ElementsError::InclinationOutOfRange`] if `i` is outside `[0, π]`.
    pub fn validate(&self) -> Result<(), ElementsError> {
        let all_finite = [
            self.semi_major_axis,
            self.eccentricity,
            self.inclination,
            self.right_ascension_ascending_node,
            self.argument_of_periapsis,
            self.true_anomaly,
            self.mu,
        ]
        .into_iter()
        .all(Real::is_finite);

        if !all_finite {
            return Err(ElementsError::NonFinite);
        }
        if self.mu <= T::ZERO {
            return Err(ElementsError::NonPositiveGravitationalParameter);
        }
        if self.semi_major_axis <= T::ZERO {
            return Err(ElementsError::NonPositiveSemiMajorAxis);
        }
        if self.eccentricity < T::ZERO {
            return Err(ElementsError::NegativeEccentricity);
        }
        if self.eccentricity >= T::ONE {
            return Err(ElementsError::Unbound);
        }
        if self.inclination < T::ZERO || self.inclination > T::PI {
            return Err(ElementsError::InclinationOutOfRange);
        }
        Ok(())
    }

    /// Gets the gravitational parameter of the central body.
    ///
    /// The gravitational parameter mu of the parent body equals a certain
    /// gravitational constant G times the mass of the parent body M.
    ///
    /// In other words, mu = GM.
    #[doc(alias = "mu")]
    #[inline]
    pub fn gravitational_parameter(&self) -> T {
        self.mu
    }

    /// Derives the elements of the orbit passing through a state vector.
    ///
    /// # Degenerate orbits
    /// The angles that lose their reference direction are filled in by
    /// convention (see [`OrbitShape`]):
    /// - equatorial orbits get `Ω = 0`, and ω becomes the longitude of
    ///   periapsis measured from the x axis;
    /// - circular orbits get `e = 0` and `ω = 0`, and ν is measured from the
    ///   ascending node;
    /// - circular equatorial orbits measure ν from the x axis.
    ///
    /// An eccentricity or node vector shorter than
    /// [`Real::DEGENERACY_TOLERANCE`] counts as zero.
    ///
    /// Every inverse cosine has its argument clamped to `[-1, 1]` first, so
    /// round-off at the domain boundary never produces NaN.
    ///
    /// # Constraints
    /// The position must not be at the origin, the angular momentum must not
    /// be zero, and the trajectory must be bound (`e < 1`).
    /// See [`StateVector::try_to_elements`] for a checked version.
    ///
    /// # Performance
    /// This function is not too performant as it uses several trigonometric
    /// operations.
    pub fn from_state_vector(state: &StateVector<T>, mu: T) -> Self {
        // Reference:
        // https://orbital-mechanics.space/classical-orbital-elements/orbital-elements-and-the-state-vector.html
        let position = state.position;
        let velocity = state.velocity;

        let radius = position.norm();
        let position_unit = position.unit();

        // Step 1: Orbital angular momentum
        let angular_momentum_vector = position.cross(velocity);
        let angular_momentum = angular_momentum_vector.norm();
        let angular_momentum_unit = angular_momentum_vector.unit();

        // Step 2: Eccentricity
        let eccentricity_vector = state.eccentricity_vector(mu);
        let eccentricity = eccentricity_vector.norm();

        // Step 3: Node vector
        // René Schwarz's simplification of the cross product between
        // (0, 0, 1) and the angular momentum unit vector:
        // https://downloads.rene-schwarz.com/download/M002-Cartesian_State_Vectors_to_Keplerian_Orbit_Elements.pdf
        let node_vector = Vector3::new(-angular_momentum_unit.y, angular_momentum_unit.x, T::ZERO);
        let node = node_vector.norm();

        let shape = OrbitShape::classify(eccentricity, node);
        log::trace!("state vector classified as {shape:?} (e = {eccentricity}, |n| = {node})");

        let eccentricity = if shape.is_circular() {
            T::ZERO
        } else {
            eccentricity
        };

        // Step 4: Semi-major axis, from h² = mu a (1 - e²)
        let semi_major_axis =
            angular_momentum * angular_momentum / (mu * (T::ONE - eccentricity * eccentricity));

        // Step 5: Inclination
        // acos(ĥ_z) written as an atan2, which keeps full precision near
        // i = 0 and i = π
        let inclination = angular_momentum_vector.angle(Vector3::new(T::ZERO, T::ZERO, T::ONE));

        // Step 6: Right ascension of the ascending node
        let right_ascension_ascending_node = if shape.is_equatorial() {
            T::ZERO
        } else {
            reflect_if(
                (node_vector.x / node).clamped_acos(),
                node_vector.y < T::ZERO,
            )
        };

        // Step 7: Argument of periapsis
        let argument_of_periapsis = match shape {
            OrbitShape::EllipticInclined => reflect_if(
                (eccentricity_vector.dot(node_vector) / (eccentricity * node)).clamped_acos(),
                eccentricity_vector.z < T::ZERO,
            ),
            OrbitShape::EllipticEquatorial => {
                // Longitude of periapsis. Retrograde orbits run clockwise
                // seen from +z, which flips the sense of the angle.
                let retrograde = angular_momentum_vector.z < T::ZERO;
                reflect_if(
                    (eccentricity_vector.x / eccentricity).clamped_acos(),
                    (eccentricity_vector.y < T::ZERO) != retrograde,
                )
            }
            OrbitShape::CircularInclined | OrbitShape::CircularEquatorial => T::ZERO,
        };

        // Step 8: True anomaly
        let true_anomaly = match shape {
            OrbitShape::EllipticInclined | OrbitShape::EllipticEquatorial => reflect_if(
                (eccentricity_vector.dot(position_unit) / eccentricity).clamped_acos(),
                velocity.dot(position_unit) < T::ZERO,
            ),
            OrbitShape::CircularInclined => reflect_if(
                (node_vector.dot(position_unit) / node).clamped_acos(),
                position.z < T::ZERO,
            ),
            OrbitShape::CircularEquatorial => reflect_if(
                (position.x / radius).clamped_acos(),
                velocity.x > T::ZERO,
            ),
        };

        Self::with_gravitational_parameter(
            semi_major_axis,
            eccentricity,
            inclination,
            right_ascension_ascending_node,
            argument_of_periapsis,
            true_anomaly,
            mu,
        )
    }

    /// Computes the inertial position and velocity described by these
    /// elements.
    ///
    /// The position and velocity are first found in the perifocal frame,
    /// then rotated by [`perifocal_to_inertial`][Self::perifocal_to_inertial].
    ///
    /// # Example
    /// ```
    /// use keplerian_state::{KeplerianElements, Vector3};
    ///
    /// // Unit circle, mu = 1, a quarter turn in
    /// let elements = KeplerianElements::with_gravitational_parameter(
    ///     1.0, 0.0, 0.0, 0.0, 0.0, core::f64::consts::FRAC_PI_2, 1.0,
    /// );
    /// let state = elements.to_state_vector();
    ///
    /// assert!((state.position - Vector3::new(0.0, 1.0, 0.0)).norm() < 1e-15);
    /// assert!((state.velocity - Vector3::new(-1.0, 0.0, 0.0)).norm() < 1e-15);
    /// ```
    pub fn to_state_vector(&self) -> StateVector<T> {
        let mu = self.mu;
        let eccentricity = self.eccentricity;

        let angular_momentum = self.specific_angular_momentum();
        let (sin_true_anomaly, cos_true_anomaly) = self.true_anomaly.sin_cos();

        // r = (h² / mu) / (1 + e cos ν)
        let radius = (angular_momentum * angular_momentum / mu)
            / (T::ONE + eccentricity * cos_true_anomaly);

        let pqw_position = Vector3::new(
            radius * cos_true_anomaly,
            radius * sin_true_anomaly,
            T::ZERO,
        );
        let pqw_velocity = Vector3::new(
            -sin_true_anomaly,
            eccentricity + cos_true_anomaly,
            T::ZERO,
        )
        .scale(mu / angular_momentum);

        let rotation = self.perifocal_to_inertial();

        StateVector::new(
            rotation.transform(pqw_position),
            rotation.transform(pqw_velocity),
        )
    }

    /// The rotation from this orbit's perifocal frame into the inertial
    /// frame.
    pub fn perifocal_to_inertial(&self) -> Matrix3x3<T> {
        Matrix3x3::from_euler_angles(
            self.argument_of_periapsis,
            self.inclination,
            self.right_ascension_ascending_node,
        )
    }

    /// Which conventions apply to this orbit's angles.
    ///
    /// Uses the same thresholds as [`from_state_vector`][Self::from_state_vector],
    /// with the node vector length taken as `|sin i|`.
    pub fn shape(&self) -> OrbitShape {
        OrbitShape::classify(self.eccentricity, self.inclination.sin().abs())
    }

    /// Semi-major axis of an ellipse with the given apsides, `(p + q) / 2`.
    pub fn semi_major_axis_from_apsides(periapsis: T, apoapsis: T) -> T {
        (periapsis + apoapsis) / T::TWO
    }

    /// Eccentricity of an ellipse with the given apsides, `(q - p) / (q + p)`.
    #[doc(alias = "eccentricity_from_peri_apoapsis")]
    pub fn eccentricity_from_apsides(periapsis: T, apoapsis: T) -> T {
        (apoapsis - periapsis) / (apoapsis + periapsis)
    }

    /// Orbital period for a semi-major axis, `2π sqrt(a³ / mu)`.
    ///
    /// # Example
    /// ```
    /// use keplerian_state::{KeplerianElements, PhysicalConstants};
    ///
    /// let mu = PhysicalConstants::get().mu_earth();
    /// let geostationary = 42_164.0e3;
    /// let period = KeplerianElements::period(geostationary, mu);
    ///
    /// // One sidereal day
    /// assert!((period - 86_164.0).abs() < 2.0);
    /// ```
    pub fn period(semi_major_axis: T, mu: T) -> T {
        // T = 2pi * sqrt(a^3 / GM)
        // https://en.wikipedia.org/wiki/Orbital_period
        T::TAU * (semi_major_axis * semi_major_axis * semi_major_axis / mu).sqrt()
    }

    /// Semi-major axis for an orbital period, `cbrt(mu (T / 2π)²)`.
    pub fn semi_major_axis_from_period(period: T, mu: T) -> T {
        let revolutions = period / T::TAU;
        (mu * revolutions * revolutions).cbrt()
    }

    /// The distance at the closest point to the central body, `a (1 - e)`.
    pub fn periapsis(&self) -> T {
        self.semi_major_axis * (T::ONE - self.eccentricity)
    }

    /// The distance at the furthest point from the central body, `a (1 + e)`.
    pub fn apoapsis(&self) -> T {
        self.semi_major_axis * (T::ONE + self.eccentricity)
    }

    /// Half the shortest diameter of the ellipse, `a sqrt(1 - e²)`.
    pub fn semi_minor_axis(&self) -> T {
        self.semi_major_axis * (T::ONE - self.eccentricity * self.eccentricity).sqrt()
    }

    /// The semi-latus rectum, `a (1 - e²)`.
    ///
    /// Learn more: <https://en.wikipedia.org/wiki/Ellipse#Semi-latus_rectum>
    pub fn semi_latus_rectum(&self) -> T {
        self.semi_major_axis * (T::ONE - self.eccentricity * self.eccentricity)
    }

    /// The magnitude of the specific angular momentum, `sqrt(mu a (1 - e²))`.
    pub fn specific_angular_momentum(&self) -> T {
        (self.mu * self.semi_latus_rectum()).sqrt()
    }

    /// The specific orbital energy, `-mu / 2a`.
    pub fn specific_orbital_energy(&self) -> T {
        -self.mu / (T::TWO * self.semi_major_axis)
    }

    /// The time it takes to complete one revolution, in seconds.
    pub fn orbital_period(&self) -> T {
        Self::period(self.semi_major_axis, self.mu)
    }

    /// The mean angular rate over one revolution, `sqrt(mu / a³)`, in
    /// radians per second.
    pub fn mean_motion(&self) -> T {
        let a = self.semi_major_axis;
        (self.mu / (a * a * a)).sqrt()
    }
}
