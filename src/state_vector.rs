#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{ElementsError, KeplerianElements, Real, Vector3};

/// A struct representing a position and velocity at a point in the orbit.
///
/// Both vectors are expressed in the same inertial frame. The position is in
/// the length unit of the gravitational parameter you pair it with (meters
/// for the default Earth `mu`), and the velocity in that length unit per
/// second.
///
/// State vectors can be turned into Keplerian elements, see
/// [`to_elements`][Self::to_elements] for more information.
///
/// # Example
/// ```
/// use keplerian_state::{StateVector, Vector3};
///
/// let state = StateVector::new(
///     Vector3::new(7.0e6, 0.0, 0.0),
///     Vector3::new(0.0, 7.5e3, 0.0),
/// );
///
/// assert_eq!(state.radial_velocity(), 0.0);
/// assert_eq!(state.specific_angular_momentum(), 7.0e6 * 7.5e3);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct StateVector<T: Real> {
    /// The inertial position.
    pub position: Vector3<T>,
    /// The inertial velocity.
    pub velocity: Vector3<T>,
}

impl<T: Real> StateVector<T> {
    /// Creates a state vector from an inertial position and velocity.
    #[inline]
    pub const fn new(position: Vector3<T>, velocity: Vector3<T>) -> Self {
        Self { position, velocity }
    }

    /// Creates a state vector from raw position and velocity components.
    #[inline]
    pub fn from_components(position: [T; 3], velocity: [T; 3]) -> Self {
        Self::new(position.into(), velocity.into())
    }

    /// Computes the state vector described by a set of Keplerian elements.
    ///
    /// This is the same as [`KeplerianElements::to_state_vector`].
    #[inline]
    pub fn from_elements(elements: &KeplerianElements<T>) -> Self {
        elements.to_state_vector()
    }

    /// The component of the velocity along the position, `v · r̂`.
    ///
    /// Positive when moving away from the central body.
    #[inline]
    pub fn radial_velocity(&self) -> T {
        self.velocity.dot(self.position.unit())
    }

    /// The specific angular momentum vector, `r × v`.
    #[inline]
    pub fn angular_momentum(&self) -> Vector3<T> {
        self.position.cross(self.velocity)
    }

    /// The magnitude of the specific angular momentum, `|r × v|`.
    #[inline]
    pub fn specific_angular_momentum(&self) -> T {
        self.angular_momentum().norm()
    }

    /// The specific orbital energy, `v²/2 - mu/r`.
    ///
    /// Negative for bound orbits.
    pub fn specific_orbital_energy(&self, mu: T) -> T {
        self.velocity.dot(self.velocity) / T::TWO - mu / self.position.norm()
    }

    /// The eccentricity vector, `(v × h)/mu - r̂`.
    ///
    /// It points from the central body towards periapsis, and its length is
    /// the eccentricity.
    pub fn eccentricity_vector(&self, mu: T) -> Vector3<T> {
        self.velocity
            .cross(self.angular_momentum())
            .scale(T::ONE / mu)
            - self.position.unit()
    }

    /// Converts the state vector into Keplerian elements around a body with
    /// gravitational parameter `mu`.
    ///
    /// This is the same as [`KeplerianElements::from_state_vector`]; see
    /// there for the conventions used for circular and equatorial orbits.
    ///
    /// # Constraints
    /// The position must not be at the origin, the motion must not be purely
    /// radial, and the trajectory must be bound. If these are breached you
    /// may get infinities or NaNs; use
    /// [`try_to_elements`][Self::try_to_elements] to have them checked.
    ///
    /// # Example
    /// ```
    /// use keplerian_state::{StateVector, Vector3};
    ///
    /// // Circular orbit of radius 1 around a body with mu = 1
    /// let state = StateVector::new(Vector3::new(1.0_f64, 0.0, 0.0), Vector3::new(0.0, 1.0, 0.0));
    /// let elements = state.to_elements(1.0);
    ///
    /// assert!((elements.semi_major_axis - 1.0).abs() < 1e-12);
    /// assert_eq!(elements.eccentricity, 0.0);
    /// assert_eq!(elements.inclination, 0.0);
    /// assert_eq!(elements.true_anomaly, 0.0);
    /// ```
    #[must_use]
    pub fn to_elements(&self, mu: T) -> KeplerianElements<T> {
        KeplerianElements::from_state_vector(self, mu)
    }

    /// Converts the state vector into Keplerian elements, rejecting inputs
    /// outside the supported domain.
    ///
    /// # Errors
    /// - [`ElementsError::NonFinite`] if `mu` or any component is NaN or infinite.
    /// - [`ElementsError::NonPositiveGravitationalParameter`] if `mu <= 0`.
    /// - [`ElementsError::ZeroPosition`] if the position is the origin.
    /// - [`ElementsError::ZeroAngularMomentum`] if the velocity is zero or
    ///   parallel to the position.
    /// - [`ElementsError::Unbound`] if the trajectory is parabolic or
    ///   hyperbolic.
    ///
    /// # Example
    /// ```
    /// use keplerian_state::{ElementsError, StateVector, Vector3};
    ///
    /// let escaping = StateVector::new(Vector3::new(1.0, 0.0, 0.0), Vector3::new(0.0, 2.0, 0.0));
    /// assert_eq!(escaping.try_to_elements(1.0), Err(ElementsError::Unbound));
    /// ```
    pub fn try_to_elements(&self, mu: T) -> Result<KeplerianElements<T>, ElementsError> {
        if !(mu.is_finite() && self.position.is_finite() && self.velocity.is_finite()) {
            return Err(ElementsError::NonFinite);
        }
        if mu <= T::ZERO {
            return Err(ElementsError::NonPositiveGravitationalParameter);
        }
        if self.position.norm() == T::ZERO {
            return Err(ElementsError::ZeroPosition);
        }
        if self.specific_angular_momentum() == T::ZERO {
            return Err(ElementsError::ZeroAngularMomentum);
        }

        let elements = self.to_elements(mu);
        if elements.eccentricity >= T::ONE {
            return Err(ElementsError::Unbound);
        }

        Ok(elements)
    }
}

impl<T: Real> From<KeplerianElements<T>> for StateVector<T> {
    #[inline]
    fn from(elements: KeplerianElements<T>) -> Self {
        elements.to_state_vector()
    }
}

impl<T: Real> From<&KeplerianElements<T>> for StateVector<T> {
    #[inline]
    fn from(elements: &KeplerianElements<T>) -> Self {
        elements.to_state_vector()
    }
}
