use core::ops::{Add, AddAssign, Index, Mul, MulAssign, Neg, Sub, SubAssign};

use glam::{DVec3, Vec3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::Real;

/// A three-component vector.
///
/// Depending on the frame, the components are `(x, y, z)` in an inertial
/// frame, or radial/transverse/normal in an orbital one.
///
/// The operators (`+`, `-`, `*`, `+=`, ...) all forward to the named
/// methods, so `a + b` and `a.add(b)` are interchangeable.
///
/// # Example
/// ```
/// use keplerian_state::Vector3;
///
/// let u = Vector3::new(1.0, 2.0, 3.0);
/// let v = Vector3::new(0.0, 1.0, 0.0);
///
/// assert_eq!(u.cross(v), Vector3::new(-3.0, 0.0, 1.0));
/// assert_eq!(u.dot(v), 2.0);
/// assert_eq!(u.add(v), u + v);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Vector3<T: Real> {
    /// Component 0.
    pub x: T,
    /// Component 1.
    pub y: T,
    /// Component 2.
    pub z: T,
}

impl<T: Real> Vector3<T> {
    /// Number of components in every vector.
    pub const LEN: usize = 3;

    /// Creates a vector from its three components.
    #[inline]
    pub const fn new(x: T, y: T, z: T) -> Self {
        Self { x, y, z }
    }

    /// The zero vector.
    #[inline]
    pub fn zero() -> Self {
        Self::new(T::ZERO, T::ZERO, T::ZERO)
    }

    /// Creates a vector from an array of three components.
    #[inline]
    pub fn from_array(components: [T; 3]) -> Self {
        Self::new(components[0], components[1], components[2])
    }

    /// Creates a vector from a slice.
    ///
    /// Returns `None` unless the slice holds exactly three elements.
    ///
    /// # Example
    /// ```
    /// use keplerian_state::Vector3;
    ///
    /// assert_eq!(
    ///     Vector3::from_slice(&[1.0, 2.0, 3.0]),
    ///     Some(Vector3::new(1.0, 2.0, 3.0))
    /// );
    /// assert_eq!(Vector3::<f64>::from_slice(&[1.0, 2.0]), None);
    /// ```
    pub fn from_slice(components: &[T]) -> Option<Self> {
        match *components {
            [x, y, z] => Some(Self::new(x, y, z)),
            _ => None,
        }
    }

    /// The components as an array.
    #[inline]
    pub fn to_array(self) -> [T; 3] {
        [self.x, self.y, self.z]
    }

    /// Number of components. Always 3.
    #[inline]
    pub const fn size(&self) -> usize {
        Self::LEN
    }

    /// Component 0.
    #[inline]
    pub const fn x(&self) -> T {
        self.x
    }

    /// Component 1.
    #[inline]
    pub const fn y(&self) -> T {
        self.y
    }

    /// Component 2.
    #[inline]
    pub const fn z(&self) -> T {
        self.z
    }

    /// Gets the component at `index`.
    ///
    /// # Panics
    /// Panics if `index` is not 0, 1 or 2.
    #[inline]
    pub fn component_at(&self, index: usize) -> T {
        self[index]
    }

    /// Component-wise sum.
    #[allow(clippy::should_implement_trait)]
    #[inline]
    #[must_use]
    pub fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }

    /// Component-wise difference.
    #[inline]
    #[must_use]
    pub fn subtract(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }

    /// Multiplies every component by `factor`.
    #[inline]
    #[must_use]
    pub fn scale(self, factor: T) -> Self {
        Self::new(self.x * factor, self.y * factor, self.z * factor)
    }

    /// Adds `rhs` to this vector in place.
    ///
    /// Returns `self` so calls can be chained:
    /// ```
    /// use keplerian_state::Vector3;
    ///
    /// let mut v = Vector3::new(1.0, 2.0, 3.0);
    /// v.add_in_place(Vector3::new(1.0, 1.0, 1.0)).scale_in_place(2.0);
    /// assert_eq!(v, Vector3::new(4.0, 6.0, 8.0));
    /// ```
    #[inline]
    pub fn add_in_place(&mut self, rhs: Self) -> &mut Self {
        *self = Vector3::add(*self, rhs);
        self
    }

    /// Subtracts `rhs` from this vector in place, returning `self`.
    #[inline]
    pub fn subtract_in_place(&mut self, rhs: Self) -> &mut Self {
        *self = self.subtract(rhs);
        self
    }

    /// Scales this vector in place, returning `self`.
    #[inline]
    pub fn scale_in_place(&mut self, factor: T) -> &mut Self {
        *self = self.scale(factor);
        self
    }

    /// Dot product.
    #[inline]
    pub fn dot(self, rhs: Self) -> T {
        self.x * rhs.x + self.y * rhs.y + self.z * rhs.z
    }

    /// Right-handed cross product.
    ///
    /// Anticommutative: `a.cross(b) == -b.cross(a)`.
    #[inline]
    #[must_use]
    pub fn cross(self, rhs: Self) -> Self {
        Self::new(
            self.y * rhs.z - self.z * rhs.y,
            self.z * rhs.x - self.x * rhs.z,
            self.x * rhs.y - self.y * rhs.x,
        )
    }

    /// Euclidean length, `sqrt(v · v)`.
    #[inline]
    pub fn norm(self) -> T {
        self.dot(self).sqrt()
    }

    /// The vector scaled to unit length.
    ///
    /// The zero vector has no direction; it is returned unchanged instead
    /// of being divided by zero, so callers must tolerate a zero result.
    ///
    /// # Example
    /// ```
    /// use keplerian_state::Vector3;
    ///
    /// assert_eq!(Vector3::new(0.0, 0.0, 2.0).unit(), Vector3::new(0.0, 0.0, 1.0));
    /// assert_eq!(Vector3::<f64>::zero().unit(), Vector3::zero());
    /// ```
    #[inline]
    #[must_use]
    pub fn unit(self) -> Self {
        let magnitude = self.norm();
        if magnitude > T::ZERO {
            self.scale(T::ONE / magnitude)
        } else {
            self
        }
    }

    /// Unsigned angle between two vectors, in `[0, π]`.
    ///
    /// Computed as `atan2(|a × b|, a · b)`, which stays accurate near 0 and π
    /// where `acos` of the normalized dot product does not.
    ///
    /// # Example
    /// ```
    /// use keplerian_state::Vector3;
    /// use core::f64::consts::FRAC_PI_2;
    ///
    /// let a = Vector3::new(1.0_f64, 0.0, 0.0);
    /// let b = Vector3::new(0.0, 5.0, 0.0);
    /// assert!((a.angle(b) - FRAC_PI_2).abs() < 1e-15);
    /// ```
    #[inline]
    pub fn angle(self, rhs: Self) -> T {
        self.cross(rhs).norm().atan2(self.dot(rhs))
    }

    /// Returns `true` if every component is finite.
    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

impl<T: Real> Index<usize> for Vector3<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        match index {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            _ => panic!("index out of bounds: a Vector3 has 3 components but the index is {index}"),
        }
    }
}

impl<T: Real> Add for Vector3<T> {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Vector3::add(self, rhs)
    }
}

impl<T: Real> Sub for Vector3<T> {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        self.subtract(rhs)
    }
}

impl<T: Real> Mul<T> for Vector3<T> {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: T) -> Self {
        self.scale(rhs)
    }
}

impl<T: Real> Neg for Vector3<T> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z)
    }
}

impl<T: Real> AddAssign for Vector3<T> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        self.add_in_place(rhs);
    }
}

impl<T: Real> SubAssign for Vector3<T> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        self.subtract_in_place(rhs);
    }
}

impl<T: Real> MulAssign<T> for Vector3<T> {
    #[inline]
    fn mul_assign(&mut self, rhs: T) {
        self.scale_in_place(rhs);
    }
}

impl<T: Real> From<[T; 3]> for Vector3<T> {
    #[inline]
    fn from(components: [T; 3]) -> Self {
        Self::from_array(components)
    }
}

impl<T: Real> From<Vector3<T>> for [T; 3] {
    #[inline]
    fn from(v: Vector3<T>) -> Self {
        v.to_array()
    }
}

impl From<DVec3> for Vector3<f64> {
    #[inline]
    fn from(v: DVec3) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl From<Vector3<f64>> for DVec3 {
    #[inline]
    fn from(v: Vector3<f64>) -> Self {
        DVec3::new(v.x, v.y, v.z)
    }
}

impl From<Vec3> for Vector3<f32> {
    #[inline]
    fn from(v: Vec3) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl From<Vector3<f32>> for Vec3 {
    #[inline]
    fn from(v: Vector3<f32>) -> Self {
        Vec3::new(v.x, v.y, v.z)
    }
}
