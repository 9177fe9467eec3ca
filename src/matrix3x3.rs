use glam::{DMat3, Mat3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{Real, Vector3};

/// A struct representing a 3x3 matrix.
///
/// This struct is used to store the rotation that carries a vector from the
/// perifocal (PQW) frame of an orbit into the inertial frame.
/// See [`from_euler_angles`][Self::from_euler_angles].
///
/// Each element is named `eXY`, where `X` is the row and `Y` is the column.
///
/// # Example
/// ```
/// use keplerian_state::{Matrix3x3, Vector3};
///
/// let matrix = Matrix3x3 {
///     e11: 1.0, e12: 0.0, e13: 0.0,
///     e21: 0.0, e22: 0.0, e23: -1.0,
///     e31: 0.0, e32: 1.0, e33: 0.0,
/// };
///
/// let vec = Vector3::new(1.0, 2.0, 3.0);
///
/// assert_eq!(matrix.transform(vec), Vector3::new(1.0, -3.0, 2.0));
/// ```
#[allow(missing_docs)]
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Matrix3x3<T: Real> {
    // Element XY
    pub e11: T,
    pub e12: T,
    pub e13: T,
    pub e21: T,
    pub e22: T,
    pub e23: T,
    pub e31: T,
    pub e32: T,
    pub e33: T,
}

impl<T: Real> Matrix3x3<T> {
    /// The identity matrix.
    pub fn identity() -> Self {
        Self::from_rows([
            [T::ONE, T::ZERO, T::ZERO],
            [T::ZERO, T::ONE, T::ZERO],
            [T::ZERO, T::ZERO, T::ONE],
        ])
    }

    /// Builds a matrix from its rows.
    pub fn from_rows(rows: [[T; 3]; 3]) -> Self {
        let [[e11, e12, e13], [e21, e22, e23], [e31, e32, e33]] = rows;
        Self {
            e11,
            e12,
            e13,
            e21,
            e22,
            e23,
            e31,
            e32,
            e33,
        }
    }

    /// Builds the 3-1-3 Euler rotation for an orbit's orientation.
    ///
    /// The result is `R = R3(-Ω) · R1(-i) · R3(-ω)`, which rotates a vector
    /// expressed in the perifocal frame (x towards periapsis, z along the
    /// angular momentum) into the inertial frame.
    ///
    /// # Arguments
    /// - `argument_of_periapsis`: ω, in radians.
    /// - `inclination`: i, in radians.
    /// - `right_ascension_ascending_node`: Ω, in radians.
    ///
    /// The inverse rotation is
    /// `Matrix3x3::from_euler_angles(-Ω, -i, -ω)`, or simply the
    /// [transpose][Self::transpose].
    ///
    /// # Example
    /// ```
    /// use keplerian_state::{Matrix3x3, Vector3};
    /// use core::f64::consts::FRAC_PI_2;
    ///
    /// // Periapsis a quarter turn past an ascending node on the x axis,
    /// // in an equatorial plane: periapsis points along +y.
    /// let matrix = Matrix3x3::from_euler_angles(FRAC_PI_2, 0.0, 0.0);
    /// let periapsis = matrix.transform(Vector3::new(1.0, 0.0, 0.0));
    ///
    /// assert!((periapsis - Vector3::new(0.0, 1.0, 0.0)).norm() < 1e-15);
    /// ```
    pub fn from_euler_angles(
        argument_of_periapsis: T,
        inclination: T,
        right_ascension_ascending_node: T,
    ) -> Self {
        let (sin_arg_pe, cos_arg_pe) = argument_of_periapsis.sin_cos();
        let (sin_inc, cos_inc) = inclination.sin_cos();
        let (sin_lan, cos_lan) = right_ascension_ascending_node.sin_cos();

        Self {
            e11: cos_lan * cos_arg_pe - sin_lan * cos_inc * sin_arg_pe,
            e12: -cos_lan * sin_arg_pe - sin_lan * cos_inc * cos_arg_pe,
            e13: sin_lan * sin_inc,

            e21: sin_lan * cos_arg_pe + cos_lan * cos_inc * sin_arg_pe,
            e22: cos_lan * cos_inc * cos_arg_pe - sin_lan * sin_arg_pe,
            e23: -cos_lan * sin_inc,

            e31: sin_inc * sin_arg_pe,
            e32: sin_inc * cos_arg_pe,
            e33: cos_inc,
        }
    }

    /// The rows of the matrix.
    pub fn rows(&self) -> [[T; 3]; 3] {
        [
            [self.e11, self.e12, self.e13],
            [self.e21, self.e22, self.e23],
            [self.e31, self.e32, self.e33],
        ]
    }

    /// Gets the element at `row`, `column` (both zero-based).
    ///
    /// # Panics
    /// Panics if either index is greater than 2.
    pub fn element(&self, row: usize, column: usize) -> T {
        self.rows()[row][column]
    }

    /// The transposed matrix.
    ///
    /// For a rotation this is also its inverse.
    #[must_use]
    pub fn transpose(&self) -> Self {
        Self {
            e11: self.e11,
            e12: self.e21,
            e13: self.e31,
            e21: self.e12,
            e22: self.e22,
            e23: self.e32,
            e31: self.e13,
            e32: self.e23,
            e33: self.e33,
        }
    }

    /// Computes `M · v`.
    pub fn transform(&self, v: Vector3<T>) -> Vector3<T> {
        Vector3::new(
            self.e11 * v.x + self.e12 * v.y + self.e13 * v.z,
            self.e21 * v.x + self.e22 * v.y + self.e23 * v.z,
            self.e31 * v.x + self.e32 * v.y + self.e33 * v.z,
        )
    }

    /// Computes `Mᵀ · v`.
    ///
    /// For a matrix made by [`from_euler_angles`][Self::from_euler_angles]
    /// this takes an inertial vector back into the perifocal frame.
    pub fn inverse_transform(&self, v: Vector3<T>) -> Vector3<T> {
        Vector3::new(
            self.e11 * v.x + self.e21 * v.y + self.e31 * v.z,
            self.e12 * v.x + self.e22 * v.y + self.e32 * v.z,
            self.e13 * v.x + self.e23 * v.y + self.e33 * v.z,
        )
    }
}

impl<T: Real> Default for Matrix3x3<T> {
    /// The identity matrix.
    fn default() -> Self {
        Self::identity()
    }
}

impl From<Matrix3x3<f64>> for DMat3 {
    fn from(m: Matrix3x3<f64>) -> Self {
        // glam is column-major
        DMat3::from_cols_array_2d(&m.transpose().rows())
    }
}

impl From<Matrix3x3<f32>> for Mat3 {
    fn from(m: Matrix3x3<f32>) -> Self {
        Mat3::from_cols_array_2d(&m.transpose().rows())
    }
}
