#[cfg(not(any(feature = "std", feature = "libm")))]
compile_error!("Either std or libm must be used for math operations");

use core::fmt::{Debug, Display};
use core::ops::{Add, AddAssign, Div, Mul, MulAssign, Neg, Sub, SubAssign};

/// A floating-point scalar the orbit types can be built on.
///
/// This is implemented for [`f32`] and [`f64`], and is sealed in practice
/// by the fact that the crate only ships those two implementations.
///
/// Transcendental functions come from the standard library when the `std`
/// feature is enabled, and from [`libm`](https://docs.rs/libm) otherwise.
pub trait Real:
    Copy
    + Debug
    + Display
    + Default
    + PartialEq
    + PartialOrd
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
    + AddAssign
    + SubAssign
    + MulAssign
    + Send
    + Sync
    + 'static
{
    /// Additive identity.
    const ZERO: Self;
    /// Multiplicative identity.
    const ONE: Self;
    /// Two.
    const TWO: Self;
    /// Archimedes' constant (π).
    const PI: Self;
    /// The full circle constant (τ = 2π).
    const TAU: Self;

    /// Magnitudes below this are treated as zero when deciding whether an
    /// orbit is circular (eccentricity) or equatorial (node vector).
    ///
    /// Round-off alone leaves an eccentricity of about `1e-15` on a
    /// circular `f64` orbit and about `6e-7` on an `f32` one.
    ///
    /// Just above the cutoff the periapsis direction is only known to about
    /// `round-off / e`, and that error shows up in both ω and ν. The two
    /// mostly cancel when the state is rebuilt, but not entirely: a double
    /// precision orbit with `e` close to `1e-10` rebuilds its state to a few
    /// parts in `1e9`. Moving the cutoff down makes this worse, not better
    /// (about `5e-6` at `e = 1e-12`).
    const DEGENERACY_TOLERANCE: Self;

    /// Converts from an `f64`, rounding if `Self` is narrower.
    fn from_f64(value: f64) -> Self;

    /// Widens to `f64`.
    fn to_f64(self) -> f64;

    /// Returns `true` if this value is neither infinite nor NaN.
    fn is_finite(self) -> bool;

    /// Square root.
    fn sqrt(self) -> Self;
    /// Cube root.
    fn cbrt(self) -> Self;
    /// Absolute value.
    fn abs(self) -> Self;
    /// Sine, in radians.
    fn sin(self) -> Self;
    /// Cosine, in radians.
    fn cos(self) -> Self;
    /// Inverse cosine, in `[0, π]`. NaN outside `[-1, 1]`.
    fn acos(self) -> Self;
    /// Four-quadrant arctangent of `self / other`, in `(-π, π]`.
    fn atan2(self, other: Self) -> Self;

    /// Simultaneously computes the sine and cosine of the number.
    ///
    /// Returns `(sin(x), cos(x))`.
    fn sin_cos(self) -> (Self, Self) {
        (self.sin(), self.cos())
    }

    /// Restricts the value to `[-1, 1]`.
    ///
    /// NaN is passed through untouched.
    #[inline]
    fn clamp_unit(self) -> Self {
        if self > Self::ONE {
            Self::ONE
        } else if self < -Self::ONE {
            -Self::ONE
        } else {
            self
        }
    }

    /// Inverse cosine of the value after clamping it to `[-1, 1]`.
    ///
    /// Cosines assembled from dot products routinely overshoot the unit
    /// interval by a few ulps (`1.0000000000000002`), which would make a bare
    /// `acos` return NaN.
    #[inline]
    fn clamped_acos(self) -> Self {
        self.clamp_unit().acos()
    }
}

macro_rules! libm_or_std {
    (@make $t:ty, $fname:ident, $libm:ident) => {
        #[inline]
        fn $fname(self) -> Self {
            #[cfg(feature = "std")]
            { <$t>::$fname(self) }
            #[cfg(not(feature = "std"))]
            { libm::$libm(self) }
        }
    };

    (@make $t:ty, $fname:ident, $libm:ident : 2) => {
        #[inline]
        fn $fname(self, other: Self) -> Self {
            #[cfg(feature = "std")]
            { <$t>::$fname(self, other) }
            #[cfg(not(feature = "std"))]
            { libm::$libm(self, other) }
        }
    };

    ( $t:ty; $( $fname:ident => $libm:ident $( : $arity:tt )? ),* $(,)? ) => {
        $(
            libm_or_std!(@make $t, $fname, $libm $( : $arity )?);
        )*
    };
}

impl Real for f64 {
    const ZERO: Self = 0.0;
    const ONE: Self = 1.0;
    const TWO: Self = 2.0;
    const PI: Self = core::f64::consts::PI;
    const TAU: Self = core::f64::consts::TAU;
    const DEGENERACY_TOLERANCE: Self = 1e-10;

    #[inline]
    fn from_f64(value: f64) -> Self {
        value
    }

    #[inline]
    fn to_f64(self) -> f64 {
        self
    }

    #[inline]
    fn is_finite(self) -> bool {
        f64::is_finite(self)
    }

    libm_or_std!(
        f64;
        sqrt => sqrt,
        cbrt => cbrt,
        abs => fabs,
        sin => sin,
        cos => cos,
        acos => acos,
        atan2 => atan2: 2,
    );
}

impl Real for f32 {
    const ZERO: Self = 0.0;
    const ONE: Self = 1.0;
    const TWO: Self = 2.0;
    const PI: Self = core::f32::consts::PI;
    const TAU: Self = core::f32::consts::TAU;
    const DEGENERACY_TOLERANCE: Self = 1e-5;

    #[inline]
    fn from_f64(value: f64) -> Self {
        value as f32
    }

    #[inline]
    fn to_f64(self) -> f64 {
        f64::from(self)
    }

    #[inline]
    fn is_finite(self) -> bool {
        f32::is_finite(self)
    }

    libm_or_std!(
        f32;
        sqrt => sqrtf,
        cbrt => cbrtf,
        abs => fabsf,
        sin => sinf,
        cos => cosf,
        acos => acosf,
        atan2 => atan2f: 2,
    );
}
