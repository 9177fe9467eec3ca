//! Physical constants, canonical units, epochs and the leap-second table.
//!
//! Everything here lives in one immutable [`PhysicalConstants`] value,
//! [`PhysicalConstants::STANDARD`]. Pass it (or your own instance) by
//! reference to whatever needs it:
//!
//! ```
//! use keplerian_state::PhysicalConstants;
//!
//! let constants = PhysicalConstants::get();
//! let mu = constants.mu_earth();
//!
//! assert!((mu - 3.986004e14).abs() / mu < 1e-6);
//! ```

use crate::Real;

/// Universal and Earth constants, in SI units.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PhysicalConstants {
    /// Newtonian constant of gravitation, in m^3 kg^-1 s^-2.
    pub gravitational_constant: f64,
    /// Mass of the Earth, in kilograms.
    pub earth_mass: f64,
    /// Mean radius of the Earth, in meters.
    pub earth_radius: f64,
    /// Equatorial radius of the Earth, in meters.
    pub earth_equatorial_radius: f64,
    /// Polar radius of the Earth, in meters.
    pub earth_polar_radius: f64,
    /// Flattening of the Earth ellipsoid.
    pub earth_flattening: f64,

    /// Canonical distance unit (mu = 1 system), in meters.
    pub canonical_distance_unit: f64,
    /// Canonical velocity unit: circular orbit speed at the surface, in m/s.
    pub canonical_velocity_unit: f64,
    /// Canonical time unit, in seconds.
    pub canonical_time_unit: f64,

    /// Unix time of the J2000 epoch (2000-01-01 12:00:00).
    pub j2000_unix: f64,
    /// Julian date (TT) of the J2000 epoch.
    pub j2000_julian_date: f64,
    /// Offset between TAI and J2000, in days.
    pub j2000_tai_offset_days: f64,
    /// Offset between UTC and J2000, in days.
    pub j2000_utc_offset_days: f64,
    /// Seconds TAI runs ahead of GPS time.
    pub gps_to_tai_seconds: f64,

    /// Leap seconds inserted into UTC.
    pub leap_seconds: LeapSecondTable,
}

impl PhysicalConstants {
    /// The values this crate uses by default.
    pub const STANDARD: Self = Self {
        gravitational_constant: 6.67430e-11,
        earth_mass: 5.972168e24,
        earth_radius: 6371.0e3,
        earth_equatorial_radius: 6378.137e3,
        earth_polar_radius: 6356.752e3,
        earth_flattening: 1.0 / 298.257222101,

        canonical_distance_unit: 6371.0e3,
        canonical_velocity_unit: 7.910e3,
        canonical_time_unit: 805.5,

        j2000_unix: 946728000.0,
        j2000_julian_date: 2451545.0,
        j2000_tai_offset_days: 3.725e-4,
        j2000_utc_offset_days: 7.428704e-4,
        gps_to_tai_seconds: 18.0,

        leap_seconds: LeapSecondTable::STANDARD,
    };

    /// Returns the process-wide default constants.
    #[inline]
    pub fn get() -> &'static Self {
        static STANDARD: PhysicalConstants = PhysicalConstants::STANDARD;
        &STANDARD
    }

    /// Gravitational parameter of the Earth, `G * M`, in m^3 s^-2.
    #[doc(alias = "mu")]
    #[inline]
    pub fn mu_earth(&self) -> f64 {
        self.gravitational_constant * self.earth_mass
    }

    /// [`mu_earth`][Self::mu_earth], converted into the requested precision.
    #[inline]
    pub fn mu_earth_as<T: Real>(&self) -> T {
        T::from_f64(self.mu_earth())
    }
}

impl Default for PhysicalConstants {
    fn default() -> Self {
        Self::STANDARD
    }
}

/// Which of the two possible leap-second dates of a year got one.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LeapSecondInsertion {
    /// A leap second was added at the end of June 30.
    pub june: bool,
    /// A leap second was added at the end of December 31.
    pub december: bool,
}

impl LeapSecondInsertion {
    const fn new(june: u8, december: u8) -> Self {
        Self {
            june: june != 0,
            december: december != 0,
        }
    }

    /// Number of leap seconds added during the year.
    pub const fn count(&self) -> u32 {
        self.june as u32 + self.december as u32
    }
}

/// A year-by-year record of leap-second insertions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LeapSecondTable {
    first_year: i32,
    insertions: &'static [LeapSecondInsertion],
}

/// Offset between TAI and UTC when leap seconds were introduced in 1972.
const INITIAL_TAI_MINUS_UTC: u32 = 10;

#[rustfmt::skip]
const LEAP_SECONDS_SINCE_1972: [LeapSecondInsertion; 52] = {
    const fn y(june: u8, december: u8) -> LeapSecondInsertion {
        LeapSecondInsertion::new(june, december)
    }
    [
        y(1, 1), // 1972
        y(0, 1), y(0, 1), y(0, 1), y(0, 1), y(0, 1), y(0, 1), y(0, 1),
        y(0, 0), // 1980
        y(1, 0), y(1, 0), y(1, 0), y(0, 0),
        y(1, 0), // 1985
        y(0, 0), y(0, 1), y(0, 0), y(0, 1),
        y(0, 1), // 1990
        y(0, 0), y(1, 0), y(1, 0), y(1, 0),
        y(0, 1), // 1995
        y(0, 0), y(1, 0), y(0, 1), y(0, 0),
        y(0, 0), // 2000
        y(0, 0), y(0, 0), y(0, 0), y(0, 0),
        y(0, 1), // 2005
        y(0, 0), y(0, 0), y(0, 1), y(0, 0),
        y(0, 0), // 2010
        y(0, 0), y(1, 0), y(0, 0), y(0, 0),
        y(1, 0), // 2015
        y(0, 1), y(0, 0), y(0, 0), y(0, 0),
        y(0, 0), // 2020
        y(0, 0), y(0, 0), y(0, 0),
    ]
};

impl LeapSecondTable {
    /// Leap seconds from 1972 through 2023.
    pub const STANDARD: Self = Self {
        first_year: 1972,
        insertions: &LEAP_SECONDS_SINCE_1972,
    };

    /// First year covered by the table.
    pub const fn first_year(&self) -> i32 {
        self.first_year
    }

    /// Last year covered by the table.
    pub const fn last_year(&self) -> i32 {
        self.first_year + self.insertions.len() as i32 - 1
    }

    /// The leap seconds inserted during `year`, or `None` if the table
    /// does not cover that year.
    ///
    /// # Example
    /// ```
    /// use keplerian_state::LeapSecondTable;
    ///
    /// let table = LeapSecondTable::STANDARD;
    /// let insertion = table.insertions(2016).unwrap();
    /// assert!(!insertion.june && insertion.december);
    /// assert_eq!(table.insertions(1960), None);
    /// ```
    pub fn insertions(&self, year: i32) -> Option<LeapSecondInsertion> {
        let index = usize::try_from(year.checked_sub(self.first_year)?).ok()?;
        self.insertions.get(index).copied()
    }

    /// Leap seconds inserted from the first year up to and including `year`.
    ///
    /// Years past the end of the table count as having no insertions;
    /// years before the start yield zero.
    pub fn total_inserted_through(&self, year: i32) -> u32 {
        let Some(covered) = year.checked_sub(self.first_year) else {
            return 0;
        };
        let Ok(covered) = usize::try_from(covered) else {
            return 0;
        };

        self.insertions
            .iter()
            .take(covered.saturating_add(1))
            .map(LeapSecondInsertion::count)
            .sum()
    }

    /// `TAI - UTC`, in seconds, after the last possible insertion of `year`.
    ///
    /// Returns `None` for years before the table starts, when UTC was not
    /// yet stepped by whole seconds.
    ///
    /// # Example
    /// ```
    /// use keplerian_state::LeapSecondTable;
    ///
    /// assert_eq!(LeapSecondTable::STANDARD.tai_minus_utc_after(2016), Some(37));
    /// ```
    pub fn tai_minus_utc_after(&self, year: i32) -> Option<u32> {
        if year < self.first_year {
            return None;
        }
        Some(INITIAL_TAI_MINUS_UTC + self.total_inserted_through(year))
    }
}

impl Default for LeapSecondTable {
    fn default() -> Self {
        Self::STANDARD
    }
}
