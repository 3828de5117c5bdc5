use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

pub const SECONDS_PER_DAY: f64 = 86_400.0;
pub(crate) const MINUTES_PER_DAY: f64 = 1_440.0;
pub const DAYS_PER_YEAR: f64 = 365.25;

/// Billion years in days
const GYR_TO_DAYS: f64 = 1.0e9 * DAYS_PER_YEAR;

/// A physical time quantity using f64 precision.
///
/// Days are the base unit: orbital periods are catalogued in days and transit
/// epochs are Julian dates. Stellar ages use [`Time::from_gyr`].
///
/// # Examples
///
/// ```rust
/// use units::Time;
///
/// let period = Time::from_days(1.546);
/// let age = Time::from_gyr(7.6);
///
/// assert!((period.to_minutes() - 2226.24).abs() < 1e-6);
/// assert!(age.to_years() > 7.0e9);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Time(f64); // Base unit: Days

impl Time {
    /// Creates a zero time value
    pub fn zero() -> Self {
        Self(0.0)
    }

    /// Creates a new `Time` from a value in days.
    pub fn from_days(value: f64) -> Self {
        Self(value)
    }

    /// Creates a new `Time` from a Julian date. Treated as plain days.
    pub fn from_julian_days(value: f64) -> Self {
        Self(value)
    }

    /// Creates a new `Time` from a value in minutes.
    pub fn from_minutes(value: f64) -> Self {
        Self(value / MINUTES_PER_DAY)
    }

    /// Creates a new `Time` from a value in seconds.
    pub fn from_seconds(value: f64) -> Self {
        Self(value / SECONDS_PER_DAY)
    }

    /// Creates a new `Time` from a value in Julian years.
    pub fn from_years(value: f64) -> Self {
        Self(value * DAYS_PER_YEAR)
    }

    /// Creates a time from a value in billion years (Gyr)
    pub fn from_gyr(value: f64) -> Self {
        Self(value * GYR_TO_DAYS)
    }

    /// Returns the time in days.
    pub fn to_days(&self) -> f64 {
        self.0
    }

    /// Converts the time to minutes.
    pub fn to_minutes(&self) -> f64 {
        self.0 * MINUTES_PER_DAY
    }

    /// Converts the time to seconds.
    pub fn to_seconds(&self) -> f64 {
        self.0 * SECONDS_PER_DAY
    }

    /// Converts the time to Julian years.
    pub fn to_years(&self) -> f64 {
        self.0 / DAYS_PER_YEAR
    }

    /// Returns the time in billion years
    pub fn to_gyr(&self) -> f64 {
        self.0 / GYR_TO_DAYS
    }

    /// Returns true when the underlying value is finite
    pub fn is_finite(&self) -> bool {
        self.0.is_finite()
    }
}

impl Add for Time {
    type Output = Time;

    fn add(self, rhs: Time) -> Time {
        Time(self.0 + rhs.0)
    }
}

impl Sub for Time {
    type Output = Time;

    fn sub(self, rhs: Time) -> Time {
        Time(self.0 - rhs.0)
    }
}

impl Mul<f64> for Time {
    type Output = Time;

    fn mul(self, rhs: f64) -> Time {
        Time(self.0 * rhs)
    }
}

impl Div<f64> for Time {
    type Output = Time;

    fn div(self, rhs: f64) -> Time {
        Time(self.0 / rhs)
    }
}

/// Division of Time by Time returns a dimensionless ratio
impl Div for Time {
    type Output = f64;

    fn div(self, rhs: Time) -> f64 {
        self.0 / rhs.0
    }
}

/// Allow f64 * Time (commutative multiplication)
impl Mul<Time> for f64 {
    type Output = Time;

    fn mul(self, rhs: Time) -> Time {
        rhs * self
    }
}
