use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

/// Astronomical unit in metres (IAU 2012 exact definition)
pub const AU_M: f64 = 1.495978707e11;

/// Parsec in metres
pub const PARSEC_M: f64 = 3.085_677_581_491_367_3e16;

/// Nominal solar radius in metres (IAU 2015 Resolution B3)
pub const SOLAR_RADIUS_M: f64 = 6.957e8;

/// Jupiter equatorial radius in metres
pub const JUPITER_RADIUS_M: f64 = 6.9911e7;

/// Earth mean radius in metres
pub const EARTH_RADIUS_M: f64 = 6.371e6;

/// A physical length quantity using f64 precision.
///
/// The base unit is the astronomical unit, the natural scale for orbits. Radii
/// of stars and planets are stored in the same type so that ratios such as
/// `a / R_s` or `R_p / R_s` are plain divisions.
///
/// # Examples
///
/// ```rust
/// use units::Length;
///
/// let orbit = Length::from_au(0.014);
/// let star = Length::from_solar_radii(0.211);
///
/// let scaled = orbit / star;
/// assert!(scaled > 14.0 && scaled < 15.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Length(f64); // Base unit: AU

impl Length {
    /// Creates a zero length value
    pub fn zero() -> Self {
        Self(0.0)
    }

    /// Creates a new `Length` from a value in astronomical units.
    pub fn from_au(value: f64) -> Self {
        Self(value)
    }

    /// Creates a new `Length` from a value in parsecs.
    pub fn from_parsecs(value: f64) -> Self {
        Self(value * PARSEC_M / AU_M)
    }

    /// Creates a new `Length` from a value in solar radii.
    pub fn from_solar_radii(value: f64) -> Self {
        Self(value * SOLAR_RADIUS_M / AU_M)
    }

    /// Creates a new `Length` from a value in Jupiter radii.
    pub fn from_jupiter_radii(value: f64) -> Self {
        Self(value * JUPITER_RADIUS_M / AU_M)
    }

    /// Creates a new `Length` from a value in Earth radii.
    pub fn from_earth_radii(value: f64) -> Self {
        Self(value * EARTH_RADIUS_M / AU_M)
    }

    /// Creates a new `Length` from a value in kilometers.
    pub fn from_km(value: f64) -> Self {
        Self(value * 1000.0 / AU_M)
    }

    /// Creates a new `Length` from a value in meters.
    pub fn from_meters(value: f64) -> Self {
        Self(value / AU_M)
    }

    /// Creates a new `Length` from a value in centimeters.
    pub fn from_cm(value: f64) -> Self {
        Self(value / 100.0 / AU_M)
    }

    /// Returns the length in astronomical units.
    pub fn to_au(&self) -> f64 {
        self.0
    }

    /// Converts the length to parsecs.
    pub fn to_parsecs(&self) -> f64 {
        self.0 * AU_M / PARSEC_M
    }

    /// Converts the length to solar radii.
    pub fn to_solar_radii(&self) -> f64 {
        self.0 * AU_M / SOLAR_RADIUS_M
    }

    /// Converts the length to Jupiter radii.
    pub fn to_jupiter_radii(&self) -> f64 {
        self.0 * AU_M / JUPITER_RADIUS_M
    }

    /// Converts the length to Earth radii.
    pub fn to_earth_radii(&self) -> f64 {
        self.0 * AU_M / EARTH_RADIUS_M
    }

    /// Converts the length to kilometers.
    pub fn to_km(&self) -> f64 {
        self.to_m() / 1000.0
    }

    /// Converts the length to meters.
    pub fn to_m(&self) -> f64 {
        self.0 * AU_M
    }

    /// Converts the length to centimeters.
    pub fn to_cm(&self) -> f64 {
        self.to_m() * 100.0
    }

    /// Returns the minimum of two lengths.
    pub fn min(self, other: Self) -> Self {
        if self.0 < other.0 {
            self
        } else {
            other
        }
    }

    /// Returns the maximum of two lengths.
    pub fn max(self, other: Self) -> Self {
        if self.0 > other.0 {
            self
        } else {
            other
        }
    }

    /// Returns true when the underlying value is finite
    pub fn is_finite(&self) -> bool {
        self.0.is_finite()
    }
}

impl Add for Length {
    type Output = Length;

    fn add(self, rhs: Length) -> Length {
        Length(self.0 + rhs.0)
    }
}

impl Sub for Length {
    type Output = Length;

    fn sub(self, rhs: Length) -> Length {
        Length(self.0 - rhs.0)
    }
}

impl Mul<f64> for Length {
    type Output = Length;

    fn mul(self, rhs: f64) -> Length {
        Length(self.0 * rhs)
    }
}

impl Div<f64> for Length {
    type Output = Length;

    fn div(self, rhs: f64) -> Length {
        Length(self.0 / rhs)
    }
}

/// Division of Length by Length returns a dimensionless ratio
impl Div for Length {
    type Output = f64;

    fn div(self, rhs: Self) -> f64 {
        self.0 / rhs.0
    }
}

/// Allow f64 * Length (commutative multiplication)
impl Mul<Length> for f64 {
    type Output = Length;

    fn mul(self, rhs: Length) -> Length {
        rhs * self
    }
}
