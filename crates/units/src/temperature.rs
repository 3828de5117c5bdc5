use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

/// Effective temperature of the Sun in Kelvin
pub const SOLAR_TEMPERATURE_K: f64 = 5772.0;

/// A physical temperature quantity using f64 precision.
///
/// Kelvin is the base unit. Stellar effective temperatures and planetary
/// equilibrium temperatures are both catalogued in Kelvin, and the radiative
/// relations (`σT⁴`, `kT/μg`) need an absolute scale.
///
/// # Examples
///
/// ```rust
/// use units::Temperature;
///
/// let star = Temperature::from_kelvin(5370.0);
/// let planet = Temperature::from_kelvin(339.6);
///
/// let ratio = planet / star;
/// assert!(ratio < 0.1);
/// assert!((planet.to_celsius() - 66.45).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Temperature(f64); // Base unit: Kelvin

impl Temperature {
    /// Creates a new `Temperature` from a value in Kelvin.
    pub fn from_kelvin(value: f64) -> Self {
        Self(value)
    }

    /// Creates a new `Temperature` from a value in Celsius.
    ///
    /// Converts Celsius to Kelvin: K = °C + 273.15
    pub fn from_celsius(value: f64) -> Self {
        Self(value + 273.15)
    }

    /// Returns the temperature value in Kelvin.
    pub fn to_kelvin(&self) -> f64 {
        self.0
    }

    /// Converts the temperature to Celsius.
    pub fn to_celsius(&self) -> f64 {
        self.0 - 273.15
    }

    /// Temperature expressed in units of the solar effective temperature
    pub fn to_solar(&self) -> f64 {
        self.0 / SOLAR_TEMPERATURE_K
    }

    /// Raise to integer power
    pub fn powi(&self, n: i32) -> f64 {
        self.0.powi(n)
    }

    /// Power function
    pub fn powf(&self, n: f64) -> f64 {
        self.0.powf(n)
    }

    /// Returns true when the underlying value is finite
    pub fn is_finite(&self) -> bool {
        self.0.is_finite()
    }
}

impl Add for Temperature {
    type Output = Temperature;

    fn add(self, rhs: Temperature) -> Temperature {
        Temperature(self.0 + rhs.0)
    }
}

impl Sub for Temperature {
    type Output = Temperature;

    fn sub(self, rhs: Temperature) -> Temperature {
        Temperature(self.0 - rhs.0)
    }
}

impl Mul<f64> for Temperature {
    type Output = Temperature;

    fn mul(self, rhs: f64) -> Temperature {
        Temperature(self.0 * rhs)
    }
}

impl Div<f64> for Temperature {
    type Output = Temperature;

    fn div(self, rhs: f64) -> Temperature {
        Temperature(self.0 / rhs)
    }
}

/// Division of Temperature by Temperature returns a dimensionless ratio
impl Div for Temperature {
    type Output = f64;

    fn div(self, rhs: Temperature) -> f64 {
        self.0 / rhs.0
    }
}

/// Allow f64 * Temperature (commutative multiplication)
impl Mul<Temperature> for f64 {
    type Output = Temperature;

    fn mul(self, rhs: Temperature) -> Temperature {
        rhs * self
    }
}
