use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

/// Mass of the Sun in kilograms (1.98847 × 10³⁰ kg)
pub const SOLAR_MASS_KG: f64 = 1.98847e30;

/// Mass of the Earth in kilograms (5.9722 × 10²⁴ kg)
pub const EARTH_MASS_KG: f64 = 5.9722e24;

/// Mass of Jupiter in kilograms (1.89813 × 10²⁷ kg)
pub const JUPITER_MASS_KG: f64 = 1.89813e27;

/// A physical mass quantity using f64 precision.
///
/// Solar masses are the base unit. Catalogue stellar masses arrive in M☉ and
/// planetary masses in M_J, so both convert with a single multiplication.
///
/// # Examples
///
/// ```rust
/// use units::Mass;
///
/// let host = Mass::from_solar_masses(0.98);
/// let planet = Mass::from_jupiter_masses(3.9);
///
/// assert!(planet < host);
/// let in_kg = planet.to_kg();
/// assert!(in_kg > 7.0e27);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Mass(f64); // Base unit: Solar Masses

impl Mass {
    /// Creates a zero mass value
    pub fn zero() -> Self {
        Self(0.0)
    }

    /// Creates a new `Mass` from a value in solar masses.
    pub fn from_solar_masses(value: f64) -> Self {
        Self(value)
    }

    /// Creates a new `Mass` from a value in Jupiter masses.
    ///
    /// One Jupiter mass is roughly 9.55 × 10⁻⁴ M☉.
    pub fn from_jupiter_masses(value: f64) -> Self {
        Self(value * JUPITER_MASS_KG / SOLAR_MASS_KG)
    }

    /// Creates a new `Mass` from a value in Earth masses.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use units::Mass;
    ///
    /// let earth = Mass::from_earth_masses(1.0);
    /// assert!((earth.to_kg() - 5.9722e24).abs() < 1e18);
    /// ```
    pub fn from_earth_masses(value: f64) -> Self {
        Self(value * EARTH_MASS_KG / SOLAR_MASS_KG)
    }

    /// Creates a new `Mass` from a value in kilograms.
    pub fn from_kg(value: f64) -> Self {
        Self(value / SOLAR_MASS_KG)
    }

    pub fn from_grams(value: f64) -> Self {
        Self::from_kg(value / 1000.0)
    }

    /// Returns the mass value in solar masses.
    pub fn to_solar_masses(&self) -> f64 {
        self.0
    }

    /// Converts the mass to Jupiter masses.
    pub fn to_jupiter_masses(&self) -> f64 {
        self.0 * SOLAR_MASS_KG / JUPITER_MASS_KG
    }

    /// Converts the mass to Earth masses.
    pub fn to_earth_masses(&self) -> f64 {
        self.0 * SOLAR_MASS_KG / EARTH_MASS_KG
    }

    /// Converts the mass to kilograms, the unit every relation computes in.
    pub fn to_kg(&self) -> f64 {
        self.0 * SOLAR_MASS_KG
    }

    pub fn to_grams(&self) -> f64 {
        self.to_kg() * 1000.0
    }

    /// Returns true when the underlying value is finite
    pub fn is_finite(&self) -> bool {
        self.0.is_finite()
    }
}

impl Add for Mass {
    type Output = Mass;

    fn add(self, rhs: Mass) -> Mass {
        Mass(self.0 + rhs.0)
    }
}

impl Sub for Mass {
    type Output = Mass;

    fn sub(self, rhs: Mass) -> Mass {
        Mass(self.0 - rhs.0)
    }
}

impl Mul<f64> for Mass {
    type Output = Mass;

    fn mul(self, rhs: f64) -> Mass {
        Mass(self.0 * rhs)
    }
}

impl Div<f64> for Mass {
    type Output = Mass;

    fn div(self, rhs: f64) -> Mass {
        Mass(self.0 / rhs)
    }
}

/// Division of Mass by Mass returns a dimensionless ratio
impl Div for Mass {
    type Output = f64;

    fn div(self, rhs: Mass) -> f64 {
        self.0 / rhs.0
    }
}

/// Allow f64 * Mass (commutative multiplication)
impl Mul<Mass> for f64 {
    type Output = Mass;

    fn mul(self, rhs: Mass) -> Mass {
        rhs * self
    }
}

impl std::iter::Sum for Mass {
    fn sum<I: Iterator<Item = Mass>>(iter: I) -> Mass {
        iter.fold(Mass::zero(), |acc, m| acc + m)
    }
}
