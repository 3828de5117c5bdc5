use serde::{Deserialize, Serialize};

use crate::constants::SOLAR_LUMINOSITY_W;

/// Bolometric luminosity, stored in watts.
///
/// ```rust
/// use units::Luminosity;
///
/// let sun = Luminosity::from_solar(1.0);
/// assert_eq!(sun.to_watts(), 3.828e26);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Luminosity(f64); // Base unit: Watts

impl Luminosity {
    pub fn from_watts(value: f64) -> Self {
        Self(value)
    }

    pub fn from_solar(value: f64) -> Self {
        Self(value * SOLAR_LUMINOSITY_W)
    }

    pub fn to_watts(&self) -> f64 {
        self.0
    }

    pub fn to_solar(&self) -> f64 {
        self.0 / SOLAR_LUMINOSITY_W
    }

    pub fn is_finite(&self) -> bool {
        self.0.is_finite()
    }
}
