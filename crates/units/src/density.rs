use serde::{Deserialize, Serialize};

use crate::{Length, Mass};

/// Volume density in g/cm³
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Density(f64);

impl Density {
    pub fn from_grams_per_cm3(value: f64) -> Self {
        Self(value)
    }

    pub fn from_kg_per_m3(value: f64) -> Self {
        Self(value / 1000.0)
    }

    pub fn to_grams_per_cm3(&self) -> f64 {
        self.0
    }

    pub fn to_kg_per_m3(&self) -> f64 {
        self.0 * 1000.0
    }

    /// Mean density of a uniform sphere of the given mass and radius
    pub fn of_sphere(mass: Mass, radius: Length) -> Self {
        let volume_cm3 = 4.0 / 3.0 * std::f64::consts::PI * radius.to_cm().powi(3);
        Self(mass.to_grams() / volume_cm3)
    }

    /// Returns true when the underlying value is finite
    pub fn is_finite(&self) -> bool {
        self.0.is_finite()
    }
}
