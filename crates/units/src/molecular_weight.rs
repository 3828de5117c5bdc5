use serde::{Deserialize, Serialize};

use crate::constants::ATOMIC_MASS_UNIT_KG;

/// Mean molecular weight of an atmosphere in atomic mass units (u).
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MolecularWeight(f64);

impl MolecularWeight {
    pub fn from_amu(value: f64) -> Self {
        Self(value)
    }

    pub fn to_amu(&self) -> f64 {
        self.0
    }

    /// Mass of one mean particle in kilograms
    pub fn to_kg(&self) -> f64 {
        self.0 * ATOMIC_MASS_UNIT_KG
    }

    pub fn is_finite(&self) -> bool {
        self.0.is_finite()
    }
}
