use serde::{Deserialize, Serialize};

/// Surface gravity in m/s²
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Acceleration(f64);

impl Acceleration {
    pub fn from_m_per_s2(value: f64) -> Self {
        Self(value)
    }

    /// Creates an acceleration from cgs units (cm/s²), the unit `log g` is
    /// quoted in.
    pub fn from_cm_per_s2(value: f64) -> Self {
        Self(value / 100.0)
    }

    pub fn to_m_per_s2(&self) -> f64 {
        self.0
    }

    pub fn to_cm_per_s2(&self) -> f64 {
        self.0 * 100.0
    }

    pub fn is_finite(&self) -> bool {
        self.0.is_finite()
    }
}
