use serde::{Deserialize, Serialize};

use crate::assumptions::PlanetAssumptions;

/// Settings that control how missing values are filled in.
///
/// ```rust
/// use catalogue::ResolutionConfig;
///
/// let measured_only = ResolutionConfig {
///     estimate_missing_values: false,
///     ..Default::default()
/// };
/// assert!(ResolutionConfig::default().estimate_missing_values);
/// assert!(!measured_only.estimate_missing_values);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolutionConfig {
    /// Compute missing values from other parameters. When off, every
    /// accessor returns only what the catalogue records.
    pub estimate_missing_values: bool,
    pub assumptions: PlanetAssumptions,
}

impl Default for ResolutionConfig {
    fn default() -> Self {
        Self {
            estimate_missing_values: true,
            assumptions: PlanetAssumptions::default(),
        }
    }
}

impl ResolutionConfig {
    pub fn measured_only() -> Self {
        Self {
            estimate_missing_values: false,
            ..Self::default()
        }
    }
}
