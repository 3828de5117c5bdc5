//! Planet classification and the physical values assumed per class when a
//! planet lacks a measurement.
//!
//! Planets are sorted into a size class (by mass when known, else by radius)
//! and a temperature class. Each class carries an assumed albedo, mean
//! molecular weight and bulk density.
//!
//! | Size class  | Mass        | Radius     | μ (u) | Albedo | ρ (g/cm³) |
//! |-------------|-------------|------------|-------|--------|-----------|
//! | Super-Earth | < 10 M⊕     | < 3 R⊕     | 18    | 0.3    | 4.0       |
//! | Neptune     | 10 - 20 M⊕  | 3 - 6 R⊕   | 2.3   | 0.1    | 1.6       |
//! | Jupiter     | ≥ 20 M⊕     | ≥ 6 R⊕     | 2     | 0.1    | 1.3       |
//!
//! | Temperature class | Temperature   | Albedo |
//! |-------------------|---------------|--------|
//! | Cold              | < 800 K       | 0.3    |
//! | Warm              | 800 - 2000 K  | 0.3    |
//! | Hot               | ≥ 2000 K      | 0.1    |

use std::fmt;

use serde::{Deserialize, Serialize};
use units::{Density, Length, Mass, MolecularWeight, Temperature};

/// Size regime of a planet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SizeClass {
    SuperEarth,
    Neptune,
    Jupiter,
}

impl SizeClass {
    pub fn name(&self) -> &'static str {
        match self {
            Self::SuperEarth => "Super-Earth",
            Self::Neptune => "Neptune",
            Self::Jupiter => "Jupiter",
        }
    }
}

impl fmt::Display for SizeClass {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TemperatureClass {
    Cold,
    Warm,
    Hot,
}

impl TemperatureClass {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Cold => "Cold",
            Self::Warm => "Warm",
            Self::Hot => "Hot",
        }
    }
}

impl fmt::Display for TemperatureClass {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A value assumed for each size class.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PerSize<T> {
    pub super_earth: T,
    pub neptune: T,
    pub jupiter: T,
}

impl<T: Copy> PerSize<T> {
    pub fn get(&self, class: SizeClass) -> T {
        match class {
            SizeClass::SuperEarth => self.super_earth,
            SizeClass::Neptune => self.neptune,
            SizeClass::Jupiter => self.jupiter,
        }
    }
}

/// A value assumed for each temperature class.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PerTemperature<T> {
    pub cold: T,
    pub warm: T,
    pub hot: T,
}

impl<T: Copy> PerTemperature<T> {
    pub fn get(&self, class: TemperatureClass) -> T {
        match class {
            TemperatureClass::Cold => self.cold,
            TemperatureClass::Warm => self.warm,
            TemperatureClass::Hot => self.hot,
        }
    }
}

/// Class boundaries and per-class values used when a planet parameter has to
/// be assumed. Upper limits are exclusive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlanetAssumptions {
    pub super_earth_max_mass: Mass,
    pub neptune_max_mass: Mass,
    pub super_earth_max_radius: Length,
    pub neptune_max_radius: Length,
    pub cold_max_temperature: Temperature,
    pub warm_max_temperature: Temperature,
    pub albedo_by_size: PerSize<f64>,
    pub albedo_by_temperature: PerTemperature<f64>,
    pub mean_molecular_weight: PerSize<MolecularWeight>,
    pub density: PerSize<Density>,
}

impl Default for PlanetAssumptions {
    fn default() -> Self {
        Self {
            super_earth_max_mass: Mass::from_earth_masses(10.0),
            neptune_max_mass: Mass::from_earth_masses(20.0),
            super_earth_max_radius: Length::from_earth_radii(3.0),
            neptune_max_radius: Length::from_earth_radii(6.0),
            cold_max_temperature: Temperature::from_kelvin(800.0),
            warm_max_temperature: Temperature::from_kelvin(2000.0),
            albedo_by_size: PerSize {
                super_earth: 0.3,
                neptune: 0.1,
                jupiter: 0.1,
            },
            albedo_by_temperature: PerTemperature {
                cold: 0.3,
                warm: 0.3,
                hot: 0.1,
            },
            mean_molecular_weight: PerSize {
                super_earth: MolecularWeight::from_amu(18.0),
                neptune: MolecularWeight::from_amu(2.3),
                jupiter: MolecularWeight::from_amu(2.0),
            },
            density: PerSize {
                super_earth: Density::from_grams_per_cm3(4.0),
                neptune: Density::from_grams_per_cm3(1.6),
                jupiter: Density::from_grams_per_cm3(1.3),
            },
        }
    }
}

impl PlanetAssumptions {
    pub fn size_class_from_mass(&self, mass: Mass) -> SizeClass {
        match mass {
            m if m < self.super_earth_max_mass => SizeClass::SuperEarth,
            m if m < self.neptune_max_mass => SizeClass::Neptune,
            _ => SizeClass::Jupiter,
        }
    }

    pub fn size_class_from_radius(&self, radius: Length) -> SizeClass {
        match radius {
            r if r < self.super_earth_max_radius => SizeClass::SuperEarth,
            r if r < self.neptune_max_radius => SizeClass::Neptune,
            _ => SizeClass::Jupiter,
        }
    }

    pub fn temperature_class(&self, temperature: Temperature) -> TemperatureClass {
        match temperature {
            t if t < self.cold_max_temperature => TemperatureClass::Cold,
            t if t < self.warm_max_temperature => TemperatureClass::Warm,
            _ => TemperatureClass::Hot,
        }
    }

    /// Combined label such as `"Hot Jupiter"`.
    pub fn planet_type(&self, temperature: TemperatureClass, size: SizeClass) -> String {
        format!("{} {}", temperature, size)
    }
}
