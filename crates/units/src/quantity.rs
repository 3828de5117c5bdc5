use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Mul;

use crate::constants::{ATOMIC_MASS_UNIT_KG, SOLAR_LUMINOSITY_W};
use crate::error::UnitError;
use crate::length::{AU_M, EARTH_RADIUS_M, JUPITER_RADIUS_M, PARSEC_M, SOLAR_RADIUS_M};
use crate::mass::{EARTH_MASS_KG, JUPITER_MASS_KG, SOLAR_MASS_KG};
use crate::time::{DAYS_PER_YEAR, MINUTES_PER_DAY, SECONDS_PER_DAY};
use crate::{
    Acceleration, Angle, Density, Length, Luminosity, Mass, MolecularWeight, Temperature, Time,
};

/// The physical dimension a [`Unit`] measures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Dimension {
    Dimensionless,
    Mass,
    Length,
    Time,
    Temperature,
    Angle,
    Density,
    Acceleration,
    Luminosity,
    MolecularWeight,
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Dimension::Dimensionless => "dimensionless",
            Dimension::Mass => "mass",
            Dimension::Length => "length",
            Dimension::Time => "time",
            Dimension::Temperature => "temperature",
            Dimension::Angle => "angle",
            Dimension::Density => "density",
            Dimension::Acceleration => "acceleration",
            Dimension::Luminosity => "luminosity",
            Dimension::MolecularWeight => "molecular weight",
        };
        write!(f, "{}", name)
    }
}

/// Units a catalogue value can be tagged with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Unit {
    Dimensionless,
    SolarMass,
    JupiterMass,
    EarthMass,
    Kilogram,
    AstronomicalUnit,
    Parsec,
    SolarRadius,
    JupiterRadius,
    EarthRadius,
    Kilometre,
    Metre,
    Day,
    Minute,
    Second,
    Year,
    Gigayear,
    JulianDate,
    Kelvin,
    Degree,
    Radian,
    GramPerCm3,
    MetrePerS2,
    Watt,
    SolarLuminosity,
    AtomicMassUnit,
}

impl Unit {
    pub fn dimension(&self) -> Dimension {
        match self {
            Unit::Dimensionless => Dimension::Dimensionless,
            Unit::SolarMass | Unit::JupiterMass | Unit::EarthMass | Unit::Kilogram => {
                Dimension::Mass
            }
            Unit::AstronomicalUnit
            | Unit::Parsec
            | Unit::SolarRadius
            | Unit::JupiterRadius
            | Unit::EarthRadius
            | Unit::Kilometre
            | Unit::Metre => Dimension::Length,
            Unit::Day
            | Unit::Minute
            | Unit::Second
            | Unit::Year
            | Unit::Gigayear
            | Unit::JulianDate => Dimension::Time,
            Unit::Kelvin => Dimension::Temperature,
            Unit::Degree | Unit::Radian => Dimension::Angle,
            Unit::GramPerCm3 => Dimension::Density,
            Unit::MetrePerS2 => Dimension::Acceleration,
            Unit::Watt | Unit::SolarLuminosity => Dimension::Luminosity,
            Unit::AtomicMassUnit => Dimension::MolecularWeight,
        }
    }

    /// Factor converting a value in this unit to the SI-like reference unit
    /// of its dimension (kg, m, s, K, rad, g/cm³, m/s², W, kg per particle).
    fn reference_factor(&self) -> f64 {
        match self {
            Unit::Dimensionless => 1.0,
            Unit::SolarMass => SOLAR_MASS_KG,
            Unit::JupiterMass => JUPITER_MASS_KG,
            Unit::EarthMass => EARTH_MASS_KG,
            Unit::Kilogram => 1.0,
            Unit::AstronomicalUnit => AU_M,
            Unit::Parsec => PARSEC_M,
            Unit::SolarRadius => SOLAR_RADIUS_M,
            Unit::JupiterRadius => JUPITER_RADIUS_M,
            Unit::EarthRadius => EARTH_RADIUS_M,
            Unit::Kilometre => 1000.0,
            Unit::Metre => 1.0,
            Unit::Day | Unit::JulianDate => SECONDS_PER_DAY,
            Unit::Minute => SECONDS_PER_DAY / MINUTES_PER_DAY,
            Unit::Second => 1.0,
            Unit::Year => DAYS_PER_YEAR * SECONDS_PER_DAY,
            Unit::Gigayear => 1.0e9 * DAYS_PER_YEAR * SECONDS_PER_DAY,
            Unit::Kelvin => 1.0,
            Unit::Degree => std::f64::consts::PI / 180.0,
            Unit::Radian => 1.0,
            Unit::GramPerCm3 => 1.0,
            Unit::MetrePerS2 => 1.0,
            Unit::Watt => 1.0,
            Unit::SolarLuminosity => SOLAR_LUMINOSITY_W,
            Unit::AtomicMassUnit => ATOMIC_MASS_UNIT_KG,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Unit::Dimensionless => "",
            Unit::SolarMass => "M_sun",
            Unit::JupiterMass => "M_j",
            Unit::EarthMass => "M_earth",
            Unit::Kilogram => "kg",
            Unit::AstronomicalUnit => "AU",
            Unit::Parsec => "pc",
            Unit::SolarRadius => "R_sun",
            Unit::JupiterRadius => "R_j",
            Unit::EarthRadius => "R_earth",
            Unit::Kilometre => "km",
            Unit::Metre => "m",
            Unit::Day => "d",
            Unit::Minute => "min",
            Unit::Second => "s",
            Unit::Year => "yr",
            Unit::Gigayear => "Gyr",
            Unit::JulianDate => "JD",
            Unit::Kelvin => "K",
            Unit::Degree => "deg",
            Unit::Radian => "rad",
            Unit::GramPerCm3 => "g/cm3",
            Unit::MetrePerS2 => "m/s2",
            Unit::Watt => "W",
            Unit::SolarLuminosity => "L_sun",
            Unit::AtomicMassUnit => "u",
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A numeric value tagged with a [`Unit`].
///
/// Unlike the typed newtypes, a `Quantity` carries its unit at runtime, so
/// dimension errors surface as [`UnitError::DimensionMismatch`] instead of at
/// compile time. Conversion into a typed unit goes through `TryFrom`.
///
/// ```rust
/// use units::{Mass, Quantity, Unit};
///
/// let mass = Quantity::new(3.9, Unit::JupiterMass);
/// let in_earths = mass.rescale(Unit::EarthMass).unwrap();
/// assert!((in_earths.value() - 1239.5).abs() < 1.0);
///
/// let typed = Mass::try_from(mass).unwrap();
/// assert!((typed.to_jupiter_masses() - 3.9).abs() < 1e-12);
///
/// assert!(mass.rescale(Unit::Kelvin).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Quantity {
    value: f64,
    unit: Unit,
}

impl Quantity {
    pub fn new(value: f64, unit: Unit) -> Self {
        Self { value, unit }
    }

    pub fn dimensionless(value: f64) -> Self {
        Self::new(value, Unit::Dimensionless)
    }

    /// Parses catalogue text as a finite float and tags it with `unit`.
    /// `"nan"` and `"inf"` are rejected like any other unparsable text.
    pub fn parse(text: &str, unit: Unit) -> Result<Self, UnitError> {
        let value = text
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|value| value.is_finite())
            .ok_or_else(|| UnitError::Parse {
                input: text.to_string(),
                expected: "a finite floating point number",
            })?;
        Ok(Self::new(value, unit))
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn unit(&self) -> Unit {
        self.unit
    }

    pub fn dimension(&self) -> Dimension {
        self.unit.dimension()
    }

    /// Expresses this quantity in another unit of the same dimension.
    pub fn rescale(&self, unit: Unit) -> Result<Quantity, UnitError> {
        self.ensure_dimension(unit.dimension())?;
        if unit == self.unit {
            return Ok(*self);
        }
        let value = self.value * self.unit.reference_factor() / unit.reference_factor();
        Ok(Quantity::new(value, unit))
    }

    /// Adds two quantities, expressing the result in `self`'s unit.
    pub fn checked_add(&self, rhs: Quantity) -> Result<Quantity, UnitError> {
        let rhs = rhs.rescale(self.unit)?;
        Ok(Quantity::new(self.value + rhs.value, self.unit))
    }

    /// Subtracts `rhs`, expressing the result in `self`'s unit.
    pub fn checked_sub(&self, rhs: Quantity) -> Result<Quantity, UnitError> {
        let rhs = rhs.rescale(self.unit)?;
        Ok(Quantity::new(self.value - rhs.value, self.unit))
    }

    /// Returns the raw value of a dimensionless quantity.
    pub fn as_dimensionless(&self) -> Result<f64, UnitError> {
        self.ensure_dimension(Dimension::Dimensionless)?;
        Ok(self.value)
    }

    fn ensure_dimension(&self, expected: Dimension) -> Result<(), UnitError> {
        let found = self.dimension();
        if found == expected {
            Ok(())
        } else {
            Err(UnitError::DimensionMismatch { expected, found })
        }
    }
}

impl Mul<f64> for Quantity {
    type Output = Quantity;

    fn mul(self, rhs: f64) -> Quantity {
        Quantity::new(self.value * rhs, self.unit)
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.unit {
            Unit::Dimensionless => write!(f, "{}", self.value),
            unit => write!(f, "{} {}", self.value, unit),
        }
    }
}

/// Conversions between `Quantity` and the typed newtypes. Each typed unit
/// has one canonical `Unit` it is read from and written as.
macro_rules! typed_quantity {
    ($typed:ty, $unit:expr, $from:path, $to:ident) => {
        impl TryFrom<Quantity> for $typed {
            type Error = UnitError;

            fn try_from(quantity: Quantity) -> Result<Self, Self::Error> {
                Ok($from(quantity.rescale($unit)?.value()))
            }
        }

        impl From<$typed> for Quantity {
            fn from(value: $typed) -> Self {
                Quantity::new(value.$to(), $unit)
            }
        }
    };
}

typed_quantity!(Mass, Unit::SolarMass, Mass::from_solar_masses, to_solar_masses);
typed_quantity!(Length, Unit::AstronomicalUnit, Length::from_au, to_au);
typed_quantity!(Time, Unit::Day, Time::from_days, to_days);
typed_quantity!(Temperature, Unit::Kelvin, Temperature::from_kelvin, to_kelvin);
typed_quantity!(Angle, Unit::Degree, Angle::from_degrees, to_degrees);
typed_quantity!(
    Density,
    Unit::GramPerCm3,
    Density::from_grams_per_cm3,
    to_grams_per_cm3
);
typed_quantity!(
    Acceleration,
    Unit::MetrePerS2,
    Acceleration::from_m_per_s2,
    to_m_per_s2
);
typed_quantity!(Luminosity, Unit::Watt, Luminosity::from_watts, to_watts);
typed_quantity!(
    MolecularWeight,
    Unit::AtomicMassUnit,
    MolecularWeight::from_amu,
    to_amu
);
