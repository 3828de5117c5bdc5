use std::f64::consts::PI;

use units::constants::STEFAN_BOLTZMANN;
use units::{Length, Luminosity, Temperature};

use crate::error::EquationError;
use crate::relation::{finite, given, single_unknown, solve, Relation};

const NAME: &str = "StellarLuminosity";
const VARIABLES: &[&str] = &["R", "T", "L"];

/// Stefan-Boltzmann luminosity of a star, `L = 4π R² σ T⁴`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StellarLuminosity {
    radius: Option<Length>,
    temperature: Option<Temperature>,
    luminosity: Option<Luminosity>,
    unknown: Option<&'static str>,
}

impl StellarLuminosity {
    pub fn new(
        radius: Option<Length>,
        temperature: Option<Temperature>,
        luminosity: Option<Luminosity>,
    ) -> Result<Self, EquationError> {
        let unknown = single_unknown(
            NAME,
            &[
                ("R", radius.is_some()),
                ("T", temperature.is_some()),
                ("L", luminosity.is_some()),
            ],
        )?;
        Ok(Self {
            radius,
            temperature,
            luminosity,
            unknown,
        })
    }

    pub fn luminosity(&self) -> Result<Luminosity, EquationError> {
        solve(self.unknown, "L", self.luminosity, || {
            let r = given(NAME, "R", self.radius)?.to_m();
            let t = given(NAME, "T", self.temperature)?;
            let l = 4.0 * PI * r * r * STEFAN_BOLTZMANN * t.powi(4);
            Ok(Luminosity::from_watts(finite(NAME, "L", l)?))
        })
    }

    pub fn radius(&self) -> Result<Length, EquationError> {
        solve(self.unknown, "R", self.radius, || {
            let l = given(NAME, "L", self.luminosity)?.to_watts();
            let t = given(NAME, "T", self.temperature)?;
            let r = (l / (4.0 * PI * STEFAN_BOLTZMANN * t.powi(4))).sqrt();
            Ok(Length::from_meters(finite(NAME, "R", r)?))
        })
    }

    pub fn temperature(&self) -> Result<Temperature, EquationError> {
        solve(self.unknown, "T", self.temperature, || {
            let l = given(NAME, "L", self.luminosity)?.to_watts();
            let r = given(NAME, "R", self.radius)?.to_m();
            let t = (l / (4.0 * PI * r * r * STEFAN_BOLTZMANN)).powf(0.25);
            Ok(Temperature::from_kelvin(finite(NAME, "T", t)?))
        })
    }
}

impl Relation for StellarLuminosity {
    fn name(&self) -> &'static str {
        NAME
    }

    fn variables(&self) -> &'static [&'static str] {
        VARIABLES
    }

    fn unknown(&self) -> Option<&'static str> {
        self.unknown
    }
}
