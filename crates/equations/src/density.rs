use std::f64::consts::PI;

use units::{Density as BulkDensity, Length, Mass};

use crate::error::EquationError;
use crate::relation::{finite, given, single_unknown, solve, Relation};

const NAME: &str = "Density";
const VARIABLES: &[&str] = &["M", "R", "rho"];

/// Mean density of a uniform sphere, `ρ = M / (4/3 π R³)`, in g/cm³.
///
/// Solving for `M` is how planet masses are estimated from a radius and an
/// assumed bulk density.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Density {
    mass: Option<Mass>,
    radius: Option<Length>,
    density: Option<BulkDensity>,
    unknown: Option<&'static str>,
}

impl Density {
    pub fn new(
        mass: Option<Mass>,
        radius: Option<Length>,
        density: Option<BulkDensity>,
    ) -> Result<Self, EquationError> {
        let unknown = single_unknown(
            NAME,
            &[
                ("M", mass.is_some()),
                ("R", radius.is_some()),
                ("rho", density.is_some()),
            ],
        )?;
        Ok(Self {
            mass,
            radius,
            density,
            unknown,
        })
    }

    pub fn density(&self) -> Result<BulkDensity, EquationError> {
        solve(self.unknown, "rho", self.density, || {
            let m = given(NAME, "M", self.mass)?;
            let r = given(NAME, "R", self.radius)?;
            let rho = BulkDensity::of_sphere(m, r);
            finite(NAME, "rho", rho.to_grams_per_cm3())?;
            Ok(rho)
        })
    }

    pub fn mass(&self) -> Result<Mass, EquationError> {
        solve(self.unknown, "M", self.mass, || {
            let r = given(NAME, "R", self.radius)?.to_cm();
            let rho = given(NAME, "rho", self.density)?.to_grams_per_cm3();
            let grams = finite(NAME, "M", rho * 4.0 / 3.0 * PI * r.powi(3))?;
            Ok(Mass::from_grams(grams))
        })
    }

    pub fn radius(&self) -> Result<Length, EquationError> {
        solve(self.unknown, "R", self.radius, || {
            let m = given(NAME, "M", self.mass)?.to_grams();
            let rho = given(NAME, "rho", self.density)?.to_grams_per_cm3();
            let cm = finite(NAME, "R", (m / (4.0 / 3.0 * PI * rho)).cbrt())?;
            Ok(Length::from_cm(cm))
        })
    }
}

impl Relation for Density {
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
