use units::{Length, Mass, Temperature};

use crate::error::EquationError;
use crate::relation::{finite, given, single_unknown, solve, Relation};

const NAME: &str = "MeanPlanetTemp";
const VARIABLES: &[&str] = &["A", "T_s", "R_s", "a", "epsilon", "T_p"];

/// Default heat redistribution efficiency (Kane & Gelino 2011)
pub const DEFAULT_EPSILON: f64 = 0.7;

/// Mean equilibrium temperature of a planet.
///
/// ```text
/// T_p = T_s ((1 - A) / ε)^¼ √(R_s / 2a)
/// ```
///
/// `A` is the Bond albedo, `ε` the heat redistribution efficiency, `T_s` and
/// `R_s` the host star's effective temperature and radius, `a` the orbital
/// semi-major axis. Any one of the six can be solved for.
///
/// # Examples
///
/// ```rust
/// use equations::MeanPlanetTemp;
/// use units::{Length, Temperature};
///
/// let mars = MeanPlanetTemp::new(
///     Some(0.25),
///     Some(Temperature::from_kelvin(5800.0)),
///     Some(Length::from_solar_radii(1.0)),
///     Some(Length::from_au(1.524)),
///     Some(0.7),
///     None,
/// )
/// .unwrap();
///
/// let t = mars.planet_temperature().unwrap();
/// assert!((t.to_kelvin() - 230.5).abs() < 0.1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeanPlanetTemp {
    albedo: Option<f64>,
    stellar_temperature: Option<Temperature>,
    stellar_radius: Option<Length>,
    semi_major_axis: Option<Length>,
    epsilon: Option<f64>,
    planet_temperature: Option<Temperature>,
    unknown: Option<&'static str>,
}

impl MeanPlanetTemp {
    pub fn new(
        albedo: Option<f64>,
        stellar_temperature: Option<Temperature>,
        stellar_radius: Option<Length>,
        semi_major_axis: Option<Length>,
        epsilon: Option<f64>,
        planet_temperature: Option<Temperature>,
    ) -> Result<Self, EquationError> {
        let unknown = single_unknown(
            NAME,
            &[
                ("A", albedo.is_some()),
                ("T_s", stellar_temperature.is_some()),
                ("R_s", stellar_radius.is_some()),
                ("a", semi_major_axis.is_some()),
                ("epsilon", epsilon.is_some()),
                ("T_p", planet_temperature.is_some()),
            ],
        )?;
        Ok(Self {
            albedo,
            stellar_temperature,
            stellar_radius,
            semi_major_axis,
            epsilon,
            planet_temperature,
            unknown,
        })
    }

    /// `(1 - A) / ε`
    fn absorbed_fraction(&self) -> Result<f64, EquationError> {
        let albedo = given(NAME, "A", self.albedo)?;
        let epsilon = given(NAME, "epsilon", self.epsilon)?;
        Ok((1.0 - albedo) / epsilon)
    }

    /// `(T_p / T_s)⁴ (2a / R_s)²`, which equals `(1 - A) / ε`.
    fn temperature_geometry(&self) -> Result<f64, EquationError> {
        let t_p = given(NAME, "T_p", self.planet_temperature)?;
        let t_s = given(NAME, "T_s", self.stellar_temperature)?;
        let a = given(NAME, "a", self.semi_major_axis)?;
        let r_s = given(NAME, "R_s", self.stellar_radius)?;
        Ok((t_p / t_s).powi(4) * (2.0 * a / r_s).powi(2))
    }

    pub fn planet_temperature(&self) -> Result<Temperature, EquationError> {
        solve(self.unknown, "T_p", self.planet_temperature, || {
            let t_s = given(NAME, "T_s", self.stellar_temperature)?;
            let r_s = given(NAME, "R_s", self.stellar_radius)?;
            let a = given(NAME, "a", self.semi_major_axis)?;
            let t_p = t_s.to_kelvin()
                * self.absorbed_fraction()?.powf(0.25)
                * (r_s / (2.0 * a)).sqrt();
            Ok(Temperature::from_kelvin(finite(NAME, "T_p", t_p)?))
        })
    }

    pub fn stellar_temperature(&self) -> Result<Temperature, EquationError> {
        solve(self.unknown, "T_s", self.stellar_temperature, || {
            let t_p = given(NAME, "T_p", self.planet_temperature)?;
            let r_s = given(NAME, "R_s", self.stellar_radius)?;
            let a = given(NAME, "a", self.semi_major_axis)?;
            let t_s = t_p.to_kelvin()
                / (self.absorbed_fraction()?.powf(0.25) * (r_s / (2.0 * a)).sqrt());
            Ok(Temperature::from_kelvin(finite(NAME, "T_s", t_s)?))
        })
    }

    pub fn stellar_radius(&self) -> Result<Length, EquationError> {
        solve(self.unknown, "R_s", self.stellar_radius, || {
            let t_p = given(NAME, "T_p", self.planet_temperature)?;
            let t_s = given(NAME, "T_s", self.stellar_temperature)?;
            let a = given(NAME, "a", self.semi_major_axis)?;
            let scale = (t_p / t_s).powi(2) / self.absorbed_fraction()?.sqrt();
            Ok(2.0 * a * finite(NAME, "R_s", scale)?)
        })
    }

    pub fn semi_major_axis(&self) -> Result<Length, EquationError> {
        solve(self.unknown, "a", self.semi_major_axis, || {
            let t_p = given(NAME, "T_p", self.planet_temperature)?;
            let t_s = given(NAME, "T_s", self.stellar_temperature)?;
            let r_s = given(NAME, "R_s", self.stellar_radius)?;
            let scale = self.absorbed_fraction()?.sqrt() * 0.5 * (t_s / t_p).powi(2);
            Ok(r_s * finite(NAME, "a", scale)?)
        })
    }

    pub fn albedo(&self) -> Result<f64, EquationError> {
        solve(self.unknown, "A", self.albedo, || {
            let epsilon = given(NAME, "epsilon", self.epsilon)?;
            finite(NAME, "A", 1.0 - epsilon * self.temperature_geometry()?)
        })
    }

    pub fn epsilon(&self) -> Result<f64, EquationError> {
        solve(self.unknown, "epsilon", self.epsilon, || {
            let albedo = given(NAME, "A", self.albedo)?;
            finite(NAME, "epsilon", (1.0 - albedo) / self.temperature_geometry()?)
        })
    }
}

impl Relation for MeanPlanetTemp {
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

/// Main sequence effective temperature from mass, `T ≈ 5800 K (M / M☉)^0.65`.
pub fn estimate_stellar_temperature(mass: Mass) -> Temperature {
    Temperature::from_kelvin(5800.0 * mass.to_solar_masses().powf(0.65))
}
