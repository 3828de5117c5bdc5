use std::f64::consts::PI;

use units::constants::G;
use units::{Length, Mass, Time};

use crate::error::EquationError;
use crate::relation::{finite, given, single_unknown, solve, Relation};

const NAME: &str = "KeplersThirdLaw";
const VARIABLES: &[&str] = &["a", "M_s", "P", "M_p"];

/// Kepler's third law for a two body orbit.
///
/// ```text
/// P = 2π √(a³ / G (M_s + M_p))
/// ```
///
/// The companion mass is a slot like any other. Callers that want the
/// test-particle limit pass `Some(Mass::zero())`.
///
/// # Examples
///
/// ```rust
/// use equations::KeplersThirdLaw;
/// use units::{Length, Mass};
///
/// // GJ 1214 b
/// let orbit = KeplersThirdLaw::new(
///     Some(Length::from_au(0.014)),
///     Some(Mass::from_solar_masses(0.153)),
///     None,
///     Some(Mass::zero()),
/// )
/// .unwrap();
///
/// let period = orbit.period().unwrap();
/// assert!((period.to_days() - 1.546).abs() < 1e-3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KeplersThirdLaw {
    semi_major_axis: Option<Length>,
    primary_mass: Option<Mass>,
    period: Option<Time>,
    companion_mass: Option<Mass>,
    unknown: Option<&'static str>,
}

impl KeplersThirdLaw {
    pub fn new(
        semi_major_axis: Option<Length>,
        primary_mass: Option<Mass>,
        period: Option<Time>,
        companion_mass: Option<Mass>,
    ) -> Result<Self, EquationError> {
        let unknown = single_unknown(
            NAME,
            &[
                ("a", semi_major_axis.is_some()),
                ("M_s", primary_mass.is_some()),
                ("P", period.is_some()),
                ("M_p", companion_mass.is_some()),
            ],
        )?;
        Ok(Self {
            semi_major_axis,
            primary_mass,
            period,
            companion_mass,
            unknown,
        })
    }

    /// `4π² a³ / (G P²)`, the total mass of the system in kilograms.
    fn total_mass_kg(&self) -> Result<f64, EquationError> {
        let a = given(NAME, "a", self.semi_major_axis)?.to_m();
        let p = given(NAME, "P", self.period)?.to_seconds();
        Ok(4.0 * PI * PI * a.powi(3) / (G * p * p))
    }

    pub fn period(&self) -> Result<Time, EquationError> {
        solve(self.unknown, "P", self.period, || {
            let a = given(NAME, "a", self.semi_major_axis)?.to_m();
            let m_s = given(NAME, "M_s", self.primary_mass)?;
            let m_p = given(NAME, "M_p", self.companion_mass)?;
            let p = 2.0 * PI * (a.powi(3) / (G * (m_s + m_p).to_kg())).sqrt();
            Ok(Time::from_seconds(finite(NAME, "P", p)?))
        })
    }

    pub fn semi_major_axis(&self) -> Result<Length, EquationError> {
        solve(self.unknown, "a", self.semi_major_axis, || {
            let p = given(NAME, "P", self.period)?.to_seconds();
            let m_s = given(NAME, "M_s", self.primary_mass)?;
            let m_p = given(NAME, "M_p", self.companion_mass)?;
            let a = (p * p * G * (m_s + m_p).to_kg() / (4.0 * PI * PI)).cbrt();
            Ok(Length::from_meters(finite(NAME, "a", a)?))
        })
    }

    pub fn primary_mass(&self) -> Result<Mass, EquationError> {
        solve(self.unknown, "M_s", self.primary_mass, || {
            let m_p = given(NAME, "M_p", self.companion_mass)?;
            let total = finite(NAME, "M_s", self.total_mass_kg()?)?;
            Ok(Mass::from_kg(total) - m_p)
        })
    }

    pub fn companion_mass(&self) -> Result<Mass, EquationError> {
        solve(self.unknown, "M_p", self.companion_mass, || {
            let m_s = given(NAME, "M_s", self.primary_mass)?;
            let total = finite(NAME, "M_p", self.total_mass_kg()?)?;
            Ok(Mass::from_kg(total) - m_s)
        })
    }
}

impl Relation for KeplersThirdLaw {
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
