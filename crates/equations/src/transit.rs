//! Transit geometry: depth, impact parameter and duration.

use std::f64::consts::PI;

use units::{Angle, Length, Time};

use crate::error::EquationError;
use crate::relation::{finite, given, single_unknown, solve, Relation};

const DEPTH: &str = "TransitDepth";
const DEPTH_VARIABLES: &[&str] = &["R_s", "R_p", "depth"];

const IMPACT: &str = "ImpactParameter";
const IMPACT_VARIABLES: &[&str] = &["a", "R_s", "i", "b"];

const DURATION: &str = "TransitDuration";
const DURATION_VARIABLES: &[&str] = &["P", "a", "R_p", "R_s", "i", "e", "omega", "T_dur"];

/// Fractional flux drop during transit, `depth = (R_p / R_s)²`.
///
/// # Examples
///
/// ```rust
/// use equations::TransitDepth;
/// use units::Length;
///
/// // GJ 1214 b (Charbonneau et al. 2009)
/// let depth = TransitDepth::new(
///     Some(Length::from_solar_radii(0.211)),
///     Some(Length::from_earth_radii(2.678)),
///     None,
/// )
/// .unwrap()
/// .depth()
/// .unwrap();
/// assert!((depth - 0.1162_f64.powi(2)).abs() < 1e-4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransitDepth {
    stellar_radius: Option<Length>,
    planet_radius: Option<Length>,
    depth: Option<f64>,
    unknown: Option<&'static str>,
}

impl TransitDepth {
    pub fn new(
        stellar_radius: Option<Length>,
        planet_radius: Option<Length>,
        depth: Option<f64>,
    ) -> Result<Self, EquationError> {
        let unknown = single_unknown(
            DEPTH,
            &[
                ("R_s", stellar_radius.is_some()),
                ("R_p", planet_radius.is_some()),
                ("depth", depth.is_some()),
            ],
        )?;
        Ok(Self {
            stellar_radius,
            planet_radius,
            depth,
            unknown,
        })
    }

    pub fn depth(&self) -> Result<f64, EquationError> {
        solve(self.unknown, "depth", self.depth, || {
            let r_s = given(DEPTH, "R_s", self.stellar_radius)?;
            let r_p = given(DEPTH, "R_p", self.planet_radius)?;
            finite(DEPTH, "depth", (r_p / r_s).powi(2))
        })
    }

    pub fn planet_radius(&self) -> Result<Length, EquationError> {
        solve(self.unknown, "R_p", self.planet_radius, || {
            let r_s = given(DEPTH, "R_s", self.stellar_radius)?;
            let depth = given(DEPTH, "depth", self.depth)?;
            Ok(r_s * finite(DEPTH, "R_p", depth.sqrt())?)
        })
    }

    pub fn stellar_radius(&self) -> Result<Length, EquationError> {
        solve(self.unknown, "R_s", self.stellar_radius, || {
            let r_p = given(DEPTH, "R_p", self.planet_radius)?;
            let depth = given(DEPTH, "depth", self.depth)?;
            Ok(r_p * finite(DEPTH, "R_s", 1.0 / depth.sqrt())?)
        })
    }
}

impl Relation for TransitDepth {
    fn name(&self) -> &'static str {
        DEPTH
    }

    fn variables(&self) -> &'static [&'static str] {
        DEPTH_VARIABLES
    }

    fn unknown(&self) -> Option<&'static str> {
        self.unknown
    }
}

/// Projected star-planet separation at mid transit in stellar radii,
/// `b = (a / R_s) cos i` (Seager & Mallén-Ornelas 2003).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImpactParameter {
    semi_major_axis: Option<Length>,
    stellar_radius: Option<Length>,
    inclination: Option<Angle>,
    impact_parameter: Option<f64>,
    unknown: Option<&'static str>,
}

impl ImpactParameter {
    pub fn new(
        semi_major_axis: Option<Length>,
        stellar_radius: Option<Length>,
        inclination: Option<Angle>,
        impact_parameter: Option<f64>,
    ) -> Result<Self, EquationError> {
        let unknown = single_unknown(
            IMPACT,
            &[
                ("a", semi_major_axis.is_some()),
                ("R_s", stellar_radius.is_some()),
                ("i", inclination.is_some()),
                ("b", impact_parameter.is_some()),
            ],
        )?;
        Ok(Self {
            semi_major_axis,
            stellar_radius,
            inclination,
            impact_parameter,
            unknown,
        })
    }

    pub fn impact_parameter(&self) -> Result<f64, EquationError> {
        solve(self.unknown, "b", self.impact_parameter, || {
            let a = given(IMPACT, "a", self.semi_major_axis)?;
            let r_s = given(IMPACT, "R_s", self.stellar_radius)?;
            let i = given(IMPACT, "i", self.inclination)?.to_radians();
            finite(IMPACT, "b", a / r_s * i.cos())
        })
    }

    pub fn semi_major_axis(&self) -> Result<Length, EquationError> {
        solve(self.unknown, "a", self.semi_major_axis, || {
            let r_s = given(IMPACT, "R_s", self.stellar_radius)?;
            let i = given(IMPACT, "i", self.inclination)?.to_radians();
            let b = given(IMPACT, "b", self.impact_parameter)?;
            Ok(r_s * finite(IMPACT, "a", b / i.cos())?)
        })
    }

    pub fn stellar_radius(&self) -> Result<Length, EquationError> {
        solve(self.unknown, "R_s", self.stellar_radius, || {
            let a = given(IMPACT, "a", self.semi_major_axis)?;
            let i = given(IMPACT, "i", self.inclination)?.to_radians();
            let b = given(IMPACT, "b", self.impact_parameter)?;
            Ok(a * finite(IMPACT, "R_s", i.cos() / b)?)
        })
    }

    /// Inclination in `[0°, 180°]`. Fails when `|b R_s / a| > 1`.
    pub fn inclination(&self) -> Result<Angle, EquationError> {
        solve(self.unknown, "i", self.inclination, || {
            let a = given(IMPACT, "a", self.semi_major_axis)?;
            let r_s = given(IMPACT, "R_s", self.stellar_radius)?;
            let b = given(IMPACT, "b", self.impact_parameter)?;
            let cos_i = b * r_s / a;
            if !(-1.0..=1.0).contains(&cos_i) {
                return Err(EquationError::Domain {
                    relation: IMPACT,
                    variable: "i",
                });
            }
            Ok(Angle::from_radians(cos_i.acos()))
        })
    }
}

impl Relation for ImpactParameter {
    fn name(&self) -> &'static str {
        IMPACT
    }

    fn variables(&self) -> &'static [&'static str] {
        IMPACT_VARIABLES
    }

    fn unknown(&self) -> Option<&'static str> {
        self.unknown
    }
}

/// Total transit duration for an eccentric orbit (Kipping 2011).
///
/// ```text
/// ϱ = (1 - e²) / (1 + e sin ω)
/// b = (a / R_s) ϱ cos i
/// T = P/π · ϱ² / √(1 - e²) · asin( √((1 + k)² - b²) / ((a / R_s) ϱ sin i) )
/// ```
///
/// with `k = R_p / R_s`. This relation only runs forward: there is no closed
/// form for the orbital elements in terms of the duration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransitDuration {
    period: Time,
    semi_major_axis: Length,
    planet_radius: Length,
    stellar_radius: Length,
    inclination: Angle,
    eccentricity: f64,
    periastron: Angle,
}

impl TransitDuration {
    pub fn new(
        period: Time,
        semi_major_axis: Length,
        planet_radius: Length,
        stellar_radius: Length,
        inclination: Angle,
        eccentricity: f64,
        periastron: Angle,
    ) -> Self {
        Self {
            period,
            semi_major_axis,
            planet_radius,
            stellar_radius,
            inclination,
            eccentricity,
            periastron,
        }
    }

    /// Transit duration. Usually read back with [`Time::to_minutes`].
    pub fn duration(&self) -> Result<Time, EquationError> {
        let e = self.eccentricity;
        let i = self.inclination.to_radians();
        let omega = self.periastron.to_radians();

        let k = self.planet_radius / self.stellar_radius;
        let a_rs = self.semi_major_axis / self.stellar_radius;
        let rho = (1.0 - e * e) / (1.0 + e * omega.sin());
        let b = a_rs * rho * i.cos();

        let chord = (1.0 + k).powi(2) - b * b;
        let arg = chord.sqrt() / (a_rs * rho * i.sin());
        if !(chord >= 0.0 && arg.abs() <= 1.0) {
            return Err(EquationError::Domain {
                relation: DURATION,
                variable: "T_dur",
            });
        }

        let days = self.period.to_days() / PI * rho * rho / (1.0 - e * e).sqrt() * arg.asin();
        Ok(Time::from_days(finite(DURATION, "T_dur", days)?))
    }
}

impl Relation for TransitDuration {
    fn name(&self) -> &'static str {
        DURATION
    }

    fn variables(&self) -> &'static [&'static str] {
        DURATION_VARIABLES
    }

    fn unknown(&self) -> Option<&'static str> {
        Some("T_dur")
    }
}

/// Transit duration for a circular orbit. A missing inclination is taken as
/// edge-on (90°).
///
/// # Examples
///
/// ```rust
/// use equations::transit_duration_circular;
/// use units::{Angle, Length, Time};
///
/// let duration = transit_duration_circular(
///     Time::from_days(1.58040482),
///     Length::from_solar_radii(0.21),
///     Length::from_jupiter_radii(0.02),
///     Length::from_au(0.014),
///     Some(Angle::from_degrees(88.17)),
/// )
/// .unwrap();
/// assert!((duration.to_minutes() - 45.52).abs() < 0.05);
/// ```
pub fn transit_duration_circular(
    period: Time,
    stellar_radius: Length,
    planet_radius: Length,
    semi_major_axis: Length,
    inclination: Option<Angle>,
) -> Result<Time, EquationError> {
    TransitDuration::new(
        period,
        semi_major_axis,
        planet_radius,
        stellar_radius,
        inclination.unwrap_or_else(Angle::right),
        0.0,
        Angle::zero(),
    )
    .duration()
}
