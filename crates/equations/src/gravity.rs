use units::constants::G;
use units::{Acceleration, Length, Mass};

use crate::error::EquationError;
use crate::relation::{finite, given, single_unknown, solve, Relation};

const SURFACE_GRAVITY: &str = "SurfaceGravity";
const SURFACE_GRAVITY_VARIABLES: &[&str] = &["M", "R", "g"];

const LOGG: &str = "Logg";
const LOGG_VARIABLES: &[&str] = &["M", "R", "logg"];

/// Surface gravity of a spherical body, `g = G M / R²`.
///
/// # Examples
///
/// ```rust
/// use equations::SurfaceGravity;
/// use units::{Length, Mass};
///
/// let earth = SurfaceGravity::new(
///     Some(Mass::from_earth_masses(1.0)),
///     Some(Length::from_earth_radii(1.0)),
///     None,
/// )
/// .unwrap();
/// assert!((earth.gravity().unwrap().to_m_per_s2() - 9.82).abs() < 0.01);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceGravity {
    mass: Option<Mass>,
    radius: Option<Length>,
    gravity: Option<Acceleration>,
    unknown: Option<&'static str>,
}

impl SurfaceGravity {
    pub fn new(
        mass: Option<Mass>,
        radius: Option<Length>,
        gravity: Option<Acceleration>,
    ) -> Result<Self, EquationError> {
        let unknown = single_unknown(
            SURFACE_GRAVITY,
            &[
                ("M", mass.is_some()),
                ("R", radius.is_some()),
                ("g", gravity.is_some()),
            ],
        )?;
        Ok(Self {
            mass,
            radius,
            gravity,
            unknown,
        })
    }

    pub fn gravity(&self) -> Result<Acceleration, EquationError> {
        solve(self.unknown, "g", self.gravity, || {
            let m = given(SURFACE_GRAVITY, "M", self.mass)?.to_kg();
            let r = given(SURFACE_GRAVITY, "R", self.radius)?.to_m();
            let g = finite(SURFACE_GRAVITY, "g", G * m / (r * r))?;
            Ok(Acceleration::from_m_per_s2(g))
        })
    }

    pub fn mass(&self) -> Result<Mass, EquationError> {
        solve(self.unknown, "M", self.mass, || {
            let r = given(SURFACE_GRAVITY, "R", self.radius)?.to_m();
            let g = given(SURFACE_GRAVITY, "g", self.gravity)?.to_m_per_s2();
            let m = finite(SURFACE_GRAVITY, "M", g * r * r / G)?;
            Ok(Mass::from_kg(m))
        })
    }

    pub fn radius(&self) -> Result<Length, EquationError> {
        solve(self.unknown, "R", self.radius, || {
            let m = given(SURFACE_GRAVITY, "M", self.mass)?.to_kg();
            let g = given(SURFACE_GRAVITY, "g", self.gravity)?.to_m_per_s2();
            let r = finite(SURFACE_GRAVITY, "R", (G * m / g).sqrt())?;
            Ok(Length::from_meters(r))
        })
    }
}

impl Relation for SurfaceGravity {
    fn name(&self) -> &'static str {
        SURFACE_GRAVITY
    }

    fn variables(&self) -> &'static [&'static str] {
        SURFACE_GRAVITY_VARIABLES
    }

    fn unknown(&self) -> Option<&'static str> {
        self.unknown
    }
}

/// Base ten logarithm of the surface gravity in cgs units (cm/s²), the form
/// stellar catalogues quote.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Logg {
    mass: Option<Mass>,
    radius: Option<Length>,
    logg: Option<f64>,
    unknown: Option<&'static str>,
}

impl Logg {
    pub fn new(
        mass: Option<Mass>,
        radius: Option<Length>,
        logg: Option<f64>,
    ) -> Result<Self, EquationError> {
        let unknown = single_unknown(
            LOGG,
            &[
                ("M", mass.is_some()),
                ("R", radius.is_some()),
                ("logg", logg.is_some()),
            ],
        )?;
        Ok(Self {
            mass,
            radius,
            logg,
            unknown,
        })
    }

    /// `g` in m/s² recovered from the stored log g.
    fn gravity_si(&self) -> Result<f64, EquationError> {
        let logg = given(LOGG, "logg", self.logg)?;
        Ok(Acceleration::from_cm_per_s2(10f64.powf(logg)).to_m_per_s2())
    }

    pub fn logg(&self) -> Result<f64, EquationError> {
        solve(self.unknown, "logg", self.logg, || {
            let m = given(LOGG, "M", self.mass)?.to_kg();
            let r = given(LOGG, "R", self.radius)?.to_m();
            let g = Acceleration::from_m_per_s2(G * m / (r * r));
            finite(LOGG, "logg", g.to_cm_per_s2().log10())
        })
    }

    pub fn mass(&self) -> Result<Mass, EquationError> {
        solve(self.unknown, "M", self.mass, || {
            let r = given(LOGG, "R", self.radius)?.to_m();
            let m = finite(LOGG, "M", self.gravity_si()? * r * r / G)?;
            Ok(Mass::from_kg(m))
        })
    }

    pub fn radius(&self) -> Result<Length, EquationError> {
        solve(self.unknown, "R", self.radius, || {
            let m = given(LOGG, "M", self.mass)?.to_kg();
            let r = finite(LOGG, "R", (G * m / self.gravity_si()?).sqrt())?;
            Ok(Length::from_meters(r))
        })
    }
}

impl Relation for Logg {
    fn name(&self) -> &'static str {
        LOGG
    }

    fn variables(&self) -> &'static [&'static str] {
        LOGG_VARIABLES
    }

    fn unknown(&self) -> Option<&'static str> {
        self.unknown
    }
}
