//! Atmospheric scale height and the transmission-spectroscopy signal it
//! produces against the host star.

use units::constants::{ATOMIC_MASS_UNIT_KG, BOLTZMANN};
use units::{Acceleration, Length, MolecularWeight, Temperature};

use crate::error::EquationError;
use crate::relation::{finite, given, single_unknown, solve, Relation};

const NAME: &str = "ScaleHeight";
const VARIABLES: &[&str] = &["T_eff", "mu", "g", "H"];

/// Scale height of a planetary atmosphere.
///
/// ```text
/// H = k T_eff / (mu g)
/// ```
///
/// where `k` is Boltzmann's constant, `T_eff` the planet's effective
/// temperature, `mu` the mean molecular weight of the atmosphere and `g` the
/// surface gravity.
///
/// # Examples
///
/// ```rust
/// use equations::ScaleHeight;
/// use units::{Acceleration, MolecularWeight, Temperature};
///
/// let earth = ScaleHeight::new(
///     Some(Temperature::from_kelvin(290.0)),
///     Some(MolecularWeight::from_amu(28.964)),
///     Some(Acceleration::from_m_per_s2(9.81)),
///     None,
/// )
/// .unwrap();
///
/// let h = earth.scale_height().unwrap();
/// assert!((h.to_m() - 8486.03).abs() < 0.1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleHeight {
    temperature: Option<Temperature>,
    mean_molecular_weight: Option<MolecularWeight>,
    gravity: Option<Acceleration>,
    scale_height: Option<Length>,
    unknown: Option<&'static str>,
}

impl ScaleHeight {
    pub fn new(
        temperature: Option<Temperature>,
        mean_molecular_weight: Option<MolecularWeight>,
        gravity: Option<Acceleration>,
        scale_height: Option<Length>,
    ) -> Result<Self, EquationError> {
        let unknown = single_unknown(
            NAME,
            &[
                ("T_eff", temperature.is_some()),
                ("mu", mean_molecular_weight.is_some()),
                ("g", gravity.is_some()),
                ("H", scale_height.is_some()),
            ],
        )?;
        Ok(Self {
            temperature,
            mean_molecular_weight,
            gravity,
            scale_height,
            unknown,
        })
    }

    fn t_kelvin(&self) -> Result<f64, EquationError> {
        Ok(given(NAME, "T_eff", self.temperature)?.to_kelvin())
    }

    fn mu_kg(&self) -> Result<f64, EquationError> {
        Ok(given(NAME, "mu", self.mean_molecular_weight)?.to_kg())
    }

    fn g_si(&self) -> Result<f64, EquationError> {
        Ok(given(NAME, "g", self.gravity)?.to_m_per_s2())
    }

    fn h_m(&self) -> Result<f64, EquationError> {
        Ok(given(NAME, "H", self.scale_height)?.to_m())
    }

    /// Scale height in metres.
    pub fn scale_height(&self) -> Result<Length, EquationError> {
        solve(self.unknown, "H", self.scale_height, || {
            let h = BOLTZMANN * self.t_kelvin()? / (self.mu_kg()? * self.g_si()?);
            Ok(Length::from_meters(finite(NAME, "H", h)?))
        })
    }

    pub fn temperature(&self) -> Result<Temperature, EquationError> {
        solve(self.unknown, "T_eff", self.temperature, || {
            let t = self.h_m()? * self.mu_kg()? * self.g_si()? / BOLTZMANN;
            Ok(Temperature::from_kelvin(finite(NAME, "T_eff", t)?))
        })
    }

    pub fn mean_molecular_weight(&self) -> Result<MolecularWeight, EquationError> {
        solve(self.unknown, "mu", self.mean_molecular_weight, || {
            let mu_kg = BOLTZMANN * self.t_kelvin()? / (self.h_m()? * self.g_si()?);
            let mu_kg = finite(NAME, "mu", mu_kg)?;
            Ok(MolecularWeight::from_amu(mu_kg / ATOMIC_MASS_UNIT_KG))
        })
    }

    pub fn gravity(&self) -> Result<Acceleration, EquationError> {
        solve(self.unknown, "g", self.gravity, || {
            let g = BOLTZMANN * self.t_kelvin()? / (self.mu_kg()? * self.h_m()?);
            Ok(Acceleration::from_m_per_s2(finite(NAME, "g", g)?))
        })
    }
}

impl Relation for ScaleHeight {
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

/// Ratio of the flux blocked by the planet's terminator to the stellar flux,
/// assuming the atmosphere is five scale heights deep.
///
/// ```text
/// ΔF = (10 H R_p + 25 H²) / R_s²
/// ```
pub fn ratio_terminator_to_star(
    scale_height: Length,
    planet_radius: Length,
    stellar_radius: Length,
) -> f64 {
    let h = scale_height.to_m();
    let r_p = planet_radius.to_m();
    let r_s = stellar_radius.to_m();
    (10.0 * h * r_p + 25.0 * h * h) / (r_s * r_s)
}

/// Signal to noise of a planet's atmospheric signal given the stellar SNR and
/// the terminator to star ratio from [`ratio_terminator_to_star`].
pub fn snr_planet(
    snr_star: f64,
    star_planet_flux: f64,
    exposures_per_visit: f64,
    pixels_per_bin: f64,
    visits: f64,
) -> f64 {
    snr_star * star_planet_flux * exposures_per_visit.sqrt() * pixels_per_bin.sqrt() * visits.sqrt()
}
