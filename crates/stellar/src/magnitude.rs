use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::colour::MainSequenceColours;
use crate::error::MagnitudeError;
use crate::spectral::{LuminosityClass, SpectralType};

/// Photometric bands with tabulated colours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Band {
    U,
    B,
    V,
    I,
    J,
    H,
    K,
    L,
    M,
    N,
}

impl Band {
    pub const ALL: [Band; 10] = [
        Band::U,
        Band::B,
        Band::V,
        Band::I,
        Band::J,
        Band::H,
        Band::K,
        Band::L,
        Band::M,
        Band::N,
    ];

    /// Source bands tried, in order, when V was not measured.
    pub const FALLBACK_ORDER: [Band; 9] = [
        Band::U,
        Band::B,
        Band::I,
        Band::J,
        Band::H,
        Band::K,
        Band::L,
        Band::M,
        Band::N,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Band::U => "U",
            Band::B => "B",
            Band::V => "V",
            Band::I => "I",
            Band::J => "J",
            Band::H => "H",
            Band::K => "K",
            Band::L => "L",
            Band::M => "M",
            Band::N => "N",
        }
    }

    /// Catalogue parameter holding this band, e.g. `magV`.
    pub fn parameter_name(&self) -> &'static str {
        match self {
            Band::U => "magU",
            Band::B => "magB",
            Band::V => "magV",
            Band::I => "magI",
            Band::J => "magJ",
            Band::H => "magH",
            Band::K => "magK",
            Band::L => "magL",
            Band::M => "magM",
            Band::N => "magN",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Band {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Band {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Band::ALL
            .into_iter()
            .find(|band| band.as_str() == s)
            .ok_or_else(|| format!("unknown photometric band '{s}'"))
    }
}

/// Measured apparent magnitudes of one star, convertible between bands
/// through its main sequence colours.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Magnitudes {
    spectral_type: SpectralType,
    measured: [Option<f64>; 10],
}

impl Magnitudes {
    pub fn new(spectral_type: SpectralType) -> Self {
        Magnitudes {
            spectral_type,
            measured: [None; 10],
        }
    }

    pub fn with(mut self, band: Band, value: f64) -> Self {
        self.set(band, Some(value));
        self
    }

    pub fn set(&mut self, band: Band, value: Option<f64>) {
        self.measured[band.index()] = value;
    }

    /// The measured value in `band`. NaN counts as not measured.
    pub fn get(&self, band: Band) -> Option<f64> {
        self.measured[band.index()].filter(|value| !value.is_nan())
    }

    pub fn spectral_type(&self) -> &SpectralType {
        &self.spectral_type
    }

    /// Estimates the magnitude in `to`.
    ///
    /// Every conversion goes through V. With an explicit `from` band only that
    /// band is used. Otherwise a measured V is preferred, and failing that
    /// the bands in [`Band::FALLBACK_ORDER`] are tried until one converts.
    pub fn convert(&self, to: Band, from: Option<Band>) -> Result<f64, MagnitudeError> {
        if let Some(from) = from {
            let v = self.to_v(from)?;
            return self.from_v(to, v);
        }

        if let Some(v) = self.get(Band::V) {
            return self.from_v(to, v);
        }

        // Fail early on problems no source band can get around
        self.colours()?;

        for source in Band::FALLBACK_ORDER {
            let converted = self.to_v(source).and_then(|v| self.from_v(to, v));
            match converted {
                Ok(value) => {
                    debug!(from = %source, to = %to, value, "converted magnitude");
                    return Ok(value);
                }
                Err(err) => debug!(from = %source, to = %to, %err, "skipping source band"),
            }
        }

        Err(MagnitudeError::NoConvertibleBand)
    }

    fn colours(&self) -> Result<&'static MainSequenceColours, MagnitudeError> {
        if self.spectral_type.is_empty() {
            return Err(MagnitudeError::NoSpectralClass);
        }

        match self.spectral_type.luminosity_class() {
            None | Some(LuminosityClass::V) => {}
            Some(class) => return Err(MagnitudeError::NotMainSequence(class.to_string())),
        }

        let spectral_class = self.spectral_type.rounded_spec_class();
        MainSequenceColours::for_class(&spectral_class)
            .ok_or(MagnitudeError::UnknownSpectralClass(spectral_class))
    }

    fn offset(&self, band: Band) -> Result<f64, MagnitudeError> {
        let colours = self.colours()?;
        colours
            .to_v_offset(band)
            .ok_or_else(|| MagnitudeError::NoTableEntry {
                spectral_class: self.spectral_type.rounded_spec_class(),
                band,
            })
    }

    fn to_v(&self, from: Band) -> Result<f64, MagnitudeError> {
        if from == Band::V {
            return self.get(Band::V).ok_or(MagnitudeError::NotMeasured(Band::V));
        }

        let offset = self.offset(from)?;
        let value = self.get(from).ok_or(MagnitudeError::NotMeasured(from))?;
        Ok(value + offset)
    }

    fn from_v(&self, to: Band, v: f64) -> Result<f64, MagnitudeError> {
        if to == Band::V {
            return Ok(v);
        }

        Ok(v - self.offset(to)?)
    }
}
