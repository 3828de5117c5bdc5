use thiserror::Error;

use crate::magnitude::Band;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum MagnitudeError {
    #[error("cannot convert magnitudes without a spectral class")]
    NoSpectralClass,

    /// Colours are tabulated for dwarfs only.
    #[error("can only convert magnitudes for main sequence stars, got luminosity class {0}")]
    NotMainSequence(String),

    #[error("no colours tabulated for spectral class {0}")]
    UnknownSpectralClass(String),

    #[error("no {band} colour tabulated for spectral class {spectral_class}")]
    NoTableEntry { spectral_class: String, band: Band },

    #[error("magnitude {0} was not measured")]
    NotMeasured(Band),

    #[error("none of the measured magnitudes could be converted")]
    NoConvertibleBand,
}
