//! Spectral types, absolute magnitudes and photometric band conversion.

pub mod absolute_magnitude;
pub mod colour;
pub mod error;
pub mod magnitude;
pub mod spectral;


pub use absolute_magnitude::estimate_absolute_magnitude;
pub use colour::MainSequenceColours;
pub use error::MagnitudeError;
pub use magnitude::{Band, Magnitudes};
pub use spectral::{LuminosityClass, SpectralType};
