//! Physical relations between exoplanet and stellar parameters.
//!
//! Each relation holds one optional slot per variable. At most one slot may be
//! left empty, and every slot has an accessor that returns the stored value or
//! solves for it from the others.

pub mod atmosphere;
pub mod density;
pub mod distance;
pub mod error;
pub mod gravity;
pub mod kepler;
pub mod luminosity;
pub mod relation;
pub mod temperature;
pub mod transit;

#[cfg(test)]
mod atmosphere_test;
#[cfg(test)]
mod density_test;
#[cfg(test)]
mod gravity_test;
#[cfg(test)]
mod kepler_test;
#[cfg(test)]
mod temperature_test;

pub use atmosphere::{ratio_terminator_to_star, snr_planet, ScaleHeight};
pub use density::Density;
pub use distance::estimate_distance;
pub use error::EquationError;
pub use gravity::{Logg, SurfaceGravity};
pub use kepler::KeplersThirdLaw;
pub use luminosity::StellarLuminosity;
pub use relation::Relation;
pub use temperature::{estimate_stellar_temperature, MeanPlanetTemp, DEFAULT_EPSILON};
pub use transit::{transit_duration_circular, ImpactParameter, TransitDepth, TransitDuration};
