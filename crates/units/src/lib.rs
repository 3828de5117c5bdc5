pub mod acceleration;
pub mod angle;
pub mod constants;
pub mod density;
pub mod error;
pub mod length;
pub mod luminosity;
pub mod mass;
pub mod molecular_weight;
pub mod quantity;
pub mod temperature;
pub mod time;

#[cfg(test)]
mod temperature_test;

pub use acceleration::Acceleration;
pub use angle::Angle;
pub use density::Density;
pub use error::UnitError;
pub use length::Length;
pub use luminosity::Luminosity;
pub use mass::{Mass, EARTH_MASS_KG, JUPITER_MASS_KG, SOLAR_MASS_KG};
pub use molecular_weight::MolecularWeight;
pub use quantity::{Dimension, Quantity, Unit};
pub use temperature::Temperature;
pub use time::Time;
