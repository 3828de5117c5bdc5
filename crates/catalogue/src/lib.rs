//! Exoplanet catalogue entities with measured and derived physical properties.
//!
//! Systems, binaries, stars and planets live in a [`Catalogue`] arena. Their
//! raw values sit in a [`Parameters`] container per entity. Physical
//! properties are read through typed views obtained from a [`Resolver`],
//! which fill missing values from the relations in the `equations` crate and
//! flag every estimate on the entity.
//!
//! ```rust
//! use catalogue::fixtures::example_planet;
//! use catalogue::{Catalogue, CatalogueObject, Flag, PhysicalBody, ResolutionConfig, Resolver};
//!
//! let mut catalogue = Catalogue::new();
//! let id = example_planet(&mut catalogue, 1, None).unwrap();
//!
//! let config = ResolutionConfig::default();
//! let resolver = Resolver::new(&catalogue, &config);
//! let planet = resolver.planet(id).unwrap();
//!
//! assert_eq!(planet.name(), "Example Star 1 b");
//! assert!(planet.temperature().is_some());
//! assert!(planet.flags().contains(Flag::Fake));
//! ```

pub mod assumptions;
pub mod binary;
pub mod config;
pub mod database;
pub mod entity;
pub mod error;
pub mod fixtures;
pub mod flags;
pub mod params;
pub mod planet;
pub mod resolver;
pub mod star;
pub mod system;
pub mod traits;

#[cfg(test)]
mod binary_test;
#[cfg(test)]
mod params_test;
#[cfg(test)]
mod star_test;

pub use assumptions::{PlanetAssumptions, SizeClass, TemperatureClass};
pub use binary::Binary;
pub use config::ResolutionConfig;
pub use database::{Database, Record, RecordParam};
pub use entity::{Catalogue, Entity, EntityId, EntityKind};
pub use error::CatalogueError;
pub use flags::{Flag, FlagSet};
pub use params::{Field, Parameters, Value};
pub use planet::Planet;
pub use resolver::{Node, Resolver};
pub use star::Star;
pub use system::System;
pub use traits::{CatalogueObject, OrbitalElements, Photometry, PhysicalBody};
