//! Property groups shared between entity kinds.
//!
//! | Trait             | System | Binary | Star | Planet |
//! |-------------------|--------|--------|------|--------|
//! | `CatalogueObject` | ✓      | ✓      | ✓    | ✓      |
//! | `OrbitalElements` |        | ✓      |      | ✓      |
//! | `Photometry`      |        | ✓      | ✓    |        |
//! | `PhysicalBody`    |        |        | ✓    | ✓      |

use equations::{Density as DensityRelation, Logg, SurfaceGravity};
use stellar::Band;
use units::{Acceleration, Angle, Density, Length, Mass, Temperature, Time};

use crate::binary::Binary;
use crate::entity::{EntityId, EntityKind};
use crate::error::CatalogueError;
use crate::flags::FlagSet;
use crate::params::{Field, Parameters};
use crate::resolver::Node;
use crate::system::System;

/// Identity, parameters and position in the hierarchy.
pub trait CatalogueObject<'a> {
    fn node(&self) -> Node<'a>;

    fn id(&self) -> EntityId {
        self.node().id()
    }

    fn kind(&self) -> EntityKind {
        self.node().kind()
    }

    /// The catalogue name, falling back to the nearest named ancestor.
    fn name(&self) -> String {
        self.node().name()
    }

    fn alt_names(&self) -> &'a [String] {
        self.node().params().alt_names()
    }

    fn params(&self) -> &'a Parameters {
        self.node().params()
    }

    fn flags(&self) -> &'a FlagSet {
        self.node().flags()
    }

    fn parent(&self) -> Option<EntityId> {
        self.node().entity().parent()
    }

    fn children(&self) -> &'a [EntityId] {
        self.node().entity().children()
    }

    /// The system this object belongs to. A system is its own system.
    fn system(&self) -> Result<System<'a>, CatalogueError> {
        let node = self.node();
        if node.kind() == EntityKind::System {
            return Ok(System::from_node(node));
        }
        node.ancestor(EntityKind::System).map(System::from_node)
    }
}

/// Orbit of a planet around its host, or of a binary's components around
/// each other.
pub trait OrbitalElements<'a>: CatalogueObject<'a> {
    fn period(&self) -> Option<Time>;

    fn semi_major_axis(&self) -> Option<Length>;

    fn eccentricity(&self) -> Option<f64> {
        self.node().number(Field::Eccentricity)
    }

    fn inclination(&self) -> Option<Angle> {
        self.node().measured(Field::Inclination)
    }

    /// Argument of periastron. A circular orbit (eccentricity exactly zero)
    /// with no catalogued value reads as 0°.
    fn periastron(&self) -> Option<Angle> {
        self.node()
            .measured(Field::Periastron)
            .or_else(|| (self.eccentricity() == Some(0.0)).then(Angle::zero))
    }

    fn longitude(&self) -> Option<Angle> {
        self.node().measured(Field::Longitude)
    }

    fn ascending_node(&self) -> Option<Angle> {
        self.node().measured(Field::AscendingNode)
    }

    /// Projected linear separation. Angular separations are not kept.
    fn separation(&self) -> Option<Length> {
        self.node().measured(Field::Separation)
    }

    /// Time of mid transit as a Julian date.
    fn transit_time(&self) -> Option<Time> {
        self.node().measured(Field::TransitTime)
    }
}

/// Apparent magnitudes.
pub trait Photometry<'a>: CatalogueObject<'a> {
    fn magnitude(&self, band: Band) -> Option<f64>;

    fn mag_v(&self) -> Option<f64> {
        self.magnitude(Band::V)
    }
}

/// Mass, size and position of a star or planet.
pub trait PhysicalBody<'a>: CatalogueObject<'a> {
    fn mass(&self) -> Option<Mass>;

    fn radius(&self) -> Option<Length>;

    fn temperature(&self) -> Option<Temperature>;

    /// Age of the body, else of the nearest ancestor that records one.
    fn age(&self) -> Option<Time> {
        self.node().inherited(Field::Age)
    }

    fn ra(&self) -> Option<Angle> {
        self.node().inherited(Field::RightAscension)
    }

    fn dec(&self) -> Option<Angle> {
        self.node().inherited(Field::Declination)
    }

    fn distance(&self) -> Option<Length> {
        self.node().inherited(Field::Distance)
    }

    fn surface_gravity(&self) -> Option<Acceleration> {
        SurfaceGravity::new(self.mass(), self.radius(), None)
            .and_then(|relation| relation.gravity())
            .ok()
    }

    /// log10 of the surface gravity in cm/s².
    fn logg(&self) -> Option<f64> {
        Logg::new(self.mass(), self.radius(), None)
            .and_then(|relation| relation.logg())
            .ok()
    }

    fn density(&self) -> Option<Density> {
        DensityRelation::new(self.mass(), self.radius(), None)
            .and_then(|relation| relation.density())
            .ok()
    }

    /// The binary this body orbits within, if any.
    fn binary(&self) -> Result<Binary<'a>, CatalogueError> {
        self.node()
            .ancestor(EntityKind::Binary)
            .map(Binary::from_node)
    }
}
