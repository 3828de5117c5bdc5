use units::{Angle, Length, Time};

use crate::binary::Binary;
use crate::entity::EntityKind;
use crate::params::Field;
use crate::planet::Planet;
use crate::resolver::Node;
use crate::star::Star;
use crate::traits::CatalogueObject;

/// Root of a planetary system: sky position and distance shared by
/// everything inside it.
#[derive(Debug, Clone, Copy)]
pub struct System<'a> {
    node: Node<'a>,
}

impl<'a> System<'a> {
    pub(crate) fn from_node(node: Node<'a>) -> Self {
        Self { node }
    }

    pub fn ra(&self) -> Option<Angle> {
        self.node.measured(Field::RightAscension)
    }

    pub fn dec(&self) -> Option<Angle> {
        self.node.measured(Field::Declination)
    }

    pub fn distance(&self) -> Option<Length> {
        self.node.measured(Field::Distance)
    }

    /// Reference epoch of the coordinates, as a Julian date.
    pub fn epoch(&self) -> Option<Time> {
        self.node.measured(Field::Epoch)
    }

    pub fn binaries(&self) -> Vec<Binary<'a>> {
        self.node
            .children_of(EntityKind::Binary)
            .map(Binary::from_node)
            .collect()
    }

    /// Stars directly in the system, not those inside binaries.
    pub fn stars(&self) -> Vec<Star<'a>> {
        self.node
            .children_of(EntityKind::Star)
            .map(Star::from_node)
            .collect()
    }

    /// Free floating planets attached directly to the system.
    pub fn planets(&self) -> Vec<Planet<'a>> {
        self.node
            .children_of(EntityKind::Planet)
            .map(Planet::from_node)
            .collect()
    }
}

impl<'a> CatalogueObject<'a> for System<'a> {
    fn node(&self) -> Node<'a> {
        self.node
    }
}
