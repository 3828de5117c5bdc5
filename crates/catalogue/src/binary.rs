use equations::KeplersThirdLaw;
use stellar::Band;
use units::{Angle, Length, Mass, Time};

use crate::entity::EntityKind;
use crate::flags::Flag;
use crate::params::{Field, Parameters};
use crate::planet::Planet;
use crate::resolver::Node;
use crate::star::Star;
use crate::traits::{CatalogueObject, OrbitalElements, Photometry, PhysicalBody};

/// Two components orbiting each other. Components are stars or nested
/// binaries, and circumbinary planets hang directly off the binary.
#[derive(Debug, Clone, Copy)]
pub struct Binary<'a> {
    node: Node<'a>,
}

impl<'a> Binary<'a> {
    pub(crate) fn from_node(node: Node<'a>) -> Self {
        Self { node }
    }

    pub fn stars(&self) -> Vec<Star<'a>> {
        self.node
            .children_of(EntityKind::Star)
            .map(Star::from_node)
            .collect()
    }

    pub fn binaries(&self) -> Vec<Binary<'a>> {
        self.node
            .children_of(EntityKind::Binary)
            .map(Binary::from_node)
            .collect()
    }

    pub fn planets(&self) -> Vec<Planet<'a>> {
        self.node
            .children_of(EntityKind::Planet)
            .map(Planet::from_node)
            .collect()
    }

    /// Summed mass of every star in the binary, nested binaries included.
    /// `None` if any component mass is unknown or there are no components.
    pub fn total_mass(&self) -> Option<Mass> {
        let stars = self.stars();
        let binaries = self.binaries();
        if stars.is_empty() && binaries.is_empty() {
            return None;
        }

        let star_masses = stars.iter().map(|star| star.mass());
        let binary_masses = binaries.iter().map(|binary| binary.total_mass());
        star_masses
            .chain(binary_masses)
            .try_fold(Mass::zero(), |total, mass| Some(total + mass?))
    }

    pub fn ra(&self) -> Option<Angle> {
        self.node.inherited(Field::RightAscension)
    }

    pub fn dec(&self) -> Option<Angle> {
        self.node.inherited(Field::Declination)
    }

    pub fn distance(&self) -> Option<Length> {
        self.node.inherited(Field::Distance)
    }

    fn kepler_period(&self) -> Option<Time> {
        let relation = KeplersThirdLaw::new(
            self.semi_major_axis(),
            self.total_mass(),
            None,
            Some(Mass::zero()),
        );
        relation.and_then(|kepler| kepler.period()).ok()
    }

    fn kepler_semi_major_axis(&self) -> Option<Length> {
        let period = self.node.measured(Field::Period);
        let relation = KeplersThirdLaw::new(None, self.total_mass(), period, Some(Mass::zero()));
        relation.and_then(|kepler| kepler.semi_major_axis()).ok()
    }
}

impl<'a> CatalogueObject<'a> for Binary<'a> {
    fn node(&self) -> Node<'a> {
        self.node
    }
}

impl<'a> OrbitalElements<'a> for Binary<'a> {
    fn period(&self) -> Option<Time> {
        self.node.resolve(Field::Period, Flag::CalculatedPeriod, || {
            self.kepler_period()
        })
    }

    fn semi_major_axis(&self) -> Option<Length> {
        self.node
            .resolve(Field::SemiMajorAxis, Flag::CalculatedSma, || {
                self.kepler_semi_major_axis()
            })
    }
}

impl<'a> Photometry<'a> for Binary<'a> {
    /// Combined light of the components as catalogued. Binaries have no
    /// spectral type to convert through.
    fn magnitude(&self, band: Band) -> Option<f64> {
        magnitude_param(self.node.params(), band)
    }
}

pub(crate) fn magnitude_param(params: &Parameters, band: Band) -> Option<f64> {
    params
        .number(Field::magnitude(band))
        .filter(|value| !value.is_nan())
}
