use equations::{estimate_distance, estimate_stellar_temperature, StellarLuminosity};
use stellar::{estimate_absolute_magnitude, Band, Magnitudes, SpectralType};
use tracing::debug;
use units::{Length, Luminosity, Mass, Temperature};

use crate::binary::magnitude_param;
use crate::entity::EntityKind;
use crate::flags::Flag;
use crate::params::Field;
use crate::planet::Planet;
use crate::resolver::Node;
use crate::traits::{CatalogueObject, Photometry, PhysicalBody};

#[derive(Debug, Clone, Copy)]
pub struct Star<'a> {
    node: Node<'a>,
}

impl<'a> Star<'a> {
    pub(crate) fn from_node(node: Node<'a>) -> Self {
        Self { node }
    }

    pub fn planets(&self) -> Vec<Planet<'a>> {
        self.node
            .children_of(EntityKind::Planet)
            .map(Planet::from_node)
            .collect()
    }

    /// Iron abundance [Fe/H].
    pub fn metallicity(&self) -> Option<f64> {
        self.node.number(Field::Metallicity)
    }

    pub fn spectral_type(&self) -> Option<SpectralType> {
        let text = self.node.text(Field::SpectralType)?;
        Some(SpectralType::parse(text)).filter(|spectral| !spectral.is_empty())
    }

    /// Catalogued magnitudes together with the spectral type used to convert
    /// between bands.
    pub fn magnitudes(&self) -> Magnitudes {
        let mut magnitudes = Magnitudes::new(self.spectral_type().unwrap_or_default());
        for band in Band::ALL {
            magnitudes.set(band, magnitude_param(self.node.params(), band));
        }
        magnitudes
    }

    /// Absolute V magnitude looked up from the spectral type.
    pub fn absolute_magnitude(&self) -> Option<f64> {
        estimate_absolute_magnitude(&self.spectral_type()?)
    }

    /// Distance from the distance modulus of the V magnitude, assuming no
    /// extinction.
    pub fn estimate_distance(&self) -> Option<Length> {
        let apparent = self.magnitude(Band::V)?;
        let absolute = self.absolute_magnitude()?;
        estimate_distance(apparent, absolute, 0.0).ok()
    }

    /// Bolometric luminosity from radius and effective temperature.
    pub fn luminosity(&self) -> Option<Luminosity> {
        StellarLuminosity::new(self.radius(), self.temperature(), None)
            .and_then(|relation| relation.luminosity())
            .ok()
    }
}

impl<'a> CatalogueObject<'a> for Star<'a> {
    fn node(&self) -> Node<'a> {
        self.node
    }
}

impl<'a> Photometry<'a> for Star<'a> {
    /// The catalogued magnitude, else one converted from another band
    /// through the main sequence colours of the spectral type.
    fn magnitude(&self, band: Band) -> Option<f64> {
        if let Some(value) = magnitude_param(self.node.params(), band) {
            return Some(value);
        }
        self.node.estimated(Flag::EstimatedMagnitude(band), || {
            match self.magnitudes().convert(band, None) {
                Ok(value) => Some(value),
                Err(err) => {
                    debug!(star = %self.name(), %band, %err, "cannot convert magnitude");
                    None
                }
            }
        })
    }
}

impl<'a> PhysicalBody<'a> for Star<'a> {
    fn mass(&self) -> Option<Mass> {
        self.node.measured(Field::Mass)
    }

    fn radius(&self) -> Option<Length> {
        self.node.measured(Field::Radius)
    }

    /// Catalogued temperature, else the main sequence estimate from mass.
    fn temperature(&self) -> Option<Temperature> {
        self.node
            .resolve(Field::Temperature, Flag::CalculatedTemperature, || {
                self.mass().map(estimate_stellar_temperature)
            })
    }

    /// Distance of the star or its enclosing binary or system, else estimated
    /// from the V magnitude and spectral type.
    fn distance(&self) -> Option<Length> {
        self.node.inherited(Field::Distance).or_else(|| {
            self.node
                .estimated(Flag::EstimatedDistance, || self.estimate_distance())
        })
    }
}
