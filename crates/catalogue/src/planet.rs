use equations::{
    ratio_terminator_to_star, transit_duration_circular, Density as DensityRelation,
    ImpactParameter, KeplersThirdLaw, MeanPlanetTemp, ScaleHeight, TransitDepth,
    TransitDuration, DEFAULT_EPSILON,
};
use units::{Angle, Length, Mass, MolecularWeight, Temperature, Time};

use crate::assumptions::{SizeClass, TemperatureClass};
use crate::entity::EntityKind;
use crate::error::CatalogueError;
use crate::flags::Flag;
use crate::params::Field;
use crate::resolver::Node;
use crate::star::Star;
use crate::traits::{CatalogueObject, OrbitalElements, PhysicalBody};

#[derive(Debug, Clone, Copy)]
pub struct Planet<'a> {
    node: Node<'a>,
}

impl<'a> Planet<'a> {
    pub(crate) fn from_node(node: Node<'a>) -> Self {
        Self { node }
    }

    /// The host star. Circumbinary and free floating planets have none.
    pub fn star(&self) -> Result<Star<'a>, CatalogueError> {
        self.node.ancestor(EntityKind::Star).map(Star::from_node)
    }

    /// Mass the planet orbits: the host star, else the enclosing binary.
    pub fn host_mass(&self) -> Option<Mass> {
        match self.star() {
            Ok(star) => star.mass(),
            Err(_) => self.binary().ok()?.total_mass(),
        }
    }

    fn host_temperature(&self) -> Option<Temperature> {
        self.star().ok()?.temperature()
    }

    fn host_radius(&self) -> Option<Length> {
        self.star().ok()?.radius()
    }

    pub fn discovery_method(&self) -> Option<&'a str> {
        self.node.text(Field::DiscoveryMethod)
    }

    pub fn discovery_year(&self) -> Option<i32> {
        let year = self.node.number(Field::DiscoveryYear)?.round();
        (year.is_finite() && year >= f64::from(i32::MIN) && year <= f64::from(i32::MAX))
            .then(|| year as i32)
    }

    pub fn last_update(&self) -> Option<&'a str> {
        self.node.text(Field::LastUpdate)
    }

    pub fn description(&self) -> Option<&'a str> {
        self.node.text(Field::Description)
    }

    /// Whether the planet is known to transit its star: flagged as such,
    /// discovered by the transit method, or with a measured radius.
    pub fn is_transiting(&self) -> bool {
        self.node.text(Field::IsTransiting) == Some("1")
            || self.discovery_method() == Some("transit")
            || self.radius().is_some()
    }

    /// Albedo as catalogued, else assumed from the temperature class when
    /// the temperature is measured, else from the size class.
    pub fn albedo(&self) -> Option<f64> {
        if let Some(albedo) = self.node.number(Field::Albedo) {
            return Some(albedo);
        }
        let assumptions = &self.node.resolver().config().assumptions;
        if let Some(temperature) = self.node.measured::<Temperature>(Field::Temperature) {
            let class = assumptions.temperature_class(temperature);
            return Some(assumptions.albedo_by_temperature.get(class));
        }
        let size = self.size_class()?;
        Some(assumptions.albedo_by_size.get(size))
    }

    /// Size class from the mass, else from the radius.
    pub fn size_class(&self) -> Option<SizeClass> {
        let assumptions = &self.node.resolver().config().assumptions;
        match (self.mass(), self.radius()) {
            (Some(mass), _) => Some(assumptions.size_class_from_mass(mass)),
            (None, Some(radius)) => Some(assumptions.size_class_from_radius(radius)),
            (None, None) => None,
        }
    }

    pub fn temperature_class(&self) -> Option<TemperatureClass> {
        let assumptions = &self.node.resolver().config().assumptions;
        Some(assumptions.temperature_class(self.temperature()?))
    }

    /// Label such as `"Hot Jupiter"`.
    pub fn planet_type(&self) -> Option<String> {
        let assumptions = &self.node.resolver().config().assumptions;
        Some(assumptions.planet_type(self.temperature_class()?, self.size_class()?))
    }

    /// Mean molecular weight of the atmosphere, else the value assumed for
    /// the size class.
    pub fn mean_molecular_weight(&self) -> Option<MolecularWeight> {
        if let Some(mu) = self.node.measured(Field::MolecularWeight) {
            return Some(mu);
        }
        let assumptions = &self.node.resolver().config().assumptions;
        Some(assumptions.mean_molecular_weight.get(self.size_class()?))
    }

    /// Mass from the radius and the bulk density assumed for the radius
    /// class. Flags the planet when an estimate is made. Never used by
    /// [`PhysicalBody::mass`].
    pub fn estimate_mass(&self) -> Option<Mass> {
        let radius = self.radius()?;
        let assumptions = &self.node.resolver().config().assumptions;
        let density = assumptions
            .density
            .get(assumptions.size_class_from_radius(radius));
        let mass = DensityRelation::new(None, Some(radius), Some(density))
            .and_then(|relation| relation.mass())
            .ok()?;
        self.flags().add(Flag::EstimatedMass);
        Some(mass)
    }

    /// Fraction of the stellar flux blocked at mid transit, `(R_p / R_s)²`.
    pub fn transit_depth(&self) -> Option<f64> {
        TransitDepth::new(self.host_radius(), self.radius(), None)
            .and_then(|relation| relation.depth())
            .ok()
    }

    /// Transit duration for the full orbit. Eccentricity and periastron
    /// default to a circular orbit when not catalogued.
    pub fn transit_duration(&self) -> Option<Time> {
        let inclination = self.inclination()?;
        let duration = TransitDuration::new(
            self.period()?,
            self.semi_major_axis()?,
            self.radius()?,
            self.host_radius()?,
            inclination,
            self.eccentricity().unwrap_or(0.0),
            self.periastron().unwrap_or_else(Angle::zero),
        );
        duration.duration().ok()
    }

    /// Transit duration assuming a circular orbit, edge on when the
    /// inclination is unknown.
    pub fn transit_duration_circular(&self) -> Option<Time> {
        transit_duration_circular(
            self.period()?,
            self.host_radius()?,
            self.radius()?,
            self.semi_major_axis()?,
            self.inclination(),
        )
        .ok()
    }

    pub fn impact_parameter(&self) -> Option<f64> {
        ImpactParameter::new(
            self.semi_major_axis(),
            self.host_radius(),
            self.inclination(),
            None,
        )
        .and_then(|relation| relation.impact_parameter())
        .ok()
    }

    /// Atmospheric scale height from the temperature, mean molecular weight
    /// and surface gravity.
    pub fn scale_height(&self) -> Option<Length> {
        ScaleHeight::new(
            self.temperature(),
            self.mean_molecular_weight(),
            self.surface_gravity(),
            None,
        )
        .and_then(|relation| relation.scale_height())
        .ok()
    }

    /// Flux ratio of a five scale height deep atmosphere ring to the star.
    pub fn ratio_terminator_to_star(&self) -> Option<f64> {
        Some(ratio_terminator_to_star(
            self.scale_height()?,
            self.radius()?,
            self.host_radius()?,
        ))
    }

    fn kepler_semi_major_axis(&self) -> Option<Length> {
        let period = self.node.measured(Field::Period)?;
        KeplersThirdLaw::new(None, self.host_mass(), Some(period), Some(Mass::zero()))
            .and_then(|kepler| kepler.semi_major_axis())
            .ok()
    }

    fn temperature_semi_major_axis(&self) -> Option<Length> {
        let temperature = self.node.measured(Field::Temperature)?;
        MeanPlanetTemp::new(
            self.albedo(),
            self.host_temperature(),
            self.host_radius(),
            None,
            Some(DEFAULT_EPSILON),
            Some(temperature),
        )
        .and_then(|relation| relation.semi_major_axis())
        .ok()
    }
}

impl<'a> CatalogueObject<'a> for Planet<'a> {
    fn node(&self) -> Node<'a> {
        self.node
    }
}

impl<'a> OrbitalElements<'a> for Planet<'a> {
    /// Catalogued period, else from Kepler's third law with the host mass.
    fn period(&self) -> Option<Time> {
        self.node.resolve(Field::Period, Flag::CalculatedPeriod, || {
            KeplersThirdLaw::new(
                self.semi_major_axis(),
                self.host_mass(),
                None,
                Some(Mass::zero()),
            )
            .and_then(|kepler| kepler.period())
            .ok()
        })
    }

    /// Catalogued semi-major axis, else from the period and host mass, else
    /// from the measured equilibrium temperature.
    fn semi_major_axis(&self) -> Option<Length> {
        self.node
            .resolve(Field::SemiMajorAxis, Flag::CalculatedSma, || {
                self.kepler_semi_major_axis()
                    .or_else(|| self.temperature_semi_major_axis())
            })
    }
}

impl<'a> PhysicalBody<'a> for Planet<'a> {
    fn mass(&self) -> Option<Mass> {
        self.node.measured(Field::Mass)
    }

    fn radius(&self) -> Option<Length> {
        self.node.measured(Field::Radius)
    }

    /// Catalogued distance, else the host star's (which may be estimated),
    /// else the nearest catalogued ancestor's.
    fn distance(&self) -> Option<Length> {
        self.node
            .measured(Field::Distance)
            .or_else(|| self.star().ok()?.distance())
            .or_else(|| self.node.inherited(Field::Distance))
    }

    /// Catalogued temperature, else the mean equilibrium temperature from
    /// the host star and orbit.
    fn temperature(&self) -> Option<Temperature> {
        self.node
            .resolve(Field::Temperature, Flag::CalculatedTemperature, || {
                MeanPlanetTemp::new(
                    self.albedo(),
                    self.host_temperature(),
                    self.host_radius(),
                    self.semi_major_axis(),
                    Some(DEFAULT_EPSILON),
                    None,
                )
                .and_then(|relation| relation.planet_temperature())
                .ok()
            })
    }
}
