use approx::assert_relative_eq;
use stellar::Band;

use crate::config::ResolutionConfig;
use crate::entity::{Catalogue, EntityKind};
use crate::fixtures::{example_binary, example_star};
use crate::flags::Flag;
use crate::params::{Field, Parameters};
use crate::resolver::Resolver;
use crate::traits::{CatalogueObject, OrbitalElements, Photometry, PhysicalBody};

#[test]
fn example_binary_holds_companion() {
    let mut catalogue = Catalogue::new();
    let id = example_binary(&mut catalogue, 2).unwrap();
    let config = ResolutionConfig::default();
    let binary = Resolver::new(&catalogue, &config).binary(id).unwrap();

    assert_eq!(binary.name(), "Example Binary 2AB");
    let stars = binary.stars();
    assert_eq!(stars.len(), 1);
    assert_eq!(stars[0].name(), "Example Star 2B");
    assert_eq!(stars[0].binary().unwrap().id(), id);
    assert_relative_eq!(binary.total_mass().unwrap().to_solar_masses(), 0.98, epsilon = 1e-12);
    assert_relative_eq!(binary.period().unwrap().to_days(), 10.0);
    assert_relative_eq!(binary.semi_major_axis().unwrap().to_au(), 10.0);
    assert!(binary.flags().contains(Flag::Fake));
}

#[test]
fn star_with_letter_joins_binary() {
    let mut catalogue = Catalogue::new();
    let id = example_star(&mut catalogue, 1, Some('A')).unwrap();
    let config = ResolutionConfig::default();
    let star = Resolver::new(&catalogue, &config).star(id).unwrap();

    assert_eq!(star.name(), "Example Star 1A");
    assert_eq!(star.alt_names(), ["HD 1A"]);
    let binary = star.binary().unwrap();
    assert_eq!(binary.stars().len(), 2);
    assert_relative_eq!(binary.total_mass().unwrap().to_solar_masses(), 1.96, epsilon = 1e-12);
    assert_relative_eq!(binary.distance().unwrap().to_parsecs(), 58.0, epsilon = 1e-9);
    assert_relative_eq!(star.distance().unwrap().to_parsecs(), 58.0, epsilon = 1e-9);
}

#[test]
fn period_from_total_mass() {
    let mut catalogue = Catalogue::new();
    let star = example_star(&mut catalogue, 1, Some('A')).unwrap();
    let id = catalogue.get(star).unwrap().parent().unwrap();
    catalogue.params_mut(id).unwrap().remove(Field::Period);

    let config = ResolutionConfig::default();
    let binary = Resolver::new(&catalogue, &config).binary(id).unwrap();

    assert_relative_eq!(binary.period().unwrap().to_days(), 8250.19, epsilon = 1e-1);
    assert!(binary.flags().contains(Flag::CalculatedPeriod));
}

#[test]
fn semi_major_axis_from_total_mass() {
    let mut catalogue = Catalogue::new();
    let star = example_star(&mut catalogue, 1, Some('A')).unwrap();
    let id = catalogue.get(star).unwrap().parent().unwrap();
    catalogue.params_mut(id).unwrap().remove(Field::SemiMajorAxis);

    let config = ResolutionConfig::default();
    let binary = Resolver::new(&catalogue, &config).binary(id).unwrap();

    assert_relative_eq!(binary.semi_major_axis().unwrap().to_au(), 0.11368, epsilon = 1e-4);
    assert!(binary.flags().contains(Flag::CalculatedSma));
}

#[test]
fn total_mass_needs_every_component() {
    let mut catalogue = Catalogue::new();
    let system = catalogue.insert(Parameters::new(EntityKind::System), None).unwrap();
    let binary = catalogue.insert(Parameters::new(EntityKind::Binary), Some(system)).unwrap();
    let empty = catalogue.insert(Parameters::new(EntityKind::Binary), Some(system)).unwrap();
    let mut known = Parameters::new(EntityKind::Star);
    known.add("mass", "1.0");
    catalogue.insert(known, Some(binary)).unwrap();
    catalogue.insert(Parameters::new(EntityKind::Star), Some(binary)).unwrap();

    let config = ResolutionConfig::default();
    let resolver = Resolver::new(&catalogue, &config);
    assert_eq!(resolver.binary(binary).unwrap().total_mass(), None);
    assert_eq!(resolver.binary(empty).unwrap().total_mass(), None);
}

#[test]
fn magnitudes_are_measured_only() {
    let mut catalogue = Catalogue::new();
    let system = catalogue.insert(Parameters::new(EntityKind::System), None).unwrap();
    let mut params = Parameters::new(EntityKind::Binary);
    params.add("magV", "8.1");
    let id = catalogue.insert(params, Some(system)).unwrap();

    let config = ResolutionConfig::default();
    let binary = Resolver::new(&catalogue, &config).binary(id).unwrap();

    assert_eq!(binary.magnitude(Band::V), Some(8.1));
    assert_eq!(binary.magnitude(Band::K), None);
    assert!(binary.flags().is_empty());
}
