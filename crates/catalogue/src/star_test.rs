use approx::assert_relative_eq;
use stellar::{Band, LuminosityClass};

use crate::config::ResolutionConfig;
use crate::entity::{Catalogue, EntityId, EntityKind};
use crate::fixtures::example_star;
use crate::flags::Flag;
use crate::params::{Field, Parameters};
use crate::resolver::Resolver;
use crate::traits::{CatalogueObject, Photometry, PhysicalBody};

fn example() -> (Catalogue, EntityId) {
    let mut catalogue = Catalogue::new();
    let star = example_star(&mut catalogue, 1, None).unwrap();
    (catalogue, star)
}

/// A4 star with V = 5 in a system with no distance.
fn distant_a4() -> (Catalogue, EntityId) {
    let mut catalogue = Catalogue::new();
    let system = catalogue.insert(Parameters::new(EntityKind::System), None).unwrap();
    let mut params = Parameters::new(EntityKind::Star);
    params.add("spectraltype", "A4");
    params.add("magV", "5");
    let star = catalogue.insert(params, Some(system)).unwrap();
    (catalogue, star)
}

// ============================================================================
// Measured values
// ============================================================================

#[test]
fn example_star_values() {
    let (catalogue, id) = example();
    let config = ResolutionConfig::default();
    let star = Resolver::new(&catalogue, &config).star(id).unwrap();

    assert_eq!(star.name(), "Example Star 1");
    assert_eq!(star.alt_names(), ["HD 1"]);
    assert_relative_eq!(star.age().unwrap().to_gyr(), 7.6, epsilon = 1e-9);
    assert_relative_eq!(star.mass().unwrap().to_solar_masses(), 0.98);
    assert_relative_eq!(star.radius().unwrap().to_solar_radii(), 0.95, epsilon = 1e-12);
    assert_relative_eq!(star.temperature().unwrap().to_kelvin(), 5370.0);
    assert_eq!(star.metallicity(), Some(0.43));
    assert_eq!(star.magnitude(Band::K), Some(7.3));
    assert_eq!(star.spectral_type().unwrap().spec_type(), "G5");
    assert!(star.flags().contains(Flag::Fake));
    assert_eq!(star.flags().len(), 1);
}

#[test]
fn position_comes_from_system() {
    let (catalogue, id) = example();
    let config = ResolutionConfig::default();
    let star = Resolver::new(&catalogue, &config).star(id).unwrap();

    assert_relative_eq!(star.ra().unwrap().to_degrees(), 15.5125, epsilon = 1e-9);
    assert_relative_eq!(star.distance().unwrap().to_parsecs(), 58.0, epsilon = 1e-9);
    assert!(!star.flags().contains(Flag::EstimatedDistance));
    assert_eq!(star.system().unwrap().name(), "Example System 1");
    assert!(star.binary().is_err());
}

#[test]
fn derived_surface_properties() {
    let (catalogue, id) = example();
    let config = ResolutionConfig::default();
    let star = Resolver::new(&catalogue, &config).star(id).unwrap();

    assert_relative_eq!(star.logg().unwrap(), 4.4739, epsilon = 1e-3);
    assert_relative_eq!(star.luminosity().unwrap().to_solar(), 0.6761, epsilon = 1e-3);
}

// ============================================================================
// Temperature
// ============================================================================

#[test]
fn temperature_estimated_from_mass() {
    let (mut catalogue, id) = example();
    catalogue.params_mut(id).unwrap().remove(Field::Temperature);
    let config = ResolutionConfig::default();
    let star = Resolver::new(&catalogue, &config).star(id).unwrap();

    assert_relative_eq!(star.temperature().unwrap().to_kelvin(), 5724.33, epsilon = 1e-2);
    assert!(star.flags().contains(Flag::CalculatedTemperature));
}

#[test]
fn no_temperature_without_estimates() {
    let (mut catalogue, id) = example();
    catalogue.params_mut(id).unwrap().remove(Field::Temperature);
    let config = ResolutionConfig::measured_only();
    let star = Resolver::new(&catalogue, &config).star(id).unwrap();

    assert_eq!(star.temperature(), None);
    assert!(!star.flags().contains(Flag::CalculatedTemperature));
}

#[test]
fn nan_mass_is_not_used_for_estimates() {
    let mut catalogue = Catalogue::new();
    let system = catalogue.insert(Parameters::new(EntityKind::System), None).unwrap();
    let mut params = Parameters::new(EntityKind::Star);
    params.add("mass", "nan");
    let id = catalogue.insert(params, Some(system)).unwrap();
    let config = ResolutionConfig::default();
    let star = Resolver::new(&catalogue, &config).star(id).unwrap();

    assert_eq!(star.mass(), None);
    assert_eq!(star.temperature(), None);
    assert!(star.flags().is_empty());
}

// ============================================================================
// Distance
// ============================================================================

#[test]
fn distance_estimated_from_magnitude() {
    let (catalogue, id) = distant_a4();
    let config = ResolutionConfig::default();
    let star = Resolver::new(&catalogue, &config).star(id).unwrap();

    assert_relative_eq!(star.absolute_magnitude().unwrap(), 1.725, epsilon = 1e-9);
    assert_relative_eq!(star.distance().unwrap().to_parsecs(), 45.19, epsilon = 1e-2);
    assert!(star.flags().contains(Flag::EstimatedDistance));
}

#[test]
fn measured_distance_is_not_flagged() {
    let (mut catalogue, id) = distant_a4();
    catalogue.params_mut(id).unwrap().add("distance", "10");
    let config = ResolutionConfig::default();
    let star = Resolver::new(&catalogue, &config).star(id).unwrap();

    assert_relative_eq!(star.distance().unwrap().to_parsecs(), 10.0, epsilon = 1e-9);
    assert!(star.flags().is_empty());
}

#[test]
fn no_distance_without_spectral_type() {
    let (mut catalogue, id) = distant_a4();
    catalogue.params_mut(id).unwrap().remove(Field::SpectralType);
    let config = ResolutionConfig::default();
    let star = Resolver::new(&catalogue, &config).star(id).unwrap();

    assert_eq!(star.distance(), None);
    assert!(star.flags().is_empty());
}

// ============================================================================
// Magnitudes
// ============================================================================

#[test]
fn measured_v_is_not_flagged() {
    let (catalogue, id) = example();
    let config = ResolutionConfig::default();
    let star = Resolver::new(&catalogue, &config).star(id).unwrap();

    assert_eq!(star.mag_v(), Some(9.0));
    assert!(!star.flags().contains(Flag::EstimatedMagnitude(Band::V)));
}

#[test]
fn missing_v_converted_from_b() {
    let (mut catalogue, id) = example();
    catalogue.params_mut(id).unwrap().remove(Field::MagV);
    let config = ResolutionConfig::default();
    let star = Resolver::new(&catalogue, &config).star(id).unwrap();

    assert_relative_eq!(star.mag_v().unwrap(), 9.14, epsilon = 1e-9);
    assert!(star.flags().contains(Flag::EstimatedMagnitude(Band::V)));
}

#[test]
fn missing_band_stays_missing_for_giants() {
    let mut catalogue = Catalogue::new();
    let system = catalogue.insert(Parameters::new(EntityKind::System), None).unwrap();
    let mut params = Parameters::new(EntityKind::Star);
    params.add("spectraltype", "K1III");
    params.add("magV", "6.0");
    let id = catalogue.insert(params, Some(system)).unwrap();

    let config = ResolutionConfig::default();
    let star = Resolver::new(&catalogue, &config).star(id).unwrap();

    assert_eq!(
        star.spectral_type().unwrap().luminosity_class(),
        Some(LuminosityClass::III)
    );
    assert_eq!(star.magnitude(Band::K), None);
    assert!(star.flags().is_empty());
}

#[test]
fn measured_only_config_skips_conversion() {
    let (mut catalogue, id) = example();
    catalogue.params_mut(id).unwrap().remove(Field::MagV);
    let config = ResolutionConfig::measured_only();
    let star = Resolver::new(&catalogue, &config).star(id).unwrap();

    assert_eq!(star.mag_v(), None);
    assert_eq!(star.flags().len(), 1);
}

#[test]
fn view_of_wrong_kind_is_an_error() {
    let (catalogue, id) = example();
    let config = ResolutionConfig::default();
    let resolver = Resolver::new(&catalogue, &config);

    assert!(resolver.planet(id).is_err());
    let planets = resolver.star(id).unwrap().planets();
    assert!(planets.is_empty());
}
