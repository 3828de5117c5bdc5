//! Loads a hierarchical triple through the public API and checks that values
//! flow down the tree and that estimates are flagged only when they are made.

use approx::assert_relative_eq;
use catalogue::fixtures::example_planet;
use catalogue::{
    Catalogue, CatalogueObject, Database, Field, Flag, OrbitalElements, PhysicalBody, Record,
    ResolutionConfig, Resolver,
};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// HD 41004: an inner pair (A, B) orbited by a third star C with a planet.
fn triple() -> Record {
    let star = |name: &str, mass: &str| Record::new("star").param("name", name).param("mass", mass);

    Record::new("system")
        .param("name", "HD 41004")
        .param("rightascension", "05 59 49.6")
        .param("declination", "-48 14 22.9")
        .param("distance", "43.03")
        .child(
            Record::new("binary")
                .param("name", "HD 41004 ABC")
                .child(
                    Record::new("binary")
                        .param("name", "HD 41004 AB")
                        .child(star("HD 41004 A", "0.7"))
                        .child(star("HD 41004 B", "0.4")),
                )
                .child(
                    star("HD 41004 C", "0.5")
                        .param("age", "1.6")
                        .param("temperature", "4750")
                        .param("radius", "0.67")
                        .child(
                            Record::new("planet")
                                .param("name", "HD 41004 C b")
                                .param("mass", "18.4")
                                .param("period", "1.3283")
                                .param("eccentricity", "0.081"),
                        ),
                ),
        )
}

#[test]
fn values_flow_down_the_tree() {
    init_tracing();
    let database = Database::from_records(vec![triple()]);
    assert!(database.load_errors().is_empty());

    let planet = database.planet("HD 41004 C b").unwrap();
    let system = database.system("HD 41004").unwrap();

    assert_eq!(planet.system().unwrap().id(), system.id());
    assert_relative_eq!(planet.ra().unwrap().to_degrees(), system.ra().unwrap().to_degrees());
    assert_relative_eq!(planet.distance().unwrap().to_parsecs(), 43.03, epsilon = 1e-9);
    assert_relative_eq!(planet.age().unwrap().to_gyr(), 1.6, epsilon = 1e-9);
    assert_relative_eq!(planet.host_mass().unwrap().to_solar_masses(), 0.5);
    assert_eq!(planet.binary().unwrap().name(), "HD 41004 ABC");
    assert_eq!(system.binaries().len(), 1);
    assert!(system.stars().is_empty());
    assert!(system.planets().is_empty());
}

#[test]
fn nested_binaries_sum_their_masses() {
    let database = Database::from_records(vec![triple()]);

    let inner = database.binary("HD 41004 AB").unwrap();
    let outer = database.binary("HD 41004 ABC").unwrap();

    assert_relative_eq!(inner.total_mass().unwrap().to_solar_masses(), 1.1, epsilon = 1e-12);
    assert_relative_eq!(outer.total_mass().unwrap().to_solar_masses(), 1.6, epsilon = 1e-12);
    assert_eq!(outer.binaries().len(), 1);
    assert_eq!(inner.parent(), Some(outer.id()));
}

#[test]
fn estimates_are_flagged_only_when_made() {
    let database = Database::from_records(vec![triple()]);
    let planet = database.planet("HD 41004 C b").unwrap();

    assert_relative_eq!(planet.period().unwrap().to_days(), 1.3283);
    assert_eq!(planet.eccentricity(), Some(0.081));
    assert!(planet.flags().is_empty());

    assert!(planet.semi_major_axis().is_some());
    assert!(planet.flags().contains(Flag::CalculatedSma));
    assert!(!planet.flags().contains(Flag::CalculatedPeriod));
}

#[test]
fn measured_only_config_leaves_gaps() {
    let database = Database::with_config(vec![triple()], ResolutionConfig::measured_only());
    let planet = database.planet("HD 41004 C b").unwrap();

    assert_eq!(planet.semi_major_axis(), None);
    assert_eq!(planet.temperature(), None);
    assert!(planet.flags().is_empty());
}

#[test]
fn primary_name_replaces_current_name() {
    let record = Record::new("system").param("name", "Fomalhaut").child(
        Record::new("star")
            .param("name", "HD 216956")
            .param_with("name", Some("Fomalhaut"), &[("type", "pri")])
            .param("mass", "1.92")
            .param("mass", "2.1"),
    );
    let database = Database::from_records(vec![record]);

    let star = database.star("HD 216956").unwrap();
    assert_eq!(star.name(), "Fomalhaut");
    assert_eq!(star.alt_names(), ["HD 216956"]);
    assert_relative_eq!(star.mass().unwrap().to_solar_masses(), 1.92);
}

#[test]
fn example_planet_through_public_api() {
    let mut catalogue = Catalogue::new();
    let id = example_planet(&mut catalogue, 3, Some('A')).unwrap();
    let config = ResolutionConfig::default();
    let planet = Resolver::new(&catalogue, &config).planet(id).unwrap();

    assert_eq!(planet.name(), "Example Star 3A b");
    assert_eq!(planet.star().unwrap().name(), "Example Star 3A");
    assert_eq!(planet.binary().unwrap().name(), "Example Binary 3AB");
    assert_relative_eq!(planet.separation().unwrap().to_au(), 330.0);
    assert!(planet.params().get(Field::TransitTime).is_some());

    let database = Database::from_catalogue(catalogue, config);
    assert_eq!(database.transiting_planets().count(), 1);
    assert_eq!(database.stars().count(), 2);
}
