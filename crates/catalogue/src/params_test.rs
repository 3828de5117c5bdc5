use approx::assert_relative_eq;
use units::{Angle, Length, Mass, Quantity, Time, Unit};

use crate::entity::EntityKind;
use crate::params::{default_unit, Attributes, Field, Parameters, Value};

fn attributes(pairs: &[(&str, &str)]) -> Attributes {
    pairs
        .iter()
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .collect()
}

// ============================================================================
// Rejected keys
// ============================================================================

#[test]
fn structural_tags_are_rejected() {
    let mut params = Parameters::new(EntityKind::Star);
    for tag in ["system", "binary", "star", "planet", "moon"] {
        assert!(!params.add(tag, "anything"), "{tag} was stored");
    }
    assert!(params.is_empty());
}

#[test]
fn separation_needs_au_unit() {
    let mut params = Parameters::new(EntityKind::Planet);
    assert!(!params.add_param("separation", Some("0.4"), &attributes(&[("unit", "arcsec")])));
    assert!(!params.add_param("separation", Some("0.4"), &Attributes::new()));
    assert!(params.get(Field::Separation).is_none());

    assert!(params.add_param("separation", Some("330"), &attributes(&[("unit", "AU")])));
    assert_eq!(
        params.quantity(Field::Separation),
        Some(Quantity::new(330.0, Unit::AstronomicalUnit))
    );
}

#[test]
fn missing_value_without_limits_is_rejected() {
    let mut params = Parameters::new(EntityKind::Planet);
    assert!(!params.add_param("mass", None, &Attributes::new()));
    assert!(params.get(Field::Mass).is_none());
}

// ============================================================================
// Limits
// ============================================================================

#[test]
fn missing_value_uses_upper_limit_first() {
    let mut params = Parameters::new(EntityKind::Planet);
    let limits = attributes(&[("upperlimit", "2.5"), ("lowerlimit", "0.5")]);
    assert!(params.add_param("mass", None, &limits));
    assert_eq!(params.quantity(Field::Mass), Some(Quantity::new(2.5, Unit::JupiterMass)));
}

#[test]
fn missing_value_falls_back_to_lower_limit() {
    let mut params = Parameters::new(EntityKind::Planet);
    assert!(params.add_param("mass", None, &attributes(&[("lowerlimit", "0.5")])));
    assert_eq!(params.quantity(Field::Mass), Some(Quantity::new(0.5, Unit::JupiterMass)));
}

// ============================================================================
// Units per kind
// ============================================================================

#[test]
fn mass_unit_depends_on_kind() {
    let mut star = Parameters::new(EntityKind::Star);
    let mut planet = Parameters::new(EntityKind::Planet);
    star.add("mass", "0.98");
    planet.add("mass", "3.9");

    assert_eq!(star.quantity(Field::Mass).map(|q| q.unit()), Some(Unit::SolarMass));
    assert_eq!(planet.quantity(Field::Mass).map(|q| q.unit()), Some(Unit::JupiterMass));

    let planet_mass: Mass = planet.typed(Field::Mass).unwrap();
    assert_relative_eq!(planet_mass.to_jupiter_masses(), 3.9, epsilon = 1e-12);
}

#[test]
fn base_table_applies_to_every_kind() {
    for kind in [EntityKind::System, EntityKind::Binary, EntityKind::Star, EntityKind::Planet] {
        assert_eq!(default_unit(kind, Field::Distance), Some(Unit::Parsec));
        assert_eq!(default_unit(kind, Field::Age), Some(Unit::Gigayear));
        assert_eq!(default_unit(kind, Field::Temperature), Some(Unit::Kelvin));
        assert_eq!(default_unit(kind, Field::MagV), Some(Unit::Dimensionless));
    }
    assert_eq!(default_unit(EntityKind::System, Field::Mass), None);
    assert_eq!(default_unit(EntityKind::Star, Field::MagN), Some(Unit::Dimensionless));
    assert_eq!(default_unit(EntityKind::Planet, Field::MagN), None);
}

#[test]
fn binary_orbit_units() {
    let mut binary = Parameters::new(EntityKind::Binary);
    binary.add("semimajoraxis", "10");
    binary.add("period", "10");
    binary.add("periastron", "45");

    let a: Length = binary.typed(Field::SemiMajorAxis).unwrap();
    let p: Time = binary.typed(Field::Period).unwrap();
    let w: Angle = binary.typed(Field::Periastron).unwrap();
    assert_relative_eq!(a.to_au(), 10.0);
    assert_relative_eq!(p.to_days(), 10.0);
    assert_relative_eq!(w.to_degrees(), 45.0);
}

#[test]
fn unparsable_number_is_kept_as_text() {
    let mut params = Parameters::new(EntityKind::Star);
    assert!(params.add("mass", "about one"));
    assert_eq!(params.get(Field::Mass), Some(&Value::Text("about one".to_string())));
    assert_eq!(params.typed::<Mass>(Field::Mass), None);
}

#[test]
fn non_finite_number_is_not_a_measurement() {
    let mut params = Parameters::new(EntityKind::Star);
    assert!(params.add("mass", "nan"));
    assert!(params.add("radius", "inf"));
    assert_eq!(params.get(Field::Mass), Some(&Value::Text("nan".to_string())));
    assert_eq!(params.typed::<Mass>(Field::Mass), None);
    assert_eq!(params.typed::<Length>(Field::Radius), None);
    assert_eq!(params.number(Field::Mass), None);
}

#[test]
fn fields_without_unit_are_text() {
    let mut params = Parameters::new(EntityKind::Planet);
    params.add("discoverymethod", "transit");
    params.add("lastupdate", "12/12/08");
    assert_eq!(params.text(Field::DiscoveryMethod), Some("transit"));
    assert_eq!(params.text(Field::LastUpdate), Some("12/12/08"));
}

#[test]
fn unknown_tags_go_to_extensions() {
    let mut params = Parameters::new(EntityKind::Planet);
    assert!(params.add("spinorbitalignment", "12"));
    assert_eq!(params.extension("spinorbitalignment"), Some(&Value::Text("12".to_string())));
    assert!(!params.add("spinorbitalignment", "13"));
}

// ============================================================================
// Coordinates
// ============================================================================

#[test]
fn parses_sexagesimal_coordinates() {
    let mut params = Parameters::new(EntityKind::System);
    params.add("rightascension", "01 02 03");
    params.add("declination", "+04 05 06");

    let ra: Angle = params.typed(Field::RightAscension).unwrap();
    let dec: Angle = params.typed(Field::Declination).unwrap();
    assert_relative_eq!(ra.to_degrees(), 15.5125, epsilon = 1e-9);
    assert_relative_eq!(dec.to_degrees(), 4.0 + 5.0 / 60.0 + 6.0 / 3600.0, epsilon = 1e-9);
}

#[test]
fn bad_coordinates_are_kept_as_text() {
    let mut params = Parameters::new(EntityKind::System);
    assert!(params.add("declination", "north-ish"));
    assert_eq!(params.text(Field::Declination), Some("north-ish"));
}

// ============================================================================
// Duplicates
// ============================================================================

#[test]
fn second_name_becomes_alternate() {
    let mut params = Parameters::new(EntityKind::Star);
    assert!(params.add("name", "Example Star 1"));
    assert!(params.add("name", "HD 1"));
    assert_eq!(params.name(), Some("Example Star 1"));
    assert_eq!(params.alt_names(), ["HD 1"]);
}

#[test]
fn primary_name_replaces_canonical() {
    let mut params = Parameters::new(EntityKind::Planet);
    params.add("name", "KOI-97.01");
    assert!(params.add_param("name", Some("Kepler-7 b"), &attributes(&[("type", "pri")])));

    assert_eq!(params.name(), Some("Kepler-7 b"));
    assert_eq!(params.alt_names(), ["KOI-97.01"]);
    assert_eq!(params.all_names().collect::<Vec<_>>(), ["Kepler-7 b", "KOI-97.01"]);
}

#[test]
fn list_accumulates() {
    let mut params = Parameters::new(EntityKind::System);
    assert!(params.add("list", "Confirmed planets"));
    assert!(params.add("list", "Planets in binary systems"));
    assert_eq!(params.list(), ["Confirmed planets", "Planets in binary systems"]);
}

#[test]
fn first_value_wins_for_other_duplicates() {
    let mut params = Parameters::new(EntityKind::Planet);
    assert!(params.add("period", "111.2"));
    assert!(!params.add("period", "200"));
    let period: Time = params.typed(Field::Period).unwrap();
    assert_relative_eq!(period.to_days(), 111.2);
}

// ============================================================================
// Field names
// ============================================================================

#[test]
fn every_field_round_trips_through_its_tag() {
    for field in Field::ALL {
        assert_eq!(Field::from_tag(field.tag()), Some(*field));
    }
    assert_eq!(Field::from_tag("name"), None);
    assert_eq!(Field::MagV.to_string(), "magV");
}

#[test]
fn set_and_remove() {
    let mut params = Parameters::new(EntityKind::Star);
    params.add("magV", "9.0");
    assert_eq!(params.number(Field::MagV), Some(9.0));

    params.remove(Field::MagV);
    assert_eq!(params.number(Field::MagV), None);

    params.set(Field::MagV, Quantity::dimensionless(5.0));
    assert_eq!(params.number(Field::MagV), Some(5.0));
}
