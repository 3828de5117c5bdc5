//! Example objects with fixed parameters, flagged `Fake`.
//!
//! Each builder inserts a complete hierarchy into the catalogue and returns
//! the id of the object asked for. `number` distinguishes repeated examples
//! in one catalogue: the star of example 2 is `"Example Star 2"`. A binary
//! letter places the star inside an example binary, which already holds a
//! companion star `B`.

use crate::entity::{Catalogue, EntityId, EntityKind};
use crate::error::CatalogueError;
use crate::flags::Flag;
use crate::params::{Attributes, Parameters};

fn insert_fake(
    catalogue: &mut Catalogue,
    params: Parameters,
    parent: Option<EntityId>,
) -> Result<EntityId, CatalogueError> {
    let id = catalogue.insert(params, parent)?;
    catalogue.get(id)?.flags().add(Flag::Fake);
    Ok(id)
}

fn with_values(kind: EntityKind, values: &[(&str, &str)]) -> Parameters {
    let mut params = Parameters::new(kind);
    for (key, value) in values {
        params.add(key, value);
    }
    params
}

pub fn example_system(catalogue: &mut Catalogue, number: usize) -> Result<EntityId, CatalogueError> {
    let name = format!("Example System {number}");
    let params = with_values(
        EntityKind::System,
        &[
            ("name", name.as_str()),
            ("distance", "58"),
            ("declination", "+04 05 06"),
            ("rightascension", "01 02 03"),
        ],
    );
    insert_fake(catalogue, params, None)
}

/// An example binary inside a new example system, holding star `B`.
pub fn example_binary(catalogue: &mut Catalogue, number: usize) -> Result<EntityId, CatalogueError> {
    let system = example_system(catalogue, number)?;

    let name = format!("Example Binary {number}AB");
    let params = with_values(
        EntityKind::Binary,
        &[("name", name.as_str()), ("semimajoraxis", "10"), ("period", "10")],
    );
    let binary = insert_fake(catalogue, params, Some(system))?;

    insert_fake(catalogue, star_params(number, "B"), Some(binary))?;
    Ok(binary)
}

fn star_params(number: usize, binary_letter: &str) -> Parameters {
    let name = format!("Example Star {number}{binary_letter}");
    let alt_name = format!("HD {number}{binary_letter}");
    with_values(
        EntityKind::Star,
        &[
            ("age", "7.6"),
            ("magB", "9.8"),
            ("magH", "7.4"),
            ("magI", "7.6"),
            ("magJ", "7.5"),
            ("magK", "7.3"),
            ("magV", "9.0"),
            ("mass", "0.98"),
            ("metallicity", "0.43"),
            ("name", name.as_str()),
            ("name", alt_name.as_str()),
            ("radius", "0.95"),
            ("spectraltype", "G5"),
            ("temperature", "5370"),
        ],
    )
}

/// An example star, directly in a new system or, given a letter, inside a
/// new example binary.
pub fn example_star(
    catalogue: &mut Catalogue,
    number: usize,
    binary_letter: Option<char>,
) -> Result<EntityId, CatalogueError> {
    match binary_letter {
        Some(letter) => {
            let binary = example_binary(catalogue, number)?;
            insert_fake(catalogue, star_params(number, &letter.to_string()), Some(binary))
        }
        None => {
            let system = example_system(catalogue, number)?;
            insert_fake(catalogue, star_params(number, ""), Some(system))
        }
    }
}

/// A transiting hot Jupiter around a new example star.
pub fn example_planet(
    catalogue: &mut Catalogue,
    number: usize,
    binary_letter: Option<char>,
) -> Result<EntityId, CatalogueError> {
    let star = example_star(catalogue, number, binary_letter)?;

    let letter = binary_letter.map(String::from).unwrap_or_default();
    let name = format!("Example Star {number}{letter} b");
    let mut params = with_values(
        EntityKind::Planet,
        &[
            ("discoverymethod", "transit"),
            ("discoveryyear", "2001"),
            ("eccentricity", "0.09"),
            ("inclination", "89.2"),
            ("lastupdate", "12/12/08"),
            ("mass", "3.9"),
            ("name", name.as_str()),
            ("period", "111.2"),
            ("radius", "0.92"),
            ("semimajoraxis", "0.449"),
            ("temperature", "339.6"),
            ("transittime", "2454876.344"),
        ],
    );
    let unit = Attributes::from([("unit".to_string(), "AU".to_string())]);
    params.add_param("separation", Some("330"), &unit);

    insert_fake(catalogue, params, Some(star))
}
