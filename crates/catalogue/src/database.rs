//! Builds a [`Catalogue`] from a tree of catalogue records and indexes it by
//! kind and name.
//!
//! Records mirror the catalogue's XML layout: each has a kind tag, a list of
//! tagged parameter values with attributes, and nested records for the
//! objects it contains. Reading the XML itself is left to the caller, which
//! hands over the records directly or as JSON.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::binary::Binary;
use crate::config::ResolutionConfig;
use crate::entity::{Catalogue, EntityId, EntityKind};
use crate::error::CatalogueError;
use crate::params::{Attributes, Parameters};
use crate::planet::Planet;
use crate::resolver::Resolver;
use crate::star::Star;
use crate::system::System;
use crate::traits::CatalogueObject;

/// One tagged value inside a [`Record`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordParam {
    pub tag: String,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub attributes: Attributes,
}

/// A catalogue object with its parameters and the objects it contains.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub kind: String,
    #[serde(default)]
    pub params: Vec<RecordParam>,
    #[serde(default)]
    pub children: Vec<Record>,
}

impl Record {
    pub fn new(kind: &str) -> Self {
        Self {
            kind: kind.to_string(),
            params: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn param(mut self, tag: &str, text: &str) -> Self {
        self.params.push(RecordParam {
            tag: tag.to_string(),
            text: Some(text.to_string()),
            attributes: Attributes::new(),
        });
        self
    }

    pub fn param_with(mut self, tag: &str, text: Option<&str>, attributes: &[(&str, &str)]) -> Self {
        self.params.push(RecordParam {
            tag: tag.to_string(),
            text: text.map(str::to_string),
            attributes: attributes
                .iter()
                .map(|(key, value)| (key.to_string(), value.to_string()))
                .collect(),
        });
        self
    }

    pub fn child(mut self, child: Record) -> Self {
        self.children.push(child);
        self
    }

    fn name(&self) -> &str {
        self.params
            .iter()
            .find(|param| param.tag == "name")
            .and_then(|param| param.text.as_deref())
            .unwrap_or("Unnamed")
    }
}

/// Name lookup for one entity kind. Every alternate name maps to the same
/// entity as the canonical one.
#[derive(Debug, Clone, Default)]
struct NameIndex {
    ids: Vec<EntityId>,
    names: BTreeMap<String, EntityId>,
}

impl NameIndex {
    fn build(catalogue: &Catalogue, kind: EntityKind) -> Self {
        let mut index = Self::default();
        for id in catalogue.ids_of(kind) {
            index.ids.push(id);
            let Ok(entity) = catalogue.get(id) else {
                continue;
            };
            for name in entity.params().all_names() {
                index.names.entry(name.to_string()).or_insert(id);
            }
        }
        index
    }
}

/// An indexed catalogue together with the config used to read it.
#[derive(Debug)]
pub struct Database {
    catalogue: Catalogue,
    config: ResolutionConfig,
    systems: NameIndex,
    binaries: NameIndex,
    stars: NameIndex,
    planets: NameIndex,
    transiting_planets: Vec<EntityId>,
    load_errors: Vec<CatalogueError>,
}

impl Database {
    pub fn from_records(records: Vec<Record>) -> Self {
        Self::with_config(records, ResolutionConfig::default())
    }

    /// Loads every record. A record that cannot be placed is skipped and
    /// reported in [`Database::load_errors`]; the rest of the load goes on.
    pub fn with_config(records: Vec<Record>, config: ResolutionConfig) -> Self {
        let mut catalogue = Catalogue::new();
        let mut load_errors = Vec::new();

        for record in &records {
            if EntityKind::from_tag(&record.kind) != Some(EntityKind::System) {
                warn!(kind = %record.kind, name = record.name(), "skipping root that is not a system");
                load_errors.push(CatalogueError::Load(format!(
                    "{} is a {}, expected a system at the root",
                    record.name(),
                    record.kind
                )));
                continue;
            }
            insert_record(&mut catalogue, record, None, &mut load_errors);
        }

        Self::index(catalogue, config, load_errors)
    }

    /// Indexes an already built catalogue.
    pub fn from_catalogue(catalogue: Catalogue, config: ResolutionConfig) -> Self {
        Self::index(catalogue, config, Vec::new())
    }

    /// Parses a JSON array of records.
    pub fn from_json(json: &str) -> Result<Self, CatalogueError> {
        let records: Vec<Record> =
            serde_json::from_str(json).map_err(|err| CatalogueError::Load(err.to_string()))?;
        Ok(Self::from_records(records))
    }

    fn index(catalogue: Catalogue, config: ResolutionConfig, load_errors: Vec<CatalogueError>) -> Self {
        let mut database = Self {
            systems: NameIndex::build(&catalogue, EntityKind::System),
            binaries: NameIndex::build(&catalogue, EntityKind::Binary),
            stars: NameIndex::build(&catalogue, EntityKind::Star),
            planets: NameIndex::build(&catalogue, EntityKind::Planet),
            catalogue,
            config,
            transiting_planets: Vec::new(),
            load_errors,
        };

        let transiting: Vec<EntityId> = database
            .planets()
            .filter(|planet| planet.is_transiting())
            .map(|planet| planet.id())
            .collect();
        database.transiting_planets = transiting;

        info!(
            systems = database.systems.ids.len(),
            binaries = database.binaries.ids.len(),
            stars = database.stars.ids.len(),
            planets = database.planets.ids.len(),
            transiting = database.transiting_planets.len(),
            errors = database.load_errors.len(),
            "catalogue loaded"
        );
        database
    }

    pub fn catalogue(&self) -> &Catalogue {
        &self.catalogue
    }

    pub fn config(&self) -> &ResolutionConfig {
        &self.config
    }

    pub fn resolver(&self) -> Resolver<'_> {
        Resolver::new(&self.catalogue, &self.config)
    }

    /// Records that were skipped while loading.
    pub fn load_errors(&self) -> &[CatalogueError] {
        &self.load_errors
    }

    pub fn systems(&self) -> impl Iterator<Item = System<'_>> {
        let resolver = self.resolver();
        self.systems
            .ids
            .iter()
            .filter_map(move |&id| resolver.system(id).ok())
    }

    pub fn binaries(&self) -> impl Iterator<Item = Binary<'_>> {
        let resolver = self.resolver();
        self.binaries
            .ids
            .iter()
            .filter_map(move |&id| resolver.binary(id).ok())
    }

    pub fn stars(&self) -> impl Iterator<Item = Star<'_>> {
        let resolver = self.resolver();
        self.stars
            .ids
            .iter()
            .filter_map(move |&id| resolver.star(id).ok())
    }

    pub fn planets(&self) -> impl Iterator<Item = Planet<'_>> {
        let resolver = self.resolver();
        self.planets
            .ids
            .iter()
            .filter_map(move |&id| resolver.planet(id).ok())
    }

    pub fn transiting_planets(&self) -> impl Iterator<Item = Planet<'_>> {
        let resolver = self.resolver();
        self.transiting_planets
            .iter()
            .filter_map(move |&id| resolver.planet(id).ok())
    }

    pub fn system(&self, name: &str) -> Option<System<'_>> {
        let id = *self.systems.names.get(name)?;
        self.resolver().system(id).ok()
    }

    pub fn binary(&self, name: &str) -> Option<Binary<'_>> {
        let id = *self.binaries.names.get(name)?;
        self.resolver().binary(id).ok()
    }

    pub fn star(&self, name: &str) -> Option<Star<'_>> {
        let id = *self.stars.names.get(name)?;
        self.resolver().star(id).ok()
    }

    /// Exact lookup by canonical or alternate name.
    pub fn planet(&self, name: &str) -> Option<Planet<'_>> {
        let id = *self.planets.names.get(name)?;
        self.resolver().planet(id).ok()
    }

    /// Planets with any name containing `query`, ignoring case, spaces and
    /// dashes. `"gj1214"` finds `"GJ 1214 b"`.
    pub fn search_planet(&self, query: &str) -> Vec<Planet<'_>> {
        let query = compact_name(query);
        self.planets()
            .filter(|planet| {
                planet
                    .params()
                    .all_names()
                    .any(|name| compact_name(name).contains(&query))
            })
            .collect()
    }
}

/// Lowercase with spaces and dashes removed.
pub fn compact_name(name: &str) -> String {
    name.chars()
        .filter(|c| *c != ' ' && *c != '-')
        .flat_map(char::to_lowercase)
        .collect()
}

fn insert_record(
    catalogue: &mut Catalogue,
    record: &Record,
    parent: Option<EntityId>,
    errors: &mut Vec<CatalogueError>,
) {
    let Some(kind) = EntityKind::from_tag(&record.kind) else {
        debug!(kind = %record.kind, name = record.name(), "ignoring uncatalogued object");
        return;
    };

    let mut params = Parameters::new(kind);
    for param in &record.params {
        params.add_param(&param.tag, param.text.as_deref(), &param.attributes);
    }

    let id = match catalogue.insert(params, parent) {
        Ok(id) => id,
        Err(err) => {
            warn!(name = record.name(), %err, "skipping record");
            errors.push(err);
            return;
        }
    };

    for child in &record.children {
        insert_record(catalogue, child, Some(id), errors);
    }
}
