//! Arena holding the system, binary, star and planet hierarchy.
//!
//! Entities are stored in a `Catalogue` and addressed by [`EntityId`]. Each
//! entity owns the ids of its children and records the id of its parent, so
//! traversal in either direction is an index lookup. Entities are never
//! removed individually: a reload builds a fresh `Catalogue`.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::CatalogueError;
use crate::flags::FlagSet;
use crate::params::Parameters;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    System,
    Binary,
    Star,
    Planet,
}

impl EntityKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::System => "System",
            EntityKind::Binary => "Binary",
            EntityKind::Star => "Star",
            EntityKind::Planet => "Planet",
        }
    }

    /// Kind named by a catalogue tag such as `"star"`.
    pub fn from_tag(tag: &str) -> Option<EntityKind> {
        match tag {
            "system" => Some(EntityKind::System),
            "binary" => Some(EntityKind::Binary),
            "star" => Some(EntityKind::Star),
            "planet" => Some(EntityKind::Planet),
            _ => None,
        }
    }

    /// Whether an entity of this kind may contain one of `child`.
    ///
    /// Systems and binaries hold binaries, stars and planets (circumbinary
    /// planets sit directly under a binary). Stars hold planets. Planets hold
    /// nothing, since moons are not catalogued.
    pub fn can_contain(&self, child: EntityKind) -> bool {
        match self {
            EntityKind::System | EntityKind::Binary => matches!(
                child,
                EntityKind::Binary | EntityKind::Star | EntityKind::Planet
            ),
            EntityKind::Star => child == EntityKind::Planet,
            EntityKind::Planet => false,
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Handle to an entity inside a [`Catalogue`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityId(usize);

impl EntityId {
    pub fn index(&self) -> usize {
        self.0
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Entity {
    kind: EntityKind,
    params: Parameters,
    parent: Option<EntityId>,
    children: Vec<EntityId>,
    flags: FlagSet,
}

impl Entity {
    pub fn kind(&self) -> EntityKind {
        self.kind
    }

    pub fn params(&self) -> &Parameters {
        &self.params
    }

    pub fn parent(&self) -> Option<EntityId> {
        self.parent
    }

    pub fn children(&self) -> &[EntityId] {
        &self.children
    }

    pub fn flags(&self) -> &FlagSet {
        &self.flags
    }
}

/// Entities compare equal when they are the same kind and hold the same
/// parameters. Links and flags are ignored.
impl PartialEq for Entity {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind && self.params == other.params
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalogue {
    entities: Vec<Entity>,
}

impl Catalogue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an entity under `parent`, or as a root when `parent` is `None`.
    /// The entity's kind is taken from its parameter container.
    pub fn insert(
        &mut self,
        params: Parameters,
        parent: Option<EntityId>,
    ) -> Result<EntityId, CatalogueError> {
        let kind = params.kind();

        if let Some(parent_id) = parent {
            let parent_kind = self.get(parent_id)?.kind;
            if !parent_kind.can_contain(kind) {
                return Err(CatalogueError::InvalidChild {
                    parent: parent_kind,
                    child: kind,
                });
            }
        }

        let id = EntityId(self.entities.len());
        self.entities.push(Entity {
            kind,
            params,
            parent,
            children: Vec::new(),
            flags: FlagSet::new(),
        });

        if let Some(parent_id) = parent {
            self.get_mut(parent_id)?.children.push(id);
        }

        Ok(id)
    }

    pub fn get(&self, id: EntityId) -> Result<&Entity, CatalogueError> {
        self.entities
            .get(id.0)
            .ok_or(CatalogueError::UnknownEntity(id))
    }

    fn get_mut(&mut self, id: EntityId) -> Result<&mut Entity, CatalogueError> {
        self.entities
            .get_mut(id.0)
            .ok_or(CatalogueError::UnknownEntity(id))
    }

    /// Mutable access to an entity's parameters, for corrections after load.
    pub fn params_mut(&mut self, id: EntityId) -> Result<&mut Parameters, CatalogueError> {
        Ok(&mut self.get_mut(id)?.params)
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = EntityId> + '_ {
        (0..self.entities.len()).map(EntityId)
    }

    /// Ids of every entity of `kind`, in insertion order.
    pub fn ids_of(&self, kind: EntityKind) -> impl Iterator<Item = EntityId> + '_ {
        self.entities
            .iter()
            .enumerate()
            .filter(move |(_, entity)| entity.kind == kind)
            .map(|(index, _)| EntityId(index))
    }

    /// Display name: the `name` parameter, else the nearest named ancestor,
    /// else `"Un-named <kind>"`.
    pub fn name(&self, id: EntityId) -> Result<String, CatalogueError> {
        let entity = self.get(id)?;
        if let Some(name) = entity.params.name() {
            return Ok(name.to_string());
        }
        match entity.parent {
            Some(parent) => self.name(parent),
            None => Ok(format!("Un-named {}", entity.kind)),
        }
    }

    /// Walks parent links from `id` towards the root and returns the first
    /// ancestor of `wanted` kind. An entity is never its own ancestor.
    pub fn ancestor(&self, id: EntityId, wanted: EntityKind) -> Result<EntityId, CatalogueError> {
        self.get(id)?;
        self.ancestors(id)
            .find(|(_, entity)| entity.kind == wanted)
            .map(|(ancestor, _)| ancestor)
            .ok_or_else(|| CatalogueError::Hierarchy {
                name: self.name(id).unwrap_or_default(),
                wanted,
            })
    }

    /// Ancestors of `id` from its parent up to the root.
    pub fn ancestors(&self, id: EntityId) -> Ancestors<'_> {
        Ancestors {
            catalogue: self,
            next: self.get(id).ok().and_then(|entity| entity.parent),
        }
    }
}

pub struct Ancestors<'a> {
    catalogue: &'a Catalogue,
    next: Option<EntityId>,
}

impl<'a> Iterator for Ancestors<'a> {
    type Item = (EntityId, &'a Entity);

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.next?;
        let entity = self.catalogue.get(id).ok()?;
        self.next = entity.parent;
        Some((id, entity))
    }
}
