//! Read access to a [`Catalogue`] with missing values filled in on demand.
//!
//! A [`Resolver`] pairs a catalogue with the [`ResolutionConfig`] deciding
//! whether estimates are allowed. Typed views ([`System`], [`Binary`],
//! [`Star`], [`Planet`]) are obtained from it by id and expose the physical
//! properties of each kind through the traits in [`crate::traits`].
//!
//! Every property follows the same order: a measured value is returned as is,
//! a missing one is computed from other properties when the config allows
//! it, and a successful estimate records a provenance flag on the entity.

use tracing::debug;
use units::Quantity;

use crate::binary::Binary;
use crate::config::ResolutionConfig;
use crate::entity::{Catalogue, Entity, EntityId, EntityKind};
use crate::error::CatalogueError;
use crate::flags::{Flag, FlagSet};
use crate::params::{Field, Parameters};
use crate::planet::Planet;
use crate::star::Star;
use crate::system::System;

#[derive(Debug, Clone, Copy)]
pub struct Resolver<'a> {
    catalogue: &'a Catalogue,
    config: &'a ResolutionConfig,
}

impl<'a> Resolver<'a> {
    pub fn new(catalogue: &'a Catalogue, config: &'a ResolutionConfig) -> Self {
        Self { catalogue, config }
    }

    pub fn catalogue(&self) -> &'a Catalogue {
        self.catalogue
    }

    pub fn config(&self) -> &'a ResolutionConfig {
        self.config
    }

    pub fn node(&self, id: EntityId) -> Result<Node<'a>, CatalogueError> {
        Ok(Node {
            resolver: *self,
            id,
            entity: self.catalogue.get(id)?,
        })
    }

    fn node_of_kind(&self, id: EntityId, expected: EntityKind) -> Result<Node<'a>, CatalogueError> {
        let node = self.node(id)?;
        if node.kind() != expected {
            return Err(CatalogueError::WrongKind {
                id,
                expected,
                found: node.kind(),
            });
        }
        Ok(node)
    }

    pub fn system(&self, id: EntityId) -> Result<System<'a>, CatalogueError> {
        self.node_of_kind(id, EntityKind::System)
            .map(System::from_node)
    }

    pub fn binary(&self, id: EntityId) -> Result<Binary<'a>, CatalogueError> {
        self.node_of_kind(id, EntityKind::Binary)
            .map(Binary::from_node)
    }

    pub fn star(&self, id: EntityId) -> Result<Star<'a>, CatalogueError> {
        self.node_of_kind(id, EntityKind::Star).map(Star::from_node)
    }

    pub fn planet(&self, id: EntityId) -> Result<Planet<'a>, CatalogueError> {
        self.node_of_kind(id, EntityKind::Planet)
            .map(Planet::from_node)
    }
}

/// One entity seen through a [`Resolver`]. The typed views wrap this.
#[derive(Debug, Clone, Copy)]
pub struct Node<'a> {
    resolver: Resolver<'a>,
    id: EntityId,
    entity: &'a Entity,
}

impl<'a> Node<'a> {
    pub fn id(&self) -> EntityId {
        self.id
    }

    pub fn kind(&self) -> EntityKind {
        self.entity.kind()
    }

    pub fn entity(&self) -> &'a Entity {
        self.entity
    }

    pub fn resolver(&self) -> Resolver<'a> {
        self.resolver
    }

    pub fn params(&self) -> &'a Parameters {
        self.entity.params()
    }

    pub fn flags(&self) -> &'a FlagSet {
        self.entity.flags()
    }

    pub fn name(&self) -> String {
        self.resolver
            .catalogue
            .name(self.id)
            .unwrap_or_default()
    }

    /// The catalogued value of `field` as a typed unit.
    pub fn measured<T: TryFrom<Quantity>>(&self, field: Field) -> Option<T> {
        self.params().typed(field)
    }

    pub fn number(&self, field: Field) -> Option<f64> {
        self.params().number(field)
    }

    pub fn text(&self, field: Field) -> Option<&'a str> {
        self.params().text(field)
    }

    pub fn parent(&self) -> Option<Node<'a>> {
        let parent = self.entity.parent()?;
        self.resolver.node(parent).ok()
    }

    /// Nearest ancestor of `kind`.
    pub fn ancestor(&self, kind: EntityKind) -> Result<Node<'a>, CatalogueError> {
        let id = self.resolver.catalogue.ancestor(self.id, kind)?;
        self.resolver.node(id)
    }

    /// Direct children of `kind`, in catalogue order.
    pub fn children_of(self, kind: EntityKind) -> impl Iterator<Item = Node<'a>> + 'a {
        let resolver = self.resolver;
        self.entity
            .children()
            .iter()
            .filter_map(move |&child| resolver.node(child).ok())
            .filter(move |node| node.kind() == kind)
    }

    /// The value of `field` on this entity, else on the nearest ancestor
    /// that records it.
    pub fn inherited<T: TryFrom<Quantity>>(&self, field: Field) -> Option<T> {
        if let Some(value) = self.measured(field) {
            return Some(value);
        }
        self.resolver
            .catalogue
            .ancestors(self.id)
            .find_map(|(_, entity)| entity.params().typed(field))
    }

    /// Runs `compute` when estimates are enabled, flagging the entity with
    /// `flag` if it produces a value.
    pub fn estimated<T>(&self, flag: Flag, compute: impl FnOnce() -> Option<T>) -> Option<T> {
        if !self.resolver.config.estimate_missing_values {
            return None;
        }
        let value = compute()?;
        self.flags().add(flag);
        debug!(entity = %self.name(), %flag, "estimated missing value");
        Some(value)
    }

    /// The measured value of `field`, else an estimate flagged with `flag`.
    pub fn resolve<T: TryFrom<Quantity>>(
        &self,
        field: Field,
        flag: Flag,
        compute: impl FnOnce() -> Option<T>,
    ) -> Option<T> {
        self.measured(field)
            .or_else(|| self.estimated(flag, compute))
    }
}
