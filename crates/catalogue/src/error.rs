use thiserror::Error;

use crate::entity::{EntityId, EntityKind};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CatalogueError {
    /// Walking parent links reached the root without finding `wanted`.
    #[error("{name} has no {wanted} as a parent object")]
    Hierarchy { name: String, wanted: EntityKind },

    #[error("a {parent} cannot contain a {child}")]
    InvalidChild {
        parent: EntityKind,
        child: EntityKind,
    },

    #[error("{0} is not a known flag")]
    UnknownFlag(String),

    #[error("no entity with id {0}")]
    UnknownEntity(EntityId),

    /// The id exists but is not the kind of entity asked for.
    #[error("entity {id} is a {found}, not a {expected}")]
    WrongKind {
        id: EntityId,
        expected: EntityKind,
        found: EntityKind,
    },

    #[error("could not load catalogue record: {0}")]
    Load(String),
}
