//! Base contract shared by domain entities.

use super::errors::DomainResult;

/// A domain record with an identity and a self-validation contract.
pub trait Entity {
    /// Identity type of the entity.
    type Id: Copy + Eq;

    /// The entity's identity.
    fn id(&self) -> Self::Id;

    /// Check every invariant of the entity, stopping at the first failure.
    fn validar(&self) -> DomainResult<()>;
}
