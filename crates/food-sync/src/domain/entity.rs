//! Domain Layer - Core Entity Traits
//!
//! Every record kept in an [`EntityList`](crate::store::EntityList) has a
//! unique, copyable identifier. Records exchanged with a remote collection
//! additionally describe their create and patch payloads.

use std::fmt::{Debug, Display};
use std::hash::Hash;

use serde::de::DeserializeOwned;
use serde::Serialize;

/// Core trait for all catalog entities
pub trait Entity: Clone {
    /// The type of the entity's unique identifier
    type Id: Copy + Eq + Hash + Debug + Display;

    /// Returns the entity's unique identifier
    fn id(&self) -> Self::Id;
}

/// An entity that lives in a remote collection resource.
pub trait Resource: Entity + Serialize + DeserializeOwned {
    /// Body sent on create (carries the provisional id)
    type Draft: Serialize + Debug;
    /// Partial body sent on update
    type Patch: Serialize + Debug;

    /// Provisional id the client put into a draft
    fn draft_id(draft: &Self::Draft) -> Self::Id;

    /// Build the stored entity from a draft, as a server would
    fn from_draft(id: Self::Id, draft: &Self::Draft) -> Self;

    /// Merge a partial update into the entity
    fn apply_patch(&mut self, patch: &Self::Patch);
}
