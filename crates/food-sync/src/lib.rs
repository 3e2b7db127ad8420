//! GoRestaurant Catalog Sync
//!
//! Client-side core of the food dashboard. Layered bottom-up:
//! - domain: FoodItem and the entity traits
//! - validation: field rules checked before anything is sent
//! - remote: the `foods` collection resource (HTTP or in-memory)
//! - store: immutable, ordered entity list and server-confirmed commits
//! - controller / sync: add/edit sessions and list-view operations

pub mod controller;
pub mod domain;
pub mod notify;
pub mod remote;
pub mod store;
pub mod sync;
pub mod validation;

#[cfg(test)]
mod tests;

pub use controller::{FormController, FormError, FormState, Request, SessionMode, Submission, SubmitOutcome};
pub use domain::{Entity, FoodDraft, FoodField, FoodForm, FoodItem, FoodPatch, NewFood, Resource};
pub use notify::{Notifier, Operation, OperationError, RecordingNotifier};
pub use remote::{CollectionOp, HttpCollection, MemoryCollection, RemoteCollection, TransportError};
pub use store::{Commit, EntityList};
pub use sync::{delete_entity, load_collection, toggle_availability, PendingSet};
pub use validation::{validate, FieldErrors, Rule, ValidationSchema};
