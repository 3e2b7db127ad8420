//! Domain Layer
//!
//! Catalog entities and the traits the store and remote layers are generic over.
//! This layer has NO transport dependencies (serde and chrono only).

mod entity;
mod food;

pub use entity::{Entity, Resource};
pub use food::{FoodDraft, FoodField, FoodForm, FoodItem, FoodPatch, NewFood};
