//! List-View Operations
//!
//! Remote operations started straight from the list, without a form:
//! the initial load, delete and the availability toggle. Each one either
//! yields a [`Commit`] for the caller to apply to its current list, or an
//! [`OperationError`] to report. Nothing is applied speculatively.

use std::collections::HashSet;
use std::hash::Hash;

use log::{debug, warn};

use crate::domain::{FoodItem, FoodPatch, Resource};
use crate::notify::{Operation, OperationError};
use crate::remote::RemoteCollection;
use crate::store::Commit;

/// Fetch the collection snapshot the list starts from
pub async fn load_collection<T, C>(client: &C) -> Result<Commit<T>, OperationError>
where
    T: Resource,
    C: RemoteCollection<T> + ?Sized,
{
    match client.list().await {
        Ok(entities) => {
            debug!("loaded {} entities", entities.len());
            Ok(Commit::Reset(entities))
        }
        Err(source) => {
            warn!("initial load failed: {}", source);
            Err(OperationError::new(Operation::Load, source))
        }
    }
}

/// Delete one entity; the removal is only committed once the server agrees
pub async fn delete_entity<T, C>(client: &C, id: T::Id) -> Result<Commit<T>, OperationError>
where
    T: Resource,
    C: RemoteCollection<T> + ?Sized,
{
    match client.delete(id).await {
        Ok(()) => {
            debug!("deleted {}", id);
            Ok(Commit::Remove(id))
        }
        Err(source) => {
            warn!("delete {} failed: {}", id, source);
            Err(OperationError::new(Operation::Delete, source))
        }
    }
}

/// Flip `available` on the server and replace the dish with its answer
pub async fn toggle_availability<C>(
    client: &C,
    food: &FoodItem,
) -> Result<Commit<FoodItem>, OperationError>
where
    C: RemoteCollection<FoodItem> + ?Sized,
{
    let patch = FoodPatch::availability(!food.available);
    match client.update(food.id, &patch).await {
        Ok(updated) => {
            debug!("food {} available={}", food.id, updated.available);
            Ok(Commit::Replace(food.id, updated))
        }
        Err(source) => {
            warn!("toggling food {} failed: {}", food.id, source);
            Err(OperationError::new(Operation::ToggleAvailability, source))
        }
    }
}

/// Ids with a list-view request in flight (at most one per id)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingSet<Id: Eq + Hash> {
    ids: HashSet<Id>,
}

impl<Id: Eq + Hash + Copy> PendingSet<Id> {
    pub fn new() -> Self {
        Self {
            ids: HashSet::new(),
        }
    }

    /// Returns false if a request for `id` is already running
    pub fn begin(&mut self, id: Id) -> bool {
        self.ids.insert(id)
    }

    pub fn finish(&mut self, id: Id) {
        self.ids.remove(&id);
    }

    pub fn contains(&self, id: Id) -> bool {
        self.ids.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

impl<Id: Eq + Hash + Copy> Default for PendingSet<Id> {
    fn default() -> Self {
        Self::new()
    }
}
