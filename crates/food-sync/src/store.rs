//! Entity List Store
//!
//! Ordered, immutable list of entities. Every operation returns a new list
//! value; untouched elements are shared between versions, and a no-op hands
//! back a list that is [`EntityList::ptr_eq`] to the input so views can skip
//! re-rendering.

use std::sync::Arc;

use log::debug;

use crate::domain::Entity;

/// Insertion-ordered list of entities (insertion order = display order)
pub struct EntityList<T> {
    items: Arc<[Arc<T>]>,
}

impl<T: Entity> EntityList<T> {
    pub fn new() -> Self {
        Self {
            items: Arc::from(Vec::new()),
        }
    }

    /// Replace the whole list (initial load)
    pub fn initialize(entities: impl IntoIterator<Item = T>) -> Self {
        let items: Vec<Arc<T>> = entities.into_iter().map(Arc::new).collect();
        Self {
            items: Arc::from(items),
        }
    }

    /// Add to the end. The caller guarantees `entity.id()` is not present.
    pub fn append(&self, entity: T) -> Self {
        let mut items: Vec<Arc<T>> = self.items.iter().cloned().collect();
        items.push(Arc::new(entity));
        Self {
            items: Arc::from(items),
        }
    }

    /// Substitute the element with `id`, keeping its position. No-op if absent.
    pub fn replace(&self, id: T::Id, entity: T) -> Self {
        let Some(index) = self.position(id) else {
            debug!("replace: id {} not in list", id);
            return self.clone();
        };
        let mut items: Vec<Arc<T>> = self.items.iter().cloned().collect();
        items[index] = Arc::new(entity);
        Self {
            items: Arc::from(items),
        }
    }

    /// Drop the element with `id`. No-op if absent.
    pub fn remove(&self, id: T::Id) -> Self {
        if !self.contains(id) {
            debug!("remove: id {} not in list", id);
            return self.clone();
        }
        let items: Vec<Arc<T>> = self
            .items
            .iter()
            .filter(|item| item.id() != id)
            .cloned()
            .collect();
        Self {
            items: Arc::from(items),
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.iter().map(|item| item.as_ref())
    }

    pub fn get(&self, id: T::Id) -> Option<&T> {
        self.iter().find(|item| item.id() == id)
    }

    pub fn position(&self, id: T::Id) -> Option<usize> {
        self.items.iter().position(|item| item.id() == id)
    }

    pub fn contains(&self, id: T::Id) -> bool {
        self.position(id).is_some()
    }

    pub fn to_vec(&self) -> Vec<T> {
        self.iter().cloned().collect()
    }

    /// Same list value (reference comparison)
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.items, &other.items)
    }
}

impl<T> Clone for EntityList<T> {
    fn clone(&self) -> Self {
        Self {
            items: Arc::clone(&self.items),
        }
    }
}

impl<T: Entity> Default for EntityList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: PartialEq> PartialEq for EntityList<T> {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.items, &other.items) || self.items == other.items
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for EntityList<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.items.iter()).finish()
    }
}

impl<T: Entity> FromIterator<T> for EntityList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::initialize(iter)
    }
}

// ========================
// Commits
// ========================

/// A server-confirmed change, applied to whatever the list is when it lands
#[derive(Debug, Clone, PartialEq)]
pub enum Commit<T: Entity> {
    Reset(Vec<T>),
    Append(T),
    Replace(T::Id, T),
    Remove(T::Id),
}

impl<T: Entity> Commit<T> {
    pub fn apply(self, list: &EntityList<T>) -> EntityList<T> {
        match self {
            Commit::Reset(entities) => EntityList::initialize(entities),
            Commit::Append(entity) => list.append(entity),
            Commit::Replace(id, entity) => list.replace(id, entity),
            Commit::Remove(id) => list.remove(id),
        }
    }
}
