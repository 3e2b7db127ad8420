//! In-Memory Collection
//!
//! A [`RemoteCollection`] that keeps its entities in process. Used by the
//! tests and for running the dashboard without a server. Failures can be
//! injected per operation and the server can be told which ids to assign.

use std::cell::RefCell;
use std::collections::{HashSet, VecDeque};

use async_trait::async_trait;
use log::debug;

use super::error::{TransportError, TransportResult};
use super::traits::RemoteCollection;
use crate::domain::Resource;

/// Operations a collection serves
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CollectionOp {
    List,
    Create,
    Update,
    Delete,
}

pub struct MemoryCollection<T: Resource> {
    entities: RefCell<Vec<T>>,
    assigned_ids: RefCell<VecDeque<T::Id>>,
    failing: RefCell<HashSet<CollectionOp>>,
    calls: RefCell<Vec<CollectionOp>>,
}

impl<T: Resource> MemoryCollection<T> {
    pub fn new() -> Self {
        Self::with_entities(Vec::new())
    }

    pub fn with_entities(entities: Vec<T>) -> Self {
        Self {
            entities: RefCell::new(entities),
            assigned_ids: RefCell::new(VecDeque::new()),
            failing: RefCell::new(HashSet::new()),
            calls: RefCell::new(Vec::new()),
        }
    }

    /// Ids handed out on create, in order. Once exhausted the draft's
    /// provisional id is kept, as json-server does.
    pub fn with_assigned_ids(self, ids: impl IntoIterator<Item = T::Id>) -> Self {
        self.assigned_ids.borrow_mut().extend(ids);
        self
    }

    /// Make every following call of `op` fail
    pub fn fail(&self, op: CollectionOp) {
        self.failing.borrow_mut().insert(op);
    }

    pub fn recover(&self, op: CollectionOp) {
        self.failing.borrow_mut().remove(&op);
    }

    /// Current stored entities
    pub fn snapshot(&self) -> Vec<T> {
        self.entities.borrow().clone()
    }

    /// Operations served so far, failed ones included
    pub fn calls(&self) -> Vec<CollectionOp> {
        self.calls.borrow().clone()
    }

    fn serve(&self, op: CollectionOp) -> TransportResult<()> {
        self.calls.borrow_mut().push(op);
        if self.failing.borrow().contains(&op) {
            debug!("memory collection: injected {:?} failure", op);
            return Err(TransportError::Unavailable(format!("{:?} failed", op)));
        }
        Ok(())
    }
}

impl<T: Resource> Default for MemoryCollection<T> {
    fn default() -> Self {
        Self::new()
    }
}

const NOT_FOUND: TransportError = TransportError::Status { status: 404 };

#[async_trait(?Send)]
impl<T: Resource + 'static> RemoteCollection<T> for MemoryCollection<T> {
    async fn list(&self) -> TransportResult<Vec<T>> {
        self.serve(CollectionOp::List)?;
        Ok(self.snapshot())
    }

    async fn create(&self, draft: &T::Draft) -> TransportResult<T> {
        self.serve(CollectionOp::Create)?;
        let id = self
            .assigned_ids
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| T::draft_id(draft));
        let entity = T::from_draft(id, draft);
        self.entities.borrow_mut().push(entity.clone());
        Ok(entity)
    }

    async fn update(&self, id: T::Id, patch: &T::Patch) -> TransportResult<T> {
        self.serve(CollectionOp::Update)?;
        let mut entities = self.entities.borrow_mut();
        let entity = entities
            .iter_mut()
            .find(|entity| entity.id() == id)
            .ok_or(NOT_FOUND)?;
        entity.apply_patch(patch);
        Ok(entity.clone())
    }

    async fn delete(&self, id: T::Id) -> TransportResult<()> {
        self.serve(CollectionOp::Delete)?;
        let mut entities = self.entities.borrow_mut();
        let before = entities.len();
        entities.retain(|entity| entity.id() != id);
        if entities.len() == before {
            return Err(NOT_FOUND);
        }
        Ok(())
    }
}
