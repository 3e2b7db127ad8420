//! Remote Collection - Core Trait
//!
//! Abstract CRUD interface over a named collection resource.
//! Implementations can talk HTTP, keep everything in memory, etc.

use async_trait::async_trait;

use super::error::TransportResult;
use crate::domain::Resource;

/// CRUD operations against a remote collection
///
/// Generic over any Resource type. Futures are not `Send`: the dashboard
/// runs on the single browser event loop. Each call either fully succeeds
/// or fails with a [`TransportError`](super::TransportError); nothing is
/// retried at this layer.
#[async_trait(?Send)]
pub trait RemoteCollection<T: Resource> {
    /// Fetch the full current collection snapshot
    async fn list(&self) -> TransportResult<Vec<T>>;

    /// Store a new entity, returning the server's representation
    async fn create(&self, draft: &T::Draft) -> TransportResult<T>;

    /// Update an existing entity, returning the server's representation
    async fn update(&self, id: T::Id, patch: &T::Patch) -> TransportResult<T>;

    /// Delete an entity by ID
    async fn delete(&self, id: T::Id) -> TransportResult<()>;
}
