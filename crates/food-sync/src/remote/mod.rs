//! Remote Collection Layer
//!
//! Client side of the REST collection resource.

mod error;
mod http;
mod memory;
mod traits;

pub use error::{TransportError, TransportResult};
pub use http::HttpCollection;
pub use memory::{CollectionOp, MemoryCollection};
pub use traits::RemoteCollection;
