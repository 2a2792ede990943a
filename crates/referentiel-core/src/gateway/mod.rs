//! HTTP gateways to the reference-list backend
//!
//! Each catalogue is served under `{base_url}/{Catalogue::PATH}`:
//! - `GET {base}` returns the full collection
//! - `POST {base}` creates a record from a draft
//! - `PUT {base}/{id}` replaces a record from a draft
//! - `DELETE {base}/{id}` removes a record

mod http;

pub use http::{DEFAULT_API_URL, HttpGateway, HttpGatewayBuilder};

use async_trait::async_trait;

use crate::catalogue::Catalogue;
use crate::error::Result;

/// Pass-through operations on one catalogue
///
/// Implementations issue exactly one backend call per operation, with no
/// retry and no caching.
#[async_trait]
pub trait RecordGateway<K: Catalogue>: Send + Sync {
    /// Fetch the full collection
    async fn list(&self) -> Result<Vec<K::Record>>;

    /// Create a record, returning it with its server-assigned id
    async fn create(&self, draft: &K::Draft) -> Result<K::Record>;

    /// Replace the record with the given id
    async fn update(&self, id: i64, draft: &K::Draft) -> Result<K::Record>;

    /// Remove the record with the given id
    async fn delete(&self, id: i64) -> Result<()>;
}
