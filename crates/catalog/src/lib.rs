//! Client for the public App Store catalog (iTunes Search API).
//!
//! Two read-only operations: resolve an app name from its id, and list the
//! ids ranked for a search term.

mod catalog_types;
mod client;
pub mod error;


use appstore_rank_core::AppId;
use async_trait::async_trait;

pub use client::CatalogClient;
pub use error::CatalogError;

/// Outcome of resolving an app id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup {
    /// Display name (`trackName`) of the first matching result.
    Found(String),
    /// The catalog has no record of the id.
    NotFound,
}

/// Read-only queries against the app catalog.
#[async_trait]
pub trait Catalog: Send + Sync {
    /// Resolve the display name of `id` among apps of kind `media`.
    async fn lookup_by_id(&self, id: AppId, media: &str) -> Result<Lookup, CatalogError>;

    /// Ids returned for `term`, in the catalog's own relevance order.
    async fn search_by_term(
        &self,
        term: &str,
        media: &str,
        country: &str,
        limit: u32,
    ) -> Result<Vec<AppId>, CatalogError>;
}
