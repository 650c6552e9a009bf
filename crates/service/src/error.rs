//! Typed error enum for the service layer.
//!
//! Wraps catalog and storage failures together with the operation and the
//! word or app id being processed, so a log line alone is enough to tell
//! where a run stopped.

use appstore_rank_catalog::CatalogError;
use appstore_rank_core::CoreError;
use appstore_rank_storage::StorageError;
use thiserror::Error;

/// Service-layer error unifying catalog, storage and configuration failures.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Catalog request failed (network, HTTP status, malformed body).
    #[error("catalog {operation} failed for {subject}: {source}")]
    Catalog {
        operation: &'static str,
        subject: String,
        #[source]
        source: CatalogError,
    },

    /// Store operation failed (open, create table, insert).
    #[error("storage {operation} failed for {subject}: {source}")]
    Storage {
        operation: &'static str,
        subject: String,
        #[source]
        source: StorageError,
    },

    /// Run configuration was rejected before any request was made.
    #[error("config: {0}")]
    Config(#[from] CoreError),
}
