//! Store abstraction consumed by the orchestrator.

use appstore_rank_core::{AppId, RankObservation};

use crate::error::StorageError;

/// Append-only sink for rank observations.
pub trait RankStore {
    /// Create the history table when missing. Safe to call repeatedly.
    fn ensure_schema(&self) -> Result<(), StorageError>;

    /// Append one observation. The row is durable once this returns.
    fn record(&self, observation: &RankObservation) -> Result<(), StorageError>;

    /// Rows stored for `id`, oldest first.
    fn observations_for(&self, id: AppId) -> Result<Vec<RankObservation>, StorageError>;
}
