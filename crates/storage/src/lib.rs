//! Storage layer for appstore-rank
//!
//! Append-only SQLite history of rank observations, one table, created on
//! first use.

mod error;
mod schema;
mod storage;
#[cfg(test)]
mod tests;
mod traits;

pub use error::StorageError;
pub use storage::Storage;
pub use traits::RankStore;
