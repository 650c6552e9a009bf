//! Core types for appstore-rank
//!
//! Domain types, the name normalizer and run configuration shared by the
//! catalog, storage and service crates.

pub mod constants;
mod config;
mod env_config;
mod error;
mod normalize;
mod rank;

pub use config::{FailurePolicy, RankConfig};
pub use error::*;
pub use normalize::{normalize, split_words};
pub use rank::{AppId, ObservedAt, Position, RankObservation, position_of};
