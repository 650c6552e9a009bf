//! Service layer for appstore-rank
//!
//! Drives one research run: resolve the app name, split it into words,
//! rank the app for every word and append the results to the store.

#![allow(missing_docs, reason = "Internal crate with self-explanatory API")]
#![allow(clippy::missing_errors_doc, reason = "Errors are self-explanatory from Result types")]
#![allow(missing_debug_implementations, reason = "Internal types")]

mod error;
mod rank_service;
mod reporter;


pub use error::ServiceError;
pub use rank_service::{RankService, RunOutcome, RunReport};
pub use reporter::{ConsoleReporter, Reporter};
