//! Progress and outcome messages for a research run.
//!
//! Every event goes to the tracing log; [`ConsoleReporter`] additionally
//! prints a human-readable line.

use std::io::Write;
use std::sync::Mutex;

use appstore_rank_core::{AppId, Position};

use crate::ServiceError;
use crate::rank_service::RunReport;

/// Receives run events from [`crate::RankService`].
pub trait Reporter {
    /// The app was ranked at `position` for `word` and the row was stored.
    fn word_found(&self, word: &str, position: Position);

    /// The app was outside the result window for `word`; a row without a
    /// position was stored.
    fn word_missing(&self, word: &str, window: u32);

    /// The catalog failed for `word` and nothing was stored for it.
    fn word_skipped(&self, word: &str, error: &ServiceError);

    /// The catalog has no app with this id.
    fn app_not_found(&self, id: AppId);

    /// Every word was processed.
    fn completed(&self, report: &RunReport);
}

/// Writes progress lines to a terminal (stdout by default) and the log.
pub struct ConsoleReporter<W: Write = std::io::Stdout> {
    out: Mutex<W>,
}

impl ConsoleReporter {
    #[must_use]
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write> ConsoleReporter<W> {
    pub fn new(out: W) -> Self {
        Self { out: Mutex::new(out) }
    }

    /// Recover the writer, e.g. to inspect buffered output.
    pub fn into_inner(self) -> W {
        self.out.into_inner().unwrap_or_else(std::sync::PoisonError::into_inner)
    }

    fn line(&self, message: &str) {
        let Ok(mut out) = self.out.lock() else {
            return;
        };
        if let Err(e) = writeln!(out, "{message}").and_then(|()| out.flush()) {
            tracing::warn!(error = %e, "failed to write progress line");
        }
    }
}

impl<W: Write> Reporter for ConsoleReporter<W> {
    fn word_found(&self, word: &str, position: Position) {
        tracing::info!(word, position = position.get(), "position recorded");
        self.line(&format!("{word}: position {position}"));
    }

    fn word_missing(&self, word: &str, window: u32) {
        tracing::info!(word, window, "app not in search results, recorded without position");
        self.line(&format!("{word}: not in top {window}"));
    }

    fn word_skipped(&self, word: &str, error: &ServiceError) {
        tracing::warn!(word, error = %error, "word skipped");
        self.line(&format!("{word}: skipped ({error})"));
    }

    fn app_not_found(&self, id: AppId) {
        tracing::info!(%id, "Information not found (appleid={id})");
        self.line(&format!("Information not found (appleid={id})"));
    }

    fn completed(&self, report: &RunReport) {
        tracing::info!(
            id = %report.app_id,
            words = report.words.len(),
            recorded = report.recorded,
            found = report.found,
            skipped = report.skipped,
            "Research for {} completed",
            report.normalized_name
        );
        self.line(&format!("Research for {} completed", report.normalized_name));
    }
}
