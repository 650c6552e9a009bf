use appstore_rank_catalog::{Catalog, Lookup};
use appstore_rank_core::{
    AppId, FailurePolicy, ObservedAt, Position, RankConfig, RankObservation, normalize,
    position_of, split_words,
};
use appstore_rank_storage::RankStore;
use serde::Serialize;

use crate::ServiceError;
use crate::reporter::Reporter;

/// Summary of a completed run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunReport {
    pub app_id: AppId,
    /// Name exactly as the catalog returned it.
    pub app_name: String,
    pub normalized_name: String,
    pub observed_at: ObservedAt,
    /// Words searched, in name order.
    pub words: Vec<String>,
    pub recorded: usize,
    pub found: usize,
    pub skipped: usize,
}

/// How a run ended when no error stopped it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    Completed(RunReport),
    /// The catalog does not know the app; nothing was written.
    NotFound(AppId),
}

/// Ranks one app for each word of its own name and appends the results to
/// the history store.
pub struct RankService<C, S, R> {
    catalog: C,
    store: S,
    reporter: R,
    config: RankConfig,
}

impl<C: Catalog, S: RankStore, R: Reporter> RankService<C, S, R> {
    pub fn new(catalog: C, store: S, reporter: R, config: RankConfig) -> Result<Self, ServiceError> {
        config.validate()?;
        Ok(Self { catalog, store, reporter, config })
    }

    pub fn catalog(&self) -> &C {
        &self.catalog
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn reporter(&self) -> &R {
        &self.reporter
    }

    pub fn config(&self) -> &RankConfig {
        &self.config
    }

    /// Run the research for `id`, stamping every row with the current time.
    pub async fn run(&self, id: AppId) -> Result<RunOutcome, ServiceError> {
        self.run_at(id, ObservedAt::now()).await
    }

    /// Run the research for `id` with an explicit run timestamp.
    pub async fn run_at(&self, id: AppId, observed_at: ObservedAt) -> Result<RunOutcome, ServiceError> {
        self.store.ensure_schema().map_err(|source| {
            let err =
                ServiceError::Storage { operation: "ensure_schema", subject: format!("app id {id}"), source };
            tracing::error!(%id, error = %err, "failed to prepare rank table");
            err
        })?;

        let app_name = match self.catalog.lookup_by_id(id, &self.config.media).await {
            Ok(Lookup::Found(name)) => name,
            Ok(Lookup::NotFound) => {
                self.reporter.app_not_found(id);
                return Ok(RunOutcome::NotFound(id));
            },
            Err(source) => {
                let err =
                    ServiceError::Catalog { operation: "lookup", subject: format!("app id {id}"), source };
                tracing::error!(%id, error = %err, "app name lookup failed");
                return Err(err);
            },
        };

        let normalized_name = normalize(&app_name);
        let words = split_words(&app_name);
        tracing::info!(%id, app_name = %app_name, words = words.len(), "researching app name");

        let mut report = RunReport {
            app_id: id,
            app_name,
            normalized_name,
            observed_at,
            words: Vec::with_capacity(words.len()),
            recorded: 0,
            found: 0,
            skipped: 0,
        };

        for word in words {
            let ranked = match self.rank_word(id, &word).await {
                Ok(position) => position,
                Err(err) if self.config.failure_policy == FailurePolicy::SkipWord => {
                    self.reporter.word_skipped(&word, &err);
                    report.skipped += 1;
                    report.words.push(word);
                    continue;
                },
                Err(err) => {
                    tracing::error!(%id, word = %word, error = %err, "search failed, aborting run");
                    return Err(err);
                },
            };

            let observation = RankObservation::new(id, word.clone(), ranked, observed_at);
            self.store.record(&observation).map_err(|source| {
                let err =
                    ServiceError::Storage { operation: "record", subject: format!("word {word:?}"), source };
                tracing::error!(%id, word = %word, error = %err, "failed to store rank observation");
                err
            })?;
            report.recorded += 1;

            match ranked {
                Some(position) => {
                    report.found += 1;
                    self.reporter.word_found(&word, position);
                },
                None => self.reporter.word_missing(&word, self.config.result_window),
            }
            report.words.push(word);
        }

        self.reporter.completed(&report);
        Ok(RunOutcome::Completed(report))
    }

    /// Search `word` and locate `id` within the configured result window.
    async fn rank_word(&self, id: AppId, word: &str) -> Result<Option<Position>, ServiceError> {
        let window = self.config.result_window;
        let results = self
            .catalog
            .search_by_term(word, &self.config.media, &self.config.country, window)
            .await
            .map_err(|source| ServiceError::Catalog {
                operation: "search",
                subject: format!("word {word:?}"),
                source,
            })?;

        let considered = results.len().min(usize::try_from(window).unwrap_or(usize::MAX));
        let position = position_of(results.get(..considered).unwrap_or(results.as_slice()), id);
        tracing::debug!(%id, word, results = results.len(), position = ?position.map(Position::get));
        Ok(position)
    }
}
