use std::time::Duration;

use appstore_rank_core::{AppId, RankConfig};
use async_trait::async_trait;

use crate::catalog_types::{CatalogEntry, CatalogResponse};
use crate::error::CatalogError;
use crate::{Catalog, Lookup};

/// Longest body excerpt kept in error messages.
const ERROR_BODY_EXCERPT: usize = 200;

/// HTTP client for the iTunes Search API.
#[derive(Debug, Clone)]
pub struct CatalogClient {
    pub(crate) client: reqwest::Client,
    pub(crate) base_url: String,
}

impl CatalogClient {
    /// Creates a client rooted at `base_url` (e.g. `https://itunes.apple.com`).
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be built (TLS backend failure).
    pub fn new(
        base_url: &str,
        user_agent: &str,
        timeout: Duration,
    ) -> Result<Self, CatalogError> {
        let base_url = base_url.trim_end_matches('/').to_owned();
        let client = reqwest::Client::builder()
            .user_agent(user_agent)
            .timeout(timeout)
            .build()
            .map_err(|e| CatalogError::ClientInit(e.to_string()))?;
        Ok(Self { client, base_url })
    }

    /// Creates a client from the run configuration.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be built.
    pub fn from_config(config: &RankConfig) -> Result<Self, CatalogError> {
        Self::new(&config.catalog_url, &config.user_agent, config.http_timeout)
    }

    /// Returns the base URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GET `{base_url}/{endpoint}` and decode the `results` array.
    async fn fetch_results(
        &self,
        endpoint: &str,
        query: &[(&str, String)],
    ) -> Result<Vec<CatalogEntry>, CatalogError> {
        let url = format!("{}/{endpoint}", self.base_url);
        tracing::debug!(%url, ?query, "catalog request");

        let response = self.client.get(&url).query(query).send().await?;
        let status = response.status();
        if !status.is_success() {
            let body =
                response.text().await.unwrap_or_else(|_| "Could not read error body".to_owned());
            return Err(CatalogError::HttpStatus {
                code: status.as_u16(),
                body: truncate(&body, ERROR_BODY_EXCERPT).to_owned(),
            });
        }

        let body = response.text().await?;
        let parsed: CatalogResponse =
            serde_json::from_str(&body).map_err(|e| CatalogError::JsonParse {
                context: format!("{endpoint} response (body: {})", truncate(&body, ERROR_BODY_EXCERPT)),
                source: e,
            })?;
        Ok(parsed.results)
    }
}

#[async_trait]
impl Catalog for CatalogClient {
    async fn lookup_by_id(&self, id: AppId, media: &str) -> Result<Lookup, CatalogError> {
        let results = self
            .fetch_results("lookup", &[("id", id.to_string()), ("media", media.to_owned())])
            .await?;

        let Some(first) = results.into_iter().next() else {
            tracing::debug!(%id, "lookup returned no results");
            return Ok(Lookup::NotFound);
        };
        first
            .track_name
            .map(Lookup::Found)
            .ok_or_else(|| CatalogError::MissingField(format!("trackName for app id {id}")))
    }

    async fn search_by_term(
        &self,
        term: &str,
        media: &str,
        country: &str,
        limit: u32,
    ) -> Result<Vec<AppId>, CatalogError> {
        let results = self
            .fetch_results(
                "search",
                &[
                    ("term", term.to_owned()),
                    ("media", media.to_owned()),
                    ("country", country.to_owned()),
                    ("limit", limit.to_string()),
                ],
            )
            .await?;

        let total = results.len();
        let ids: Vec<AppId> =
            results.iter().filter_map(CatalogEntry::app_id).map(AppId::new).collect();
        tracing::debug!(term, total, with_id = ids.len(), "search results received");
        Ok(ids)
    }
}

/// Truncates a string to the given maximum length at a char boundary.
#[must_use]
pub(crate) fn truncate(s: &str, max_len: usize) -> &str {
    if s.len() <= max_len {
        s
    } else {
        let mut end = max_len;
        while end > 0 && !s.is_char_boundary(end) {
            end = end.saturating_sub(1);
        }
        s.get(..end).unwrap_or("")
    }
}
