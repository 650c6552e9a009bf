use serde::Deserialize;

/// Envelope shared by `/lookup` and `/search`.
#[derive(Debug, Deserialize)]
pub(crate) struct CatalogResponse {
    #[serde(default)]
    pub results: Vec<CatalogEntry>,
}

/// One catalog result. Non-app entries (artists, bundles) may lack both
/// fields.
#[derive(Debug, Deserialize)]
pub(crate) struct CatalogEntry {
    /// Kept untyped so one odd entry cannot fail the whole response.
    #[serde(rename = "trackId")]
    pub track_id: Option<serde_json::Value>,
    #[serde(rename = "trackName")]
    pub track_name: Option<String>,
}

impl CatalogEntry {
    /// The entry's app id, if it carries an integer `trackId`.
    pub fn app_id(&self) -> Option<i64> {
        self.track_id.as_ref().and_then(serde_json::Value::as_i64)
    }
}
