//! Run configuration.

use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_CATALOG_URL, DEFAULT_COUNTRY, DEFAULT_DB_PATH, DEFAULT_HTTP_TIMEOUT_SECS,
    DEFAULT_LOG_PATH, DEFAULT_MEDIA, DEFAULT_RESULT_WINDOW, DEFAULT_USER_AGENT, MAX_RESULT_WINDOW,
};
use crate::env_config::{env_parse_with_default, env_string_with_default};
use crate::error::{CoreError, Result};

/// What a run does when the catalog fails for a single word.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FailurePolicy {
    /// Stop the whole run on the first catalog error.
    #[default]
    Abort,
    /// Log the error, write nothing for that word and move on.
    SkipWord,
}

impl FailurePolicy {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match *self {
            Self::Abort => "abort",
            Self::SkipWord => "skip-word",
        }
    }
}

impl FromStr for FailurePolicy {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "abort" => Ok(Self::Abort),
            "skip-word" | "skip" => Ok(Self::SkipWord),
            other => Err(CoreError::InvalidConfig(format!("unknown failure policy: {other}"))),
        }
    }
}

impl std::fmt::Display for FailurePolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Everything a run needs to know, resolved once at startup and passed to
/// the orchestrator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankConfig {
    pub media: String,
    pub country: String,
    /// Search results requested per word; also the upper bound of a position.
    pub result_window: u32,
    pub db_path: PathBuf,
    pub log_path: PathBuf,
    pub catalog_url: String,
    pub user_agent: String,
    pub http_timeout: Duration,
    pub failure_policy: FailurePolicy,
}

impl Default for RankConfig {
    fn default() -> Self {
        Self {
            media: DEFAULT_MEDIA.to_owned(),
            country: DEFAULT_COUNTRY.to_owned(),
            result_window: DEFAULT_RESULT_WINDOW,
            db_path: PathBuf::from(DEFAULT_DB_PATH),
            log_path: PathBuf::from(DEFAULT_LOG_PATH),
            catalog_url: DEFAULT_CATALOG_URL.to_owned(),
            user_agent: DEFAULT_USER_AGENT.to_owned(),
            http_timeout: Duration::from_secs(DEFAULT_HTTP_TIMEOUT_SECS),
            failure_policy: FailurePolicy::Abort,
        }
    }
}

impl RankConfig {
    /// Defaults overridden by `APPSTORE_RANK_*` environment variables.
    #[must_use]
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            media: env_string_with_default("APPSTORE_RANK_MEDIA", &defaults.media),
            country: env_string_with_default("APPSTORE_RANK_COUNTRY", &defaults.country),
            result_window: env_parse_with_default("APPSTORE_RANK_LIMIT", defaults.result_window),
            db_path: PathBuf::from(env_string_with_default("APPSTORE_RANK_DB", DEFAULT_DB_PATH)),
            log_path: PathBuf::from(env_string_with_default("APPSTORE_RANK_LOG", DEFAULT_LOG_PATH)),
            catalog_url: env_string_with_default("APPSTORE_RANK_BASE_URL", &defaults.catalog_url),
            user_agent: env_string_with_default("APPSTORE_RANK_USER_AGENT", &defaults.user_agent),
            http_timeout: Duration::from_secs(env_parse_with_default(
                "APPSTORE_RANK_TIMEOUT_SECS",
                DEFAULT_HTTP_TIMEOUT_SECS,
            )),
            failure_policy: env_parse_with_default(
                "APPSTORE_RANK_FAILURE_POLICY",
                defaults.failure_policy,
            ),
        }
    }

    /// Reject settings the catalog or the data model cannot honour.
    ///
    /// # Errors
    /// Returns `CoreError::InvalidConfig` naming the offending field.
    pub fn validate(&self) -> Result<()> {
        if self.result_window == 0 || self.result_window > MAX_RESULT_WINDOW {
            return Err(CoreError::InvalidConfig(format!(
                "result window must be between 1 and {MAX_RESULT_WINDOW}, got {}",
                self.result_window
            )));
        }
        if self.media.trim().is_empty() {
            return Err(CoreError::InvalidConfig("media kind must not be empty".to_owned()));
        }
        if self.country.trim().is_empty() {
            return Err(CoreError::InvalidConfig("country must not be empty".to_owned()));
        }
        if self.catalog_url.trim().is_empty() {
            return Err(CoreError::InvalidConfig("catalog url must not be empty".to_owned()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_catalog_conventions() {
        let config = RankConfig::default();
        assert_eq!(config.media, "software");
        assert_eq!(config.country, "RU");
        assert_eq!(config.result_window, 200);
        assert_eq!(config.db_path, PathBuf::from("itunes.db"));
        assert_eq!(config.log_path, PathBuf::from("log_file.log"));
        assert_eq!(config.failure_policy, FailurePolicy::Abort);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_out_of_range_window() {
        let mut config = RankConfig::default();
        config.result_window = 0;
        assert!(config.validate().is_err());
        config.result_window = 201;
        assert!(config.validate().is_err());
        config.result_window = 1;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_blank_country() {
        let config = RankConfig { country: "  ".to_owned(), ..RankConfig::default() };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("country"));
    }

    #[test]
    fn from_env_applies_overrides() {
        let vars = [
            ("APPSTORE_RANK_MEDIA", "iPadSoftware"),
            ("APPSTORE_RANK_COUNTRY", " us "),
            ("APPSTORE_RANK_LIMIT", "50"),
            ("APPSTORE_RANK_DB", "data/history.db"),
            ("APPSTORE_RANK_LOG", ""),
            ("APPSTORE_RANK_BASE_URL", "http://localhost:8080"),
            ("APPSTORE_RANK_TIMEOUT_SECS", "soon"),
            ("APPSTORE_RANK_FAILURE_POLICY", "skip-word"),
        ];
        for (var, value) in vars {
            // SAFETY: no other test in this crate reads these variables.
            unsafe { std::env::set_var(var, value) };
        }

        let config = RankConfig::from_env();

        for (var, _) in vars {
            // SAFETY: see above.
            unsafe { std::env::remove_var(var) };
        }
        assert_eq!(config.media, "iPadSoftware");
        assert_eq!(config.country, "us");
        assert_eq!(config.result_window, 50);
        assert_eq!(config.db_path, PathBuf::from("data/history.db"));
        assert_eq!(config.log_path, PathBuf::from("log_file.log"));
        assert_eq!(config.catalog_url, "http://localhost:8080");
        assert_eq!(config.user_agent, RankConfig::default().user_agent);
        assert_eq!(config.http_timeout, Duration::from_secs(30));
        assert_eq!(config.failure_policy, FailurePolicy::SkipWord);
    }

    #[test]
    fn failure_policy_parses() {
        assert_eq!("abort".parse::<FailurePolicy>(), Ok(FailurePolicy::Abort));
        assert_eq!("Skip-Word".parse::<FailurePolicy>(), Ok(FailurePolicy::SkipWord));
        assert!("retry".parse::<FailurePolicy>().is_err());
        assert_eq!(FailurePolicy::SkipWord.to_string(), "skip-word");
    }
}
