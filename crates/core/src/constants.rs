//! Shared constants for appstore-rank.
//!
//! Defaults for every field of [`crate::RankConfig`].

/// Catalog media kind used for both lookup and search.
pub const DEFAULT_MEDIA: &str = "software";

/// Storefront country for search requests.
pub const DEFAULT_COUNTRY: &str = "RU";

/// Number of search results requested per word.
pub const DEFAULT_RESULT_WINDOW: u32 = 200;

/// Largest result window the search endpoint honours.
pub const MAX_RESULT_WINDOW: u32 = 200;

/// SQLite file holding rank observations.
pub const DEFAULT_DB_PATH: &str = "itunes.db";

/// Log file mirrored by the CLI.
pub const DEFAULT_LOG_PATH: &str = "log_file.log";

/// Root of the public iTunes Search API.
pub const DEFAULT_CATALOG_URL: &str = "https://itunes.apple.com";

/// HTTP request timeout in seconds.
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;

/// Browser user agent sent with catalog requests.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
     (KHTML, like Gecko) Chrome/110.0.0.0 YaBrowser/23.3.3.719 Yowser/2.5 Safari/537.36";

/// Timestamp layout of the `date` column.
pub const OBSERVED_AT_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
