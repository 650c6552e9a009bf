mod commands;
mod logging;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use appstore_rank_core::{FailurePolicy, RankConfig};
use clap::Parser;

#[derive(Parser)]
#[command(name = "appstore-rank")]
#[command(
    about = "Record where an App Store app ranks for each word of its own name",
    long_about = None
)]
struct Cli {
    /// App Store id of the app (prompted for when omitted)
    #[arg(allow_hyphen_values = true)]
    appleid: Option<String>,

    /// SQLite file the rank history is appended to
    #[arg(long)]
    db: Option<PathBuf>,

    /// Log file informational messages are mirrored to
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Storefront country for searches
    #[arg(short, long)]
    country: Option<String>,

    /// Catalog media kind
    #[arg(short, long)]
    media: Option<String>,

    /// Search results considered per word (1-200)
    #[arg(short, long)]
    limit: Option<u32>,

    /// Catalog API root
    #[arg(long)]
    base_url: Option<String>,

    /// Skip words whose search fails instead of aborting the run
    #[arg(long)]
    keep_going: bool,

    /// Print the run report as JSON after the progress lines
    #[arg(long)]
    json: bool,
}

impl Cli {
    /// Environment-derived config with command-line flags applied on top.
    fn config(&self) -> RankConfig {
        let mut config = RankConfig::from_env();
        if let Some(db) = &self.db {
            config.db_path.clone_from(db);
        }
        if let Some(log_file) = &self.log_file {
            config.log_path.clone_from(log_file);
        }
        if let Some(country) = &self.country {
            config.country.clone_from(country);
        }
        if let Some(media) = &self.media {
            config.media.clone_from(media);
        }
        if let Some(limit) = self.limit {
            config.result_window = limit;
        }
        if let Some(base_url) = &self.base_url {
            config.catalog_url.clone_from(base_url);
        }
        if self.keep_going {
            config.failure_policy = FailurePolicy::SkipWord;
        }
        config
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    let config = cli.config();
    config.validate()?;
    logging::init(&config.log_path)?;

    commands::run::run(cli.appleid, config, cli.json).await
}
