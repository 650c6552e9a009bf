use std::io::{BufRead as _, Write as _};
use std::path::Path;
use std::process::ExitCode;

use anyhow::{Context as _, Result};
use appstore_rank_catalog::CatalogClient;
use appstore_rank_core::{AppId, RankConfig};
use appstore_rank_service::{ConsoleReporter, RankService, RunOutcome};
use appstore_rank_storage::Storage;

const PROMPT: &str = "Enter the app's appleid:";

fn prompt_for_id() -> Result<String> {
    let mut stdout = std::io::stdout();
    write!(stdout, "{PROMPT}")?;
    stdout.flush()?;

    let mut line = String::new();
    std::io::stdin().lock().read_line(&mut line).context("reading app id from stdin")?;
    Ok(line)
}

fn ensure_db_dir(db_path: &Path) -> Result<()> {
    if let Some(parent) = db_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("creating database directory {}", parent.display()))?;
    }
    Ok(())
}

pub(crate) async fn run(appleid: Option<String>, config: RankConfig, json: bool) -> Result<ExitCode> {
    let raw = match appleid {
        Some(arg) => arg,
        None => prompt_for_id()?,
    };
    let id = match AppId::parse_input(&raw) {
        Ok(id) => id,
        Err(e) => {
            tracing::info!(input = %raw.trim(), error = %e, "Appleid is not correct");
            println!("Appleid is not correct");
            return Ok(ExitCode::FAILURE);
        },
    };

    ensure_db_dir(&config.db_path).inspect_err(|e| {
        tracing::error!(db = %config.db_path.display(), error = %e, "cannot prepare database directory");
    })?;
    let storage = Storage::new(&config.db_path)
        .inspect_err(|e| {
            tracing::error!(db = %config.db_path.display(), error = %e, "failed to open rank store");
        })
        .with_context(|| format!("opening rank store {}", config.db_path.display()))?;
    let catalog = CatalogClient::from_config(&config)
        .inspect_err(|e| {
            tracing::error!(catalog = %config.catalog_url, error = %e, "failed to build catalog client");
        })
        .context("building catalog client")?;
    tracing::info!(
        %id,
        db = %config.db_path.display(),
        catalog = catalog.base_url(),
        country = %config.country,
        window = config.result_window,
        policy = %config.failure_policy,
        "starting rank research"
    );
    let service = RankService::new(catalog, storage, ConsoleReporter::stdout(), config)?;

    match service.run(id).await {
        Ok(RunOutcome::Completed(report)) => {
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            }
            Ok(ExitCode::SUCCESS)
        },
        Ok(RunOutcome::NotFound(_)) => Ok(ExitCode::FAILURE),
        Err(err) => Err(anyhow::Error::new(err).context(format!("research for app id {id} failed"))),
    }
}
