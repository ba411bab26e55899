//! Sustainability Regulation Tracker — pipeline binary.
//!
//! One run: gather records from every registered source, insert the new ones
//! into the local store, regenerate the dashboard, and email a digest of the
//! newly-discovered records when SMTP is configured.

use anyhow::{Context, Result};
use chrono::Utc;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use esg_regulation_tracker::config::TrackerConfig;
use esg_regulation_tracker::digest::{DashboardRenderer, DigestRenderer};
use esg_regulation_tracker::notify::{compose_digest, EmailNotifier};
use esg_regulation_tracker::sources::SourceRegistry;
use esg_regulation_tracker::store::{SortOrder, UpdateStore};

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact())
        .init();
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Load .env in local/dev; no-op in other environments.
    let _ = dotenvy::dotenv();
    init_tracing();

    let config = TrackerConfig::load()?;
    std::fs::create_dir_all(&config.data_dir)
        .with_context(|| format!("creating data directory {}", config.data_dir.display()))?;

    // Store unavailability is the one fatal failure of a run.
    let mut store = UpdateStore::open(&config.store_path())?;

    let registry = SourceRegistry::with_default_sources();
    let gathered = registry.gather_all().await;
    let new_records = store.insert_all(&gathered)?;
    tracing::info!(
        gathered = gathered.len(),
        new = new_records.len(),
        total = store.count()?,
        "ingest complete"
    );

    // The dashboard always reflects the full stored set, not just this run's
    // new records.
    let generated_at = Utc::now();
    let records = store.query_all(SortOrder::DeadlineSourceDate)?;
    let dashboard = DashboardRenderer.render(&records, generated_at);
    let dashboard_path = config.dashboard_path();
    std::fs::write(&dashboard_path, dashboard)
        .with_context(|| format!("writing dashboard to {}", dashboard_path.display()))?;
    tracing::info!(path = %dashboard_path.display(), "dashboard written");

    // Digest email covers only what this run discovered. Transport failure
    // degrades to a warning; it never aborts the run.
    let digest = compose_digest(&new_records, generated_at);
    let notifier = EmailNotifier::from_env();
    if let Err(e) = notifier.send(&digest).await {
        tracing::warn!(error = ?e, "digest email failed");
    }

    tracing::info!("run complete");
    Ok(())
}
