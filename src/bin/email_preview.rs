//! Renders the stored record set into plain-text and HTML email bodies
//! without sending anything. Useful for pasting a digest into a mail client
//! or eyeballing a style change.

use anyhow::{bail, Context, Result};
use chrono::Utc;

use esg_regulation_tracker::config::TrackerConfig;
use esg_regulation_tracker::digest::{DigestRenderer, HtmlDigest, PlainTextDigest, ReportStyle};
use esg_regulation_tracker::store::{SortOrder, UpdateStore};

const PLAIN_FILE: &str = "email_digest.txt";
const HTML_FILE: &str = "email_digest.html";

fn main() -> Result<()> {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt().with_target(false).init();

    let config = TrackerConfig::load()?;
    let store_path = config.store_path();
    if !store_path.exists() {
        bail!(
            "update store not found at {} (run the tracker first to populate it)",
            store_path.display()
        );
    }
    let store = UpdateStore::open(&store_path)?;

    let order = match config.report_style {
        ReportStyle::Basic => SortOrder::SourceDateDesc,
        ReportStyle::Professional => SortOrder::DeadlineSourceDate,
    };
    let records = store.query_all(order)?;
    let generated_at = Utc::now();

    let style = config.report_style;
    let plain = PlainTextDigest { style }.render(&records, generated_at);
    let html = HtmlDigest { style }.render(&records, generated_at);

    let plain_path = config.data_dir.join(PLAIN_FILE);
    let html_path = config.data_dir.join(HTML_FILE);
    std::fs::write(&plain_path, &plain)
        .with_context(|| format!("writing plain digest to {}", plain_path.display()))?;
    std::fs::write(&html_path, &html)
        .with_context(|| format!("writing html digest to {}", html_path.display()))?;

    println!("{plain}");
    tracing::info!(
        plain = %plain_path.display(),
        html = %html_path.display(),
        records = records.len(),
        "email digests written"
    );
    Ok(())
}
