// tests/digest_render.rs
//
// Renderer properties over the real producer catalogue: determinism under a
// fixed clock, escaping of hostile field content, and valid empty reports.

use chrono::{DateTime, TimeZone, Utc};
use esg_regulation_tracker::digest::{
    DashboardRenderer, DigestRenderer, HtmlDigest, PlainTextDigest, ReportStyle,
};
use esg_regulation_tracker::{SortOrder, SourceRegistry, UpdateRecord, UpdateStore};

fn fixed_clock() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 8, 7, 9, 15, 0).unwrap()
}

async fn stored_catalogue() -> Vec<UpdateRecord> {
    let registry = SourceRegistry::with_default_sources();
    let mut store = UpdateStore::open_in_memory().unwrap();
    store.insert_all(&registry.gather_all().await).unwrap();
    store.query_all(SortOrder::DeadlineSourceDate).unwrap()
}

#[tokio::test]
async fn rendering_is_deterministic_under_fixed_clock() {
    let records = stored_catalogue().await;
    let renderers: Vec<Box<dyn DigestRenderer>> = vec![
        Box::new(PlainTextDigest { style: ReportStyle::Basic }),
        Box::new(PlainTextDigest { style: ReportStyle::Professional }),
        Box::new(HtmlDigest { style: ReportStyle::Basic }),
        Box::new(HtmlDigest { style: ReportStyle::Professional }),
        Box::new(DashboardRenderer),
    ];
    for renderer in renderers {
        let first = renderer.render(&records, fixed_clock());
        let second = renderer.render(&records, fixed_clock());
        assert_eq!(first, second);
        assert!(first.contains("August 07, 2025 at 09:15 UTC"));
    }
}

#[tokio::test]
async fn catalogue_renders_every_source_section() {
    let records = stored_catalogue().await;
    let out = PlainTextDigest { style: ReportStyle::Professional }.render(&records, fixed_clock());
    for source in ["EU", "IFRS", "UK", "Japan", "India", "SBTi"] {
        assert!(out.contains(&format!("SOURCE: {source}")), "missing {source}");
    }
}

#[test]
fn hostile_titles_cannot_inject_markup() {
    let rec = UpdateRecord::basic(
        "EU",
        "<img src=x onerror=alert(1)> & <b>bold</b>",
        "http://example.com/?a=1&b=2",
        "2025-01-01",
        "summary with <i>tags</i> & ampersands",
    );
    let records = vec![rec];

    for out in [
        HtmlDigest { style: ReportStyle::Basic }.render(&records, fixed_clock()),
        HtmlDigest { style: ReportStyle::Professional }.render(&records, fixed_clock()),
        DashboardRenderer.render(&records, fixed_clock()),
    ] {
        assert!(!out.contains("<img src=x"));
        assert!(!out.contains("<i>tags</i>"));
        assert!(out.contains("&lt;b&gt;bold&lt;/b&gt;"));
        assert!(out.contains("&amp;"));
    }
}

#[test]
fn empty_store_produces_well_formed_reports() {
    let empty: Vec<UpdateRecord> = Vec::new();

    let plain = PlainTextDigest { style: ReportStyle::Basic }.render(&empty, fixed_clock());
    assert!(!plain.is_empty());
    assert!(plain.contains("No regulatory updates recorded."));

    let html = HtmlDigest { style: ReportStyle::Professional }.render(&empty, fixed_clock());
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("No regulatory updates recorded."));

    let dash = DashboardRenderer.render(&empty, fixed_clock());
    assert!(dash.contains("const regulations = []"));
    assert!(dash.trim_end().ends_with("</html>"));
}

#[tokio::test]
async fn dashboard_embeds_full_catalogue_as_json() {
    let records = stored_catalogue().await;
    let out = DashboardRenderer.render(&records, fixed_clock());

    let start = out.find("const regulations = ").unwrap() + "const regulations = ".len();
    let end = out[start..].find(";\n").unwrap() + start;
    let parsed: serde_json::Value = serde_json::from_str(&out[start..end]).unwrap();
    assert_eq!(parsed.as_array().unwrap().len(), records.len());

    // Client-side tracker state must be local-only.
    assert!(out.contains("localStorage"));
    assert!(!out.contains("fetch("));
}
