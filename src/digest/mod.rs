// src/digest/mod.rs
pub mod dashboard;
pub mod html;
pub mod plain;

use chrono::{DateTime, Datelike, Utc};
use serde::Deserialize;

use crate::sources::types::{ImpactLevel, UpdateRecord};

pub use dashboard::DashboardRenderer;
pub use html::HtmlDigest;
pub use plain::PlainTextDigest;

/// Which metadata a digest surfaces. Selected by configuration; renderer
/// implementations stay behind the one `DigestRenderer` interface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportStyle {
    /// Five core fields only, 80-column text.
    Basic,
    /// Full metadata: impact summary, deadlines, sectors, changes.
    #[default]
    Professional,
}

impl ReportStyle {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "basic" => Some(ReportStyle::Basic),
            "professional" => Some(ReportStyle::Professional),
            _ => None,
        }
    }
}

/// Projects a record set into one human-readable artifact.
///
/// `generated_at` is injected rather than read from the clock, so identical
/// input and a fixed timestamp produce byte-identical output.
pub trait DigestRenderer {
    fn render(&self, records: &[UpdateRecord], generated_at: DateTime<Utc>) -> String;
}

/// "August 07, 2025 at 12:30 UTC" -- shared header timestamp format.
pub(crate) fn format_generated(ts: DateTime<Utc>) -> String {
    ts.format("%B %d, %Y at %H:%M UTC").to_string()
}

pub(crate) fn impact_counts(records: &[UpdateRecord]) -> (usize, usize, usize) {
    let mut high = 0;
    let mut medium = 0;
    let mut low = 0;
    for r in records {
        match r.impact_level {
            ImpactLevel::High => high += 1,
            ImpactLevel::Medium => medium += 1,
            ImpactLevel::Low => low += 1,
        }
    }
    (high, medium, low)
}

/// Records with a dated compliance deadline (voluntary commitments and empty
/// fields are not calendar entries).
pub(crate) fn dated_deadlines<'a>(records: &'a [UpdateRecord]) -> Vec<&'a UpdateRecord> {
    records
        .iter()
        .filter(|r| r.compliance_deadline.starts_with(|c: char| c.is_ascii_digit()))
        .collect()
}

/// A deadline falling in the generation year or the next one is highlighted
/// as urgent.
pub(crate) fn is_urgent(deadline: &str, generated_at: DateTime<Utc>) -> bool {
    let year = generated_at.year();
    deadline.contains(&year.to_string()) || deadline.contains(&(year + 1).to_string())
}

/// Per-source record counts in first-seen order.
pub(crate) fn source_counts(records: &[UpdateRecord]) -> Vec<(String, usize)> {
    let mut counts: Vec<(String, usize)> = Vec::new();
    for r in records {
        match counts.iter_mut().find(|(s, _)| *s == r.source) {
            Some((_, n)) => *n += 1,
            None => counts.push((r.source.clone(), 1)),
        }
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn style_parse_accepts_known_names() {
        assert_eq!(ReportStyle::parse("basic"), Some(ReportStyle::Basic));
        assert_eq!(ReportStyle::parse("Professional"), Some(ReportStyle::Professional));
        assert_eq!(ReportStyle::parse("fancy"), None);
    }

    #[test]
    fn urgency_tracks_generation_year() {
        let now = Utc.with_ymd_and_hms(2025, 8, 7, 12, 0, 0).unwrap();
        assert!(is_urgent("2026-12-31", now));
        assert!(is_urgent("2025-09-17", now));
        assert!(!is_urgent("2028-03-31", now));
    }

    #[test]
    fn dated_deadlines_skip_voluntary_and_empty() {
        let mut a = UpdateRecord::basic("EU", "a", "http://a", "2025-01-01", "s");
        a.compliance_deadline = "2026-12-31".into();
        let mut b = UpdateRecord::basic("SBTi", "b", "http://b", "2025-01-01", "s");
        b.compliance_deadline = "Voluntary commitment (5-24 month target-setting timeline)".into();
        let c = UpdateRecord::basic("UK", "c", "http://c", "2025-01-01", "s");

        let records = [a, b, c];
        let dated = dated_deadlines(&records);
        assert_eq!(dated.len(), 1);
        assert_eq!(dated[0].source, "EU");
    }

    #[test]
    fn source_counts_keep_first_seen_order() {
        let r = |s: &str| UpdateRecord::basic(s, s, "http://x", "2025-01-01", "s");
        let counts = source_counts(&[r("EU"), r("IFRS"), r("EU")]);
        assert_eq!(counts, vec![("EU".to_string(), 2), ("IFRS".to_string(), 1)]);
    }
}
