// src/sources/types.rs
use anyhow::Result;
use serde::{Deserialize, Serialize};

/// Organisational impact classification attached to a record.
///
/// Producers emit free text for this field; parsing is case-insensitive and
/// anything unrecognised maps to `Medium`, so badge and filter logic only
/// ever sees the three canonical values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ImpactLevel {
    High,
    #[default]
    Medium,
    Low,
}

impl ImpactLevel {
    pub fn parse(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "high" => ImpactLevel::High,
            "low" => ImpactLevel::Low,
            _ => ImpactLevel::Medium,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ImpactLevel::High => "High",
            ImpactLevel::Medium => "Medium",
            ImpactLevel::Low => "Low",
        }
    }

    /// Lowercase form used for CSS class suffixes (`badge-high` etc.).
    pub fn css_suffix(&self) -> &'static str {
        match self {
            ImpactLevel::High => "high",
            ImpactLevel::Medium => "medium",
            ImpactLevel::Low => "low",
        }
    }
}

impl std::fmt::Display for ImpactLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One regulatory update as produced by a source.
///
/// (`source`, `title`, `link`) is the natural key used for deduplication.
/// `date` is opaque ISO-8601 text, sorted lexically, never parsed. Extended
/// fields default to empty and render with a placeholder when absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateRecord {
    pub source: String,
    pub title: String,
    pub link: String,
    pub date: String,
    pub summary: String,
    #[serde(default)]
    pub first_published: String,
    #[serde(default)]
    pub last_updated: String,
    #[serde(default)]
    pub compliance_deadline: String,
    /// Semicolon-delimited list of key changes.
    #[serde(default)]
    pub significant_changes: String,
    #[serde(default)]
    pub impact_level: ImpactLevel,
    /// Comma-delimited list of affected industries.
    #[serde(default)]
    pub affected_sectors: String,
    #[serde(default)]
    pub jurisdiction: String,
}

impl UpdateRecord {
    /// Basic record with only the five required fields set.
    pub fn basic(source: &str, title: &str, link: &str, date: &str, summary: &str) -> Self {
        Self {
            source: source.to_string(),
            title: title.to_string(),
            link: link.to_string(),
            date: date.to_string(),
            summary: summary.to_string(),
            first_published: String::new(),
            last_updated: String::new(),
            compliance_deadline: String::new(),
            significant_changes: String::new(),
            impact_level: ImpactLevel::Medium,
            affected_sectors: String::new(),
            jurisdiction: String::new(),
        }
    }

    /// Name of the first missing required field, if the record is malformed.
    pub fn missing_required_field(&self) -> Option<&'static str> {
        if self.source.trim().is_empty() {
            Some("source")
        } else if self.title.trim().is_empty() {
            Some("title")
        } else if self.link.trim().is_empty() {
            Some("link")
        } else if self.date.trim().is_empty() {
            Some("date")
        } else if self.summary.trim().is_empty() {
            Some("summary")
        } else {
            None
        }
    }

    pub fn first_published_or_date(&self) -> &str {
        if self.first_published.is_empty() {
            &self.date
        } else {
            &self.first_published
        }
    }

    pub fn last_updated_or_date(&self) -> &str {
        if self.last_updated.is_empty() {
            &self.date
        } else {
            &self.last_updated
        }
    }

    pub fn deadline_or_placeholder(&self) -> &str {
        if self.compliance_deadline.is_empty() {
            "To be announced"
        } else {
            &self.compliance_deadline
        }
    }

    /// Significant changes split on `;`, empty entries dropped.
    pub fn changes(&self) -> Vec<&str> {
        self.significant_changes
            .split(';')
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .collect()
    }

    /// Affected sectors split on `,`, empty entries dropped.
    pub fn sectors(&self) -> Vec<&str> {
        self.affected_sectors
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect()
    }
}

/// A source-specific producer yielding zero or more candidate records per run.
///
/// Current implementations return constant data; the async seam is what lets
/// a later implementation fetch over the network without the aggregator
/// changing.
#[async_trait::async_trait]
pub trait SourceProvider {
    async fn fetch_latest(&self) -> Result<Vec<UpdateRecord>>;
    fn name(&self) -> &'static str;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn impact_parse_is_case_insensitive() {
        assert_eq!(ImpactLevel::parse("high"), ImpactLevel::High);
        assert_eq!(ImpactLevel::parse("HIGH"), ImpactLevel::High);
        assert_eq!(ImpactLevel::parse(" Low "), ImpactLevel::Low);
        assert_eq!(ImpactLevel::parse("medium"), ImpactLevel::Medium);
    }

    #[test]
    fn impact_parse_falls_back_to_medium() {
        assert_eq!(ImpactLevel::parse("severe"), ImpactLevel::Medium);
        assert_eq!(ImpactLevel::parse(""), ImpactLevel::Medium);
    }

    #[test]
    fn missing_required_field_names_first_gap() {
        let mut rec = UpdateRecord::basic("EU", "T", "http://x", "2025-01-01", "s");
        assert_eq!(rec.missing_required_field(), None);
        rec.title = "  ".into();
        assert_eq!(rec.missing_required_field(), Some("title"));
    }

    #[test]
    fn list_fields_split_and_trim() {
        let mut rec = UpdateRecord::basic("EU", "T", "http://x", "2025-01-01", "s");
        rec.significant_changes = "First change; Second change; ".into();
        rec.affected_sectors = "Banks, Asset Managers,".into();
        assert_eq!(rec.changes(), vec!["First change", "Second change"]);
        assert_eq!(rec.sectors(), vec!["Banks", "Asset Managers"]);
    }

    #[test]
    fn empty_extended_fields_fall_back() {
        let rec = UpdateRecord::basic("EU", "T", "http://x", "2025-01-01", "s");
        assert_eq!(rec.first_published_or_date(), "2025-01-01");
        assert_eq!(rec.deadline_or_placeholder(), "To be announced");
    }
}
