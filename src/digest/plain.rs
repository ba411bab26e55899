// src/digest/plain.rs
//
// Bounded-width plain-text reports. The basic variant surfaces the five core
// fields at 80 columns; the professional variant adds the extended metadata
// at 90 columns.

use chrono::{DateTime, Utc};

use crate::digest::{
    dated_deadlines, format_generated, impact_counts, is_urgent, DigestRenderer, ReportStyle,
};
use crate::sources::types::UpdateRecord;

const BASIC_WIDTH: usize = 80;
const PRO_WIDTH: usize = 90;

pub struct PlainTextDigest {
    pub style: ReportStyle,
}

impl DigestRenderer for PlainTextDigest {
    fn render(&self, records: &[UpdateRecord], generated_at: DateTime<Utc>) -> String {
        match self.style {
            ReportStyle::Basic => render_basic(records, generated_at),
            ReportStyle::Professional => render_professional(records, generated_at),
        }
    }
}

/// Greedy word wrap; every emitted line starts with `indent` and stays within
/// `width` columns (a single overlong word may exceed it).
pub(crate) fn wrap_indented(text: &str, indent: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut buf = String::from(indent);
    for word in text.split_whitespace() {
        if buf.chars().count() > indent.len()
            && buf.chars().count() + word.chars().count() + 1 > width
        {
            lines.push(std::mem::replace(&mut buf, String::from(indent)));
        }
        if buf.len() > indent.len() {
            buf.push(' ');
        }
        buf.push_str(word);
    }
    if !buf.trim().is_empty() {
        lines.push(buf);
    }
    lines
}

fn render_basic(records: &[UpdateRecord], generated_at: DateTime<Utc>) -> String {
    let rule = "=".repeat(BASIC_WIDTH);
    let thin = "-".repeat(BASIC_WIDTH);
    let mut lines: Vec<String> = Vec::new();

    lines.push(rule.clone());
    lines.push("SUSTAINABILITY REGULATORY UPDATES".into());
    lines.push(rule.clone());
    lines.push(format!("Generated: {}", format_generated(generated_at)));
    lines.push(String::new());

    if records.is_empty() {
        lines.push("No regulatory updates recorded.".into());
        lines.push(String::new());
    }

    let mut current_source: Option<&str> = None;
    for rec in records {
        if current_source != Some(rec.source.as_str()) {
            if current_source.is_some() {
                lines.push(String::new());
            }
            current_source = Some(&rec.source);
            lines.push(thin.clone());
            lines.push(format!("SOURCE: {}", rec.source));
            lines.push(thin.clone());
            lines.push(String::new());
        }

        lines.push(rec.title.clone());
        lines.push(format!("   Date: {}", rec.date));
        lines.push(format!("   Link: {}", rec.link));
        lines.push(String::new());
        lines.extend(wrap_indented(&rec.summary, "   ", BASIC_WIDTH));
        lines.push(String::new());
    }

    lines.push(rule.clone());
    lines.push("End of Report".into());
    lines.push(rule);
    lines.join("\n")
}

fn render_professional(records: &[UpdateRecord], generated_at: DateTime<Utc>) -> String {
    let rule = "=".repeat(PRO_WIDTH);
    let thin = "-".repeat(PRO_WIDTH);
    let mut lines: Vec<String> = Vec::new();

    lines.push(rule.clone());
    lines.push("SUSTAINABILITY REGULATORY UPDATES".into());
    lines.push(rule.clone());
    lines.push(format!("Generated: {}", format_generated(generated_at)));
    lines.push(format!("Total Regulations Tracked: {}", records.len()));
    lines.push(String::new());

    if records.is_empty() {
        lines.push("No regulatory updates recorded.".into());
        lines.push(String::new());
    } else {
        let (high, medium, low) = impact_counts(records);
        lines.push("IMPACT SUMMARY".into());
        lines.push(format!("  * High Impact: {high} regulations"));
        lines.push(format!("  * Medium Impact: {medium} regulations"));
        lines.push(format!("  * Low Impact: {low} regulations"));
        lines.push(String::new());

        let urgent: Vec<_> = dated_deadlines(records)
            .into_iter()
            .filter(|r| is_urgent(&r.compliance_deadline, generated_at))
            .collect();
        if !urgent.is_empty() {
            lines.push("URGENT: UPCOMING COMPLIANCE DEADLINES".into());
            lines.push(thin.clone());
            for r in urgent {
                lines.push(format!(
                    "  {} - {} ({})",
                    r.compliance_deadline, r.title, r.jurisdiction
                ));
            }
            lines.push(String::new());
        }
    }

    let mut current_source: Option<&str> = None;
    for rec in records {
        if current_source != Some(rec.source.as_str()) {
            if current_source.is_some() {
                lines.push(String::new());
            }
            current_source = Some(&rec.source);
            lines.push(rule.clone());
            lines.push(format!(
                "SOURCE: {} | JURISDICTION: {}",
                rec.source, rec.jurisdiction
            ));
            lines.push(rule.clone());
            lines.push(String::new());
        }

        lines.push(rec.title.clone());
        lines.push(format!("   Impact Level: {}", rec.impact_level));
        lines.push(format!("   Link: {}", rec.link));
        lines.push(String::new());

        lines.push("   KEY DATES:".into());
        lines.push(format!("     * First Published: {}", rec.first_published_or_date()));
        lines.push(format!("     * Last Updated: {}", rec.last_updated_or_date()));
        lines.push(format!(
            "     * Compliance Deadline: {}",
            rec.deadline_or_placeholder()
        ));
        lines.push(String::new());

        let sectors = rec.sectors();
        if !sectors.is_empty() {
            lines.push("   AFFECTED SECTORS:".into());
            for sector in sectors {
                lines.push(format!("     * {sector}"));
            }
            lines.push(String::new());
        }

        lines.push("   SUMMARY:".into());
        lines.extend(wrap_indented(&rec.summary, "     ", PRO_WIDTH - 2));
        lines.push(String::new());

        let changes = rec.changes();
        if !changes.is_empty() {
            lines.push("   SIGNIFICANT CHANGES:".into());
            for change in changes {
                lines.push(format!("     * {change}"));
            }
            lines.push(String::new());
        }

        lines.push(thin.clone());
        lines.push(String::new());
    }

    lines.push(rule.clone());
    lines.push("END OF REPORT".into());
    lines.push(rule);
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 8, 7, 12, 0, 0).unwrap()
    }

    #[test]
    fn wrap_respects_width_and_indent() {
        let text = "one two three four five six seven eight nine ten eleven twelve";
        let lines = wrap_indented(text, "   ", 20);
        assert!(lines.len() > 1);
        for line in &lines {
            assert!(line.starts_with("   "));
            assert!(line.chars().count() <= 20, "line too wide: {line:?}");
        }
        let rejoined: Vec<_> = lines
            .iter()
            .flat_map(|l| l.split_whitespace())
            .collect();
        assert_eq!(rejoined.join(" "), text);
    }

    #[test]
    fn wrap_keeps_overlong_word_whole() {
        let lines = wrap_indented("supercalifragilisticexpialidocious", "  ", 10);
        assert_eq!(lines, vec!["  supercalifragilisticexpialidocious"]);
    }

    #[test]
    fn empty_input_renders_no_updates_indicator() {
        let basic = PlainTextDigest { style: ReportStyle::Basic }.render(&[], now());
        assert!(basic.contains("No regulatory updates recorded."));
        assert!(basic.contains("End of Report"));

        let pro = PlainTextDigest { style: ReportStyle::Professional }.render(&[], now());
        assert!(pro.contains("No regulatory updates recorded."));
        assert!(pro.contains("Total Regulations Tracked: 0"));
    }

    #[test]
    fn basic_groups_by_source_with_banner() {
        let mut a = UpdateRecord::basic("EU", "First", "http://a", "2025-07-11", "a summary");
        a.jurisdiction = "European Union (EU27)".into();
        let b = UpdateRecord::basic("UK", "Second", "http://b", "2025-06-25", "b summary");

        let out = PlainTextDigest { style: ReportStyle::Basic }.render(&[a, b], now());
        assert!(out.starts_with(&"=".repeat(80)));
        assert!(out.contains("SOURCE: EU"));
        assert!(out.contains("SOURCE: UK"));
        assert!(out.contains("Generated: August 07, 2025 at 12:00 UTC"));
        let eu_pos = out.find("SOURCE: EU").unwrap();
        let uk_pos = out.find("SOURCE: UK").unwrap();
        assert!(eu_pos < uk_pos);
    }

    #[test]
    fn professional_lists_deadlines_and_changes() {
        let mut a = UpdateRecord::basic("EU", "Quick fix", "http://a", "2025-07-11", "summary");
        a.compliance_deadline = "2026-12-31".into();
        a.jurisdiction = "European Union (EU27)".into();
        a.significant_changes = "Change one; Change two".into();
        a.affected_sectors = "Banks, Insurers".into();

        let out = PlainTextDigest { style: ReportStyle::Professional }.render(&[a], now());
        assert!(out.contains("URGENT: UPCOMING COMPLIANCE DEADLINES"));
        assert!(out.contains("2026-12-31 - Quick fix (European Union (EU27))"));
        assert!(out.contains("     * Change one"));
        assert!(out.contains("     * Banks"));
        assert!(out.contains("IMPACT SUMMARY"));
    }
}
