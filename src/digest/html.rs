// src/digest/html.rs
//
// Inline-styled, self-contained HTML email documents. Every user-controlled
// field goes through html-escape before it reaches markup; links are escaped
// for the double-quoted attribute context.

use std::fmt::Write as _;

use chrono::{DateTime, Utc};

use crate::digest::{
    dated_deadlines, format_generated, impact_counts, is_urgent, DigestRenderer, ReportStyle,
};
use crate::sources::types::UpdateRecord;

pub struct HtmlDigest {
    pub style: ReportStyle,
}

impl DigestRenderer for HtmlDigest {
    fn render(&self, records: &[UpdateRecord], generated_at: DateTime<Utc>) -> String {
        match self.style {
            ReportStyle::Basic => render_basic(records, generated_at),
            ReportStyle::Professional => render_professional(records, generated_at),
        }
    }
}

pub(crate) fn esc(s: &str) -> String {
    html_escape::encode_text(s).into_owned()
}

pub(crate) fn esc_attr(s: &str) -> String {
    html_escape::encode_double_quoted_attribute(s).into_owned()
}

const BASIC_STYLE: &str = r#"
body {
    font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, 'Helvetica Neue', Arial, sans-serif;
    line-height: 1.6;
    color: #333;
    max-width: 800px;
    margin: 0 auto;
    padding: 20px;
    background-color: #f5f5f5;
}
.container {
    background-color: #ffffff;
    padding: 30px;
    border-radius: 8px;
    box-shadow: 0 2px 4px rgba(0,0,0,0.1);
}
h1 {
    color: #2a5d84;
    border-bottom: 3px solid #2a5d84;
    padding-bottom: 10px;
    margin-top: 0;
}
h2 {
    color: #2a5d84;
    background-color: #e8f4f8;
    padding: 10px 15px;
    border-left: 4px solid #2a5d84;
    margin-top: 30px;
}
.update-item {
    margin: 20px 0;
    padding: 15px;
    border: 1px solid #e0e0e0;
    border-radius: 5px;
    background-color: #fafafa;
}
.update-title {
    font-size: 16px;
    font-weight: bold;
    color: #1a1a1a;
    margin-bottom: 8px;
}
.update-meta {
    font-size: 14px;
    color: #666;
    margin-bottom: 10px;
}
.update-summary {
    font-size: 14px;
    color: #444;
    line-height: 1.6;
}
.update-link {
    display: inline-block;
    margin-top: 10px;
    color: #2a5d84;
    text-decoration: none;
    font-weight: 500;
}
.update-link:hover {
    text-decoration: underline;
}
.empty-note {
    color: #666;
    font-style: italic;
}
.footer {
    margin-top: 30px;
    padding-top: 20px;
    border-top: 1px solid #e0e0e0;
    font-size: 12px;
    color: #888;
    text-align: center;
}
"#;

fn render_basic(records: &[UpdateRecord], generated_at: DateTime<Utc>) -> String {
    let mut out = String::new();
    out.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<style>");
    out.push_str(BASIC_STYLE);
    out.push_str("</style>\n</head>\n<body>\n<div class=\"container\">\n");
    out.push_str("<h1>Sustainability Regulatory Updates</h1>\n");
    let _ = writeln!(
        out,
        "<p style=\"color: #666; font-size: 14px;\">Generated on {}</p>",
        format_generated(generated_at)
    );

    if records.is_empty() {
        out.push_str("<p class=\"empty-note\">No regulatory updates recorded.</p>\n");
    }

    let mut current_source: Option<&str> = None;
    for rec in records {
        if current_source != Some(rec.source.as_str()) {
            current_source = Some(&rec.source);
            let _ = writeln!(out, "<h2>{}</h2>", esc(&rec.source));
        }
        out.push_str("<div class=\"update-item\">\n");
        let _ = writeln!(out, "<div class=\"update-title\">{}</div>", esc(&rec.title));
        let _ = writeln!(out, "<div class=\"update-meta\">Date: {}</div>", esc(&rec.date));
        let _ = writeln!(out, "<div class=\"update-summary\">{}</div>", esc(&rec.summary));
        let _ = writeln!(
            out,
            "<a href=\"{}\" class=\"update-link\" target=\"_blank\">Read More</a>",
            esc_attr(&rec.link)
        );
        out.push_str("</div>\n");
    }

    out.push_str(
        "<div class=\"footer\">\n\
         <p>This is an automated digest from the sustainability regulation tracker.</p>\n\
         <p>For questions or to unsubscribe, please contact the sender.</p>\n\
         </div>\n</div>\n</body>\n</html>\n",
    );
    out
}

const PRO_STYLE: &str = r#"
body {
    font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, 'Helvetica Neue', Arial, sans-serif;
    line-height: 1.6;
    color: #1a1a1a;
    max-width: 800px;
    margin: 0 auto;
    padding: 0;
    background-color: #f5f5f5;
}
.email-container {
    background-color: #ffffff;
    margin: 20px auto;
    border-radius: 12px;
    overflow: hidden;
    box-shadow: 0 4px 12px rgba(0,0,0,0.15);
}
.header {
    background: linear-gradient(135deg, #2a5d84 0%, #1e4a6b 100%);
    color: white;
    padding: 40px 30px;
    text-align: center;
}
.header h1 {
    margin: 0 0 10px 0;
    font-size: 2rem;
    font-weight: 700;
}
.header .subtitle {
    opacity: 0.95;
    font-size: 1.1rem;
}
.stats-banner {
    display: flex;
    justify-content: space-around;
    padding: 25px;
    background: #f8f9fa;
    border-bottom: 3px solid #2a5d84;
}
.stat-box { text-align: center; }
.stat-number {
    font-size: 2rem;
    font-weight: 700;
    margin-bottom: 5px;
}
.stat-label {
    font-size: 0.85rem;
    color: #666;
    text-transform: uppercase;
}
.stat-high { color: #dc3545; }
.stat-medium { color: #fd7e14; }
.stat-low { color: #28a745; }
.content { padding: 30px; }
.empty-note { color: #666; font-style: italic; }
.urgent-section {
    background: #fff5f5;
    border: 2px solid #dc3545;
    border-radius: 8px;
    padding: 20px;
    margin-bottom: 30px;
}
.urgent-title {
    color: #dc3545;
    font-weight: 700;
    font-size: 1.2rem;
    margin-bottom: 15px;
}
.deadline-item {
    padding: 10px 0;
    border-bottom: 1px solid #fdd;
}
.deadline-item:last-child { border-bottom: none; }
.source-header {
    background: #2a5d84;
    color: white;
    padding: 15px 20px;
    margin: 30px -30px 20px -30px;
    font-size: 1.3rem;
    font-weight: 600;
}
.update-card {
    background: #fff;
    border: 1px solid #e0e0e0;
    border-radius: 8px;
    padding: 25px;
    margin-bottom: 20px;
}
.update-title {
    font-size: 1.2rem;
    font-weight: 600;
    color: #1a1a1a;
    margin-bottom: 15px;
}
.badge-container {
    display: flex;
    gap: 10px;
    margin-bottom: 15px;
    flex-wrap: wrap;
}
.badge {
    padding: 5px 12px;
    border-radius: 20px;
    font-size: 0.85rem;
    font-weight: 600;
}
.badge-high { background: #ffe0e0; color: #dc3545; }
.badge-medium { background: #fff3cd; color: #fd7e14; }
.badge-low { background: #d4edda; color: #28a745; }
.badge-jurisdiction { background: #e8f4f8; color: #2a5d84; }
.metadata-grid {
    display: grid;
    grid-template-columns: repeat(2, 1fr);
    gap: 12px;
    background: #f8f9fa;
    padding: 15px;
    border-radius: 6px;
    margin: 15px 0;
    font-size: 0.9rem;
}
.metadata-item {
    display: flex;
    flex-direction: column;
}
.metadata-label {
    font-weight: 600;
    color: #666;
    font-size: 0.8rem;
    text-transform: uppercase;
    margin-bottom: 3px;
}
.metadata-value { color: #1a1a1a; }
.summary-box {
    color: #444;
    line-height: 1.7;
    margin: 15px 0;
}
.changes-box {
    background: #fffbf0;
    border-left: 4px solid #fd7e14;
    padding: 15px;
    margin: 15px 0;
    border-radius: 4px;
}
.changes-title {
    font-weight: 600;
    color: #fd7e14;
    margin-bottom: 10px;
}
.changes-list {
    list-style: none;
    padding-left: 0;
}
.changes-list li {
    padding-left: 20px;
    position: relative;
    margin-bottom: 5px;
}
.changes-list li:before {
    content: "\2022";
    position: absolute;
    left: 0;
    color: #fd7e14;
    font-weight: bold;
}
.sectors-box { margin: 15px 0; }
.sectors-list {
    display: flex;
    flex-wrap: wrap;
    gap: 8px;
    margin-top: 8px;
}
.sector-tag {
    background: #e8f4f8;
    color: #2a5d84;
    padding: 5px 10px;
    border-radius: 16px;
    font-size: 0.85rem;
}
.read-more-btn {
    display: inline-block;
    margin-top: 15px;
    padding: 10px 20px;
    background: #2a5d84;
    color: white !important;
    text-decoration: none;
    border-radius: 6px;
    font-weight: 500;
}
.footer {
    background: #2a5d84;
    color: white;
    padding: 30px;
    text-align: center;
    margin-top: 40px;
}
.footer-title {
    font-size: 1.1rem;
    font-weight: 600;
    margin-bottom: 10px;
}
.footer-disclaimer {
    font-size: 0.85rem;
    opacity: 0.9;
    line-height: 1.6;
}
@media (max-width: 600px) {
    .stats-banner { flex-direction: column; gap: 15px; }
    .metadata-grid { grid-template-columns: 1fr; }
    .source-header { margin-left: -20px; margin-right: -20px; }
    .content { padding: 20px; }
}
"#;

fn render_professional(records: &[UpdateRecord], generated_at: DateTime<Utc>) -> String {
    let (high, medium, low) = impact_counts(records);

    let mut out = String::new();
    out.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
    out.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n");
    out.push_str("<style>");
    out.push_str(PRO_STYLE);
    out.push_str("</style>\n</head>\n<body>\n<div class=\"email-container\">\n");

    out.push_str(
        "<div class=\"header\">\n\
         <h1>Sustainability Regulatory Updates</h1>\n\
         <div class=\"subtitle\">Global ESG &amp; Climate Disclosure Tracking</div>\n\
         </div>\n",
    );

    let _ = write!(
        out,
        "<div class=\"stats-banner\">\n\
         <div class=\"stat-box\"><div class=\"stat-number\">{}</div><div class=\"stat-label\">Total Updates</div></div>\n\
         <div class=\"stat-box\"><div class=\"stat-number stat-high\">{high}</div><div class=\"stat-label\">High Impact</div></div>\n\
         <div class=\"stat-box\"><div class=\"stat-number stat-medium\">{medium}</div><div class=\"stat-label\">Medium Impact</div></div>\n\
         <div class=\"stat-box\"><div class=\"stat-number stat-low\">{low}</div><div class=\"stat-label\">Low Impact</div></div>\n\
         </div>\n",
        records.len()
    );

    out.push_str("<div class=\"content\">\n");
    let _ = writeln!(
        out,
        "<p style=\"color: #666; margin-bottom: 20px;\">Generated on {}</p>",
        format_generated(generated_at)
    );

    if records.is_empty() {
        out.push_str("<p class=\"empty-note\">No regulatory updates recorded.</p>\n");
    }

    let urgent: Vec<_> = dated_deadlines(records)
        .into_iter()
        .filter(|r| is_urgent(&r.compliance_deadline, generated_at))
        .collect();
    if !urgent.is_empty() {
        out.push_str(
            "<div class=\"urgent-section\">\n\
             <div class=\"urgent-title\">Urgent: Upcoming Compliance Deadlines</div>\n",
        );
        for r in urgent {
            let _ = writeln!(
                out,
                "<div class=\"deadline-item\"><strong>{}</strong> - {} ({})</div>",
                esc(&r.compliance_deadline),
                esc(&r.title),
                esc(&r.jurisdiction)
            );
        }
        out.push_str("</div>\n");
    }

    let mut current_source: Option<&str> = None;
    for rec in records {
        if current_source != Some(rec.source.as_str()) {
            if current_source.is_some() {
                out.push_str("</div>\n");
            }
            current_source = Some(&rec.source);
            let _ = writeln!(
                out,
                "<div class=\"source-header\">{} - {}</div>\n<div class=\"source-section\">",
                esc(&rec.source),
                esc(&rec.jurisdiction)
            );
        }

        out.push_str("<div class=\"update-card\">\n");
        let _ = writeln!(out, "<div class=\"update-title\">{}</div>", esc(&rec.title));

        let _ = writeln!(
            out,
            "<div class=\"badge-container\">\n\
             <span class=\"badge badge-{}\">{} Impact</span>\n\
             <span class=\"badge badge-jurisdiction\">{}</span>\n\
             </div>",
            rec.impact_level.css_suffix(),
            rec.impact_level,
            esc(&rec.jurisdiction)
        );

        let _ = writeln!(
            out,
            "<div class=\"metadata-grid\">\n\
             <div class=\"metadata-item\"><span class=\"metadata-label\">First Published</span><span class=\"metadata-value\">{}</span></div>\n\
             <div class=\"metadata-item\"><span class=\"metadata-label\">Last Updated</span><span class=\"metadata-value\">{}</span></div>\n\
             <div class=\"metadata-item\"><span class=\"metadata-label\">Compliance Deadline</span><span class=\"metadata-value\">{}</span></div>\n\
             <div class=\"metadata-item\"><span class=\"metadata-label\">Impact Level</span><span class=\"metadata-value\">{}</span></div>\n\
             </div>",
            esc(rec.first_published_or_date()),
            esc(rec.last_updated_or_date()),
            esc(rec.deadline_or_placeholder()),
            rec.impact_level
        );

        let _ = writeln!(out, "<div class=\"summary-box\">{}</div>", esc(&rec.summary));

        let changes = rec.changes();
        if !changes.is_empty() {
            out.push_str(
                "<div class=\"changes-box\">\n\
                 <div class=\"changes-title\">Significant Changes</div>\n\
                 <ul class=\"changes-list\">\n",
            );
            for change in changes {
                let _ = writeln!(out, "<li>{}</li>", esc(change));
            }
            out.push_str("</ul>\n</div>\n");
        }

        let sectors = rec.sectors();
        if !sectors.is_empty() {
            out.push_str(
                "<div class=\"sectors-box\">\n\
                 <div class=\"metadata-label\">Affected Sectors</div>\n\
                 <div class=\"sectors-list\">\n",
            );
            for sector in sectors {
                let _ = write!(out, "<span class=\"sector-tag\">{}</span>", esc(sector));
            }
            out.push_str("\n</div>\n</div>\n");
        }

        let _ = writeln!(
            out,
            "<a href=\"{}\" class=\"read-more-btn\" target=\"_blank\">Read Full Document</a>",
            esc_attr(&rec.link)
        );
        out.push_str("</div>\n");
    }
    if current_source.is_some() {
        out.push_str("</div>\n");
    }

    out.push_str(
        "</div>\n\
         <div class=\"footer\">\n\
         <div class=\"footer-title\">Sustainability Regulation Tracker</div>\n\
         <div class=\"footer-disclaimer\">\n\
         This report tracks global sustainability regulations including EU CSRD/ESRS,\n\
         IFRS S1/S2, UK SRS, Japan SSBJ, India BRSR, and SBTi standards.\n\
         For questions, updates, or additional information, please contact the administrator.\n\
         </div>\n\
         </div>\n</div>\n</body>\n</html>\n",
    );
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 8, 7, 12, 0, 0).unwrap()
    }

    #[test]
    fn markup_characters_are_escaped() {
        let rec = UpdateRecord::basic(
            "EU",
            "Rules for <b>bold</b> claims & more",
            "http://example.com/a?x=1&y=2",
            "2025-01-01",
            "Summary with <script>alert(1)</script> inside",
        );
        for style in [ReportStyle::Basic, ReportStyle::Professional] {
            let out = HtmlDigest { style }.render(std::slice::from_ref(&rec), now());
            assert!(out.contains("Rules for &lt;b&gt;bold&lt;/b&gt; claims &amp; more"));
            assert!(out.contains("&lt;script&gt;"));
            assert!(!out.contains("<script>alert(1)</script>"));
            assert!(out.contains("http://example.com/a?x=1&amp;y=2"));
        }
    }

    #[test]
    fn empty_input_produces_well_formed_document() {
        for style in [ReportStyle::Basic, ReportStyle::Professional] {
            let out = HtmlDigest { style }.render(&[], now());
            assert!(out.starts_with("<!DOCTYPE html>"));
            assert!(out.contains("No regulatory updates recorded."));
            assert!(out.trim_end().ends_with("</html>"));
        }
    }

    #[test]
    fn professional_surfaces_extended_metadata() {
        let mut rec = UpdateRecord::basic("EU", "Quick fix", "http://a", "2025-07-11", "summary");
        rec.impact_level = crate::sources::types::ImpactLevel::High;
        rec.compliance_deadline = "2026-12-31".into();
        rec.jurisdiction = "European Union (EU27)".into();
        rec.significant_changes = "Alpha; Beta".into();
        rec.affected_sectors = "Banks, Insurers".into();

        let out = HtmlDigest { style: ReportStyle::Professional }
            .render(std::slice::from_ref(&rec), now());
        assert!(out.contains("Urgent: Upcoming Compliance Deadlines"));
        assert!(out.contains("<li>Alpha</li>"));
        assert!(out.contains("<span class=\"sector-tag\">Banks</span>"));
        assert!(out.contains("badge-high"));
    }

    #[test]
    fn basic_omits_extended_metadata() {
        let mut rec = UpdateRecord::basic("EU", "Quick fix", "http://a", "2025-07-11", "summary");
        rec.significant_changes = "Alpha; Beta".into();
        let out = HtmlDigest { style: ReportStyle::Basic }.render(std::slice::from_ref(&rec), now());
        assert!(!out.contains("Alpha"));
        assert!(out.contains("<h2>EU</h2>"));
    }
}
