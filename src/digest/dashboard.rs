// src/digest/dashboard.rs
//
// Self-contained interactive dashboard page: no external stylesheet or
// script, the full record set embedded as JSON for client-side filtering,
// and a compliance tracker whose state lives only in the viewer's
// localStorage (per-device, never sent anywhere).

use std::fmt::Write as _;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::digest::html::{esc, esc_attr};
use crate::digest::{
    dated_deadlines, format_generated, impact_counts, is_urgent, source_counts, DigestRenderer,
};
use crate::sources::types::UpdateRecord;

pub struct DashboardRenderer;

/// Client-side view of a record, with display fallbacks already applied.
#[derive(Serialize)]
struct DashboardRecord<'a> {
    source: &'a str,
    title: &'a str,
    link: &'a str,
    date: &'a str,
    summary: &'a str,
    first_published: &'a str,
    last_updated: &'a str,
    compliance_deadline: &'a str,
    significant_changes: &'a str,
    impact_level: &'static str,
    affected_sectors: &'a str,
    jurisdiction: &'a str,
}

impl<'a> DashboardRecord<'a> {
    fn from_record(rec: &'a UpdateRecord) -> Self {
        Self {
            source: &rec.source,
            title: &rec.title,
            link: &rec.link,
            date: &rec.date,
            summary: &rec.summary,
            first_published: rec.first_published_or_date(),
            last_updated: rec.last_updated_or_date(),
            compliance_deadline: rec.deadline_or_placeholder(),
            significant_changes: &rec.significant_changes,
            impact_level: rec.impact_level.as_str(),
            affected_sectors: &rec.affected_sectors,
            jurisdiction: &rec.jurisdiction,
        }
    }
}

/// Record set as a JSON array safe to embed in a `<script>` block: `<` is
/// emitted as a unicode escape so record text can never close the block.
fn records_json(records: &[UpdateRecord]) -> String {
    let views: Vec<DashboardRecord<'_>> = records.iter().map(DashboardRecord::from_record).collect();
    serde_json::to_string(&views)
        .unwrap_or_else(|_| "[]".to_string())
        .replace('<', "\\u003c")
}

impl DigestRenderer for DashboardRenderer {
    fn render(&self, records: &[UpdateRecord], generated_at: DateTime<Utc>) -> String {
        let (high, medium, low) = impact_counts(records);

        let mut out = String::new();
        out.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
        out.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n");
        out.push_str("<title>Sustainability Regulation Dashboard</title>\n<style>");
        out.push_str(STYLE);
        out.push_str("</style>\n</head>\n<body>\n<div class=\"container\">\n");

        // Header
        let _ = write!(
            out,
            "<div class=\"header\">\n\
             <h1>Sustainability Regulation Dashboard</h1>\n\
             <div class=\"subtitle\">Interactive ESG &amp; Climate Disclosure Tracking</div>\n\
             <div class=\"meta\">\n\
             <span>Generated: {}</span>\n\
             <span>{} Active Regulations</span>\n\
             </div>\n\
             </div>\n",
            format_generated(generated_at),
            records.len()
        );

        // Clickable stat cards
        out.push_str("<div class=\"stats-grid\">\n");
        let _ = write!(
            out,
            "<div class=\"stat-card\" onclick=\"showFilteredRegulations('all')\">\
             <div class=\"stat-number\">{}</div><div class=\"stat-label\">Total Updates</div></div>\n\
             <div class=\"stat-card impact-high\" onclick=\"showFilteredRegulations('high')\">\
             <div class=\"stat-number\">{high}</div><div class=\"stat-label\">High Impact</div></div>\n\
             <div class=\"stat-card impact-medium\" onclick=\"showFilteredRegulations('medium')\">\
             <div class=\"stat-number\">{medium}</div><div class=\"stat-label\">Medium Impact</div></div>\n\
             <div class=\"stat-card impact-low\" onclick=\"showFilteredRegulations('low')\">\
             <div class=\"stat-number\">{low}</div><div class=\"stat-label\">Low Impact</div></div>\n",
            records.len()
        );
        for (source, count) in source_counts(records) {
            let onclick = format!(
                "showFilteredRegulations('source', {})",
                serde_json::to_string(&source).unwrap_or_else(|_| "\"\"".to_string())
            );
            let _ = write!(
                out,
                "<div class=\"stat-card\" onclick=\"{}\">\
                 <div class=\"stat-number\">{count}</div><div class=\"stat-label\">{}</div></div>\n",
                esc_attr(&onclick),
                esc(&source)
            );
        }
        out.push_str("</div>\n");

        out.push_str("<div class=\"content\">\n");

        if records.is_empty() {
            out.push_str("<p class=\"empty-note\">No regulatory updates recorded.</p>\n");
        }

        // Compliance tracker (state is entirely client-side)
        out.push_str(TRACKER_SECTION);

        // Compliance calendar
        let upcoming = dated_deadlines(records);
        if !upcoming.is_empty() {
            out.push_str(
                "<div class=\"section\">\n\
                 <h2 class=\"section-title\">Compliance Calendar</h2>\n\
                 <div class=\"compliance-calendar\">\n",
            );
            for r in upcoming {
                let urgent_class = if is_urgent(&r.compliance_deadline, generated_at) {
                    " urgent"
                } else {
                    ""
                };
                let _ = write!(
                    out,
                    "<div class=\"deadline-card{urgent_class}\">\n\
                     <div class=\"deadline-date\">{}</div>\n\
                     <div class=\"deadline-title\">{}</div>\n\
                     <span class=\"deadline-jurisdiction\">{}</span>\n\
                     </div>\n",
                    esc(&r.compliance_deadline),
                    esc(&r.title),
                    esc(&r.jurisdiction)
                );
            }
            out.push_str("</div>\n</div>\n");
        }

        // Detailed updates, grouped by source
        out.push_str(
            "<div class=\"section\">\n\
             <h2 class=\"section-title\">Detailed Regulation Updates</h2>\n",
        );
        let mut current_source: Option<&str> = None;
        for rec in records {
            if current_source != Some(rec.source.as_str()) {
                current_source = Some(&rec.source);
                let _ = writeln!(
                    out,
                    "<h3 class=\"source-heading\">{} - {}</h3>",
                    esc(&rec.source),
                    esc(&rec.jurisdiction)
                );
            }
            write_update_card(&mut out, rec);
        }
        out.push_str("</div>\n</div>\n");

        // Footer
        out.push_str(
            "<div class=\"footer\">\n\
             <div class=\"footer-title\">Sustainability Regulation Tracker</div>\n\
             <div class=\"footer-subtitle\">Comprehensive ESG &amp; Climate Disclosure Monitoring</div>\n\
             <div class=\"footer-meta\">\n\
             <p>This dashboard tracks global sustainability regulations including EU CSRD/ESRS,\n\
             IFRS S1/S2, UK SRS, Japan SSBJ, India BRSR, and SBTi standards.</p>\n\
             </div>\n\
             </div>\n</div>\n",
        );

        // Modal shell for filtered views
        out.push_str(
            "<div id=\"regulationModal\" class=\"modal\">\n\
             <div class=\"modal-content\">\n\
             <div class=\"modal-header\">\n\
             <h2 class=\"modal-title\" id=\"modalTitle\">Regulations</h2>\n\
             <span class=\"close\" onclick=\"closeModal()\">&times;</span>\n\
             </div>\n\
             <div class=\"modal-body\" id=\"modalBody\"></div>\n\
             </div>\n</div>\n",
        );

        // Embedded data + client logic
        out.push_str("<script>\nconst regulations = ");
        out.push_str(&records_json(records));
        out.push_str(";\n");
        out.push_str(SCRIPT);
        out.push_str("</script>\n</body>\n</html>\n");
        out
    }
}

fn write_update_card(out: &mut String, rec: &UpdateRecord) {
    let _ = write!(
        out,
        "<div class=\"update-card\">\n\
         <div class=\"update-header\">\n\
         <div class=\"update-title\">{}</div>\n\
         <div class=\"update-badges\">\n\
         <span class=\"badge badge-source\">{}</span>\n\
         <span class=\"badge badge-{}\">{} Impact</span>\n\
         </div>\n\
         </div>\n",
        esc(&rec.title),
        esc(&rec.source),
        rec.impact_level.css_suffix(),
        rec.impact_level
    );

    let _ = write!(
        out,
        "<div class=\"update-meta\">\n\
         <div class=\"meta-row\"><span class=\"meta-label\">First Published</span><span class=\"meta-value\">{}</span></div>\n\
         <div class=\"meta-row\"><span class=\"meta-label\">Last Updated</span><span class=\"meta-value\">{}</span></div>\n\
         <div class=\"meta-row\"><span class=\"meta-label\">Compliance Deadline</span><span class=\"meta-value\">{}</span></div>\n\
         <div class=\"meta-row\"><span class=\"meta-label\">Jurisdiction</span><span class=\"meta-value\">{}</span></div>\n\
         </div>\n",
        esc(rec.first_published_or_date()),
        esc(rec.last_updated_or_date()),
        esc(rec.deadline_or_placeholder()),
        esc(&rec.jurisdiction)
    );

    let _ = writeln!(out, "<div class=\"update-summary\">{}</div>", esc(&rec.summary));

    if !rec.significant_changes.is_empty() {
        let _ = write!(
            out,
            "<div class=\"update-changes\">\n\
             <div class=\"changes-title\">Significant Changes</div>\n\
             <div>{}</div>\n\
             </div>\n",
            esc(&rec.significant_changes)
        );
    }

    let sectors = rec.sectors();
    if !sectors.is_empty() {
        out.push_str(
            "<div class=\"update-sectors\">\n\
             <div class=\"meta-label\">Affected Sectors</div>\n\
             <div class=\"sectors-list\">\n",
        );
        for sector in sectors {
            let _ = write!(out, "<span class=\"sector-tag\">{}</span>", esc(sector));
        }
        out.push_str("\n</div>\n</div>\n");
    }

    let _ = write!(
        out,
        "<a href=\"{}\" class=\"update-link\" target=\"_blank\">Read Full Document</a>\n</div>\n",
        esc_attr(&rec.link)
    );
}

const STYLE: &str = r##"
* { margin: 0; padding: 0; box-sizing: border-box; }
body {
    font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, 'Helvetica Neue', Arial, sans-serif;
    line-height: 1.6;
    color: #1a1a1a;
    background: linear-gradient(135deg, #667eea 0%, #764ba2 100%);
    min-height: 100vh;
    padding: 20px;
}
.container {
    max-width: 1400px;
    margin: 0 auto;
    background: white;
    border-radius: 16px;
    box-shadow: 0 20px 60px rgba(0,0,0,0.3);
    overflow: hidden;
}
.header {
    background: linear-gradient(135deg, #2a5d84 0%, #1e4a6b 100%);
    color: white;
    padding: 40px;
    text-align: center;
}
.header h1 { font-size: 2.5rem; margin-bottom: 10px; font-weight: 700; }
.header .subtitle { font-size: 1.1rem; opacity: 0.9; margin-bottom: 20px; }
.header .meta {
    font-size: 0.95rem;
    opacity: 0.85;
    display: flex;
    justify-content: center;
    align-items: center;
    gap: 30px;
    flex-wrap: wrap;
}
.stats-grid {
    display: grid;
    grid-template-columns: repeat(auto-fit, minmax(200px, 1fr));
    gap: 20px;
    padding: 40px;
    background: #f8f9fa;
}
.stat-card {
    background: white;
    padding: 25px;
    border-radius: 12px;
    box-shadow: 0 4px 12px rgba(0,0,0,0.08);
    text-align: center;
    transition: all 0.3s;
    cursor: pointer;
    position: relative;
}
.stat-card:hover {
    transform: translateY(-4px);
    box-shadow: 0 8px 20px rgba(0,0,0,0.15);
}
.stat-card:active { transform: translateY(-2px); }
.stat-card::after {
    content: "Click to view";
    position: absolute;
    bottom: 8px;
    right: 12px;
    font-size: 0.75rem;
    color: #999;
    opacity: 0;
    transition: opacity 0.2s;
}
.stat-card:hover::after { opacity: 1; }
.stat-number {
    font-size: 2.5rem;
    font-weight: 700;
    color: #2a5d84;
    margin-bottom: 8px;
}
.stat-label {
    font-size: 0.95rem;
    color: #666;
    text-transform: uppercase;
    letter-spacing: 0.5px;
}
.impact-high .stat-number { color: #dc3545; }
.impact-medium .stat-number { color: #fd7e14; }
.impact-low .stat-number { color: #28a745; }
.content { padding: 40px; }
.empty-note { color: #666; font-style: italic; margin-bottom: 30px; }
.section { margin-bottom: 50px; }
.section-title {
    font-size: 1.8rem;
    color: #2a5d84;
    margin-bottom: 25px;
    padding-bottom: 12px;
    border-bottom: 3px solid #2a5d84;
}
.source-heading { color: #2a5d84; margin: 30px 0 20px 0; font-size: 1.5rem; }
.modal {
    display: none;
    position: fixed;
    z-index: 1000;
    left: 0;
    top: 0;
    width: 100%;
    height: 100%;
    overflow: auto;
    background-color: rgba(0,0,0,0.6);
    animation: fadeIn 0.3s;
}
@keyframes fadeIn { from { opacity: 0; } to { opacity: 1; } }
.modal-content {
    background-color: #fefefe;
    margin: 3% auto;
    padding: 0;
    border-radius: 12px;
    width: 90%;
    max-width: 1000px;
    max-height: 85vh;
    overflow: hidden;
    box-shadow: 0 10px 40px rgba(0,0,0,0.3);
    animation: slideDown 0.3s;
}
@keyframes slideDown {
    from { transform: translateY(-50px); opacity: 0; }
    to { transform: translateY(0); opacity: 1; }
}
.modal-header {
    background: linear-gradient(135deg, #2a5d84 0%, #1e4a6b 100%);
    color: white;
    padding: 25px 30px;
    display: flex;
    justify-content: space-between;
    align-items: center;
}
.modal-title { font-size: 1.8rem; font-weight: 600; }
.close {
    color: white;
    font-size: 2rem;
    font-weight: 300;
    cursor: pointer;
    transition: transform 0.2s;
    line-height: 1;
}
.close:hover { transform: scale(1.2); }
.modal-body {
    padding: 30px;
    max-height: calc(85vh - 100px);
    overflow-y: auto;
}
.modal-summary {
    background: #e8f4f8;
    padding: 20px;
    border-radius: 8px;
    margin-bottom: 25px;
    border-left: 4px solid #2a5d84;
}
.modal-summary h3 { color: #2a5d84; margin-bottom: 10px; }
.regulation-mini-card {
    background: white;
    border: 1px solid #e0e0e0;
    border-radius: 8px;
    padding: 20px;
    margin-bottom: 15px;
}
.regulation-mini-title {
    font-size: 1.1rem;
    font-weight: 600;
    color: #1a1a1a;
    margin-bottom: 8px;
}
.regulation-mini-meta {
    display: flex;
    gap: 10px;
    flex-wrap: wrap;
    margin-bottom: 10px;
}
.mini-badge {
    padding: 4px 10px;
    border-radius: 12px;
    font-size: 0.8rem;
    font-weight: 600;
}
.badge-high { background: #ffe0e0; color: #dc3545; }
.badge-medium { background: #fff3cd; color: #fd7e14; }
.badge-low { background: #d4edda; color: #28a745; }
.badge-source { background: #e8f4f8; color: #2a5d84; }
.badge-plain { background: #f0f0f0; color: #666; }
.regulation-mini-summary {
    font-size: 0.9rem;
    color: #666;
    margin-bottom: 10px;
    line-height: 1.5;
}
.mini-link {
    color: #2a5d84;
    text-decoration: none;
    font-weight: 500;
    font-size: 0.9rem;
}
.mini-link:hover { text-decoration: underline; }
.mini-changes {
    margin-top: 10px;
    padding: 10px;
    background: #fffbf0;
    border-radius: 4px;
    font-size: 0.85rem;
}
.mini-deadline { margin-top: 10px; font-size: 0.85rem; color: #666; }
.compliance-tracker {
    background: white;
    border: 2px solid #2a5d84;
    border-radius: 12px;
    padding: 30px;
    margin-bottom: 40px;
}
.tracker-header {
    display: flex;
    justify-content: space-between;
    align-items: center;
    margin-bottom: 25px;
    flex-wrap: wrap;
    gap: 15px;
}
.tracker-title { font-size: 1.6rem; color: #2a5d84; font-weight: 600; }
.tracker-controls { display: flex; gap: 10px; }
.btn {
    padding: 10px 20px;
    border: none;
    border-radius: 6px;
    font-weight: 500;
    cursor: pointer;
    transition: all 0.2s;
    font-size: 0.9rem;
}
.btn-primary { background: #2a5d84; color: white; }
.btn-primary:hover { background: #1e4a6b; }
.btn-secondary { background: #6c757d; color: white; }
.btn-secondary:hover { background: #5a6268; }
.compliance-grid { display: grid; gap: 15px; }
.compliance-item {
    background: #f8f9fa;
    border: 1px solid #e0e0e0;
    border-left: 4px solid #6c757d;
    padding: 20px;
    border-radius: 8px;
    display: grid;
    grid-template-columns: 40px 1fr auto;
    gap: 15px;
    align-items: start;
}
.compliance-item.status-not-started { border-left-color: #dc3545; }
.compliance-item.status-in-progress { border-left-color: #fd7e14; }
.compliance-item.status-completed { border-left-color: #28a745; }
.compliance-checkbox { width: 24px; height: 24px; cursor: pointer; margin-top: 5px; }
.compliance-regulation { font-weight: 600; color: #1a1a1a; margin-bottom: 5px; }
.compliance-deadline {
    font-size: 0.85rem;
    color: #dc3545;
    margin-bottom: 8px;
    font-weight: 500;
}
.compliance-notes {
    width: 100%;
    padding: 8px;
    border: 1px solid #ddd;
    border-radius: 4px;
    font-size: 0.9rem;
    margin-top: 8px;
    resize: vertical;
    min-height: 60px;
}
.compliance-status { display: flex; flex-direction: column; gap: 5px; }
.status-select {
    padding: 8px;
    border: 1px solid #ddd;
    border-radius: 4px;
    font-size: 0.9rem;
    cursor: pointer;
}
.team-input {
    padding: 8px;
    border: 1px solid #ddd;
    border-radius: 4px;
    font-size: 0.9rem;
    width: 180px;
}
.progress-summary {
    display: grid;
    grid-template-columns: repeat(auto-fit, minmax(150px, 1fr));
    gap: 15px;
    margin-bottom: 25px;
    padding: 20px;
    background: #e8f4f8;
    border-radius: 8px;
}
.progress-stat { text-align: center; }
.progress-number { font-size: 2rem; font-weight: 700; margin-bottom: 5px; }
.progress-label { font-size: 0.85rem; color: #666; text-transform: uppercase; }
.stat-not-started { color: #dc3545; }
.stat-in-progress { color: #fd7e14; }
.stat-completed { color: #28a745; }
.stat-total { color: #2a5d84; }
.compliance-calendar { display: grid; gap: 15px; }
.deadline-card {
    background: #fff;
    border: 2px solid #e0e0e0;
    border-left: 5px solid #2a5d84;
    padding: 20px;
    border-radius: 8px;
}
.deadline-card.urgent { border-left-color: #dc3545; background: #fff5f5; }
.deadline-date {
    font-size: 1.1rem;
    font-weight: 600;
    color: #2a5d84;
    margin-bottom: 8px;
}
.deadline-title {
    font-size: 1.05rem;
    font-weight: 600;
    margin-bottom: 8px;
    color: #1a1a1a;
}
.deadline-jurisdiction {
    display: inline-block;
    padding: 4px 12px;
    background: #e8f4f8;
    border-radius: 20px;
    font-size: 0.85rem;
    color: #2a5d84;
}
.update-card {
    background: #fff;
    border: 1px solid #e0e0e0;
    border-radius: 12px;
    padding: 30px;
    margin-bottom: 25px;
}
.update-header {
    display: flex;
    justify-content: space-between;
    align-items: start;
    margin-bottom: 15px;
    flex-wrap: wrap;
    gap: 15px;
}
.update-title {
    font-size: 1.3rem;
    font-weight: 600;
    color: #1a1a1a;
    flex: 1;
    min-width: 250px;
}
.update-badges { display: flex; gap: 10px; flex-wrap: wrap; }
.badge {
    padding: 6px 14px;
    border-radius: 20px;
    font-size: 0.85rem;
    font-weight: 600;
    white-space: nowrap;
}
.update-meta {
    display: grid;
    grid-template-columns: repeat(auto-fit, minmax(200px, 1fr));
    gap: 15px;
    margin: 20px 0;
    padding: 15px;
    background: #f8f9fa;
    border-radius: 8px;
    font-size: 0.9rem;
}
.meta-row { display: flex; flex-direction: column; }
.meta-label {
    font-weight: 600;
    color: #666;
    font-size: 0.85rem;
    margin-bottom: 4px;
    text-transform: uppercase;
    letter-spacing: 0.5px;
}
.meta-value { color: #1a1a1a; }
.update-summary { color: #444; line-height: 1.7; margin: 15px 0; }
.update-changes {
    background: #fffbf0;
    border-left: 4px solid #fd7e14;
    padding: 15px;
    margin: 15px 0;
    border-radius: 4px;
}
.changes-title {
    font-weight: 600;
    color: #fd7e14;
    margin-bottom: 8px;
    font-size: 0.95rem;
}
.update-sectors { margin: 15px 0; }
.sectors-list { display: flex; flex-wrap: wrap; gap: 8px; margin-top: 8px; }
.sector-tag {
    background: #e8f4f8;
    color: #2a5d84;
    padding: 5px 12px;
    border-radius: 16px;
    font-size: 0.85rem;
}
.update-link {
    display: inline-block;
    margin-top: 15px;
    padding: 10px 20px;
    background: #2a5d84;
    color: white;
    text-decoration: none;
    border-radius: 6px;
    font-weight: 500;
}
.update-link:hover { background: #1e4a6b; }
.footer {
    background: #2a5d84;
    color: white;
    padding: 30px;
    text-align: center;
}
.footer-title { font-size: 1.2rem; font-weight: 600; margin-bottom: 8px; }
.footer-subtitle { opacity: 0.9; margin-bottom: 15px; }
.footer-meta { opacity: 0.8; font-size: 0.9rem; }
@media (max-width: 768px) {
    .header h1 { font-size: 1.8rem; }
    .stats-grid { grid-template-columns: 1fr; padding: 20px; }
    .content { padding: 20px; }
    .update-header { flex-direction: column; }
    .update-meta { grid-template-columns: 1fr; }
    .compliance-item { grid-template-columns: 1fr; }
    .tracker-header { flex-direction: column; align-items: start; }
}
"##;

const TRACKER_SECTION: &str = r##"
<div class="section">
<h2 class="section-title">Compliance Tracker</h2>
<div class="compliance-tracker">
<div class="tracker-header">
<div class="tracker-title">Track Your Organization's Compliance</div>
<div class="tracker-controls">
<button class="btn btn-secondary" onclick="resetCompliance()">Reset All</button>
<button class="btn btn-primary" onclick="exportCompliance()">Export Report</button>
</div>
</div>
<div class="progress-summary" id="progressSummary">
<div class="progress-stat">
<div class="progress-number stat-not-started" id="countNotStarted">0</div>
<div class="progress-label">Not Started</div>
</div>
<div class="progress-stat">
<div class="progress-number stat-in-progress" id="countInProgress">0</div>
<div class="progress-label">In Progress</div>
</div>
<div class="progress-stat">
<div class="progress-number stat-completed" id="countCompleted">0</div>
<div class="progress-label">Completed</div>
</div>
<div class="progress-stat">
<div class="progress-number stat-total" id="countTotal">0</div>
<div class="progress-label">Total Items</div>
</div>
</div>
<div class="compliance-grid" id="complianceGrid"></div>
</div>
</div>
"##;

const SCRIPT: &str = r##"
const STORAGE_KEY = 'complianceData';

function loadComplianceData() {
    const saved = localStorage.getItem(STORAGE_KEY);
    if (saved) {
        return JSON.parse(saved);
    }
    return regulations.map((reg, idx) => ({
        id: idx,
        regulation: reg.title,
        source: reg.source,
        deadline: reg.compliance_deadline,
        status: 'not-started',
        team: '',
        notes: ''
    }));
}

function saveComplianceData(data) {
    localStorage.setItem(STORAGE_KEY, JSON.stringify(data));
    updateProgressSummary(data);
}

function initComplianceTracker() {
    const data = loadComplianceData();
    renderComplianceGrid(data);
    updateProgressSummary(data);
}

function escapeHtml(s) {
    return String(s).replace(/&/g, '&amp;').replace(/</g, '&lt;').replace(/>/g, '&gt;')
        .replace(/"/g, '&quot;');
}

function renderComplianceGrid(data) {
    const grid = document.getElementById('complianceGrid');
    grid.innerHTML = '';
    data.forEach((item, idx) => {
        const div = document.createElement('div');
        div.className = `compliance-item status-${item.status}`;
        div.innerHTML = `
            <input type="checkbox" class="compliance-checkbox"
                   ${item.status === 'completed' ? 'checked' : ''}
                   onchange="toggleComplete(${idx})">
            <div class="compliance-details">
                <div class="compliance-regulation">${escapeHtml(item.regulation)}</div>
                <div class="compliance-deadline">Deadline: ${escapeHtml(item.deadline)}</div>
                <textarea class="compliance-notes"
                          placeholder="Add notes, action items, or progress updates..."
                          onchange="updateNotes(${idx}, this.value)">${escapeHtml(item.notes)}</textarea>
            </div>
            <div class="compliance-status">
                <select class="status-select" onchange="updateStatus(${idx}, this.value)">
                    <option value="not-started" ${item.status === 'not-started' ? 'selected' : ''}>Not Started</option>
                    <option value="in-progress" ${item.status === 'in-progress' ? 'selected' : ''}>In Progress</option>
                    <option value="completed" ${item.status === 'completed' ? 'selected' : ''}>Completed</option>
                </select>
                <input type="text" class="team-input"
                       placeholder="Team/Owner"
                       value="${escapeHtml(item.team)}"
                       onchange="updateTeam(${idx}, this.value)">
            </div>
        `;
        grid.appendChild(div);
    });
}

function updateProgressSummary(data) {
    const notStarted = data.filter(d => d.status === 'not-started').length;
    const inProgress = data.filter(d => d.status === 'in-progress').length;
    const completed = data.filter(d => d.status === 'completed').length;
    document.getElementById('countNotStarted').textContent = notStarted;
    document.getElementById('countInProgress').textContent = inProgress;
    document.getElementById('countCompleted').textContent = completed;
    document.getElementById('countTotal').textContent = data.length;
}

function toggleComplete(idx) {
    const data = loadComplianceData();
    data[idx].status = data[idx].status === 'completed' ? 'in-progress' : 'completed';
    saveComplianceData(data);
    renderComplianceGrid(data);
}

function updateStatus(idx, status) {
    const data = loadComplianceData();
    data[idx].status = status;
    saveComplianceData(data);
    renderComplianceGrid(data);
}

function updateTeam(idx, team) {
    const data = loadComplianceData();
    data[idx].team = team;
    saveComplianceData(data);
}

function updateNotes(idx, notes) {
    const data = loadComplianceData();
    data[idx].notes = notes;
    saveComplianceData(data);
}

function resetCompliance() {
    if (confirm('Are you sure you want to reset all compliance tracking data?')) {
        localStorage.removeItem(STORAGE_KEY);
        initComplianceTracker();
    }
}

function exportCompliance() {
    const data = loadComplianceData();
    let report = 'Sustainability Compliance Report\n';
    report += `Generated: ${new Date().toLocaleString()}\n\n`;
    report += '='.repeat(80) + '\n\n';

    const notStarted = data.filter(d => d.status === 'not-started').length;
    const inProgress = data.filter(d => d.status === 'in-progress').length;
    const completed = data.filter(d => d.status === 'completed').length;

    report += 'Summary:\n';
    report += `  Total Items: ${data.length}\n`;
    report += `  Completed: ${completed}\n`;
    report += `  In Progress: ${inProgress}\n`;
    report += `  Not Started: ${notStarted}\n\n`;
    report += '='.repeat(80) + '\n\n';

    data.forEach(item => {
        report += `Regulation: ${item.regulation}\n`;
        report += `Source: ${item.source}\n`;
        report += `Deadline: ${item.deadline}\n`;
        report += `Status: ${item.status.toUpperCase()}\n`;
        report += `Team/Owner: ${item.team || 'Not assigned'}\n`;
        report += `Notes: ${item.notes || 'No notes'}\n`;
        report += '-'.repeat(80) + '\n\n';
    });

    const blob = new Blob([report], { type: 'text/plain' });
    const url = URL.createObjectURL(blob);
    const a = document.createElement('a');
    a.href = url;
    a.download = `compliance-report-${new Date().toISOString().split('T')[0]}.txt`;
    a.click();
}

function showFilteredRegulations(filter, value) {
    let filtered = [];
    let title = '';
    let summary = '';

    if (filter === 'all') {
        filtered = regulations;
        title = 'All Regulations';
        summary = `Displaying all ${regulations.length} sustainability regulations tracked in the system.`;
    } else if (filter === 'high' || filter === 'medium' || filter === 'low') {
        filtered = regulations.filter(r => r.impact_level.toLowerCase() === filter);
        title = `${filter.charAt(0).toUpperCase() + filter.slice(1)} Impact Regulations`;
        const impactDesc = {
            'high': 'These regulations have significant organizational impact requiring immediate attention, substantial resources, and comprehensive implementation strategies.',
            'medium': 'These regulations require moderate organizational changes with planned implementation over multiple phases.',
            'low': 'These regulations have minimal direct impact but should be monitored for future developments.'
        };
        summary = `${filtered.length} regulation(s) classified as ${filter} impact. ${impactDesc[filter]}`;
    } else if (filter === 'source') {
        filtered = regulations.filter(r => r.source === value);
        title = `${value} Regulations`;
        summary = `${filtered.length} regulation(s) from ${value}. These represent the current requirements and standards issued by this regulatory body.`;
    }

    displayModal(title, summary, filtered);
}

function displayModal(title, summary, regs) {
    document.getElementById('modalTitle').textContent = title;

    let html = `<div class="modal-summary">
        <h3>Summary</h3>
        <p>${escapeHtml(summary)}</p>
    </div>`;

    regs.forEach(reg => {
        const impactClass = `badge-${reg.impact_level.toLowerCase()}`;
        html += `
            <div class="regulation-mini-card">
                <div class="regulation-mini-title">${escapeHtml(reg.title)}</div>
                <div class="regulation-mini-meta">
                    <span class="mini-badge badge-source">${escapeHtml(reg.source)}</span>
                    <span class="mini-badge ${impactClass}">${reg.impact_level} Impact</span>
                    <span class="mini-badge badge-plain">${escapeHtml(reg.jurisdiction)}</span>
                </div>
                <div class="regulation-mini-summary">${escapeHtml(reg.summary.substring(0, 200))}...</div>
                <div class="mini-deadline"><strong>Deadline:</strong> ${escapeHtml(reg.compliance_deadline)}</div>
                ${reg.significant_changes ? `
                <div class="mini-changes">
                    <strong>Key Changes:</strong> ${escapeHtml(reg.significant_changes)}
                </div>` : ''}
                <a href="${escapeHtml(reg.link)}" class="mini-link" target="_blank">Read Full Document</a>
            </div>
        `;
    });

    document.getElementById('modalBody').innerHTML = html;
    document.getElementById('regulationModal').style.display = 'block';
}

function closeModal() {
    document.getElementById('regulationModal').style.display = 'none';
}

window.onclick = function(event) {
    const modal = document.getElementById('regulationModal');
    if (event.target === modal) {
        closeModal();
    }
};

document.addEventListener('DOMContentLoaded', initComplianceTracker);
"##;
