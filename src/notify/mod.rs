// src/notify/mod.rs
pub mod email;

pub use email::EmailNotifier;

use chrono::{DateTime, Utc};

use crate::sources::types::UpdateRecord;

/// A composed digest ready for transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailDigest {
    pub subject: String,
    pub body: String,
}

/// Build the subject and plain-text body for a batch of newly-inserted
/// records. An empty batch is not an error; the body says so explicitly.
pub fn compose_digest(new_records: &[UpdateRecord], generated_at: DateTime<Utc>) -> EmailDigest {
    let today = generated_at.format("%d %b %Y");
    let subject = format!("Sustainability regulatory updates - {today}");

    let mut lines: Vec<String> = vec![
        format!("Here are the latest sustainability regulation updates as of {today}:"),
        String::new(),
    ];

    for rec in new_records {
        lines.push(format!("* {} ({}, {})", rec.title, rec.source, rec.date));
        lines.push(format!("  Impact: {}", rec.impact_level));
        if !rec.compliance_deadline.is_empty() {
            lines.push(format!("  Deadline: {}", rec.compliance_deadline));
        }
        lines.push(format!("  {}", rec.summary));
        lines.push(format!("  Link: {}", rec.link));
        lines.push(String::new());
    }

    if new_records.is_empty() {
        lines.push("No new updates were detected today.".into());
    }

    EmailDigest {
        subject,
        body: lines.join("\n"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 8, 7, 6, 30, 0).unwrap()
    }

    #[test]
    fn empty_batch_says_so() {
        let digest = compose_digest(&[], now());
        assert_eq!(digest.subject, "Sustainability regulatory updates - 07 Aug 2025");
        assert!(digest.body.contains("No new updates were detected today."));
    }

    #[test]
    fn body_lists_each_new_record() {
        let mut a = UpdateRecord::basic("EU", "Quick fix", "http://a", "2025-07-11", "summary a");
        a.compliance_deadline = "2026-12-31".into();
        let b = UpdateRecord::basic("UK", "Consultation", "http://b", "2025-06-25", "summary b");

        let digest = compose_digest(&[a, b], now());
        assert!(digest.body.contains("* Quick fix (EU, 2025-07-11)"));
        assert!(digest.body.contains("  Deadline: 2026-12-31"));
        assert!(digest.body.contains("* Consultation (UK, 2025-06-25)"));
        assert!(digest.body.contains("  Link: http://b"));
        assert!(!digest.body.contains("No new updates"));
    }
}
