// src/store.rs
//
// Append-only SQLite persistence with exactly-once semantics per natural key
// (source, title, link). Records are insert-or-reject; there is no update or
// delete path.

use std::path::Path;

use anyhow::{Context, Result};
use rusqlite::{params, Connection};

use crate::sources::types::{ImpactLevel, UpdateRecord};

const SCHEMA: &str = "
    CREATE TABLE IF NOT EXISTS updates (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        source TEXT NOT NULL,
        title TEXT NOT NULL,
        link TEXT NOT NULL,
        date TEXT NOT NULL,
        summary TEXT NOT NULL,
        first_published TEXT,
        last_updated TEXT,
        compliance_deadline TEXT,
        significant_changes TEXT,
        impact_level TEXT,
        affected_sectors TEXT,
        jurisdiction TEXT,
        UNIQUE(source, title, link)
    )
";

const ALL_COLUMNS: &str = "source, title, link, date, summary, first_published, last_updated, \
                           compliance_deadline, significant_changes, impact_level, \
                           affected_sectors, jurisdiction";

/// Sort key for `query_all`. `date` and `compliance_deadline` are opaque
/// ISO-8601-ish text, so lexical order is chronological order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    /// Newest first; the default consumer view.
    #[default]
    DateDesc,
    /// Grouped by source, newest first within a source (basic digests).
    SourceDateDesc,
    /// Nearest deadline first, then source, then date (professional digests
    /// and the dashboard).
    DeadlineSourceDate,
}

impl SortOrder {
    fn sql(&self) -> &'static str {
        match self {
            SortOrder::DateDesc => "date DESC",
            SortOrder::SourceDateDesc => "source, date DESC",
            SortOrder::DeadlineSourceDate => "compliance_deadline, source, date DESC",
        }
    }
}

pub struct UpdateStore {
    conn: Connection,
}

impl UpdateStore {
    /// Open or create the store at `path` and ensure the schema exists.
    /// Safe to call repeatedly; failure here is fatal to the run.
    pub fn open(path: &Path) -> Result<Self> {
        let conn = Connection::open(path)
            .with_context(|| format!("opening update store at {}", path.display()))?;
        Self::from_connection(conn)
    }

    /// In-memory store for tests.
    pub fn open_in_memory() -> Result<Self> {
        Self::from_connection(Connection::open_in_memory().context("opening in-memory store")?)
    }

    fn from_connection(conn: Connection) -> Result<Self> {
        conn.execute(SCHEMA, []).context("creating updates schema")?;
        Ok(Self { conn })
    }

    /// Insert records in input order; duplicates of an already-stored natural
    /// key are silently skipped, malformed records are logged and skipped.
    /// Returns the newly-inserted subsequence in its original relative order.
    pub fn insert_all(&mut self, records: &[UpdateRecord]) -> Result<Vec<UpdateRecord>> {
        let tx = self.conn.transaction().context("starting insert batch")?;
        let mut new_records = Vec::new();

        for rec in records {
            if let Some(field) = rec.missing_required_field() {
                tracing::warn!(
                    source = %rec.source,
                    title = %rec.title,
                    missing = field,
                    "skipping malformed record"
                );
                continue;
            }

            let changed = tx
                .execute(
                    "INSERT OR IGNORE INTO updates (source, title, link, date, summary, \
                     first_published, last_updated, compliance_deadline, significant_changes, \
                     impact_level, affected_sectors, jurisdiction) \
                     VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12)",
                    params![
                        rec.source,
                        rec.title,
                        rec.link,
                        rec.date,
                        rec.summary,
                        rec.first_published,
                        rec.last_updated,
                        rec.compliance_deadline,
                        rec.significant_changes,
                        rec.impact_level.as_str(),
                        rec.affected_sectors,
                        rec.jurisdiction,
                    ],
                )
                .context("inserting record")?;

            if changed == 1 {
                new_records.push(rec.clone());
            } else {
                tracing::debug!(
                    source = %rec.source,
                    title = %rec.title,
                    "duplicate record suppressed"
                );
            }
        }

        tx.commit().context("committing insert batch")?;
        Ok(new_records)
    }

    /// Every stored record, ordered by the given sort key.
    pub fn query_all(&self, order: SortOrder) -> Result<Vec<UpdateRecord>> {
        let sql = format!("SELECT {ALL_COLUMNS} FROM updates ORDER BY {}", order.sql());
        let mut stmt = self.conn.prepare(&sql).context("preparing query")?;

        let rows = stmt
            .query_map([], |row| {
                let opt = |i: usize| -> rusqlite::Result<String> {
                    Ok(row.get::<_, Option<String>>(i)?.unwrap_or_default())
                };
                Ok(UpdateRecord {
                    source: row.get(0)?,
                    title: row.get(1)?,
                    link: row.get(2)?,
                    date: row.get(3)?,
                    summary: row.get(4)?,
                    first_published: opt(5)?,
                    last_updated: opt(6)?,
                    compliance_deadline: opt(7)?,
                    significant_changes: opt(8)?,
                    impact_level: ImpactLevel::parse(&opt(9)?),
                    affected_sectors: opt(10)?,
                    jurisdiction: opt(11)?,
                })
            })
            .context("querying records")?;

        let mut out = Vec::new();
        for row in rows {
            out.push(row.context("reading record row")?);
        }
        Ok(out)
    }

    pub fn count(&self) -> Result<u64> {
        let n: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM updates", [], |row| row.get(0))
            .context("counting records")?;
        Ok(n as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(source: &str, title: &str, link: &str) -> UpdateRecord {
        UpdateRecord::basic(source, title, link, "2025-01-01", "summary text")
    }

    #[test]
    fn insert_reports_only_new_records() {
        let mut store = UpdateStore::open_in_memory().unwrap();
        let a = rec("EU", "X", "http://a");
        let b = rec("EU", "Y", "http://b");

        let new = store.insert_all(&[a.clone(), b.clone()]).unwrap();
        assert_eq!(new.len(), 2);

        // Second run with the same batch: nothing new.
        let new = store.insert_all(&[a, b]).unwrap();
        assert!(new.is_empty());
        assert_eq!(store.count().unwrap(), 2);
    }

    #[test]
    fn duplicate_within_one_batch_is_suppressed() {
        let mut store = UpdateStore::open_in_memory().unwrap();
        let a = rec("EU", "X", "http://a");

        let new = store.insert_all(&[a.clone(), a]).unwrap();
        assert_eq!(new.len(), 1);
        assert_eq!(store.count().unwrap(), 1);
    }

    #[test]
    fn natural_key_ignores_non_key_fields() {
        let mut store = UpdateStore::open_in_memory().unwrap();
        let a = rec("EU", "X", "http://a");
        let mut a2 = a.clone();
        a2.date = "2025-06-01".into();
        a2.summary = "revised summary".into();

        store.insert_all(&[a]).unwrap();
        let new = store.insert_all(&[a2]).unwrap();
        assert!(new.is_empty(), "same (source, title, link) must be rejected");
    }

    #[test]
    fn fresh_entries_keep_relative_order() {
        let mut store = UpdateStore::open_in_memory().unwrap();
        let dup = rec("EU", "old", "http://old");
        store.insert_all(std::slice::from_ref(&dup)).unwrap();

        let batch = vec![
            rec("EU", "n1", "http://1"),
            dup,
            rec("UK", "n2", "http://2"),
            rec("SBTi", "n3", "http://3"),
        ];
        let new = store.insert_all(&batch).unwrap();
        let titles: Vec<_> = new.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["n1", "n2", "n3"]);
    }

    #[test]
    fn malformed_record_does_not_abort_batch() {
        let mut store = UpdateStore::open_in_memory().unwrap();
        let mut bad = rec("EU", "X", "http://a");
        bad.link = String::new();

        let new = store
            .insert_all(&[rec("UK", "ok1", "http://1"), bad, rec("SBTi", "ok2", "http://2")])
            .unwrap();
        assert_eq!(new.len(), 2);
        assert_eq!(store.count().unwrap(), 2);
    }

    #[test]
    fn query_orders_by_date_desc_by_default() {
        let mut store = UpdateStore::open_in_memory().unwrap();
        let mut a = rec("EU", "older", "http://a");
        a.date = "2024-01-01".into();
        let mut b = rec("UK", "newer", "http://b");
        b.date = "2025-06-30".into();

        store.insert_all(&[a, b]).unwrap();
        let all = store.query_all(SortOrder::DateDesc).unwrap();
        assert_eq!(all[0].title, "newer");
        assert_eq!(all[1].title, "older");
    }

    #[test]
    fn extended_fields_round_trip() {
        let mut store = UpdateStore::open_in_memory().unwrap();
        let mut a = rec("EU", "X", "http://a");
        a.impact_level = ImpactLevel::High;
        a.compliance_deadline = "2026-12-31".into();
        a.affected_sectors = "Banks, Insurers".into();

        store.insert_all(std::slice::from_ref(&a)).unwrap();
        let all = store.query_all(SortOrder::default()).unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0], a);
    }

    #[test]
    fn reopening_on_disk_store_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("updates.db");

        {
            let mut store = UpdateStore::open(&path).unwrap();
            store.insert_all(&[rec("EU", "X", "http://a")]).unwrap();
        }

        // Second open must not recreate or disturb the dataset.
        let mut store = UpdateStore::open(&path).unwrap();
        assert_eq!(store.count().unwrap(), 1);
        let new = store.insert_all(&[rec("EU", "X", "http://a")]).unwrap();
        assert!(new.is_empty());
    }
}
