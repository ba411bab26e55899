// tests/gather_store_dedup.rs
//
// End-to-end ingest properties: aggregation across producers, duplicate
// suppression in the store, and idempotency across repeated runs.

use anyhow::Result;
use async_trait::async_trait;
use esg_regulation_tracker::{SortOrder, SourceProvider, SourceRegistry, UpdateRecord, UpdateStore};

struct OneRecordProvider {
    name: &'static str,
}

#[async_trait]
impl SourceProvider for OneRecordProvider {
    async fn fetch_latest(&self) -> Result<Vec<UpdateRecord>> {
        Ok(vec![UpdateRecord::basic(
            "EU",
            "X",
            "http://a",
            "2025-01-01",
            "s",
        )])
    }

    fn name(&self) -> &'static str {
        self.name
    }
}

#[tokio::test]
async fn overlapping_producers_yield_one_stored_record() {
    // Producer B returns the same record as producer A, simulating a re-run
    // of an unchanged upstream source.
    let mut registry = SourceRegistry::new();
    registry.register(Box::new(OneRecordProvider { name: "A" }));
    registry.register(Box::new(OneRecordProvider { name: "B" }));

    let gathered = registry.gather_all().await;
    assert_eq!(gathered.len(), 2);

    let mut store = UpdateStore::open_in_memory().unwrap();
    let new_records = store.insert_all(&gathered).unwrap();
    assert_eq!(new_records.len(), 1);
    assert_eq!(new_records[0].title, "X");

    let stored = store.query_all(SortOrder::default()).unwrap();
    assert_eq!(stored.len(), 1);
}

#[tokio::test]
async fn second_run_inserts_nothing_new() {
    let registry = SourceRegistry::with_default_sources();
    let mut store = UpdateStore::open_in_memory().unwrap();

    let first = store.insert_all(&registry.gather_all().await).unwrap();
    assert!(!first.is_empty());
    let total_after_first = store.count().unwrap();

    let second = store.insert_all(&registry.gather_all().await).unwrap();
    assert!(second.is_empty());
    assert_eq!(store.count().unwrap(), total_after_first);
}

#[tokio::test]
async fn stored_set_has_unique_natural_keys() {
    let registry = SourceRegistry::with_default_sources();
    let mut store = UpdateStore::open_in_memory().unwrap();
    store.insert_all(&registry.gather_all().await).unwrap();
    store.insert_all(&registry.gather_all().await).unwrap();

    let all = store.query_all(SortOrder::DateDesc).unwrap();
    let mut keys: Vec<(String, String, String)> = all
        .iter()
        .map(|r| (r.source.clone(), r.title.clone(), r.link.clone()))
        .collect();
    let before = keys.len();
    keys.sort();
    keys.dedup();
    assert_eq!(keys.len(), before, "natural keys must be unique");
}
