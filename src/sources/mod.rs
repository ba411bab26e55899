// src/sources/mod.rs
pub mod providers;
pub mod types;

use crate::sources::types::{SourceProvider, UpdateRecord};

/// Ordered registry of source producers.
///
/// Output order of `gather_all` is registration order, and within a source,
/// the producer's own output order. A failing producer contributes nothing
/// and never aborts the run.
pub struct SourceRegistry {
    providers: Vec<Box<dyn SourceProvider>>,
}

impl SourceRegistry {
    pub fn new() -> Self {
        Self {
            providers: Vec::new(),
        }
    }

    /// Registry with every built-in producer, in canonical order.
    pub fn with_default_sources() -> Self {
        let mut reg = Self::new();
        reg.register(Box::new(providers::EuEsrsProvider));
        reg.register(Box::new(providers::IfrsStandardsProvider));
        reg.register(Box::new(providers::UkSrsProvider));
        reg.register(Box::new(providers::JapanSsbjProvider));
        reg.register(Box::new(providers::IndiaEsgProvider));
        reg.register(Box::new(providers::SbtiFinanceProvider));
        reg
    }

    pub fn register(&mut self, provider: Box<dyn SourceProvider>) {
        self.providers.push(provider);
    }

    pub fn len(&self) -> usize {
        self.providers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }

    /// Invoke every registered producer and collect their records.
    pub async fn gather_all(&self) -> Vec<UpdateRecord> {
        let mut collected = Vec::new();
        for p in &self.providers {
            match p.fetch_latest().await {
                Ok(mut records) => collected.append(&mut records),
                Err(e) => {
                    tracing::warn!(error = ?e, source = p.name(), "source producer failed");
                }
            }
        }
        collected
    }
}

impl Default for SourceRegistry {
    fn default() -> Self {
        Self::new()
    }
}
