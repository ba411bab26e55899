use anyhow::Result;
use async_trait::async_trait;

use crate::sources::types::{ImpactLevel, SourceProvider, UpdateRecord};

/// The European Commission's ESRS "quick fix" amendment.
///
/// The Commission's publication pages block automated requests, so this
/// provider carries a curated summary instead of scraping the site.
pub struct EuEsrsProvider;

impl EuEsrsProvider {
    fn records() -> Vec<UpdateRecord> {
        let link = "https://finance.ec.europa.eu/publications/commission-adopts-quick-fix-\
                    companies-already-conducting-corporate-sustainability-reporting_en";
        let summary = "The European Commission's quick-fix amendment allows companies already \
                       reporting for the financial year 2024 to defer disclosure of anticipated \
                       financial effects of sustainability-related risks and opportunities for \
                       financial years 2025 and 2026. This delegated act extends phase-in relief \
                       previously available only to smaller companies, reducing reporting burdens \
                       while a broader simplification of the ESRS is underway.";
        vec![UpdateRecord {
            first_published: "2023-06-09".into(),
            last_updated: "2025-07-11".into(),
            compliance_deadline: "2026-12-31".into(),
            significant_changes: "Deferred disclosure of financial effects for FY2025-2026; \
                                  Extended phase-in relief to wave-one companies; \
                                  Reduced scope 3 emissions reporting burden"
                .into(),
            impact_level: ImpactLevel::High,
            affected_sectors: "All EU large companies, Listed SMEs, Financial Institutions, \
                               Multinational Corporations"
                .into(),
            jurisdiction: "European Union (EU27)".into(),
            ..UpdateRecord::basic(
                "EU",
                "Commission adopts 'quick fix' for ESRS wave-one companies",
                link,
                "2025-07-11",
                summary,
            )
        }]
    }
}

#[async_trait]
impl SourceProvider for EuEsrsProvider {
    async fn fetch_latest(&self) -> Result<Vec<UpdateRecord>> {
        Ok(Self::records())
    }

    fn name(&self) -> &'static str {
        "EU"
    }
}
