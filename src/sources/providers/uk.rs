use anyhow::Result;
use async_trait::async_trait;

use crate::sources::types::{ImpactLevel, SourceProvider, UpdateRecord};

/// UK consultation on Sustainability Reporting Standards (UK SRS).
pub struct UkSrsProvider;

impl UkSrsProvider {
    fn records() -> Vec<UpdateRecord> {
        let summary = "The UK government is consulting on draft Sustainability Reporting \
                       Standards S1 and S2 (UK SRS), based on the ISSB's IFRS S1 and S2. The \
                       consultation opened on 25 June 2025 and closes on 17 September 2025. \
                       After finalising the standards later in 2025 they will initially be \
                       voluntary. The Department for Business and Trade and the Financial \
                       Conduct Authority will consider whether to mandate reporting against \
                       the UK SRS for certain entities.";
        vec![UpdateRecord {
            first_published: "2025-06-25".into(),
            last_updated: "2025-06-25".into(),
            compliance_deadline: "2026-04-01 (expected, voluntary initially)".into(),
            significant_changes: "UK-specific adaptations of IFRS S1/S2; \
                                  Proportionality measures for smaller entities; \
                                  Phased implementation approach; \
                                  Alignment with UK Green Taxonomy"
                .into(),
            impact_level: ImpactLevel::High,
            affected_sectors: "UK publicly traded companies, Large private companies \
                               (>500 employees), Financial services"
                .into(),
            jurisdiction: "United Kingdom".into(),
            ..UpdateRecord::basic(
                "UK",
                "UK consultation on Sustainability Reporting Standards",
                "https://www.gov.uk/guidance/uk-sustainability-reporting-standards",
                "2025-06-25",
                summary,
            )
        }]
    }
}

#[async_trait]
impl SourceProvider for UkSrsProvider {
    async fn fetch_latest(&self) -> Result<Vec<UpdateRecord>> {
        Ok(Self::records())
    }

    fn name(&self) -> &'static str {
        "UK"
    }
}
