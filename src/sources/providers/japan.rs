use anyhow::Result;
use async_trait::async_trait;

use crate::sources::types::{ImpactLevel, SourceProvider, UpdateRecord};

/// Japan FSA roadmap for adopting the SSBJ disclosure standards.
pub struct JapanSsbjProvider;

impl JapanSsbjProvider {
    fn records() -> Vec<UpdateRecord> {
        let summary = "Japan's Financial Services Agency published a roadmap on 17 July 2025 for \
                       adopting the Sustainability Standards Board of Japan (SSBJ) standards. \
                       Prime Market companies with market capitalisation of 3 trillion yen or \
                       more must apply the SSBJ standards in the fiscal year ending March 2027 \
                       with assurance from March 2028; those with 1-3 trillion yen apply the \
                       standards in FY 2028 with assurance from FY 2029. Smaller companies \
                       (0.5-1 trillion yen) will be considered later. The roadmap emphasises \
                       phased implementation and notes that third-party assurance will start \
                       from FY 2028.";
        vec![UpdateRecord {
            first_published: "2025-07-17".into(),
            last_updated: "2025-07-17".into(),
            compliance_deadline: "2027-03-31 (3T+ yen market cap), 2028-03-31 (1-3T yen market cap)"
                .into(),
            significant_changes: "Phased rollout by market capitalization; \
                                  Mandatory third-party assurance from FY2028; \
                                  IFRS S1/S2 alignment with Japan-specific adaptations; \
                                  Scope 3 relief for initial years"
                .into(),
            impact_level: ImpactLevel::High,
            affected_sectors: "Prime Market listed companies, Large Financial institutions, \
                               Export-oriented manufacturing"
                .into(),
            jurisdiction: "Japan".into(),
            ..UpdateRecord::basic(
                "Japan",
                "Japan's roadmap for SSBJ sustainability disclosure standards",
                "https://www.noandt.com/wp-content/uploads/2025/07/capital_en_no8.pdf",
                "2025-07-17",
                summary,
            )
        }]
    }
}

#[async_trait]
impl SourceProvider for JapanSsbjProvider {
    async fn fetch_latest(&self) -> Result<Vec<UpdateRecord>> {
        Ok(Self::records())
    }

    fn name(&self) -> &'static str {
        "Japan"
    }
}
