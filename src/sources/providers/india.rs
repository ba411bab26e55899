use anyhow::Result;
use async_trait::async_trait;

use crate::sources::types::{ImpactLevel, SourceProvider, UpdateRecord};

/// India's ESG oversight recommendations and the SEBI BRSR framework.
pub struct IndiaEsgProvider;

impl IndiaEsgProvider {
    fn records() -> Vec<UpdateRecord> {
        let summary = "India's Parliamentary Standing Committee on Finance (August 2025) \
                       recommended establishing a dedicated ESG oversight body within the \
                       Ministry of Corporate Affairs to combat greenwashing. The committee \
                       proposes amending the Companies Act to make ESG a core duty of \
                       directors, deploying forensic experts, issuing sector-specific \
                       guidelines and imposing stricter penalties for false ESG claims. The \
                       Securities and Exchange Board of India requires the top 1,000 listed \
                       companies to report ESG performance using the Business Responsibility \
                       and Sustainability Reporting (BRSR) framework, which aligns with GRI \
                       and SASB standards.";
        vec![UpdateRecord {
            first_published: "2021-05-05".into(),
            last_updated: "2025-08-11".into(),
            compliance_deadline: "2024-04-01 (BRSR Core with assurance for top 150), \
                                  2023-04-01 (BRSR for top 1000)"
                .into(),
            significant_changes: "BRSR Core framework with limited assurance; \
                                  Extended to top 1000 companies; \
                                  ESG oversight body proposed; \
                                  Director fiduciary duties to include ESG; \
                                  Enhanced penalties for greenwashing"
                .into(),
            impact_level: ImpactLevel::High,
            affected_sectors: "Top 1000 listed companies, Banking and Financial Services, \
                               Manufacturing, IT Services"
                .into(),
            jurisdiction: "India".into(),
            ..UpdateRecord::basic(
                "India",
                "India moves toward ESG oversight and stricter disclosure",
                "https://www.drishtiias.com/daily-updates/daily-news-analysis/esg-oversight-in-india",
                "2025-08-11",
                summary,
            )
        }]
    }
}

#[async_trait]
impl SourceProvider for IndiaEsgProvider {
    async fn fetch_latest(&self) -> Result<Vec<UpdateRecord>> {
        Ok(Self::records())
    }

    fn name(&self) -> &'static str {
        "India"
    }
}
