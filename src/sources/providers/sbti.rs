use anyhow::Result;
use async_trait::async_trait;

use crate::sources::types::{ImpactLevel, SourceProvider, UpdateRecord};

/// SBTi Financial Institutions Net-Zero Standard.
pub struct SbtiFinanceProvider;

impl SbtiFinanceProvider {
    fn records() -> Vec<UpdateRecord> {
        let summary = "On 22 July 2025 the Science Based Targets initiative (SBTi) released \
                       its first Financial Institutions Net-Zero Standard. The standard offers \
                       science-based guidance for banks, asset owners, asset managers and \
                       private equity firms to align lending, investment, insurance and \
                       capital markets activities with a 1.5 degree pathway, setting a clear \
                       route to net-zero by 2050. It emphasises portfolio alignment and \
                       encourages financial institutions to support high-emitting sectors in \
                       decarbonising, while integrating the guidance into existing risk and \
                       investment processes.";
        vec![UpdateRecord {
            first_published: "2025-07-22".into(),
            last_updated: "2025-07-22".into(),
            compliance_deadline: "Voluntary commitment (5-24 month target-setting timeline)".into(),
            significant_changes: "First comprehensive net-zero standard for financial sector; \
                                  Portfolio-level emissions targets; \
                                  Financed emissions accounting (PCAF-aligned); \
                                  Sector-specific decarbonization pathways; \
                                  Engagement and divestment framework"
                .into(),
            impact_level: ImpactLevel::High,
            affected_sectors: "Banks, Asset Managers, Asset Owners, Insurance companies, \
                               Private Equity"
                .into(),
            jurisdiction: "Global (voluntary)".into(),
            ..UpdateRecord::basic(
                "SBTi",
                "SBTi releases Financial Institutions Net-Zero Standard",
                "https://sciencebasedtargets.org/news/the-sbti-opens-net-zero-standard-for-finance-industry",
                "2025-07-22",
                summary,
            )
        }]
    }
}

#[async_trait]
impl SourceProvider for SbtiFinanceProvider {
    async fn fetch_latest(&self) -> Result<Vec<UpdateRecord>> {
        Ok(Self::records())
    }

    fn name(&self) -> &'static str {
        "SBTi"
    }
}
