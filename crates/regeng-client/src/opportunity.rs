//! Opportunity service client: arbitrage and compliance-gap discovery.
//!
//! All opportunity reads are unauthenticated in this design.

use regeng_config::Service;
use regeng_core::opportunity::{ArbitrageFilter, ArbitrageOpportunity, ComplianceGap, GapFilter};

use crate::{
    ApiClient, ClientError,
    http::{check_response, decode_json, query_string},
};

impl ApiClient {
    /// List cross-jurisdiction arbitrage opportunities.
    /// `GET /opportunities/arbitrage?j1=&j2=&concept=&rel_delta=&limit=&since=`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails or the response cannot be
    /// decoded.
    pub async fn arbitrage(
        &self,
        filter: &ArbitrageFilter,
    ) -> Result<Vec<ArbitrageOpportunity>, ClientError> {
        let url = format!(
            "{}/opportunities/arbitrage{}",
            self.base(Service::Opportunity),
            query_string(&filter.query_pairs())
        );
        let resp = check_response(self.http.get(&url).send().await?).await?;
        decode_json(resp, "arbitrage").await
    }

    /// List missing-requirement findings between two jurisdictions.
    /// `GET /opportunities/gaps?j1=&j2=&limit=`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails or the response cannot be
    /// decoded.
    pub async fn gaps(&self, filter: &GapFilter) -> Result<Vec<ComplianceGap>, ClientError> {
        let url = format!(
            "{}/opportunities/gaps{}",
            self.base(Service::Opportunity),
            query_string(&filter.query_pairs())
        );
        let resp = check_response(self.http.get(&url).send().await?).await?;
        decode_json(resp, "gaps").await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn gaps_fixture_parses() {
        let gaps: Vec<ComplianceGap> = serde_json::from_str(
            r#"[{
                "jurisdiction1": "EU",
                "jurisdiction2": "US",
                "gap_type": "missing_requirement",
                "description": "No breach-notification deadline in US ruleset",
                "severity": "high"
            }]"#,
        )
        .unwrap();
        assert_eq!(gaps.len(), 1);
        assert_eq!(gaps[0].gap_type, "missing_requirement");
    }

    #[test]
    fn arbitrage_query_built_from_filter() {
        let filter = ArbitrageFilter {
            j1: Some("EU".into()),
            j2: Some("US".into()),
            rel_delta: Some(0.2),
            ..Default::default()
        };
        assert_eq!(
            query_string(&filter.query_pairs()),
            "?j1=EU&j2=US&rel_delta=0.2"
        );
    }
}
