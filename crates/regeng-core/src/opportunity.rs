//! Opportunity service types: cross-jurisdiction arbitrage and gaps.

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A quantified regulatory difference between two jurisdictions.
///
/// `delta` is unconstrained in sign. `jurisdiction1 != jurisdiction2` is
/// expected from the backend but not enforced here.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct ArbitrageOpportunity {
    pub concept: String,
    pub jurisdiction1: String,
    pub jurisdiction2: String,
    pub delta: f64,
    pub description: String,
}

/// A missing or weaker requirement found when comparing two jurisdictions.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ComplianceGap {
    pub jurisdiction1: String,
    pub jurisdiction2: String,
    pub gap_type: String,
    pub description: String,
    pub severity: String,
}

/// Query filters for `GET /opportunities/arbitrage`. All optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct ArbitrageFilter {
    pub j1: Option<String>,
    pub j2: Option<String>,
    pub concept: Option<String>,
    pub rel_delta: Option<f64>,
    pub limit: Option<u32>,
    pub since: Option<DateTime<Utc>>,
}

impl ArbitrageFilter {
    /// Wire query parameters in a fixed order, skipping unset filters.
    #[must_use]
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(j1) = &self.j1 {
            pairs.push(("j1", j1.clone()));
        }
        if let Some(j2) = &self.j2 {
            pairs.push(("j2", j2.clone()));
        }
        if let Some(concept) = &self.concept {
            pairs.push(("concept", concept.clone()));
        }
        if let Some(rel_delta) = self.rel_delta {
            pairs.push(("rel_delta", rel_delta.to_string()));
        }
        if let Some(limit) = self.limit {
            pairs.push(("limit", limit.to_string()));
        }
        if let Some(since) = self.since {
            pairs.push(("since", since.to_rfc3339()));
        }
        pairs
    }
}

/// Query filters for `GET /opportunities/gaps`. All optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct GapFilter {
    pub j1: Option<String>,
    pub j2: Option<String>,
    pub limit: Option<u32>,
}

impl GapFilter {
    /// Wire query parameters in a fixed order, skipping unset filters.
    #[must_use]
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(j1) = &self.j1 {
            pairs.push(("j1", j1.clone()));
        }
        if let Some(j2) = &self.j2 {
            pairs.push(("j2", j2.clone()));
        }
        if let Some(limit) = self.limit {
            pairs.push(("limit", limit.to_string()));
        }
        pairs
    }
}
