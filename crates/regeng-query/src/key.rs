//! Cache keys.
//!
//! A key is `(operation, parameters)`. Operations form a closed set so
//! mutations can invalidate whole groups (e.g. every cached key listing)
//! without knowing the parameters they were read with.

use std::hash::{DefaultHasher, Hash, Hasher};

use regeng_core::opportunity::{ArbitrageFilter, GapFilter};

/// The cacheable read operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueryOp {
    ApiKeys,
    Industries,
    Checklists,
    Checklist,
    Arbitrage,
    Gaps,
}

impl QueryOp {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ApiKeys => "api_keys",
            Self::Industries => "industries",
            Self::Checklists => "checklists",
            Self::Checklist => "checklist",
            Self::Arbitrage => "arbitrage",
            Self::Gaps => "gaps",
        }
    }
}

/// Address of one cached read: operation plus canonical parameter string.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QueryKey {
    pub op: QueryOp,
    pub params: String,
}

impl QueryKey {
    /// Key listing scoped to one admin credential.
    ///
    /// The credential itself never enters the store; the key carries a
    /// fingerprint so listings under different credentials stay distinct.
    #[must_use]
    pub fn api_keys(admin_key: &str) -> Self {
        Self {
            op: QueryOp::ApiKeys,
            params: fingerprint(admin_key),
        }
    }

    #[must_use]
    pub fn industries() -> Self {
        Self {
            op: QueryOp::Industries,
            params: String::new(),
        }
    }

    #[must_use]
    pub fn checklists(industry: Option<&str>) -> Self {
        Self {
            op: QueryOp::Checklists,
            params: industry.unwrap_or_default().to_string(),
        }
    }

    #[must_use]
    pub fn checklist(id: &str) -> Self {
        Self {
            op: QueryOp::Checklist,
            params: id.to_string(),
        }
    }

    #[must_use]
    pub fn arbitrage(filter: &ArbitrageFilter) -> Self {
        Self {
            op: QueryOp::Arbitrage,
            params: canonical_params(&filter.query_pairs()),
        }
    }

    #[must_use]
    pub fn gaps(filter: &GapFilter) -> Self {
        Self {
            op: QueryOp::Gaps,
            params: canonical_params(&filter.query_pairs()),
        }
    }
}

/// Join wire query pairs into a canonical parameter string.
fn canonical_params(pairs: &[(&str, String)]) -> String {
    pairs
        .iter()
        .map(|(name, value)| format!("{name}={value}"))
        .collect::<Vec<_>>()
        .join("&")
}

/// Stable 64-bit fingerprint of a credential, rendered as hex.
///
/// Not cryptographic; only used to scope cache keys without holding the
/// plaintext.
fn fingerprint(secret: &str) -> String {
    let mut hasher = DefaultHasher::new();
    secret.hash(&mut hasher);
    format!("{:016x}", hasher.finish())
}
