//! Typed cached reads.
//!
//! Each read is addressed by a [`QueryKey`] and carries the staleness window
//! the original dashboard used for that data: key listings go stale quickly,
//! industry metadata barely changes, opportunity data sits in between.

use std::sync::Arc;
use std::time::Duration;

use regeng_client::ApiClient;
use regeng_core::admin::ApiKeyRecord;
use regeng_core::compliance::{ComplianceChecklist, Industry};
use regeng_core::opportunity::{ArbitrageFilter, ArbitrageOpportunity, ComplianceGap, GapFilter};

use crate::cache::QueryCache;
use crate::error::{QueryError, from_value, to_value};
use crate::key::QueryKey;

pub(crate) const API_KEYS_STALE: Duration = Duration::from_secs(30);
pub(crate) const INDUSTRIES_STALE: Duration = Duration::from_secs(300);
pub(crate) const CHECKLISTS_STALE: Duration = Duration::from_secs(120);
pub(crate) const CHECKLIST_STALE: Duration = Duration::from_secs(300);
pub(crate) const ARBITRAGE_STALE: Duration = Duration::from_secs(60);
pub(crate) const GAPS_STALE: Duration = Duration::from_secs(60);

/// Cached read and mutation layer over the typed clients.
///
/// Constructed once at startup around an explicitly built [`ApiClient`]; the
/// cache store is owned here and never mutated by anything else.
pub struct Queries {
    client: Arc<ApiClient>,
    cache: QueryCache,
}

impl Queries {
    #[must_use]
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self {
            client,
            cache: QueryCache::default(),
        }
    }

    #[must_use]
    pub const fn cache(&self) -> &QueryCache {
        &self.cache
    }

    pub(crate) fn client(&self) -> &Arc<ApiClient> {
        &self.client
    }

    /// Cached key listing for one admin credential. Listings never contain
    /// plaintext secrets, so caching them is safe.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError`] when no value can be served.
    pub async fn api_keys(&self, admin_key: &str) -> Result<Vec<ApiKeyRecord>, QueryError> {
        let key = QueryKey::api_keys(admin_key);
        let client = Arc::clone(&self.client);
        let admin_key = admin_key.to_string();
        let value = self
            .cache
            .read_through(key, API_KEYS_STALE, move || {
                let client = Arc::clone(&client);
                let admin_key = admin_key.clone();
                async move {
                    let records = client.list_api_keys(&admin_key).await?;
                    to_value(&records)
                }
            })
            .await?;
        from_value(value)
    }

    /// Cached industry listing.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError`] when no value can be served.
    pub async fn industries(&self) -> Result<Vec<Industry>, QueryError> {
        let client = Arc::clone(&self.client);
        let value = self
            .cache
            .read_through(QueryKey::industries(), INDUSTRIES_STALE, move || {
                let client = Arc::clone(&client);
                async move {
                    let industries = client.industries().await?;
                    to_value(&industries)
                }
            })
            .await?;
        from_value(value)
    }

    /// Cached checklist listing, optionally filtered by industry. The filter
    /// is part of the cache key, so filtered and unfiltered listings are
    /// cached independently.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError`] when no value can be served.
    pub async fn checklists(
        &self,
        industry: Option<&str>,
    ) -> Result<Vec<ComplianceChecklist>, QueryError> {
        let key = QueryKey::checklists(industry);
        let client = Arc::clone(&self.client);
        let industry = industry.map(str::to_string);
        let value = self
            .cache
            .read_through(key, CHECKLISTS_STALE, move || {
                let client = Arc::clone(&client);
                let industry = industry.clone();
                async move {
                    let checklists = client.checklists(industry.as_deref()).await?;
                    to_value(&checklists)
                }
            })
            .await?;
        from_value(value)
    }

    /// Cached single checklist.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError`] when no value can be served.
    pub async fn checklist(&self, id: &str) -> Result<ComplianceChecklist, QueryError> {
        let key = QueryKey::checklist(id);
        let client = Arc::clone(&self.client);
        let id = id.to_string();
        let value = self
            .cache
            .read_through(key, CHECKLIST_STALE, move || {
                let client = Arc::clone(&client);
                let id = id.clone();
                async move {
                    let checklist = client.checklist(&id).await?;
                    to_value(&checklist)
                }
            })
            .await?;
        from_value(value)
    }

    /// Cached arbitrage listing for one filter combination.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError`] when no value can be served.
    pub async fn arbitrage(
        &self,
        filter: &ArbitrageFilter,
    ) -> Result<Vec<ArbitrageOpportunity>, QueryError> {
        let key = QueryKey::arbitrage(filter);
        let client = Arc::clone(&self.client);
        let filter = filter.clone();
        let value = self
            .cache
            .read_through(key, ARBITRAGE_STALE, move || {
                let client = Arc::clone(&client);
                let filter = filter.clone();
                async move {
                    let items = client.arbitrage(&filter).await?;
                    to_value(&items)
                }
            })
            .await?;
        from_value(value)
    }

    /// Cached compliance-gap listing for one filter combination.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError`] when no value can be served.
    pub async fn gaps(&self, filter: &GapFilter) -> Result<Vec<ComplianceGap>, QueryError> {
        let key = QueryKey::gaps(filter);
        let client = Arc::clone(&self.client);
        let filter = filter.clone();
        let value = self
            .cache
            .read_through(key, GAPS_STALE, move || {
                let client = Arc::clone(&client);
                let filter = filter.clone();
                async move {
                    let gaps = client.gaps(&filter).await?;
                    to_value(&gaps)
                }
            })
            .await?;
        from_value(value)
    }
}
