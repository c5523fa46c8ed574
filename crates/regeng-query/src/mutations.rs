//! Mutations and their cache invalidation.
//!
//! A mutation never populates the read cache. On success it invalidates the
//! entries it affects so the next read refetches; on failure the cache keeps
//! its last known-good value and the error goes back to the caller.

use regeng_core::admin::ApiKeyRecord;
use regeng_core::compliance::{ValidationRequest, ValidationResult};
use regeng_core::ingest::IngestUrlResponse;

use crate::error::QueryError;
use crate::key::QueryOp;
use crate::queries::Queries;

impl Queries {
    /// Issue a new API key and invalidate every cached key listing.
    ///
    /// The returned record carries the plaintext secret; it is handed to the
    /// caller and never enters the cache store.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError`] on failure; no invalidation happens then.
    pub async fn create_api_key(
        &self,
        admin_key: &str,
        description: Option<&str>,
    ) -> Result<ApiKeyRecord, QueryError> {
        let record = self.client().create_api_key(admin_key, description).await?;
        self.cache().invalidate_op(QueryOp::ApiKeys).await;
        tracing::info!(key_id = %record.key_id, "api key created");
        Ok(record)
    }

    /// Revoke a key and invalidate every cached key listing, so the next read
    /// reflects the revocation even inside its staleness window.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::Remote`] (404) for an unknown `key_id`; the
    /// cached listing is left untouched in that case.
    pub async fn revoke_api_key(&self, admin_key: &str, key_id: &str) -> Result<(), QueryError> {
        self.client().revoke_api_key(admin_key, key_id).await?;
        self.cache().invalidate_op(QueryOp::ApiKeys).await;
        tracing::info!(key_id, "api key revoked");
        Ok(())
    }

    /// Submit a document URL for ingestion. No cached read depends on the
    /// result, so nothing is invalidated.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError`] if the submission fails.
    pub async fn ingest_url(
        &self,
        api_key: &str,
        url: &str,
    ) -> Result<IngestUrlResponse, QueryError> {
        let response = self.client().ingest_url(api_key, url).await?;
        tracing::info!(doc_id = %response.doc_id, "url submitted for ingestion");
        Ok(response)
    }

    /// Validate a config mapping against a checklist. Validation is a pure
    /// computation on the backend; nothing is invalidated.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError`] if the validation call fails.
    pub async fn validate_config(
        &self,
        request: &ValidationRequest,
    ) -> Result<ValidationResult, QueryError> {
        let result = self.client().validate(request).await?;
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use regeng_client::ApiClient;
    use regeng_config::ServicesConfig;
    use std::sync::Arc;

    fn queries() -> Queries {
        Queries::new(Arc::new(ApiClient::new(&ServicesConfig::default())))
    }

    #[tokio::test]
    #[ignore] // requires running services and REGENGINE_AUTH__ADMIN_KEY
    async fn live_key_lifecycle() {
        let admin_key = std::env::var("REGENGINE_AUTH__ADMIN_KEY").expect("admin key");
        let queries = queries();

        let before = queries.api_keys(&admin_key).await.expect("list");
        let created = queries
            .create_api_key(&admin_key, Some("svc-a"))
            .await
            .expect("create");
        assert!(created.api_key.is_some());
        assert!(!before.iter().any(|k| k.key_id == created.key_id));

        let after = queries.api_keys(&admin_key).await.expect("list again");
        let listed = after
            .iter()
            .find(|k| k.key_id == created.key_id)
            .expect("created key listed");
        assert!(listed.api_key.is_none());
        assert_eq!(listed.description.as_deref(), Some("svc-a"));

        queries
            .revoke_api_key(&admin_key, &created.key_id)
            .await
            .expect("revoke");
        let final_listing = queries.api_keys(&admin_key).await.expect("final list");
        assert!(!final_listing.iter().any(|k| k.key_id == created.key_id));
    }

    #[tokio::test]
    #[ignore] // requires running services
    async fn live_revoking_unknown_key_is_a_remote_error() {
        let admin_key = std::env::var("REGENGINE_AUTH__ADMIN_KEY").expect("admin key");
        let queries = queries();

        let err = queries
            .revoke_api_key(&admin_key, "key_does_not_exist")
            .await
            .unwrap_err();
        assert!(matches!(err, QueryError::Remote { status: 404, .. }));
    }
}
