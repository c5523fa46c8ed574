//! Ingestion service client: document URL submission.

use regeng_core::ingest::{IngestUrlRequest, IngestUrlResponse};

use crate::{
    ApiClient, ClientError,
    http::{check_response, decode_json},
};

/// Header carrying the per-consumer API key.
pub const API_KEY_HEADER: &str = "X-RegEngine-API-Key";

/// Syntactic check that `url` is an absolute URL with a host.
#[must_use]
pub fn is_absolute_url(url: &str) -> bool {
    reqwest::Url::parse(url).is_ok_and(|parsed| parsed.has_host())
}

impl ApiClient {
    /// Submit a document URL for ingestion. `POST /ingest/url`.
    ///
    /// One request yields at most one `doc_id`. The URL must be absolute;
    /// syntactic validation is the caller's job, the backend rejects anything
    /// it cannot fetch.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails, the API key is rejected
    /// (401/403), or the response cannot be decoded.
    pub async fn ingest_url(
        &self,
        api_key: &str,
        url: &str,
    ) -> Result<IngestUrlResponse, ClientError> {
        let endpoint = format!("{}/ingest/url", self.base(regeng_config::Service::Ingestion));
        let body = IngestUrlRequest {
            url: url.to_string(),
        };
        let resp = check_response(
            self.http
                .post(&endpoint)
                .header(API_KEY_HEADER, api_key)
                .json(&body)
                .send()
                .await?,
        )
        .await?;
        decode_json(resp, "ingest_url").await
    }
}
