//! Admin service client: API key administration.

use regeng_core::admin::{ApiKeyRecord, CreateKeyRequest};

use crate::{
    ApiClient, ClientError,
    http::{check_response, decode_json},
};

/// Header carrying the admin master credential.
pub const ADMIN_KEY_HEADER: &str = "X-Admin-Key";

impl ApiClient {
    /// Issue a new API key. `POST /admin/keys`.
    ///
    /// The response is the only place the plaintext secret ever appears.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails, the backend rejects the
    /// admin credential (401), or the response cannot be decoded.
    pub async fn create_api_key(
        &self,
        admin_key: &str,
        description: Option<&str>,
    ) -> Result<ApiKeyRecord, ClientError> {
        let url = format!("{}/admin/keys", self.base(regeng_config::Service::Admin));
        let body = CreateKeyRequest {
            description: description.map(str::to_string),
        };
        let resp = check_response(
            self.http
                .post(&url)
                .header(ADMIN_KEY_HEADER, admin_key)
                .json(&body)
                .send()
                .await?,
        )
        .await?;
        decode_json(resp, "create_api_key").await
    }

    /// List issued keys. `GET /admin/keys`. Plaintext secrets are omitted.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails or the response cannot be
    /// decoded.
    pub async fn list_api_keys(&self, admin_key: &str) -> Result<Vec<ApiKeyRecord>, ClientError> {
        let url = format!("{}/admin/keys", self.base(regeng_config::Service::Admin));
        let resp = check_response(
            self.http
                .get(&url)
                .header(ADMIN_KEY_HEADER, admin_key)
                .send()
                .await?,
        )
        .await?;
        decode_json(resp, "list_api_keys").await
    }

    /// Revoke a key by its stable identity. `DELETE /admin/keys/{key_id}`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Remote`] with status 404 if `key_id` does not
    /// exist; the listing is unchanged in that case.
    pub async fn revoke_api_key(&self, admin_key: &str, key_id: &str) -> Result<(), ClientError> {
        let url = format!(
            "{}/admin/keys/{}",
            self.base(regeng_config::Service::Admin),
            urlencoding::encode(key_id)
        );
        check_response(
            self.http
                .delete(&url)
                .header(ADMIN_KEY_HEADER, admin_key)
                .send()
                .await?,
        )
        .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn listing_fixture_never_contains_secrets() {
        let records: Vec<ApiKeyRecord> = serde_json::from_str(
            r#"[
                {"key_id": "key_01", "created_at": "2025-06-01T12:00:00Z", "description": "svc-a"},
                {"key_id": "key_02", "created_at": "2025-06-02T09:30:00Z"}
            ]"#,
        )
        .unwrap();
        assert_eq!(records.len(), 2);
        assert!(records.iter().all(|r| r.api_key.is_none()));
        assert_eq!(records[1].description, None);
    }

    #[test]
    fn admin_header_name() {
        assert_eq!(ADMIN_KEY_HEADER, "X-Admin-Key");
    }
}
