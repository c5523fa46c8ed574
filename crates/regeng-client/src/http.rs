//! Shared HTTP response helpers for the service clients.
//!
//! Centralizes status-code checks and body decoding so individual service
//! modules stay focused on request construction. The backends are FastAPI
//! services, so structured error bodies carry a `detail` field.

use serde::de::DeserializeOwned;

use crate::error::ClientError;

/// Check an HTTP response for error conditions.
///
/// Returns the response unchanged on success. A non-2xx status becomes
/// [`ClientError::Remote`] carrying the backend's `detail` message (falling
/// back to the raw body) and the `x-request-id` header when present.
pub async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, ClientError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }

    let request_id = resp
        .headers()
        .get("x-request-id")
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    let body = resp.text().await.unwrap_or_default();
    tracing::warn!(status = status.as_u16(), ?request_id, "backend returned error status");

    Err(ClientError::Remote {
        status: status.as_u16(),
        message: error_message(&body),
        request_id,
    })
}

/// Decode a 2xx response body into `T`.
///
/// Reads the body as text first so a shape mismatch surfaces as
/// [`ClientError::Decode`] rather than being folded into a transport error.
pub async fn decode_json<T: DeserializeOwned>(
    resp: reqwest::Response,
    context: &'static str,
) -> Result<T, ClientError> {
    let body = resp.text().await?;
    serde_json::from_str(&body).map_err(|source| ClientError::Decode { context, source })
}

/// Extract the `detail` field from a structured error body, or return the
/// body verbatim.
fn error_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|value| value.get("detail").cloned())
        .map_or_else(
            || body.to_string(),
            |detail| match detail {
                serde_json::Value::String(s) => s,
                other => other.to_string(),
            },
        )
}

/// Build a query string from name/value pairs, percent-encoding values.
///
/// Returns an empty string for no pairs, otherwise `?a=1&b=2`.
#[must_use]
pub fn query_string(pairs: &[(&str, String)]) -> String {
    if pairs.is_empty() {
        return String::new();
    }
    let mut out = String::from("?");
    for (index, (name, value)) in pairs.iter().enumerate() {
        if index > 0 {
            out.push('&');
        }
        out.push_str(name);
        out.push('=');
        out.push_str(&urlencoding::encode(value));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn mock_response(status: u16, body: &'static str) -> reqwest::Response {
        reqwest::Response::from(
            ::http::Response::builder()
                .status(status)
                .body(body)
                .unwrap(),
        )
    }

    fn mock_response_with_request_id(
        status: u16,
        body: &'static str,
        request_id: &str,
    ) -> reqwest::Response {
        reqwest::Response::from(
            ::http::Response::builder()
                .status(status)
                .header("x-request-id", request_id)
                .body(body)
                .unwrap(),
        )
    }

    #[tokio::test]
    async fn check_response_success() {
        let resp = mock_response(200, "{}");
        assert!(check_response(resp).await.is_ok());
    }

    #[tokio::test]
    async fn check_response_extracts_detail() {
        let resp = mock_response(404, r#"{"detail": "API key not found"}"#);
        let err = check_response(resp).await.unwrap_err();
        assert!(matches!(
            err,
            ClientError::Remote { status: 404, ref message, .. } if message.as_str() == "API key not found"
        ));
    }

    #[tokio::test]
    async fn check_response_falls_back_to_raw_body() {
        let resp = mock_response(502, "upstream exploded");
        let err = check_response(resp).await.unwrap_err();
        assert!(matches!(
            err,
            ClientError::Remote { status: 502, ref message, .. } if message.as_str() == "upstream exploded"
        ));
    }

    #[tokio::test]
    async fn check_response_carries_request_id() {
        let resp = mock_response_with_request_id(500, r#"{"detail": "boom"}"#, "req-42");
        let err = check_response(resp).await.unwrap_err();
        let ClientError::Remote { request_id, .. } = err else {
            panic!("expected remote error");
        };
        assert_eq!(request_id.as_deref(), Some("req-42"));
    }

    #[tokio::test]
    async fn decode_json_shape_mismatch_is_decode_error() {
        #[derive(Debug, serde::Deserialize)]
        struct Expected {
            #[allow(dead_code)]
            doc_id: String,
        }

        let resp = mock_response(200, r#"{"unexpected": true}"#);
        let err = decode_json::<Expected>(resp, "ingest_url").await.unwrap_err();
        assert!(matches!(err, ClientError::Decode { context: "ingest_url", .. }));
    }

    #[test]
    fn query_string_empty() {
        assert_eq!(query_string(&[]), "");
    }

    #[test]
    fn query_string_encodes_values() {
        let pairs = [
            ("industry", "health care".to_string()),
            ("limit", "50".to_string()),
        ];
        assert_eq!(query_string(&pairs), "?industry=health%20care&limit=50");
    }
}
