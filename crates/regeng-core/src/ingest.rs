//! Ingestion service types: document URL submission.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Body of `POST /ingest/url`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct IngestUrlRequest {
    /// Must be a syntactically valid absolute URL.
    pub url: String,
}

/// Outcome of a URL submission. One request yields at most one `doc_id`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct IngestUrlResponse {
    pub doc_id: String,
    pub status: String,
    #[serde(default)]
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parse_ingest_response() {
        let resp: IngestUrlResponse = serde_json::from_str(
            r#"{"doc_id": "doc_9f2", "status": "accepted", "message": "queued for OCR"}"#,
        )
        .unwrap();
        assert_eq!(resp.doc_id, "doc_9f2");
        assert_eq!(resp.status, "accepted");
    }

    #[test]
    fn message_defaults_to_empty() {
        let resp: IngestUrlResponse =
            serde_json::from_str(r#"{"doc_id": "doc_9f2", "status": "accepted"}"#).unwrap();
        assert!(resp.message.is_empty());
    }
}
