//! # regeng-core
//!
//! Wire types for the RegEngine backend services.
//!
//! Every struct here mirrors a request or response body of one of the four
//! backends (admin, ingestion, opportunity, compliance). They are plain value
//! types: immutable once decoded, replaced rather than patched. Anything
//! cached by `regeng-query` is one of these.

pub mod admin;
pub mod compliance;
pub mod health;
pub mod ingest;
pub mod opportunity;

pub use admin::{ApiKeyRecord, CreateKeyRequest};
pub use compliance::{
    ChecklistItem, ComplianceChecklist, Industry, Severity, ValidationFailure, ValidationRequest,
    ValidationResult, ValidationWarning,
};
pub use health::{HealthResponse, HealthStatus, ServiceHealth};
pub use ingest::{IngestUrlRequest, IngestUrlResponse};
pub use opportunity::{ArbitrageFilter, ArbitrageOpportunity, ComplianceGap, GapFilter};
