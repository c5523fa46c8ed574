//! Compliance service types: industries, checklists, and validation.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Severity of a checklist rule. Closed set; anything else on the wire is a
/// decode error, never silently defaulted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Critical,
    High,
    Medium,
    Low,
}

impl Severity {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Critical => "critical",
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One rule within a checklist.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ChecklistItem {
    pub id: String,
    pub requirement: String,
    pub description: String,
    pub severity: Severity,
    pub category: String,
}

/// An industry rule-set. `items` keeps the server's ordering.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ComplianceChecklist {
    pub id: String,
    pub name: String,
    pub description: String,
    pub industry: String,
    pub version: String,
    pub items: Vec<ChecklistItem>,
}

/// A supported regulatory domain. `checklist_count` is server-computed.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Industry {
    pub id: String,
    pub name: String,
    pub description: String,
    pub checklist_count: u32,
}

/// Body of `POST /validate`.
///
/// `config` is an open mapping; its interpretation belongs entirely to the
/// compliance service. The client only requires that it is a JSON object.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct ValidationRequest {
    pub checklist_id: String,
    pub config: serde_json::Map<String, serde_json::Value>,
}

/// One failed rule in a validation result.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ValidationFailure {
    pub item_id: String,
    pub requirement: String,
    pub message: String,
    pub severity: String,
}

/// One advisory finding. Warnings never affect `passed`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ValidationWarning {
    pub item_id: String,
    pub requirement: String,
    pub message: String,
}

/// Outcome of validating a config against a checklist.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ValidationResult {
    pub checklist_id: String,
    pub passed: bool,
    pub failures: Vec<ValidationFailure>,
    pub warnings: Vec<ValidationWarning>,
}

impl ValidationResult {
    /// Server invariant: `passed` is true iff `failures` is empty.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        self.passed == self.failures.is_empty()
    }
}
