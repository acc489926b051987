//! Finding definitions - security observations recorded during a scan

use crate::severity::{Category, Severity};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Maximum length of a single evidence value, in characters.
///
/// Evidence frequently echoes attacker-controlled input (payloads, banners),
/// so values are truncated at insertion to keep reports bounded.
pub const MAX_EVIDENCE_LEN: usize = 100;

/// A single security observation.
///
/// Immutable once constructed; probes build findings and hand them to the
/// orchestrator, which only ever appends them to the result buckets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    /// Security dimension this observation belongs to
    pub category: Category,

    /// Reporting bucket
    pub severity: Severity,

    /// Human-readable description
    pub description: String,

    /// Context keys (e.g. "payload", "file", "permissions") to bounded values
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub evidence: BTreeMap<String, String>,
}

impl Finding {
    /// Create a new finding
    pub fn new(category: Category, severity: Severity, description: impl Into<String>) -> Self {
        Self {
            category,
            severity,
            description: description.into(),
            evidence: BTreeMap::new(),
        }
    }

    /// Create a vulnerability finding
    pub fn vulnerability(category: Category, description: impl Into<String>) -> Self {
        Self::new(category, Severity::Vulnerability, description)
    }

    /// Create a warning finding
    pub fn warning(category: Category, description: impl Into<String>) -> Self {
        Self::new(category, Severity::Warning, description)
    }

    /// Create an informational finding
    pub fn info(category: Category, description: impl Into<String>) -> Self {
        Self::new(category, Severity::Info, description)
    }

    /// Create a passed-check finding
    pub fn passed(category: Category, description: impl Into<String>) -> Self {
        Self::new(category, Severity::Passed, description)
    }

    /// Attach an evidence entry, truncating the value to [`MAX_EVIDENCE_LEN`]
    /// characters.
    pub fn with_evidence(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.evidence.insert(key.into(), truncate(value.into()));
        self
    }
}

/// Truncate a string to `MAX_EVIDENCE_LEN` characters on a char boundary.
fn truncate(value: String) -> String {
    if value.chars().count() <= MAX_EVIDENCE_LEN {
        return value;
    }
    value.chars().take(MAX_EVIDENCE_LEN).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let finding = Finding::vulnerability(Category::InputValidation, "server accepted payload")
            .with_evidence("payload", "not-json-data");

        assert_eq!(finding.severity, Severity::Vulnerability);
        assert_eq!(finding.category, Category::InputValidation);
        assert_eq!(finding.evidence.get("payload").unwrap(), "not-json-data");
    }

    #[test]
    fn test_evidence_truncated() {
        let long = "A".repeat(10_000);
        let finding =
            Finding::vulnerability(Category::InputValidation, "oversized field accepted")
                .with_evidence("payload", long);

        assert_eq!(
            finding.evidence.get("payload").unwrap().chars().count(),
            MAX_EVIDENCE_LEN
        );
    }

    #[test]
    fn test_evidence_truncation_respects_char_boundaries() {
        let multibyte = "ü".repeat(150);
        let finding = Finding::info(Category::Network, "banner").with_evidence("banner", multibyte);

        let stored = finding.evidence.get("banner").unwrap();
        assert_eq!(stored.chars().count(), MAX_EVIDENCE_LEN);
        assert!(stored.chars().all(|c| c == 'ü'));
    }

    #[test]
    fn test_short_evidence_kept_verbatim() {
        let finding = Finding::passed(Category::FilePermissions, "safe permissions")
            .with_evidence("permissions", "644");
        assert_eq!(finding.evidence.get("permissions").unwrap(), "644");
    }

    #[test]
    fn test_serde_roundtrip() {
        let finding = Finding::warning(Category::TlsConfiguration, "certificate not verified")
            .with_evidence("status", "200");

        let json = serde_json::to_string(&finding).unwrap();
        let back: Finding = serde_json::from_str(&json).unwrap();
        assert_eq!(finding, back);
    }
}
