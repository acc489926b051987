//! Scan results - the severity-bucketed accumulator for one scan run

use crate::finding::Finding;
use crate::severity::Severity;
use serde::{Deserialize, Serialize};

/// All findings from one scan run, bucketed by severity.
///
/// Created empty at scan start and appended to by the orchestrator as each
/// probe completes. Insertion order within a bucket is discovery order and
/// is preserved through serialization, so reports are stable for a given
/// run. Read-only once the scan has finished.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanResults {
    #[serde(default)]
    pub vulnerabilities: Vec<Finding>,
    #[serde(default)]
    pub warnings: Vec<Finding>,
    #[serde(default)]
    pub info: Vec<Finding>,
    #[serde(default)]
    pub passed: Vec<Finding>,
}

impl ScanResults {
    /// Create an empty result set
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a finding to the bucket matching its severity
    pub fn push(&mut self, finding: Finding) {
        match finding.severity {
            Severity::Vulnerability => self.vulnerabilities.push(finding),
            Severity::Warning => self.warnings.push(finding),
            Severity::Info => self.info.push(finding),
            Severity::Passed => self.passed.push(finding),
        }
    }

    /// Append every finding in `findings`, preserving order
    pub fn extend(&mut self, findings: impl IntoIterator<Item = Finding>) {
        for finding in findings {
            self.push(finding);
        }
    }

    /// Findings in the bucket for `severity`
    pub fn bucket(&self, severity: Severity) -> &[Finding] {
        match severity {
            Severity::Vulnerability => &self.vulnerabilities,
            Severity::Warning => &self.warnings,
            Severity::Info => &self.info,
            Severity::Passed => &self.passed,
        }
    }

    /// Total number of findings across all buckets
    pub fn len(&self) -> usize {
        self.vulnerabilities.len() + self.warnings.len() + self.info.len() + self.passed.len()
    }

    /// True if no findings were recorded
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterate over every finding, vulnerabilities first
    pub fn iter(&self) -> impl Iterator<Item = &Finding> {
        self.vulnerabilities
            .iter()
            .chain(self.warnings.iter())
            .chain(self.info.iter())
            .chain(self.passed.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::severity::Category;

    #[test]
    fn test_push_routes_by_severity() {
        let mut results = ScanResults::new();
        results.push(Finding::vulnerability(Category::InputValidation, "v"));
        results.push(Finding::warning(Category::Network, "w"));
        results.push(Finding::info(Category::Dependency, "i"));
        results.push(Finding::passed(Category::FilePermissions, "p"));

        assert_eq!(results.vulnerabilities.len(), 1);
        assert_eq!(results.warnings.len(), 1);
        assert_eq!(results.info.len(), 1);
        assert_eq!(results.passed.len(), 1);
        assert_eq!(results.len(), 4);
    }

    #[test]
    fn test_insertion_order_preserved() {
        let mut results = ScanResults::new();
        for i in 0..5 {
            results.push(Finding::info(Category::Dependency, format!("dep {i}")));
        }

        let descriptions: Vec<&str> = results.info.iter().map(|f| f.description.as_str()).collect();
        assert_eq!(descriptions, vec!["dep 0", "dep 1", "dep 2", "dep 3", "dep 4"]);
    }

    #[test]
    fn test_bucket_lookup() {
        let mut results = ScanResults::new();
        results.push(Finding::warning(Category::TlsConfiguration, "w"));
        assert_eq!(results.bucket(Severity::Warning).len(), 1);
        assert!(results.bucket(Severity::Vulnerability).is_empty());
    }

    #[test]
    fn test_serde_roundtrip_preserves_equality() {
        let mut results = ScanResults::new();
        results.push(
            Finding::vulnerability(Category::FilePermissions, "world-writable binary")
                .with_evidence("file", "/opt/smoldesk/smoldesk")
                .with_evidence("permissions", "777"),
        );
        results.push(Finding::info(Category::Dependency, "ffmpeg: not found"));
        results.push(Finding::passed(Category::Network, "connection established"));

        let json = serde_json::to_string(&results).unwrap();
        let back: ScanResults = serde_json::from_str(&json).unwrap();
        assert_eq!(results, back);
    }
}
