//! Severity buckets and finding categories

use serde::{Deserialize, Serialize};

/// Reporting bucket for a finding.
///
/// Ordered ascending so that `Vulnerability` compares greatest. This is a
/// reporting order, not a total risk order: `Passed` and `Info` both carry
/// zero score weight.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Check ran and the target behaved safely
    Passed,
    /// Informational observation, no direct security impact
    #[default]
    Info,
    /// Suspicious or unverified behavior, worth human review
    Warning,
    /// Confirmed unsafe behavior
    Vulnerability,
}

impl Severity {
    /// Get numeric value for sorting/comparison
    pub fn as_number(&self) -> u8 {
        match self {
            Severity::Passed => 0,
            Severity::Info => 1,
            Severity::Warning => 2,
            Severity::Vulnerability => 3,
        }
    }

    /// Get display string
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Passed => "Passed",
            Severity::Info => "Info",
            Severity::Warning => "Warning",
            Severity::Vulnerability => "Vulnerability",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Security dimension a finding belongs to.
///
/// Category and severity are independent axes: any category can produce a
/// finding in any bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Malformed/malicious input handling on the signaling endpoint
    InputValidation,
    /// Filesystem access-mode auditing
    FilePermissions,
    /// TLS protocol and certificate posture
    TlsConfiguration,
    /// External executable inventory
    Dependency,
    /// Authentication surface
    Authentication,
    /// Reachability and transport-level observations
    Network,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::InputValidation => "Input Validation",
            Category::FilePermissions => "File Permissions",
            Category::TlsConfiguration => "TLS Configuration",
            Category::Dependency => "Dependency",
            Category::Authentication => "Authentication",
            Category::Network => "Network",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_ordering() {
        assert!(Severity::Vulnerability > Severity::Warning);
        assert!(Severity::Warning > Severity::Info);
        assert!(Severity::Info > Severity::Passed);
    }

    #[test]
    fn test_severity_serde_roundtrip() {
        let json = serde_json::to_string(&Severity::Vulnerability).unwrap();
        assert_eq!(json, "\"vulnerability\"");
        let back: Severity = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Severity::Vulnerability);
    }

    #[test]
    fn test_category_display() {
        assert_eq!(Category::InputValidation.to_string(), "Input Validation");
        assert_eq!(Category::TlsConfiguration.to_string(), "TLS Configuration");
    }
}
