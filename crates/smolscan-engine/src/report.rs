//! Report rendering and artifact persistence
//!
//! Rendering is a pure projection of the results; nothing here mutates the
//! scan outcome. The artifact round-trips losslessly through JSON.

use crate::score::{RiskAssessment, RiskTier};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use smolscan_core::{Finding, Result, ScanResults, ScanTarget};
use std::fmt::Write as _;
use std::path::Path;
use uuid::Uuid;

const RULE: &str = "============================================================";

/// The persisted scan document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportArtifact {
    /// Unique ID of this scan run
    pub scan_id: Uuid,
    /// Target in "host:port" form
    pub target: String,
    /// When the scan finished
    pub completed_at: DateTime<Utc>,
    /// The four finding buckets
    pub results: ScanResults,
    /// Numeric risk score
    pub score: u32,
    /// Risk tier derived from the score
    pub tier: RiskTier,
}

impl ReportArtifact {
    pub fn new(target: &ScanTarget, results: ScanResults, assessment: RiskAssessment) -> Self {
        Self {
            scan_id: Uuid::new_v4(),
            target: target.to_string(),
            completed_at: Utc::now(),
            results,
            score: assessment.score,
            tier: assessment.tier,
        }
    }
}

/// Write the artifact as pretty-printed JSON
pub fn write_artifact(path: impl AsRef<Path>, artifact: &ReportArtifact) -> Result<()> {
    let json = serde_json::to_string_pretty(artifact)?;
    std::fs::write(path.as_ref(), json)?;
    Ok(())
}

/// Read an artifact back from disk
pub fn read_artifact(path: impl AsRef<Path>) -> Result<ReportArtifact> {
    let content = std::fs::read_to_string(path.as_ref())?;
    Ok(serde_json::from_str(&content)?)
}

/// Render the human-readable scan summary.
pub fn render_summary(results: &ScanResults, assessment: &RiskAssessment) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "{RULE}");
    let _ = writeln!(out, "  SMOLSCAN SECURITY SCAN RESULTS");
    let _ = writeln!(out, "{RULE}");

    if results.vulnerabilities.is_empty() {
        let _ = writeln!(out, "\nNo critical vulnerabilities found");
    } else {
        let _ = writeln!(out, "\nVULNERABILITIES FOUND:");
        for finding in &results.vulnerabilities {
            render_finding(&mut out, "!!", finding, true);
        }
    }

    if !results.warnings.is_empty() {
        let _ = writeln!(out, "\nWARNINGS:");
        for finding in &results.warnings {
            render_finding(&mut out, " -", finding, false);
        }
    }

    if !results.info.is_empty() {
        let _ = writeln!(out, "\nINFORMATIONAL:");
        for finding in &results.info {
            render_finding(&mut out, " i", finding, false);
        }
    }

    if !results.passed.is_empty() {
        let _ = writeln!(out, "\nPASSED CHECKS:");
        for finding in &results.passed {
            render_finding(&mut out, "ok", finding, false);
        }
    }

    let _ = writeln!(out, "\nRISK SCORE: {}", assessment.score);
    let _ = writeln!(out, "  {}", assessment.tier);

    let _ = writeln!(out, "\nRECOMMENDATIONS:");
    if !results.vulnerabilities.is_empty() {
        let _ = writeln!(out, "  1. Address all critical vulnerabilities immediately");
    }
    if !results.warnings.is_empty() {
        let _ = writeln!(out, "  2. Review and mitigate warnings where possible");
    }
    let _ = writeln!(out, "  3. Run this scan regularly as part of CI/CD");
    let _ = writeln!(out, "  4. Consider professional penetration testing");
    let _ = writeln!(out, "  5. Keep all dependencies updated");

    let _ = writeln!(out, "\n{RULE}");
    out
}

/// Render one finding line, optionally with its evidence entries
fn render_finding(out: &mut String, marker: &str, finding: &Finding, with_evidence: bool) {
    let _ = writeln!(
        out,
        "  [{marker}] {}: {}",
        finding.category, finding.description
    );
    if with_evidence {
        for (key, value) in &finding.evidence {
            let _ = writeln!(out, "       {key}: {value}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::score::assess;
    use smolscan_core::Category;

    fn sample_results() -> ScanResults {
        let mut results = ScanResults::new();
        results.push(
            Finding::vulnerability(Category::FilePermissions, "File has overly permissive permissions")
                .with_evidence("file", "/opt/smoldesk/smoldesk")
                .with_evidence("permissions", "777"),
        );
        results.push(Finding::warning(
            Category::Network,
            "Could not connect to signaling server: refused",
        ));
        results.push(Finding::info(Category::Dependency, "ffmpeg: Not found"));
        results.push(Finding::passed(
            Category::TlsConfiguration,
            "TLS version: 1.2 or newer",
        ));
        results
    }

    #[test]
    fn test_summary_contains_all_sections() {
        let results = sample_results();
        let assessment = assess(&results);
        let summary = render_summary(&results, &assessment);

        assert!(summary.contains("VULNERABILITIES FOUND:"));
        assert!(summary.contains("WARNINGS:"));
        assert!(summary.contains("INFORMATIONAL:"));
        assert!(summary.contains("PASSED CHECKS:"));
        assert!(summary.contains("RISK SCORE: 13"));
        assert!(summary.contains("MEDIUM RISK"));
        assert!(summary.contains("RECOMMENDATIONS:"));
        // Vulnerability evidence is rendered
        assert!(summary.contains("file: /opt/smoldesk/smoldesk"));
        assert!(summary.contains("permissions: 777"));
    }

    #[test]
    fn test_clean_summary_reports_no_vulnerabilities() {
        let results = ScanResults::new();
        let assessment = assess(&results);
        let summary = render_summary(&results, &assessment);

        assert!(summary.contains("No critical vulnerabilities found"));
        assert!(summary.contains("LOW RISK"));
        assert!(!summary.contains("1. Address all critical vulnerabilities"));
    }

    #[test]
    fn test_rendering_does_not_mutate_results() {
        let results = sample_results();
        let snapshot = results.clone();
        let _ = render_summary(&results, &assess(&results));
        assert_eq!(results, snapshot);
    }

    #[test]
    fn test_artifact_roundtrip() {
        let target = ScanTarget::new("localhost", 3000).unwrap();
        let results = sample_results();
        let assessment = assess(&results);
        let artifact = ReportArtifact::new(&target, results, assessment);

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.json");

        write_artifact(&path, &artifact).unwrap();
        let back = read_artifact(&path).unwrap();

        assert_eq!(artifact, back);
    }

    #[test]
    fn test_artifact_json_roundtrip_in_memory() {
        let target = ScanTarget::new("localhost", 3000).unwrap();
        let results = sample_results();
        let artifact = ReportArtifact::new(&target, results, assess(&sample_results()));

        let json = serde_json::to_string(&artifact).unwrap();
        let back: ReportArtifact = serde_json::from_str(&json).unwrap();
        assert_eq!(artifact, back);
    }
}
