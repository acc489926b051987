//! Dependency inventory probe - version-queries the external executables a
//! remote-desktop deployment leans on
//!
//! Presence or absence of a tool is informational input for a human
//! reviewer, never an automated verdict, so every outcome here is an Info
//! finding.

use async_trait::async_trait;
use smolscan_common::DependencyEntry;
use smolscan_core::{Category, Finding, Probe, ProbeResult, ScanTarget};
use std::time::Duration;
use tokio::process::Command;
use tokio::time::timeout;
use tracing::debug;

/// Inventories the configured executable registry with `--version` calls.
pub struct DependencyProbe {
    registry: Vec<DependencyEntry>,
    exec_timeout: Duration,
}

impl DependencyProbe {
    pub fn new(registry: Vec<DependencyEntry>) -> Self {
        Self {
            registry,
            exec_timeout: Duration::from_secs(5),
        }
    }

    /// Set the per-invocation timeout
    pub fn with_exec_timeout(mut self, timeout: Duration) -> Self {
        self.exec_timeout = timeout;
        self
    }
}

#[async_trait]
impl Probe for DependencyProbe {
    fn name(&self) -> &'static str {
        "dependency"
    }

    fn category(&self) -> Category {
        Category::Dependency
    }

    async fn run(&self, _target: &ScanTarget, deadline: Duration) -> ProbeResult {
        let exec_window = self.exec_timeout.min(deadline);
        let mut findings = Vec::with_capacity(self.registry.len());

        for entry in &self.registry {
            debug!("querying {} --version", entry.name);
            let invocation = Command::new(&entry.name)
                .arg("--version")
                .kill_on_drop(true)
                .output();

            let finding = match timeout(exec_window, invocation).await {
                Ok(Ok(output)) if output.status.success() => {
                    let version = String::from_utf8_lossy(&output.stdout)
                        .lines()
                        .next()
                        .unwrap_or("")
                        .trim()
                        .to_string();
                    Finding::info(
                        Category::Dependency,
                        format!("{}: {} - Risk: {}", entry.name, version, entry.risk),
                    )
                    .with_evidence("command", &entry.name)
                    .with_evidence("version", version)
                }
                Ok(Ok(_)) => Finding::info(
                    Category::Dependency,
                    format!("{}: Not found", entry.name),
                )
                .with_evidence("command", &entry.name),
                // Spawn failure (missing executable) or timeout
                Ok(Err(_)) | Err(_) => Finding::info(
                    Category::Dependency,
                    format!("{}: Not available", entry.name),
                )
                .with_evidence("command", &entry.name),
            };
            findings.push(finding);
        }

        Ok(findings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use smolscan_core::Severity;

    fn target() -> ScanTarget {
        ScanTarget::new("localhost", 3000).unwrap()
    }

    #[tokio::test]
    async fn test_missing_executable_is_informational() {
        let probe = DependencyProbe::new(vec![DependencyEntry::new(
            "smolscan-test-no-such-binary",
            "test risk",
        )]);

        let findings = probe.run(&target(), Duration::from_secs(10)).await.unwrap();

        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].severity, Severity::Info);
        assert!(findings[0].description.contains("Not available"));
    }

    #[tokio::test]
    async fn test_present_executable_reports_version_and_risk() {
        // GNU echo accepts --version and exits zero
        let probe = DependencyProbe::new(vec![DependencyEntry::new("echo", "test risk")]);

        let findings = probe.run(&target(), Duration::from_secs(10)).await.unwrap();

        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].severity, Severity::Info);
        assert!(findings[0].description.contains("Risk: test risk"));
    }

    #[tokio::test]
    async fn test_one_finding_per_registry_entry() {
        let probe = DependencyProbe::new(vec![
            DependencyEntry::new("smolscan-test-missing-a", "a"),
            DependencyEntry::new("smolscan-test-missing-b", "b"),
            DependencyEntry::new("smolscan-test-missing-c", "c"),
        ]);

        let findings = probe.run(&target(), Duration::from_secs(10)).await.unwrap();
        assert_eq!(findings.len(), 3);
        assert!(findings.iter().all(|f| f.severity == Severity::Info));
    }
}
