//! Probe trait - the interface all security probes implement

use crate::error::Result;
use crate::finding::Finding;
use crate::severity::Category;
use crate::target::ScanTarget;
use async_trait::async_trait;
use std::time::Duration;

/// Result of executing a probe: zero or more findings.
///
/// Expected failure conditions (connection refused, command not found,
/// unreadable path) are handled inside the probe and reported as findings;
/// an `Err` reaching the orchestrator is recorded as an Info finding and
/// never aborts the scan.
pub type ProbeResult = Result<Vec<Finding>>;

/// The trait that all security probes implement.
///
/// Contract:
/// - never panic; convert expected failures into findings
/// - bound every blocking operation (connect, read, subprocess, stat) so
///   that `deadline` is respected
/// - observe only; no destructive action against the target
#[async_trait]
pub trait Probe: Send + Sync {
    /// Short name used in logs and failure findings
    fn name(&self) -> &'static str;

    /// Category attributed to findings about the probe itself
    /// (timeouts, unexpected failures)
    fn category(&self) -> Category;

    /// Execute the probe against the target.
    ///
    /// `deadline` is the total time budget for this probe; the orchestrator
    /// additionally enforces it from the outside.
    async fn run(&self, target: &ScanTarget, deadline: Duration) -> ProbeResult;
}
