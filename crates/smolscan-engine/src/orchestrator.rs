//! Scan orchestration - runs the probe battery and owns the result set
//!
//! Probes execute concurrently, each under its own deadline, but their
//! findings are appended in probe registration order so that reports are
//! reproducible given identical probe outputs. A failing or timed-out probe
//! contributes an Info finding and never prevents the others from running.

use smolscan_core::{Error, Finding, Probe, Result, ScanResults, ScanTarget};
use std::sync::Arc;
use tokio::time::timeout;
use tracing::{debug, info, warn};

/// Owns the scan lifecycle: spawn probes, enforce deadlines, collect
/// findings into one [`ScanResults`].
pub struct Orchestrator {
    probes: Vec<Arc<dyn Probe>>,
}

impl Orchestrator {
    pub fn new(probes: Vec<Arc<dyn Probe>>) -> Self {
        Self { probes }
    }

    /// Number of registered probes
    pub fn probe_count(&self) -> usize {
        self.probes.len()
    }

    /// Run every probe against the target.
    ///
    /// Probe-level failures and timeouts are recovered into Info findings.
    /// A panicking probe is a bug in the scanner itself and propagates as
    /// `Error::Internal`.
    pub async fn run(&self, target: &ScanTarget) -> Result<ScanResults> {
        let deadline = target.probe_timeout();
        info!(
            "scanning {} with {} probes (deadline {:?} each)",
            target,
            self.probes.len(),
            deadline
        );

        let mut handles = Vec::with_capacity(self.probes.len());
        for probe in &self.probes {
            let probe = Arc::clone(probe);
            let target = target.clone();
            let name = probe.name();
            let category = probe.category();

            let handle = tokio::spawn(async move {
                timeout(deadline, probe.run(&target, deadline)).await
            });
            handles.push((name, category, handle));
        }

        // Await in registration order; appends are serialized here, so no
        // finding is lost or interleaved regardless of completion order.
        let mut results = ScanResults::new();
        for (name, category, handle) in handles {
            match handle.await {
                Ok(Ok(Ok(findings))) => {
                    debug!("probe '{}' returned {} findings", name, findings.len());
                    results.extend(findings);
                }
                Ok(Ok(Err(e))) => {
                    warn!("probe '{}' failed: {}", name, e);
                    results.push(Finding::info(
                        category,
                        format!("Probe '{}' failed: {}", name, e),
                    ));
                }
                Ok(Err(_elapsed)) => {
                    warn!("probe '{}' exceeded its deadline", name);
                    results.push(Finding::info(
                        category,
                        format!("Probe '{}' timed out after {:?}", name, deadline),
                    ));
                }
                Err(e) => {
                    return Err(Error::Internal(format!("probe '{}' panicked: {}", name, e)));
                }
            }
        }

        info!(
            "scan of {} complete: {} findings ({} vulnerabilities, {} warnings)",
            target,
            results.len(),
            results.vulnerabilities.len(),
            results.warnings.len()
        );
        Ok(results)
    }
}
