//! End-to-end scan against an unreachable target: every probe must recover
//! into Info/Warning findings, and the score must reflect warnings only.

use smolscan_common::Config;
use smolscan_core::{ScanTarget, Severity};
use smolscan_engine::{assess, render_summary, Orchestrator, RiskTier};
use smolscan_probes::default_probes;
use std::time::Duration;
use tokio::net::TcpListener;

/// Reserve a port with nothing listening on it.
async fn refused_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    port
}

#[tokio::test]
async fn scan_of_unreachable_host_yields_no_vulnerabilities() {
    let mut config = Config::default();
    // Keep the run fast: nothing will answer anyway
    config.scanner.response_timeout_seconds = 1;
    // Avoid touching real system paths in the test environment
    config.permissions.paths = vec![String::from("/nonexistent/smolscan/e2e")];

    let port = refused_port().await;
    let target = ScanTarget::new("127.0.0.1", port)
        .unwrap()
        .with_probe_timeout(Duration::from_secs(8));

    let orchestrator = Orchestrator::new(default_probes(&config));
    let results = orchestrator.run(&target).await.unwrap();

    // Nothing reachable means nothing exploitable was observed
    assert!(results.vulnerabilities.is_empty());
    assert!(results.passed.is_empty());

    // The signaling probe records the unreachable endpoint as a warning
    assert!(results
        .warnings
        .iter()
        .any(|f| f.description.contains("Could not connect")));

    // Every finding is Info or Warning
    assert!(results
        .iter()
        .all(|f| matches!(f.severity, Severity::Info | Severity::Warning)));

    // Score reflects warnings only
    let assessment = assess(&results);
    assert_eq!(assessment.score, 3 * results.warnings.len() as u32);
    if results.warnings.len() == 1 {
        assert_eq!(assessment.tier, RiskTier::Medium);
    }

    // And the whole thing renders
    let summary = render_summary(&results, &assessment);
    assert!(summary.contains("No critical vulnerabilities found"));
    assert!(summary.contains(&format!("RISK SCORE: {}", assessment.score)));
}
