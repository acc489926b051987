//! Authentication probe - informational only
//!
//! Authenticated testing is out of scope; this probe records that the
//! authentication surface needs a running instance to assess.

use async_trait::async_trait;
use smolscan_core::{Category, Finding, Probe, ProbeResult, ScanTarget};
use std::time::Duration;

/// Static weak-credential fixture set.
// TODO: exercise the target's login endpoint with these once the signaling
// server exposes an authentication handshake to test against.
pub const WEAK_PASSWORD_FIXTURES: &[&str] = &[
    "password",
    "123456",
    "admin",
    "smoldesk",
    "password123",
    "qwerty",
    "",
    "test",
];

/// Notes the untested authentication surface.
pub struct AuthProbe;

#[async_trait]
impl Probe for AuthProbe {
    fn name(&self) -> &'static str {
        "auth"
    }

    fn category(&self) -> Category {
        Category::Authentication
    }

    async fn run(&self, _target: &ScanTarget, _deadline: Duration) -> ProbeResult {
        Ok(vec![Finding::info(
            Category::Authentication,
            "Authentication testing requires a running instance",
        )])
    }
}
