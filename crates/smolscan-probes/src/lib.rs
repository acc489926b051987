//! smolscan Probes - the independent security checks run by the orchestrator
//!
//! Each probe tests one security dimension of the target and converts every
//! expected failure (connection refused, command not found, unreadable path)
//! into a finding instead of an error. See `smolscan_core::Probe` for the
//! full contract.

pub mod auth;
pub mod dependency;
pub mod permissions;
pub mod signaling;
pub mod tls;

pub use auth::AuthProbe;
pub use dependency::DependencyProbe;
pub use permissions::PermissionProbe;
pub use signaling::SignalingProbe;
pub use tls::TlsProbe;

use smolscan_common::Config;
use smolscan_core::Probe;
use std::sync::Arc;

/// The full probe battery, configured from `config`.
///
/// Registration order is fixed; the orchestrator reports findings in this
/// order, which keeps reports stable across runs.
pub fn default_probes(config: &Config) -> Vec<Arc<dyn Probe>> {
    vec![
        Arc::new(SignalingProbe::new().with_response_timeout(config.scanner.response_timeout())),
        Arc::new(DependencyProbe::new(config.dependencies.clone())),
        Arc::new(PermissionProbe::new(config.permissions.paths.clone())),
        Arc::new(TlsProbe::new()),
        Arc::new(AuthProbe),
    ]
}
