//! Scan target definition

use crate::error::{Error, Result};
use std::time::Duration;

/// Default per-probe deadline, used when the target carries no override.
pub const DEFAULT_PROBE_TIMEOUT: Duration = Duration::from_secs(10);

/// The host/port under assessment.
///
/// Validated at construction: an invalid target is a fatal configuration
/// error surfaced before any probe runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanTarget {
    host: String,
    port: u16,
    probe_timeout: Option<Duration>,
}

impl ScanTarget {
    /// Create a target, rejecting an empty host or port 0
    pub fn new(host: impl Into<String>, port: u16) -> Result<Self> {
        let host = host.into();
        if host.trim().is_empty() {
            return Err(Error::InvalidTarget("host must not be empty".into()));
        }
        if port == 0 {
            return Err(Error::InvalidTarget("port must be in 1-65535".into()));
        }
        Ok(Self {
            host,
            port,
            probe_timeout: None,
        })
    }

    /// Override the per-probe deadline
    pub fn with_probe_timeout(mut self, timeout: Duration) -> Self {
        self.probe_timeout = Some(timeout);
        self
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    /// Per-probe deadline: the override if set, the default otherwise
    pub fn probe_timeout(&self) -> Duration {
        self.probe_timeout.unwrap_or(DEFAULT_PROBE_TIMEOUT)
    }

    /// "host:port" form for socket connects
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// WebSocket URL of the signaling endpoint
    pub fn ws_url(&self) -> String {
        format!("ws://{}:{}", self.host, self.port)
    }

    /// HTTPS URL for reachability probing
    pub fn https_url(&self) -> String {
        format!("https://{}:{}", self.host, self.port)
    }
}

impl std::fmt::Display for ScanTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_target() {
        let target = ScanTarget::new("localhost", 3000).unwrap();
        assert_eq!(target.host(), "localhost");
        assert_eq!(target.port(), 3000);
        assert_eq!(target.addr(), "localhost:3000");
        assert_eq!(target.ws_url(), "ws://localhost:3000");
        assert_eq!(target.https_url(), "https://localhost:3000");
    }

    #[test]
    fn test_port_zero_rejected() {
        let err = ScanTarget::new("localhost", 0).unwrap_err();
        assert!(matches!(err, Error::InvalidTarget(_)));
        assert!(err.is_fatal());
    }

    #[test]
    fn test_empty_host_rejected() {
        assert!(ScanTarget::new("", 3000).is_err());
        assert!(ScanTarget::new("   ", 3000).is_err());
    }

    #[test]
    fn test_timeout_override() {
        let target = ScanTarget::new("localhost", 3000).unwrap();
        assert_eq!(target.probe_timeout(), DEFAULT_PROBE_TIMEOUT);

        let target = target.with_probe_timeout(Duration::from_secs(3));
        assert_eq!(target.probe_timeout(), Duration::from_secs(3));
    }
}
