//! Network/TLS probe - HTTPS reachability and negotiated protocol floor
//!
//! Scanner posture: reachability and protocol version are tested, trust is
//! not, so certificate verification is disabled throughout. native-tls does
//! not expose the negotiated protocol version directly; the floor is
//! determined behaviorally instead, by offering handshakes with explicit
//! version bounds and observing which the server accepts.

use async_trait::async_trait;
use native_tls::Protocol;
use smolscan_core::{Category, Error, Finding, Probe, ProbeResult, ScanTarget};
use std::time::Duration;
use tokio::net::TcpStream;
use tokio::time::timeout;
use tokio_native_tls::TlsConnector;
use tracing::debug;

/// Version bound offered during a handshake attempt
#[derive(Debug, Clone, Copy)]
enum HandshakeBound {
    /// Cap the handshake at TLS 1.1; success means the server still speaks
    /// a deprecated protocol
    MaxTls11,
    /// Require at least TLS 1.2
    MinTls12,
}

/// Probes HTTPS reachability and the TLS protocol floor of the target.
pub struct TlsProbe {
    http_timeout: Duration,
    handshake_timeout: Duration,
}

impl TlsProbe {
    pub fn new() -> Self {
        Self {
            http_timeout: Duration::from_secs(5),
            handshake_timeout: Duration::from_secs(5),
        }
    }

    /// Attempt one bounded TLS handshake against the target.
    async fn handshake(
        &self,
        target: &ScanTarget,
        bound: HandshakeBound,
        window: Duration,
    ) -> smolscan_core::Result<()> {
        let mut builder = native_tls::TlsConnector::builder();
        builder
            .danger_accept_invalid_certs(true)
            .danger_accept_invalid_hostnames(true);
        match bound {
            HandshakeBound::MaxTls11 => {
                builder.max_protocol_version(Some(Protocol::Tlsv11));
            }
            HandshakeBound::MinTls12 => {
                builder.min_protocol_version(Some(Protocol::Tlsv12));
            }
        }
        let connector = builder
            .build()
            .map_err(|e| Error::Internal(format!("failed to build TLS connector: {e}")))?;
        let connector = TlsConnector::from(connector);

        let addr = target.addr();
        let stream = timeout(window, TcpStream::connect(&addr))
            .await
            .map_err(|_| Error::ConnectionFailed {
                target: addr.clone(),
                reason: "connect timed out".into(),
            })?
            .map_err(|e| Error::ConnectionFailed {
                target: addr.clone(),
                reason: e.to_string(),
            })?;

        timeout(window, connector.connect(target.host(), stream))
            .await
            .map_err(|_| Error::ConnectionFailed {
                target: addr.clone(),
                reason: "handshake timed out".into(),
            })?
            .map_err(|e| Error::ConnectionFailed {
                target: addr,
                reason: e.to_string(),
            })?;

        Ok(())
    }
}

impl Default for TlsProbe {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Probe for TlsProbe {
    fn name(&self) -> &'static str {
        "tls"
    }

    fn category(&self) -> Category {
        Category::TlsConfiguration
    }

    async fn run(&self, target: &ScanTarget, deadline: Duration) -> ProbeResult {
        let mut findings = Vec::new();
        let url = target.https_url();

        let client = reqwest::Client::builder()
            // Reachability test, not a trust test
            .danger_accept_invalid_certs(true)
            .timeout(self.http_timeout.min(deadline))
            .build()
            .map_err(|e| Error::Internal(format!("failed to build HTTP client: {e}")))?;

        debug!("requesting {}", url);
        match client.get(&url).send().await {
            Ok(response) => {
                if response.status().is_success() {
                    findings.push(
                        Finding::warning(
                            Category::TlsConfiguration,
                            "HTTPS endpoint responds but certificate not verified",
                        )
                        .with_evidence("endpoint", &url)
                        .with_evidence("status", response.status().as_str()),
                    );
                }
            }
            Err(_) => {
                findings.push(
                    Finding::info(Category::TlsConfiguration, "No HTTPS endpoint found")
                        .with_evidence("endpoint", url),
                );
                return Ok(findings);
            }
        }

        let window = self.handshake_timeout.min(deadline);
        match self.handshake(target, HandshakeBound::MaxTls11, window).await {
            Ok(()) => {
                findings.push(
                    Finding::vulnerability(Category::TlsConfiguration, "Weak TLS version in use")
                        .with_evidence("protocol", "TLS 1.1 or lower accepted"),
                );
            }
            Err(_) => match self.handshake(target, HandshakeBound::MinTls12, window).await {
                Ok(()) => {
                    findings.push(
                        Finding::passed(Category::TlsConfiguration, "TLS version: 1.2 or newer")
                            .with_evidence("protocol", "TLS 1.2+"),
                    );
                }
                Err(e) => {
                    findings.push(Finding::info(
                        Category::TlsConfiguration,
                        format!("TLS scan failed: {e}"),
                    ));
                }
            },
        }

        Ok(findings)
    }
}
