//! Signaling protocol probe - adversarial payloads against the WebSocket
//! signaling endpoint
//!
//! A payload that elicits no response within the response window records
//! nothing: silence is treated as implicit rejection, not as acceptance.
//! This avoids false positives on fire-and-forget protocols, at the cost of
//! missing servers that accept input without ever replying. Known
//! limitation, kept deliberately.

use async_trait::async_trait;
use futures_util::{SinkExt, StreamExt};
use smolscan_core::{Category, Finding, Probe, ProbeResult, ScanTarget};
use std::time::Duration;
use tokio::net::TcpStream;
use tokio::time::timeout;
use tokio_tungstenite::tungstenite::Message;
use tokio_tungstenite::{connect_async, MaybeTlsStream, WebSocketStream};
use tracing::{debug, trace};

type WsStream = WebSocketStream<MaybeTlsStream<TcpStream>>;

/// The fixed, ordered adversarial payload set.
///
/// Each entry is (label, payload). Order matters for report stability.
fn payloads() -> Vec<(&'static str, String)> {
    vec![
        (
            "path traversal room id",
            r#"{"type": "create-room", "roomId": "../../../etc/passwd"}"#.to_string(),
        ),
        (
            "script injection room id",
            r#"{"type": "join-room", "roomId": "<script>alert(1)</script>"}"#.to_string(),
        ),
        (
            "oversized type field",
            format!(r#"{{"type": "{}"}}"#, "A".repeat(10_000)),
        ),
        ("null type", r#"{"type": null}"#.to_string()),
        ("malformed json", "not-json-data".to_string()),
    ]
}

/// Probes the target's signaling endpoint with malformed and malicious
/// messages over a single WebSocket connection.
pub struct SignalingProbe {
    connect_timeout: Duration,
    response_timeout: Duration,
}

impl SignalingProbe {
    pub fn new() -> Self {
        Self {
            connect_timeout: Duration::from_secs(5),
            response_timeout: Duration::from_secs(2),
        }
    }

    /// Set how long to wait for a response to each payload
    pub fn with_response_timeout(mut self, timeout: Duration) -> Self {
        self.response_timeout = timeout;
        self
    }

    /// Wait for the next data frame, skipping control frames.
    ///
    /// Returns `None` on timeout, close, or transport error.
    async fn await_response(&self, ws: &mut WsStream) -> Option<String> {
        let wait = timeout(self.response_timeout, async {
            loop {
                match ws.next().await {
                    Some(Ok(Message::Text(text))) => return Some(text),
                    Some(Ok(Message::Binary(data))) => {
                        return Some(String::from_utf8_lossy(&data).into_owned())
                    }
                    Some(Ok(Message::Ping(_) | Message::Pong(_) | Message::Frame(_))) => continue,
                    Some(Ok(Message::Close(_))) | Some(Err(_)) | None => return None,
                }
            }
        })
        .await;

        wait.unwrap_or(None)
    }
}

impl Default for SignalingProbe {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Probe for SignalingProbe {
    fn name(&self) -> &'static str {
        "signaling"
    }

    fn category(&self) -> Category {
        Category::InputValidation
    }

    async fn run(&self, target: &ScanTarget, deadline: Duration) -> ProbeResult {
        let url = target.ws_url();
        let mut findings = Vec::new();

        debug!("connecting to signaling endpoint {}", url);
        let connect_window = self.connect_timeout.min(deadline);
        let mut ws = match timeout(connect_window, connect_async(url.as_str())).await {
            Ok(Ok((ws, _response))) => ws,
            Ok(Err(e)) => {
                findings.push(
                    Finding::warning(
                        Category::Network,
                        format!("Could not connect to signaling server: {e}"),
                    )
                    .with_evidence("endpoint", url),
                );
                return Ok(findings);
            }
            Err(_) => {
                findings.push(
                    Finding::warning(
                        Category::Network,
                        "Could not connect to signaling server: connection attempt timed out",
                    )
                    .with_evidence("endpoint", url),
                );
                return Ok(findings);
            }
        };

        findings.push(Finding::passed(
            Category::Network,
            "WebSocket connection established successfully",
        ));

        for (label, payload) in payloads() {
            trace!("sending payload: {}", label);
            if let Err(e) = ws.send(Message::text(payload.clone())).await {
                findings.push(Finding::info(
                    Category::InputValidation,
                    format!("Signaling connection closed during probe: {e}"),
                ));
                break;
            }

            if let Some(response) = self.await_response(&mut ws).await {
                // A reply that does not signal an error means the server
                // accepted the payload.
                if !response.to_lowercase().contains("error") {
                    findings.push(
                        Finding::vulnerability(
                            Category::InputValidation,
                            "Server accepts malicious input without proper validation",
                        )
                        .with_evidence("probe", label)
                        .with_evidence("payload", payload)
                        .with_evidence("response", response),
                    );
                }
            }
        }

        let _ = ws.close(None).await;
        Ok(findings)
    }
}
