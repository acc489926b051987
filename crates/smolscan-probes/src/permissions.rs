//! File permission probe - audits the access-mode bits of installed
//! binaries, config directories, and user data directories
//!
//! Classification is deliberately conservative: anything that is neither a
//! known-unsafe nor a known-safe pattern is flagged for human review.

use async_trait::async_trait;
use smolscan_core::{Category, Finding, Probe, ProbeResult, ScanTarget};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Modes equivalent to world-writable or group-writable-and-world-readable
const UNSAFE_MODES: [u32; 3] = [0o777, 0o776, 0o666];
/// Standard safe patterns for executables/directories and data files
const SAFE_MODES: [u32; 2] = [0o755, 0o644];

/// Audits the configured path registry.
pub struct PermissionProbe {
    paths: Vec<String>,
    stat_timeout: Duration,
}

impl PermissionProbe {
    pub fn new(paths: Vec<String>) -> Self {
        Self {
            paths,
            stat_timeout: Duration::from_secs(2),
        }
    }

    /// Classify one access mode into a finding
    fn classify(path: &Path, mode: u32) -> Finding {
        let octal = format!("{:03o}", mode);
        if UNSAFE_MODES.contains(&mode) {
            Finding::vulnerability(
                Category::FilePermissions,
                "File has overly permissive permissions",
            )
            .with_evidence("file", path.display().to_string())
            .with_evidence("permissions", octal)
        } else if SAFE_MODES.contains(&mode) {
            Finding::passed(
                Category::FilePermissions,
                format!("{}: Safe permissions ({})", path.display(), octal),
            )
        } else {
            Finding::warning(
                Category::FilePermissions,
                format!("{}: Unusual permissions ({})", path.display(), octal),
            )
            .with_evidence("file", path.display().to_string())
            .with_evidence("permissions", octal)
        }
    }

    #[cfg(unix)]
    async fn audit(&self, deadline: Duration) -> ProbeResult {
        use std::os::unix::fs::PermissionsExt;
        use tokio::time::timeout;
        use tracing::debug;

        let stat_window = self.stat_timeout.min(deadline);
        let mut findings = Vec::new();

        for raw in &self.paths {
            let path = expand_home(raw);
            debug!("inspecting {}", path.display());

            let metadata = match timeout(stat_window, tokio::fs::metadata(&path)).await {
                Ok(Ok(metadata)) => metadata,
                // Nonexistent paths are skipped without a finding
                Ok(Err(e)) if e.kind() == std::io::ErrorKind::NotFound => continue,
                Ok(Err(e)) => {
                    findings.push(
                        Finding::info(
                            Category::FilePermissions,
                            format!("{}: could not inspect ({})", path.display(), e),
                        )
                        .with_evidence("file", path.display().to_string()),
                    );
                    continue;
                }
                Err(_) => {
                    findings.push(
                        Finding::info(
                            Category::FilePermissions,
                            format!("{}: could not inspect (stat timed out)", path.display()),
                        )
                        .with_evidence("file", path.display().to_string()),
                    );
                    continue;
                }
            };

            let mode = metadata.permissions().mode() & 0o777;
            findings.push(Self::classify(&path, mode));
        }

        Ok(findings)
    }

    #[cfg(not(unix))]
    async fn audit(&self, _deadline: Duration) -> ProbeResult {
        Ok(vec![Finding::info(
            Category::FilePermissions,
            "File permission checks are only supported on unix targets",
        )])
    }
}

/// Expand a leading `~` to the user's home directory.
fn expand_home(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    } else if path == "~" {
        if let Some(home) = dirs::home_dir() {
            return home;
        }
    }
    PathBuf::from(path)
}

#[async_trait]
impl Probe for PermissionProbe {
    fn name(&self) -> &'static str {
        "permissions"
    }

    fn category(&self) -> Category {
        Category::FilePermissions
    }

    async fn run(&self, _target: &ScanTarget, deadline: Duration) -> ProbeResult {
        self.audit(deadline).await
    }
}
