//! Configuration management for smolscan
//!
//! The dependency registry and permission path registry are configuration
//! data with built-in defaults: adding an entry requires no code change.

use serde::{Deserialize, Serialize};
use smolscan_core::{Error, Result};
use std::path::Path;
use std::time::Duration;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Scanner-wide settings
    #[serde(default)]
    pub scanner: ScannerConfig,

    /// External executables inventoried by the dependency probe
    #[serde(default = "default_dependency_registry")]
    pub dependencies: Vec<DependencyEntry>,

    /// Filesystem paths audited by the permission probe
    #[serde(default)]
    pub permissions: PermissionsConfig,

    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            scanner: ScannerConfig::default(),
            dependencies: default_dependency_registry(),
            permissions: PermissionsConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::Configuration(format!("Failed to read config file {:?}: {}", path, e))
        })?;
        Self::from_toml(&content)
    }

    /// Parse configuration from a TOML string
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content)
            .map_err(|e| Error::Configuration(format!("Failed to parse config: {}", e)))
    }

    /// Merge with environment variables (SMOLSCAN_ prefix)
    pub fn merge_env(mut self) -> Self {
        if let Ok(val) = std::env::var("SMOLSCAN_PROBE_TIMEOUT_SECONDS") {
            if let Ok(n) = val.parse() {
                self.scanner.probe_timeout_seconds = n;
            }
        }
        if let Ok(val) = std::env::var("SMOLSCAN_LOG_LEVEL") {
            self.logging.level = val;
        }
        if let Ok(val) = std::env::var("SMOLSCAN_LOG_FORMAT") {
            self.logging.format = val;
        }
        self
    }
}

/// Scanner-wide settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScannerConfig {
    /// Deadline applied to each probe, in seconds
    #[serde(default = "default_probe_timeout")]
    pub probe_timeout_seconds: u64,

    /// How long the signaling probe waits for a response to each payload,
    /// in seconds
    #[serde(default = "default_response_timeout")]
    pub response_timeout_seconds: u64,
}

fn default_probe_timeout() -> u64 {
    10
}

fn default_response_timeout() -> u64 {
    2
}

impl Default for ScannerConfig {
    fn default() -> Self {
        Self {
            probe_timeout_seconds: default_probe_timeout(),
            response_timeout_seconds: default_response_timeout(),
        }
    }
}

impl ScannerConfig {
    pub fn probe_timeout(&self) -> Duration {
        Duration::from_secs(self.probe_timeout_seconds)
    }

    pub fn response_timeout(&self) -> Duration {
        Duration::from_secs(self.response_timeout_seconds)
    }
}

/// One entry in the dependency registry: an executable name and the risk
/// it carries for a remote-desktop deployment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DependencyEntry {
    pub name: String,
    pub risk: String,
}

impl DependencyEntry {
    pub fn new(name: impl Into<String>, risk: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            risk: risk.into(),
        }
    }
}

fn default_dependency_registry() -> Vec<DependencyEntry> {
    [
        ("ffmpeg", "CVE database check needed"),
        ("xdotool", "Input injection vector"),
        ("ydotool", "Privilege escalation potential"),
        ("wl-clipboard", "Clipboard data leakage"),
        ("xclip", "X11 security context"),
    ]
    .into_iter()
    .map(|(name, risk)| DependencyEntry::new(name, risk))
    .collect()
}

/// Permission probe configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PermissionsConfig {
    /// Candidate paths; `~` expands to the user's home directory.
    /// Nonexistent paths are skipped.
    #[serde(default = "default_permission_paths")]
    pub paths: Vec<String>,
}

fn default_permission_paths() -> Vec<String> {
    vec![
        String::from("/opt/smoldesk/smoldesk"),
        String::from("/usr/bin/smoldesk"),
        String::from("/etc/smoldesk/"),
        String::from("~/.local/share/smoldesk/"),
    ]
}

impl Default for PermissionsConfig {
    fn default() -> Self {
        Self {
            paths: default_permission_paths(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log format (pretty, json, compact)
    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    String::from("info")
}

fn default_log_format() -> String {
    String::from("pretty")
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}
