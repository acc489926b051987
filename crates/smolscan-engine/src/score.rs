//! Risk scoring - pure mapping from scan results to a score and tier

use serde::{Deserialize, Serialize};
use smolscan_core::ScanResults;

/// Score contribution of one vulnerability finding
pub const VULNERABILITY_WEIGHT: u32 = 10;
/// Score contribution of one warning finding
pub const WARNING_WEIGHT: u32 = 3;
/// Scores at or above this are high risk
pub const HIGH_RISK_THRESHOLD: u32 = 20;

/// Coarse risk classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskTier {
    Low,
    Medium,
    High,
}

impl RiskTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskTier::Low => "LOW RISK",
            RiskTier::Medium => "MEDIUM RISK",
            RiskTier::High => "HIGH RISK",
        }
    }
}

impl std::fmt::Display for RiskTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Numeric score plus its tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskAssessment {
    pub score: u32,
    pub tier: RiskTier,
}

/// Compute the risk assessment for a result set.
///
/// Pure and deterministic: only vulnerability and warning counts contribute;
/// Info and Passed findings never change the score.
pub fn assess(results: &ScanResults) -> RiskAssessment {
    let score = VULNERABILITY_WEIGHT * results.vulnerabilities.len() as u32
        + WARNING_WEIGHT * results.warnings.len() as u32;

    let tier = if score == 0 {
        RiskTier::Low
    } else if score < HIGH_RISK_THRESHOLD {
        RiskTier::Medium
    } else {
        RiskTier::High
    };

    RiskAssessment { score, tier }
}
