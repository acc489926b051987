//! smolscan Engine - scan orchestration, risk scoring, and reporting

pub mod orchestrator;
pub mod report;
pub mod score;

pub use orchestrator::Orchestrator;
pub use report::{read_artifact, render_summary, write_artifact, ReportArtifact};
pub use score::{assess, RiskAssessment, RiskTier};
