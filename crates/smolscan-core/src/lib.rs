//! smolscan Core - Foundation types, traits, and error handling
//!
//! This crate provides the core abstractions used throughout smolscan:
//! - `ScanTarget`: the host/port under assessment
//! - `Finding`: a single security observation with bounded evidence
//! - `ScanResults`: the severity-bucketed accumulator for one scan run
//! - `Probe`: the trait every security probe implements
//! - `Severity`, `Category`: core enums

pub mod error;
pub mod finding;
pub mod probe;
pub mod results;
pub mod severity;
pub mod target;

// Re-export commonly used types at crate root
pub use error::{Error, Result};
pub use finding::{Finding, MAX_EVIDENCE_LEN};
pub use probe::{Probe, ProbeResult};
pub use results::ScanResults;
pub use severity::{Category, Severity};
pub use target::ScanTarget;
