//! smolscan Common - configuration and logging shared by all components

pub mod config;
pub mod logging;

pub use config::{Config, DependencyEntry};
pub use logging::{init_logging, init_logging_with_config, LogConfig, LogFormat};
