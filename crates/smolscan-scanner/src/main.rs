//! smolscan - security scanner for self-hosted remote-desktop deployments
//!
//! Runs the full probe battery against a target host/port, prints a scored
//! summary, and optionally persists the structured report.
//!
//! Exit contract: a completed scan exits 0 even when vulnerabilities were
//! found (finding problems is the tool working, not failing). Configuration
//! errors and internal faults exit non-zero; Ctrl-C prints a distinct
//! message and exits non-zero.

use anyhow::Result;
use clap::Parser;
use smolscan_common::{logging, Config};
use smolscan_core::ScanTarget;
use smolscan_engine::{assess, render_summary, write_artifact, Orchestrator, ReportArtifact};
use smolscan_probes::default_probes;
use std::path::PathBuf;
use tracing::info;

/// smolscan security scanner
#[derive(Parser, Debug)]
#[command(name = "smolscan")]
#[command(version)]
#[command(about = "Security scanner for self-hosted remote-desktop deployments", long_about = None)]
struct Args {
    /// Target host
    #[arg(long, default_value = "localhost")]
    host: String,

    /// Target port
    #[arg(long, default_value_t = 3000, value_parser = clap::value_parser!(u16).range(1..))]
    port: u16,

    /// Write the structured report to this path
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Configuration file path
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Log format (pretty, json, compact)
    #[arg(long, default_value = "pretty")]
    log_format: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let log_config = logging::LogConfig::new()
        .level(&args.log_level)
        .format(logging::LogFormat::parse(&args.log_format));
    logging::init_logging_with_config(log_config);

    // Configuration problems are fatal before any probe runs
    let config = match &args.config {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };
    let config = config.merge_env();

    let target = ScanTarget::new(args.host, args.port)?
        .with_probe_timeout(config.scanner.probe_timeout());

    info!("starting scan of {}", target);
    let orchestrator = Orchestrator::new(default_probes(&config));

    let results = tokio::select! {
        results = orchestrator.run(&target) => results?,
        _ = tokio::signal::ctrl_c() => {
            eprintln!("\nScan interrupted by user");
            std::process::exit(1);
        }
    };

    let assessment = assess(&results);
    print!("{}", render_summary(&results, &assessment));

    if let Some(path) = &args.output {
        let artifact = ReportArtifact::new(&target, results, assessment);
        write_artifact(path, &artifact)?;
        println!("\nResults saved to {}", path.display());
    }

    // Finding vulnerabilities is a successful scan, not a process failure
    Ok(())
}
