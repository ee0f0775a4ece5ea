//! # Mosaic Quote Runner
//!
//! Prices one mosaic job from the command line.
//!
//! ## Usage
//! ```bash
//! # Quote a job file
//! cargo run -p mosaic-quote -- ./jobs/hallway.json
//!
//! # JSON report, with estimate details in the log
//! MOSAIC_OUTPUT=json MOSAIC_LOG=mosaic_core=debug cargo run -p mosaic-quote -- job.json
//! ```
//!
//! ## Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  QuoteConfig::load ──► QuoteJob::load ──► QuoteReport::for_job ──► stdout │
//! │   (env + args)          (serde_json)       (mosaic-core)                │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod config;
mod error;
mod job;

use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::{OutputFormat, QuoteConfig};
use crate::error::AppResult;
use crate::job::{QuoteJob, QuoteReport};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = QuoteConfig::load()?;

    // stdout carries the report only
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(&config.log_filter)?)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    info!(job_file = %config.job_file.display(), "Starting quote");

    let output = run(&config)?;
    println!("{output}");

    Ok(())
}

fn run(config: &QuoteConfig) -> AppResult<String> {
    let job = QuoteJob::load(&config.job_file)?;
    let report = QuoteReport::for_job(&job)?;

    info!(
        id = %report.id,
        company = %report.company,
        total = %report.breakdown.total,
        "Quote ready"
    );

    let rendered = match config.output {
        OutputFormat::Text => report.render_text(),
        OutputFormat::Json => serde_json::to_string_pretty(&report)?,
    };

    Ok(rendered)
}
