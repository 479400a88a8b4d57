//! Greypot CLI entry point.
//!
//! This binary is the composition root. Responsibilities:
//!
//! 1. **Parse arguments** with `clap`, including environment fallbacks.
//! 2. **Load configuration** from `greypot.toml` (or `--config`) and layer the
//!    command-line overrides on top.
//! 3. **Wire observability**: `tracing-subscriber` with a human or JSON layer,
//!    plus an OpenTelemetry OTLP exporter when one is configured.
//! 4. **Construct infrastructure**: one [`studio_client::StudioClient`] per
//!    run, built from an explicit config.
//! 5. **Run** a single generation and report the outcome on stdout.

mod config;
mod error;
mod observability;
mod run;

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use studio_client::StudioClient;
use tracing::debug;

use crate::config::{CliConfig, FileConfig};
use crate::run::{GenerationPlan, DEFAULT_OUTPUT_FILE};

/// Render a template on a Greypot Studio service and save the generated PDF.
#[derive(Parser, Debug)]
#[command(name = "greypot")]
#[command(version)]
struct Args {
    /// Template file to render (e.g. an HTML file)
    template: PathBuf,

    /// Template name sent to the service; defaults to the template's file name
    #[arg(short, long)]
    name: Option<String>,

    /// JSON file with the data rendered into the template
    #[arg(short, long)]
    data: Option<PathBuf>,

    /// Where to save the generated document
    #[arg(short, long, default_value = DEFAULT_OUTPUT_FILE)]
    output: PathBuf,

    /// Configuration file (defaults to ./greypot.toml when present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Base address of the Greypot Studio API
    #[arg(long, env = "GREYPOT_API_URL")]
    api_url: Option<String>,

    /// Abort the generation call after this many seconds
    #[arg(long, env = "GREYPOT_TIMEOUT_SECS")]
    timeout_secs: Option<u64>,

    /// Emit logs as JSON lines
    #[arg(long)]
    log_json: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let telemetry = observability::init(args.log_json)?;

    let result = execute(args).await;

    telemetry.shutdown();
    result
}

async fn execute(args: Args) -> anyhow::Result<()> {
    let file = FileConfig::load(args.config.as_deref())?;
    let config = CliConfig::resolve(file, args.api_url, args.timeout_secs);
    debug!(api_url = %config.api_url, timeout = ?config.timeout, "Resolved configuration");

    let client = StudioClient::new(config.client_config())
        .with_context(|| format!("Failed to create client for {}", config.api_url))?;

    let plan = GenerationPlan {
        template_path: args.template,
        template_name: args.name,
        data_path: args.data,
        output_path: args.output,
    };

    let summary = run::run(&client, &plan).await?;
    debug!(bytes = summary.bytes, "Run complete");

    println!("Report ID: {}", summary.report_id);
    println!("Type: {}", summary.artifact_type);
    println!("PDF saved as {}", summary.output_path.display());
    Ok(())
}
