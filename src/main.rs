// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Load a .env file from the working directory, if there is one
// 2. Set up logging (RUST_LOG overrides the default "info" level)
// 3. Parse command-line arguments / environment variables using clap
// 4. Collect the contributors of every repository × year
// 5. Write one file per year
//
// Errors are logged, never turned into a special exit code: a run either
// finishes or logs why it stopped.
//
// Rust concepts used:
// - async/await: network requests and file writes
// - Result<T, E> with anyhow: errors carry context as they bubble up
// - tracing spans: every log line of a run carries its label
// =============================================================================

// Module declarations - tells Rust about our other source files
mod cli; // src/cli.rs - command-line parsing
mod config; // src/config.rs - years, repositories and run labels
mod contributors; // src/contributors/ - per-year contributor sets
mod github; // src/github/ - GitHub API access and pagination
mod output; // src/output.rs - per-year text files
mod run; // src/run.rs - the run driver

use anyhow::{Context, Result};
use chrono::Datelike;
use clap::Parser; // Parser trait enables the parse() method
use cli::Cli;
use config::{RunConfig, RunLabel};
use github::GithubClient;
use tracing::{debug, error, info, info_span, Instrument};
use tracing_subscriber::EnvFilter;

// Requests are made one after another, so a single-threaded runtime is enough
#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Values from .env only fill in variables that aren't already set.
    // Loaded before tracing so a RUST_LOG in the file takes effect too.
    let dotenv = std::env::current_dir()
        .ok()
        .and_then(|dir| cli::load_dotenv(&dir));
    init_tracing();
    if let Some(path) = dotenv {
        debug!("Loaded environment from {}", path.display());
    }

    let cli = Cli::parse();
    let config = RunConfig::from_cli(cli, chrono::Local::now().year());
    let label = RunLabel::now(config.mode());

    let span = info_span!("run", label = %label);
    if let Err(e) = collect_and_write(&config, &label).instrument(span).await {
        // {:#} prints the whole context chain on one line
        error!("{:#}", e);
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

async fn collect_and_write(config: &RunConfig, label: &RunLabel) -> Result<()> {
    let client = GithubClient::new(&config.api_url, &config.token)
        .context("failed to set up the GitHub API client")?;

    let contributors = run::execute(&client, config).await?;
    info!("{}: Done... collecting all unique contributors per org", label);

    // Write failures are logged per file and never stop the run
    let written = output::write_year_files(&config.output_dir, label, &contributors).await;
    info!("Wrote {} of {} year file(s)", written.len(), contributors.len());
    Ok(())
}
