// src/run.rs
// =============================================================================
// The run driver: decides which repositories to scan, then collects the
// contributors of every repository × year.
//
// In "all" mode the organization's repositories are listed first. If that
// listing fails there is nothing to scan, so the run stops with an error.
// Failures while listing commits only cost their own (repository, year).
//
// Rust concepts:
// - anyhow::Context: wraps an error with a message saying what we were doing
// - Generics: `A: GithubApi` lets tests run the driver against a fake API
// =============================================================================

use crate::config::{RunConfig, RunMode};
use crate::contributors::{collect_contributors, YearContributors};
use crate::github::{list_org_repositories, GithubApi};
use anyhow::{Context, Result};
use tracing::info;

// Runs the whole collection and hands back the per-year contributor sets
pub async fn execute<A: GithubApi>(api: &A, config: &RunConfig) -> Result<YearContributors> {
    // Step 1: work out which repositories to scan
    let repositories: Vec<String> = match config.mode() {
        // No list given: ask GitHub for every repository, before any commits
        RunMode::All => list_org_repositories(api, &config.org, config.per_page)
            .await
            .with_context(|| format!("failed to list repositories of {}", config.org))?
            .into_iter()
            .map(|repo| repo.name)
            .collect(),
        // A list was given: use it as-is
        RunMode::Handpicked => {
            info!("Working with handpicked repos: {}", config.repositories.join(","));
            config.repositories.clone()
        }
    };

    // Step 2: the map lives here and is lent to the aggregator to fill in
    let mut contributors = YearContributors::new();
    let summary = collect_contributors(
        api,
        &config.org,
        &repositories,
        &config.years,
        config.per_page,
        &mut contributors,
    )
    .await;

    // Step 3: one summary line, then hand the map back to the caller
    info!(
        "Scanned {} repo(s) × {} year(s) in {} unit(s): {} commit(s), {} failed",
        repositories.len(),
        config.years.len(),
        summary.units,
        summary.commits,
        summary.failed_units
    );

    Ok(contributors)
}
