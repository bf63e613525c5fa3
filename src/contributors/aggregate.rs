// src/contributors/aggregate.rs
// =============================================================================
// This module walks every (repository, year) pair and records who committed.
//
// How it works:
// 1. For each repository (outer loop), for each year (inner loop)
// 2. Make sure the year has a set, even if the fetch below fails
// 3. List that year's commits in that repository
// 4. Add each commit's author login to the year's set
//
// Pairs are handled one at a time, never concurrently. That keeps us gentle
// on GitHub's rate limits and keeps the logs readable.
//
// When a pair fails, the error is logged and we move on to the next pair.
// Whatever was collected for other pairs stays, so a year can end up
// undercounted but the run still finishes.
//
// Rust concepts:
// - &mut borrowing: the caller owns the map, we only fill it in
// - Option chaining: commits without a login are skipped with `if let`
// =============================================================================

use super::set::{ContributorSet, YearContributors};
use crate::github::{list_commits_in_year, CommitRecord, GithubApi};
use tracing::{debug, error};

// What happened during one aggregation pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AggregationSummary {
    /// (repository, year) pairs attempted
    pub units: usize,
    /// pairs whose commits could not be listed
    pub failed_units: usize,
    /// commit records read, attributed or not
    pub commits: usize,
}

// Adds the author of every attributed commit to `set`
//
// Returns: how many logins were new to the set
pub fn record_commits(set: &mut ContributorSet, commits: &[CommitRecord]) -> usize {
    let mut added = 0;
    for commit in commits {
        // Bots, merge commits and unlinked emails have no login; skip them
        if let Some(login) = commit.author_login() {
            if set.insert(login) {
                added += 1;
            }
        }
    }
    added
}

// Collects contributors for every repository × year into `contributors`
//
// Parameters:
//   api: GitHub API to read from
//   org: organization owning the repositories
//   repos: repositories to scan
//   years: calendar years to scan
//   per_page: page size for the commit listings
//   contributors: the map to fill in
pub async fn collect_contributors<A: GithubApi>(
    api: &A,
    org: &str,
    repos: &[String],
    years: &[i32],
    per_page: u32,
    contributors: &mut YearContributors,
) -> AggregationSummary {
    let mut summary = AggregationSummary::default();

    // Repositories outer, years inner, one request chain at a time
    for repo in repos {
        for &year in years {
            summary.units += 1;

            // Create the year's set up front so a failed pair still leaves
            // an (empty) entry behind
            let set = contributors.entry(year).or_default();

            match list_commits_in_year(api, org, repo, year, per_page).await {
                Ok(commits) => {
                    summary.commits += commits.len();
                    // Plain synchronous inserts; nothing here needs to be async
                    let added = record_commits(set, &commits);
                    debug!(
                        "{}/{} {}: {} commit(s), {} new contributor(s)",
                        org,
                        repo,
                        year,
                        commits.len(),
                        added
                    );
                }
                Err(e) => {
                    // Only this pair is lost; keep going with the next one
                    summary.failed_units += 1;
                    error!("Skipping {}/{} for {}: {}", org, repo, year, e);
                }
            }
        }
    }

    summary
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. What does `contributors.entry(year).or_default()` do?
//    - Looks up the year, inserting an empty ContributorSet if it's missing
//    - Returns a &mut to the set either way, in a single lookup
//
// 2. Why `for &year in years`?
//    - Iterating a &[i32] yields &i32; the `&year` pattern copies the i32 out
//
// 3. Why doesn't this function return a Result?
//    - Every error is handled right here, per pair, so there's nothing left
//      for the caller to handle
// -----------------------------------------------------------------------------
