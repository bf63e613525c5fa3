// src/output.rs
// =============================================================================
// Writes one plain-text file per year: one login per line, nothing else.
//
// Files are named "<run label>_<year>.txt", e.g.
// "handpicked_repos_1700000000000_2021.txt".
//
// Writing is best effort. A file that can't be written is logged and the
// other years are still written.
//
// Rust concepts:
// - Path vs PathBuf: borrowed vs owned file paths, like &str vs String
// - tokio::fs: file I/O that doesn't block the async runtime
// =============================================================================

use crate::config::RunLabel;
use crate::contributors::{ContributorSet, YearContributors};
use std::path::{Path, PathBuf};
use tracing::{debug, error, info};

pub fn year_file_name(label: &RunLabel, year: i32) -> String {
    format!("{}_{}.txt", label, year)
}

// Newline-joined logins, in first-seen order, without a trailing newline
pub fn render_contributors(set: &ContributorSet) -> String {
    // No header, no trailing metadata: just the logins
    set.iter().collect::<Vec<_>>().join("\n")
}

// Writes a file for every year in `contributors`, including empty ones
//
// Returns: the paths that were written successfully
pub async fn write_year_files(
    dir: &Path,
    label: &RunLabel,
    contributors: &YearContributors,
) -> Vec<PathBuf> {
    let mut written = Vec::new();

    // BTreeMap iteration goes through the years in ascending order
    for (year, set) in contributors {
        if set.is_empty() {
            debug!("No contributors found for {}", year);
        }

        let path = dir.join(year_file_name(label, *year));
        match tokio::fs::write(&path, render_contributors(set)).await {
            Ok(()) => {
                info!(
                    "{} saved {} contributor(s) to {}",
                    year,
                    set.len(),
                    path.display()
                );
                written.push(path);
            }
            // Log and move on to the next year
            Err(e) => error!("Could not write {}: {}", path.display(), e),
        }
    }

    written
}
