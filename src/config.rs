// src/config.rs
// =============================================================================
// Turns the raw command-line/environment strings into a run configuration.
//
// - Years: comma-separated, kept only if they are numbers between 2010 and
//   the current year. Bad entries are dropped without an error.
// - Repositories: comma-separated and trimmed. An empty list means
//   "scan every repository in the organization".
// =============================================================================

use crate::cli::Cli;
use crate::github::clamp_per_page;
use std::fmt;
use std::path::PathBuf;
use tracing::debug;

// Nothing before this year is scanned
pub const MIN_YEAR: i32 = 2010;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
    // No repositories given, enumerate the whole organization
    All,
    // Only the repositories listed by the user
    Handpicked,
}

impl RunMode {
    pub fn as_str(self) -> &'static str {
        match self {
            RunMode::All => "all",
            RunMode::Handpicked => "handpicked",
        }
    }
}

// Ties the log lines and output files of one run together,
// e.g. "handpicked_repos_1700000000000"
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunLabel(String);

impl RunLabel {
    pub fn new(mode: RunMode, unix_millis: i64) -> Self {
        Self(format!("{}_repos_{}", mode.as_str(), unix_millis))
    }

    pub fn now(mode: RunMode) -> Self {
        Self::new(mode, chrono::Utc::now().timestamp_millis())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RunLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone)]
pub struct RunConfig {
    pub org: String,
    pub token: String,
    pub years: Vec<i32>,
    pub repositories: Vec<String>,
    pub api_url: String,
    pub output_dir: PathBuf,
    pub per_page: u32,
}

// Hand-written so the token never ends up in a log line
impl fmt::Debug for RunConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RunConfig")
            .field("org", &self.org)
            .field("token", &"<redacted>")
            .field("years", &self.years)
            .field("repositories", &self.repositories)
            .field("api_url", &self.api_url)
            .field("output_dir", &self.output_dir)
            .field("per_page", &self.per_page)
            .finish()
    }
}

impl RunConfig {
    pub fn from_cli(cli: Cli, current_year: i32) -> Self {
        Self {
            years: parse_years(&cli.years, current_year),
            repositories: parse_repositories(&cli.repositories),
            per_page: clamp_per_page(cli.per_page),
            org: cli.org,
            token: cli.token,
            api_url: cli.api_url,
            output_dir: cli.output_dir,
        }
    }

    pub fn mode(&self) -> RunMode {
        if self.repositories.is_empty() {
            RunMode::All
        } else {
            RunMode::Handpicked
        }
    }
}

pub fn is_valid_year(year: i32, current_year: i32) -> bool {
    (MIN_YEAR..=current_year).contains(&year)
}

// Parses "2021, 2022,abc,2099" into the valid years, first occurrence wins
//
// Example (current_year = 2024):
//   "2005,2021,notanumber,2099" -> [2021]
//   "2022,2021,2022"            -> [2022, 2021]
pub fn parse_years(input: &str, current_year: i32) -> Vec<i32> {
    let mut years = Vec::new();
    // Split on commas, trim spaces and skip empty entries like in "2021,,2022"
    for raw in input.split(',').map(str::trim).filter(|s| !s.is_empty()) {
        // The whole entry has to be an integer: "2021abc" is dropped
        match raw.parse::<i32>() {
            Ok(year) if is_valid_year(year, current_year) => {
                // A Vec keeps input order; the list is tiny so contains() is fine
                if !years.contains(&year) {
                    years.push(year);
                }
            }
            _ => debug!("Ignoring year '{}'", raw),
        }
    }
    years
}

// Parses " alpha, beta ,,gamma" into ["alpha", "beta", "gamma"]
pub fn parse_repositories(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|repo| !repo.is_empty())
        .map(str::to_string)
        .collect()
}
