// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// Every option can also come from an environment variable (GITHUB_ORG,
// GITHUB_TOKEN, YEARS, REPOSITORIES, ...), so the tool runs the same way
// from a shell profile, a CI job or the command line.
//
// A `.env` file in the working directory is read first, so those variables
// can also be kept in a file. Variables already set in the environment win.
//
// The raw strings are parsed into years and repository names in config.rs.
//
// Rust concepts:
// - Structs: Custom data types that group related data
// - Derive macros: Automatically generate code for our types
// =============================================================================

use crate::github::{DEFAULT_API_URL, DEFAULT_PER_PAGE};
use clap::Parser;
use std::path::{Path, PathBuf};

// This struct represents our entire CLI application
//
// #[derive(Parser)] tells clap to automatically generate parsing code
// #[arg(env = ...)] lets an environment variable stand in for the flag
#[derive(Parser, Debug)]
#[command(
    name = "org-contributors",
    version,
    about = "List the contributors of a GitHub organization per calendar year",
    long_about = "org-contributors walks the commit history of an organization's repositories \
                  and writes one file per year with the login of everyone who committed in it."
)]
pub struct Cli {
    /// GitHub organization to scan
    #[arg(long, env = "GITHUB_ORG")]
    pub org: String,

    /// Token used to authenticate against the GitHub API
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    pub token: String,

    /// Comma-separated calendar years, e.g. "2021,2022"
    ///
    /// Years before 2010, years in the future and anything that is not a
    /// number are ignored.
    #[arg(long, env = "YEARS", default_value = "")]
    pub years: String,

    /// Comma-separated repository names; leave empty to scan every repository
    #[arg(long, env = "REPOSITORIES", default_value = "")]
    pub repositories: String,

    /// Base URL of the GitHub REST API
    #[arg(long, env = "GITHUB_API_URL", default_value = DEFAULT_API_URL)]
    pub api_url: String,

    /// Directory the per-year contributor files are written to
    #[arg(long, env = "OUTPUT_DIR", default_value = ".")]
    pub output_dir: PathBuf,

    /// Items requested per page (GitHub allows 1 to 100)
    #[arg(long, env = "PER_PAGE", default_value_t = DEFAULT_PER_PAGE)]
    pub per_page: u32,
}

// Loads `<dir>/.env` into the process environment, if there is one
//
// Returns: the path of the file that was loaded, or None when there was no
// readable `.env` (a missing file is normal, not an error)
pub fn load_dotenv(dir: &Path) -> Option<PathBuf> {
    let path = dir.join(".env");
    // from_path never overwrites variables that are already set
    dotenvy::from_path(&path).ok().map(|()| path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const DOTENV_KEYS: [&str; 3] = ["GITHUB_ORG", "GITHUB_TOKEN", "YEARS"];

    fn clear_dotenv_keys() {
        for key in DOTENV_KEYS {
            std::env::remove_var(key);
        }
    }

    #[test]
    #[serial]
    fn test_parse_flags() {
        let cli = Cli::try_parse_from([
            "org-contributors",
            "--org",
            "acme",
            "--token",
            "secret",
            "--years",
            "2021,2022",
            "--repositories",
            "alpha, beta",
        ])
        .unwrap();

        assert_eq!(cli.org, "acme");
        assert_eq!(cli.years, "2021,2022");
        assert_eq!(cli.repositories, "alpha, beta");
        assert_eq!(cli.per_page, DEFAULT_PER_PAGE);
        assert_eq!(cli.output_dir, PathBuf::from("."));
    }

    #[test]
    #[serial]
    fn test_dotenv_fills_missing_flags() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(".env"),
            "GITHUB_ORG=acme\nGITHUB_TOKEN=t\nYEARS=2021\n",
        )
        .unwrap();
        clear_dotenv_keys();

        let loaded = load_dotenv(dir.path());
        let parsed = Cli::try_parse_from(["org-contributors"]);
        clear_dotenv_keys();

        assert_eq!(loaded, Some(dir.path().join(".env")));
        let cli = parsed.unwrap();
        assert_eq!(cli.org, "acme");
        assert_eq!(cli.token, "t");
        assert_eq!(cli.years, "2021");
    }

    #[test]
    #[serial]
    fn test_dotenv_does_not_override_environment() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(".env"), "GITHUB_ORG=from-file\n").unwrap();
        std::env::set_var("GITHUB_ORG", "from-env");

        load_dotenv(dir.path());
        let org = std::env::var("GITHUB_ORG");
        clear_dotenv_keys();

        assert_eq!(org.unwrap(), "from-env");
    }

    #[test]
    #[serial]
    fn test_missing_dotenv_is_not_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(load_dotenv(dir.path()), None);
    }
}
