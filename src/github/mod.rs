// src/github/mod.rs
// =============================================================================
// This module handles everything that talks to the GitHub REST API.
//
// Submodules:
// - client: the GithubApi trait and the reqwest-backed GithubClient
// - paginate: walks a paged list endpoint until a short page comes back
// - window: since/until bounds for a calendar year
// - endpoints: the repository and commit listings built on top of those
// - models: the fields we read from GitHub's JSON
//
// Rust concepts:
// - Modules: Organizing related functionality
// - pub use: Re-exporting so callers write `github::GithubClient`
// =============================================================================

mod client;
mod endpoints;
mod models;
mod paginate;
mod window;

#[cfg(test)]
pub mod fake;

pub use client::{GithubApi, GithubClient, DEFAULT_API_URL};
pub use endpoints::{list_commits_in_year, list_org_repositories};
pub use models::CommitRecord;
pub use paginate::{clamp_per_page, DEFAULT_PER_PAGE};
