// src/github/endpoints.rs
// =============================================================================
// The two GitHub list endpoints this tool reads:
// - GET /orgs/{org}/repos
// - GET /repos/{org}/{repo}/commits?since=...&until=...
//
// Both go through the paginator, so callers always get complete listings.
// =============================================================================

use super::client::GithubApi;
use super::models::{CommitRecord, Repository};
use super::paginate::{fetch_all_pages, PaginationError, FIRST_PAGE};
use super::window::{YearWindow, YearWindowError};
use thiserror::Error;
use tracing::info;

// Why the commits of one (repository, year) could not be listed
#[derive(Debug, Error)]
pub enum FetchError {
    #[error(transparent)]
    Window(#[from] YearWindowError),

    #[error(transparent)]
    Pagination(#[from] PaginationError),
}

// Lists every repository of an organization, with GitHub's default filters
pub async fn list_org_repositories<A: GithubApi>(
    api: &A,
    org: &str,
    per_page: u32,
) -> Result<Vec<Repository>, PaginationError> {
    info!("Fetching all repos from org: {}", org);
    fetch_all_pages(api, &format!("/orgs/{}/repos", org), per_page, FIRST_PAGE).await
}

// Lists every commit of `org/repo` made during `year`, local time
pub async fn list_commits_in_year<A: GithubApi>(
    api: &A,
    org: &str,
    repo: &str,
    year: i32,
    per_page: u32,
) -> Result<Vec<CommitRecord>, FetchError> {
    let window = YearWindow::local(year)?;
    info!("Fetching commits {}/{} for {} year", org, repo, year);
    Ok(list_commits_in_window(api, org, repo, &window, per_page).await?)
}

// Lists every commit of `org/repo` inside `window`
//
// GitHub decides which commits fall inside the bounds; nothing is
// re-filtered here.
pub async fn list_commits_in_window<A: GithubApi>(
    api: &A,
    org: &str,
    repo: &str,
    window: &YearWindow,
    per_page: u32,
) -> Result<Vec<CommitRecord>, PaginationError> {
    let endpoint = commits_endpoint(org, repo, window);
    fetch_all_pages(api, &endpoint, per_page, FIRST_PAGE).await
}

pub fn commits_endpoint(org: &str, repo: &str, window: &YearWindow) -> String {
    format!("/repos/{}/{}/commits?{}", org, repo, window.query())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::github::fake::{commit_by, FakeApi};
    use crate::github::paginate::page_path;
    use chrono::Utc;
    use serde_json::json;

    #[test]
    fn test_commits_endpoint() {
        let window = YearWindow::in_timezone(2021, &Utc).unwrap();
        assert_eq!(
            commits_endpoint("acme", "alpha", &window),
            "/repos/acme/alpha/commits\
             ?since=2021-01-01T00:00:00.000Z&until=2021-12-31T23:59:59.000Z"
        );
    }

    #[tokio::test]
    async fn test_list_org_repositories() {
        let api = FakeApi::new().with_items(
            "/orgs/acme/repos",
            2,
            vec![json!({ "name": "alpha" }), json!({ "name": "beta" }), json!({ "name": "gamma" })],
        );

        let repos = list_org_repositories(&api, "acme", 2).await.unwrap();

        let names: Vec<&str> = repos.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["alpha", "beta", "gamma"]);
        assert_eq!(
            api.requests(),
            vec![
                "/orgs/acme/repos?per_page=2&page=1".to_string(),
                "/orgs/acme/repos?per_page=2&page=2".to_string(),
            ]
        );
    }

    #[tokio::test]
    async fn test_list_commits_in_year_uses_local_window() {
        let window = YearWindow::local(2021).unwrap();
        let endpoint = commits_endpoint("acme", "alpha", &window);
        let api = FakeApi::new().with_page(
            page_path(&endpoint, 100, 1),
            vec![commit_by("octocat"), json!({ "sha": "x", "author": null })],
        );

        let commits = list_commits_in_year(&api, "acme", "alpha", 2021, 100).await.unwrap();

        assert_eq!(commits.len(), 2);
        assert_eq!(commits[0].author_login(), Some("octocat"));
        assert_eq!(commits[1].author_login(), None);
    }

    #[tokio::test]
    async fn test_list_commits_failure() {
        let api = FakeApi::new();
        let result = list_commits_in_year(&api, "acme", "missing", 2021, 100).await;
        assert!(matches!(result, Err(FetchError::Pagination(_))));
    }
}
