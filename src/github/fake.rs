// src/github/fake.rs
// =============================================================================
// An in-memory GithubApi for tests.
//
// Pages are registered per request path (query string included). Any path
// that was not registered answers with HTTP 404, and paths marked with
// `fail` answer with HTTP 500. Every requested path is recorded in order.
// =============================================================================

use super::client::{ApiError, GithubApi};
use super::endpoints::commits_endpoint;
use super::window::YearWindow;

pub use super::paginate::page_path;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

#[derive(Debug, Default)]
pub struct FakeApi {
    pages: HashMap<String, Vec<Value>>,
    failing: HashSet<String>,
    requests: Mutex<Vec<String>>,
}

impl FakeApi {
    pub fn new() -> Self {
        Self::default()
    }

    // Serves `items` for exactly this path
    pub fn with_page(mut self, path: impl Into<String>, items: Vec<Value>) -> Self {
        self.pages.insert(path.into(), items);
        self
    }

    // Splits `items` into pages of `per_page` starting at page 1, adding the
    // terminal empty page when the count is an exact multiple
    pub fn with_items(mut self, endpoint: &str, per_page: u32, items: Vec<Value>) -> Self {
        let chunks: Vec<Vec<Value>> = items
            .chunks(per_page as usize)
            .map(|chunk| chunk.to_vec())
            .collect();
        let needs_terminal = chunks.last().map_or(true, |c| c.len() == per_page as usize);

        let mut page = 1;
        for chunk in chunks {
            self.pages.insert(page_path(endpoint, per_page, page), chunk);
            page += 1;
        }
        if needs_terminal {
            self.pages.insert(page_path(endpoint, per_page, page), Vec::new());
        }
        self
    }

    // Serves `commits` as the local-time year listing of org/repo
    pub fn with_commits(
        self,
        org: &str,
        repo: &str,
        year: i32,
        per_page: u32,
        commits: Vec<Value>,
    ) -> Self {
        let endpoint = year_commits_endpoint(org, repo, year);
        self.with_items(&endpoint, per_page, commits)
    }

    // Makes this path answer with a server error
    pub fn fail(mut self, path: impl Into<String>) -> Self {
        self.failing.insert(path.into());
        self
    }

    // Makes the first commits page of org/repo for `year` fail
    pub fn fail_commits(self, org: &str, repo: &str, year: i32, per_page: u32) -> Self {
        let endpoint = year_commits_endpoint(org, repo, year);
        self.fail(page_path(&endpoint, per_page, 1))
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

impl GithubApi for FakeApi {
    async fn get_page<T: DeserializeOwned>(&self, path: &str) -> Result<Vec<T>, ApiError> {
        self.requests.lock().unwrap().push(path.to_string());

        let items = match self.pages.get(path) {
            Some(items) if !self.failing.contains(path) => items.clone(),
            _ => {
                let status = if self.failing.contains(path) { 500 } else { 404 };
                return Err(ApiError::Status {
                    status,
                    url: path.to_string(),
                    body: String::new(),
                });
            }
        };

        serde_json::from_value(Value::Array(items)).map_err(|source| ApiError::Decode {
            url: path.to_string(),
            source,
        })
    }
}

pub fn year_commits_endpoint(org: &str, repo: &str, year: i32) -> String {
    let window = YearWindow::local(year).unwrap();
    commits_endpoint(org, repo, &window)
}

// Shorthand for a commit record authored by `login`
pub fn commit_by(login: &str) -> Value {
    serde_json::json!({ "sha": format!("sha-{}", login), "author": { "login": login } })
}
