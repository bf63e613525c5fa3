// src/github/paginate.rs
// =============================================================================
// This module walks a paged GitHub list endpoint until it runs out of items.
//
// How it works:
// 1. Request page `start_page` with `per_page` items
// 2. Append whatever came back to the results, keeping order
// 3. If the page was short (fewer than `per_page` items), stop
// 4. Otherwise ask for the next page
//
// A page that comes back exactly full is never treated as the last one, so
// an endpoint with 200 items and per_page=100 costs three requests: two full
// pages and the empty page that proves there is nothing more.
//
// Rust concepts:
// - loop with an explicit exit condition instead of recursion
// - Generic functions: the same loop serves repositories and commits
// =============================================================================

use super::client::{ApiError, GithubApi};
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::{debug, error};

// GitHub's own maximum for `per_page`
pub const MAX_PER_PAGE: u32 = 100;
pub const DEFAULT_PER_PAGE: u32 = MAX_PER_PAGE;
// GitHub pages are 1-based
pub const FIRST_PAGE: u32 = 1;

// A single page request failed while walking an endpoint
#[derive(Debug, Error)]
#[error("failed to fetch page {page} of {endpoint}")]
pub struct PaginationError {
    pub endpoint: String,
    pub page: u32,
    #[source]
    pub source: ApiError,
}

// Builds the request path for one page of an endpoint
//
// Example:
//   page_path("/orgs/acme/repos", 100, 2)
//     -> "/orgs/acme/repos?per_page=100&page=2"
//   page_path("/repos/a/b/commits?since=x", 50, 1)
//     -> "/repos/a/b/commits?since=x&per_page=50&page=1"
pub fn page_path(endpoint: &str, per_page: u32, page: u32) -> String {
    let separator = if endpoint.contains('?') { '&' } else { '?' };
    format!("{}{}per_page={}&page={}", endpoint, separator, per_page, page)
}

/// A page is the last one iff it returned strictly fewer items than asked for.
pub fn is_last_page(returned: usize, per_page: u32) -> bool {
    returned < per_page as usize
}

// Keeps a page size inside what GitHub accepts; 0 would never terminate
pub fn clamp_per_page(per_page: u32) -> u32 {
    per_page.clamp(1, MAX_PER_PAGE)
}

// Fetches every item of a paged endpoint, in the order the API returns them
//
// Parameters:
//   api: where page requests go
//   endpoint: API path, with or without its own query string
//   per_page: page size (clamped to 1..=100)
//   start_page: first page to request, normally FIRST_PAGE
//
// Returns: all items across all pages, or the error of the first page that
// failed. The failure is logged here; items already collected are dropped.
pub async fn fetch_all_pages<A, T>(
    api: &A,
    endpoint: &str,
    per_page: u32,
    start_page: u32,
) -> Result<Vec<T>, PaginationError>
where
    A: GithubApi,
    T: DeserializeOwned,
{
    let per_page = clamp_per_page(per_page);
    let mut results = Vec::new();
    let mut page = start_page;

    loop {
        let path = page_path(endpoint, per_page, page);

        let items: Vec<T> = match api.get_page(&path).await {
            Ok(items) => items,
            Err(source) => {
                error!("{}: {}", path, source);
                return Err(PaginationError {
                    endpoint: endpoint.to_string(),
                    page,
                    source,
                });
            }
        };

        let returned = items.len();
        debug!("{} returned {} item(s)", path, returned);
        results.extend(items);

        if is_last_page(returned, per_page) {
            return Ok(results);
        }
        page += 1;
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why a loop and not recursion?
//    - Each page would add a stack frame (and a boxed future, since async
//      recursion needs Box::pin)
//    - A loop keeps memory flat no matter how many pages an org has
//
// 2. What does `where A: GithubApi, T: DeserializeOwned` mean?
//    - The function works for any API and any item type meeting the bounds
//    - The compiler generates one copy per concrete type (monomorphization)
//
// 3. Why `results.extend(items)`?
//    - It moves the page's items onto the end of `results`, keeping order
// -----------------------------------------------------------------------------
