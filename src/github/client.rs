// src/github/client.rs
// =============================================================================
// This module talks to the GitHub REST API.
//
// Two pieces live here:
// - GithubApi: the trait every list request goes through. The paginator and
//   the fetchers are generic over it, so tests can swap in an in-memory fake.
// - GithubClient: the real implementation, built on one reqwest Client that
//   carries the auth token and GitHub's required headers.
//
// No retries, no timeouts: a hung request blocks the run.
//
// Rust concepts:
// - Traits with async methods: an interface whose methods return futures
// - Generics with bounds: `T: DeserializeOwned` means "any type serde can
//   build from JSON"
// - thiserror: deriving Display and Error for our own error enum
// =============================================================================

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION};
use reqwest::Client;
use serde::de::DeserializeOwned;
use thiserror::Error;
use url::Url;

pub const DEFAULT_API_URL: &str = "https://api.github.com";

const GITHUB_MEDIA_TYPE: &str = "application/vnd.github+json";
const GITHUB_API_VERSION: &str = "2022-11-28";
const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

// Everything that can go wrong with a single API request
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("invalid API URL '{url}': {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("the API token contains characters that are not valid in an HTTP header")]
    InvalidToken,

    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("GET {url} returned HTTP {status}: {body}")]
    Status { status: u16, url: String, body: String },

    #[error("GET {url} returned an unexpected body: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

/// A read-only GitHub API that serves one page of a list endpoint at a time.
///
/// `path` is relative to the API base and already carries its query string,
/// e.g. `/orgs/acme/repos?per_page=100&page=2`.
pub trait GithubApi {
    async fn get_page<T: DeserializeOwned>(&self, path: &str) -> Result<Vec<T>, ApiError>;
}

// The reqwest-backed client used by the real binary
#[derive(Debug, Clone)]
pub struct GithubClient {
    http: Client,
    base_url: Url,
}

impl GithubClient {
    // Builds a client for the given API base URL, authenticating with `token`
    //
    // Example:
    //   GithubClient::new("https://api.github.com", "ghp_...")
    //   GithubClient::new("https://github.example.com/api/v3", "ghp_...")
    pub fn new(api_url: &str, token: &str) -> Result<Self, ApiError> {
        let base_url = Url::parse(api_url).map_err(|source| ApiError::InvalidUrl {
            url: api_url.to_string(),
            source,
        })?;

        let mut auth = HeaderValue::from_str(&format!("Bearer {}", token))
            .map_err(|_| ApiError::InvalidToken)?;
        // Keeps the token out of reqwest's Debug output
        auth.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, auth);
        headers.insert(ACCEPT, HeaderValue::from_static(GITHUB_MEDIA_TYPE));
        headers.insert(
            "x-github-api-version",
            HeaderValue::from_static(GITHUB_API_VERSION),
        );

        let http = Client::builder()
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .build()?;

        Ok(Self { http, base_url })
    }

    // Resolves an API path against the base URL
    //
    // Url::join would drop a base path like "/api/v3" on GitHub Enterprise,
    // so the path is appended as text instead.
    fn url_for(&self, path: &str) -> Result<Url, ApiError> {
        let full = format!("{}{}", self.base_url.as_str().trim_end_matches('/'), path);
        Url::parse(&full).map_err(|source| ApiError::InvalidUrl { url: full, source })
    }
}

impl GithubApi for GithubClient {
    async fn get_page<T: DeserializeOwned>(&self, path: &str) -> Result<Vec<T>, ApiError> {
        let url = self.url_for(path)?;
        let response = self.http.get(url.clone()).send().await?;

        let status = response.status();
        if !status.is_success() {
            // The body usually holds GitHub's {"message": ...} explanation
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::Status {
                status: status.as_u16(),
                url: url.to_string(),
                body,
            });
        }

        let bytes = response.bytes().await?;
        serde_json::from_slice(&bytes).map_err(|source| ApiError::Decode {
            url: url.to_string(),
            source,
        })
    }
}
