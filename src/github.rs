use anyhow::{Context, Result};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, USER_AGENT};
use reqwest::{Client, StatusCode};

use crate::models::{RepoSummary, UserProfile};

/// How many repositories of the recency-sorted first page are kept.
pub const RECENT_REPO_LIMIT: usize = 5;

/// Client for the GitHub REST API and the contribution chart service.
///
/// Base URLs are injected so tests and mirrors can redirect both services.
#[derive(Debug, Clone)]
pub struct GitHubClient {
    http: Client,
    api_base: String,
    chart_base: String,
}

impl GitHubClient {
    /// Build a client with the required default headers. GitHub rejects
    /// requests without a `User-Agent`.
    pub fn new(api_base: &str, chart_base: &str) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, HeaderValue::from_static("hubfind"));
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("application/vnd.github.v3+json"),
        );

        let http = Client::builder()
            .default_headers(headers)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            http,
            api_base: api_base.trim_end_matches('/').to_string(),
            chart_base: chart_base.trim_end_matches('/').to_string(),
        })
    }

    /// Resolve a username to a full profile. `None` means GitHub reported
    /// 404 for the name.
    pub async fn fetch_user(&self, username: &str) -> Result<Option<UserProfile>> {
        let url = format!("{}/users/{username}", self.api_base);
        tracing::debug!("GET {url}");

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .context("Failed to reach the GitHub API")?;

        tracing::debug!("profile response status: {}", response.status());

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !response.status().is_success() {
            anyhow::bail!(
                "GitHub API error ({}) looking up user '{username}'",
                response.status()
            );
        }

        let user = response
            .json::<UserProfile>()
            .await
            .context("Failed to deserialize user profile")?;

        Ok(Some(user))
    }

    /// First page of the user's repositories in update-recency order,
    /// truncated to [`RECENT_REPO_LIMIT`]. A 404 here is not an error and
    /// yields an empty list.
    pub async fn fetch_recent_repos(&self, login: &str) -> Result<Vec<RepoSummary>> {
        let url = format!("{}/users/{login}/repos", self.api_base);
        tracing::debug!("GET {url}?sort=updated");

        let response = self
            .http
            .get(&url)
            .query(&[("sort", "updated")])
            .send()
            .await
            .context("Failed to reach the GitHub API")?;

        tracing::debug!("repos response status: {}", response.status());

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(Vec::new());
        }
        if !response.status().is_success() {
            anyhow::bail!(
                "GitHub API error ({}) listing repositories for '{login}'",
                response.status()
            );
        }

        let mut repos = response
            .json::<Vec<RepoSummary>>()
            .await
            .context("Failed to deserialize repository list")?;
        repos.truncate(RECENT_REPO_LIMIT);

        Ok(repos)
    }

    /// Opaque image probe against the chart service. Only whether the image
    /// loads matters; any failure yields `None` and is never surfaced as an
    /// error.
    pub async fn probe_contribution_chart(&self, login: &str) -> Option<String> {
        let url = format!("{}/{login}", self.chart_base);
        tracing::debug!("GET {url}");

        match self.http.get(&url).send().await {
            Ok(response) if response.status().is_success() => Some(url),
            Ok(response) => {
                tracing::debug!("chart unavailable: {}", response.status());
                None
            }
            Err(err) => {
                tracing::debug!("chart probe failed: {err}");
                None
            }
        }
    }
}
