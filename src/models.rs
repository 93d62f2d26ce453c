use serde::Deserialize;

/// A GitHub user profile as returned by `/users/{username}`.
///
/// Count fields arrive as `null` for some accounts, so they deserialize to
/// `None` rather than failing the whole response.
#[derive(Debug, Clone, Deserialize)]
pub struct UserProfile {
    pub login: String,
    pub name: Option<String>,
    pub avatar_url: String,
    pub html_url: String,
    pub public_repos: Option<u64>,
    pub public_gists: Option<u64>,
    pub followers: Option<u64>,
    pub following: Option<u64>,
    pub company: Option<String>,
    pub email: Option<String>,
    pub blog: Option<String>,
    pub location: Option<String>,
    pub created_at: Option<String>,
}

/// One element of the `/users/{login}/repos` response.
#[derive(Debug, Clone, Deserialize)]
pub struct RepoSummary {
    pub name: String,
    pub html_url: String,
    pub description: Option<String>,
    pub stargazers_count: Option<u64>,
    pub watchers_count: Option<u64>,
    pub forks_count: Option<u64>,
}
