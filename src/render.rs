use crate::models::{RepoSummary, UserProfile};

/// Placeholder for an optional attribute with no value.
pub const MISSING_VALUE: &str = "Can't Find";
/// Placeholder for a repository without a description.
pub const NO_DESCRIPTION: &str = "No Description";
/// Shown instead of the repository list when there is nothing to list.
pub const NO_RECENT_REPOS: &str = "No recent repositories to display";
/// Fixed heading of the repository panel.
pub const REPO_HEADING: &str = "Latest Repos";

/// One `"<label>: <value>"` line of a labeled list.
///
/// The key is the label with its whitespace removed and exists for styling
/// hooks only; two labels that differ only in whitespace collide.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListEntry {
    pub key: String,
    pub text: String,
}

/// Build a labeled list, substituting the placeholder for absent values.
#[must_use]
pub fn labeled_list(fields: &[(&str, Option<String>)]) -> Vec<ListEntry> {
    fields
        .iter()
        .map(|(label, value)| ListEntry {
            key: label.split_whitespace().collect(),
            text: match value {
                Some(value) => format!("{label}: {value}"),
                None => format!("{label}: {MISSING_VALUE}"),
            },
        })
        .collect()
}

/// Counts fall back to zero, never to the attribute placeholder.
fn count(value: Option<u64>) -> Option<String> {
    Some(value.unwrap_or(0).to_string())
}

/// Present-but-empty attributes count as absent (GitHub serves `""` for an
/// unset blog).
fn attribute(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}

/// Shaped content of the profile panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileCard {
    pub heading: String,
    pub avatar_url: String,
    pub profile_url: String,
    pub activity: Vec<ListEntry>,
    pub personal: Vec<ListEntry>,
}

impl ProfileCard {
    #[must_use]
    pub fn from_user(user: &UserProfile) -> Self {
        let heading =
            attribute(user.name.as_deref()).unwrap_or_else(|| user.login.clone());

        Self {
            heading,
            avatar_url: user.avatar_url.clone(),
            profile_url: user.html_url.clone(),
            activity: labeled_list(&[
                ("Public Repos", count(user.public_repos)),
                ("Public Gists", count(user.public_gists)),
                ("Followers", count(user.followers)),
                ("Following", count(user.following)),
            ]),
            personal: labeled_list(&[
                ("Company", attribute(user.company.as_deref())),
                ("Email", attribute(user.email.as_deref())),
                ("Blog", attribute(user.blog.as_deref())),
                ("Location", attribute(user.location.as_deref())),
                ("Member Since", attribute(user.created_at.as_deref())),
            ]),
        }
    }
}

/// One rendered repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoLine {
    pub name: String,
    pub url: String,
    pub description: String,
    pub metrics: Vec<ListEntry>,
}

/// Shaped content of the repository panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoListing {
    pub heading: String,
    pub items: Vec<RepoLine>,
}

impl RepoListing {
    /// Input order is preserved; the fetch layer has already truncated the
    /// list to the recency window.
    #[must_use]
    pub fn from_repos(repos: &[RepoSummary]) -> Self {
        let items = repos
            .iter()
            .map(|repo| RepoLine {
                name: repo.name.clone(),
                url: repo.html_url.clone(),
                description: attribute(repo.description.as_deref())
                    .unwrap_or_else(|| NO_DESCRIPTION.to_string()),
                metrics: labeled_list(&[
                    ("Stars", count(repo.stargazers_count)),
                    ("Watchers", count(repo.watchers_count)),
                    ("Forks", count(repo.forks_count)),
                ]),
            })
            .collect();

        Self {
            heading: REPO_HEADING.to_string(),
            items,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
