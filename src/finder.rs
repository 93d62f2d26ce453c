use anyhow::Result;

use crate::github::GitHubClient;
use crate::render::{ProfileCard, RepoListing};
use crate::screen::Screen;
use crate::ui;

/// What a single search did, from the caller's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchOutcome {
    /// Empty input; nothing was requested or rendered.
    Skipped,
    /// The primary lookup came back 404; the alert was shown.
    NotFound,
    /// All three panels were rendered.
    Rendered,
}

/// Drives one lookup pass: the primary profile fetch, then the three panel
/// renders against the injected screen.
pub struct Finder<S: Screen> {
    github: GitHubClient,
    screen: S,
    profile_url: Option<String>,
}

impl<S: Screen> Finder<S> {
    #[must_use]
    pub fn new(github: GitHubClient, screen: S) -> Self {
        Self {
            github,
            screen,
            profile_url: None,
        }
    }

    /// Run one search pass.
    ///
    /// A non-404 fetch failure aborts the rest of the pass: panels rendered
    /// before the failure keep their new content, the others keep whatever
    /// they showed before.
    pub async fn search(&mut self, input: &str) -> Result<SearchOutcome> {
        let username = input.trim();
        if username.is_empty() {
            return Ok(SearchOutcome::Skipped);
        }

        let Some(user) = self.github.fetch_user(username).await? else {
            self.screen.alert("Username not found!");
            return Ok(SearchOutcome::NotFound);
        };

        self.screen.show_profile(&ProfileCard::from_user(&user));
        self.profile_url = Some(user.html_url.clone());

        // The dependent repos fetch and the chart probe are unordered
        // relative to each other.
        let (repos, chart) = tokio::join!(
            self.github.fetch_recent_repos(&user.login),
            self.github.probe_contribution_chart(&user.login),
        );

        self.screen.show_repos(&RepoListing::from_repos(&repos?));
        self.screen.show_contribution(chart.as_deref());
        self.screen.dock_footer();

        Ok(SearchOutcome::Rendered)
    }

    /// The View Profile action: launch the system browser on the most
    /// recently rendered profile.
    pub fn open_profile(&self) {
        match &self.profile_url {
            Some(url) => {
                if let Err(err) = open::that(url) {
                    ui::print_error(&format!("Failed to open {url}: {err}"));
                }
            }
            None => ui::print_info("Nothing to open yet - search for a user first."),
        }
    }

    #[must_use]
    pub fn screen(&self) -> &S {
        &self.screen
    }
}
