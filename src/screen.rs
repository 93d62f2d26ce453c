use crate::render::{ProfileCard, RepoListing, NO_RECENT_REPOS};
use crate::ui;

/// The output regions a lookup writes to.
///
/// Every `show_*` call replaces that region's whole content; repeated
/// searches must not accumulate output. Injected into the controller so
/// tests can substitute a recording fake.
pub trait Screen {
    fn show_profile(&mut self, card: &ProfileCard);
    fn show_repos(&mut self, listing: &RepoListing);
    /// `Some` reveals the region with the served chart URL, `None` keeps it
    /// hidden.
    fn show_contribution(&mut self, chart_url: Option<&str>);
    /// Blocking user-facing notice; no region is touched.
    fn alert(&mut self, message: &str);
    /// Re-anchor the footer hint below the freshly rendered content.
    fn dock_footer(&mut self);
}

/// Renders the panels as colored terminal sections.
#[derive(Debug)]
pub struct TerminalScreen {
    footer: String,
}

impl TerminalScreen {
    #[must_use]
    pub fn new(footer: impl Into<String>) -> Self {
        Self {
            footer: footer.into(),
        }
    }
}

impl Screen for TerminalScreen {
    fn show_profile(&mut self, card: &ProfileCard) {
        println!();
        ui::print_header(&card.heading);
        println!("Avatar: {}", card.avatar_url);
        println!();
        for entry in &card.activity {
            println!("  {}", entry.text);
        }
        println!();
        for entry in &card.personal {
            println!("  {}", entry.text);
        }
        println!();
        ui::print_action(&format!("View Profile: {}", card.profile_url));
    }

    fn show_repos(&mut self, listing: &RepoListing) {
        println!();
        ui::print_header(&listing.heading);

        if listing.is_empty() {
            println!("{NO_RECENT_REPOS}");
            return;
        }

        for item in &listing.items {
            ui::print_link(&item.name, &item.url);
            println!("    {}", item.description);
            let metrics: Vec<&str> = item.metrics.iter().map(|m| m.text.as_str()).collect();
            println!("    {}", metrics.join("  "));
        }
    }

    fn show_contribution(&mut self, chart_url: Option<&str>) {
        let Some(url) = chart_url else { return };
        println!();
        ui::print_header("Contribution Graph");
        println!("  {url}");
    }

    fn alert(&mut self, message: &str) {
        ui::print_error(message);
    }

    fn dock_footer(&mut self) {
        println!();
        ui::print_hint(&self.footer);
    }
}
