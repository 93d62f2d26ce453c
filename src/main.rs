use std::io::{self, Write};

use anyhow::Result;
use clap::Parser;

use hubfind::finder::{Finder, SearchOutcome};
use hubfind::github::GitHubClient;
use hubfind::screen::TerminalScreen;
use hubfind::{logger, ui};

const FOOTER_HINT: &str =
    "Search again, type 'open' to view the profile in a browser, or 'quit' to exit.";

#[derive(Parser)]
#[command(name = "hubfind")]
#[command(about = "GitHub profile lookup from the terminal")]
#[command(version)]
struct Cli {
    /// Look up a single username and exit instead of starting the prompt
    username: Option<String>,

    /// Base URL of the GitHub REST API
    #[arg(long, default_value = "https://api.github.com")]
    api_base: String,

    /// Base URL of the contribution chart service
    #[arg(long, default_value = "https://ghchart.rshah.org")]
    chart_base: String,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logger::init(cli.verbose);

    let github = GitHubClient::new(&cli.api_base, &cli.chart_base)?;
    let screen = TerminalScreen::new(FOOTER_HINT);
    let mut finder = Finder::new(github, screen);

    if let Some(username) = cli.username {
        if finder.search(&username).await? == SearchOutcome::NotFound {
            std::process::exit(1);
        }
        return Ok(());
    }

    run_prompt(&mut finder).await
}

async fn run_prompt(finder: &mut Finder<TerminalScreen>) -> Result<()> {
    ui::print_header("hubfind");
    ui::print_info("Look up any GitHub user by their username.");
    ui::print_hint(FOOTER_HINT);

    loop {
        print!("Search GitHub username: ");
        io::stdout().flush()?;

        let mut line = String::new();
        if io::stdin().read_line(&mut line)? == 0 {
            break; // EOF
        }

        match line.trim() {
            "quit" | "exit" => break,
            "open" => finder.open_profile(),
            input => {
                if let Err(err) = finder.search(input).await {
                    ui::show_error_with_help(
                        &format!("Search failed: {err:#}"),
                        &[
                            "Check your internet connection",
                            "Unauthenticated requests are rate limited - wait a minute and retry",
                            "Check GitHub status: https://www.githubstatus.com/",
                        ],
                    );
                }
            }
        }
    }

    Ok(())
}
