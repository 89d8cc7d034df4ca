// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Set up logging and parse command-line arguments
// 2. Build the wiki configuration and the HTTP client
// 3. Scrape every creature and print it
// 4. Exit with proper code (0 = all creatures, 1 = some pages failed, 2 = error)
// =============================================================================

use anyhow::{Context as _, Result};
use clap::Parser;

use creature_scraper::cli::Cli;
use creature_scraper::fetch::HttpFetcher;
use creature_scraper::run::{self, RunOptions};
use creature_scraper::wiki::WikiScraper;

#[tokio::main]
async fn main() {
    let exit_code = match try_main().await {
        Ok(code) => code,
        Err(e) => {
            // {:#} prints the whole context chain on one line
            eprintln!("Error: {e:#}");
            2
        }
    };

    std::process::exit(exit_code);
}

async fn try_main() -> Result<i32> {
    creature_scraper::logging::init().context("init logging")?;

    let cli = Cli::parse();
    tracing::debug!(?cli, "parsed cli");

    let config = cli.wiki_config().context("build wiki configuration")?;
    let fetcher = HttpFetcher::new()?;
    let scraper = WikiScraper::new(fetcher, config);

    let options = RunOptions {
        include_image: cli.include_image(),
        format: cli.output_format(),
        fail_fast: cli.fail_fast,
    };

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let summary = run::run(&scraper, options, &mut out).await?;

    if summary.is_complete() {
        Ok(0)
    } else {
        eprintln!(
            "{} of {} creature page(s) could not be fetched",
            summary.failed.len(),
            summary.discovered
        );
        Ok(1)
    }
}
