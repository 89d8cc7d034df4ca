// src/run.rs
// =============================================================================
// The whole scrape, start to finish:
// 1. Discover every creature page on the gallery page
// 2. Extract each page, one after the other, in gallery order
// 3. Print each record as soon as it is ready
//
// A creature page that cannot be fetched is logged and skipped (or aborts
// the run with --fail-fast). It is never printed as an empty record.
// =============================================================================

use std::io::Write;

use anyhow::{Context as _, Result};
use tracing::{error, info};

use crate::report::{self, OutputFormat};
use crate::wiki::WikiScraper;

#[derive(Debug, Clone, Copy, Default)]
pub struct RunOptions {
    pub include_image: bool,
    pub format: OutputFormat,
    pub fail_fast: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub discovered: usize,
    pub extracted: usize,
    /// Detail pages that could not be fetched, in gallery order.
    pub failed: Vec<String>,
}

impl RunSummary {
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }
}

pub async fn run<W: Write>(
    scraper: &WikiScraper,
    options: RunOptions,
    out: &mut W,
) -> Result<RunSummary> {
    let links = scraper
        .discover_links()
        .await
        .context("discover creature pages")?;

    let mut summary = RunSummary {
        discovered: links.len(),
        ..RunSummary::default()
    };

    for link in &links {
        match scraper.extract(link, options.include_image).await {
            Ok(record) => {
                report::write_record(out, &record, options.format).context("write record")?;
                summary.extracted += 1;
            }
            Err(e) if options.fail_fast => {
                return Err(anyhow::Error::new(e).context(format!("extract {link}")));
            }
            Err(e) => {
                error!(url = %link, error = %e, "Creature page failed; skipping");
                summary.failed.push(link.clone());
            }
        }
    }

    info!(
        discovered = summary.discovered,
        extracted = summary.extracted,
        failed = summary.failed.len(),
        "Scrape finished"
    );

    Ok(summary)
}
