// src/logging.rs
// =============================================================================
// Sets up `tracing` output for the scraper.
//
// Logs go to stderr so they never mix with the creature records on stdout.
// Without RUST_LOG only our own info-level events are shown (discovery
// counts, skipped pages, images that could not be inlined); reqwest and
// hyper chatter stays hidden unless asked for, e.g. RUST_LOG=debug.
// =============================================================================

use anyhow::Context as _;
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "creature_scraper=info";

// Builds the filter from RUST_LOG, or falls back to DEFAULT_FILTER.
fn log_filter() -> anyhow::Result<EnvFilter> {
    match std::env::var(EnvFilter::DEFAULT_ENV) {
        Ok(directives) if !directives.trim().is_empty() => {
            EnvFilter::try_new(&directives).with_context(|| format!("parse RUST_LOG '{directives}'"))
        }
        _ => EnvFilter::try_new(DEFAULT_FILTER).context("build default log filter"),
    }
}

pub fn init() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(log_filter()?)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| anyhow::anyhow!("initialize logging: {err}"))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter_parses() {
        assert!(EnvFilter::try_new(DEFAULT_FILTER).is_ok());
    }
}
