// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// Running the tool without any arguments scrapes the public wiki, inlines
// every creature picture and prints one text block per creature. The flags
// only change where we scrape from and how the result looks.
//
// Rust concepts:
// - Derive macros: clap generates the parser from the struct definition
// - bool flags: #[arg(long)] on a bool creates an on/off switch
// =============================================================================

use clap::Parser;

use crate::config::{ConfigError, KeyMatching, WikiConfig, DEFAULT_INDEX_PATH, DEFAULT_ORIGIN};
use crate::report::OutputFormat;

#[derive(Parser, Debug)]
#[command(
    name = "creature-scraper",
    version,
    about = "Scrape Space Creature records from The Ssum wiki",
    long_about = "creature-scraper reads the Space Creatures gallery of The Ssum wiki, \
                  visits every creature page and prints number, name, personality, \
                  likes, dislikes and picture of each creature."
)]
pub struct Cli {
    /// Wiki origin (scheme + host) to scrape
    #[arg(long, default_value = DEFAULT_ORIGIN)]
    pub origin: String,

    /// Path of the gallery page listing all creatures
    #[arg(long, default_value = DEFAULT_INDEX_PATH)]
    pub index_path: String,

    /// Do not download creature pictures (no image fields, no attribution)
    #[arg(long)]
    pub no_image: bool,

    /// Put "Dislikes:" entries only into dislikes
    ///
    /// By default a key is matched by substring, and since "dislikes"
    /// contains "likes" every disliked creature is listed as liked too.
    #[arg(long)]
    pub exclusive_dislikes: bool,

    /// Print one JSON object per creature instead of text blocks
    #[arg(long)]
    pub json: bool,

    /// Stop at the first creature page that cannot be fetched
    #[arg(long)]
    pub fail_fast: bool,
}

impl Cli {
    pub fn wiki_config(&self) -> Result<WikiConfig, ConfigError> {
        let mut config = WikiConfig::with_origin(&self.origin)?;
        config.index_path = self.index_path.clone();
        config.key_matching = if self.exclusive_dislikes {
            KeyMatching::DislikesFirst
        } else {
            KeyMatching::Substring
        };
        Ok(config)
    }

    pub fn include_image(&self) -> bool {
        !self.no_image
    }

    pub fn output_format(&self) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["creature-scraper"]);
        assert!(cli.include_image());
        assert_eq!(cli.output_format(), OutputFormat::Text);
        assert!(!cli.fail_fast);

        let config = cli.wiki_config().unwrap();
        assert_eq!(config, WikiConfig::default());
    }

    #[test]
    fn test_flags() {
        let cli = Cli::parse_from([
            "creature-scraper",
            "--origin",
            "http://localhost:8080/",
            "--index-path",
            "/wiki/Test_Gallery",
            "--no-image",
            "--exclusive-dislikes",
            "--json",
            "--fail-fast",
        ]);
        assert!(!cli.include_image());
        assert_eq!(cli.output_format(), OutputFormat::Json);
        assert!(cli.fail_fast);

        let config = cli.wiki_config().unwrap();
        assert_eq!(config.index_url(), "http://localhost:8080/wiki/Test_Gallery");
        assert_eq!(config.key_matching, KeyMatching::DislikesFirst);
    }

    #[test]
    fn test_bad_origin() {
        let cli = Cli::parse_from(["creature-scraper", "--origin", "nope"]);
        assert!(cli.wiki_config().is_err());
    }
}
