// src/config.rs
// =============================================================================
// This module holds every fixed value the scraper needs to know about the
// wiki: where it lives, which page lists the creatures, how images are
// referenced, and what the attribution text says.
//
// Keeping them in one struct (instead of string literals scattered around)
// lets tests point the scraper at a fake wiki running on localhost.
//
// Rust concepts:
// - impl Default: A "zero-argument constructor" other code can rely on
// - thiserror: Derives std::error::Error for our own error enums
// =============================================================================

use thiserror::Error;
use url::Url;

/// Public origin of The Ssum wiki.
pub const DEFAULT_ORIGIN: &str = "https://thessum.miraheze.org";

/// Page listing every Space Creature in a gallery.
pub const DEFAULT_INDEX_PATH: &str = "/wiki/Space_Creatures";

pub const DEFAULT_SITE_NAME: &str = "The Ssum: Forbidden Lab's Unofficial Miraheze Wiki";
pub const DEFAULT_LICENSE_URL: &str = "https://creativecommons.org/licenses/by-sa/4.0/";
pub const DEFAULT_LICENSE_NAME: &str =
    "Creative Commons Attribution-ShareAlike 4.0 International (CC BY-SA 4.0)";

// How a "Likes:"/"Dislikes:" key is matched to a list.
//
// Substring checks both words independently. Since "dislikes" contains
// "likes", a dislikes line ends up in both lists. This is what the wiki
// scraper has always produced, so it stays the default.
//
// DislikesFirst checks "dislikes" first and only falls back to "likes",
// so every line lands in at most one list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KeyMatching {
    #[default]
    Substring,
    DislikesFirst,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid origin '{origin}': {reason}")]
    InvalidOrigin { origin: String, reason: String },
}

// Everything the scraper needs to know about the target wiki.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WikiConfig {
    /// Scheme + host (+ port), without a trailing slash.
    pub origin: String,
    /// Site-relative path of the creature gallery page.
    pub index_path: String,
    /// Prefix put in front of protocol-relative image sources ("//host/...").
    pub image_scheme: String,
    pub site_name: String,
    pub license_url: String,
    pub license_name: String,
    pub key_matching: KeyMatching,
}

impl Default for WikiConfig {
    fn default() -> Self {
        Self {
            origin: DEFAULT_ORIGIN.to_string(),
            index_path: DEFAULT_INDEX_PATH.to_string(),
            image_scheme: "https:".to_string(),
            site_name: DEFAULT_SITE_NAME.to_string(),
            license_url: DEFAULT_LICENSE_URL.to_string(),
            license_name: DEFAULT_LICENSE_NAME.to_string(),
            key_matching: KeyMatching::default(),
        }
    }
}

impl WikiConfig {
    // Builds a config for another origin, keeping every other default.
    //
    // The origin must be an absolute http(s) URL. A trailing slash is
    // dropped so that `origin + "/wiki/..."` never produces "//wiki".
    pub fn with_origin(origin: &str) -> Result<Self, ConfigError> {
        let origin = normalize_origin(origin)?;
        Ok(Self {
            origin,
            ..Self::default()
        })
    }

    pub fn index_url(&self) -> String {
        format!("{}{}", self.origin, self.index_path)
    }

    pub fn main_page_url(&self) -> String {
        format!("{}/wiki/Main_Page", self.origin)
    }

    // Edit-history link for an article, e.g. ".../w/index.php?title=Glorp&action=history"
    pub fn history_url(&self, page_name: &str) -> String {
        format!(
            "{}/w/index.php?title={}&action=history",
            self.origin, page_name
        )
    }
}

fn normalize_origin(origin: &str) -> Result<String, ConfigError> {
    let invalid = |reason: String| ConfigError::InvalidOrigin {
        origin: origin.to_string(),
        reason,
    };

    let parsed = Url::parse(origin).map_err(|e| invalid(e.to_string()))?;

    if parsed.scheme() != "http" && parsed.scheme() != "https" {
        return Err(invalid(format!("unsupported scheme '{}'", parsed.scheme())));
    }
    if parsed.host_str().is_none() {
        return Err(invalid("missing host".to_string()));
    }

    Ok(origin.trim_end_matches('/').to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_urls() {
        let config = WikiConfig::default();
        assert_eq!(
            config.index_url(),
            "https://thessum.miraheze.org/wiki/Space_Creatures"
        );
        assert_eq!(
            config.main_page_url(),
            "https://thessum.miraheze.org/wiki/Main_Page"
        );
        assert_eq!(
            config.history_url("Glorp"),
            "https://thessum.miraheze.org/w/index.php?title=Glorp&action=history"
        );
    }

    #[test]
    fn test_with_origin_trims_trailing_slash() {
        let config = WikiConfig::with_origin("http://127.0.0.1:8080/").unwrap();
        assert_eq!(config.origin, "http://127.0.0.1:8080");
        assert_eq!(config.index_path, DEFAULT_INDEX_PATH);
    }

    #[test]
    fn test_with_origin_rejects_garbage() {
        assert!(WikiConfig::with_origin("not a url").is_err());
        assert!(WikiConfig::with_origin("ftp://example.com").is_err());
    }

    #[test]
    fn test_default_key_matching_is_substring() {
        assert_eq!(WikiConfig::default().key_matching, KeyMatching::Substring);
    }
}
