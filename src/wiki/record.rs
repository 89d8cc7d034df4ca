// src/wiki/record.rs
// =============================================================================
// The data we pull out of one creature's wiki page.
//
// Every field except wiki_url is an Option. "None" means the key is really
// absent (it is skipped when serializing), which is different from an empty
// list: a page without a compatibility table has no likes at all, while a
// page whose compatibility cell says "TBA" has likes = [].
// =============================================================================

use serde::{Deserialize, Serialize};
use std::fmt;

// The creature number from the first table cell.
//
// Most pages hold a plain integer, but some hold things like "7?" or
// "Special", which we keep as the raw text instead of dropping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CreatureNumber {
    Number(i64),
    Text(String),
}

impl CreatureNumber {
    // Integer if the trimmed text parses, otherwise the untouched text.
    pub fn parse(raw: &str) -> Self {
        match raw.trim().parse::<i64>() {
            Ok(n) => CreatureNumber::Number(n),
            Err(_) => CreatureNumber::Text(raw.to_string()),
        }
    }
}

impl fmt::Display for CreatureNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CreatureNumber::Number(n) => write!(f, "{n}"),
            CreatureNumber::Text(s) => f.write_str(s),
        }
    }
}

/// One Space Creature as scraped from its detail page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatureRecord {
    /// The detail page this record came from. Always set.
    pub wiki_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number: Option<CreatureNumber>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub personality: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub likes: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dislikes: Option<Vec<String>>,
    /// Remote image URL, or a `data:image/png;base64,...` URL once inlined.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_alt: Option<String>,
    /// HTML credit line for the wiki article (only set when an image was found).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attribution: Option<String>,
}

impl CreatureRecord {
    pub fn new(wiki_url: impl Into<String>) -> Self {
        Self {
            wiki_url: wiki_url.into(),
            ..Self::default()
        }
    }

    pub fn has_image(&self) -> bool {
        self.image_url.is_some()
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. What does #[serde(untagged)] do?
//    - Serializes an enum as just its inner value, without the variant name
//    - CreatureNumber::Number(7) becomes 7, Text("N/A") becomes "N/A"
//
// 2. What does skip_serializing_if = "Option::is_none" do?
//    - Leaves the key out of the JSON when the value is None
//    - Some(vec![]) is still written, as []
// -----------------------------------------------------------------------------
