// src/wiki/mod.rs
// =============================================================================
// Everything that knows how The Ssum wiki lays out its pages.
//
// Submodules:
// - links: finds creature detail pages on the gallery page
// - tables: reads number/name/personality and likes/dislikes
// - image: first picture on a page, data URL encoding
// - attribution: CC BY-SA credit line
// - record: the CreatureRecord we produce
// - extract: fetch + parse, the public entry point
// =============================================================================

pub mod attribution;
pub mod extract;
pub mod image;
pub mod links;
pub mod record;
pub mod tables;

pub use extract::WikiScraper;
pub use record::{CreatureNumber, CreatureRecord};
