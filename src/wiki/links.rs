// src/wiki/links.rs
// =============================================================================
// This module finds the creature detail pages listed on the index page.
//
// The "Space Creatures" page is a MediaWiki gallery. Every creature gets a
// <div class="gallerytext"> caption, and the first <a> inside that caption
// points at the creature's own article:
//
//   <div class="gallerytext"><a href="/wiki/Glorp" title="Glorp">Glorp</a></div>
//
// We use the `scraper` crate which:
// - Parses HTML into a DOM (Document Object Model)
// - Supports CSS selectors for finding elements
// - Is built on html5ever (Mozilla's HTML parser)
// =============================================================================

use scraper::{Html, Selector};

// Extracts one detail-page URL per gallery entry, in page order
//
// Parameters:
//   html: the index page HTML
//   origin: site origin the (site-relative) hrefs are appended to
//
// Entries whose caption has no link, or a link without an href, are skipped.
//
// Example:
//   html   = <div class="gallerytext"><a href="/wiki/Glorp">Glorp</a></div>
//   origin = "https://thessum.miraheze.org"
//   result = ["https://thessum.miraheze.org/wiki/Glorp"]
pub fn extract_detail_links(html: &str, origin: &str) -> Vec<String> {
    let document = Html::parse_document(html);

    // Both selectors are constants and known to be valid
    let entry_selector = Selector::parse("div.gallerytext").expect("valid selector");
    let link_selector = Selector::parse("a").expect("valid selector");

    let mut links = Vec::new();

    for entry in document.select(&entry_selector) {
        let Some(anchor) = entry.select(&link_selector).next() else {
            continue;
        };

        match anchor.value().attr("href") {
            Some(href) if !href.is_empty() => links.push(absolute_link(origin, href)),
            _ => continue,
        }
    }

    links
}

// Hrefs on the wiki are site-relative ("/wiki/Glorp"), so the origin is
// simply put in front of them.
fn absolute_link(origin: &str, href: &str) -> String {
    format!("{origin}{href}")
}
