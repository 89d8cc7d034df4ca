// src/wiki/attribution.rs
// =============================================================================
// Builds the CC BY-SA credit line that has to accompany any picture or text
// reused from the wiki.
//
// The article title is taken from the last path segment of the detail URL
// ("Moon_Bunny" -> "Moon Bunny"); the raw segment is what MediaWiki expects
// in the history link.
// =============================================================================

use crate::config::WikiConfig;

// Last "/"-separated segment of a URL ("" if the URL ends with "/").
pub fn page_name(detail_url: &str) -> &str {
    detail_url.rsplit('/').next().unwrap_or_default()
}

pub fn attribution(config: &WikiConfig, detail_url: &str) -> String {
    let name = page_name(detail_url);
    let title = name.replace('_', " ");

    format!(
        concat!(
            "Information on/pictures of the creature(s) are from the ",
            "<a href=\"{main_page}\">{site}</a>. ",
            "Authors of the Wiki article <a href=\"{article}\">{title}</a> are ",
            "<a href=\"{history}\">{site} and contributors</a>. ",
            "Provided under the licence <a href=\"{license_url}\">{license_name}</a>."
        ),
        main_page = config.main_page_url(),
        site = config.site_name,
        article = detail_url,
        title = title,
        history = config.history_url(name),
        license_url = config.license_url,
        license_name = config.license_name,
    )
}
