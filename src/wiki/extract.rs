// src/wiki/extract.rs
// =============================================================================
// This module ties fetching and parsing together.
//
// How it works:
// 1. discover_links() fetches the gallery page and returns one URL per
//    creature, in the order the gallery shows them
// 2. extract() fetches one detail page, reads its tables and, if asked to,
//    downloads the first image and inlines it as a data URL
//
// Only network failures are errors. A page with odd or missing data still
// produces a (partial) record.
//
// Rust concepts:
// - Borrowing: helpers take &WikiConfig instead of copies
// - Scopes: scraper::Html is not Send, so all parsing happens in plain
//   functions that finish before the next .await
// =============================================================================

use scraper::Html;
use tracing::{debug, info, instrument, warn};

use crate::config::{KeyMatching, WikiConfig};
use crate::fetch::{FetchError, HttpFetcher};
use crate::wiki::attribution::attribution;
use crate::wiki::image::{find_first_image, is_data_url, resolve_image_src, to_data_url, ImageRef};
use crate::wiki::links::extract_detail_links;
use crate::wiki::record::CreatureRecord;
use crate::wiki::tables::fill_from_tables;

pub struct WikiScraper {
    fetcher: HttpFetcher,
    config: WikiConfig,
}

impl WikiScraper {
    pub fn new(fetcher: HttpFetcher, config: WikiConfig) -> Self {
        Self { fetcher, config }
    }

    // Fetches the gallery page and lists every creature detail page.
    //
    // Fails only if the gallery page itself cannot be fetched.
    #[instrument(level = "info", skip_all)]
    pub async fn discover_links(&self) -> Result<Vec<String>, FetchError> {
        let index_url = self.config.index_url();
        let html = self.fetcher.fetch_page(&index_url).await?;

        let links = extract_detail_links(&html, &self.config.origin);

        info!(count = links.len(), source = %index_url, "Discovered creature pages");
        debug!(urls = ?links, "Creature page URLs");

        Ok(links)
    }

    // Scrapes one creature detail page.
    //
    // Parameters:
    //   link: absolute URL of the detail page
    //   include_image: also fetch the picture and add the attribution line
    #[instrument(level = "info", skip(self))]
    pub async fn extract(
        &self,
        link: &str,
        include_image: bool,
    ) -> Result<CreatureRecord, FetchError> {
        let html = self.fetcher.fetch_page(link).await?;

        let (mut record, image) = parse_detail_page(link, &html, self.config.key_matching);

        if include_image {
            if let Some(image) = image {
                self.attach_image(&mut record, image).await;
            }
        }

        debug!(
            number = ?record.number,
            name = ?record.name,
            has_image = record.has_image(),
            inlined = record.image_url.as_deref().is_some_and(is_data_url),
            "Parsed creature page"
        );

        Ok(record)
    }

    // Sets image_url/image_alt/attribution on a record.
    //
    // A failed image download is not an error: the record keeps the remote
    // URL instead of a data URL.
    async fn attach_image(&self, record: &mut CreatureRecord, image: ImageRef) {
        let remote_url = resolve_image_src(&image.src, &self.config.image_scheme, &self.config.origin);

        let image_url = match self.fetcher.fetch(&remote_url).await {
            Ok(fetched) if fetched.is_success() => to_data_url(&fetched.body),
            Ok(fetched) => {
                warn!(url = %remote_url, status = fetched.status.as_u16(), "Image not inlined");
                remote_url
            }
            Err(e) => {
                warn!(url = %remote_url, error = %e, "Image not inlined");
                remote_url
            }
        };

        record.image_url = Some(image_url);
        record.image_alt = image.alt;
        record.attribution = Some(attribution(&self.config, &record.wiki_url));
    }
}

// Everything that can be read from a detail page without further requests:
// the table-backed record fields and the first image.
//
// The image is only looked up on pages whose tables were complete down to
// the compatibility cell. Pages that stop short of it yield no image and
// therefore no attribution.
pub fn parse_detail_page(
    link: &str,
    html: &str,
    matching: KeyMatching,
) -> (CreatureRecord, Option<ImageRef>) {
    let document = Html::parse_document(html);

    let mut record = CreatureRecord::new(link);
    if !fill_from_tables(&document, &mut record, matching) {
        return (record, None);
    }

    let image = find_first_image(&document);
    (record, image)
}
