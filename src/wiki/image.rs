// src/wiki/image.rs
// =============================================================================
// This module finds the creature picture on a detail page and turns fetched
// image bytes into a self-contained data URL.
//
// MediaWiki serves images from a separate upload host and writes their
// sources protocol-relative:
//
//   <img src="//static.wikitide.net/thessumwiki/a/a1/Glorp.png" alt="Glorp.png">
//
// so the scheme has to be added before the image can be fetched.
//
// The data URL always says image/png. Browsers sniff the real format anyway,
// so the bytes are not inspected.
// =============================================================================

use base64::Engine as _;
use scraper::{Html, Selector};

const DATA_URL_PREFIX: &str = "data:image/png;base64,";

// The first <img> on a page, as written in the HTML.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRef {
    pub src: String,
    pub alt: Option<String>,
}

// Returns the first image of the page, if it has a src.
pub fn find_first_image(document: &Html) -> Option<ImageRef> {
    let img_selector = Selector::parse("img").expect("valid selector");

    let img = document.select(&img_selector).next()?;
    let src = img.value().attr("src").filter(|src| !src.is_empty())?;

    Some(ImageRef {
        src: src.to_string(),
        alt: img.value().attr("alt").map(str::to_string),
    })
}

// Turns an <img src> into a fetchable URL
//
// Parameters:
//   src: the attribute value
//   scheme: prefix for protocol-relative sources, normally "https:"
//   origin: site origin for site-relative sources
//
// Examples:
//   "//host/a.png"        -> "https://host/a.png"
//   "/images/a.png"       -> "<origin>/images/a.png"
//   "https://host/a.png"  -> unchanged
pub fn resolve_image_src(src: &str, scheme: &str, origin: &str) -> String {
    if src.starts_with("//") {
        format!("{scheme}{src}")
    } else if src.starts_with('/') {
        format!("{origin}{src}")
    } else {
        src.to_string()
    }
}

// Base64-encodes image bytes into a "data:image/png;base64,..." URL.
pub fn to_data_url(bytes: &[u8]) -> String {
    let payload = base64::engine::general_purpose::STANDARD.encode(bytes);
    format!("{DATA_URL_PREFIX}{payload}")
}

pub fn is_data_url(url: &str) -> bool {
    url.starts_with(DATA_URL_PREFIX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_first_image() {
        let html = r#"
            <p>intro</p>
            <img src="//upload.example.org/Glorp.png" alt="Glorp.png">
            <img src="//upload.example.org/Other.png" alt="Other.png">
        "#;
        let image = find_first_image(&Html::parse_document(html)).unwrap();
        assert_eq!(image.src, "//upload.example.org/Glorp.png");
        assert_eq!(image.alt.as_deref(), Some("Glorp.png"));
    }

    #[test]
    fn test_image_without_alt() {
        let html = r#"<img src="//upload.example.org/Glorp.png">"#;
        let image = find_first_image(&Html::parse_document(html)).unwrap();
        assert_eq!(image.alt, None);
    }

    #[test]
    fn test_no_image_or_no_src() {
        assert_eq!(find_first_image(&Html::parse_document("<p>none</p>")), None);
        assert_eq!(find_first_image(&Html::parse_document(r#"<img alt="x">"#)), None);
    }

    #[test]
    fn test_resolve_image_src() {
        let origin = "https://thessum.miraheze.org";
        assert_eq!(
            resolve_image_src("//static.example.net/a.png", "https:", origin),
            "https://static.example.net/a.png"
        );
        assert_eq!(
            resolve_image_src("/w/a.png", "https:", origin),
            "https://thessum.miraheze.org/w/a.png"
        );
        assert_eq!(
            resolve_image_src("http://other.net/a.png", "https:", origin),
            "http://other.net/a.png"
        );
    }

    #[test]
    fn test_data_url() {
        let url = to_data_url(b"hello");
        assert_eq!(url, "data:image/png;base64,aGVsbG8=");
        assert!(is_data_url(&url));
        assert!(!is_data_url("https://example.com/a.png"));
    }
}
