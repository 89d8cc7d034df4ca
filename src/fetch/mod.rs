// src/fetch/mod.rs
// =============================================================================
// HTTP transport for the scraper.
//
// Submodules:
// - http: reqwest-backed fetcher and the FetchError type
// =============================================================================

mod http;

pub use http::{FetchError, Fetched, HttpFetcher};
