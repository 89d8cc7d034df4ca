// src/lib.rs
// =============================================================================
// Library root. The binary in main.rs is only a front end; all scraping logic
// lives here so the integration tests in tests/ can use it directly.
// =============================================================================

#![forbid(unsafe_code)]

pub mod cli;
pub mod config;
pub mod fetch;
pub mod logging;
pub mod report;
pub mod run;
pub mod wiki;
