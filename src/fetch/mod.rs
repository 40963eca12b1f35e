// src/fetch/mod.rs
// =============================================================================
// This module fetches pages over HTTP.
//
// Submodules:
// - page: the Page type (what we keep from a response) and the Fetcher trait
// - http: the real Fetcher, backed by one reqwest::Client for the whole run
//
// Everything else in the crawler talks to the Fetcher trait, so the crawl
// logic can be driven by fake pages in tests.
// =============================================================================

mod http;
mod page;

pub use http::{HttpFetcher, DEFAULT_USER_AGENT};
pub use page::{Fetcher, Page};
