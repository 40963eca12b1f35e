// src/crawl/mod.rs
// =============================================================================
// This module handles the crawl itself.
//
// - discover: index page -> list of book start URLs
// - chain: one book -> follow "next" links, saving every page
// - run: the whole crawl, books one after another
//
// All fetching goes through the fetch::Fetcher trait, so these are tested
// against the in-memory site in testing.rs.
// =============================================================================

mod chain;
mod discover;
mod run;

#[cfg(test)]
mod testing;

pub use run::{crawl, CrawlConfig, DEFAULT_DELAY};
