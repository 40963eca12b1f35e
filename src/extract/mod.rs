// src/extract/mod.rs
// =============================================================================
// Link extraction from fetched HTML.
//
// The crawler never looks at page content beyond two things: the book links
// on the index page and the single "next" link on each chapter page.
// Both are found with CSS selectors through LinkSelector.
// =============================================================================

mod html;

pub use html::{book_links, next_href, resolve_url};
