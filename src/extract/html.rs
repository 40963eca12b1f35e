// src/extract/html.rs
// =============================================================================
// This module pulls links out of HTML pages.
//
// We use the `scraper` crate which:
// - Parses HTML into a DOM (html5ever, the same parser family browsers use)
// - Lets us find elements with CSS selectors
//
// And the `url` crate to resolve relative hrefs against the page URL.
//
// Two kinds of links matter to the crawler:
// - book links: anchors directly inside a table cell on the index page
// - the next link: the anchor inside <div class="linkNext"> on a chapter page
// =============================================================================

use scraper::{Html, Selector};
use std::collections::BTreeSet;
use url::Url;

/// Anchors that are direct children of a table cell
pub const BOOK_LINK_SELECTOR: &str = "td > a[href]";

/// Anchors directly inside a div whose class attribute is exactly "linkNext".
/// `div.linkNext` would also match class="linkNext other", which we don't want.
pub const NEXT_LINK_SELECTOR: &str = r#"div[class="linkNext"] > a[href]"#;

// A parsed CSS selector that yields href values
//
// This is the one "find links in markup" capability the crawl needs;
// everything else is built on top of it.
#[derive(Debug, Clone)]
pub struct LinkSelector {
    selector: Selector,
}

impl LinkSelector {
    /// Parses a CSS selector. Returns None if it is not valid CSS.
    pub fn parse(css: &str) -> Option<Self> {
        Selector::parse(css).ok().map(|selector| Self { selector })
    }

    /// Raw href values of every matching element, in document order.
    /// Duplicates are kept.
    pub fn hrefs(&self, html: &str) -> Vec<String> {
        let document = Html::parse_document(html);
        document
            .select(&self.selector)
            .filter_map(|element| element.value().attr("href"))
            .map(str::to_string)
            .collect()
    }
}

// Selectors are constants, so failing to parse them is a programming error
fn builtin(css: &str) -> LinkSelector {
    LinkSelector::parse(css).expect("built-in selector is valid CSS")
}

// Extracts the book start URLs from the index page
//
// Parameters:
//   html: the index page body
//   base_url: the index page's final URL (after redirects)
//
// Returns: absolute URLs, in document order, duplicates kept.
// Hrefs that can't be resolved at all are logged and skipped.
pub fn book_links(html: &str, base_url: &Url) -> Vec<Url> {
    builtin(BOOK_LINK_SELECTOR)
        .hrefs(html)
        .into_iter()
        .filter_map(|href| {
            let resolved = resolve_url(base_url, &href);
            if resolved.is_none() {
                tracing::warn!(href = %href, base = %base_url, "skipping unresolvable book link");
            }
            resolved
        })
        .collect()
}

// Finds the raw href of the page's "next" link
//
// Returns Some(href) only when the linkNext container holds exactly one
// DISTINCT href. Zero hrefs means the chain ends here; two or more
// different hrefs is ambiguous, and we don't guess.
// The same href repeated (e.g. a text link and an icon link) counts once.
pub fn next_href(html: &str) -> Option<String> {
    let distinct: BTreeSet<String> = builtin(NEXT_LINK_SELECTOR).hrefs(html).into_iter().collect();

    if distinct.len() == 1 {
        distinct.into_iter().next()
    } else {
        if distinct.len() > 1 {
            tracing::debug!(candidates = distinct.len(), "ambiguous next link");
        }
        None
    }
}

// Resolves a possibly-relative href to an absolute URL
//
// Examples:
//   base = "http://example.com/ebook/1/"
//   href = "2.html"             -> Some("http://example.com/ebook/1/2.html")
//   href = "/ebook/2/"          -> Some("http://example.com/ebook/2/")
//   href = "http://other.org/"  -> Some("http://other.org/")
//   href = "javascript:void(0)" -> Some("javascript:void(0)"), still a URL!
//
// Scheme filtering is the caller's job.
pub fn resolve_url(base: &Url, href: &str) -> Option<Url> {
    base.join(href).ok()
}

// -----------------------------------------------------------------------------
// NOTES:
//
// 1. "td > a" vs "td a"
//    - ">" is the child combinator: the <a> must sit directly in the <td>
//    - "td a" would also match anchors buried in nested markup
//
// 2. [class="linkNext"] vs .linkNext
//    - The attribute selector compares the whole attribute string
//    - .linkNext matches any element that has linkNext among its classes
//
// 3. Why BTreeSet for the next link?
//    - We only care how many DIFFERENT hrefs there are
//    - Any set works; BTreeSet keeps debug output stable
// -----------------------------------------------------------------------------
