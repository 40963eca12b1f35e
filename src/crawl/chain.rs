// src/crawl/chain.rs
// =============================================================================
// Walks one book: follows the chain of "next" links from its first page.
//
// How it works:
// 1. Fetch the current page; stop the book on a failed request or a non-2xx
// 2. Save the raw bytes
// 3. Look for exactly one next link; stop if there is none, it isn't
//    http(s), or we've already been there (cycle guard)
// 4. Wait the politeness delay, move to the next page, repeat
//
// Nothing here is fatal for the run. Every stop is logged and reported back
// as a BookOutcome, and the caller moves on to the next book.
// =============================================================================

use crate::extract::{next_href, resolve_url};
use crate::fetch::Fetcher;
use crate::store::PageStore;
use reqwest::StatusCode;
use std::collections::HashSet;
use std::io::Write;
use std::time::Duration;
use url::Url;

// The URLs visited while walking ONE book
//
// A fresh set is made for every book, so two books may share pages.
#[derive(Debug, Default)]
pub struct SeenSet {
    urls: HashSet<Url>,
}

impl SeenSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, url: &Url) -> bool {
        self.urls.contains(url)
    }

    /// Returns false if the URL was already there
    pub fn insert(&mut self, url: Url) -> bool {
        self.urls.insert(url)
    }
}

/// Why a book's chain stopped
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookOutcome {
    /// The last page had no usable next link (none, or ambiguous)
    EndOfChain,
    /// The next link didn't resolve or wasn't http(s)
    InvalidNext(String),
    /// The next link pointed back at a page of this book
    Cycle(Url),
    /// A page answered with a non-2xx status
    HttpStatus(StatusCode),
    /// A request never got a response
    FetchFailed,
    /// A page was fetched but couldn't be written to disk
    SaveFailed,
}

impl BookOutcome {
    /// True when the book ended because something went wrong,
    /// rather than because the chain ran out
    pub fn is_failure(&self) -> bool {
        matches!(
            self,
            BookOutcome::HttpStatus(_) | BookOutcome::FetchFailed | BookOutcome::SaveFailed
        )
    }
}

#[derive(Debug)]
pub struct BookReport {
    pub start: Url,
    /// Pages fetched and saved
    pub pages: usize,
    pub outcome: BookOutcome,
}

// Result of handling one page
enum Step {
    // Page saved, go on to this URL
    Advance(Url),
    // Chain over; `saved` says whether the current page made it to disk
    Stop { outcome: BookOutcome, saved: bool },
}

// Walks a book from its start page until the chain ends
//
// Parameters:
//   fetcher: the HTTP session (or a fake one in tests)
//   store: where pages are saved
//   start: the book's first page
//   delay: pause between one saved page and fetching the next
//   progress: where visited URLs go, one per line (stdout in a real run)
//
// Each page is fetched at most once: a repeat is caught before the fetch.
pub async fn walk_book<F: Fetcher>(
    fetcher: &F,
    store: &mut PageStore,
    start: Url,
    delay: Duration,
    progress: &mut impl Write,
) -> BookReport {
    let mut seen = SeenSet::new();
    let mut current = start.clone();
    let mut pages = 0;

    loop {
        match step(fetcher, store, &current, &mut seen, progress).await {
            Step::Advance(next) => {
                pages += 1;
                tokio::time::sleep(delay).await;
                current = next;
            }
            Step::Stop { outcome, saved } => {
                if saved {
                    pages += 1;
                }
                return BookReport {
                    start,
                    pages,
                    outcome,
                };
            }
        }
    }
}

// Fetches, saves and finds the next link for a single page
async fn step<F: Fetcher>(
    fetcher: &F,
    store: &mut PageStore,
    url: &Url,
    seen: &mut SeenSet,
    progress: &mut impl Write,
) -> Step {
    seen.insert(url.clone());
    if let Err(e) = writeln!(progress, "{}", url) {
        tracing::warn!(url = %url, error = %e, "could not write progress line");
    }

    let page = match fetcher.fetch(url).await {
        Ok(page) => page,
        Err(e) => {
            tracing::error!(url = %url, error = %e, "request failed");
            return Step::Stop {
                outcome: BookOutcome::FetchFailed,
                saved: false,
            };
        }
    };

    if !page.is_success() {
        tracing::error!(url = %url, final_url = %page.url, status = %page.status, "error status");
        return Step::Stop {
            outcome: BookOutcome::HttpStatus(page.status),
            saved: false,
        };
    }

    if let Err(e) = store.save(&page).await {
        tracing::error!(url = %url, error = %e, "could not save page");
        return Step::Stop {
            outcome: BookOutcome::SaveFailed,
            saved: false,
        };
    }

    let Some(href) = next_href(&page.text()) else {
        tracing::info!(url = %page.url, "no next link, book finished");
        return Step::Stop {
            outcome: BookOutcome::EndOfChain,
            saved: true,
        };
    };

    let next = match resolve_url(&page.url, &href) {
        Some(next) if matches!(next.scheme(), "http" | "https") => next,
        Some(other) => return invalid_next(other.to_string()),
        None => return invalid_next(href),
    };

    if seen.contains(&next) {
        tracing::warn!(url = %next, "break on seen url");
        return Step::Stop {
            outcome: BookOutcome::Cycle(next),
            saved: true,
        };
    }

    Step::Advance(next)
}

fn invalid_next(link: String) -> Step {
    tracing::warn!(link = %link, "break on invalid url");
    Step::Stop {
        outcome: BookOutcome::InvalidNext(link),
        saved: true,
    }
}
