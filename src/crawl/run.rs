// src/crawl/run.rs
// =============================================================================
// Drives a whole crawl: discover the books, then walk them one after the
// other. Strictly sequential; one request in flight at a time.
// =============================================================================

use crate::crawl::chain::{walk_book, BookOutcome, BookReport};
use crate::crawl::discover::discover_books;
use crate::error::CrawlError;
use crate::fetch::Fetcher;
use crate::store::PageStore;
use std::io::Write;
use std::path::PathBuf;
use std::time::Duration;
use url::Url;

/// Pause between two page fetches within a book, unless configured otherwise
pub const DEFAULT_DELAY: Duration = Duration::from_secs(4);

#[derive(Debug, Clone)]
pub struct CrawlConfig {
    /// The index page listing the books
    pub source: Url,
    /// Root of the mirrored directory tree
    pub destination: PathBuf,
    pub delay: Duration,
}

/// Counters for the end-of-run log line
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CrawlSummary {
    pub books: usize,
    pub pages: usize,
    /// Books cut short by an error status, failed request or failed write
    pub failed_books: usize,
    /// Books stopped by the cycle guard
    pub cycles: usize,
    pub files: usize,
}

impl CrawlSummary {
    fn record(&mut self, report: &BookReport) {
        self.books += 1;
        self.pages += report.pages;
        if report.outcome.is_failure() {
            self.failed_books += 1;
        }
        if matches!(report.outcome, BookOutcome::Cycle(_)) {
            self.cycles += 1;
        }
    }
}

// Runs the crawl
//
// Every visited URL is written to `progress`, one per line.
// Returns Err only if the index page can't be fetched.
// Per-book problems are logged by the walk and counted in the summary.
pub async fn crawl<F: Fetcher>(
    fetcher: &F,
    config: &CrawlConfig,
    progress: &mut impl Write,
) -> Result<CrawlSummary, CrawlError> {
    tracing::info!(source = %config.source, destination = %config.destination.display(), "crawl started");

    let books = discover_books(fetcher, &config.source).await?;

    let mut store = PageStore::new(&config.destination);
    let mut summary = CrawlSummary::default();

    for book in books {
        let report = walk_book(fetcher, &mut store, book, config.delay, progress).await;
        tracing::info!(book = %report.start, pages = report.pages, outcome = ?report.outcome, "book done");
        summary.record(&report);
    }
    summary.files = store.files_written();

    tracing::info!(
        source = %config.source,
        books = summary.books,
        pages = summary.pages,
        files = summary.files,
        failed_books = summary.failed_books,
        cycles = summary.cycles,
        root = %store.root().display(),
        "crawl finished"
    );

    Ok(summary)
}
