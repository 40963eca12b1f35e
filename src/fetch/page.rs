// src/fetch/page.rs
// =============================================================================
// The response data the crawler works with, and the seam it fetches through.
// =============================================================================

use crate::error::CrawlError;
use reqwest::StatusCode;
use std::borrow::Cow;
use url::Url;

/// A fetched page.
///
/// Lives only long enough to be saved and searched for the next link.
#[derive(Debug, Clone)]
pub struct Page {
    /// Final URL after redirects. Relative links are resolved against this,
    /// and the save path is derived from it.
    pub url: Url,
    pub status: StatusCode,
    /// Raw body, saved to disk byte for byte
    pub body: Vec<u8>,
}

impl Page {
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// Body as text for HTML parsing. Invalid UTF-8 is replaced,
    /// the saved bytes are not affected.
    pub fn text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.body)
    }
}

/// Anything that can GET a URL and hand back a Page.
///
/// A non-2xx status is still Ok(Page): callers decide what a bad status
/// means for them (fatal for the index, end-of-book for a chapter).
/// Err is for requests that never produced a response.
#[allow(async_fn_in_trait)]
pub trait Fetcher {
    async fn fetch(&self, url: &Url) -> Result<Page, CrawlError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(status: StatusCode, body: &[u8]) -> Page {
        Page {
            url: Url::parse("http://example.com/ebook/1/").unwrap(),
            status,
            body: body.to_vec(),
        }
    }

    #[test]
    fn test_success_statuses() {
        assert!(page(StatusCode::OK, b"").is_success());
        assert!(!page(StatusCode::NOT_FOUND, b"").is_success());
        assert!(!page(StatusCode::INTERNAL_SERVER_ERROR, b"").is_success());
    }

    #[test]
    fn test_text_is_lossy_for_bad_utf8() {
        let p = page(StatusCode::OK, b"<p>\xff</p>");
        assert_eq!(p.text(), "<p>\u{fffd}</p>");
        // The raw bytes are untouched
        assert_eq!(p.body, b"<p>\xff</p>");
    }
}
