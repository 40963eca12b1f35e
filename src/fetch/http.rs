// src/fetch/http.rs
// =============================================================================
// This module makes the real HTTP requests.
//
// Key functionality:
// - Builds ONE reqwest::Client for the whole run (the "session")
// - The client sends the same browser-like headers on every request
// - Follows redirects and remembers the final URL
// - Reads the whole body as raw bytes (we save it unchanged)
//
// No timeouts are set beyond reqwest's defaults, and nothing
// is retried: a failed request is reported to the caller as-is.
// =============================================================================

use crate::error::CrawlError;
use crate::fetch::page::{Fetcher, Page};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, ACCEPT_LANGUAGE};
use reqwest::Client;
use url::Url;

/// The user agent sent when none is given on the command line
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (X11; Linux x86_64; rv:40.0) Gecko/20100101 Firefox/40.0";

const DEFAULT_ACCEPT: &str = "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8";
const DEFAULT_ACCEPT_LANGUAGE: &str = "en-US,en;q=0.5";

// The crawl session: a reqwest client with our headers baked in
//
// Client keeps a connection pool internally, so successive requests
// to the same host reuse the open connection.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    // Builds the session
    //
    // Parameters:
    //   user_agent: value for the User-Agent header
    //
    // Returns: Err(CrawlError::Session) if the user agent is not a valid
    // header value or the TLS backend cannot start
    pub fn new(user_agent: &str) -> Result<Self, CrawlError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(DEFAULT_ACCEPT));
        headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static(DEFAULT_ACCEPT_LANGUAGE));

        let client = Client::builder()
            .user_agent(user_agent)
            .default_headers(headers)
            .build()
            .map_err(CrawlError::Session)?;

        Ok(Self { client })
    }
}

impl Fetcher for HttpFetcher {
    // GETs a URL and collects status, final URL and body
    async fn fetch(&self, url: &Url) -> Result<Page, CrawlError> {
        let request_error = |source| CrawlError::Request {
            url: url.to_string(),
            source,
        };

        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(request_error)?;

        // Grab these before .bytes() consumes the response
        let status = response.status();
        let final_url = response.url().clone();

        tracing::debug!(url = %url, final_url = %final_url, status = %status, "fetched");

        let body = response.bytes().await.map_err(request_error)?;

        Ok(Page {
            url: final_url,
            status,
            body: body.to_vec(),
        })
    }
}

// -----------------------------------------------------------------------------
// NOTES:
//
// 1. default_headers vs per-request headers
//    - default_headers() is applied to every request made through the client
//    - user_agent() is a shortcut for the User-Agent default header
//
// 2. Why is a 404 not an Err here?
//    - reqwest only returns Err when there is no response at all
//    - A 404 is a perfectly good response; the crawl decides what it means
//
// 3. response.url()
//    - After redirects this is where we actually ended up
//    - Relative links in the body are relative to THIS url, not the one we asked for
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_builds_with_default_user_agent() {
        assert!(HttpFetcher::new(DEFAULT_USER_AGENT).is_ok());
    }

    #[test]
    fn test_session_rejects_header_breaking_user_agent() {
        let result = HttpFetcher::new("bad\nagent");
        assert!(matches!(result, Err(CrawlError::Session(_))));
    }

    #[tokio::test]
    async fn test_unreachable_host_is_request_error() {
        let fetcher = HttpFetcher::new(DEFAULT_USER_AGENT).unwrap();
        // Port 9 on localhost (discard) is closed on any sane test machine
        let url = Url::parse("http://127.0.0.1:9/").unwrap();
        let result = fetcher.fetch(&url).await;
        match result {
            Err(CrawlError::Request { url, .. }) => assert_eq!(url, "http://127.0.0.1:9/"),
            other => panic!("expected request error, got {:?}", other),
        }
    }
}
