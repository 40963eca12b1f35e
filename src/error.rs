// src/error.rs
// =============================================================================
// Errors that can happen while crawling.
//
// Whether an error is fatal depends on where it happens, not on its kind:
// - anything returned while fetching the index page ends the whole run
// - anything returned while walking a book only ends that book
//
// main.rs wraps these in anyhow::Error when they reach the top.
// =============================================================================

use reqwest::StatusCode;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CrawlError {
    /// The HTTP session (reqwest::Client) could not be built,
    /// usually because a header value is not valid
    #[error("failed to set up HTTP session: {0}")]
    Session(#[source] reqwest::Error),

    /// Connection, DNS, TLS or body-read failure
    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The index page answered with something other than 2xx
    #[error("index page {url} returned HTTP {status} (final url {final_url})")]
    IndexStatus {
        url: String,
        final_url: String,
        status: StatusCode,
    },

    #[error("could not create directory {}: {source}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("could not write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_status_message_names_both_urls() {
        let err = CrawlError::IndexStatus {
            url: "http://example.com/books".to_string(),
            final_url: "http://example.com/books/".to_string(),
            status: StatusCode::NOT_FOUND,
        };
        let message = err.to_string();
        assert!(message.contains("http://example.com/books "));
        assert!(message.contains("final url http://example.com/books/"));
        assert!(message.contains("404"));
    }

    #[test]
    fn test_write_error_keeps_io_source() {
        let err = CrawlError::Write {
            path: PathBuf::from("/tmp/out/index.html"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(err.to_string().contains("/tmp/out/index.html"));
        assert!(std::error::Error::source(&err).is_some());
    }
}
