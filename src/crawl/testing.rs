// src/crawl/testing.rs
// =============================================================================
// An in-memory website for crawl tests.
//
// Pages are registered by URL; anything not registered answers 404.
// Every fetch is recorded so tests can check what was (not) requested.
// =============================================================================

use crate::error::CrawlError;
use crate::fetch::{Fetcher, Page};
use reqwest::StatusCode;
use std::collections::HashMap;
use std::sync::Mutex;
use url::Url;

enum Response {
    Page { status: StatusCode, final_url: String, body: String },
    Unreachable,
}

pub struct FakeSite {
    responses: HashMap<String, Response>,
    requests: Mutex<Vec<String>>,
}

impl FakeSite {
    pub fn new() -> Self {
        Self {
            responses: HashMap::new(),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// A 200 page served at `url`
    pub fn page(self, url: &str, html: &str) -> Self {
        self.redirect(url, url, html)
    }

    /// A 200 page requested as `url` but ending up at `final_url`
    pub fn redirect(mut self, url: &str, final_url: &str, html: &str) -> Self {
        self.responses.insert(
            url.to_string(),
            Response::Page {
                status: StatusCode::OK,
                final_url: final_url.to_string(),
                body: html.to_string(),
            },
        );
        self
    }

    /// An empty page with the given status
    pub fn status(mut self, url: &str, status: StatusCode) -> Self {
        self.responses.insert(
            url.to_string(),
            Response::Page {
                status,
                final_url: url.to_string(),
                body: String::new(),
            },
        );
        self
    }

    /// A URL whose request fails without a response
    pub fn unreachable(mut self, url: &str) -> Self {
        self.responses.insert(url.to_string(), Response::Unreachable);
        self
    }

    /// URLs fetched so far, in order
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

impl Fetcher for FakeSite {
    async fn fetch(&self, url: &Url) -> Result<Page, CrawlError> {
        self.requests.lock().unwrap().push(url.to_string());

        match self.responses.get(url.as_str()) {
            Some(Response::Page { status, final_url, body }) => Ok(Page {
                url: Url::parse(final_url).unwrap(),
                status: *status,
                body: body.clone().into_bytes(),
            }),
            Some(Response::Unreachable) => Err(CrawlError::Request {
                url: url.to_string(),
                // Any reqwest::Error will do; an invalid header is the easiest to make
                source: reqwest::Client::builder()
                    .user_agent("\n")
                    .build()
                    .unwrap_err(),
            }),
            None => Ok(Page {
                url: url.clone(),
                status: StatusCode::NOT_FOUND,
                body: b"not found".to_vec(),
            }),
        }
    }
}
