// src/crawl/discover.rs
// =============================================================================
// Finds the books: fetches the index page and collects the start URL of
// every book listed in its table.
//
// This is the only place where a failure ends the whole run. Without the
// index there is nothing to crawl.
// =============================================================================

use crate::error::CrawlError;
use crate::extract::book_links;
use crate::fetch::Fetcher;
use url::Url;

// Fetches the index page and returns the book start URLs
//
// Returns:
//   Ok(urls) in document order, resolved against the index's final URL
//   Err(CrawlError::IndexStatus) for a non-2xx answer
//   Err(CrawlError::Request) if the request itself failed
pub async fn discover_books<F: Fetcher>(fetcher: &F, index_url: &Url) -> Result<Vec<Url>, CrawlError> {
    let page = fetcher.fetch(index_url).await?;

    if !page.is_success() {
        return Err(CrawlError::IndexStatus {
            url: index_url.to_string(),
            final_url: page.url.to_string(),
            status: page.status,
        });
    }

    let books = book_links(&page.text(), &page.url);
    tracing::info!(index = %page.url, books = books.len(), "found books");

    Ok(books)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crawl::testing::FakeSite;
    use reqwest::StatusCode;

    const INDEX: &str = r#"
        <html><body>
          <h1>Old Testament</h1>
          <table>
            <tr><td><a href="/ebook/1/">Genesis</a></td><td><a href="/ebook/2/">Exodus</a></td></tr>
            <tr><td><a href="3/">Leviticus</a></td></tr>
          </table>
          <a href="/contact">Contact</a>
        </body></html>
    "#;

    #[tokio::test]
    async fn test_books_resolved_against_final_url() {
        // The index redirects into /ebook/, so "3/" lands in /ebook/3/
        let site = FakeSite::new().redirect("http://bible.test/", "http://bible.test/ebook/", INDEX);

        let books = discover_books(&site, &Url::parse("http://bible.test/").unwrap())
            .await
            .unwrap();

        let books: Vec<&str> = books.iter().map(Url::as_str).collect();
        assert_eq!(
            books,
            vec![
                "http://bible.test/ebook/1/",
                "http://bible.test/ebook/2/",
                "http://bible.test/ebook/3/",
            ]
        );
    }

    #[tokio::test]
    async fn test_index_error_status_is_fatal() {
        let site = FakeSite::new().status("http://bible.test/", StatusCode::SERVICE_UNAVAILABLE);

        let err = discover_books(&site, &Url::parse("http://bible.test/").unwrap())
            .await
            .unwrap_err();

        match err {
            CrawlError::IndexStatus { status, .. } => assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE),
            other => panic!("expected IndexStatus, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_index_request_failure_is_fatal() {
        let site = FakeSite::new().unreachable("http://bible.test/");

        let result = discover_books(&site, &Url::parse("http://bible.test/").unwrap()).await;

        assert!(matches!(result, Err(CrawlError::Request { .. })));
    }

    #[tokio::test]
    async fn test_index_without_table_has_no_books() {
        let site = FakeSite::new().page("http://bible.test/", "<p>nothing here</p>");

        let books = discover_books(&site, &Url::parse("http://bible.test/").unwrap())
            .await
            .unwrap();

        assert!(books.is_empty());
    }
}
