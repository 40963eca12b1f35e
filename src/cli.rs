// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
//   bible-crawler <SOURCE_URL> <DESTINATION> [--delay SECS] [--user-agent UA]
//                 [--log-level LEVEL]
//
// The two positional arguments are all a normal run needs; the flags only
// exist to tune the defaults.
// =============================================================================

use crate::crawl::{CrawlConfig, DEFAULT_DELAY};
use crate::fetch::DEFAULT_USER_AGENT;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use std::time::Duration;
use url::Url;

#[derive(Parser, Debug)]
#[command(
    name = "bible-crawler",
    version,
    about = "Mirrors the books of an online bible site to a local directory",
    long_about = "bible-crawler reads an index page, takes every link found in its table as the \
                  first page of a book, and follows each book's \"next\" links page by page, \
                  saving every page unchanged under DESTINATION in a tree that mirrors the URL paths."
)]
pub struct Cli {
    /// Index page listing the books (e.g. http://www.myanmarbible.com/bible/Judson/html/)
    pub source_url: Url,

    /// Directory the pages are saved under (created if missing)
    pub destination: PathBuf,

    /// Seconds to wait between two page fetches, fractions allowed [default: 4]
    #[arg(long, value_name = "SECS", value_parser = parse_delay)]
    pub delay: Option<Duration>,

    /// User-Agent header sent with every request
    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    /// Log level for stderr diagnostics; RUST_LOG takes precedence when set
    #[arg(long, value_enum, default_value = "info")]
    pub log_level: LogLevel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    // Filter directive for tracing-subscriber. At debug and below the HTML
    // parser crates get very chatty, so they stay at warn.
    pub fn directive(self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug,selectors=warn,html5ever=warn",
            LogLevel::Trace => "trace,selectors=warn,html5ever=warn",
        }
    }
}

impl Cli {
    pub fn crawl_config(&self) -> CrawlConfig {
        CrawlConfig {
            source: self.source_url.clone(),
            destination: self.destination.clone(),
            delay: self.delay.unwrap_or(DEFAULT_DELAY),
        }
    }
}

// Parses "4", "0.5", "0" into a Duration
fn parse_delay(value: &str) -> Result<Duration, String> {
    let seconds: f64 = value
        .parse()
        .map_err(|_| format!("'{value}' is not a number of seconds"))?;
    Duration::try_from_secs_f64(seconds).map_err(|e| format!("invalid delay '{value}': {e}"))
}
