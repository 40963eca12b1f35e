// src/main.rs
// =============================================================================
// This is the entry point of the crawler.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Set up logging (timestamped, to stderr; stdout is kept for URLs)
// 3. Build the HTTP session and run the crawl
// 4. Exit with the proper code (0 = crawl ran, 1 = couldn't even start)
// =============================================================================

mod cli;
mod crawl;
mod error;
mod extract;
mod fetch;
mod store;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, LogLevel};
use fetch::HttpFetcher;
use tracing_subscriber::fmt::time::ChronoLocal;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_logging(cli.log_level);

    let exit_code = match run(cli).await {
        Ok(()) => 0,
        Err(e) => {
            // {:#} prints the whole context chain on one line
            tracing::error!("{:#}", e);
            1
        }
    };

    std::process::exit(exit_code);
}

// Everything that can stop the run before it gets going:
// a bad user agent, or an index page we can't fetch.
// Once books are being walked, problems are logged and skipped instead.
async fn run(cli: Cli) -> Result<()> {
    let fetcher = HttpFetcher::new(&cli.user_agent).context("could not start the HTTP session")?;
    let config = cli.crawl_config();

    // stdout carries only the visited URLs, one per line
    let mut progress = std::io::stdout().lock();
    crawl::crawl(&fetcher, &config, &mut progress)
        .await
        .with_context(|| format!("crawl of {} aborted", config.source))?;

    Ok(())
}

// Sends tracing output to stderr with a wall-clock time on every line
fn init_logging(level: LogLevel) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.directive()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_timer(ChronoLocal::new("%H:%M:%S".to_string()))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
