//! # Newshound
//!
//! Scrapes the AP News search listing into an enriched dataset: search a
//! keyword, optionally filter by category, paginate newest-first until a
//! month-granular cutoff, download each kept item's picture, derive
//! keyword-count and money-presence columns, and write the result as JSON.
//!
//! ## Usage
//!
//! ```sh
//! newshound -k "climate change" -c Science -n 3
//! ```
//!
//! ## Architecture
//!
//! One invocation is one sequential pass:
//! 1. **Setup**: submit the search, apply the category filter, sort newest-first
//! 2. **Pagination**: page → extract → filter-by-cutoff → advance, with
//!    pictures downloaded for kept items along the way
//! 3. **Enrichment**: per-record keyword and monetary-value columns
//! 4. **Output**: JSON dataset under a dated directory
//!
//! Failures carry a business-vs-application classification so the invoking
//! work-item runner can report them without inspecting error types.

use clap::Parser;
use std::error::Error;
use tracing::{debug, error, info};
use tracing_subscriber::{fmt as tfmt, EnvFilter};

mod cli;
mod config;
mod dates;
mod enrich;
mod error;
mod extract;
mod media;
mod models;
mod output;
mod page;
mod paginate;
mod selectors;

use cli::Cli;
use config::ScrapeConfig;
use enrich::enrich_all;
use error::ScrapeError;
use media::MediaDir;
use models::EnrichedItem;
use page::{HttpListingPage, SortOrder};
use paginate::PaginationController;

/// Run the scrape: setup preconditions, paginate, enrich.
async fn scrape(config: &ScrapeConfig) -> Result<Vec<EnrichedItem>, ScrapeError> {
    let mut listing = HttpListingPage::new(config)?;

    info!(keyword = %config.keyword, "Searching keyword");
    listing.search(&config.keyword).await?;

    if !config.category.is_empty() {
        info!(category = %config.category, "Applying category filter");
        listing.select_category(&config.category).await?;
    }

    // Newest-first ordering is what makes the cutoff latch sound.
    listing.sort_by(SortOrder::Newest).await?;

    let media = MediaDir::new(config);
    let items = PaginationController::new(&mut listing, &media, config)
        .run()
        .await?;
    info!(count = items.len(), "Scraped news items");

    Ok(enrich_all(items, &config.keyword))
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let start_time = std::time::Instant::now();
    info!("newshound starting up");

    let args = Cli::parse();
    debug!(?args, "Parsed CLI arguments");
    let config = ScrapeConfig::from_cli(&args);

    let rows = match scrape(&config).await {
        Ok(rows) => rows,
        Err(e) => {
            error!(
                classification = ?e.kind(),
                code = e.code(),
                error = %e,
                "Scrape failed; no partial results written"
            );
            return Err(e.into());
        }
    };

    let path = output::write_dataset(&rows, &config.output_dir).await?;

    let elapsed = start_time.elapsed();
    info!(
        ?elapsed,
        secs = elapsed.as_secs(),
        rows = rows.len(),
        dataset = %path,
        "Execution complete"
    );

    Ok(())
}
