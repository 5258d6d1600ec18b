//! Runtime configuration for one scrape run.
//!
//! A [`ScrapeConfig`] is built once in `main` from the parsed CLI arguments
//! and passed by reference into the listing page, controller, and media
//! fetcher. No component reads configuration from anywhere else.

use crate::cli::Cli;

/// Everything one scrape invocation needs to know.
#[derive(Debug, Clone)]
pub struct ScrapeConfig {
    /// Search phrase typed into the AP News search box.
    pub keyword: String,
    /// Category facet to filter by. Empty means no category filter.
    pub category: String,
    /// How many calendar months of news to keep. Zero is treated as one.
    pub months_to_extract: u32,
    /// Base URL of the AP News search page.
    pub search_url: String,
    /// Directory where downloaded pictures land.
    pub pictures_dir: String,
    /// Directory where the JSON dataset lands.
    pub output_dir: String,
    /// Upper bound on listing-page request time, in seconds.
    pub nav_timeout_secs: u64,
}

impl ScrapeConfig {
    pub fn from_cli(args: &Cli) -> Self {
        Self {
            keyword: args.keyword.clone(),
            category: args.category.clone().unwrap_or_default(),
            months_to_extract: args.months,
            search_url: args.search_url.clone(),
            pictures_dir: args.pictures_dir.clone(),
            output_dir: args.output_dir.clone(),
            nav_timeout_secs: args.nav_timeout_secs,
        }
    }
}
