//! Command-line interface definitions for newshound.
//!
//! This module defines the CLI arguments and options using the `clap` crate.
//! All arguments can be provided via command-line flags or environment variables.

use clap::Parser;

/// Command-line arguments for one scrape run.
///
/// # Examples
///
/// ```sh
/// # Current month only, no category filter
/// newshound --keyword "climate change"
///
/// # Three months of Politics news, custom output locations
/// newshound -k inflation -c Politics -n 3 -o ./output -p ./output/pictures
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Search phrase to submit to AP News
    #[arg(short, long, env = "NEWS_KEYWORD")]
    pub keyword: String,

    /// Category facet to filter results by (omit for no filter)
    #[arg(short, long, env = "NEWS_CATEGORY")]
    pub category: Option<String>,

    /// Number of calendar months of news to keep (0 is treated as 1)
    #[arg(short = 'n', long, env = "NEWS_MONTHS", default_value_t = 1)]
    pub months: u32,

    /// Base URL of the AP News search page
    #[arg(long, default_value = "https://apnews.com/search")]
    pub search_url: String,

    /// Directory for downloaded pictures
    #[arg(short, long, default_value = "output/pictures")]
    pub pictures_dir: String,

    /// Directory for the JSON dataset
    #[arg(short, long, default_value = "output")]
    pub output_dir: String,

    /// Listing-page request timeout in seconds
    #[arg(long, default_value_t = 30)]
    pub nav_timeout_secs: u64,
}
