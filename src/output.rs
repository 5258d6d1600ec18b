//! JSON dataset output.
//!
//! Serializes the enriched record table to disk for downstream packaging.
//! Files are organized by run date:
//!
//! ```text
//! output_dir/
//! └── 2023-06-15/
//!     └── news.json
//! ```
//!
//! Each row carries the record columns plus the four derived analytic
//! columns, in the order the listing rendered them.

use chrono::Local;
use std::error::Error;
use tokio::fs;
use tracing::{error, info, instrument};

use crate::models::EnrichedItem;

/// Write the enriched dataset under a dated directory.
///
/// Returns the path of the written file.
#[instrument(level = "info", skip_all, fields(output_dir = %output_dir))]
pub async fn write_dataset(
    items: &[EnrichedItem],
    output_dir: &str,
) -> Result<String, Box<dyn Error>> {
    let json = serde_json::to_string_pretty(items)?;

    let dated_dir = format!("{}/{}", output_dir, Local::now().date_naive());
    info!(%dated_dir, "Ensuring output directory exists");
    if let Err(e) = fs::create_dir_all(&dated_dir).await {
        error!(%dated_dir, error = %e, "Failed to create output dir");
        return Err(e.into());
    }

    let path = format!("{dated_dir}/news.json");
    info!(%path, rows = items.len(), "Writing dataset");
    fs::write(&path, json).await?;
    info!(%path, "Wrote JSON dataset");

    Ok(path)
}
