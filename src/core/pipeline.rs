//! Top-level fetch → group → write pipeline.

use super::fetcher::Fetcher;
use super::grouping::{group_by_category, to_json};
use crate::error::Result;
use crate::storage::config::ResolvedConfig;
use crate::storage::writer;

/// Execute the full pipeline with a default fetcher.
///
/// # Errors
///
/// Returns error on client construction or serialization failure. Fetch
/// failures are not errors: they print "Unsuccessful request." and return
/// success without producing output. Write failures are reported and
/// likewise do not fail the run.
pub async fn run(config: &ResolvedConfig) -> Result<()> {
    let fetcher = Fetcher::new()?;
    run_with_fetcher(&fetcher, config).await
}

/// Execute the full pipeline with the given fetcher.
///
/// # Errors
///
/// See [`run`].
pub async fn run_with_fetcher(fetcher: &Fetcher, config: &ResolvedConfig) -> Result<()> {
    let items = fetcher.fetch_items(&config.url).await;

    if items.is_empty() {
        tracing::warn!(url = %config.url, "no items fetched, skipping output");
        println!("Unsuccessful request.");
        return Ok(());
    }

    tracing::debug!(count = items.len(), "grouping fetched items");
    let grouped = group_by_category(items);
    let json = to_json(&grouped, config.compact)?;

    match writer::write_document(&config.output, &json) {
        Ok(()) => {
            println!(
                "Data successfully written to the file: {}",
                config.output.display()
            );
        }
        Err(e) => {
            tracing::error!(path = %config.output.display(), error = %e, "failed to write output");
            eprintln!("Failed to save the result: {e}");
        }
    }

    Ok(())
}
