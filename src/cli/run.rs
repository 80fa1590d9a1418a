//! Command execution.

use crate::cli::args::Cli;
use crate::core::pipeline;
use crate::error::Result;
use crate::storage::config::ResolvedConfig;

/// Resolve configuration and run the pipeline.
///
/// # Errors
///
/// Returns error on configuration or serialization failure.
pub async fn execute(cli: &Cli) -> Result<()> {
    let config = ResolvedConfig::resolve(cli)?;
    tracing::debug!(url = %config.url, output = %config.output.display(), "resolved configuration");
    pipeline::run(&config).await
}
