//! HTTP client utilities.
//!
//! Provides the shared HTTP client used by the fetcher.

use std::time::Duration;

use reqwest::{Client, ClientBuilder};

use crate::error::{ProdcatError, Result};

/// Per-request timeout. Part of the observable fetch contract: every attempt
/// is bounded by this duration, and it is not configurable per call.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

/// Build a configured HTTP client.
///
/// # Errors
///
/// Returns error if client construction fails.
pub fn build_client(timeout: Duration) -> Result<Client> {
    ClientBuilder::new()
        .timeout(timeout)
        .user_agent(format!("prodcat/{}", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(|e| ProdcatError::Network(e.to_string()))
}

/// Get a client bound to the default request timeout.
pub fn default_client() -> Result<Client> {
    build_client(REQUEST_TIMEOUT)
}
