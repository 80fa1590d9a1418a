//! Retrying catalog fetcher.
//!
//! Issues a single GET request with a fixed timeout and a bounded retry
//! policy: timeouts and 5xx responses retry, every other failure is
//! terminal. All failures collapse to an empty outcome; callers never see
//! the cause except through logs.

use reqwest::Client;
use reqwest::header::CONTENT_TYPE;
use std::time::Duration;

use super::http;
use super::models::{Item, parse_items};
use crate::error::Result;

/// Retry attempts permitted beyond the first request. A fetch issues at most
/// `MAX_RETRIES + 1` requests.
pub const MAX_RETRIES: u32 = 5;

/// Media type a successful response must declare.
const JSON_MEDIA_TYPE: &str = "application/json";

/// Outcome of a fetch: either the validated response body, or nothing.
///
/// Every failure shape (timeout, bad status, wrong content type, transport
/// error, exhausted retries) maps to `Empty`. The cause is logged but not
/// exposed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    /// Response body text, content type confirmed to be JSON.
    Success(String),
    /// Terminal failure of any kind.
    Empty,
}

impl FetchOutcome {
    /// True if the fetch produced a body.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Extract the body, if any.
    #[must_use]
    pub fn into_body(self) -> Option<String> {
        match self {
            Self::Success(body) => Some(body),
            Self::Empty => None,
        }
    }
}

/// Per-attempt failure classification. Internal: used to decide whether an
/// attempt retries and to tag log events, never returned to callers.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
enum FetchFailure {
    #[error("request timed out")]
    Timeout,
    #[error("server error status {0}")]
    ServerError(u16),
    #[error("unsuccessful status {0}")]
    ClientOrRedirect(u16),
    #[error("response content type is not application/json")]
    InvalidContentType,
    #[error("transport error: {0}")]
    Transport(String),
    #[error("retry budget exhausted")]
    RetriesExhausted,
}

impl FetchFailure {
    /// Only timeouts and 5xx responses retry. Other transport errors
    /// (DNS failure, refused connection) are deliberately terminal; the
    /// asymmetry is part of the contract.
    const fn is_retryable(&self) -> bool {
        matches!(self, Self::Timeout | Self::ServerError(_))
    }
}

/// Retrying HTTP fetcher. Owns one client bound to the fixed request
/// timeout; reusable and safe to share across concurrent fetch calls.
#[derive(Debug, Clone)]
pub struct Fetcher {
    client: Client,
}

impl Fetcher {
    /// Create a fetcher with the default request timeout.
    ///
    /// # Errors
    ///
    /// Returns error if client construction fails.
    pub fn new() -> Result<Self> {
        Ok(Self {
            client: http::default_client()?,
        })
    }

    /// Create a fetcher with a custom per-attempt timeout.
    ///
    /// # Errors
    ///
    /// Returns error if client construction fails.
    pub fn with_timeout(timeout: Duration) -> Result<Self> {
        Ok(Self {
            client: http::build_client(timeout)?,
        })
    }

    /// Fetch `url`, retrying timeouts and 5xx responses up to [`MAX_RETRIES`]
    /// times. Returns the body text on a 2xx JSON response, otherwise
    /// [`FetchOutcome::Empty`]. Retries are sequential and immediate.
    pub async fn fetch(&self, url: &str) -> FetchOutcome {
        let mut attempt: u32 = 0;

        loop {
            if attempt == 0 {
                tracing::info!(url = %url, "sending GET request");
            } else if attempt > MAX_RETRIES {
                tracing::error!(
                    url = %url,
                    cause = %FetchFailure::RetriesExhausted,
                    "max retry attempts exceeded, returning empty result"
                );
                return FetchOutcome::Empty;
            } else {
                tracing::info!(url = %url, attempt, "retrying request");
            }

            match self.attempt(url).await {
                Ok(body) => {
                    tracing::info!(url = %url, "request succeeded");
                    return FetchOutcome::Success(body);
                }
                Err(failure) if failure.is_retryable() => {
                    tracing::warn!(url = %url, %failure, "retryable failure");
                    attempt += 1;
                }
                Err(failure) => {
                    tracing::error!(url = %url, %failure, "terminal failure, returning empty result");
                    return FetchOutcome::Empty;
                }
            }
        }
    }

    /// Fetch `url` and parse the body as a JSON array of items. An empty
    /// fetch or an unparseable body yields an empty vec.
    pub async fn fetch_items(&self, url: &str) -> Vec<Item> {
        match self.fetch(url).await {
            FetchOutcome::Success(body) => parse_items(&body),
            FetchOutcome::Empty => Vec::new(),
        }
    }

    /// One request and its resolution. The 5xx check precedes the general
    /// status check so server errors classify as retryable.
    async fn attempt(&self, url: &str) -> std::result::Result<String, FetchFailure> {
        let response = match self.client.get(url).send().await {
            Ok(response) => response,
            Err(e) if e.is_timeout() => return Err(FetchFailure::Timeout),
            Err(e) => return Err(FetchFailure::Transport(e.to_string())),
        };

        let status = response.status();
        if status.is_server_error() {
            return Err(FetchFailure::ServerError(status.as_u16()));
        }
        if !status.is_success() {
            return Err(FetchFailure::ClientOrRedirect(status.as_u16()));
        }
        if !declares_json(&response) {
            return Err(FetchFailure::InvalidContentType);
        }

        match response.text().await {
            Ok(body) => Ok(body),
            Err(e) if e.is_timeout() => Err(FetchFailure::Timeout),
            Err(e) => Err(FetchFailure::Transport(e.to_string())),
        }
    }
}

/// Check the declared media type, ignoring parameters such as charset
/// (`application/json; charset=utf-8` passes).
fn declares_json(response: &reqwest::Response) -> bool {
    response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(';').next())
        .is_some_and(|media_type| media_type.trim() == JSON_MEDIA_TYPE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timeouts_and_server_errors_retry() {
        assert!(FetchFailure::Timeout.is_retryable());
        assert!(FetchFailure::ServerError(500).is_retryable());
        assert!(FetchFailure::ServerError(503).is_retryable());
        assert!(FetchFailure::ServerError(599).is_retryable());
    }

    #[test]
    fn other_failures_are_terminal() {
        assert!(!FetchFailure::ClientOrRedirect(404).is_retryable());
        assert!(!FetchFailure::ClientOrRedirect(301).is_retryable());
        assert!(!FetchFailure::InvalidContentType.is_retryable());
        assert!(!FetchFailure::Transport("connection refused".to_string()).is_retryable());
        assert!(!FetchFailure::RetriesExhausted.is_retryable());
    }

    #[test]
    fn outcome_helpers() {
        let success = FetchOutcome::Success("[]".to_string());
        assert!(success.is_success());
        assert_eq!(success.into_body(), Some("[]".to_string()));

        let empty = FetchOutcome::Empty;
        assert!(!empty.is_success());
        assert_eq!(empty.into_body(), None);
    }
}
