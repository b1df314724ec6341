//! Error types for Baca operations.
//!
//! This module defines the main error type [`BacaError`] which represents
//! all possible errors that can occur while fetching and scraping source
//! articles.
//!
//! # Example
//!
//! ```rust
//! use baca_core::{BacaError, Result};
//!
//! fn check_url(url: &str) -> Result<()> {
//!     if !url.starts_with("http") {
//!         return Err(BacaError::InvalidUrl(url.to_string()));
//!     }
//!     Ok(())
//! }
//! ```

use thiserror::Error;

/// Main error type for article scraping operations.
///
/// Fetch failures (transport errors, timeouts, non-2xx statuses) are the
/// only fatal conditions. Heuristic misses during extraction never produce
/// an error; every metadata field degrades to an empty value instead.
#[derive(Error, Debug)]
pub enum BacaError {
    /// HTTP request errors from reqwest.
    ///
    /// This variant wraps network errors, DNS failures, connection issues,
    /// and other transport-level problems.
    #[cfg(feature = "fetch")]
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Non-success HTTP status.
    ///
    /// Returned when the source URL responds with anything outside the
    /// 2xx range. No partial extraction is returned in this case.
    #[error("Request failed with status {status}")]
    HttpStatus { status: u16 },

    /// Request timeout.
    ///
    /// Returned when an HTTP request exceeds the configured timeout duration.
    #[error("Request timed out after {timeout} seconds")]
    Timeout { timeout: u64 },

    /// Invalid URL provided.
    ///
    /// Returned when a URL cannot be parsed or is missing a scheme.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// HTML parsing errors.
    ///
    /// Returned when a CSS selector is invalid. Malformed markup itself is
    /// never an error; documents are parsed permissively.
    #[error("Failed to parse HTML: {0}")]
    HtmlParseError(String),

    /// Text rewriting failed.
    ///
    /// Wraps errors reported by the external rewriting capability driven
    /// by the content pipeline.
    #[error("Rewrite failed: {0}")]
    RewriteError(String),
}

impl BacaError {
    /// Wraps an arbitrary capability error as a rewrite failure.
    pub fn rewrite<E: std::fmt::Display>(err: E) -> Self {
        BacaError::RewriteError(err.to_string())
    }
}

/// Result type alias for BacaError.
///
/// This is a convenience alias for `std::result::Result<T, BacaError>`.
pub type Result<T> = std::result::Result<T, BacaError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = BacaError::InvalidUrl("not a url".to_string());
        assert!(err.to_string().contains("Invalid URL"));
    }

    #[test]
    fn test_http_status_error() {
        let err = BacaError::HttpStatus { status: 404 };
        assert!(err.to_string().contains("404"));
    }

    #[test]
    fn test_timeout_error() {
        let err = BacaError::Timeout { timeout: 30 };
        assert!(err.to_string().contains("30"));
    }
}
