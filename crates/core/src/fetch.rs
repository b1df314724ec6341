//! Source page fetching over HTTP.
//!
//! This module performs the single outbound request of the scraper: an HTTP
//! GET with browser-mimicking headers, returning the response body as text.
//! Responses may be cached by an upstream transport layer for a short TTL;
//! that is a performance optimization of the caller, not part of this
//! contract.

use std::time::Duration;

use reqwest::Client;
use url::Url;

use crate::{BacaError, Result};

/// Browser-mimicking default User-Agent, used to reduce anti-bot rejection.
const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// HTTP client configuration for fetching web pages.
///
/// This struct controls timeout and user agent settings for HTTP requests.
#[derive(Debug, Clone)]
pub struct FetchConfig {
    /// Request timeout in seconds.
    pub timeout: u64,
    /// Custom User-Agent string.
    pub user_agent: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout: 30,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

/// Fetches HTML content from a URL.
///
/// This function performs an HTTP GET request and returns the response body
/// as text. It follows redirects, respects the configured timeout, and sends
/// browser-like `User-Agent`, `Accept`, and `Accept-Language` headers.
///
/// # Errors
///
/// Returns [`BacaError::InvalidUrl`] for unparseable URLs,
/// [`BacaError::Timeout`] when the request exceeds the configured timeout,
/// [`BacaError::HttpStatus`] for non-2xx responses, and
/// [`BacaError::HttpError`] for transport failures. There is no internal
/// retry; a failed fetch is fatal for that extraction.
pub async fn fetch_url(url: &str, config: &FetchConfig) -> Result<String> {
    let parsed_url = Url::parse(url).map_err(|e| BacaError::InvalidUrl(e.to_string()))?;

    if parsed_url.scheme().is_empty() {
        return Err(BacaError::InvalidUrl(
            "URL must include a scheme (http:// or https://)".to_string(),
        ));
    }

    let client = Client::builder()
        .timeout(Duration::from_secs(config.timeout))
        .build()
        .map_err(BacaError::HttpError)?;

    let response = client
        .get(parsed_url)
        .header("User-Agent", &config.user_agent)
        .header(
            "Accept",
            "text/html,application/xhtml+xml,application/xml;q=0.9,image/avif,image/webp,image/apng,*/*;q=0.8",
        )
        .header("Accept-Language", "en-US,en;q=0.9")
        .send()
        .await
        .map_err(|e| {
            if e.is_timeout() {
                BacaError::Timeout { timeout: config.timeout }
            } else {
                BacaError::HttpError(e)
            }
        })?;

    let status = response.status();
    if !status.is_success() {
        return Err(BacaError::HttpStatus { status: status.as_u16() });
    }

    let content = response.text().await?;

    Ok(content)
}
