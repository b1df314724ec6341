//! Main article extraction API.
//!
//! This module provides the primary API for deriving a normalized
//! [`ExtractedArticle`] from a source URL or raw HTML. The main entry point
//! is the [`Extractor`] struct, along with convenience functions like
//! [`extract_from_html`] and [`extract`].
//!
//! # Example
//!
//! ```rust
//! use baca_core::extractor::extract_from_html;
//! use chrono::Utc;
//!
//! let html = r#"
//!     <html>
//!         <head><title>Example</title></head>
//!         <body><article><p>Content here</p></article></body>
//!     </html>
//! "#;
//! let article = extract_from_html(html, "https://example.com/post", Utc::now());
//! assert_eq!(article.title, "Example");
//! ```

use chrono::{DateTime, Utc};

use crate::article::ExtractedArticle;
use crate::clean::{CleanConfig, clean_html};
use crate::content::extract_content;
use crate::parse::Document;

#[cfg(feature = "fetch")]
use crate::Result;
#[cfg(feature = "fetch")]
use crate::fetch::{FetchConfig, fetch_url};

/// Main entry point for article extraction.
///
/// Extraction is a pure request/response transform: nothing is persisted,
/// no state is shared across invocations, and concurrent calls need no
/// coordination. The only suspension point is the outbound fetch.
///
/// # Example
///
/// ```rust
/// use baca_core::Extractor;
/// use chrono::Utc;
///
/// let extractor = Extractor::new();
/// let html = "<html><body><article><p>Content here</p></article></body></html>";
/// let article = extractor.extract_from_html(html, "https://example.com", Utc::now());
/// assert_eq!(article.content, "Content here");
/// ```
pub struct Extractor {
    clean: CleanConfig,
}

impl Extractor {
    /// Creates a new Extractor with default settings.
    pub fn new() -> Self {
        Self { clean: CleanConfig::default() }
    }

    /// Creates a new Extractor with a custom cleaning configuration.
    pub fn with_clean_config(clean: CleanConfig) -> Self {
        Self { clean }
    }

    /// Derives an article record from already-fetched HTML.
    ///
    /// The extraction timestamp is injected by the caller so that the
    /// `published_at` fallback stays deterministic in tests; the fetching
    /// wrappers pass the current time.
    ///
    /// Heuristic misses never fail: missing metadata degrades to empty
    /// strings and a page without paragraphs yields empty content.
    pub fn extract_from_html(&self, html: &str, url: &str, now: DateTime<Utc>) -> ExtractedArticle {
        let cleaned = clean_html(html, &self.clean);
        let doc = Document::parse(&cleaned);

        let title = doc.extract_title().unwrap_or_default();
        let excerpt = doc.extract_excerpt().unwrap_or_default();
        let content = extract_content(&doc);

        ExtractedArticle {
            title: title.trim().to_string(),
            excerpt: excerpt.trim().to_string(),
            content: content.trim().to_string(),
            url: url.to_string(),
            site_name: doc.extract_site_name().unwrap_or_default(),
            image: doc.extract_image().unwrap_or_default(),
            published_at: doc.extract_published_at().unwrap_or_else(|| now.to_rfc3339()),
        }
    }

    /// Fetches a URL and extracts its article using the default fetch config.
    #[cfg(feature = "fetch")]
    pub async fn extract(&self, url: &str) -> Result<ExtractedArticle> {
        self.extract_with_config(url, &FetchConfig::default()).await
    }

    /// Fetches a URL and extracts its article with a custom fetch config.
    ///
    /// # Errors
    ///
    /// Fails with the fetch error (invalid URL, timeout, transport failure,
    /// or non-2xx status) when the page cannot be retrieved. No partial
    /// extraction is returned on fetch failure.
    #[cfg(feature = "fetch")]
    pub async fn extract_with_config(&self, url: &str, fetch_config: &FetchConfig) -> Result<ExtractedArticle> {
        let html = fetch_url(url, fetch_config).await?;
        Ok(self.extract_from_html(&html, url, Utc::now()))
    }
}

impl Default for Extractor {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience function: extract an article from raw HTML with defaults.
pub fn extract_from_html(html: &str, url: &str, now: DateTime<Utc>) -> ExtractedArticle {
    Extractor::new().extract_from_html(html, url, now)
}

/// Convenience function: fetch a URL and extract its article with defaults.
///
/// # Example
///
/// ```no_run
/// use baca_core::extract;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let article = extract("https://example.com/article").await?;
///     println!("Title: {}", article.title);
///     Ok(())
/// }
/// ```
#[cfg(feature = "fetch")]
pub async fn extract(url: &str) -> Result<ExtractedArticle> {
    Extractor::new().extract(url).await
}

/// Convenience function: fetch and extract with a custom fetch config.
#[cfg(feature = "fetch")]
pub async fn extract_with_config(url: &str, fetch_config: &FetchConfig) -> Result<ExtractedArticle> {
    Extractor::new().extract_with_config(url, fetch_config).await
}
