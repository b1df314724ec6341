//! Content generation pipeline.
//!
//! Composes the steps an application service runs after extraction:
//! rewrite the source content through an external text-generation
//! capability, then inject related-post links into the rewritten text.
//! The rewriting capability is opaque to this crate and modeled by the
//! [`Rewriter`] trait; billing, persistence, and publishing stay with the
//! caller.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::article::{ExtractedArticle, count_words};
use crate::inject::{RelatedLink, inject_links};
use crate::Result;

/// Requested length of the rewritten article.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RewriteLength {
    Short,
    Medium,
    Long,
}

/// Options forwarded to the rewriting capability.
///
/// All fields are optional hints; how they shape the generated text is up
/// to the capability behind the [`Rewriter`] trait.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RewriteOptions {
    /// Desired tone of voice (e.g. "formal", "casual").
    pub tone: Option<String>,
    /// Target article length.
    pub length: Option<RewriteLength>,
    /// Keywords the rewrite should work in.
    pub keywords: Vec<String>,
    /// Target output language.
    pub target_language: Option<String>,
}

/// An opaque text-generation capability.
///
/// Implementations wrap whatever external service rewrites article text.
/// The prompt/response contract is deliberately outside this crate's
/// scope; only the rewritten text (or an error) crosses this boundary.
#[async_trait]
pub trait Rewriter: Send + Sync {
    /// Rewrites `content` according to `options`.
    ///
    /// # Errors
    ///
    /// Implementations should surface capability failures as
    /// [`crate::BacaError::RewriteError`].
    async fn rewrite(&self, content: &str, options: &RewriteOptions) -> Result<String>;
}

/// The final output of a pipeline run.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PipelineResult {
    /// Rewritten content with related-post links injected.
    pub content: String,
    /// Word count of the final content.
    pub word_count: usize,
}

/// Drives extraction output through rewrite and link injection.
///
/// Stateless across runs; a single pipeline may serve concurrent callers.
pub struct ContentPipeline<R: Rewriter> {
    rewriter: R,
    options: RewriteOptions,
}

impl<R: Rewriter> ContentPipeline<R> {
    /// Creates a pipeline with default rewrite options.
    pub fn new(rewriter: R) -> Self {
        Self { rewriter, options: RewriteOptions::default() }
    }

    /// Creates a pipeline with custom rewrite options.
    pub fn with_options(rewriter: R, options: RewriteOptions) -> Self {
        Self { rewriter, options }
    }

    /// Rewrites an extracted article and injects related-post links.
    ///
    /// Related links are supplied by the caller (typically recent posts
    /// from the target site). An empty list skips injection entirely.
    ///
    /// # Errors
    ///
    /// Fails only when the rewriting capability fails; link injection
    /// itself can never fail.
    pub async fn run(&self, article: &ExtractedArticle, related: &[RelatedLink]) -> Result<PipelineResult> {
        debug!(url = %article.url, chars = article.content.len(), "rewriting source content");

        let rewritten = self.rewriter.rewrite(&article.content, &self.options).await?;

        let content = if related.is_empty() {
            warn!(url = %article.url, "no related posts supplied, skipping link injection");
            rewritten
        } else {
            let injected = inject_links(&rewritten, related);
            info!(
                url = %article.url,
                links = related.len().min(3),
                "injected related-post links"
            );
            injected
        };

        let word_count = count_words(&content);
        Ok(PipelineResult { content, word_count })
    }
}
