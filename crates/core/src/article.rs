//! The normalized article record produced by extraction.

use serde::Serialize;

/// The complete result of scraping a source page.
///
/// Every field is best-effort: heuristic misses yield empty strings rather
/// than errors, and `published_at` falls back to the extraction timestamp.
/// Records are constructed fresh per extraction and are not persisted by
/// this crate.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractedArticle {
    /// Best-effort page title, trimmed.
    pub title: String,

    /// Short description, trimmed; may be empty.
    pub excerpt: String,

    /// Concatenated paragraph text, blank-line separated, trimmed.
    ///
    /// Empty only when no paragraph-bearing element was found anywhere in
    /// the document, including the `<body>` fallback.
    pub content: String,

    /// The URL as originally requested (not re-resolved or canonicalized).
    pub url: String,

    /// Site name from page metadata; may be empty.
    pub site_name: String,

    /// Hero image URL from page metadata; may be empty.
    pub image: String,

    /// Publication timestamp as an RFC 3339 string; defaults to the
    /// extraction time when the page does not declare one.
    pub published_at: String,
}

/// Count words in text, handling various whitespace and punctuation patterns
pub(crate) fn count_words(text: &str) -> usize {
    use regex::Regex;
    let word_regex = Regex::new(r"\b[\w'-]+\b").unwrap();
    word_regex.find_iter(text).count()
}
