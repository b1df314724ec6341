//! Main article-body selection heuristics.
//!
//! The content pass walks a fixed priority list of container selectors and
//! accepts the first one whose paragraph text is substantial enough. This is
//! a "good enough" early exit, not a search for the best candidate: the
//! threshold only guards against matching a container that holds a stray
//! caption or teaser instead of the article body.

use crate::Document;

/// Container selectors tried in priority order.
pub const CONTENT_SELECTORS: [&str; 8] = [
    "article",
    "[role=\"main\"]",
    ".post-content",
    ".article-content",
    ".entry-content",
    "main",
    "#content",
    ".content",
];

/// Minimum character count for a selector's paragraph text to be accepted.
pub const CONTENT_CHAR_THRESHOLD: usize = 200;

/// Extracts the main textual content of a document.
///
/// For the first selector in [`CONTENT_SELECTORS`] matching at least one
/// element, the text of all `<p>` descendants is joined with a blank line.
/// A result longer than [`CONTENT_CHAR_THRESHOLD`] characters is accepted
/// without consulting lower-priority selectors. When no selector is
/// accepted, every `<p>` under `<body>` is used instead, with no threshold.
///
/// The result is untrimmed; pages with no paragraphs anywhere yield an
/// empty string, which is not an error.
pub fn extract_content(doc: &Document) -> String {
    for selector in CONTENT_SELECTORS {
        let Ok(containers) = doc.select(selector) else {
            continue;
        };
        if containers.is_empty() {
            continue;
        }

        let mut paragraphs = Vec::new();
        for container in &containers {
            if let Ok(found) = container.select("p") {
                for p in found {
                    paragraphs.push(p.text());
                }
            }
        }
        let content = paragraphs.join("\n\n");

        if content.chars().count() > CONTENT_CHAR_THRESHOLD {
            return content;
        }
    }

    body_paragraphs(doc)
}

/// Fallback pass: text of every `<p>` under `<body>`, blank-line joined.
fn body_paragraphs(doc: &Document) -> String {
    let mut paragraphs = Vec::new();
    for p in doc.select("body p").unwrap_or_default() {
        paragraphs.push(p.text());
    }
    paragraphs.join("\n\n")
}
