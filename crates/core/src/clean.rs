//! Boilerplate removal ahead of content extraction.
//!
//! Source pages carry chrome (navigation, headers, footers, ads, share
//! widgets, comment sections) whose text would pollute the extracted
//! paragraphs. This module strips those elements from the raw HTML before
//! it is parsed, so every selector in the extraction pass only ever sees
//! candidate article content.

use lol_html::{HtmlRewriter, Settings, element};

/// Structural elements that never contain article body text.
const NOISE_TAGS: [&str; 6] = ["script", "style", "nav", "header", "footer", "aside"];

/// Class tokens that mark ad, share, comment, and sidebar containers.
const NOISE_CLASSES: [&str; 5] = ["ad", "advertisement", "social-share", "comments", "sidebar"];

/// Configuration for HTML cleaning.
#[derive(Debug, Clone)]
pub struct CleanConfig {
    /// Whether to remove script/style/nav/header/footer/aside elements.
    pub remove_boilerplate_tags: bool,
    /// Whether to remove containers with ad/share/comment/sidebar class names.
    pub remove_noise_classes: bool,
}

impl Default for CleanConfig {
    fn default() -> Self {
        Self { remove_boilerplate_tags: true, remove_noise_classes: true }
    }
}

/// Strips boilerplate elements from raw HTML.
///
/// Removal is best-effort: if the streaming rewriter fails on the input,
/// the original HTML is returned unchanged rather than failing the
/// extraction.
pub fn clean_html(html: &str, config: &CleanConfig) -> String {
    let mut handlers = Vec::new();

    if config.remove_boilerplate_tags {
        for tag in NOISE_TAGS {
            handlers.push(element!(tag, |el| {
                el.remove();
                Ok(())
            }));
        }
    }

    if config.remove_noise_classes {
        handlers.push(element!("*", |el| {
            if let Some(class) = el.get_attribute("class")
                && class
                    .split_whitespace()
                    .any(|name| NOISE_CLASSES.contains(&name))
            {
                el.remove();
            }
            Ok(())
        }));
    }

    let mut output = String::new();
    let mut rewriter = HtmlRewriter::new(
        Settings { element_content_handlers: handlers, ..Default::default() },
        |c: &[u8]| {
            output.push_str(&String::from_utf8_lossy(c));
        },
    );

    match rewriter.write(html.as_bytes()) {
        Ok(_) => {}
        Err(_) => return html.to_string(),
    }

    match rewriter.end() {
        Ok(_) => {}
        Err(_) => return html.to_string(),
    }

    if output.is_empty() { html.to_string() } else { output }
}
