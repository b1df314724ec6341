//! Page metadata extraction.
//!
//! Each field is extracted independently through a short fallback chain and
//! degrades to `None` rather than failing the extraction. Defaults (empty
//! strings, the extraction-time timestamp for `published_at`) are applied
//! when the article record is assembled.

use crate::Document;

impl Document {
    /// Extract title with priority fallback:
    /// 1. Open Graph `og:title`
    /// 2. `<title>` element
    pub fn extract_title(&self) -> Option<String> {
        if let Some(title) = self.get_meta_content("og:title") {
            return Some(title);
        }

        self.title()
    }

    /// Extract excerpt with priority fallback:
    /// 1. Open Graph `og:description`
    /// 2. Meta `description`
    pub fn extract_excerpt(&self) -> Option<String> {
        if let Some(desc) = self.get_meta_content("og:description") {
            return Some(desc);
        }

        self.get_meta_content("description")
    }

    /// Extract the hero image URL from `og:image`.
    pub fn extract_image(&self) -> Option<String> {
        self.get_meta_content("og:image")
    }

    /// Extract the site name from `og:site_name`.
    pub fn extract_site_name(&self) -> Option<String> {
        self.get_meta_content("og:site_name")
    }

    /// Extract the publication timestamp from `article:published_time`.
    pub fn extract_published_at(&self) -> Option<String> {
        self.get_meta_content("article:published_time")
    }

    /// Get meta tag content by name or property attribute
    fn get_meta_content(&self, attr: &str) -> Option<String> {
        let selector = format!("meta[name=\"{}\"]", attr);
        if let Ok(elements) = self.select(&selector)
            && let Some(el) = elements.first()
            && let Some(content) = el.attr("content")
        {
            return Some(content.to_string());
        }

        let selector = format!("meta[property=\"{}\"]", attr);
        if let Ok(elements) = self.select(&selector)
            && let Some(el) = elements.first()
            && let Some(content) = el.attr("content")
        {
            return Some(content.to_string());
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HTML_WITH_META: &str = r#"
        <!DOCTYPE html>
        <html lang="en">
        <head>
            <meta charset="UTF-8">
            <title>Test Page Title</title>
            <meta name="description" content="Plain meta description.">
            <meta property="og:title" content="OG Title">
            <meta property="og:description" content="OG Description">
            <meta property="og:image" content="https://example.com/hero.jpg">
            <meta property="og:site_name" content="Example Site">
            <meta property="article:published_time" content="2024-01-15T10:30:00Z">
        </head>
        <body>
            <p>Body text.</p>
        </body>
        </html>
    "#;

    const HTML_WITHOUT_META: &str = r#"
        <!DOCTYPE html>
        <html lang="en">
        <head>
            <meta charset="UTF-8">
            <title>Simple Page</title>
        </head>
        <body>
            <p>This is a paragraph with some text content.</p>
        </body>
        </html>
    "#;

    #[test]
    fn test_extract_title_prefers_og() {
        let doc = Document::parse(HTML_WITH_META);
        assert_eq!(doc.extract_title(), Some("OG Title".to_string()));
    }

    #[test]
    fn test_extract_title_falls_back_to_title_element() {
        let doc = Document::parse(HTML_WITHOUT_META);
        assert_eq!(doc.extract_title(), Some("Simple Page".to_string()));
    }

    #[test]
    fn test_extract_title_none_when_no_sources() {
        let doc = Document::parse("<html><body><p>No title here.</p></body></html>");
        assert_eq!(doc.extract_title(), None);
    }

    #[test]
    fn test_extract_excerpt_prefers_og() {
        let doc = Document::parse(HTML_WITH_META);
        assert_eq!(doc.extract_excerpt(), Some("OG Description".to_string()));
    }

    #[test]
    fn test_extract_excerpt_falls_back_to_meta_description() {
        let html = r#"
            <html>
            <head><meta name="description" content="Only plain description."></head>
            <body></body>
            </html>
        "#;
        let doc = Document::parse(html);
        assert_eq!(doc.extract_excerpt(), Some("Only plain description.".to_string()));
    }

    #[test]
    fn test_extract_image() {
        let doc = Document::parse(HTML_WITH_META);
        assert_eq!(doc.extract_image(), Some("https://example.com/hero.jpg".to_string()));
        let doc = Document::parse(HTML_WITHOUT_META);
        assert_eq!(doc.extract_image(), None);
    }

    #[test]
    fn test_extract_site_name() {
        let doc = Document::parse(HTML_WITH_META);
        assert_eq!(doc.extract_site_name(), Some("Example Site".to_string()));
    }

    #[test]
    fn test_extract_published_at() {
        let doc = Document::parse(HTML_WITH_META);
        assert_eq!(doc.extract_published_at(), Some("2024-01-15T10:30:00Z".to_string()));
        let doc = Document::parse(HTML_WITHOUT_META);
        assert_eq!(doc.extract_published_at(), None);
    }

    #[test]
    fn test_meta_lookup_by_name_attribute() {
        let html = r#"<html><head><meta name="og:title" content="Name Attr Title"></head></html>"#;
        let doc = Document::parse(html);
        assert_eq!(doc.extract_title(), Some("Name Attr Title".to_string()));
    }
}
