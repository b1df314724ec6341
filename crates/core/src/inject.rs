//! Related-post link injection.
//!
//! Given a block of generated article text and an ordered list of related
//! articles, this module inserts "Baca juga" promotional links at
//! structurally meaningful positions: before the first paragraph, after the
//! middle paragraph, and just before the final paragraph. The walk keeps an
//! active index that only advances on segments with real text, so blank
//! artifacts from the delimiter split never shift the insertion points.
//!
//! Injection is a pure function of its inputs and never fails: too few
//! links, too few paragraphs, or unstructured content all resolve to a
//! defined fallback rather than an error.
//!
//! Link titles and URLs are inserted verbatim, with no escaping. Callers
//! must pre-sanitize titles that may be attacker-influenced before handing
//! them to the injector.

use serde::{Deserialize, Serialize};

/// A related article supplied by the caller.
///
/// At most three links are consumed positionally (slots 0, 1, 2); extras
/// are ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RelatedLink {
    /// Display title of the related article.
    pub title: String,
    /// Absolute URL of the related article.
    pub link: String,
}

impl RelatedLink {
    pub fn new(title: impl Into<String>, link: impl Into<String>) -> Self {
        Self { title: title.into(), link: link.into() }
    }
}

/// Content format, resolved once per call.
///
/// The format drives both the paragraph delimiter used for splitting and
/// the template used to render inserted links.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentFormat {
    /// Paragraphs delimited by `</p>` tags.
    Html,
    /// Plain or Markdown text with blank-line paragraph breaks.
    Plain,
}

impl ContentFormat {
    /// Classifies content as HTML if it contains any of the literal
    /// substrings `</p>`, `</div>`, or `<br`.
    pub fn detect(content: &str) -> Self {
        if content.contains("</p>") || content.contains("</div>") || content.contains("<br") {
            Self::Html
        } else {
            Self::Plain
        }
    }

    /// The paragraph delimiter the content is split on.
    fn delimiter(self) -> &'static str {
        match self {
            Self::Html => "</p>",
            Self::Plain => "\n\n",
        }
    }

    /// Renders a link block for positional insertion.
    fn positional_block(self, link: &RelatedLink) -> String {
        match self {
            Self::Html => format!(
                "<p><strong>Baca juga: <a href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\">{}</a></strong></p>",
                link.link, link.title
            ),
            Self::Plain => format!("\n\n**Baca juga: [{}]({})**\n\n", link.title, link.link),
        }
    }

    /// Renders a link block for the append fallback.
    ///
    /// The HTML variant deliberately omits `target`/`rel` attributes and
    /// the plain variant a trailing blank line, matching the simpler
    /// single-line rendering of appended links.
    fn append_block(self, link: &RelatedLink) -> String {
        match self {
            Self::Html => format!(
                "<p><strong>Baca juga: <a href=\"{}\">{}</a></strong></p>",
                link.link, link.title
            ),
            Self::Plain => format!("\n\n**Baca juga: [{}]({})**\n", link.title, link.link),
        }
    }
}

/// Inserts related-post links into generated article content.
///
/// Content with fewer than two delimiter-separated segments gets every
/// provided link appended at the end instead of positional insertion.
/// Otherwise up to three links are placed: `links[0]` before the first
/// non-blank paragraph, `links[1]` after the middle paragraph, and
/// `links[2]` just before the final paragraph. The near-end slot is only
/// filled when the content has at least three paragraphs, so short articles
/// are not crowded.
pub fn inject_links(content: &str, links: &[RelatedLink]) -> String {
    let format = ContentFormat::detect(content);
    let segments: Vec<&str> = content.split(format.delimiter()).collect();

    if segments.len() < 2 {
        let mut out = content.to_string();
        for link in links {
            out.push_str(&format.append_block(link));
        }
        return out;
    }

    let total_paras = segments.iter().filter(|p| !p.trim().is_empty()).count();
    let middle_index = total_paras / 2;

    let mut out = String::new();
    let mut active_index = 0usize;

    for (i, segment) in segments.iter().enumerate() {
        let has_content = !segment.trim().is_empty();

        // Slot 0: at the very start, before the first real paragraph.
        if has_content
            && active_index == 0
            && let Some(link) = links.first()
        {
            out.push_str(&format.positional_block(link));
        }

        out.push_str(segment);
        match format {
            ContentFormat::Html => {
                if has_content {
                    out.push_str("</p>");
                }
            }
            ContentFormat::Plain => {
                // No delimiter after the final segment, to avoid trailing
                // blank lines.
                if has_content && i < segments.len() - 1 {
                    out.push_str("\n\n");
                }
            }
        }

        if has_content {
            // Slot 1: after the middle paragraph.
            if active_index == middle_index
                && let Some(link) = links.get(1)
            {
                out.push_str(&format.positional_block(link));
            }

            // Slot 2: before what will become the final paragraph. Skipped
            // below three paragraphs so short articles are not crowded.
            if total_paras >= 3
                && active_index + 1 == total_paras - 1
                && let Some(link) = links.get(2)
            {
                out.push_str(&format.positional_block(link));
            }

            active_index += 1;
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn three_links() -> Vec<RelatedLink> {
        vec![
            RelatedLink::new("First", "https://example.com/1"),
            RelatedLink::new("Second", "https://example.com/2"),
            RelatedLink::new("Third", "https://example.com/3"),
        ]
    }

    #[rstest]
    #[case("<p>One</p><p>Two</p>", ContentFormat::Html)]
    #[case("<div>One</div>", ContentFormat::Html)]
    #[case("Line one<br>line two", ContentFormat::Html)]
    #[case("One\n\nTwo\n\nThree", ContentFormat::Plain)]
    #[case("Just a sentence.", ContentFormat::Plain)]
    fn test_format_detection(#[case] content: &str, #[case] expected: ContentFormat) {
        assert_eq!(ContentFormat::detect(content), expected);
    }

    #[test]
    fn test_empty_links_returns_content_unchanged() {
        let html = "<p>One</p><p>Two</p><p>Three</p>";
        assert_eq!(inject_links(html, &[]), html);

        let plain = "One\n\nTwo\n\nThree";
        assert_eq!(inject_links(plain, &[]), plain);
    }

    #[test]
    fn test_plain_five_paragraphs_three_links() {
        let content = "P1\n\nP2\n\nP3\n\nP4\n\nP5";
        let result = inject_links(content, &three_links());

        // Slot 0 renders before the first paragraph.
        assert!(result.starts_with("\n\n**Baca juga: [First](https://example.com/1)**\n\n"));

        // Slot 1 lands after the middle paragraph (floor(5/2) = index 2).
        let p3 = result.find("P3").unwrap();
        let p4 = result.find("P4").unwrap();
        let second = result.find("[Second]").unwrap();
        assert!(p3 < second && second < p4);

        // Slot 2 lands just before the final paragraph.
        let p5 = result.find("P5").unwrap();
        let third = result.find("[Third]").unwrap();
        assert!(p4 < third && third < p5);
    }

    #[test]
    fn test_html_positional_template_has_target_and_rel() {
        let content = "<p>One is long enough</p><p>Two is long enough</p><p>Three is long enough</p>";
        let result = inject_links(content, &three_links());

        assert!(result.contains(
            "<p><strong>Baca juga: <a href=\"https://example.com/1\" target=\"_blank\" rel=\"noopener noreferrer\">First</a></strong></p>"
        ));
    }

    #[test]
    fn test_append_fallback_single_paragraph() {
        let content = "Only one short paragraph.";
        let links = three_links();
        let result = inject_links(content, &links[..2]);

        assert_eq!(
            result,
            "Only one short paragraph.\
             \n\n**Baca juga: [First](https://example.com/1)**\n\
             \n\n**Baca juga: [Second](https://example.com/2)**\n"
        );
    }

    #[test]
    fn test_append_fallback_html_omits_target_rel() {
        // "<br" marks the content as HTML but provides no "</p>" to split
        // on, so the append fallback is taken with the simpler template.
        let content = "One line<br>another line";
        let links = three_links();
        let result = inject_links(content, &links[..1]);

        assert!(result.ends_with("<p><strong>Baca juga: <a href=\"https://example.com/1\">First</a></strong></p>"));
        assert!(!result.contains("target="));
    }

    #[test]
    fn test_two_paragraphs_suppress_near_end_link() {
        let content = "P1\n\nP2";
        let result = inject_links(content, &three_links());

        assert!(result.contains("[First]"));
        assert!(result.contains("[Second]"));
        assert!(!result.contains("[Third]"));
    }

    #[test]
    fn test_three_paragraphs_place_all_links() {
        let content = "P1\n\nP2\n\nP3";
        let result = inject_links(content, &three_links());

        // middle == near-end == index 1 here; both blocks land after P2.
        assert!(result.contains("[First]"));
        assert!(result.contains("[Second]"));
        assert!(result.contains("[Third]"));
        let second = result.find("[Second]").unwrap();
        let third = result.find("[Third]").unwrap();
        let p3 = result.find("P3").unwrap();
        assert!(second < third && third < p3);
    }

    #[test]
    fn test_fewer_links_than_slots() {
        let content = "P1\n\nP2\n\nP3\n\nP4\n\nP5";
        let links = vec![RelatedLink::new("Solo", "https://example.com/solo")];
        let result = inject_links(content, &links);

        assert!(result.contains("[Solo]"));
        assert_eq!(result.matches("Baca juga").count(), 1);
    }

    #[test]
    fn test_extra_links_beyond_three_are_ignored() {
        let content = "P1\n\nP2\n\nP3\n\nP4\n\nP5";
        let mut links = three_links();
        links.push(RelatedLink::new("Fourth", "https://example.com/4"));
        let result = inject_links(content, &links);

        assert!(!result.contains("[Fourth]"));
        assert_eq!(result.matches("Baca juga").count(), 3);
    }

    #[test]
    fn test_blank_segments_do_not_shift_positions() {
        // The split produces a leading blank artifact; active indexing
        // ignores it when computing slots.
        let content = "\n\nP1\n\nP2\n\nP3";
        let result = inject_links(content, &three_links());

        let first = result.find("[First]").unwrap();
        let p1 = result.find("P1").unwrap();
        assert!(first < p1);
    }

    #[test]
    fn test_html_reinjection_with_no_links_is_stable() {
        let content = "<p>One is long enough</p><p>Two is long enough</p><p>Three is long enough</p>";
        let injected = inject_links(content, &three_links());
        let reinjected = inject_links(&injected, &[]);

        assert_eq!(reinjected, injected);
    }

    #[test]
    fn test_no_escaping_is_performed() {
        let content = "<p>One is long enough</p><p>Two is long enough</p>";
        let links = vec![RelatedLink::new("Tom & \"Jerry\"", "https://example.com/?a=1&b=2")];
        let result = inject_links(content, &links);

        assert!(result.contains("Tom & \"Jerry\""));
        assert!(result.contains("https://example.com/?a=1&b=2"));
    }

    #[test]
    fn test_plain_output_has_no_trailing_blank_lines() {
        let content = "P1\n\nP2\n\nP3";
        let result = inject_links(content, &[]);
        assert!(result.ends_with("P3"));
    }
}
