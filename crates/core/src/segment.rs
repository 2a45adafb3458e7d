//! Content segmentation into Markdown sections.
//!
//! Extractor output is arbitrarily nested HTML — `<div>` soup, `<p>` runs,
//! the occasional heading. This module flattens it into a heading-delimited
//! outline: the body's direct children are walked in document order, heading
//! elements open new sections, and every other text-bearing child becomes a
//! paragraph of the open section. The result is a stable, tag-free Markdown
//! body regardless of the extractor's exact DOM shape.

use scraper::{ElementRef, Html, Selector};

/// A transient group of paragraphs under one optional heading.
///
/// Sections exist only during segmentation and render as
/// `"## {heading}\n\n{paragraph}\n\n..."`.
#[derive(Debug, Clone, Default)]
pub struct Section {
    /// Heading text, without the `##` marker.
    pub heading: Option<String>,
    /// Paragraph texts in document order.
    pub paragraphs: Vec<String>,
}

impl Section {
    fn is_empty(&self) -> bool {
        self.heading.is_none() && self.paragraphs.is_empty()
    }

    fn render(&self) -> String {
        let mut parts: Vec<String> = Vec::new();
        if let Some(heading) = &self.heading {
            parts.push(format!("## {}", heading));
        }
        parts.extend(self.paragraphs.iter().cloned());
        parts.join("\n\n")
    }
}

/// Segments extracted content HTML into a Markdown document body.
///
/// Walks the body's direct child nodes with one open section buffer:
/// - a heading child (h1-h6) flushes the open section and starts a new one
///   titled with the heading's text;
/// - any other child with non-empty trimmed text appends a paragraph;
/// - whitespace-only children are skipped entirely.
///
/// Sections are joined with a single blank line. Zero headings collapse the
/// whole body into one unheaded section; an empty body yields an empty
/// string, which is an allowed result rather than an error.
pub fn segment(content_html: &str) -> String {
    if content_html.trim().is_empty() {
        return String::new();
    }

    let doc = Html::parse_document(content_html);
    let body_selector = Selector::parse("body").unwrap();
    let Some(body) = doc.select(&body_selector).next() else {
        return String::new();
    };

    let mut sections: Vec<Section> = Vec::new();
    let mut current = Section::default();

    for child in body.children() {
        if let Some(element) = ElementRef::wrap(child) {
            if is_heading(&element) {
                if !current.is_empty() {
                    sections.push(current);
                }
                let heading = element.text().collect::<String>().trim().to_string();
                current = Section {
                    heading: (!heading.is_empty()).then_some(heading),
                    paragraphs: Vec::new(),
                };
                continue;
            }

            push_paragraph(&mut current, &element.text().collect::<String>());
        } else if let Some(text) = child.value().as_text() {
            push_paragraph(&mut current, text);
        }
    }

    if !current.is_empty() {
        sections.push(current);
    }

    sections
        .iter()
        .map(Section::render)
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn is_heading(element: &ElementRef<'_>) -> bool {
    matches!(
        element.value().name(),
        "h1" | "h2" | "h3" | "h4" | "h5" | "h6"
    )
}

fn push_paragraph(section: &mut Section, text: &str) {
    let text = text.trim();
    if !text.is_empty() {
        section.paragraphs.push(text.to_string());
    }
}
