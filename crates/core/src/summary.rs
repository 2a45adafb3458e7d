//! Summary resolution.
//!
//! A summary is picked from a fixed priority chain: meta description, Open
//! Graph description, the extractor's excerpt, then the first paragraph of a
//! likely content container. The resolver always returns a string — empty
//! when nothing matches, never an error.

use crate::parse::Document;

/// Containers whose first paragraph can stand in as a summary of last resort.
const CONTENT_PARAGRAPH_SELECTOR: &str = "article p, .article p, .content p";

/// Resolves a summary string for the document.
///
/// Priority, first non-empty wins:
/// 1. `meta[name="description"]`
/// 2. `meta[property="og:description"]`
/// 3. the extractor-supplied excerpt
/// 4. the first paragraph inside `article`, `.article`, or `.content`
pub fn resolve_summary(doc: &Document, excerpt: Option<&str>) -> String {
    if let Some(desc) = doc.meta_content("description") {
        return desc;
    }

    if let Some(desc) = doc.meta_content("og:description") {
        return desc;
    }

    if let Some(excerpt) = excerpt {
        let excerpt = excerpt.trim();
        if !excerpt.is_empty() {
            return excerpt.to_string();
        }
    }

    if let Ok(Some(p)) = doc.select_first(CONTENT_PARAGRAPH_SELECTOR) {
        let text = p.text();
        let text = text.trim();
        if !text.is_empty() {
            return text.to_string();
        }
    }

    String::new()
}
