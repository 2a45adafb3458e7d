//! Selector-driven metadata scanning.
//!
//! Publish date and author are resolved by walking an ordered list of
//! [`FieldCandidate`] selectors and returning the first non-empty hit. The
//! lists are fixed: priority is deterministic, a miss is `None`, and nothing
//! past the first hit is ever scanned.

use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::{Date, OffsetDateTime, PrimitiveDateTime};

use crate::parse::Document;

/// One selector candidate for a metadata field.
///
/// `attributes` are read in order; when none yields a value the element's
/// trimmed text content is the final fallback.
#[derive(Debug, Clone, Copy)]
pub struct FieldCandidate {
    /// CSS selector to match.
    pub selector: &'static str,
    /// Attributes to read from the first match, in preference order.
    pub attributes: &'static [&'static str],
}

/// Publish-date candidates, highest priority first.
pub const DATE_CANDIDATES: &[FieldCandidate] = &[
    FieldCandidate { selector: "meta[property=\"article:published_time\"]", attributes: &["content"] },
    FieldCandidate { selector: "meta[name=\"publication-date\"]", attributes: &["content"] },
    FieldCandidate { selector: "time[datetime]", attributes: &["datetime"] },
    FieldCandidate { selector: "meta[name=\"date\"]", attributes: &["content"] },
];

/// Author candidates, highest priority first.
pub const AUTHOR_CANDIDATES: &[FieldCandidate] = &[
    FieldCandidate { selector: "meta[name=\"author\"]", attributes: &["content"] },
    FieldCandidate { selector: "meta[property=\"article:author\"]", attributes: &["content"] },
    FieldCandidate { selector: ".author", attributes: &[] },
    FieldCandidate { selector: "[rel=\"author\"]", attributes: &[] },
];

/// Scans an ordered candidate list and returns the first non-empty value.
///
/// For each candidate whose selector matches at least one element, the first
/// matching element's attributes are read in preference order, then its text
/// content; the first non-empty trimmed value wins. A candidate that matches
/// but yields nothing does not stop the scan. All candidates exhausted means
/// `None` — an expected state, not an error.
pub fn find_first_match(doc: &Document, candidates: &[FieldCandidate]) -> Option<String> {
    for candidate in candidates {
        let Ok(elements) = doc.select(candidate.selector) else { continue };
        let Some(element) = elements.first() else { continue };

        for attr in candidate.attributes {
            if let Some(value) = element.attr(attr) {
                let value = value.trim();
                if !value.is_empty() {
                    return Some(value.to_string());
                }
            }
        }

        let text = element.text();
        let text = text.trim();
        if !text.is_empty() {
            return Some(text.to_string());
        }
    }

    None
}

/// Resolves the publish date as an ISO `YYYY-MM-DD` string.
///
/// A located raw date that fails to parse degrades this field to `None`;
/// the extraction call as a whole proceeds.
pub fn resolve_date(doc: &Document) -> Option<String> {
    find_first_match(doc, DATE_CANDIDATES).and_then(|raw| normalize_date(&raw))
}

/// Resolves the author string, trimmed but otherwise verbatim.
pub fn resolve_author(doc: &Document) -> Option<String> {
    find_first_match(doc, AUTHOR_CANDIDATES)
}

/// Normalizes a raw date string to `YYYY-MM-DD`, or `None` when it does not
/// parse into a valid calendar date.
pub fn normalize_date(raw: &str) -> Option<String> {
    let date = parse_calendar_date(raw.trim())?;
    date.format(format_description!("[year]-[month]-[day]")).ok()
}

/// Accepts RFC 3339, naive `YYYY-MM-DDTHH:MM:SS`, and bare `YYYY-MM-DD` or
/// `YYYY/MM/DD` forms. The calendar date is taken as written, without
/// timezone conversion.
fn parse_calendar_date(raw: &str) -> Option<Date> {
    if let Ok(dt) = OffsetDateTime::parse(raw, &Rfc3339) {
        return Some(dt.date());
    }

    if let Ok(dt) = PrimitiveDateTime::parse(raw, format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]"))
    {
        return Some(dt.date());
    }

    if let Ok(date) = Date::parse(raw, format_description!("[year]-[month]-[day]")) {
        return Some(date);
    }

    if let Ok(date) = Date::parse(raw, format_description!("[year]/[month]/[day]")) {
        return Some(date);
    }

    None
}
