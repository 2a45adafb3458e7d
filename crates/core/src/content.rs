//! The main-content extractor capability.
//!
//! Deciding which DOM subtree is the article is a ranked-candidate scoring
//! problem, and different scorers make different trade-offs. The pipeline
//! therefore depends only on the [`ContentExtractor`] trait; the rest of the
//! crate (metadata, summary, segmentation, assembly) is testable against any
//! implementation, including test stubs.
//!
//! [`ScoringExtractor`] is the built-in implementation, backed by the
//! heuristics in [`crate::scoring`].

use crate::parse::{Document, Element};
use crate::scoring::{ScoreConfig, score_element};

/// Output of a main-content extractor.
///
/// All fields except `content_html` are optional; a missing title or byline
/// is resolved downstream, never an error.
#[derive(Debug, Clone, Default)]
pub struct ExtractedContent {
    /// Article title, if the extractor identified one.
    pub title: Option<String>,
    /// Author byline found near the content, if any.
    pub byline: Option<String>,
    /// Short extractor-provided summary, distinct from meta descriptions.
    pub excerpt: Option<String>,
    /// The HTML of the chosen content subtree.
    pub content_html: String,
}

/// Identifies the main article subtree of a parsed document.
///
/// Returning `None` means "this page has no usable article" — the caller
/// fails the extraction with no partial result. Implementations must not
/// panic on arbitrary documents.
pub trait ContentExtractor {
    fn extract(&self, doc: &Document) -> Option<ExtractedContent>;
}

/// Configuration for the built-in scoring extractor.
#[derive(Debug, Clone)]
pub struct ExtractorConfig {
    /// Minimum character count for the winning candidate's text.
    pub char_threshold: usize,
    /// Number of top-scored candidates to keep while scanning.
    pub nb_top_candidates: usize,
    /// Whether class/id patterns adjust candidate scores.
    pub weight_classes: bool,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self { char_threshold: 500, nb_top_candidates: 5, weight_classes: true }
    }
}

/// Tags considered as potential content containers.
const CANDIDATE_TAGS: &[&str] = &["article", "main", "section", "div", "td", "blockquote"];

/// The built-in ranked-candidate extractor.
///
/// Scores every candidate container in the document, keeps the top few, and
/// returns the best one's inner HTML along with title, byline, and excerpt
/// hints gathered along the way.
pub struct ScoringExtractor {
    config: ExtractorConfig,
    score_config: ScoreConfig,
}

impl ScoringExtractor {
    /// Creates an extractor with default settings.
    pub fn new() -> Self {
        Self::with_config(ExtractorConfig::default())
    }

    /// Creates an extractor with a custom configuration.
    pub fn with_config(config: ExtractorConfig) -> Self {
        let score_config = ScoreConfig { weight_classes: config.weight_classes, ..Default::default() };
        Self { config, score_config }
    }

    /// Scans the document for candidate containers and ranks them by score.
    fn ranked_candidates<'a>(&self, doc: &'a Document) -> Vec<(f64, Element<'a>)> {
        let mut candidates: Vec<(f64, Element<'a>)> = Vec::new();

        for tag in CANDIDATE_TAGS {
            let Ok(elements) = doc.select(tag) else { continue };
            for element in elements {
                let is_semantic = matches!(element.tag_name().as_str(), "article" | "main" | "section");
                if !is_semantic && element.text().chars().count() < self.config.char_threshold / 10 {
                    continue;
                }

                let score = score_element(&element, &self.score_config);
                candidates.push((score, element));
            }
        }

        candidates.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(std::cmp::Ordering::Equal));
        candidates.truncate(self.config.nb_top_candidates);
        candidates
    }

    /// Title hint: Open Graph title, then `<title>`, then the first `<h1>`.
    fn resolve_title(doc: &Document) -> Option<String> {
        if let Some(title) = doc.meta_content("og:title") {
            return Some(title);
        }

        if let Some(title) = doc.title() {
            let title = title.trim();
            if !title.is_empty() {
                return Some(title.to_string());
            }
        }

        if let Ok(Some(h1)) = doc.select_first("h1") {
            let text = h1.text();
            let text = text.trim();
            if !text.is_empty() {
                return Some(text.to_string());
            }
        }

        None
    }

    /// Byline hint: `[rel="author"]` text, then a short `.byline` element.
    fn resolve_byline(doc: &Document) -> Option<String> {
        for selector in ["[rel=\"author\"]", "[class*=\"byline\"]"] {
            if let Ok(elements) = doc.select(selector) {
                for el in elements.iter().take(3) {
                    let text = el.text();
                    let text = text.trim();
                    if !text.is_empty() && text.chars().count() < 100 {
                        return Some(text.to_string());
                    }
                }
            }
        }

        None
    }

    /// Excerpt hint: the candidate's first substantial paragraph.
    fn resolve_excerpt(candidate: &Element<'_>) -> Option<String> {
        let paragraphs = candidate.select("p").ok()?;
        for p in paragraphs.iter().take(5) {
            let text = p.text();
            let text = text.trim();
            if text.chars().count() > 50 {
                let excerpt = if text.chars().count() > 300 {
                    let cut: String = text.chars().take(300).collect();
                    format!("{}...", cut)
                } else {
                    text.to_string()
                };
                return Some(excerpt);
            }
        }
        None
    }
}

impl ContentExtractor for ScoringExtractor {
    fn extract(&self, doc: &Document) -> Option<ExtractedContent> {
        let candidates = self.ranked_candidates(doc);
        let (_, best) = candidates.first()?;

        if best.text().chars().count() < self.config.char_threshold {
            return None;
        }

        Some(ExtractedContent {
            title: Self::resolve_title(doc),
            byline: Self::resolve_byline(doc),
            excerpt: Self::resolve_excerpt(best),
            content_html: best.inner_html(),
        })
    }
}

impl Default for ScoringExtractor {
    fn default() -> Self {
        Self::new()
    }
}
