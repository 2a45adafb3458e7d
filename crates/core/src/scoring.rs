//! Candidate scoring for the built-in content extractor.
//!
//! Each potential content container gets a score from its tag, its class/id
//! patterns, its text density, and a link-density penalty. The extractor in
//! [`crate::content`] ranks candidates by this score.

use regex::Regex;

use crate::parse::Element;

/// Configuration for candidate scoring.
#[derive(Debug, Clone)]
pub struct ScoreConfig {
    /// Whether class/id patterns adjust the score.
    pub weight_classes: bool,
    /// Weight for positive class/id patterns.
    pub positive_weight: f64,
    /// Weight for negative class/id patterns.
    pub negative_weight: f64,
    /// Characters of text per density point.
    pub chars_per_point: usize,
    /// Cap on the character-density contribution.
    pub max_char_density: f64,
    /// Cap on the comma-density contribution.
    pub max_comma_density: f64,
}

impl Default for ScoreConfig {
    fn default() -> Self {
        Self {
            weight_classes: true,
            positive_weight: 25.0,
            negative_weight: -25.0,
            chars_per_point: 100,
            max_char_density: 3.0,
            max_comma_density: 3.0,
        }
    }
}

/// Class/id patterns that suggest an element holds the article body.
const POSITIVE_PATTERNS: &str =
    r"(?i)(article|body|content|entry|main|page|post|text|blog|story)";

/// Class/id patterns that suggest page furniture rather than content.
const NEGATIVE_PATTERNS: &str = r"(?i)(banner|breadcrumbs?|combx|comment|community|disqus|extra|foot|header|menu|nav|related|remark|rss|share|shoutbox|sidebar|sponsor|pagination|pager|popup|promo|widget)";

/// Base score for an element from its tag name alone.
///
/// Containers likely to hold the article score positive; navigation and
/// list furniture score negative.
pub fn base_tag_score(element: &Element<'_>) -> f64 {
    match element.tag_name().as_str() {
        "article" => 10.0,
        "main" | "section" => 8.0,
        "div" => 5.0,
        "td" | "blockquote" => 3.0,
        "form" | "address" | "ol" | "ul" | "dl" | "dd" | "dt" | "li" => -3.0,
        "h1" | "h2" | "h3" | "h4" | "h5" | "h6" | "th" | "header" | "footer" | "nav" => -5.0,
        _ => 0.0,
    }
}

/// Score adjustment from class and id attributes.
///
/// Returns the positive weight when the id or any class name matches a
/// positive pattern, the negative weight on a negative match, 0 otherwise.
/// The id takes precedence over class names.
pub fn class_id_weight(element: &Element<'_>, config: &ScoreConfig) -> f64 {
    if !config.weight_classes {
        return 0.0;
    }

    let positive = Regex::new(POSITIVE_PATTERNS).unwrap();
    let negative = Regex::new(NEGATIVE_PATTERNS).unwrap();

    if let Some(id) = element.attr("id") {
        if positive.is_match(id) {
            return config.positive_weight;
        }
        if negative.is_match(id) {
            return config.negative_weight;
        }
    }

    if let Some(class) = element.attr("class") {
        for name in class.split_whitespace() {
            if positive.is_match(name) {
                return config.positive_weight;
            }
            if negative.is_match(name) {
                return config.negative_weight;
            }
        }
    }

    0.0
}

/// Density score from text length and comma count.
///
/// Long, comma-rich text reads like prose; both contributions are capped so
/// a single enormous container cannot dominate on volume alone.
pub fn text_density_score(element: &Element<'_>, config: &ScoreConfig) -> f64 {
    let text = element.text();
    let char_score =
        ((text.chars().count() / config.chars_per_point) as f64).min(config.max_char_density);
    let comma_score = (text.matches(',').count() as f64).min(config.max_comma_density);

    char_score + comma_score
}

/// Ratio of link text characters to total text characters, 0.0 to 1.0.
pub fn link_density(element: &Element<'_>) -> f64 {
    let text = element.text();
    let text_length = text.chars().count();

    if text_length == 0 {
        return 0.0;
    }

    let link_text_length = element
        .select("a")
        .unwrap_or_default()
        .iter()
        .map(|link| link.text().chars().count())
        .sum::<usize>();

    link_text_length as f64 / text_length as f64
}

/// Final score for a candidate element.
///
/// Combines the base tag score, class/id weight, and text density, then
/// multiplies by a link-density penalty. Content-positive or text-rich
/// elements get only half the penalty, so an article with a reference
/// section is not mistaken for navigation.
pub fn score_element(element: &Element<'_>, config: &ScoreConfig) -> f64 {
    let class_weight = class_id_weight(element, config);
    let raw = base_tag_score(element) + class_weight + text_density_score(element, config);

    let ld = link_density(element);
    let text_rich = element.text().chars().count() > 500;
    let penalty = if class_weight > 0.0 || text_rich { 1.0 - (ld * 0.5) } else { 1.0 - ld };

    raw * penalty
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::Document;

    fn first<'a>(doc: &'a Document, selector: &str) -> Element<'a> {
        doc.select_first(selector).unwrap().unwrap()
    }

    #[test]
    fn test_base_tag_scores() {
        let doc = Document::parse("<article>a</article><nav>n</nav><div>d</div>").unwrap();
        assert_eq!(base_tag_score(&first(&doc, "article")), 10.0);
        assert_eq!(base_tag_score(&first(&doc, "nav")), -5.0);
        assert_eq!(base_tag_score(&first(&doc, "div")), 5.0);
    }

    #[test]
    fn test_class_weight_positive() {
        let doc = Document::parse(r#"<div class="post-content">text</div>"#).unwrap();
        let weight = class_id_weight(&first(&doc, "div"), &ScoreConfig::default());
        assert_eq!(weight, 25.0);
    }

    #[test]
    fn test_class_weight_negative() {
        let doc = Document::parse(r#"<div class="sidebar">links</div>"#).unwrap();
        let weight = class_id_weight(&first(&doc, "div"), &ScoreConfig::default());
        assert_eq!(weight, -25.0);
    }

    #[test]
    fn test_class_weight_disabled() {
        let doc = Document::parse(r#"<div class="post-content">text</div>"#).unwrap();
        let config = ScoreConfig { weight_classes: false, ..Default::default() };
        assert_eq!(class_id_weight(&first(&doc, "div"), &config), 0.0);
    }

    #[test]
    fn test_id_beats_class() {
        let doc = Document::parse(r#"<div id="sidebar" class="content">x</div>"#).unwrap();
        let weight = class_id_weight(&first(&doc, "div"), &ScoreConfig::default());
        assert_eq!(weight, -25.0);
    }

    #[test]
    fn test_text_density_caps() {
        let long_text = "word, ".repeat(200);
        let html = format!("<div>{}</div>", long_text);
        let doc = Document::parse(&html).unwrap();
        let score = text_density_score(&first(&doc, "div"), &ScoreConfig::default());
        assert_eq!(score, 6.0);
    }

    #[test]
    fn test_link_density() {
        let doc = Document::parse(r##"<div><a href="#">12345</a>67890</div>"##).unwrap();
        let ld = link_density(&first(&doc, "div"));
        assert!((ld - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_link_density_empty_element() {
        let doc = Document::parse("<div></div>").unwrap();
        assert_eq!(link_density(&first(&doc, "div")), 0.0);
    }

    #[test]
    fn test_prose_outscores_navigation() {
        let html = r#"
            <article class="post">
                This is a long paragraph of article prose, with several clauses,
                commas, and enough characters to look like genuine writing rather
                than a list of links to elsewhere on the site.
            </article>
            <nav class="menu"><a href="/a">Home</a><a href="/b">About</a></nav>
        "#;
        let doc = Document::parse(html).unwrap();
        let config = ScoreConfig::default();

        let article = score_element(&first(&doc, "article"), &config);
        let nav = score_element(&first(&doc, "nav"), &config);
        assert!(article > nav);
    }
}
