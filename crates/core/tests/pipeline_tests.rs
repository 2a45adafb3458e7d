//! Library API integration tests
use excerpta_core::*;

fn fixture(name: &str) -> String {
    std::fs::read_to_string(format!("tests/fixtures/{}", name)).expect("fixture should exist")
}

/// Extractor stub that never finds an article.
struct NullExtractor;

impl ContentExtractor for NullExtractor {
    fn extract(&self, _doc: &Document) -> Option<ExtractedContent> {
        None
    }
}

/// Extractor stub returning a fixed result.
struct FixedExtractor(ExtractedContent);

impl ContentExtractor for FixedExtractor {
    fn extract(&self, _doc: &Document) -> Option<ExtractedContent> {
        Some(self.0.clone())
    }
}

#[test]
fn test_fixture_end_to_end() {
    let html = fixture("blog_post.html");
    let article = extract_from_html(&html, &ExtractionOptions::default()).expect("should extract");

    assert_eq!(article.title, "Why Static Sites Came Back");
    assert_eq!(article.publish_date, Some("2024-05-21".to_string()));
    // The in-content byline outranks the author meta tag.
    assert_eq!(article.author, Some("By Priya Raman".to_string()));
    assert!(article.summary.starts_with("A look at the return"));
    assert!(article.content.contains("## What changed"));
    assert!(!article.content.contains("Imprint"));
    assert!(!article.content.contains("analytics"));
    assert_eq!(article.tokens, CharTokenCounter::default().count(&article.content));
}

#[test]
fn test_fixture_markdown_render() {
    let html = fixture("blog_post.html");
    let article = extract_from_html(&html, &ExtractionOptions::default()).unwrap();
    let markdown = article.to_markdown();

    assert!(markdown.starts_with("# Why Static Sites Came Back\n\n> A look at the return"));
    assert!(markdown.contains("**Published:** 2024-05-21\n"));
    assert!(markdown.contains("**Author:** By Priya Raman\n"));
    assert!(markdown.contains("\n---\n"));
    assert!(markdown.ends_with(&format!("*Total tokens: {}*", article.tokens)));
}

#[test]
fn test_fixture_text_render() {
    let html = fixture("blog_post.html");
    let article = extract_from_html(&html, &ExtractionOptions::default()).unwrap();
    let text = article.render(OutputFormat::Text);

    assert!(text.starts_with("Why Static Sites Came Back\n===="));
    assert!(text.contains("By: By Priya Raman | Date: 2024-05-21"));
    assert!(!text.contains("## "));
    assert!(text.ends_with(&format!("Total tokens: {}", article.tokens)));
}

#[test]
fn test_date_priority_scenario() {
    // article:published_time outranks the generic date meta.
    let html = r#"
        <html><head>
            <meta property="article:published_time" content="2024-03-15T10:00:00Z">
            <meta name="date" content="2024-01-01">
        </head><body></body></html>
    "#;
    let doc = Document::parse(html).unwrap();
    assert_eq!(resolve_date(&doc), Some("2024-03-15".to_string()));
}

#[test]
fn test_extractor_null_scenario() {
    let extractor = ArticleExtractor::new().with_extractor(Box::new(NullExtractor));
    let result = extractor.extract_from_html("<html><body><p>Anything</p></body></html>", &ExtractionOptions::default());

    match result {
        Err(ExcerptaError::ExtractionFailed) => {
            assert_eq!(
                ExcerptaError::ExtractionFailed.to_string(),
                "Failed to extract article content"
            );
        }
        other => panic!("expected ExtractionFailed, got {:?}", other.map(|a| a.title)),
    }
}

#[test]
fn test_segment_scenario() {
    let segmented = segment("<h2>Intro</h2><p>Hello</p><h2>Next</h2><p>World</p>");
    assert_eq!(segmented, "## Intro\n\nHello\n\n## Next\n\nWorld");
}

#[test]
fn test_summary_excerpt_scenario() {
    let doc = Document::parse("<html><body></body></html>").unwrap();
    assert_eq!(resolve_summary(&doc, Some("An overview")), "An overview");
}

#[test]
fn test_untitled_scenario() {
    let extractor = ArticleExtractor::new().with_extractor(Box::new(FixedExtractor(ExtractedContent {
        content_html: "<p>Content without a title.</p>".to_string(),
        ..Default::default()
    })));

    let article = extractor
        .extract_from_html("<html><body></body></html>", &ExtractionOptions::default())
        .unwrap();

    assert!(article.to_markdown().starts_with("# Untitled"));
}

#[test]
fn test_max_tokens_limits_content() {
    let html = fixture("blog_post.html");
    let unbounded = extract_from_html(&html, &ExtractionOptions::default()).unwrap();

    let options = ExtractionOptions { max_tokens: Some(30), ..Default::default() };
    let bounded = extract_from_html(&html, &options).unwrap();

    assert!(bounded.tokens <= 30);
    assert!(bounded.tokens < unbounded.tokens);
    assert!(!bounded.content.is_empty());
}

#[test]
fn test_custom_token_counter() {
    // Counts whitespace-separated words.
    struct WordCounter;

    impl TokenCounter for WordCounter {
        fn count(&self, text: &str) -> usize {
            text.split_whitespace().count()
        }
    }

    let extractor = ArticleExtractor::new()
        .with_extractor(Box::new(FixedExtractor(ExtractedContent {
            content_html: "<p>five words are in here</p>".to_string(),
            ..Default::default()
        })))
        .with_token_counter(Box::new(WordCounter));

    let article = extractor
        .extract_from_html("<html><body></body></html>", &ExtractionOptions::default())
        .unwrap();

    assert_eq!(article.tokens, 5);
}

#[test]
fn test_extractor_config_relaxed_threshold() {
    let html = r#"
        <html><body><article class="post"><p>A short but real piece of writing.</p></article></body></html>
    "#;

    assert!(matches!(
        extract_from_html(html, &ExtractionOptions::default()),
        Err(ExcerptaError::ExtractionFailed)
    ));

    let relaxed = ArticleExtractor::new().with_extractor(Box::new(ScoringExtractor::with_config(
        ExtractorConfig { char_threshold: 10, ..Default::default() },
    )));
    let article = relaxed.extract_from_html(html, &ExtractionOptions::default()).unwrap();
    assert!(article.content.contains("real piece of writing"));
}

#[test]
fn test_concurrent_calls_are_independent() {
    let html = fixture("blog_post.html");
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let html = html.clone();
            std::thread::spawn(move || extract_from_html(&html, &ExtractionOptions::default()).unwrap())
        })
        .collect();

    let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    for article in &results {
        assert_eq!(article.title, results[0].title);
        assert_eq!(article.tokens, results[0].tokens);
    }
}
