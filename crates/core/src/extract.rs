//! Article assembly.
//!
//! [`ArticleExtractor`] orchestrates one extraction call: fetch, cleanup,
//! parse, main-content extraction, metadata and summary resolution, content
//! segmentation, and token accounting. Each call owns its document and
//! result exclusively; concurrent calls share no mutable state.

use crate::article::{ArticleContent, ExtractionOptions};
use crate::cleanup::{CleanupConfig, cleanup_html};
use crate::content::{ContentExtractor, ScoringExtractor};
use crate::metadata::{resolve_author, resolve_date};
use crate::parse::Document;
use crate::segment::segment;
use crate::summary::resolve_summary;
use crate::tokens::{CharTokenCounter, TokenCounter, truncate_to_budget};
use crate::{ExcerptaError, Result};

#[cfg(feature = "fetch")]
use crate::fetch::{FetchConfig, fetch_url};

/// Main entry point for article extraction.
///
/// Owns the pluggable capabilities — a [`ContentExtractor`] and a
/// [`TokenCounter`] — plus the fetch configuration. The defaults pair the
/// built-in scoring extractor with the character-ratio token estimator.
///
/// # Example
///
/// ```no_run
/// use excerpta_core::{ArticleExtractor, ExtractionOptions};
///
/// let extractor = ArticleExtractor::new();
/// let html = std::fs::read_to_string("page.html").unwrap();
/// let article = extractor.extract_from_html(&html, &ExtractionOptions::default()).unwrap();
/// assert!(article.tokens > 0);
/// ```
pub struct ArticleExtractor {
    extractor: Box<dyn ContentExtractor + Send + Sync>,
    counter: Box<dyn TokenCounter + Send + Sync>,
    #[cfg(feature = "fetch")]
    fetch_config: FetchConfig,
}

impl ArticleExtractor {
    /// Creates an extractor with the built-in capabilities.
    pub fn new() -> Self {
        Self {
            extractor: Box::new(ScoringExtractor::new()),
            counter: Box::new(CharTokenCounter::default()),
            #[cfg(feature = "fetch")]
            fetch_config: FetchConfig::default(),
        }
    }

    /// Swaps in a different main-content extractor.
    pub fn with_extractor(mut self, extractor: Box<dyn ContentExtractor + Send + Sync>) -> Self {
        self.extractor = extractor;
        self
    }

    /// Swaps in a different token counter.
    pub fn with_token_counter(mut self, counter: Box<dyn TokenCounter + Send + Sync>) -> Self {
        self.counter = counter;
        self
    }

    /// Sets the fetch configuration used by [`ArticleExtractor::extract`].
    #[cfg(feature = "fetch")]
    pub fn with_fetch_config(mut self, config: FetchConfig) -> Self {
        self.fetch_config = config;
        self
    }

    /// Fetches a URL and extracts its article.
    ///
    /// # Errors
    ///
    /// Fetch failures and [`ExcerptaError::ExtractionFailed`] are fatal for
    /// this call; no partial result is produced.
    #[cfg(feature = "fetch")]
    pub async fn extract(&self, url: &str, options: &ExtractionOptions) -> Result<ArticleContent> {
        let html = fetch_url(url, &self.fetch_config).await?;
        self.extract_from_html(&html, options)
    }

    /// Fetches a URL and renders its article in the format the options
    /// request.
    #[cfg(feature = "fetch")]
    pub async fn extract_rendered(&self, url: &str, options: &ExtractionOptions) -> Result<String> {
        let article = self.extract(url, options).await?;
        Ok(article.render(options.format))
    }

    /// Extracts an article from an HTML string, without any network access.
    pub fn extract_from_html(&self, html: &str, options: &ExtractionOptions) -> Result<ArticleContent> {
        let default_cleanup = CleanupConfig::default();
        let cleanup = options.cleanup.as_ref().unwrap_or(&default_cleanup);

        let cleaned = cleanup_html(html, cleanup);
        let doc = Document::parse(&cleaned)?;
        self.extract_from_document(&doc, options)
    }

    /// Runs the assembly pipeline over a parsed document.
    fn extract_from_document(&self, doc: &Document, options: &ExtractionOptions) -> Result<ArticleContent> {
        let extracted = self.extractor.extract(doc).ok_or(ExcerptaError::ExtractionFailed)?;

        let title = extracted
            .title
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .unwrap_or("Untitled")
            .to_string();

        let (publish_date, author) = if options.include_metadata {
            let byline = extracted
                .byline
                .as_deref()
                .map(str::trim)
                .filter(|b| !b.is_empty())
                .map(str::to_string);

            (resolve_date(doc), byline.or_else(|| resolve_author(doc)))
        } else {
            (None, None)
        };

        let summary = if options.include_summary {
            resolve_summary(doc, extracted.excerpt.as_deref())
        } else {
            String::new()
        };

        let mut content = segment(&extracted.content_html);
        if let Some(max_tokens) = options.max_tokens {
            content = truncate_to_budget(self.counter.as_ref(), &content, max_tokens);
        }

        Ok(ArticleContent::new(
            title,
            publish_date,
            author,
            summary,
            content,
            self.counter.as_ref(),
        ))
    }
}

impl Default for ArticleExtractor {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience function: extract from an HTML string with the default
/// capabilities.
pub fn extract_from_html(html: &str, options: &ExtractionOptions) -> Result<ArticleContent> {
    ArticleExtractor::new().extract_from_html(html, options)
}

/// Convenience function: fetch a URL and extract with the default
/// capabilities.
///
/// # Example
///
/// ```no_run
/// use excerpta_core::{fetch_and_extract, ExtractionOptions};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let article = fetch_and_extract("https://example.com/article", &ExtractionOptions::default()).await?;
///     println!("{} ({} tokens)", article.title, article.tokens);
///     Ok(())
/// }
/// ```
#[cfg(feature = "fetch")]
pub async fn fetch_and_extract(url: &str, options: &ExtractionOptions) -> Result<ArticleContent> {
    ArticleExtractor::new().extract(url, options).await
}
