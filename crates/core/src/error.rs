//! Error types for Excerpta operations.
//!
//! This module defines the main error type [`ExcerptaError`] which covers
//! fetching, parsing, and article extraction. Metadata misses (no resolvable
//! date, author, or summary) are deliberately *not* errors — they degrade to
//! `None` or an empty string and the extraction proceeds.

use thiserror::Error;

/// Main error type for article extraction operations.
///
/// Only call-level failures live here: a fetch that never produced a page,
/// HTML that cannot be queried, an extractor that found no article, or an
/// output file that cannot be written. Field-level resolution misses never
/// surface as errors.
///
/// # Example
///
/// ```rust
/// use excerpta_core::{ExcerptaError, extract_from_html, ExtractionOptions};
///
/// match extract_from_html("<html></html>", &ExtractionOptions::default()) {
///     Ok(article) => println!("Title: {}", article.title),
///     Err(ExcerptaError::ExtractionFailed) => println!("No article on this page"),
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
#[derive(Error, Debug)]
pub enum ExcerptaError {
    /// HTTP request errors from reqwest.
    ///
    /// Wraps network errors, DNS failures, connection issues, and
    /// non-success status codes.
    #[cfg(feature = "fetch")]
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Request timeout.
    ///
    /// Returned when an HTTP request exceeds the configured timeout duration.
    #[error("Request timed out after {timeout} seconds")]
    Timeout { timeout: u64 },

    /// Invalid URL provided.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// The response body is not HTML or text.
    ///
    /// Returned when a fetch succeeds but the `Content-Type` indicates a
    /// payload the extraction pipeline cannot work with (images, PDFs, ...).
    #[error("Unsupported content type: {0}")]
    UnsupportedContentType(String),

    /// HTML parsing errors.
    ///
    /// Returned when a CSS selector is invalid or extracted markup cannot
    /// be re-parsed.
    #[error("Failed to parse HTML: {0}")]
    HtmlParseError(String),

    /// The main-content extractor found no usable article.
    ///
    /// This is the terminal outcome for navigation pages, link hubs, and
    /// pages with too little prose. No partial result is produced.
    #[error("Failed to extract article content")]
    ExtractionFailed,

    /// Output write errors.
    ///
    /// Wraps standard I/O errors for file operations.
    #[error("Failed to write output: {0}")]
    Write(#[from] std::io::Error),
}

/// Result type alias for ExcerptaError.
pub type Result<T> = std::result::Result<T, ExcerptaError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ExcerptaError::InvalidUrl("not a url".to_string());
        assert!(err.to_string().contains("Invalid URL"));
    }

    #[test]
    fn test_extraction_failed_message() {
        let err = ExcerptaError::ExtractionFailed;
        assert_eq!(err.to_string(), "Failed to extract article content");
    }

    #[test]
    fn test_timeout_error() {
        let err = ExcerptaError::Timeout { timeout: 30 };
        assert!(err.to_string().contains("30"));
    }
}
