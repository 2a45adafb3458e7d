//! Page fetching over HTTP.
//!
//! One fetch per extraction call. A failed fetch fails the whole call; there
//! is no retry or caching layer here, and concurrent calls share nothing.

use std::time::Duration;

use reqwest::Client;
use url::Url;

use crate::{ExcerptaError, Result};

/// HTTP client configuration for fetching web pages.
#[derive(Debug, Clone)]
pub struct FetchConfig {
    /// Request timeout in seconds.
    pub timeout: u64,
    /// Custom User-Agent string.
    pub user_agent: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout: 30,
            user_agent: "Mozilla/5.0 (compatible; Excerpta/0.3; +https://github.com/stormlightlabs/excerpta)"
                .to_string(),
        }
    }
}

/// Fetches HTML content from an absolute http/https URL.
///
/// Performs a single GET request, follows redirects, and returns the
/// response body as text. Non-success status codes, timeouts, and
/// non-text payloads all fail the call.
///
/// # Errors
///
/// - [`ExcerptaError::InvalidUrl`] for unparseable or non-http(s) URLs
/// - [`ExcerptaError::Timeout`] when the configured timeout elapses
/// - [`ExcerptaError::Http`] for network errors and error statuses
/// - [`ExcerptaError::UnsupportedContentType`] for non-text responses
pub async fn fetch_url(url: &str, config: &FetchConfig) -> Result<String> {
    let parsed_url = Url::parse(url).map_err(|e| ExcerptaError::InvalidUrl(e.to_string()))?;

    if !matches!(parsed_url.scheme(), "http" | "https") {
        return Err(ExcerptaError::InvalidUrl(format!(
            "unsupported scheme '{}', expected http or https",
            parsed_url.scheme()
        )));
    }

    let client = Client::builder()
        .timeout(Duration::from_secs(config.timeout))
        .build()
        .map_err(ExcerptaError::Http)?;

    let response = client
        .get(parsed_url)
        .header("User-Agent", &config.user_agent)
        .header(
            "Accept",
            "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8",
        )
        .header("Accept-Language", "en-US,en;q=0.9")
        .send()
        .await
        .map_err(|e| {
            if e.is_timeout() {
                ExcerptaError::Timeout { timeout: config.timeout }
            } else {
                ExcerptaError::Http(e)
            }
        })?;

    let response = response.error_for_status().map_err(ExcerptaError::Http)?;

    if let Some(content_type) = response.headers().get(reqwest::header::CONTENT_TYPE) {
        let content_type = content_type.to_str().unwrap_or("").to_ascii_lowercase();
        if !is_text_content_type(&content_type) {
            return Err(ExcerptaError::UnsupportedContentType(content_type));
        }
    }

    let content = response.text().await?;

    Ok(content)
}

/// Whether a Content-Type header names a payload the pipeline can parse.
fn is_text_content_type(content_type: &str) -> bool {
    content_type.is_empty()
        || content_type.starts_with("text/")
        || content_type.contains("html")
        || content_type.contains("xml")
}
