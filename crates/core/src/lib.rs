//! Excerpta turns web pages into token-budgeted Markdown or plain text for
//! language-model pipelines.
//!
//! The pipeline per call: fetch, cleanup, parse, main-content extraction
//! (pluggable via [`ContentExtractor`]), metadata and summary resolution,
//! segmentation into heading-delimited Markdown sections, and token
//! accounting (pluggable via [`TokenCounter`]).
//!
//! # Example
//!
//! ```no_run
//! use excerpta_core::{fetch_and_extract, ExtractionOptions};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let article = fetch_and_extract("https://example.com/article", &ExtractionOptions::default()).await?;
//!     println!("{}", article.to_markdown());
//!     Ok(())
//! }
//! ```

pub mod article;
pub mod cleanup;
pub mod content;
pub mod error;
pub mod extract;
#[cfg(feature = "fetch")]
pub mod fetch;
pub mod metadata;
pub mod parse;
pub mod scoring;
pub mod segment;
pub mod summary;
pub mod tokens;

pub use article::{ArticleContent, ExtractionOptions, OutputFormat};
pub use cleanup::{CleanupConfig, cleanup_html};
pub use content::{ContentExtractor, ExtractedContent, ExtractorConfig, ScoringExtractor};
pub use error::{ExcerptaError, Result};
pub use extract::{ArticleExtractor, extract_from_html};
#[cfg(feature = "fetch")]
pub use extract::fetch_and_extract;
#[cfg(feature = "fetch")]
pub use fetch::{FetchConfig, fetch_url};
pub use metadata::{FieldCandidate, find_first_match, resolve_author, resolve_date};
pub use parse::Document;
pub use segment::{Section, segment};
pub use summary::resolve_summary;
pub use tokens::{CharTokenCounter, TokenCounter, truncate_to_budget};
