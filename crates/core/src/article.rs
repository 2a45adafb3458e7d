//! The article result type and its rendered forms.
//!
//! [`ArticleContent`] is the principal output of an extraction call:
//! immutable once constructed, one instance per call, with a token count
//! derived from the content at construction time and never touched again.

use serde::Serialize;

use crate::cleanup::CleanupConfig;
use crate::tokens::TokenCounter;

/// Output format options for rendered article content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Markdown with title heading, metadata lines, and token footer.
    #[default]
    Markdown,
    /// Plain text with an underlined title header.
    Text,
}

/// Request-scoped options for one extraction call.
///
/// Read-only for the duration of the call; nothing persists across calls
/// beyond the hardcoded defaults.
#[derive(Debug, Clone)]
pub struct ExtractionOptions {
    /// Token budget for the content; trailing blocks are dropped to fit.
    pub max_tokens: Option<usize>,
    /// Whether to resolve a summary.
    pub include_summary: bool,
    /// Whether to resolve publish date and author.
    pub include_metadata: bool,
    /// Rendering format for [`ArticleContent::render`].
    pub format: OutputFormat,
    /// Raw-HTML cleanup overrides; `None` uses the default cleanup.
    pub cleanup: Option<CleanupConfig>,
}

impl Default for ExtractionOptions {
    fn default() -> Self {
        Self {
            max_tokens: None,
            include_summary: true,
            include_metadata: true,
            format: OutputFormat::Markdown,
            cleanup: None,
        }
    }
}

/// The structured result of one extraction call.
///
/// `tokens` always equals the call's token counter applied to `content` at
/// the moment of construction — it is derived in [`ArticleContent::new`]
/// and never recomputed or independently set afterward.
#[derive(Debug, Clone, Serialize)]
pub struct ArticleContent {
    /// Article title; `"Untitled"` when the extractor provided none.
    pub title: String,
    /// Publish date as `YYYY-MM-DD`, when resolvable.
    pub publish_date: Option<String>,
    /// Author, when resolvable.
    pub author: Option<String>,
    /// Summary; empty string when none was found or requested.
    pub summary: String,
    /// Markdown-formatted content sections.
    pub content: String,
    /// Token count of `content`.
    pub tokens: usize,
}

impl ArticleContent {
    /// Creates a result, deriving `tokens` from `content` with the given
    /// counter. This is the only place the count is computed.
    pub fn new(
        title: String, publish_date: Option<String>, author: Option<String>, summary: String,
        content: String, counter: &dyn TokenCounter,
    ) -> Self {
        let tokens = counter.count(&content);
        Self { title, publish_date, author, summary, content, tokens }
    }

    /// Renders the article in the requested format.
    pub fn render(&self, format: OutputFormat) -> String {
        match format {
            OutputFormat::Markdown => self.to_markdown(),
            OutputFormat::Text => self.to_text(),
        }
    }

    /// Renders the article as a Markdown document.
    ///
    /// Layout: title heading, blockquoted summary, bold metadata lines, a
    /// horizontal rule, the content body, a closing rule, and the token
    /// footer. Absent optional fields are omitted entirely — no blank
    /// placeholder lines.
    pub fn to_markdown(&self) -> String {
        let mut out = format!("# {}\n\n", self.title);

        if !self.summary.is_empty() {
            out.push_str(&format!("> {}\n\n", self.summary));
        }

        let mut meta_lines = String::new();
        if let Some(date) = &self.publish_date {
            meta_lines.push_str(&format!("**Published:** {}\n", date));
        }
        if let Some(author) = &self.author {
            meta_lines.push_str(&format!("**Author:** {}\n", author));
        }
        if !meta_lines.is_empty() {
            out.push_str(&meta_lines);
            out.push('\n');
        }

        out.push_str("---\n\n");
        if !self.content.is_empty() {
            out.push_str(&self.content);
            out.push_str("\n\n");
        }
        out.push_str("---\n");
        out.push_str(&format!("*Total tokens: {}*", self.tokens));

        out
    }

    /// Renders the article as plain text: underlined title, a `By:`/`Date:`
    /// metadata line, the summary, the content with heading markers
    /// stripped, and the token footer.
    pub fn to_text(&self) -> String {
        let mut out = String::new();

        out.push_str(&self.title);
        out.push('\n');
        out.push_str(&"=".repeat(self.title.chars().count()));
        out.push('\n');

        let mut meta_parts = Vec::new();
        if let Some(author) = &self.author {
            meta_parts.push(format!("By: {}", author));
        }
        if let Some(date) = &self.publish_date {
            meta_parts.push(format!("Date: {}", date));
        }
        if !meta_parts.is_empty() {
            out.push_str(&meta_parts.join(" | "));
            out.push('\n');
        }
        out.push('\n');

        if !self.summary.is_empty() {
            out.push_str(&self.summary);
            out.push_str("\n\n");
        }

        if !self.content.is_empty() {
            for line in self.content.lines() {
                out.push_str(line.strip_prefix("## ").unwrap_or(line));
                out.push('\n');
            }
            out.push('\n');
        }

        out.push_str(&format!("Total tokens: {}", self.tokens));

        out
    }

    /// Gets the article as structured JSON for downstream pipelines.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
    }
}
