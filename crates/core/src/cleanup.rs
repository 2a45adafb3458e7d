//! Raw HTML cleanup applied before parsing.
//!
//! Fetched pages arrive full of scripts, stylesheets, and comments that only
//! slow down candidate scanning. This module strips them with a streaming
//! rewriter before the document is parsed.

use regex::Regex;

/// Configuration for HTML cleanup.
///
/// Applied to the raw fetched HTML once per extraction call, before the
/// document is parsed. The defaults remove non-content markup and leave
/// paragraph whitespace untouched.
#[derive(Debug, Clone)]
pub struct CleanupConfig {
    /// Whether to remove script tags.
    pub remove_scripts: bool,
    /// Whether to remove style tags.
    pub remove_styles: bool,
    /// Whether to remove HTML comments.
    pub remove_comments: bool,
    /// Whether to collapse runs of blank lines and spaces.
    pub condense_paragraphs: bool,
}

impl Default for CleanupConfig {
    fn default() -> Self {
        Self {
            remove_scripts: true,
            remove_styles: true,
            remove_comments: true,
            condense_paragraphs: false,
        }
    }
}

/// Cleans raw HTML according to the given configuration.
///
/// On any rewriter failure the input is returned unchanged; cleanup is an
/// accuracy aid, never a reason to fail the extraction call.
pub fn cleanup_html(html: &str, config: &CleanupConfig) -> String {
    let mut cleaned = if config.remove_scripts || config.remove_styles || config.remove_comments {
        rewrite_html(html, config)
    } else {
        html.to_string()
    };

    if config.condense_paragraphs {
        cleaned = condense_whitespace(&cleaned);
    }

    cleaned
}

/// Removes script/style elements and comments via lol_html.
fn rewrite_html(html: &str, config: &CleanupConfig) -> String {
    let mut output = String::new();

    let element_content_handlers = [
        config.remove_scripts.then(|| {
            lol_html::element!("script", |el| {
                el.remove();
                Ok(())
            })
        }),
        config.remove_styles.then(|| {
            lol_html::element!("style", |el| {
                el.remove();
                Ok(())
            })
        }),
    ]
    .into_iter()
    .flatten()
    .collect();

    let document_content_handlers = if config.remove_comments {
        vec![lol_html::doc_comments!(|c| {
            c.remove();
            Ok(())
        })]
    } else {
        vec![]
    };

    let mut rewriter = lol_html::HtmlRewriter::new(
        lol_html::Settings {
            element_content_handlers,
            document_content_handlers,
            ..Default::default()
        },
        |c: &[u8]| {
            output.push_str(&String::from_utf8_lossy(c));
        },
    );

    if rewriter.write(html.as_bytes()).is_err() {
        return html.to_string();
    }

    match rewriter.end() {
        Ok(_) if !output.is_empty() => output,
        _ => html.to_string(),
    }
}

/// Collapses runs of blank lines to one blank line and runs of spaces/tabs
/// to a single space.
fn condense_whitespace(html: &str) -> String {
    let blank_lines = Regex::new(r"\n{3,}").unwrap();
    let spaces = Regex::new(r"[ \t]{2,}").unwrap();

    let condensed = blank_lines.replace_all(html, "\n\n");
    spaces.replace_all(&condensed, " ").into_owned()
}
