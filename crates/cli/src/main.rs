mod echo;

use std::fs;
use std::path::PathBuf;
use std::str::FromStr;

use anyhow::Context;
use clap::Parser;
use excerpta_core::{ArticleExtractor, ExtractionOptions, FetchConfig, OutputFormat};
use owo_colors::OwoColorize;
use time::OffsetDateTime;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Output format for the extracted article
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    Markdown,
    Text,
}

impl FromStr for Format {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "markdown" | "md" => Ok(Self::Markdown),
            "text" | "txt" => Ok(Self::Text),
            _ => Err(format!("Invalid format: {}. Valid options: markdown, text", s)),
        }
    }
}

impl From<Format> for OutputFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Markdown => OutputFormat::Markdown,
            Format::Text => OutputFormat::Text,
        }
    }
}

/// Extract the main article from a web page into a token-counted file
#[derive(Parser, Debug)]
#[command(name = "excerpta")]
#[command(author = "Excerpta Contributors")]
#[command(version = VERSION)]
#[command(about = "Extract web articles into token-counted Markdown", long_about = None)]
struct Args {
    /// URL of the article to extract (http or https)
    #[arg(value_name = "URL")]
    url: Option<String>,

    /// Output file (default: article-<timestamp>.md in the working directory)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Output format (markdown, text)
    #[arg(short, long, default_value = "markdown", value_name = "FORMAT")]
    format: Format,

    /// Token budget for the content body
    #[arg(long, value_name = "NUM")]
    max_tokens: Option<usize>,

    /// Skip summary resolution
    #[arg(long)]
    no_summary: bool,

    /// Skip publish-date and author resolution
    #[arg(long)]
    no_metadata: bool,

    /// HTTP timeout in seconds
    #[arg(long, default_value = "30", value_name = "SECS")]
    timeout: u64,

    /// Custom User-Agent for HTTP requests
    #[arg(long, value_name = "UA")]
    user_agent: Option<String>,

    /// Enable step-by-step progress output
    #[arg(short, long)]
    verbose: bool,
}

/// Default output file name for a given instant.
///
/// The timestamp is the UTC ISO form with ':' and '.' replaced by '-', so
/// the name is filesystem-safe on every platform. Taking the instant as an
/// argument keeps the function pure and the exact name testable.
fn article_file_name(now: OffsetDateTime) -> String {
    format!(
        "article-{:04}-{:02}-{:02}T{:02}-{:02}-{:02}-{:03}Z.md",
        now.year(),
        u8::from(now.month()),
        now.day(),
        now.hour(),
        now.minute(),
        now.second(),
        now.millisecond(),
    )
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let Some(url) = args.url else {
        echo::print_error("Please provide a URL as argument");
        std::process::exit(1);
    };

    if args.verbose {
        echo::print_banner();
    }

    if args.verbose {
        echo::print_step(1, 3, &format!("Fetching {}", url.bright_white().underline()));
    }

    let fetch_config = FetchConfig {
        timeout: args.timeout,
        user_agent: args.user_agent.unwrap_or_else(|| FetchConfig::default().user_agent),
    };

    let extractor = ArticleExtractor::new().with_fetch_config(fetch_config);

    let options = ExtractionOptions {
        max_tokens: args.max_tokens,
        include_summary: !args.no_summary,
        include_metadata: !args.no_metadata,
        format: args.format.into(),
        cleanup: None,
    };

    if args.verbose {
        echo::print_step(2, 3, "Extracting article content");
    }

    let article = extractor
        .extract(&url, &options)
        .await
        .context("Failed to extract article")?;

    if args.verbose {
        eprintln!("  {} {}", "Title:".dimmed(), article.title.bright_white());
        if let Some(author) = &article.author {
            eprintln!("  {} {}", "Author:".dimmed(), author.bright_white());
        }
        eprintln!(
            "  {} {}",
            "Tokens:".dimmed(),
            article.tokens.to_string().bright_white()
        );
        eprintln!();
    }

    if args.verbose {
        echo::print_step(3, 3, "Writing output");
    }

    let path = args
        .output
        .unwrap_or_else(|| PathBuf::from(article_file_name(OffsetDateTime::now_utc())));

    let rendered = article.render(options.format);
    fs::write(&path, rendered).with_context(|| format!("Failed to write to file: {}", path.display()))?;

    if args.verbose {
        echo::print_success("Done");
    }
    println!("Article extracted to: {}", path.display());

    Ok(())
}
