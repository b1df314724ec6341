use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::str::FromStr;

use anyhow::Context;
use baca_core::{Extractor, FetchConfig, RelatedLink, inject_links};
use chrono::Utc;
use clap::{Parser, Subcommand};
use owo_colors::OwoColorize;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Output format for extracted articles
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OutputFormat {
    Json,
    Text,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "text" | "txt" => Ok(Self::Text),
            _ => Err(format!("Invalid format: {}. Valid options: json, text", s)),
        }
    }
}

/// Scrape article content from web pages and inject related-post links
#[derive(Parser, Debug)]
#[command(name = "baca")]
#[command(author = "Baca Contributors")]
#[command(version = VERSION)]
#[command(about = "Scrape article content and inject related-post links", long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Scrape an article from a URL, local HTML file, or stdin ("-")
    Extract {
        /// URL to fetch, local HTML file, or "-" for stdin
        #[arg(value_name = "INPUT")]
        input: String,

        /// Output file (default: stdout)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output format (json, text)
        #[arg(short, long, default_value = "json", value_name = "FORMAT")]
        format: OutputFormat,

        /// Record URL when reading from a file or stdin
        #[arg(long, value_name = "URL")]
        url: Option<String>,

        /// HTTP timeout in seconds
        #[arg(long, default_value = "30", value_name = "SECS")]
        timeout: u64,

        /// Custom User-Agent for HTTP requests
        #[arg(long, value_name = "UA")]
        user_agent: Option<String>,
    },

    /// Inject related-post links into generated content
    Inject {
        /// Content file, or "-" for stdin
        #[arg(value_name = "INPUT")]
        input: String,

        /// Related link as "TITLE|URL" (repeatable, first three are placed)
        #[arg(short, long = "link", value_name = "TITLE|URL")]
        links: Vec<String>,

        /// Output file (default: stdout)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },
}

/// Print a styled banner for verbose mode
fn print_banner() {
    eprintln!("\n{} {} {}", "Baca".bold().bright_blue(), "v".dimmed(), VERSION.dimmed());
    eprintln!("{}", "Scrape article content and inject related-post links".dimmed());
    eprintln!();
}

/// Print a styled step message
fn print_step(step: usize, total: usize, message: &str) {
    eprintln!("{} {}", format!("[{}/{}]", step, total).dimmed(), message.bright_cyan());
}

/// Print a success message
fn print_success(message: &str) {
    eprintln!("{} {}", "✓".green(), message.bright_green());
}

/// Parse a "TITLE|URL" argument into a RelatedLink
fn parse_link(raw: &str) -> anyhow::Result<RelatedLink> {
    let (title, url) = raw
        .split_once('|')
        .with_context(|| format!("Invalid link '{}': expected TITLE|URL", raw))?;
    Ok(RelatedLink::new(title.trim(), url.trim()))
}

/// Read content from a file or stdin
fn read_input(input: &str) -> anyhow::Result<String> {
    if input == "-" {
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .context("Failed to read from stdin")?;
        Ok(buffer)
    } else {
        fs::read_to_string(input).with_context(|| format!("Failed to read file: {}", input))
    }
}

/// Write output to a file or stdout
fn write_output(output: Option<&PathBuf>, content: &str, verbose: bool) -> anyhow::Result<()> {
    match output {
        Some(path) => {
            fs::write(path, content).with_context(|| format!("Failed to write to file: {}", path.display()))?;
            if verbose {
                print_success(&format!("Output written to {}", path.display().bright_white()));
            }
        }
        None => {
            print!("{}", content);
        }
    }
    Ok(())
}

async fn run_extract(
    input: String, output: Option<PathBuf>, format: OutputFormat, url: Option<String>, timeout: u64,
    user_agent: Option<String>, verbose: bool,
) -> anyhow::Result<()> {
    let extractor = Extractor::new();

    let article = if input.starts_with("http://") || input.starts_with("https://") {
        if verbose {
            print_step(1, 2, &format!("Fetching from {}", input.bright_white().underline()));
        }

        let mut config = FetchConfig { timeout, ..Default::default() };
        if let Some(ua) = user_agent {
            config.user_agent = ua;
        }

        extractor
            .extract_with_config(&input, &config)
            .await
            .context("Failed to scrape URL")?
    } else {
        if verbose {
            print_step(1, 2, &format!("Reading from {}", input.bright_white()));
        }

        let html = read_input(&input)?;
        let record_url = url.unwrap_or_default();
        extractor.extract_from_html(&html, &record_url, Utc::now())
    };

    if verbose {
        print_step(2, 2, "Writing output");
        if !article.title.is_empty() {
            eprintln!("  {} {}", "Title:".dimmed(), article.title.bright_white());
        }
        eprintln!(
            "  {} {}",
            "Content:".dimmed(),
            format!("{} chars", article.content.chars().count()).bright_white()
        );
        eprintln!();
    }

    let rendered = match format {
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(&article).context("Failed to serialize article")?;
            json.push('\n');
            json
        }
        OutputFormat::Text => {
            let mut text = article.content;
            text.push('\n');
            text
        }
    };

    write_output(output.as_ref(), &rendered, verbose)
}

fn run_inject(input: String, links: Vec<String>, output: Option<PathBuf>, verbose: bool) -> anyhow::Result<()> {
    let related = links
        .iter()
        .map(|raw| parse_link(raw))
        .collect::<anyhow::Result<Vec<_>>>()?;

    if verbose {
        print_step(1, 2, &format!("Reading content from {}", input.bright_white()));
    }

    let content = read_input(&input)?;

    if verbose {
        print_step(2, 2, &format!("Injecting {} related links", related.len()));
    }

    let result = inject_links(&content, &related);
    write_output(output.as_ref(), &result, verbose)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    if args.verbose {
        print_banner();
        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
            )
            .with_writer(io::stderr)
            .init();
    }

    match args.command {
        Command::Extract { input, output, format, url, timeout, user_agent } => {
            run_extract(input, output, format, url, timeout, user_agent, args.verbose).await
        }
        Command::Inject { input, links, output } => run_inject(input, links, output, args.verbose),
    }
}
