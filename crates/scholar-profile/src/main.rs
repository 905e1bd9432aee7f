//! Scholar profile fetcher - Entry Point
//!
//! Fills one author profile and prints it.

use clap::Parser;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use scholar_profile::{Author, Config, ScholarClient, Section, formatters};

#[derive(Parser, Debug)]
#[command(name = "scholar-profile")]
#[command(about = "Fetch a Google Scholar author profile")]
#[command(version)]
struct Cli {
    /// Author identifier (the `user=` value of a profile URL)
    author_id: String,

    /// Sections to fill: basics, indices, counts, coauthors, publications (default: all)
    #[arg(long, value_delimiter = ',', value_parser = parse_section)]
    sections: Vec<Section>,

    /// Output format
    #[arg(long, default_value = "markdown")]
    format: OutputFormat,

    /// Host to fetch pages from (for mirrors and testing)
    #[arg(long, env = "SCHOLAR_HOST")]
    host: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info", env = "RUST_LOG")]
    log_level: String,

    /// Output logs as JSON
    #[arg(long)]
    json_logs: bool,
}

#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
enum OutputFormat {
    /// Human-readable Markdown
    #[default]
    Markdown,
    /// Compact JSON
    Json,
    /// Field dump
    Text,
}

fn parse_section(s: &str) -> Result<Section, String> {
    s.parse().map_err(|e: scholar_profile::ProfileError| e.to_string())
}

fn init_tracing(log_level: &str, json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    // Logs go to stderr so stdout carries only the profile.
    let subscriber = tracing_subscriber::registry().with(filter);

    if json {
        subscriber.with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr)).init();
    } else {
        subscriber
            .with(tracing_subscriber::fmt::layer().compact().with_writer(std::io::stderr))
            .init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_tracing(&cli.log_level, cli.json_logs);

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        author = %cli.author_id,
        "Starting scholar profile fetch"
    );

    let mut config = Config::from_env()?;
    if let Some(host) = &cli.host {
        config = config.with_host(host)?;
    }
    let client = ScholarClient::new(config)?;

    let mut author = Author::new(cli.author_id);
    author.fill_sections(&client, &cli.sections).await?;

    match cli.format {
        OutputFormat::Markdown => print!("{}", formatters::format_author_markdown(&author)),
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&formatters::compact_author(&author))?);
        }
        OutputFormat::Text => print!("{author}"),
    }

    Ok(())
}
