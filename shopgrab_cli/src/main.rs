//! Command-line entry point for shopgrab.

use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use shopgrab_browser::{BrowserSession, SessionConfig, WebDriverSession};
use shopgrab_lib::{harvest, write_csv, AssetStore, ScrapeConfig};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

const DEFAULT_QUERY: &str = "laptop";

/// Scrape product listings into a CSV file, downloading thumbnails alongside.
#[derive(Parser, Debug)]
#[command(name = "shopgrab", version, about)]
struct Cli {
    /// Search keyword. Prompted for interactively when omitted.
    #[arg(short, long)]
    query: Option<String>,

    /// Number of result pages to visit.
    #[arg(short, long, default_value_t = 2)]
    pages: u32,

    /// Directory where thumbnail images are stored.
    #[arg(long, default_value = "images")]
    images_dir: PathBuf,

    /// Path of the CSV file to write.
    #[arg(short, long, default_value = "products.csv")]
    out: PathBuf,

    /// WebDriver endpoint to connect to.
    #[arg(long, default_value = "http://localhost:9515")]
    webdriver_url: String,

    /// Run the browser with a visible window.
    #[arg(long)]
    no_headless: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new("shopgrab_cli=info,shopgrab_lib=info,shopgrab_browser=info")
        }))
        .with_target(false)
        .init();

    let cli = Cli::parse();

    let query = match cli.query {
        Some(query) => query,
        None => prompt_keyword()?,
    };

    std::fs::create_dir_all(&cli.images_dir).with_context(|| {
        format!(
            "failed to create image directory {}",
            cli.images_dir.display()
        )
    })?;
    let assets = AssetStore::new(&cli.images_dir)?;

    let mut config = ScrapeConfig::new(&query);
    config.pages = cli.pages;

    let session_config = SessionConfig {
        webdriver_url: cli.webdriver_url,
        headless: !cli.no_headless,
        ..SessionConfig::default()
    };
    let session = WebDriverSession::connect(&session_config)
        .await
        .context("failed to start browser session")?;

    info!(query = %query, pages = cli.pages, "starting scrape");
    let records = harvest(&session, &assets, &config).await;

    // Release the browser before touching the filesystem again.
    if let Err(error) = session.close().await {
        warn!(%error, "failed to close browser session");
    }

    if let Err(error) = write_csv(&records, &cli.out) {
        warn!(%error, "failed to save products");
    }

    Ok(())
}

/// Reads the search keyword from stdin, defaulting when the line is blank.
fn prompt_keyword() -> anyhow::Result<String> {
    print!("Enter the product you want to search for [{DEFAULT_QUERY}]: ");
    std::io::stdout().flush()?;

    let mut line = String::new();
    std::io::stdin().read_line(&mut line)?;

    let keyword = line.trim();
    if keyword.is_empty() {
        Ok(DEFAULT_QUERY.to_string())
    } else {
        Ok(keyword.to_string())
    }
}
