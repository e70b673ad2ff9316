use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;

use bakedeco_scraper::{HttpFetcher, ScrapeConfig, Scraper};

#[derive(Parser, Debug)]
#[command(
    name = "bakedeco_scraper",
    about = "Scrape Silikomart products from bakedeco.com into a CSV file"
)]
struct Cli {
    /// Listing page to collect product links from
    #[arg(long)]
    start_url: Option<String>,

    /// Directory the CSV is written into (created if missing)
    #[arg(long)]
    output_dir: Option<PathBuf>,

    /// Name of the CSV file
    #[arg(long)]
    file_name: Option<String>,

    /// Per-request timeout in seconds
    #[arg(long)]
    timeout_secs: Option<u64>,

    /// User-Agent header sent with every request
    #[arg(long)]
    user_agent: Option<String>,

    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn into_config(self) -> ScrapeConfig {
        let mut config = ScrapeConfig::default();
        if let Some(url) = self.start_url {
            config.start_url = url;
        }
        if let Some(dir) = self.output_dir {
            config.output_dir = dir;
        }
        if let Some(name) = self.file_name {
            config.file_name = name;
        }
        if let Some(secs) = self.timeout_secs {
            config.timeout = Duration::from_secs(secs);
        }
        if let Some(ua) = self.user_agent {
            config.user_agent = ua;
        }
        config
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_level.into()),
        )
        .init();

    let config = cli.into_config();
    let fetcher = HttpFetcher::new(&config).context("building HTTP client")?;
    let scraper = Scraper::new(&fetcher, &config)?;

    let (path, _summary) = scraper
        .run()
        .with_context(|| format!("writing {}", config.output_path().display()))?;

    println!("\nSuccess! Saved to {}", path.display());
    Ok(())
}
