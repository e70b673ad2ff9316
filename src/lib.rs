pub mod archiver;
pub mod clean;
pub mod config;
pub mod error;
pub mod fetcher;
pub mod models;
pub mod parser;
pub mod scrape;

pub use config::{ScrapeConfig, SiteConfig};
pub use error::{Result, ScrapeError};
pub use fetcher::{Fetch, HttpFetcher};
pub use models::{LinkOutcome, ProductLink, ProductRecord, RunSummary, SkipReason};
pub use scrape::Scraper;
