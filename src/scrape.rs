use std::path::PathBuf;

use tracing::{info, warn};

use crate::archiver::CsvArchive;
use crate::config::ScrapeConfig;
use crate::error::Result;
use crate::fetcher::Fetch;
use crate::models::{LinkOutcome, ProductLink, RunSummary, SkipReason};
use crate::parser::{self, DetailSelectors, ListingSelectors};

/// Drives one run: listing page, then every product page in order.
pub struct Scraper<'a, F: Fetch> {
    fetcher: &'a F,
    config: &'a ScrapeConfig,
    listing: ListingSelectors,
    detail: DetailSelectors,
}

impl<'a, F: Fetch> Scraper<'a, F> {
    pub fn new(fetcher: &'a F, config: &'a ScrapeConfig) -> Result<Self> {
        Ok(Self {
            fetcher,
            config,
            listing: ListingSelectors::new(&config.site)?,
            detail: DetailSelectors::new()?,
        })
    }

    /// Product links found on the listing page. A failed fetch or empty
    /// page gives an empty list.
    pub fn discover_links(&self) -> Vec<ProductLink> {
        let url = &self.config.start_url;
        info!("Fetching product list from: {url} ...");

        let links = match self.fetch_document(url) {
            Ok(doc) => parser::product_links(&doc, &self.listing, &self.config.site),
            Err(reason) => {
                warn!(url = %url, ?reason, "listing page unavailable");
                Vec::new()
            }
        };

        info!("-> Found {} products.", links.len());
        links
    }

    /// Fetches and extracts one product. Never fails: problems become a skip.
    pub fn scrape_link(&self, url: &str) -> LinkOutcome {
        match self.fetch_document(url) {
            Ok(doc) => LinkOutcome::Written(parser::parse_product(&doc, &self.detail)),
            Err(reason) => LinkOutcome::Skipped(reason),
        }
    }

    /// Runs the whole pipeline and returns the output path with the tally.
    pub fn run(&self) -> Result<(PathBuf, RunSummary)> {
        let links = self.discover_links();
        let mut summary = RunSummary {
            links_found: links.len(),
            ..Default::default()
        };

        let mut archive = CsvArchive::create(&self.config.output_dir, &self.config.file_name)?;

        for (i, link) in links.iter().enumerate() {
            info!("[{}/{}] Scraping: {}", i + 1, links.len(), link);
            let outcome = self.scrape_link(link);
            match &outcome {
                LinkOutcome::Written(record) => archive.append(record)?,
                LinkOutcome::Skipped(reason) => warn!(url = %link, ?reason, "skipped"),
            }
            summary.record(&outcome);
        }

        let path = archive.finish()?;
        info!(
            links = summary.links_found,
            written = summary.written,
            skipped = summary.skipped,
            "run finished"
        );
        Ok((path, summary))
    }

    fn fetch_document(&self, url: &str) -> std::result::Result<scraper::Html, SkipReason> {
        let body = self.fetcher.fetch(url).map_err(|e| {
            warn!(url, error = %e, "fetch failed");
            SkipReason::FetchFailed
        })?;
        parser::parse_document(&body).ok_or(SkipReason::EmptyDocument)
    }
}
