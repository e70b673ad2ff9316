use serde::Serialize;

/// Absolute URL of one product detail page.
pub type ProductLink = String;

/// One output row. Every field is already cleaned and may be "N/A".
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductRecord {
    pub title: String,
    pub item_number: String,
    pub price: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    FetchFailed,
    EmptyDocument,
}

/// What happened to a single product link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkOutcome {
    Written(ProductRecord),
    Skipped(SkipReason),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub links_found: usize,
    pub written: usize,
    pub skipped: usize,
}

impl RunSummary {
    pub fn record(&mut self, outcome: &LinkOutcome) {
        match outcome {
            LinkOutcome::Written(_) => self.written += 1,
            LinkOutcome::Skipped(_) => self.skipped += 1,
        }
    }
}
