use scraper::{Html, Selector};

use crate::clean::{NOT_AVAILABLE, clean_text};
use crate::config::SiteConfig;
use crate::error::{Result, ScrapeError};
use crate::models::{ProductLink, ProductRecord};

const ITEM_LABEL: &str = "Item #";
const PRICE_LABEL: &str = "Our Price:";

fn compile(query: &str) -> Result<Selector> {
    Selector::parse(query).map_err(|e| ScrapeError::Selector(format!("{query}: {e:?}")))
}

/// Parses a response body. An empty body means the fetch produced nothing,
/// so there is no document to query.
pub fn parse_document(body: &str) -> Option<Html> {
    if body.trim().is_empty() {
        None
    } else {
        Some(Html::parse_document(body))
    }
}

/// Cleaned text of the first element matching `selector`, descendants
/// included, or "N/A" when nothing matches.
pub fn select_text(doc: &Html, selector: &Selector) -> String {
    doc.select(selector)
        .next()
        .map(|el| clean_text(&el.text().collect::<String>()))
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

/// Compiled queries for the listing page.
pub struct ListingSelectors {
    anchors: Selector,
}

impl ListingSelectors {
    pub fn new(site: &SiteConfig) -> Result<Self> {
        let query = format!("div[class*=\"{}\"] a[href]", site.listing_container);
        Ok(Self {
            anchors: compile(&query)?,
        })
    }
}

/// Detail-page links in document order, made absolute with the site's base
/// URL. Duplicates are kept.
pub fn product_links(doc: &Html, selectors: &ListingSelectors, site: &SiteConfig) -> Vec<ProductLink> {
    doc.select(&selectors.anchors)
        .filter_map(|a| a.value().attr("href"))
        .filter(|href| href.contains(site.detail_marker.as_str()))
        .map(|href| format!("{}{}", site.base_url, href))
        .collect()
}

/// Compiled queries for a product detail page.
pub struct DetailSelectors {
    title: Selector,
    item_number: Selector,
    price: Selector,
}

impl DetailSelectors {
    pub fn new() -> Result<Self> {
        Ok(Self {
            title: compile("h1")?,
            item_number: compile("div[class*=\"item-number\"]")?,
            price: compile("div[class*=\"price\"]")?,
        })
    }
}

/// Isolates the token between "Item #" and the first "|" that follows it.
pub fn parse_item_number(raw: &str) -> String {
    let Some(pos) = raw.find(ITEM_LABEL) else {
        return NOT_AVAILABLE.to_string();
    };
    let rest = &raw[pos + ITEM_LABEL.len()..];
    let token = match rest.find('|') {
        Some(bar) => &rest[..bar],
        None => rest,
    };
    clean_text(token)
}

/// Strips the "Our Price:" label. A fragment without the label is taken as
/// the price itself.
pub fn parse_price(raw: &str) -> String {
    if let Some(pos) = raw.find(PRICE_LABEL) {
        clean_text(&raw[pos + PRICE_LABEL.len()..])
    } else if raw != NOT_AVAILABLE {
        raw.to_string()
    } else {
        NOT_AVAILABLE.to_string()
    }
}

pub fn parse_product(doc: &Html, selectors: &DetailSelectors) -> ProductRecord {
    let title = select_text(doc, &selectors.title);
    let item_raw = select_text(doc, &selectors.item_number);
    let price_raw = select_text(doc, &selectors.price);

    ProductRecord {
        title,
        item_number: parse_item_number(&item_raw),
        price: parse_price(&price_raw),
    }
}
