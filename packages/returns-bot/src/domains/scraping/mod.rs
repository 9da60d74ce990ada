//! Scraping domain - turns a homepage into a short plain-text summary.

pub mod signals;

pub use signals::{SiteSignals, NO_READABLE_CONTENT, SCRAPE_FAILED};

use tracing::{info, warn};

use crate::kernel::BaseWebScraper;

/// Fetch `url` and summarize its title, description, headings and product
/// links.
///
/// Never fails and never returns an empty string: fetch failures of any kind
/// come back as [`SCRAPE_FAILED`], pages with nothing usable as
/// [`NO_READABLE_CONTENT`].
pub async fn scrape_site_context(scraper: &dyn BaseWebScraper, url: &str) -> String {
    let html = match scraper.fetch_html(url).await {
        Ok(html) => html,
        Err(e) => {
            warn!(url = %url, error = %e, "Scrape failed");
            return SCRAPE_FAILED.to_string();
        }
    };

    let signals = SiteSignals::from_html(&html);
    info!(
        url = %url,
        headings = signals.headings.len(),
        product_links = signals.product_links.len(),
        "Extracted site signals"
    );

    signals.into_summary()
}
