//! Simple homepage fetcher - one HTTP GET, no crawling
//!
//! - Uses reqwest with a bounded timeout and a browser-like User-Agent
//! - Rejects non-2xx statuses and non-HTML content types
//! - No retries, no cookies, default redirect policy
//!
//! HTML parsing happens in the scraping domain, not here.

use anyhow::{Context, Result};
use async_trait::async_trait;
use std::time::Duration;
use tracing::debug;

use super::{BaseWebScraper, ScrapeError};

/// Fetch timeout for a homepage request
pub const SCRAPE_TIMEOUT: Duration = Duration::from_secs(10);

/// Sent on every fetch to get past trivial bot blocking
pub const BROWSER_USER_AGENT: &str = "Mozilla/5.0";

pub struct SimpleScraper {
    client: reqwest::Client,
    timeout: Duration,
}

impl SimpleScraper {
    pub fn new() -> Result<Self> {
        Self::with_timeout(SCRAPE_TIMEOUT)
    }

    pub fn with_timeout(timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(BROWSER_USER_AGENT)
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self { client, timeout })
    }

    /// Missing Content-Type is accepted; servers omit it often enough.
    fn is_html_content_type(content_type: &str) -> bool {
        content_type.to_ascii_lowercase().contains("html")
    }
}

#[async_trait]
impl BaseWebScraper for SimpleScraper {
    async fn fetch_html(&self, url: &str) -> std::result::Result<String, ScrapeError> {
        debug!(url = %url, "Fetching homepage");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| ScrapeError::from_reqwest(url, self.timeout, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ScrapeError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        if let Some(content_type) = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
        {
            if !Self::is_html_content_type(content_type) {
                return Err(ScrapeError::NotHtml {
                    url: url.to_string(),
                    content_type: content_type.to_string(),
                });
            }
        }

        let html = response
            .text()
            .await
            .map_err(|e| ScrapeError::from_reqwest(url, self.timeout, e))?;

        debug!(url = %url, bytes = html.len(), "Homepage fetched");
        Ok(html)
    }
}
