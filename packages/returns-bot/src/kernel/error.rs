//! Failure kinds for a homepage fetch.
//!
//! Callers of the scraping domain never see these; they are logged and then
//! collapsed into a sentinel summary string.

use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScrapeError {
    /// DNS, connect, TLS or malformed-URL failure
    #[error("request to {url} failed: {message}")]
    Network { url: String, message: String },

    /// The request did not finish within the fetch timeout
    #[error("timed out after {timeout:?} fetching {url}")]
    Timeout { url: String, timeout: Duration },

    /// Server answered with a non-2xx status
    #[error("HTTP {status} for {url}")]
    Status { url: String, status: u16 },

    /// Body is something other than an HTML document
    #[error("{url} returned non-HTML content ({content_type})")]
    NotHtml { url: String, content_type: String },

    /// Body could not be read or decoded
    #[error("failed to read body from {url}: {message}")]
    Body { url: String, message: String },
}

impl ScrapeError {
    /// Classify a reqwest failure raised while sending or reading.
    pub(crate) fn from_reqwest(url: &str, timeout: Duration, err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ScrapeError::Timeout {
                url: url.to_string(),
                timeout,
            }
        } else if err.is_body() || err.is_decode() {
            ScrapeError::Body {
                url: url.to_string(),
                message: err.to_string(),
            }
        } else {
            ScrapeError::Network {
                url: url.to_string(),
                message: err.to_string(),
            }
        }
    }
}
