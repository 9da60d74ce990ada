use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::env;
use std::fmt;
use tracing::warn;
use url::Url;

/// Application configuration loaded from environment variables
#[derive(Clone)]
pub struct Config {
    /// Empty when `OPENAI_API_KEY` is unset; the first completion call then
    /// fails with an authentication error.
    pub openai_api_key: String,
    pub openai_base_url: Option<String>,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        Self::from_source(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    pub fn from_source(get: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let openai_api_key = get("OPENAI_API_KEY").unwrap_or_default();
        if openai_api_key.trim().is_empty() {
            warn!("OPENAI_API_KEY is not set; policy generation will fail to authenticate");
        }

        let openai_base_url = match get("OPENAI_BASE_URL").filter(|u| !u.trim().is_empty()) {
            Some(raw) => {
                Url::parse(&raw).context("OPENAI_BASE_URL must be a valid URL")?;
                Some(raw)
            }
            None => None,
        };

        Ok(Self {
            openai_api_key,
            openai_base_url,
        })
    }

    pub fn has_api_key(&self) -> bool {
        !self.openai_api_key.trim().is_empty()
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field(
                "openai_api_key",
                &if self.has_api_key() { "<redacted>" } else { "<unset>" },
            )
            .field("openai_base_url", &self.openai_base_url)
            .finish()
    }
}
