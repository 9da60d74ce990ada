// BotKernel - infrastructure behind the two pipeline steps
//
// Holds the web scraper and the AI as trait objects so tests can swap in
// mocks (see TestDependencies).

use anyhow::Result;
use std::sync::Arc;

use super::{BaseAI, BaseWebScraper, OpenAIService, SimpleScraper};
use crate::Config;

pub struct BotKernel {
    pub web_scraper: Arc<dyn BaseWebScraper>,
    pub ai: Arc<dyn BaseAI>,
}

impl BotKernel {
    pub fn new(web_scraper: Arc<dyn BaseWebScraper>, ai: Arc<dyn BaseAI>) -> Self {
        Self { web_scraper, ai }
    }

    /// Wire the real HTTP scraper and OpenAI service.
    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(Self::new(
            Arc::new(SimpleScraper::new()?),
            Arc::new(OpenAIService::from_config(config)),
        ))
    }
}
