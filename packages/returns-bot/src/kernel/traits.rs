// Trait definitions for dependency injection
//
// These are INFRASTRUCTURE traits only - no business logic.
// What to extract and what to prompt for lives in domains/.
//
// Naming convention: Base* for trait names (e.g., BaseAI, BaseWebScraper)

use anyhow::Result;
use async_trait::async_trait;

use super::ScrapeError;

// =============================================================================
// Web Scraper Trait (Infrastructure)
// =============================================================================

#[async_trait]
pub trait BaseWebScraper: Send + Sync {
    /// Fetch a page and return its raw HTML body
    async fn fetch_html(&self, url: &str) -> std::result::Result<String, ScrapeError>;
}

// =============================================================================
// AI Trait (Infrastructure - Generic LLM capabilities)
// =============================================================================

#[async_trait]
pub trait BaseAI: Send + Sync {
    /// Complete a single-message prompt (returns the raw text response)
    async fn complete(&self, prompt: &str) -> Result<String>;
}
