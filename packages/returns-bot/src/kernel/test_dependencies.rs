// TestDependencies - mock implementations for testing
//
// Provides mock services that can be injected into BotKernel for tests.

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use super::{BaseAI, BaseWebScraper, BotKernel, ScrapeError};

// =============================================================================
// Mock Web Scraper
// =============================================================================

pub struct MockWebScraper {
    responses: Arc<Mutex<Vec<std::result::Result<String, ScrapeError>>>>,
    calls: Arc<Mutex<Vec<String>>>,
}

impl MockWebScraper {
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(Vec::new())),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Queue an HTML body to be returned
    pub fn with_html(self, html: &str) -> Self {
        self.responses.lock().unwrap().push(Ok(html.to_string()));
        self
    }

    /// Queue a fetch failure
    pub fn with_error(self, error: ScrapeError) -> Self {
        self.responses.lock().unwrap().push(Err(error));
        self
    }

    /// URLs that were fetched, in order
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

impl Default for MockWebScraper {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BaseWebScraper for MockWebScraper {
    async fn fetch_html(&self, url: &str) -> std::result::Result<String, ScrapeError> {
        self.calls.lock().unwrap().push(url.to_string());

        let mut responses = self.responses.lock().unwrap();
        if !responses.is_empty() {
            responses.remove(0)
        } else {
            Ok(String::new())
        }
    }
}

// =============================================================================
// Mock AI
// =============================================================================

pub struct MockAI {
    responses: Arc<Mutex<Vec<std::result::Result<String, String>>>>,
    calls: Arc<Mutex<Vec<String>>>,
}

impl MockAI {
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(Vec::new())),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Add a text response to the queue
    pub fn with_response(self, response: impl Into<String>) -> Self {
        self.responses.lock().unwrap().push(Ok(response.into()));
        self
    }

    /// Add a failure to the queue
    pub fn with_error(self, message: impl Into<String>) -> Self {
        self.responses.lock().unwrap().push(Err(message.into()));
        self
    }

    /// Get all prompts that were sent to the AI
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    /// Get the last prompt sent to the AI
    pub fn last_prompt(&self) -> Option<String> {
        self.calls.lock().unwrap().last().cloned()
    }

    /// Check if a prompt containing the given text was sent
    pub fn was_called_with(&self, text: &str) -> bool {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .any(|p| p.contains(text))
    }
}

impl Default for MockAI {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BaseAI for MockAI {
    async fn complete(&self, prompt: &str) -> Result<String> {
        self.calls.lock().unwrap().push(prompt.to_string());

        let mut responses = self.responses.lock().unwrap();
        if responses.is_empty() {
            return Ok("Mock AI response".to_string());
        }
        responses.remove(0).map_err(|message| anyhow!(message))
    }
}

// =============================================================================
// Test Dependencies
// =============================================================================

/// Builder for a BotKernel wired with mocks.
pub struct TestDependencies {
    pub web_scraper: Arc<MockWebScraper>,
    pub ai: Arc<MockAI>,
}

impl TestDependencies {
    pub fn new() -> Self {
        Self {
            web_scraper: Arc::new(MockWebScraper::new()),
            ai: Arc::new(MockAI::new()),
        }
    }

    pub fn mock_scraper(mut self, scraper: MockWebScraper) -> Self {
        self.web_scraper = Arc::new(scraper);
        self
    }

    pub fn mock_ai(mut self, ai: MockAI) -> Self {
        self.ai = Arc::new(ai);
        self
    }

    /// Build a kernel; the mocks stay reachable through `self` for assertions.
    pub fn kernel(&self) -> BotKernel {
        BotKernel::new(self.web_scraper.clone(), self.ai.clone())
    }
}

impl Default for TestDependencies {
    fn default() -> Self {
        Self::new()
    }
}
