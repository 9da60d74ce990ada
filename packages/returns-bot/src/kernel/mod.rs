//! Kernel module - infrastructure and dependencies.

pub mod ai;
pub mod bot_kernel;
pub mod error;
pub mod simple_scraper;
pub mod test_dependencies;
pub mod traits;

/// GPT-4.1 - model used for policy writing.
pub const GPT_4_1: &str = "gpt-4.1";

pub use ai::OpenAIService;
pub use bot_kernel::BotKernel;
pub use error::ScrapeError;
pub use simple_scraper::SimpleScraper;
pub use test_dependencies::{MockAI, MockWebScraper, TestDependencies};
pub use traits::*;
