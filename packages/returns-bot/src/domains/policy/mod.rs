//! Policy domain - asks the LLM for a returns policy from a scrape summary.

pub mod prompt;

pub use prompt::{build_policy_prompt, POLICY_GUIDELINES};

use anyhow::{Context, Result};
use tracing::info;

use crate::kernel::BaseAI;

/// Write a customer-facing returns policy.
///
/// Errors from the AI are returned as-is; there is no fallback policy text.
pub async fn generate_policy(
    ai: &dyn BaseAI,
    scraped_text: &str,
    manual_override: Option<&str>,
) -> Result<String> {
    let prompt = build_policy_prompt(scraped_text, manual_override);

    let response = ai
        .complete(&prompt)
        .await
        .context("Failed to generate returns policy")?;

    let policy = response.trim().to_string();
    info!(policy_length = policy.len(), "Returns policy generated");

    Ok(policy)
}
