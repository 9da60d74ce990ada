// AI implementation using OpenAI
//
// This is the infrastructure implementation of BaseAI.
// Business logic (what to prompt for) lives in domain layers.

use anyhow::{Context, Result};
use async_trait::async_trait;
use openai_client::{ChatRequest, Message, OpenAIClient};

use super::{BaseAI, GPT_4_1};
use crate::Config;

/// Sampling temperature for policy writing
pub const DEFAULT_TEMPERATURE: f32 = 0.7;

/// OpenAI implementation of AI capabilities
#[derive(Clone)]
pub struct OpenAIService {
    client: OpenAIClient,
    model: String,
    temperature: f32,
}

impl OpenAIService {
    pub fn new(client: OpenAIClient) -> Self {
        Self {
            client,
            model: GPT_4_1.to_string(),
            temperature: DEFAULT_TEMPERATURE,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        let client = OpenAIClient::new(config.openai_api_key.clone());
        let client = match config.openai_base_url {
            Some(ref url) => client.with_base_url(url),
            None => client,
        };
        Self::new(client)
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn temperature(&self) -> f32 {
        self.temperature
    }
}

#[async_trait]
impl BaseAI for OpenAIService {
    async fn complete(&self, prompt: &str) -> Result<String> {
        tracing::info!(
            model = %self.model,
            prompt_length = prompt.len(),
            "Calling OpenAI API"
        );

        let request = ChatRequest::new(&self.model)
            .message(Message::user(prompt))
            .temperature(self.temperature);

        let response = self
            .client
            .chat_completion(request)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, model = %self.model, "OpenAI API call failed");
                e
            })
            .context("Failed to call OpenAI API")?;

        tracing::info!(
            response_length = response.content.len(),
            model = %self.model,
            "OpenAI API response received"
        );

        Ok(response.content)
    }
}
