//! Cloud inference backend
//!
//! Stateless request/response against a hosted chat-completions endpoint,
//! authenticated with a bearer token read from the environment. Model and
//! decoding parameters are fixed by configuration.

use crate::config::GeneratorConfig;
use crate::generator::{GeneratorError, GeneratorResult, TextGenerator};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    temperature: f64,
    messages: Vec<ChatMessage<'a>>,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    #[serde(default)]
    content: String,
}

/// Text generator backed by a cloud inference endpoint
#[derive(Debug, Clone)]
pub struct CloudGenerator {
    client: Client,
    endpoint: String,
    api_key: String,
    model: String,
    max_tokens: u32,
    temperature: f64,
}

impl CloudGenerator {
    /// Creates a cloud generator from configuration
    ///
    /// The API key is read from the environment variable named by
    /// `config.api_key_env`; a missing key is an error at construction
    /// time, not at the first request.
    ///
    /// # Arguments
    ///
    /// * `config` - Generator configuration (endpoint, model, decoding)
    ///
    /// # Returns
    ///
    /// * `Ok(CloudGenerator)` - Ready-to-use backend
    /// * `Err(GeneratorError)` - Missing API key or client build failure
    pub fn new(config: &GeneratorConfig) -> GeneratorResult<Self> {
        let api_key = std::env::var(&config.api_key_env)
            .map_err(|_| GeneratorError::MissingApiKey(config.api_key_env.clone()))?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
            api_key,
            model: config.model.clone(),
            max_tokens: config.max_tokens,
            temperature: config.temperature,
        })
    }
}

impl TextGenerator for CloudGenerator {
    fn label(&self) -> String {
        format!("cloud inference ({})", self.model)
    }

    async fn generate(&self, prompt: &str) -> GeneratorResult<String> {
        let request = ChatRequest {
            model: &self.model,
            max_tokens: self.max_tokens,
            temperature: self.temperature,
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
        };

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(GeneratorError::Status {
                status: status.as_u16(),
            });
        }

        let body: ChatResponse = response.json().await?;
        let text = body
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .unwrap_or_default();

        if text.trim().is_empty() {
            return Err(GeneratorError::EmptyResponse);
        }

        Ok(text)
    }
}
