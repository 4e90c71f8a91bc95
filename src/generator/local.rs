//! Local model server backend
//!
//! Talks to an Ollama-compatible `/api/generate` endpoint over loopback
//! HTTP. Decoding parameters are fixed by configuration; streaming is
//! disabled so one request maps to one complete response.

use crate::config::GeneratorConfig;
use crate::generator::{GeneratorError, GeneratorResult, TextGenerator};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    stream: bool,
    options: GenerateOptions,
}

#[derive(Debug, Serialize)]
struct GenerateOptions {
    temperature: f64,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    response: String,
}

/// Text generator backed by a local model server
#[derive(Debug, Clone)]
pub struct LocalGenerator {
    client: Client,
    api_url: String,
    model: String,
    temperature: f64,
}

impl LocalGenerator {
    /// Creates a local generator from configuration
    ///
    /// # Arguments
    ///
    /// * `config` - Generator configuration (base URL, model, timeout)
    ///
    /// # Returns
    ///
    /// * `Ok(LocalGenerator)` - Ready-to-use backend
    /// * `Err(GeneratorError)` - Failed to build the HTTP client
    pub fn new(config: &GeneratorConfig) -> GeneratorResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            api_url: format!("{}/api/generate", config.base_url.trim_end_matches('/')),
            model: config.model.clone(),
            temperature: config.temperature,
        })
    }
}

impl TextGenerator for LocalGenerator {
    fn label(&self) -> String {
        format!("local model server ({})", self.model)
    }

    async fn generate(&self, prompt: &str) -> GeneratorResult<String> {
        let request = GenerateRequest {
            model: &self.model,
            prompt,
            stream: false,
            options: GenerateOptions {
                temperature: self.temperature,
            },
        };

        let response = self.client.post(&self.api_url).json(&request).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(GeneratorError::Status {
                status: status.as_u16(),
            });
        }

        let body: GenerateResponse = response.json().await?;
        if body.response.trim().is_empty() {
            return Err(GeneratorError::EmptyResponse);
        }

        Ok(body.response)
    }
}
