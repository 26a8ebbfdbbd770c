use super::sanitize_api_error;
use super::traits::Summarizer;
use super::types::{CompletionRequest, CompletionResponse};
use crate::config::SummarizerConfig;
use crate::error::SummarizerError;
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

/// OpenAI legacy completions endpoint (`/v1/engines/{engine}/completions`).
pub struct OpenAiCompletions {
    /// Pre-computed `"Bearer <token>"` header value.
    cached_auth_header: Option<String>,
    endpoint: String,
    temperature: f64,
    max_tokens: u32,
    client: Client,
}

impl OpenAiCompletions {
    pub fn new(config: &SummarizerConfig) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            cached_auth_header: config
                .api_token
                .as_deref()
                .map(str::trim)
                .filter(|t| !t.is_empty())
                .map(auth_header),
            endpoint: format!(
                "{}/v1/engines/{}/completions",
                config.base_url.trim_end_matches('/'),
                config.instance
            ),
            temperature: config.temperature,
            max_tokens: config.max_tokens,
            client,
        }
    }

    fn build_request<'a>(&self, prompt: &'a str) -> CompletionRequest<'a> {
        CompletionRequest {
            prompt,
            temperature: self.temperature,
            max_tokens: self.max_tokens,
            top_p: 1.0,
            frequency_penalty: 0.0,
            presence_penalty: 0.0,
        }
    }
}

// Tokens copied from older setups already carry the scheme.
fn auth_header(token: &str) -> String {
    if token.starts_with("Bearer ") {
        token.to_string()
    } else {
        format!("Bearer {token}")
    }
}

#[async_trait]
impl Summarizer for OpenAiCompletions {
    fn name(&self) -> &str {
        "OpenAI"
    }

    async fn complete(&self, prompt: &str) -> Result<String, SummarizerError> {
        let auth_header = self
            .cached_auth_header
            .as_ref()
            .ok_or(SummarizerError::MissingToken)?;

        let response = self
            .client
            .post(&self.endpoint)
            .header("Authorization", auth_header)
            .json(&self.build_request(prompt))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<failed to read error body>".to_string());
            return Err(SummarizerError::Api {
                status: status.as_u16(),
                body: sanitize_api_error(&body),
            });
        }

        let completion: CompletionResponse = response.json().await?;
        completion
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.text)
            .ok_or(SummarizerError::EmptyResponse)
    }
}
