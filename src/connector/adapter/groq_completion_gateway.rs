use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::application::CompletionGateway;
use crate::domain::{Conversation, DomainError, Turn};

pub const DEFAULT_BASE_URL: &str = "https://api.groq.com/openai/v1";
const COMPLETIONS_PATH: &str = "/chat/completions";
pub const DEFAULT_MODEL: &str = "llama-3.3-70b-versatile";
/// Upper bound on one completion round trip.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Serialize)]
struct ApiRequest<'a> {
    model: &'a str,
    messages: &'a [Turn],
    response_format: ResponseFormat,
}

#[derive(Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    kind: &'static str,
}

#[derive(Deserialize)]
struct ApiResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

/// HTTP client for an OpenAI-compatible chat completions endpoint (Groq by
/// default).
///
/// Every request asks for JSON-mode output (`response_format: json_object`)
/// so the provider itself enforces the `{type, content}` envelope the system
/// prompt describes.
///
/// Configuration is read from the environment by [`GroqCompletionGateway::from_env`]:
///
/// | Variable            | Default                            |
/// |---------------------|------------------------------------|
/// | `GROQ_API_KEY`      | `""` (requests fail authorization) |
/// | `GROQ_BASE_URL`     | `https://api.groq.com/openai/v1`   |
/// | `GROQ_MODEL`        | `llama-3.3-70b-versatile`          |
/// | `GROQ_TIMEOUT_SECS` | `30`                               |
pub struct GroqCompletionGateway {
    client: reqwest::Client,
    api_key: String,
    model: String,
    /// Full endpoint URL (base + COMPLETIONS_PATH).
    url: String,
    timeout: Duration,
}

impl GroqCompletionGateway {
    pub fn new(
        api_key: impl Into<String>,
        model: impl Into<String>,
        base_url: impl Into<String>,
        timeout: Duration,
    ) -> Self {
        let base: String = base_url.into();
        let url = format!("{}{}", base.trim_end_matches('/'), COMPLETIONS_PATH);
        Self {
            client: reqwest::Client::new(),
            api_key: api_key.into(),
            model: model.into(),
            url,
            timeout,
        }
    }

    /// A missing key is not fatal: the gateway is still built and every
    /// translation degrades to the provider-unavailable literal.
    pub fn from_env() -> Self {
        let key = match std::env::var("GROQ_API_KEY") {
            Ok(key) if !key.trim().is_empty() => key,
            _ => {
                warn!("GROQ_API_KEY is not set; natural-language queries will return an error message");
                String::new()
            }
        };
        let base =
            std::env::var("GROQ_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let model = std::env::var("GROQ_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());
        let timeout = std::env::var("GROQ_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.trim().parse::<u64>().ok())
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs)
            .unwrap_or(DEFAULT_TIMEOUT);

        Self::new(key, model, base, timeout)
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

#[async_trait]
impl CompletionGateway for GroqCompletionGateway {
    async fn complete(&self, conversation: &Conversation) -> Result<String, DomainError> {
        let request = ApiRequest {
            model: &self.model,
            messages: conversation.turns(),
            response_format: ResponseFormat {
                kind: "json_object",
            },
        };
        debug!("Sending completion request to {} (model {})", self.url, self.model);

        let response = self
            .client
            .post(&self.url)
            .bearer_auth(&self.api_key)
            .timeout(self.timeout)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    DomainError::generation(format!("request timed out after {:?}", self.timeout))
                } else {
                    DomainError::generation(format!("request failed: {e}"))
                }
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            warn!("Completion API returned {status}: {body}");
            return Err(DomainError::generation(format!("API returned {status}")));
        }

        let api_response: ApiResponse = response
            .json()
            .await
            .map_err(|e| DomainError::generation(format!("failed to parse response: {e}")))?;

        api_response
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content.unwrap_or_default())
            .ok_or_else(|| DomainError::generation("provider returned no choices"))
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}
