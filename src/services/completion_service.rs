use crate::utils::AppError;
use serde::{Deserialize, Serialize};

const COMPLETION_API_URL: &str = "https://api.openai.com/v1/chat/completions";
const COMPLETION_MODEL: &str = "gpt-3.5-turbo";

#[derive(Debug, Serialize)]
struct CompletionRequest {
    model: String,
    messages: Vec<PromptMessage>,
}

#[derive(Debug, Serialize, Deserialize)]
struct PromptMessage {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct CompletionResponse {
    choices: Vec<CompletionChoice>,
}

#[derive(Debug, Deserialize)]
struct CompletionChoice {
    message: PromptMessage,
}

/// Client for the external text-completion API. Single-turn prompt in,
/// text out; no streaming and no conversation memory across calls.
#[derive(Clone)]
pub struct CompletionClient {
    client: reqwest::Client,
    api_key: String,
}

impl CompletionClient {
    pub fn new(api_key: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key,
        }
    }

    pub async fn complete(&self, prompt: &str) -> Result<String, AppError> {
        log::info!("🤖 Forwarding chat query to completion API");

        let body = CompletionRequest {
            model: COMPLETION_MODEL.to_string(),
            messages: vec![PromptMessage {
                role: "user".to_string(),
                content: prompt.to_string(),
            }],
        };

        let response = self
            .client
            .post(COMPLETION_API_URL)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| AppError::UpstreamUnavailable(format!("Request failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(AppError::UpstreamUnavailable(format!(
                "Completion API error: {}",
                response.status()
            )));
        }

        let completion: CompletionResponse = response
            .json()
            .await
            .map_err(|e| AppError::UpstreamUnavailable(format!("Failed to parse response: {}", e)))?;

        let text = completion
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .ok_or_else(|| AppError::UpstreamUnavailable("Empty completion response".to_string()))?;

        Ok(text)
    }
}
