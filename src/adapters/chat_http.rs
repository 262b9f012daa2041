//! Chat completions client using reqwest.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::adapters::FilesystemConfigStore;
use crate::domain::{AppError, ChatOutcome, SageConfig};
use crate::ports::{ChatClient, ChatClientFactory};

/// HTTP client for an OpenAI-compatible `chat/completions` endpoint.
#[derive(Clone)]
pub struct HttpChatClient {
    api_key: String,
    endpoint: Url,
    model: String,
    temperature: f32,
    client: Client,
}

impl std::fmt::Debug for HttpChatClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpChatClient")
            .field("endpoint", &self.endpoint)
            .field("model", &self.model)
            .field("temperature", &self.temperature)
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}

impl HttpChatClient {
    pub fn new(config: &SageConfig) -> Result<Self, AppError> {
        config.validate()?;
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AppError::Configuration(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            api_key: config.api_key.clone(),
            endpoint: config.endpoint.clone(),
            model: config.model.clone(),
            temperature: config.temperature,
            client,
        })
    }
}

#[derive(Debug, Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    messages: Vec<Message<'a>>,
    temperature: f32,
    stream: bool,
}

#[derive(Debug, Serialize)]
struct Message<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct CompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: Option<ResponseMessage>,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    #[serde(default)]
    content: Option<String>,
}

impl ChatClient for HttpChatClient {
    fn send(&self, prompt: &str) -> ChatOutcome {
        let request = CompletionRequest {
            model: &self.model,
            messages: vec![Message { role: "user", content: prompt }],
            temperature: self.temperature,
            stream: false,
        };

        match self.send_request(&request) {
            Ok(content) => ChatOutcome::from_completion(content),
            Err(detail) => {
                log::warn!("chat request to {} failed: {}", self.endpoint, detail);
                ChatOutcome::Failed(detail)
            }
        }
    }
}

impl HttpChatClient {
    fn send_request(&self, request: &CompletionRequest<'_>) -> Result<Option<String>, String> {
        let response = self
            .client
            .post(self.endpoint.clone())
            .header(AUTHORIZATION, format!("Bearer {}", self.api_key))
            .header(CONTENT_TYPE, "application/json")
            .json(request)
            .send()
            .map_err(|e| format!("HTTP request failed: {}", e))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().unwrap_or_else(|_| "Unknown error".to_string());
            return Err(format!("API error ({}): {}", status.as_u16(), error_text));
        }

        let completion: CompletionResponse =
            response.json().map_err(|e| format!("Failed to parse response: {}", e))?;

        Ok(completion
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message)
            .and_then(|message| message.content))
    }
}

/// Builds [`HttpChatClient`]s, loading the configuration only when a client is requested.
#[derive(Debug, Clone)]
pub struct HttpChatClientFactory {
    store: FilesystemConfigStore,
}

impl HttpChatClientFactory {
    pub fn new(store: FilesystemConfigStore) -> Self {
        Self { store }
    }
}

impl ChatClientFactory for HttpChatClientFactory {
    fn create(&self) -> Result<Box<dyn ChatClient>, AppError> {
        let config = self.store.load_effective()?;
        Ok(Box::new(HttpChatClient::new(&config)?))
    }
}
