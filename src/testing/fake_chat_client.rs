use std::sync::{Arc, Mutex};

use crate::domain::{AppError, ChatOutcome};
use crate::ports::{ChatClient, ChatClientFactory};

#[derive(Clone)]
pub struct FakeChatClient {
    pub sent_prompts: Arc<Mutex<Vec<String>>>,
    pub outcome: ChatOutcome,
}

impl FakeChatClient {
    pub fn replying(text: &str) -> Self {
        Self::with_outcome(ChatOutcome::Reply(text.to_string()))
    }

    pub fn with_outcome(outcome: ChatOutcome) -> Self {
        Self { sent_prompts: Arc::new(Mutex::new(Vec::new())), outcome }
    }

    pub fn sent_prompts(&self) -> Vec<String> {
        self.sent_prompts.lock().unwrap().clone()
    }
}

impl ChatClient for FakeChatClient {
    fn send(&self, prompt: &str) -> ChatOutcome {
        self.sent_prompts.lock().unwrap().push(prompt.to_string());
        self.outcome.clone()
    }
}

pub struct FakeChatClientFactory {
    pub client: FakeChatClient,
    pub failure: Option<String>,
    pub created: Mutex<usize>,
}

impl FakeChatClientFactory {
    pub fn new(client: FakeChatClient) -> Self {
        Self { client, failure: None, created: Mutex::new(0) }
    }

    /// Factory whose `create` fails with a configuration error carrying `message`.
    pub fn failing(message: &str) -> Self {
        Self {
            client: FakeChatClient::with_outcome(ChatOutcome::Empty),
            failure: Some(message.to_string()),
            created: Mutex::new(0),
        }
    }

    pub fn created(&self) -> usize {
        *self.created.lock().unwrap()
    }
}

impl ChatClientFactory for FakeChatClientFactory {
    fn create(&self) -> Result<Box<dyn ChatClient>, AppError> {
        *self.created.lock().unwrap() += 1;
        if let Some(message) = &self.failure {
            return Err(AppError::config_error(message.clone()));
        }
        Ok(Box::new(self.client.clone()))
    }
}
