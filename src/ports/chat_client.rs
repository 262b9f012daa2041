//! Chat service port definition.

use crate::domain::{AppError, ChatOutcome};

/// Port for a single prompt/response exchange with the chat service.
pub trait ChatClient {
    /// Send the assembled prompt as one user message.
    fn send(&self, prompt: &str) -> ChatOutcome;
}

/// Builds a chat client on demand, so runs that stop early never need configuration.
pub trait ChatClientFactory {
    fn create(&self) -> Result<Box<dyn ChatClient>, AppError>;
}
