//! Chat service results.

/// Result of one round trip to the chat service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatOutcome {
    /// The service answered with non-empty text.
    Reply(String),
    /// The service answered but the completion was empty.
    Empty,
    /// Transport failure, rejected request, or unreadable response.
    Failed(String),
}

impl ChatOutcome {
    /// Wrap completion text, treating missing or empty text as [`ChatOutcome::Empty`].
    pub fn from_completion(text: Option<String>) -> Self {
        match text {
            Some(text) if !text.is_empty() => ChatOutcome::Reply(text),
            _ => ChatOutcome::Empty,
        }
    }
}
