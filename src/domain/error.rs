use std::io;

use thiserror::Error;

/// Library-wide error type for git-sage operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// Configuration values failed validation.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Home directory could not be determined.
    #[error("Could not determine the home directory")]
    HomeDirectoryNotFound,

    /// Template name would escape the prompts directory.
    #[error("Invalid prompt name '{0}': must be a plain file name without path separators")]
    InvalidPromptName(String),

    /// Git execution failed.
    #[error("Git error running '{command}': {details}")]
    GitError { command: String, details: String },

    /// YAML parsing error.
    #[error("YAML parse error: {0}")]
    YamlParseError(#[from] serde_yaml::Error),

    /// Fault with no usable description.
    #[error("")]
    Unknown,
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    /// Message suitable for user-facing reports, `None` when the fault carries no text.
    pub fn message(&self) -> Option<String> {
        let text = self.to_string();
        if text.trim().is_empty() { None } else { Some(text) }
    }
}
