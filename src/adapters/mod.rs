pub mod chat_http;
pub mod config_filesystem;
pub mod console_logger;
pub mod embedded_prompts;
pub mod git_command;
pub mod prompt_filesystem;

pub use chat_http::{HttpChatClient, HttpChatClientFactory};
pub use config_filesystem::FilesystemConfigStore;
pub use console_logger::ConsoleLogger;
pub use git_command::GitCommandAdapter;
pub use prompt_filesystem::FilesystemPromptStore;
