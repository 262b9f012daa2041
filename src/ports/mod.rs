mod chat_client;
mod config_store;
mod git;
mod logger;
mod prompt_store;

pub use chat_client::{ChatClient, ChatClientFactory};
pub use config_store::ConfigStore;
pub use git::Git;
pub use logger::Logger;
pub use prompt_store::PromptStore;
