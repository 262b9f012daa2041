mod fake_chat_client;
mod fake_git;
mod memory_prompt_store;
mod recording_logger;

pub use fake_chat_client::{FakeChatClient, FakeChatClientFactory};
pub use fake_git::FakeGit;
pub use memory_prompt_store::MemoryPromptStore;
pub use recording_logger::{LogEntry, RecordingLogger};
