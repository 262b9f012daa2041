use std::collections::HashMap;
use std::sync::Mutex;

use crate::domain::AppError;
use crate::ports::PromptStore;

#[derive(Default)]
pub struct MemoryPromptStore {
    prompts: HashMap<String, String>,
    unreadable: Vec<String>,
    requested: Mutex<Vec<String>>,
}

impl MemoryPromptStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_prompt(mut self, name: &str, content: &str) -> Self {
        self.prompts.insert(name.to_string(), content.to_string());
        self
    }

    /// Make `name` fail with an I/O error instead of reading as absent.
    pub fn with_unreadable(mut self, name: &str) -> Self {
        self.unreadable.push(name.to_string());
        self
    }

    pub fn requested(&self) -> Vec<String> {
        self.requested.lock().unwrap().clone()
    }
}

impl PromptStore for MemoryPromptStore {
    fn load(&self, name: &str) -> Result<Option<String>, AppError> {
        self.requested.lock().unwrap().push(name.to_string());
        if self.unreadable.iter().any(|n| n == name) {
            return Err(AppError::Io(std::io::Error::new(
                std::io::ErrorKind::PermissionDenied,
                format!("permission denied reading {}", name),
            )));
        }
        Ok(self.prompts.get(name).cloned())
    }
}
