//! Prompt templates read from `prompts/<name>.txt` on disk.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::adapters::FilesystemConfigStore;
use crate::domain::AppError;
use crate::domain::prompt::{PROMPTS_DIR, prompt_file_name, validate_prompt_name};
use crate::ports::PromptStore;

/// [`PromptStore`] reading `<root>/prompts` first, then the global prompts directory.
///
/// The global directory comes from the config store and is only resolved when the
/// repository has no copy of the requested template.
#[derive(Debug, Clone)]
pub struct FilesystemPromptStore {
    local_dir: PathBuf,
    global: Option<FilesystemConfigStore>,
}

impl FilesystemPromptStore {
    pub fn for_repository(root: &Path, global: Option<FilesystemConfigStore>) -> Self {
        Self { local_dir: root.join(PROMPTS_DIR), global }
    }
}

fn read_prompt(path: &Path) -> Result<Option<String>, AppError> {
    match fs::read_to_string(path) {
        Ok(content) => {
            log::debug!("loaded prompt from {}", path.display());
            Ok(Some(content))
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(AppError::Io(e)),
    }
}

impl PromptStore for FilesystemPromptStore {
    fn load(&self, name: &str) -> Result<Option<String>, AppError> {
        validate_prompt_name(name)?;
        let file_name = prompt_file_name(name);

        if let Some(content) = read_prompt(&self.local_dir.join(&file_name))? {
            return Ok(Some(content));
        }
        let Some(config) = &self.global else {
            log::debug!("prompt '{}' not found in {}", name, self.local_dir.display());
            return Ok(None);
        };

        let global_dir = config.prompts_dir()?;
        let content = read_prompt(&global_dir.join(&file_name))?;
        if content.is_none() {
            log::debug!("prompt '{}' not found locally or in {}", name, global_dir.display());
        }
        Ok(content)
    }
}
