//! YAML configuration file under the user's home directory.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::domain::config::{API_KEY_ENV, CONFIG_DIR_NAME, CONFIG_FILE_NAME, parse_config_content};
use crate::domain::{AppError, SageConfig};
use crate::ports::ConfigStore;

/// [`ConfigStore`] persisting to `<dir>/config.yml`.
///
/// Nothing is read until the first `load`, so callers that stop early never touch the file.
#[derive(Debug, Clone)]
pub struct FilesystemConfigStore {
    dir: Option<PathBuf>,
}

impl FilesystemConfigStore {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir: Some(dir) }
    }

    /// Store rooted at `~/.git-sage`. An unknown home directory fails on first use.
    pub fn from_home() -> Self {
        Self { dir: dirs::home_dir().map(|home| home.join(CONFIG_DIR_NAME)) }
    }

    fn dir(&self) -> Result<&Path, AppError> {
        self.dir.as_deref().ok_or(AppError::HomeDirectoryNotFound)
    }

    /// Global prompts directory: `prompts_dir` from the config, else `<dir>/prompts`.
    pub fn prompts_dir(&self) -> Result<PathBuf, AppError> {
        match self.load()?.prompts_dir {
            Some(dir) => Ok(dir),
            None => Ok(self.dir()?.join("prompts")),
        }
    }

    /// Load the stored config and apply the `GIT_SAGE_API_KEY` override.
    pub fn load_effective(&self) -> Result<SageConfig, AppError> {
        let mut config = self.load()?;
        config.apply_api_key_override(std::env::var(API_KEY_ENV).ok());
        Ok(config)
    }
}

impl ConfigStore for FilesystemConfigStore {
    fn load(&self) -> Result<SageConfig, AppError> {
        let path = self.location()?;
        match fs::read_to_string(&path) {
            Ok(content) => parse_config_content(&content),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                log::debug!("no config at {}, using defaults", path.display());
                Ok(SageConfig::default())
            }
            Err(e) => Err(AppError::Io(e)),
        }
    }

    fn save(&self, config: &SageConfig) -> Result<(), AppError> {
        config.validate()?;
        fs::create_dir_all(self.dir()?)?;
        let content = serde_yaml::to_string(config)?;
        fs::write(self.location()?, content)?;
        Ok(())
    }

    fn location(&self) -> Result<PathBuf, AppError> {
        Ok(self.dir()?.join(CONFIG_FILE_NAME))
    }
}
