use std::path::PathBuf;

use crate::domain::{AppError, SageConfig};

/// Port for persisting [`SageConfig`].
pub trait ConfigStore {
    /// Load the configuration, falling back to defaults when none is stored.
    fn load(&self) -> Result<SageConfig, AppError>;

    fn save(&self, config: &SageConfig) -> Result<(), AppError>;

    /// Location of the stored configuration.
    fn location(&self) -> Result<PathBuf, AppError>;
}
