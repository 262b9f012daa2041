//! `config`: show or update the stored chat configuration.

use crate::domain::{AppError, ConfigUpdate, SageConfig};
use crate::ports::ConfigStore;

#[derive(Debug, Clone, PartialEq)]
pub enum ConfigOutcome {
    /// No changes requested; the current configuration.
    Shown(SageConfig),
    /// Changes applied and saved.
    Updated(SageConfig),
}

pub fn execute<S: ConfigStore>(store: &S, update: ConfigUpdate) -> Result<ConfigOutcome, AppError> {
    let mut config = store.load()?;
    if !config.apply(update)? {
        return Ok(ConfigOutcome::Shown(config));
    }
    store.save(&config)?;
    Ok(ConfigOutcome::Updated(config))
}
