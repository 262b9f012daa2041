//! `init`: write the bundled prompt templates into `prompts/`.

use std::fs;
use std::path::{Path, PathBuf};

use crate::adapters::embedded_prompts::default_prompts;
use crate::domain::AppError;
use crate::domain::prompt::PROMPTS_DIR;

/// Files touched by `init`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InitOutcome {
    pub written: Vec<PathBuf>,
    /// Existing files left untouched because `force` was not set.
    pub skipped: Vec<PathBuf>,
}

pub fn execute(root: &Path, force: bool) -> Result<InitOutcome, AppError> {
    let prompts_dir = root.join(PROMPTS_DIR);
    fs::create_dir_all(&prompts_dir)?;

    let mut outcome = InitOutcome::default();
    for asset in default_prompts() {
        let path = prompts_dir.join(&asset.file_name);
        if path.exists() && !force {
            outcome.skipped.push(path);
            continue;
        }
        fs::write(&path, asset.content)?;
        outcome.written.push(path);
    }

    Ok(outcome)
}
