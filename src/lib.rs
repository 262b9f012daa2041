//! git-sage: review the current branch's changes against the main branch with an AI chat service.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

use std::path::Path;

use adapters::{
    ConsoleLogger, FilesystemConfigStore, FilesystemPromptStore, GitCommandAdapter,
    HttpChatClientFactory,
};
use app::ReviewContext;
use app::commands::{config, init, review};
use ports::{ConfigStore, Logger};

pub use app::commands::config::ConfigOutcome;
pub use app::commands::init::InitOutcome;
pub use domain::{AppError, ConfigUpdate, DEFAULT_PROMPT, ReviewOutcome, SageConfig};

/// Review the current directory's branch using the template `prompt`.
///
/// Progress and results are printed; failures are reported rather than returned.
pub fn review(prompt: &str) -> ReviewOutcome {
    let logger = ConsoleLogger;
    match std::env::current_dir() {
        Ok(root) => review_at(&root, prompt, logger),
        Err(e) => review::report_fault(&logger, &AppError::Io(e)),
    }
}

/// Review the branch checked out at `root`, reporting through `logger`.
///
/// Templates are looked up in `<root>/prompts` and then in the configured
/// global prompts directory. Configuration comes from `~/.git-sage/config.yml`
/// and is read only once the review needs it.
pub fn review_at<L: Logger>(root: &Path, prompt: &str, logger: L) -> ReviewOutcome {
    let config = FilesystemConfigStore::from_home();
    let ctx = ReviewContext::new(
        GitCommandAdapter::new(root.to_path_buf()),
        FilesystemPromptStore::for_repository(root, Some(config.clone())),
        HttpChatClientFactory::new(config),
        logger,
    );

    review::execute(&ctx, prompt)
}

/// Write the bundled prompt templates into `./prompts`.
pub fn init(force: bool) -> Result<InitOutcome, AppError> {
    let root = std::env::current_dir()?;
    init_at(&root, force)
}

/// Write the bundled prompt templates into `<root>/prompts`.
pub fn init_at(root: &Path, force: bool) -> Result<InitOutcome, AppError> {
    let outcome = init::execute(root, force)?;
    for path in &outcome.written {
        println!("✅ Created {}", display_relative(root, path));
    }
    for path in &outcome.skipped {
        println!(
            "⏭️  Skipped existing {} (use --force to overwrite)",
            display_relative(root, path)
        );
    }
    Ok(outcome)
}

/// Show the configuration, or apply and save `update` when it sets any field.
pub fn configure(update: ConfigUpdate) -> Result<ConfigOutcome, AppError> {
    let store = FilesystemConfigStore::from_home();
    let location = store.location()?;
    let outcome = config::execute(&store, update)?;
    match &outcome {
        ConfigOutcome::Shown(current) => {
            println!("Configuration ({}):", location.display());
            println!("{}", current.describe());
        }
        ConfigOutcome::Updated(_) => {
            println!("✅ Saved configuration to {}", location.display());
        }
    }
    Ok(outcome)
}

fn display_relative(root: &Path, path: &Path) -> String {
    path.strip_prefix(root).unwrap_or(path).display().to_string()
}
