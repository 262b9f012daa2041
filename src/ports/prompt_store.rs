use crate::domain::AppError;

/// Port for looking up prompt templates by name.
pub trait PromptStore {
    /// Read the template `name`.
    ///
    /// A template that does not exist is `Ok(None)`; errors are reserved for
    /// templates that exist but cannot be read, or names that are not allowed.
    fn load(&self, name: &str) -> Result<Option<String>, AppError>;
}
