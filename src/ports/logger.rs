/// Sink for user-facing report lines.
pub trait Logger {
    fn info(&self, message: &str);

    /// Report an error, optionally followed by a detail such as the underlying cause.
    fn error(&self, message: &str, detail: Option<&str>);
}
