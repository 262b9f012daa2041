//! Diff results produced for review.

/// Result of asking git for the branch diff.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiffOutcome {
    /// Non-empty unified diff text.
    Changes(String),
    /// Git succeeded but reported no differences.
    NoChanges,
    /// Git could not produce a diff.
    ToolError(String),
}

impl DiffOutcome {
    /// Classify raw `git diff` output.
    pub fn from_output(output: String) -> Self {
        if output.is_empty() { DiffOutcome::NoChanges } else { DiffOutcome::Changes(output) }
    }
}

/// Three-dot range comparing HEAD with its merge base on `base`.
pub fn three_dot_range(base: &str) -> String {
    format!("{}...HEAD", base)
}
