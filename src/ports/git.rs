use crate::domain::AppError;

/// Port for the git invocations a review needs.
pub trait Git {
    /// Whether the working directory lies inside a git working tree.
    ///
    /// Any failure to ask, including git being absent, reads as `false`.
    fn is_inside_work_tree(&self) -> bool;

    /// Resolve a symbolic reference, returning the referenced name.
    fn symbolic_ref(&self, reference: &str) -> Result<String, AppError>;

    /// Unified diff for a revision range.
    fn diff(&self, range: &str) -> Result<String, AppError>;
}
