//! Base branch naming rules.

/// Branch used whenever the remote default branch cannot be determined.
pub const DEFAULT_BASE_BRANCH: &str = "main";

/// Symbolic reference pointing at the remote's default branch.
pub const REMOTE_HEAD_REF: &str = "refs/remotes/origin/HEAD";

/// Extract the branch name from `git symbolic-ref` output.
///
/// Takes the trailing `/`-separated segment, so `refs/remotes/origin/develop`
/// yields `develop`. Blank output or a trailing slash falls back to
/// [`DEFAULT_BASE_BRANCH`].
pub fn branch_from_symbolic_ref(output: &str) -> String {
    match output.trim().rsplit('/').next() {
        Some(segment) if !segment.is_empty() => segment.to_string(),
        _ => DEFAULT_BASE_BRANCH.to_string(),
    }
}
