//! Repository probing, base branch resolution, and diff collection.

use crate::domain::{
    DEFAULT_BASE_BRANCH, DiffOutcome, REMOTE_HEAD_REF, branch_from_symbolic_ref, three_dot_range,
};
use crate::ports::Git;

/// Whether the working directory is inside a git working tree.
pub fn is_git_repository<G: Git + ?Sized>(git: &G) -> bool {
    git.is_inside_work_tree()
}

/// Name of the branch the remote treats as default.
///
/// Never fails: without a readable `origin/HEAD` this is `"main"`.
pub fn main_branch_name<G: Git + ?Sized>(git: &G) -> String {
    match git.symbolic_ref(REMOTE_HEAD_REF) {
        Ok(output) => branch_from_symbolic_ref(&output),
        Err(e) => {
            log::debug!("falling back to '{}': {}", DEFAULT_BASE_BRANCH, e);
            DEFAULT_BASE_BRANCH.to_string()
        }
    }
}

/// Diff of HEAD against its merge base with the main branch.
pub fn git_diff<G: Git + ?Sized>(git: &G) -> DiffOutcome {
    let base = main_branch_name(git);
    match git.diff(&three_dot_range(&base)) {
        Ok(output) => DiffOutcome::from_output(output),
        Err(e) => DiffOutcome::ToolError(e.to_string()),
    }
}
