use std::sync::Mutex;

use crate::domain::AppError;
use crate::ports::Git;

pub struct FakeGit {
    pub inside_work_tree: bool,
    pub remote_head: Option<String>,
    pub diff_output: Result<String, String>,
    pub diff_ranges: Mutex<Vec<String>>,
}

impl FakeGit {
    /// Repository with no remote default branch and an empty diff.
    pub fn new() -> Self {
        Self {
            inside_work_tree: true,
            remote_head: None,
            diff_output: Ok(String::new()),
            diff_ranges: Mutex::new(Vec::new()),
        }
    }

    pub fn outside_repository() -> Self {
        Self { inside_work_tree: false, ..Self::new() }
    }

    pub fn with_remote_head(mut self, reference: &str) -> Self {
        self.remote_head = Some(reference.to_string());
        self
    }

    pub fn with_diff(mut self, diff: &str) -> Self {
        self.diff_output = Ok(diff.to_string());
        self
    }

    pub fn with_failing_diff(mut self, stderr: &str) -> Self {
        self.diff_output = Err(stderr.to_string());
        self
    }

    pub fn diff_ranges(&self) -> Vec<String> {
        self.diff_ranges.lock().unwrap().clone()
    }
}

impl Git for FakeGit {
    fn is_inside_work_tree(&self) -> bool {
        self.inside_work_tree
    }

    fn symbolic_ref(&self, reference: &str) -> Result<String, AppError> {
        self.remote_head.clone().ok_or_else(|| AppError::GitError {
            command: format!("git symbolic-ref {}", reference),
            details: format!("fatal: ref {} is not a symbolic ref", reference),
        })
    }

    fn diff(&self, range: &str) -> Result<String, AppError> {
        self.diff_ranges.lock().unwrap().push(range.to_string());
        self.diff_output.clone().map_err(|details| AppError::GitError {
            command: format!("git diff {}", range),
            details,
        })
    }
}
