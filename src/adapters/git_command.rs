use std::path::PathBuf;
use std::process::Command;

use crate::domain::AppError;
use crate::ports::Git;

/// [`Git`] backed by the `git` executable.
#[derive(Debug, Clone)]
pub struct GitCommandAdapter {
    root: PathBuf,
}

impl GitCommandAdapter {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    fn run(&self, args: &[&str]) -> Result<String, AppError> {
        let command_line = format!("git {}", args.join(" "));
        log::debug!("running {}", command_line);

        let output = Command::new("git")
            .args(args)
            .current_dir(&self.root)
            .output()
            .map_err(|e| AppError::GitError {
                command: command_line.clone(),
                details: e.to_string(),
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            return Err(AppError::GitError {
                command: command_line,
                details: if stderr.is_empty() { "Unknown error".to_string() } else { stderr },
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).trim_end().to_string())
    }
}

impl Git for GitCommandAdapter {
    fn is_inside_work_tree(&self) -> bool {
        match self.run(&["rev-parse", "--is-inside-work-tree"]) {
            Ok(_) => true,
            Err(e) => {
                log::debug!("not inside a git repository: {}", e);
                false
            }
        }
    }

    fn symbolic_ref(&self, reference: &str) -> Result<String, AppError> {
        self.run(&["symbolic-ref", reference]).map(|name| name.trim().to_string())
    }

    fn diff(&self, range: &str) -> Result<String, AppError> {
        self.run(&["diff", range])
    }
}
