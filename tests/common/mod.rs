//! Shared testing utilities for gsg CLI tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Testing harness providing an isolated `$HOME` and git repository.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    /// Create an isolated environment whose work directory is a git repository on `main`
    /// with one commit.
    pub fn new() -> Self {
        let ctx = Self::without_repository();
        ctx.git(&["init", "--initial-branch=main"]);
        ctx.git(&["config", "user.name", "Test User"]);
        ctx.git(&["config", "user.email", "test@example.com"]);
        ctx.git(&["config", "commit.gpgsign", "false"]);
        ctx.write_file("README.md", "# demo\n");
        ctx.commit_all("initial commit");
        ctx
    }

    /// Create an isolated environment whose work directory is a plain directory.
    pub fn without_repository() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");
        fs::create_dir_all(root.path().join("home")).expect("Failed to create test home");
        Self { root, work_dir }
    }

    /// Absolute path to the emulated `$HOME` directory.
    pub fn home(&self) -> PathBuf {
        self.root.path().join("home")
    }

    /// Path to the directory used for CLI invocations.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Build a command for invoking the compiled `gsg` binary within the work directory.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("gsg").expect("Failed to locate gsg binary");
        cmd.current_dir(&self.work_dir)
            .env("HOME", self.home())
            .env("GIT_CEILING_DIRECTORIES", self.root.path())
            .env_remove("GIT_SAGE_API_KEY")
            .env_remove("RUST_LOG");
        cmd
    }

    /// Run git in the work directory, panicking on failure. Returns trimmed stdout.
    pub fn git(&self, args: &[&str]) -> String {
        let output = std::process::Command::new("git")
            .args(args)
            .current_dir(&self.work_dir)
            .env("HOME", self.home())
            .output()
            .expect("Failed to run git");
        assert!(
            output.status.success(),
            "git {} failed: {}",
            args.join(" "),
            String::from_utf8_lossy(&output.stderr)
        );
        String::from_utf8_lossy(&output.stdout).trim().to_string()
    }

    pub fn write_file(&self, relative: &str, content: &str) {
        let path = self.work_dir.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        fs::write(path, content).expect("Failed to write file");
    }

    pub fn commit_all(&self, message: &str) {
        self.git(&["add", "."]);
        self.git(&["commit", "-m", message]);
    }

    /// Check out a new `feature` branch carrying one committed change.
    pub fn commit_feature_change(&self, line: &str) {
        self.git(&["checkout", "-b", "feature"]);
        self.write_file("src/lib.rs", &format!("{}\n", line));
        self.commit_all("feature change");
    }

    /// Write `prompts/<name>.txt` in the work directory.
    pub fn write_prompt(&self, name: &str, content: &str) {
        self.write_file(&format!("prompts/{}.txt", name), content);
    }

    /// Write `~/.git-sage/config.yml`.
    pub fn write_config(&self, content: &str) {
        let dir = self.home().join(".git-sage");
        fs::create_dir_all(&dir).expect("Failed to create config directory");
        fs::write(dir.join("config.yml"), content).expect("Failed to write config");
    }

    /// Point the chat endpoint at `base_url` with a short timeout.
    pub fn configure_endpoint(&self, base_url: &str) {
        self.write_config(&format!(
            "endpoint: {}/v1/chat/completions\nmodel: test-model\napi_key: test-key\ntimeout_secs: 5\n",
            base_url
        ));
    }

    pub fn config_path(&self) -> PathBuf {
        self.home().join(".git-sage/config.yml")
    }
}
