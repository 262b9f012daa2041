//! Terminal outcomes of a review run and the messages reported for them.

use crate::domain::prompt::{COMMON_PROMPT, prompt_display_path};

pub const NOT_A_REPOSITORY_MESSAGE: &str = "当前目录不是 git 仓库";
pub const NO_CHANGES_MESSAGE: &str =
    "没有发现代码变更，请确保：\n1. 当前分支有提交的改动\n2. 当前分支与主分支有差异";
pub const DIFF_FAILURE_MESSAGE: &str = "获取代码差异时发生错误：";
pub const ANALYZING_MESSAGE: &str = "正在分析代码变更...";
pub const REVIEW_SERVICE_FAILURE_MESSAGE: &str = "获取 AI 反馈失败，请检查网络连接和 AI 服务配置";
pub const REVIEW_RESULT_HEADER: &str = "代码审查结果：";
pub const UNEXPECTED_FAULT_MESSAGE: &str = "代码审查过程中发生错误：";
pub const UNKNOWN_FAULT_MESSAGE: &str = "代码审查过程中发生未知错误";

/// How a review run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReviewOutcome {
    /// Working directory is not inside a git working tree.
    NotARepository,
    /// Nothing to review. Not an error.
    NoChanges,
    /// `common` or the named template could not be loaded.
    MissingPromptResource { prompt: String },
    /// The chat service produced no usable answer.
    ReviewServiceFailure,
    /// Review text was printed.
    Completed { response: String },
    /// A collaborator failed unexpectedly; `None` when the fault had no message.
    UnexpectedFault { message: Option<String> },
}

impl ReviewOutcome {
    /// Whether the run ended without an error report.
    pub fn is_success(&self) -> bool {
        matches!(self, ReviewOutcome::NoChanges | ReviewOutcome::Completed { .. })
    }
}

/// Error text naming both template files a review needs.
pub fn missing_prompt_message(prompt: &str) -> String {
    format!(
        "无法加载 prompt 文件，请确认以下文件存在：\n1. {}\n2. {}",
        prompt_display_path(COMMON_PROMPT),
        prompt_display_path(prompt)
    )
}

/// Final report wrapping the chat response.
pub fn review_result_message(response: &str) -> String {
    format!("{}\n{}", REVIEW_RESULT_HEADER, response)
}
