//! Review prompt naming and assembly.

use std::path::{Component, Path};

use crate::domain::AppError;

/// Template shared by every review.
pub const COMMON_PROMPT: &str = "common";

/// Template used when `cr` is invoked without a name.
pub const DEFAULT_PROMPT: &str = "ccr";

/// Directory, relative to the working tree, holding prompt templates.
pub const PROMPTS_DIR: &str = "prompts";

/// Literal line introducing the diff in the assembled request.
pub const DIFF_MARKER: &str = "以下是代码变更：";

const PROMPT_EXTENSION: &str = "txt";

/// Build the request sent to the chat service.
///
/// The layout is fed verbatim to the model, so separators are exact:
/// `common`, newline, `specific`, blank line, [`DIFF_MARKER`], newline, `diff`.
pub fn assemble_review_request(common: &str, specific: &str, diff: &str) -> String {
    format!("{}\n{}\n\n{}\n{}", common, specific, DIFF_MARKER, diff)
}

/// File name backing the template `name`.
pub fn prompt_file_name(name: &str) -> String {
    format!("{}.{}", name, PROMPT_EXTENSION)
}

/// Display path of a template relative to the working tree, e.g. `prompts/ccr.txt`.
pub fn prompt_display_path(name: &str) -> String {
    format!("{}/{}", PROMPTS_DIR, prompt_file_name(name))
}

/// Reject template names that are empty or would resolve outside the prompts directory.
pub fn validate_prompt_name(name: &str) -> Result<(), AppError> {
    if name.trim().is_empty() || name.contains('/') || name.contains('\\') {
        return Err(AppError::InvalidPromptName(name.to_string()));
    }

    let mut components = Path::new(name).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(_)), None) => Ok(()),
        _ => Err(AppError::InvalidPromptName(name.to_string())),
    }
}
