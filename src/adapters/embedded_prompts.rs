//! Default prompt templates bundled into the binary.

use include_dir::{Dir, include_dir};

static PROMPTS_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/src/assets/prompts");

/// A bundled template file.
#[derive(Debug, Clone)]
pub struct PromptAsset {
    /// File name, e.g. `ccr.txt`.
    pub file_name: String,
    pub content: &'static str,
}

/// All bundled templates, sorted by file name.
pub fn default_prompts() -> Vec<PromptAsset> {
    let mut assets: Vec<PromptAsset> = PROMPTS_DIR
        .files()
        .filter_map(|file| {
            let file_name = file.path().file_name()?.to_string_lossy().to_string();
            let content = file.contents_utf8()?;
            Some(PromptAsset { file_name, content })
        })
        .collect();

    assets.sort_by(|a, b| a.file_name.cmp(&b.file_name));
    assets
}
