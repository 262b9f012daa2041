pub mod branch;
pub mod chat;
pub mod config;
pub mod diff;
pub mod error;
pub mod prompt;
pub mod review;

pub use branch::{DEFAULT_BASE_BRANCH, REMOTE_HEAD_REF, branch_from_symbolic_ref};
pub use chat::ChatOutcome;
pub use config::{ConfigUpdate, SageConfig};
pub use diff::{DiffOutcome, three_dot_range};
pub use error::AppError;
pub use prompt::{COMMON_PROMPT, DEFAULT_PROMPT, assemble_review_request};
pub use review::ReviewOutcome;
