pub mod commands;
mod context;
pub mod repository;

pub use context::ReviewContext;
