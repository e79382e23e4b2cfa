//! CLI command handlers, one per file.

mod classify;
mod completions;
mod demo;
mod hosts;
mod interactive;

pub use classify::run_classify;
pub use completions::run_completions;
pub use demo::run_demo;
pub use hosts::run_hosts;
pub use interactive::run_interactive;
