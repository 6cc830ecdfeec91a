//! CLI module

mod commands;
mod progress;
mod shell;

pub use commands::{Cli, Commands, log_directive};
pub use progress::ProgressReporter;
pub use shell::{MenuChoice, Shell};
