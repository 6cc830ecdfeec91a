//! Application layer
//!
//! Use cases and application services that orchestrate domain logic.

mod analyze_file;
mod audit_directory;
pub mod dto;

pub use analyze_file::AnalyzeFileUseCase;
pub use audit_directory::{AuditDirectoryUseCase, AuditProgressCallback, collect_files};
