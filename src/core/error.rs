use crate::domain::repositories::ReportError;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur when auditing a directory
#[derive(Error, Debug)]
pub enum AuditError {
    #[error("Directory not found: {}", .0.display())]
    DirectoryNotFound(PathBuf),

    #[error("Not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    #[error("Permission denied: {}", .0.display())]
    PermissionDenied(PathBuf),

    #[error("I/O error: {0}")]
    IoError(#[from] io::Error),

    #[error("Report error: {0}")]
    Report(#[from] ReportError),
}
