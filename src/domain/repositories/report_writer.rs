//! Report writer trait
//!
//! Defines the interface for persisting a directory audit.

use crate::domain::entities::AuditReport;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur when writing an audit report
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    #[error("Directory not found: {0}")]
    DirectoryNotFound(String),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Trait for writing audit reports to storage
///
/// # Example
///
/// ```ignore
/// let writer = TextReportWriter::new("audit_report.txt");
/// let saved = writer.write(&report)?;
/// println!("Report saved to {}", saved.display());
/// ```
pub trait ReportWriter: Send + Sync {
    /// Writes the report, replacing any previous one, and returns its path
    fn write(&self, report: &AuditReport) -> Result<PathBuf, ReportError>;

    /// Returns the destination path
    fn destination(&self) -> &Path;
}
