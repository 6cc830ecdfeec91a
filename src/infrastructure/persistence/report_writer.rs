//! Report writer implementations
//!
//! Writes directory audits to the local filesystem, either as the plain
//! text list of spoofed summary lines or as JSON.

use crate::domain::entities::{AuditReport, Verdict};
use crate::domain::repositories::{ReportError, ReportWriter};
use serde::Serialize;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Default report location, relative to the working directory
pub const DEFAULT_REPORT_PATH: &str = "audit_report.txt";

/// Timestamp layout used in the text report header
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.6f";

/// Renders the text report: a timestamp header, a blank line, then one
/// summary line per spoofed file
pub fn render_text(report: &AuditReport) -> String {
    let lines: Vec<&str> = report.spoofed().map(Verdict::summary).collect();
    format!(
        "Spoofscan Audit - {}\n\n{}",
        report.generated_at().format(TIMESTAMP_FORMAT),
        lines.join("\n")
    )
}

fn write_file(path: &Path, contents: &str) -> Result<PathBuf, ReportError> {
    fs::write(path, contents).map_err(|e| match e.kind() {
        ErrorKind::PermissionDenied => ReportError::PermissionDenied(path.display().to_string()),
        ErrorKind::NotFound => ReportError::DirectoryNotFound(
            path.parent()
                .map(|p| p.display().to_string())
                .unwrap_or_default(),
        ),
        _ => ReportError::IoError(e),
    })?;
    Ok(path.to_path_buf())
}

/// Plain-text report writer, overwriting its destination on every run
#[derive(Debug, Clone)]
pub struct TextReportWriter {
    destination: PathBuf,
}

impl TextReportWriter {
    pub fn new(destination: impl Into<PathBuf>) -> Self {
        Self {
            destination: destination.into(),
        }
    }
}

impl ReportWriter for TextReportWriter {
    fn write(&self, report: &AuditReport) -> Result<PathBuf, ReportError> {
        tracing::info!(
            "writing text report with {} spoofed entries to {}",
            report.spoofed_count(),
            self.destination.display()
        );
        write_file(&self.destination, &render_text(report))
    }

    fn destination(&self) -> &Path {
        &self.destination
    }
}

#[derive(Serialize)]
struct JsonReport<'a> {
    directory: &'a Path,
    generated_at: String,
    files_scanned: usize,
    spoofed_count: usize,
    unknown_count: usize,
    unreadable_count: usize,
    spoofed: Vec<&'a Verdict>,
}

impl<'a> From<&'a AuditReport> for JsonReport<'a> {
    fn from(report: &'a AuditReport) -> Self {
        Self {
            directory: report.directory(),
            generated_at: report.generated_at().to_rfc3339(),
            files_scanned: report.files_scanned(),
            spoofed_count: report.spoofed_count(),
            unknown_count: report.unknown_count(),
            unreadable_count: report.unreadable_count(),
            spoofed: report.spoofed().collect(),
        }
    }
}

/// JSON report writer
#[derive(Debug, Clone)]
pub struct JsonReportWriter {
    destination: PathBuf,
}

impl JsonReportWriter {
    pub fn new(destination: impl Into<PathBuf>) -> Self {
        Self {
            destination: destination.into(),
        }
    }
}

impl ReportWriter for JsonReportWriter {
    fn write(&self, report: &AuditReport) -> Result<PathBuf, ReportError> {
        let json = serde_json::to_string_pretty(&JsonReport::from(report))?;
        tracing::info!("writing JSON report to {}", self.destination.display());
        write_file(&self.destination, &json)
    }

    fn destination(&self) -> &Path {
        &self.destination
    }
}
