//! Audit options DTO

use crate::domain::repositories::ReportWriter;
use crate::infrastructure::persistence::{DEFAULT_REPORT_PATH, JsonReportWriter, TextReportWriter};
use std::path::PathBuf;

/// On-disk layout of the audit report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ReportFormat {
    /// Timestamp header followed by the spoofed summary lines
    #[default]
    Text,
    /// Pretty-printed JSON with counts and spoofed verdicts
    Json,
}

/// Options for auditing a directory
#[derive(Debug, Clone)]
pub struct AuditOptions {
    /// Where the report is written (overwritten on each run)
    pub report_path: PathBuf,
    /// Report layout
    pub format: ReportFormat,
    /// Whether to descend into subdirectories
    pub recursive: bool,
    /// Whether to classify files on the rayon thread pool
    pub parallel: bool,
}

impl Default for AuditOptions {
    fn default() -> Self {
        Self {
            report_path: PathBuf::from(DEFAULT_REPORT_PATH),
            format: ReportFormat::Text,
            recursive: false,
            parallel: true,
        }
    }
}

impl AuditOptions {
    /// Sets the report path
    pub fn with_report_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.report_path = path.into();
        self
    }

    /// Sets the report format
    pub fn with_format(mut self, format: ReportFormat) -> Self {
        self.format = format;
        self
    }

    /// Enables descending into subdirectories
    pub fn recursive(mut self) -> Self {
        self.recursive = true;
        self
    }

    /// Disables parallel classification
    pub fn sequential(mut self) -> Self {
        self.parallel = false;
        self
    }

    /// Builds the writer matching the configured format and path
    pub fn report_writer(&self) -> Box<dyn ReportWriter> {
        match self.format {
            ReportFormat::Text => Box::new(TextReportWriter::new(&self.report_path)),
            ReportFormat::Json => Box::new(JsonReportWriter::new(&self.report_path)),
        }
    }
}
