//! Audit report entity
//!
//! Represents the verdicts collected while auditing one directory.

use super::verdict::Verdict;
use chrono::{DateTime, Local};
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Result of a complete directory audit
#[derive(Debug, Clone, Serialize)]
pub struct AuditReport {
    /// Directory that was audited
    directory: PathBuf,
    /// When the audit finished
    generated_at: DateTime<Local>,
    /// One verdict per regular file, in enumeration order
    verdicts: Vec<Verdict>,
}

impl AuditReport {
    /// Creates a new audit report stamped with the current local time
    pub fn new(directory: PathBuf, verdicts: Vec<Verdict>) -> Self {
        Self::with_timestamp(directory, verdicts, Local::now())
    }

    /// Creates a report with an explicit timestamp
    pub fn with_timestamp(
        directory: PathBuf,
        verdicts: Vec<Verdict>,
        generated_at: DateTime<Local>,
    ) -> Self {
        Self {
            directory,
            generated_at,
            verdicts,
        }
    }

    /// Returns the audited directory
    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// Returns the report timestamp
    pub fn generated_at(&self) -> DateTime<Local> {
        self.generated_at
    }

    /// Returns all verdicts
    pub fn verdicts(&self) -> &[Verdict] {
        &self.verdicts
    }

    /// Returns the verdicts flagged as spoofed, in enumeration order
    pub fn spoofed(&self) -> impl Iterator<Item = &Verdict> {
        self.verdicts.iter().filter(|v| v.is_spoofed())
    }

    /// Returns the number of files analyzed
    pub fn files_scanned(&self) -> usize {
        self.verdicts.len()
    }

    /// Returns the number of spoofed files
    pub fn spoofed_count(&self) -> usize {
        self.spoofed().count()
    }

    /// Returns the number of files whose type could not be determined
    pub fn unknown_count(&self) -> usize {
        self.verdicts.iter().filter(|v| v.is_unknown()).count()
    }

    /// Returns the number of files whose header could not be read
    pub fn unreadable_count(&self) -> usize {
        self.verdicts.iter().filter(|v| v.is_unreadable()).count()
    }

    /// Returns true if no spoofed file was found
    pub fn is_clean(&self) -> bool {
        self.spoofed_count() == 0
    }
}
