//! Audit directory use case
//!
//! Enumerates the regular files of a directory and classifies each one.
//! Supports both sequential and parallel processing modes; the verdicts
//! always come back in enumeration order.

use crate::application::dto::AuditOptions;
use crate::core::AuditError;
use crate::domain::entities::{AuditReport, Verdict};
use crate::domain::repositories::HeaderReader;
use crate::domain::services::Classifier;
use rayon::prelude::*;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Instant;
use walkdir::WalkDir;

/// Progress callback for audits: `(files done, files total)`
pub type AuditProgressCallback = Box<dyn Fn(usize, usize) + Send + Sync>;

/// Audit directory use case
pub struct AuditDirectoryUseCase<R: HeaderReader> {
    classifier: Arc<Classifier<R>>,
}

impl<R: HeaderReader> AuditDirectoryUseCase<R> {
    /// Creates a new audit directory use case
    pub fn new(classifier: Arc<Classifier<R>>) -> Self {
        Self { classifier }
    }

    /// Executes the audit
    pub fn execute(
        &self,
        directory: &Path,
        options: &AuditOptions,
        progress_callback: Option<AuditProgressCallback>,
    ) -> Result<AuditReport, AuditError> {
        let start_time = Instant::now();
        let files = collect_files(directory, options.recursive)?;
        let total = files.len();

        tracing::info!("Starting audit of {} ({} files)", directory.display(), total);

        let done = AtomicUsize::new(0);
        let analyze = |path: &PathBuf| -> Verdict {
            let verdict = self.classifier.analyze(path);
            let current = done.fetch_add(1, Ordering::Relaxed) + 1;
            if let Some(ref callback) = progress_callback {
                callback(current, total);
            }
            verdict
        };

        let verdicts: Vec<Verdict> = if options.parallel {
            files.par_iter().map(analyze).collect()
        } else {
            files.iter().map(analyze).collect()
        };

        let report = AuditReport::new(directory.to_path_buf(), verdicts);

        tracing::info!(
            "Audit complete: {} of {} files spoofed in {:.2}s",
            report.spoofed_count(),
            report.files_scanned(),
            start_time.elapsed().as_secs_f64()
        );

        Ok(report)
    }

    /// Writes the report with the writer configured in `options`
    pub fn save_report(
        &self,
        report: &AuditReport,
        options: &AuditOptions,
    ) -> Result<PathBuf, AuditError> {
        let saved = options.report_writer().write(report)?;
        tracing::info!("Report saved to {}", saved.display());
        Ok(saved)
    }
}

/// Lists the regular files under `directory`, sorted by name
///
/// Only direct children are returned unless `recursive` is set. Symlinks are
/// not descended, but a symlink to a regular file is listed.
pub fn collect_files(directory: &Path, recursive: bool) -> Result<Vec<PathBuf>, AuditError> {
    let metadata = fs::metadata(directory).map_err(|e| map_root_error(directory, e))?;
    if !metadata.is_dir() {
        return Err(AuditError::NotADirectory(directory.to_path_buf()));
    }
    fs::read_dir(directory).map_err(|e| map_root_error(directory, e))?;

    let max_depth = if recursive { usize::MAX } else { 1 };
    let mut files = Vec::new();

    for entry in WalkDir::new(directory)
        .min_depth(1)
        .max_depth(max_depth)
        .follow_links(false)
        .sort_by_file_name()
    {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                tracing::warn!("skipping unreadable entry: {e}");
                continue;
            }
        };

        let is_file = entry.file_type().is_file()
            || (entry.path_is_symlink() && entry.path().is_file());
        if is_file {
            files.push(entry.into_path());
        }
    }

    Ok(files)
}

fn map_root_error(directory: &Path, e: std::io::Error) -> AuditError {
    match e.kind() {
        ErrorKind::NotFound => AuditError::DirectoryNotFound(directory.to_path_buf()),
        ErrorKind::PermissionDenied => AuditError::PermissionDenied(directory.to_path_buf()),
        _ => AuditError::IoError(e),
    }
}
