//! Directory audit and report tests

use chrono::{Local, TimeZone};
use spoofscan::application::dto::{AuditOptions, ReportFormat};
use spoofscan::application::{AuditDirectoryUseCase, AuditProgressCallback, collect_files};
use spoofscan::domain::repositories::{ReportError, ReportWriter};
use spoofscan::domain::services::Classifier;
use spoofscan::infrastructure::file_reader::LocalHeaderReader;
use spoofscan::infrastructure::persistence::{JsonReportWriter, TextReportWriter, render_text};
use spoofscan::{AuditError, AuditReport};
use std::fs;
use std::path::Path;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use tempfile::TempDir;

const EXE: &[u8] = &[0x4D, 0x5A, 0x90, 0x00];
const PNG: &[u8] = &[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];
const ZIP: &[u8] = &[0x50, 0x4B, 0x03, 0x04];

fn use_case() -> AuditDirectoryUseCase<LocalHeaderReader> {
    AuditDirectoryUseCase::new(Arc::new(Classifier::default()))
}

/// Builds a folder with two spoofed files, two clean ones and a subfolder
fn sample_folder() -> TempDir {
    let dir = TempDir::new().unwrap();
    let root = dir.path();
    fs::write(root.join("invoice.pdf"), EXE).unwrap();
    fs::write(root.join("logo.png"), PNG).unwrap();
    fs::write(root.join("notes.txt"), b"plain text").unwrap();
    fs::write(root.join("README"), PNG).unwrap();
    fs::create_dir(root.join("nested")).unwrap();
    fs::write(root.join("nested").join("cv.docx"), ZIP).unwrap();
    dir
}

fn names(report: &AuditReport) -> Vec<&str> {
    report.verdicts().iter().map(|v| v.file_name()).collect()
}

#[test]
fn test_collect_files_sorted_and_flat() {
    let dir = sample_folder();
    let files = collect_files(dir.path(), false).unwrap();
    let names: Vec<_> = files
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, ["README", "invoice.pdf", "logo.png", "notes.txt"]);
}

#[test]
fn test_collect_files_recursive() {
    let dir = sample_folder();
    let files = collect_files(dir.path(), true).unwrap();
    assert_eq!(files.len(), 5);
    assert!(files.iter().any(|p| p.ends_with("nested/cv.docx")));
}

#[test]
fn test_collect_files_missing_directory() {
    let dir = TempDir::new().unwrap();
    let err = collect_files(&dir.path().join("gone"), false).unwrap_err();
    assert!(matches!(err, AuditError::DirectoryNotFound(_)));
}

#[test]
fn test_collect_files_on_regular_file() {
    let dir = sample_folder();
    let err = collect_files(&dir.path().join("logo.png"), false).unwrap_err();
    assert!(matches!(err, AuditError::NotADirectory(_)));
}

#[test]
fn test_audit_flags_spoofed_files() {
    let dir = sample_folder();
    let report = use_case()
        .execute(dir.path(), &AuditOptions::default(), None)
        .unwrap();

    assert_eq!(report.files_scanned(), 4);
    assert_eq!(report.spoofed_count(), 2);
    assert_eq!(report.unknown_count(), 1);
    assert_eq!(report.unreadable_count(), 0);
    let spoofed: Vec<&str> = report.spoofed().map(|v| v.file_name()).collect();
    assert_eq!(spoofed, ["README", "invoice.pdf"]);
}

#[test]
fn test_parallel_and_sequential_agree() {
    let dir = sample_folder();
    let options = AuditOptions::default().recursive();
    let parallel = use_case().execute(dir.path(), &options, None).unwrap();
    let sequential = use_case()
        .execute(dir.path(), &options.clone().sequential(), None)
        .unwrap();

    assert_eq!(parallel.verdicts(), sequential.verdicts());
    assert_eq!(names(&parallel).len(), 5);
}

#[test]
fn test_progress_reaches_total() {
    let dir = sample_folder();
    let calls = Arc::new(AtomicUsize::new(0));
    let seen_total = Arc::new(AtomicUsize::new(0));

    let calls_cb = Arc::clone(&calls);
    let total_cb = Arc::clone(&seen_total);
    let callback: AuditProgressCallback = Box::new(move |_current: usize, total: usize| {
        calls_cb.fetch_add(1, Ordering::SeqCst);
        total_cb.store(total, Ordering::SeqCst);
    });

    use_case()
        .execute(dir.path(), &AuditOptions::default(), Some(callback))
        .unwrap();
    assert_eq!(calls.load(Ordering::SeqCst), 4);
    assert_eq!(seen_total.load(Ordering::SeqCst), 4);
}

#[test]
fn test_empty_folder_is_clean() {
    let dir = TempDir::new().unwrap();
    let report = use_case()
        .execute(dir.path(), &AuditOptions::default(), None)
        .unwrap();
    assert!(report.is_clean());
    assert_eq!(report.files_scanned(), 0);
}

// ============================================================================
// Reports
// ============================================================================

fn fixed_report(dir: &Path) -> AuditReport {
    let sample = use_case()
        .execute(dir, &AuditOptions::default(), None)
        .unwrap();
    let timestamp = Local.with_ymd_and_hms(2024, 3, 9, 14, 5, 7).unwrap();
    AuditReport::with_timestamp(dir.to_path_buf(), sample.verdicts().to_vec(), timestamp)
}

#[test]
fn test_text_report_layout() {
    let dir = sample_folder();
    let report = fixed_report(dir.path());
    let text = render_text(&report);

    let mut lines = text.lines();
    assert_eq!(
        lines.next(),
        Some("Spoofscan Audit - 2024-03-09 14:05:07.000000")
    );
    assert_eq!(lines.next(), Some(""));
    let rest: Vec<&str> = lines.collect();
    assert_eq!(rest.len(), 2);
    assert!(rest.iter().all(|l| l.starts_with(" [!] SPOOFED ")));
    assert!(rest[1].contains("invoice.pdf"));
    assert!(!text.ends_with('\n'));
}

#[test]
fn test_text_report_overwrites() {
    let dir = sample_folder();
    let out = TempDir::new().unwrap();
    let destination = out.path().join("audit_report.txt");
    fs::write(&destination, "stale contents that are longer than anything else").unwrap();

    let report = fixed_report(dir.path());
    let saved = TextReportWriter::new(&destination).write(&report).unwrap();
    assert_eq!(saved, destination);
    assert_eq!(fs::read_to_string(&destination).unwrap(), render_text(&report));
}

#[test]
fn test_text_report_missing_parent() {
    let dir = sample_folder();
    let out = TempDir::new().unwrap();
    let writer = TextReportWriter::new(out.path().join("no_such_dir").join("r.txt"));
    assert!(writer.write(&fixed_report(dir.path())).is_err());
}

#[test]
fn test_save_report_uses_configured_writer() {
    let dir = sample_folder();
    let out = TempDir::new().unwrap();
    let destination = out.path().join("audit.json");
    let options = AuditOptions::default()
        .with_format(ReportFormat::Json)
        .with_report_path(&destination);

    let report = fixed_report(dir.path());
    let saved = use_case().save_report(&report, &options).unwrap();
    assert_eq!(saved, destination);
    assert!(fs::read_to_string(&destination).unwrap().contains("\"spoofed_count\": 2"));
}

#[test]
fn test_save_report_missing_parent_is_audit_error() {
    let dir = sample_folder();
    let out = TempDir::new().unwrap();
    let options =
        AuditOptions::default().with_report_path(out.path().join("no_such_dir").join("r.txt"));

    let err = use_case()
        .save_report(&fixed_report(dir.path()), &options)
        .unwrap_err();
    assert!(matches!(
        err,
        AuditError::Report(ReportError::DirectoryNotFound(_))
    ));
}

#[test]
fn test_json_report_contents() {
    let dir = sample_folder();
    let out = TempDir::new().unwrap();
    let destination = out.path().join("audit.json");

    JsonReportWriter::new(&destination)
        .write(&fixed_report(dir.path()))
        .unwrap();

    let value: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&destination).unwrap()).unwrap();
    assert_eq!(value["files_scanned"], 4);
    assert_eq!(value["spoofed_count"], 2);
    assert_eq!(value["spoofed"][1]["detected_type"], "Windows Executable (EXE)");
    assert_eq!(value["spoofed"][1]["declared_extension"], "PDF");
    assert_eq!(value["spoofed"][1]["header_hex"], "4D5A9000");
}

#[test]
fn test_options_pick_writer() {
    let options = AuditOptions::default()
        .with_format(ReportFormat::Json)
        .with_report_path("out.json");
    assert_eq!(options.report_writer().destination(), Path::new("out.json"));
    assert_eq!(
        AuditOptions::default().report_writer().destination(),
        Path::new("audit_report.txt")
    );
}
