pub mod application;
pub mod core;
pub mod domain;
pub mod infrastructure;
pub mod presentation;

use domain::services::Classifier;
use infrastructure::file_reader::LocalHeaderReader;
use std::path::Path;
use std::sync::LazyLock;

pub use crate::core::AuditError;
pub use domain::entities::{AuditReport, FileSignature, HeaderBytes, UNKNOWN_TYPE, Verdict};
pub use domain::services::SignatureRegistry;

static DEFAULT_CLASSIFIER: LazyLock<Classifier<LocalHeaderReader>> =
    LazyLock::new(Classifier::default);

/// Classifies `path` with the built-in signature table
///
/// ```no_run
/// let verdict = spoofscan::analyze("invoice.pdf");
/// if verdict.is_spoofed() {
///     println!("{}", verdict.summary());
/// }
/// ```
pub fn analyze(path: impl AsRef<Path>) -> Verdict {
    DEFAULT_CLASSIFIER.analyze(path.as_ref())
}
