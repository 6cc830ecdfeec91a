//! Analyze file use case
//!
//! Classifies a single file picked by the user.

use crate::domain::entities::Verdict;
use crate::domain::repositories::HeaderReader;
use crate::domain::services::Classifier;
use std::path::Path;
use std::sync::Arc;

/// Analyze file use case
pub struct AnalyzeFileUseCase<R: HeaderReader> {
    classifier: Arc<Classifier<R>>,
}

impl<R: HeaderReader> AnalyzeFileUseCase<R> {
    /// Creates a new analyze file use case
    pub fn new(classifier: Arc<Classifier<R>>) -> Self {
        Self { classifier }
    }

    /// Executes the analysis; never fails
    pub fn execute(&self, path: &Path) -> Verdict {
        let verdict = self.classifier.analyze(path);

        if verdict.is_spoofed() {
            tracing::warn!(
                "{} declares {:?} but looks like {}",
                path.display(),
                verdict.declared_extension(),
                verdict.detected_type()
            );
        } else {
            tracing::info!("{}: {}", path.display(), verdict.detected_type());
        }

        verdict
    }
}
