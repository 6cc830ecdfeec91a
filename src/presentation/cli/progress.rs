//! Progress reporting for CLI

use crate::application::AuditProgressCallback;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Arc;

/// Progress reporter using indicatif
pub struct ProgressReporter {
    bar: Arc<ProgressBar>,
}

impl ProgressReporter {
    /// Creates a progress reporter for a directory audit
    pub fn for_audit(total_files: u64) -> Self {
        let bar = ProgressBar::new(total_files);
        let style = ProgressStyle::default_bar()
            .template("Progress: [{bar:20.cyan/blue}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("#>.");
        bar.set_style(style);

        Self { bar: Arc::new(bar) }
    }

    /// Finishes with a message
    pub fn finish(&self, message: &str) {
        self.bar.finish_with_message(message.to_string());
    }

    /// Gets a callback for audit progress
    pub fn audit_callback(&self) -> AuditProgressCallback {
        let bar = Arc::clone(&self.bar);
        // Ticks arrive out of order from parallel workers
        Box::new(move |_current: usize, total: usize| {
            bar.set_length(total as u64);
            bar.inc(1);
        })
    }
}
