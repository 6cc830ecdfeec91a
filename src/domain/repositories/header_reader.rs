//! Header reader trait
//!
//! Defines the interface for fetching the leading bytes of a file.

use crate::domain::entities::HeaderBytes;
use std::path::Path;

/// Trait for reading the first bytes of a file
///
/// Implementations must never fail: anything that prevents reading
/// (missing file, permissions, directories, I/O faults) is reported as
/// [`HeaderBytes::Absent`].
pub trait HeaderReader: Send + Sync {
    /// Reads at most [`crate::domain::entities::HEADER_LEN`] bytes from `path`
    fn read_header(&self, path: &Path) -> HeaderBytes;
}
