//! Local header reader implementation
//!
//! Reads the leading bytes of files on the local filesystem.

use crate::domain::entities::{HEADER_LEN, HeaderBytes};
use crate::domain::repositories::HeaderReader;
use crate::domain::services::{Classifier, SignatureRegistry};
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;
use std::sync::Arc;

/// Reads at most [`HEADER_LEN`] bytes from a local file
///
/// The file handle is dropped before `read_header` returns, whether or not
/// the read succeeded.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalHeaderReader;

impl LocalHeaderReader {
    fn try_read(path: &Path) -> io::Result<Vec<u8>> {
        let file = File::open(path)?;
        let mut header = Vec::with_capacity(HEADER_LEN);
        file.take(HEADER_LEN as u64).read_to_end(&mut header)?;
        Ok(header)
    }
}

impl HeaderReader for LocalHeaderReader {
    fn read_header(&self, path: &Path) -> HeaderBytes {
        match Self::try_read(path) {
            Ok(bytes) => HeaderBytes::Present(bytes),
            Err(e) => {
                tracing::debug!("cannot read header of {}: {e}", path.display());
                HeaderBytes::Absent
            }
        }
    }
}

impl Default for Classifier<LocalHeaderReader> {
    fn default() -> Self {
        Classifier::new(Arc::new(SignatureRegistry::builtin()), LocalHeaderReader)
    }
}
