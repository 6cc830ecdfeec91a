//! Verdict entity
//!
//! The outcome of classifying one file: what its name claims, what its
//! header says, and whether the two disagree.

use serde::{Serialize, Serializer};
use std::path::{Path, PathBuf};

/// Maximum number of leading bytes read from a file
pub const HEADER_LEN: usize = 16;

/// The leading bytes of a file, or the fact that they could not be read
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeaderBytes {
    /// Up to [`HEADER_LEN`] bytes; shorter when the file is smaller
    Present(Vec<u8>),
    /// The file could not be opened or read
    Absent,
}

impl HeaderBytes {
    /// Wraps raw bytes, keeping at most [`HEADER_LEN`] of them
    pub fn from_bytes(data: &[u8]) -> Self {
        let len = data.len().min(HEADER_LEN);
        HeaderBytes::Present(data[..len].to_vec())
    }

    /// Returns the bytes if the header was read
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            HeaderBytes::Present(bytes) => Some(bytes),
            HeaderBytes::Absent => None,
        }
    }

    /// Returns true if the header could not be read
    pub fn is_absent(&self) -> bool {
        matches!(self, HeaderBytes::Absent)
    }

    /// Uppercase hex rendering, `None` when absent
    pub fn to_hex(&self) -> Option<String> {
        self.as_bytes().map(hex::encode_upper)
    }
}

/// Result of analyzing a single file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Verdict {
    #[serde(serialize_with = "serialize_path_lossy")]
    path: PathBuf,
    file_name: String,
    declared_extension: String,
    detected_type: String,
    is_spoofed: bool,
    header_hex: Option<String>,
    summary: String,
}

impl Verdict {
    /// Creates a new verdict from already-computed fields
    pub fn new(
        path: PathBuf,
        file_name: String,
        declared_extension: String,
        detected_type: String,
        is_spoofed: bool,
        header: &HeaderBytes,
        summary: String,
    ) -> Self {
        Self {
            path,
            file_name,
            declared_extension,
            detected_type,
            is_spoofed,
            header_hex: header.to_hex(),
            summary,
        }
    }

    /// Returns the analyzed path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the filename component of the path
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// Returns the uppercase extension without its dot (may be empty)
    pub fn declared_extension(&self) -> &str {
        &self.declared_extension
    }

    /// Returns the registry label, or "Unknown"
    pub fn detected_type(&self) -> &str {
        &self.detected_type
    }

    /// Returns true if the extension contradicts the detected type
    pub fn is_spoofed(&self) -> bool {
        self.is_spoofed
    }

    /// Returns true if no signature matched (including unreadable files)
    pub fn is_unknown(&self) -> bool {
        self.detected_type == super::UNKNOWN_TYPE
    }

    /// Returns true if the header could not be read at all
    pub fn is_unreadable(&self) -> bool {
        self.header_hex.is_none()
    }

    /// Returns the header bytes as uppercase hex, if they were read
    pub fn header_hex(&self) -> Option<&str> {
        self.header_hex.as_deref()
    }

    /// Returns the fixed-width summary line
    pub fn summary(&self) -> &str {
        &self.summary
    }
}

fn serialize_path_lossy<S: Serializer>(path: &Path, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&path.to_string_lossy())
}
