//! File signature entity
//!
//! Represents the magic bytes found at offset 0 that identify a specific
//! file type. This is the foundation of spoof detection.

use std::borrow::Cow;
use std::fmt;

/// Label reported when no signature matches the header.
pub const UNKNOWN_TYPE: &str = "Unknown";

/// A file signature: a human-readable type label and its magic-byte prefix
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileSignature {
    /// Label reported for files carrying this signature (e.g. "PNG Image")
    label: Cow<'static, str>,
    /// The header bytes expected at the very start of the file
    header: Cow<'static, [u8]>,
}

impl FileSignature {
    /// Creates a signature from static data, as used by the built-in table
    pub const fn new(label: &'static str, header: &'static [u8]) -> Self {
        Self {
            label: Cow::Borrowed(label),
            header: Cow::Borrowed(header),
        }
    }

    /// Creates a signature from owned data
    pub fn owned(label: impl Into<String>, header: Vec<u8>) -> Self {
        Self {
            label: Cow::Owned(label.into()),
            header: Cow::Owned(header),
        }
    }

    /// Returns the type label
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns the header bytes
    pub fn header(&self) -> &[u8] {
        &self.header
    }

    /// Checks if the given data starts with this signature's header
    pub fn matches_header(&self, data: &[u8]) -> bool {
        !self.header.is_empty() && data.starts_with(&self.header)
    }
}

impl fmt::Display for FileSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:<26} ", self.label)?;
        for (i, byte) in self.header.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{byte:02X}")?;
        }
        Ok(())
    }
}
