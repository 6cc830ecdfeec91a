//! Classifier service
//!
//! Turns a path into a [`Verdict`]: read a bounded header, match it against
//! the signature registry, and compare the result with the declared
//! extension.

use crate::domain::entities::{HeaderBytes, UNKNOWN_TYPE, Verdict};
use crate::domain::repositories::HeaderReader;
use crate::domain::services::SignatureRegistry;
use std::path::Path;
use std::sync::Arc;

/// Width of the filename column in summary lines
pub const NAME_WIDTH: usize = 25;
/// Minimum width of the extension column in summary lines
pub const EXTENSION_WIDTH: usize = 5;

const SPOOFED_MARKER: &str = " [!] SPOOFED ";
const CLEAN_MARKER: &str = " [OK] ";

/// Classifies files by their leading bytes
///
/// Never fails: unreadable files yield an "Unknown", not-spoofed verdict so
/// that a single bad file cannot abort a batch.
pub struct Classifier<R> {
    registry: Arc<SignatureRegistry>,
    reader: R,
}

impl<R: HeaderReader> Classifier<R> {
    /// Creates a classifier over the given registry and header source
    pub fn new(registry: Arc<SignatureRegistry>, reader: R) -> Self {
        Self { registry, reader }
    }

    /// Returns the signature registry
    pub fn registry(&self) -> &SignatureRegistry {
        &self.registry
    }

    /// Reads the header of `path` and classifies it
    pub fn analyze(&self, path: &Path) -> Verdict {
        let header = self.reader.read_header(path);
        if header.is_absent() {
            tracing::debug!("header unreadable: {}", path.display());
        }
        self.classify(path, &header)
    }

    /// Classifies an already-read header; performs no I/O
    pub fn classify(&self, path: &Path, header: &HeaderBytes) -> Verdict {
        let file_name = file_name(path);
        let extension = declared_extension(path);

        let detected = header
            .as_bytes()
            .and_then(|bytes| self.registry.detect(bytes))
            .map_or(UNKNOWN_TYPE, |sig| sig.label());

        let spoofed = is_spoofed(&extension, detected);
        let summary = format_summary(&file_name, &extension, detected, spoofed);

        Verdict::new(
            path.to_path_buf(),
            file_name,
            extension,
            detected.to_string(),
            spoofed,
            header,
            summary,
        )
    }
}

/// Returns the filename component of `path`, or an empty string
pub fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Returns the uppercase text after the last `.` of the filename
///
/// Empty when the name has no dot or ends with one. A leading dot counts, so
/// `.bashrc` declares `BASHRC`.
pub fn declared_extension(path: &Path) -> String {
    file_name(path)
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_uppercase())
        .unwrap_or_default()
}

/// Decides whether `extension` contradicts `detected_type`
///
/// "JPG" is accepted for JPEG labels; no other aliases exist. An empty
/// extension never matches a detected type.
pub fn is_spoofed(extension: &str, detected_type: &str) -> bool {
    if detected_type == UNKNOWN_TYPE {
        return false;
    }

    let extension = extension.to_uppercase();
    let label = detected_type.to_uppercase();

    let contained = !extension.is_empty() && label.contains(&extension);
    let jpg_alias = extension == "JPG" && label.contains("JPEG");

    !(contained || jpg_alias)
}

/// Formats the fixed-width summary line for one file
pub fn format_summary(file_name: &str, extension: &str, detected_type: &str, spoofed: bool) -> String {
    let marker = if spoofed { SPOOFED_MARKER } else { CLEAN_MARKER };
    let name: String = file_name.chars().take(NAME_WIDTH).collect();
    format!(
        "{marker} | {name:<name_width$} | Declared: {extension:<ext_width$} | Real: {detected_type}",
        name_width = NAME_WIDTH,
        ext_width = EXTENSION_WIDTH,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::HEADER_LEN;

    struct FixedReader(HeaderBytes);

    impl HeaderReader for FixedReader {
        fn read_header(&self, _path: &Path) -> HeaderBytes {
            self.0.clone()
        }
    }

    fn classifier(header: HeaderBytes) -> Classifier<FixedReader> {
        Classifier::new(Arc::new(SignatureRegistry::builtin()), FixedReader(header))
    }

    #[test]
    fn exe_named_pdf_is_spoofed() {
        let verdict = classifier(HeaderBytes::from_bytes(&[0x4D, 0x5A, 0x90, 0x00]))
            .analyze(Path::new("/tmp/invoice.pdf"));
        assert_eq!(verdict.detected_type(), "Windows Executable (EXE)");
        assert_eq!(verdict.declared_extension(), "PDF");
        assert!(verdict.is_spoofed());
    }

    #[test]
    fn dot_named_png_is_clean() {
        let verdict = classifier(HeaderBytes::from_bytes(&[0x89, 0x50, 0x4E, 0x47]))
            .analyze(Path::new("/tmp/.png"));
        assert_eq!(verdict.declared_extension(), "PNG");
        assert_eq!(verdict.detected_type(), "PNG Image");
        assert!(!verdict.is_spoofed());
    }

    #[test]
    fn absent_header_is_unknown_and_clean() {
        let verdict = classifier(HeaderBytes::Absent).analyze(Path::new("ghost.exe"));
        assert_eq!(verdict.detected_type(), UNKNOWN_TYPE);
        assert!(!verdict.is_spoofed());
        assert!(verdict.is_unreadable());
    }

    #[test]
    fn extension_rules() {
        assert!(!is_spoofed("PNG", "PNG Image"));
        assert!(!is_spoofed("JPG", "JPEG Image"));
        assert!(!is_spoofed("JPEG", "JPEG Image"));
        assert!(!is_spoofed("image", "PNG Image"));
        assert!(is_spoofed("", "PNG Image"));
        assert!(is_spoofed("TIF", "JPEG Image"));
        assert!(!is_spoofed("", UNKNOWN_TYPE));
        assert!(!is_spoofed("EXE", UNKNOWN_TYPE));
    }

    #[test]
    fn extension_extraction() {
        assert_eq!(declared_extension(Path::new("dir.d/photo.jpg")), "JPG");
        assert_eq!(declared_extension(Path::new("archive.tar.gz")), "GZ");
        assert_eq!(declared_extension(Path::new("README")), "");
        assert_eq!(declared_extension(Path::new(".bashrc")), "BASHRC");
        assert_eq!(declared_extension(Path::new("/tmp/.png")), "PNG");
        assert_eq!(declared_extension(Path::new("trailing.")), "");
        assert_eq!(declared_extension(Path::new("/")), "");
    }

    #[test]
    fn summary_column_widths() {
        let long = "a_very_long_file_name_that_overflows.docx";
        let line = format_summary(long, "DOCX", "ZIP Archive", true);
        assert_eq!(
            line,
            " [!] SPOOFED  | a_very_long_file_name_tha | Declared: DOCX  | Real: ZIP Archive"
        );

        let line = format_summary("a.png", "PNG", "PNG Image", false);
        assert_eq!(
            line,
            " [OK]  | a.png                     | Declared: PNG   | Real: PNG Image"
        );
    }

    #[test]
    fn header_is_bounded() {
        let header = HeaderBytes::from_bytes(&[0u8; 4096]);
        assert_eq!(header.as_bytes().map(<[u8]>::len), Some(HEADER_LEN));
    }
}
