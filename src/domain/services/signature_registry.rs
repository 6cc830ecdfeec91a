//! Signature registry service
//!
//! Holds the ordered table of file signatures used for type detection.
//! Matching is anchored at offset 0 and the first entry in table order wins;
//! an anchored leftmost-first Aho-Corasick automaton gives exactly that.

use crate::domain::entities::FileSignature;
use aho_corasick::{AhoCorasick, Anchored, Input, MatchKind, StartKind};

/// Known signatures, in priority order
pub const BUILTIN_SIGNATURES: [FileSignature; 8] = [
    FileSignature::new("JPEG Image", &[0xFF, 0xD8, 0xFF]),
    FileSignature::new("PNG Image", &[0x89, 0x50, 0x4E, 0x47]),
    FileSignature::new("PDF Document", &[0x25, 0x50, 0x44, 0x46]),
    FileSignature::new("Windows Executable (EXE)", &[0x4D, 0x5A]),
    FileSignature::new("ZIP Archive", &[0x50, 0x4B, 0x03, 0x04]),
    FileSignature::new("Java Class File", &[0xCA, 0xFE, 0xBA, 0xBE]),
    FileSignature::new("ELF Linux Executable", &[0x7F, 0x45, 0x4C, 0x46]),
    FileSignature::new("RAR Archive", &[0x52, 0x61, 0x72, 0x21, 0x1A, 0x07]),
];

/// Registry of file signatures for file type detection
///
/// # Example
///
/// ```
/// use spoofscan::domain::services::SignatureRegistry;
///
/// let registry = SignatureRegistry::builtin();
/// let png_data = &[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A];
/// let found = registry.detect(png_data).map(|sig| sig.label());
/// assert_eq!(found, Some("PNG Image"));
/// ```
#[derive(Debug)]
pub struct SignatureRegistry {
    signatures: Vec<FileSignature>,
    /// Anchored automaton over the non-empty headers
    pattern_matcher: Option<AhoCorasick>,
    /// Maps pattern index to the index in `signatures`
    pattern_map: Vec<usize>,
}

impl SignatureRegistry {
    /// Creates a registry with the built-in signature table
    pub fn builtin() -> Self {
        Self::from_signatures(BUILTIN_SIGNATURES.to_vec())
    }

    /// Creates a registry over the given signatures, keeping their order
    pub fn from_signatures(signatures: Vec<FileSignature>) -> Self {
        let mut registry = Self {
            signatures,
            pattern_matcher: None,
            pattern_map: Vec::new(),
        };
        registry.build_pattern_matcher();
        registry
    }

    fn build_pattern_matcher(&mut self) {
        let (pattern_map, patterns): (Vec<usize>, Vec<&[u8]>) = self
            .signatures
            .iter()
            .enumerate()
            .filter(|(_, sig)| !sig.header().is_empty())
            .map(|(idx, sig)| (idx, sig.header()))
            .unzip();

        if patterns.is_empty() {
            return;
        }

        match AhoCorasick::builder()
            .match_kind(MatchKind::LeftmostFirst)
            .start_kind(StartKind::Anchored)
            .build(patterns)
        {
            Ok(matcher) => {
                self.pattern_matcher = Some(matcher);
                self.pattern_map = pattern_map;
            }
            Err(e) => {
                tracing::warn!("signature automaton unavailable, using linear scan: {e}");
            }
        }
    }

    /// Returns all signatures in priority order
    pub fn signatures(&self) -> &[FileSignature] {
        &self.signatures
    }

    /// Returns the first signature whose header prefixes `data`
    pub fn detect(&self, data: &[u8]) -> Option<&FileSignature> {
        let Some(matcher) = &self.pattern_matcher else {
            return self.detect_linear(data);
        };

        match matcher.try_find(Input::new(data).anchored(Anchored::Yes)) {
            Ok(found) => found.map(|mat| {
                let idx = self.pattern_map[mat.pattern().as_usize()];
                &self.signatures[idx]
            }),
            Err(e) => {
                tracing::debug!("anchored search failed, using linear scan: {e}");
                self.detect_linear(data)
            }
        }
    }

    /// Linear first-match-wins scan over the table
    pub fn detect_linear(&self, data: &[u8]) -> Option<&FileSignature> {
        self.signatures.iter().find(|sig| sig.matches_header(data))
    }

    /// Returns the number of registered signatures
    pub fn len(&self) -> usize {
        self.signatures.len()
    }

    /// Returns true if no signatures are registered
    pub fn is_empty(&self) -> bool {
        self.signatures.is_empty()
    }
}

impl Default for SignatureRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}
