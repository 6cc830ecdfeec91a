#![no_main]

use libfuzzer_sys::fuzz_target;
use spoofscan::domain::entities::HeaderBytes;
use spoofscan::domain::services::{Classifier, NAME_WIDTH};
use spoofscan::infrastructure::file_reader::LocalHeaderReader;
use std::path::Path;
use std::sync::LazyLock;

static CLASSIFIER: LazyLock<Classifier<LocalHeaderReader>> = LazyLock::new(Classifier::default);

// First byte selects the split between filename and header bytes
fuzz_target!(|data: &[u8]| {
    let Some((&split, rest)) = data.split_first() else {
        return;
    };
    let split = (split as usize).min(rest.len());
    let (name, header) = rest.split_at(split);
    let name = String::from_utf8_lossy(name);

    let header = HeaderBytes::from_bytes(header);
    let verdict = CLASSIFIER.classify(Path::new(name.as_ref()), &header);

    assert_eq!(
        verdict.detected_type(),
        CLASSIFIER
            .registry()
            .detect_linear(header.as_bytes().unwrap_or_default())
            .map_or("Unknown", |sig| sig.label())
    );
    if verdict.is_unknown() {
        assert!(!verdict.is_spoofed());
    }
    let marker = if verdict.is_spoofed() { " [!] SPOOFED  | " } else { " [OK]  | " };
    assert!(verdict.summary().starts_with(marker));
    let name_field: String = verdict.summary()[marker.len()..].chars().take(NAME_WIDTH).collect();
    assert_eq!(name_field.chars().count(), NAME_WIDTH);
});
